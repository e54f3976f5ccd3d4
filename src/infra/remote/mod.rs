//! Client for the remote result endpoint.

mod client;

pub use client::RemoteResultClient;
