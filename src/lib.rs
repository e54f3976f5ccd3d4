pub mod calculator;
pub mod config;
pub mod error;
pub mod fetch;
pub mod form;
pub mod infra;
pub mod output;
pub mod server;
pub mod services;
