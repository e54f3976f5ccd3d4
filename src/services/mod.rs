//! Where result records come from.
//!
//! [`ResultApi`] abstracts over a result provider. [`RemoteResultClient`]
//! asks the result endpoint, [`LocalCalculator`] computes in-process, and
//! [`calculate_with_fallback`] chains the two.
//!
//! [`RemoteResultClient`]: crate::infra::remote::RemoteResultClient

mod fallback;
mod result_api;

pub use fallback::{Outcome, ResultSource, calculate_with_fallback};
pub use result_api::{LocalCalculator, ResultApi};
