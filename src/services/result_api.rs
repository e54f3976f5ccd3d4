//! Trait for anything that can turn a submitted form into a result record.

use anyhow::Result;

use crate::calculator::ResultRecord;
use crate::form::FormPayload;

/// Abstraction over a result provider (the remote endpoint, or the local
/// calculator).
#[async_trait::async_trait]
pub trait ResultApi: Send + Sync {
    /// Returns the computed result for one submission.
    async fn calculate(&self, form: &FormPayload) -> Result<ResultRecord>;
}

/// Computes results in-process. Never fails: marks that do not parse count
/// as 0 and every mark is clamped.
#[derive(Debug, Clone, Copy, Default)]
pub struct LocalCalculator;

impl LocalCalculator {
    pub fn compute(&self, form: &FormPayload) -> ResultRecord {
        form.to_input_lenient().compute()
    }
}

#[async_trait::async_trait]
impl ResultApi for LocalCalculator {
    async fn calculate(&self, form: &FormPayload) -> Result<ResultRecord> {
        Ok(self.compute(form))
    }
}
