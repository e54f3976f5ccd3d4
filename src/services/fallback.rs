use chrono::{DateTime, Utc};
use serde::Serialize;
use tracing::{info, warn};

use crate::calculator::ResultRecord;
use crate::form::FormPayload;
use crate::services::result_api::{LocalCalculator, ResultApi};

/// Which path produced a record.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum ResultSource {
    Remote,
    Local,
}

/// A record together with where and when it was produced.
#[derive(Debug, Clone, Serialize)]
pub struct Outcome {
    pub record: ResultRecord,
    pub source: ResultSource,
    pub computed_at: DateTime<Utc>,
}

impl Outcome {
    pub fn local(form: &FormPayload) -> Self {
        Self {
            record: LocalCalculator.compute(form),
            source: ResultSource::Local,
            computed_at: Utc::now(),
        }
    }
}

/// Asks `api` for a result and falls back to the local computation on any
/// error. Never fails.
///
/// The remote record is taken as returned; its grade is not re-checked
/// against the local thresholds.
#[tracing::instrument(skip_all, fields(roll = form.roll.as_deref().unwrap_or("")))]
pub async fn calculate_with_fallback<A: ResultApi + ?Sized>(api: &A, form: &FormPayload) -> Outcome {
    match api.calculate(form).await {
        Ok(record) => {
            info!(grade = %record.grade, "Result received from endpoint");
            Outcome {
                record,
                source: ResultSource::Remote,
                computed_at: Utc::now(),
            }
        }
        Err(e) => {
            warn!(error = %e, "Endpoint failed, falling back to local calculation");
            Outcome::local(form)
        }
    }
}
