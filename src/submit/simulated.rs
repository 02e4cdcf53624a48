//! Submission backend that only waits

use super::traits::Submitter;
use crate::state::{Field, FormData, Receipt};
use async_trait::async_trait;
use std::time::Duration;

/// Stands in for a network call with a fixed delay
#[derive(Debug, Clone)]
pub struct SimulatedSubmitter {
    delay: Duration,
}

impl SimulatedSubmitter {
    pub fn new(delay: Duration) -> Self {
        Self { delay }
    }
}

#[async_trait]
impl Submitter for SimulatedSubmitter {
    async fn submit(&self, form: FormData) -> Receipt {
        tracing::debug!(
            delay_ms = self.delay.as_millis() as u64,
            fields = ?filled_fields(&form),
            "Simulating submission"
        );
        tokio::time::sleep(self.delay).await;
        Receipt::issue()
    }
}

/// Keys of the non-empty fields. Values stay out of the logs.
fn filled_fields(form: &FormData) -> Vec<&'static str> {
    Field::ALL
        .into_iter()
        .filter(|field| !form.get(*field).is_empty())
        .map(Field::key)
        .collect()
}
