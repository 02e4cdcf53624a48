//! Trait abstraction for the submission backend to enable mocking in tests

use crate::state::{FormData, Receipt};
use async_trait::async_trait;

/// Accepts a validated sign-up. There is no failure path: the call always
/// resolves to a receipt.
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait Submitter: Send + Sync {
    /// Submit the form and wait for confirmation
    async fn submit(&self, form: FormData) -> Receipt;
}
