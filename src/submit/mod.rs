//! Submission backends

mod simulated;
mod traits;

pub use simulated::SimulatedSubmitter;
pub use traits::Submitter;

#[cfg(test)]
pub use traits::MockSubmitter;
