//! Application state module

mod app_state;
mod backdrop_state;
mod forms;
mod spotlight;
mod submission;

pub use app_state::*;
pub use backdrop_state::*;
pub use forms::*;
pub use spotlight::*;
pub use submission::*;
