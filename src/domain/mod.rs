//! Core domain types for ParadisePlanner

mod madness;
mod note;
mod profile;
mod task;

pub use madness::MadnessEvent;
pub use note::Note;
pub use profile::Profile;
pub use task::{Difficulty, Task};
