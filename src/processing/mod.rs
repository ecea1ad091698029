//! Sample retention and change-detection modules

pub mod buffer;
pub mod change;

pub use buffer::SampleBuffer;
pub use change::{evaluate, ChangeVerdict};
