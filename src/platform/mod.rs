//! Platform abstraction layer
//!
//! Host-facing pieces that sit outside the deterministic sim:
//! - Keyboard state and the shoot latch
//! - Frame timestamps to elapsed milliseconds

pub mod input;
pub mod time;

pub use input::{InputState, Key};
pub use time::FrameClock;
