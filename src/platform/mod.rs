//! Platform abstraction layer
//!
//! Handles the keyboard and window-close signal behind [`Keyboard`], so the
//! game logic never touches a windowing crate.

pub mod input;

pub use input::{FrameInput, Key, Keyboard};
