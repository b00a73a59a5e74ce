//! Keyboard polling
//!
//! Two query kinds, as most game backends offer them:
//! - `is_down`: held this frame (movement)
//! - `is_pressed`: went down this frame (everything else)

use crate::sim::TickInput;

/// Keys the game reacts to
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Key {
    Left,
    Right,
    /// Launch the ball
    Space,
    /// Start / advance
    Enter,
    /// Pause toggle
    P,
    /// Save
    S,
    /// Load
    L,
}

/// Source of keyboard state for the current frame
pub trait Keyboard {
    fn is_down(&self, key: Key) -> bool;
    fn is_pressed(&self, key: Key) -> bool;
    /// The window's close button was hit
    fn close_requested(&self) -> bool;
}

/// Everything the game reads from the keyboard in one frame
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct FrameInput {
    pub left_held: bool,
    pub right_held: bool,
    pub launch: bool,
    pub confirm: bool,
    pub pause: bool,
    pub save: bool,
    pub load: bool,
    pub close: bool,
}

impl FrameInput {
    pub fn poll(keyboard: &impl Keyboard) -> Self {
        Self {
            left_held: keyboard.is_down(Key::Left),
            right_held: keyboard.is_down(Key::Right),
            launch: keyboard.is_pressed(Key::Space),
            confirm: keyboard.is_pressed(Key::Enter),
            pause: keyboard.is_pressed(Key::P),
            save: keyboard.is_pressed(Key::S),
            load: keyboard.is_pressed(Key::L),
            close: keyboard.close_requested(),
        }
    }

    /// Fold a newer poll into this one
    ///
    /// Held keys take the newest state; presses accumulate until consumed, so
    /// a rendered frame that runs no simulation frame does not lose them.
    pub fn merge(&mut self, newer: &FrameInput) {
        self.left_held = newer.left_held;
        self.right_held = newer.right_held;
        self.launch |= newer.launch;
        self.confirm |= newer.confirm;
        self.pause |= newer.pause;
        self.save |= newer.save;
        self.load |= newer.load;
        self.close |= newer.close;
    }

    /// Drop the edge-triggered presses once a frame has consumed them
    pub fn clear_presses(&mut self) {
        *self = Self {
            left_held: self.left_held,
            right_held: self.right_held,
            close: self.close,
            ..Self::default()
        };
    }

    /// The part the simulation step needs
    pub fn tick_input(&self) -> TickInput {
        TickInput {
            left: self.left_held,
            right: self.right_held,
            launch: self.launch,
        }
    }
}
