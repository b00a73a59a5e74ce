//! Colors for game elements (RGBA, 0.0 - 1.0)

pub const BLACK: [f32; 4] = [0.0, 0.0, 0.0, 1.0];
pub const WHITE: [f32; 4] = [1.0, 1.0, 1.0, 1.0];
pub const RED: [f32; 4] = [0.902, 0.161, 0.216, 1.0];
pub const DARK_GREEN: [f32; 4] = [0.0, 0.459, 0.173, 1.0];
pub const GRAY: [f32; 4] = [0.51, 0.51, 0.51, 1.0];
pub const DARK_GRAY: [f32; 4] = [0.314, 0.314, 0.314, 1.0];
pub const BLUE: [f32; 4] = [0.0, 0.475, 0.945, 1.0];

/// Screen backgrounds
pub const MENU_BACKGROUND: [f32; 4] = BLACK;
pub const PLAY_BACKGROUND: [f32; 4] = BLUE;

/// Life markers in the HUD
pub const LIFE: [f32; 4] = RED;

use crate::sim::BrickShade;

/// Tint for a brick or its debris
pub fn shade(shade: BrickShade) -> [f32; 4] {
    match shade {
        BrickShade::Gray => GRAY,
        BrickShade::DarkGray => DARK_GRAY,
    }
}
