//! Rendering module
//!
//! Screens are laid out in `scene` against the [`Canvas`] trait; a window
//! backend implements it. [`DrawList`] records commands instead of drawing.

pub mod canvas;
pub mod colors;
pub mod scene;

pub use canvas::{Canvas, DrawCommand, DrawList, FontFace, Sprite};
pub use scene::{draw_game_over, draw_play, draw_title};
