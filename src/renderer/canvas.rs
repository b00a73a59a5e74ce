//! Drawing capability consumed by the screens

use glam::Vec2;

use crate::sim::Rect;

/// Textured elements; the backend owns the actual textures
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Sprite {
    Paddle,
    Ball,
    Brick,
}

impl Sprite {
    pub const ALL: [Sprite; 3] = [Sprite::Paddle, Sprite::Ball, Sprite::Brick];

    /// Asset file name inside the resource directory
    pub fn file_name(self) -> &'static str {
        match self {
            Sprite::Paddle => "paddle.png",
            Sprite::Ball => "ball.png",
            Sprite::Brick => "brick.png",
        }
    }

    /// Unscaled size to draw when the texture is unavailable
    pub fn fallback_size(self) -> Vec2 {
        match self {
            Sprite::Paddle => Vec2::new(100.0, 25.0),
            Sprite::Ball => Vec2::new(20.0, 20.0),
            Sprite::Brick => Vec2::new(40.0, 20.0),
        }
    }
}

/// Text faces
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FontFace {
    /// Large display font for headings
    Title,
    /// Backend default font
    Default,
}

impl FontFace {
    /// Font file inside the resource directory, if the face needs one
    pub fn file_name(self) -> Option<&'static str> {
        match self {
            FontFace::Title => Some("title.ttf"),
            FontFace::Default => None,
        }
    }
}

/// Drawing primitives, all in screen pixels with a top-left origin
pub trait Canvas {
    fn clear(&mut self, color: [f32; 4]);
    /// Draw a sprite with its top-left corner at `pos`
    fn sprite(&mut self, sprite: Sprite, pos: Vec2, scale: f32, tint: [f32; 4]);
    fn fill_rect(&mut self, rect: Rect, color: [f32; 4]);
    /// Draw text with its top-left corner at `pos`
    fn text(&mut self, text: &str, pos: Vec2, size: f32, face: FontFace, color: [f32; 4]);
}

/// One recorded drawing call
#[derive(Debug, Clone, PartialEq)]
pub enum DrawCommand {
    Clear([f32; 4]),
    Sprite {
        sprite: Sprite,
        pos: Vec2,
        scale: f32,
        tint: [f32; 4],
    },
    Rect {
        rect: Rect,
        color: [f32; 4],
    },
    Text {
        text: String,
        pos: Vec2,
        size: f32,
        face: FontFace,
        color: [f32; 4],
    },
}

/// A canvas that records what would have been drawn
#[derive(Debug, Clone, Default)]
pub struct DrawList {
    pub commands: Vec<DrawCommand>,
}

impl DrawList {
    pub fn clear_commands(&mut self) {
        self.commands.clear();
    }

    pub fn texts(&self) -> impl Iterator<Item = &str> {
        self.commands.iter().filter_map(|cmd| match cmd {
            DrawCommand::Text { text, .. } => Some(text.as_str()),
            _ => None,
        })
    }

    pub fn has_text(&self, needle: &str) -> bool {
        self.texts().any(|text| text == needle)
    }

    pub fn sprite_count(&self, sprite: Sprite) -> usize {
        self.commands
            .iter()
            .filter(|cmd| matches!(cmd, DrawCommand::Sprite { sprite: s, .. } if *s == sprite))
            .count()
    }

    pub fn rects(&self) -> impl Iterator<Item = (&Rect, &[f32; 4])> {
        self.commands.iter().filter_map(|cmd| match cmd {
            DrawCommand::Rect { rect, color } => Some((rect, color)),
            _ => None,
        })
    }
}

impl Canvas for DrawList {
    fn clear(&mut self, color: [f32; 4]) {
        self.commands.push(DrawCommand::Clear(color));
    }

    fn sprite(&mut self, sprite: Sprite, pos: Vec2, scale: f32, tint: [f32; 4]) {
        self.commands.push(DrawCommand::Sprite {
            sprite,
            pos,
            scale,
            tint,
        });
    }

    fn fill_rect(&mut self, rect: Rect, color: [f32; 4]) {
        self.commands.push(DrawCommand::Rect { rect, color });
    }

    fn text(&mut self, text: &str, pos: Vec2, size: f32, face: FontFace, color: [f32; 4]) {
        self.commands.push(DrawCommand::Text {
            text: text.to_owned(),
            pos,
            size,
            face,
            color,
        });
    }
}
