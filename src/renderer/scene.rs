//! Per-screen layouts

use glam::Vec2;

use super::canvas::{Canvas, FontFace, Sprite};
use super::colors;
use crate::consts::SCREEN_HEIGHT;
use crate::sim::{BrickShade, GameState, Rect};

const HEADING_POS: Vec2 = Vec2::new(160.0, 100.0);
const HEADING_SIZE: f32 = 100.0;
const PLAY_PROMPT_POS: Vec2 = Vec2::new(100.0, 300.0);
const LOAD_PROMPT_POS: Vec2 = Vec2::new(100.0, 400.0);
const PROMPT_SIZE: f32 = 50.0;

const PAUSED_POS: Vec2 = Vec2::new(160.0, 300.0);
const SAVED_POS: Vec2 = Vec2::new(600.0, 500.0);
const SAVED_SIZE: f32 = 20.0;

const LIFE_SIZE: f32 = 30.0;
const LIFE_SPACING: f32 = 40.0;
const LIFE_MARGIN: f32 = 20.0;
const BRICK_SPRITE_SCALE: f32 = 2.0;

/// Title screen; prompts only show during the visible half of the blink
pub fn draw_title(canvas: &mut dyn Canvas, prompt_visible: bool) {
    canvas.clear(colors::MENU_BACKGROUND);
    canvas.text(
        "Breakout",
        HEADING_POS,
        HEADING_SIZE,
        FontFace::Title,
        colors::RED,
    );
    if prompt_visible {
        draw_play_prompt(canvas);
        canvas.text(
            "press [L] to load game",
            LOAD_PROMPT_POS,
            PROMPT_SIZE,
            FontFace::Default,
            colors::DARK_GREEN,
        );
    }
}

pub fn draw_game_over(canvas: &mut dyn Canvas, prompt_visible: bool) {
    canvas.clear(colors::MENU_BACKGROUND);
    canvas.text(
        "Game Over",
        HEADING_POS,
        HEADING_SIZE,
        FontFace::Title,
        colors::RED,
    );
    if prompt_visible {
        draw_play_prompt(canvas);
    }
}

fn draw_play_prompt(canvas: &mut dyn Canvas) {
    canvas.text(
        "press [enter] to play",
        PLAY_PROMPT_POS,
        PROMPT_SIZE,
        FontFace::Default,
        colors::DARK_GREEN,
    );
}

/// Play field, HUD and overlays
pub fn draw_play(canvas: &mut dyn Canvas, state: &GameState, paused: bool, show_saved: bool) {
    canvas.clear(colors::PLAY_BACKGROUND);

    canvas.sprite(Sprite::Paddle, state.paddle.pos, 1.0, colors::WHITE);
    let ball = &state.ball;
    canvas.sprite(
        Sprite::Ball,
        ball.pos - Vec2::splat(ball.radius),
        1.0,
        colors::WHITE,
    );

    for i in 0..state.paddle.lives {
        let x = LIFE_MARGIN + LIFE_SPACING * i as f32;
        canvas.fill_rect(
            Rect::new(x, SCREEN_HEIGHT - 35.0, LIFE_SIZE, LIFE_SIZE),
            colors::LIFE,
        );
    }

    for (row, col, brick) in state.bricks.iter().filter(|(_, _, b)| b.active) {
        canvas.sprite(
            Sprite::Brick,
            brick.pos,
            BRICK_SPRITE_SCALE,
            colors::shade(BrickShade::for_cell(row, col)),
        );
    }

    for generator in state.generators.iter().filter(|g| g.active) {
        let color = colors::shade(generator.shade);
        for particle in generator.iter().filter(|p| p.active) {
            canvas.fill_rect(Rect::from_pos_size(particle.pos, particle.size), color);
        }
    }

    if paused {
        canvas.text(
            "game paused",
            PAUSED_POS,
            PROMPT_SIZE,
            FontFace::Title,
            colors::DARK_GRAY,
        );
    }
    if show_saved {
        canvas.text(
            "game saved",
            SAVED_POS,
            SAVED_SIZE,
            FontFace::Default,
            colors::DARK_GRAY,
        );
    }
}
