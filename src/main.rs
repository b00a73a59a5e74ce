//! Breakout - desktop entry point
//!
//! Hosts the game in a macroquad window. The library stays backend-free; this
//! file adapts macroquad to its keyboard, canvas and audio traits.

use std::collections::HashMap;
use std::path::Path;

use anyhow::Context;
use macroquad::color::Color;
use macroquad::input::{KeyCode, is_key_down, is_key_pressed, is_quit_requested, prevent_quit};
use macroquad::math::Vec2 as MqVec2;
use macroquad::text::{Font, TextParams, draw_text_ex, load_ttf_font, measure_text};
use macroquad::texture::{DrawTextureParams, FilterMode, Texture2D, draw_texture_ex, load_texture};

use breakout::audio::{AudioLevels, AudioSink, SoundEffect};
use breakout::consts::{MAX_SUBSTEPS, SCREEN_HEIGHT, SCREEN_WIDTH, SIM_DT, WINDOW_TITLE};
use breakout::persistence::FileStorage;
use breakout::platform::{FrameInput, Key, Keyboard};
use breakout::renderer::{Canvas, FontFace, Sprite};
use breakout::sim::Rect;
use breakout::{Game, Settings};

/// Longest frame time fed to the accumulator (seconds)
const MAX_FRAME_TIME: f32 = 0.1;

fn main() {
    env_logger::init();
    log::info!("Breakout starting...");

    let settings = match prepare_settings(Path::new(Settings::FILE_NAME)) {
        Ok(settings) => settings,
        Err(e) => {
            log::warn!("{e:#}");
            Settings::default()
        }
    };

    let config = macroquad::window::Conf {
        window_title: WINDOW_TITLE.to_owned(),
        window_width: SCREEN_WIDTH as i32,
        window_height: SCREEN_HEIGHT as i32,
        window_resizable: false,
        ..macroquad::window::Conf::default()
    };
    macroquad::Window::from_config(config, run(settings));
}

/// Load settings, writing the defaults out on first run
fn prepare_settings(path: &Path) -> anyhow::Result<Settings> {
    let settings = Settings::load(path);
    if !path.exists() {
        settings
            .save(path)
            .with_context(|| format!("failed to write default settings to {}", path.display()))?;
    }
    Ok(settings)
}

async fn run(settings: Settings) {
    prevent_quit();

    let mut canvas = MacroquadCanvas::load(&settings).await;
    let mut audio = MacroquadAudio::load(&settings).await;
    let mut storage = FileStorage::new(settings.save_path.clone());
    let keyboard = MacroquadKeyboard;

    let mut game = Game::new();
    let mut pending = FrameInput::default();
    let mut accumulator = 0.0_f32;

    loop {
        pending.merge(&FrameInput::poll(&keyboard));

        accumulator += macroquad::time::get_frame_time().min(MAX_FRAME_TIME);
        let mut substeps = 0;
        while accumulator >= SIM_DT && substeps < MAX_SUBSTEPS {
            game.step(&pending, &mut audio, &mut storage);
            accumulator -= SIM_DT;
            substeps += 1;

            // One-shot inputs are consumed by the first frame that sees them
            pending.clear_presses();
        }

        game.draw(&mut canvas);
        if settings.show_fps {
            let fps = format!("{} fps", macroquad::time::get_fps());
            canvas.text(
                &fps,
                glam::Vec2::new(SCREEN_WIDTH - 90.0, 10.0),
                20.0,
                FontFace::Default,
                [1.0, 1.0, 1.0, 1.0],
            );
        }

        if game.should_quit() {
            log::info!("Quit requested");
            break;
        }
        macroquad::window::next_frame().await;
    }
}

fn to_color(rgba: [f32; 4]) -> Color {
    Color::new(rgba[0], rgba[1], rgba[2], rgba[3])
}

struct MacroquadKeyboard;

impl MacroquadKeyboard {
    fn key_code(key: Key) -> KeyCode {
        match key {
            Key::Left => KeyCode::Left,
            Key::Right => KeyCode::Right,
            Key::Space => KeyCode::Space,
            Key::Enter => KeyCode::Enter,
            Key::P => KeyCode::P,
            Key::S => KeyCode::S,
            Key::L => KeyCode::L,
        }
    }
}

impl Keyboard for MacroquadKeyboard {
    fn is_down(&self, key: Key) -> bool {
        is_key_down(Self::key_code(key))
    }

    fn is_pressed(&self, key: Key) -> bool {
        is_key_pressed(Self::key_code(key))
    }

    fn close_requested(&self) -> bool {
        is_quit_requested()
    }
}

/// Draws onto the macroquad window; sprites without a texture become rects
struct MacroquadCanvas {
    textures: HashMap<Sprite, Texture2D>,
    /// Display font for headings; `None` falls back to the built-in font
    title_font: Option<Font>,
}

impl MacroquadCanvas {
    async fn load(settings: &Settings) -> Self {
        let mut textures = HashMap::new();
        for sprite in Sprite::ALL {
            let path = settings.resource(sprite.file_name());
            match load_texture(&path_str(&path)).await {
                Ok(texture) => {
                    texture.set_filter(FilterMode::Nearest);
                    textures.insert(sprite, texture);
                }
                Err(e) => log::warn!("Texture {} unavailable ({e}), drawing shapes", path.display()),
            }
        }

        let title_font = match FontFace::Title.file_name() {
            Some(file_name) => {
                let path = settings.resource(file_name);
                match load_ttf_font(&path_str(&path)).await {
                    Ok(font) => Some(font),
                    Err(e) => {
                        log::warn!("Font {} unavailable ({e}), using default", path.display());
                        None
                    }
                }
            }
            None => None,
        };

        Self {
            textures,
            title_font,
        }
    }

    fn font(&self, face: FontFace) -> Option<Font> {
        match face {
            FontFace::Title => self.title_font,
            FontFace::Default => None,
        }
    }
}

impl Canvas for MacroquadCanvas {
    fn clear(&mut self, color: [f32; 4]) {
        macroquad::window::clear_background(to_color(color));
    }

    fn sprite(&mut self, sprite: Sprite, pos: glam::Vec2, scale: f32, tint: [f32; 4]) {
        match self.textures.get(&sprite) {
            Some(&texture) => {
                let size = MqVec2::new(texture.width(), texture.height()) * scale;
                draw_texture_ex(
                    texture,
                    pos.x,
                    pos.y,
                    to_color(tint),
                    DrawTextureParams {
                        dest_size: Some(size),
                        ..DrawTextureParams::default()
                    },
                );
            }
            None => {
                let size = sprite.fallback_size() * scale;
                macroquad::shapes::draw_rectangle(pos.x, pos.y, size.x, size.y, to_color(tint));
            }
        }
    }

    fn fill_rect(&mut self, rect: Rect, color: [f32; 4]) {
        macroquad::shapes::draw_rectangle(rect.x, rect.y, rect.width, rect.height, to_color(color));
    }

    fn text(&mut self, text: &str, pos: glam::Vec2, size: f32, face: FontFace, color: [f32; 4]) {
        let font = self.font(face);
        let font_size = size as u16;
        // macroquad places text by its baseline
        let dims = measure_text(text, font, font_size, 1.0);
        let mut params = TextParams {
            font_size,
            color: to_color(color),
            ..TextParams::default()
        };
        if let Some(font) = font {
            params.font = font;
        }
        draw_text_ex(text, pos.x, pos.y + dims.offset_y, params);
    }
}

/// Plays loaded effects; without the `audio` feature it only logs them
struct MacroquadAudio {
    levels: AudioLevels,
    #[cfg(feature = "audio")]
    sounds: HashMap<SoundEffect, macroquad::audio::Sound>,
}

impl MacroquadAudio {
    #[cfg(feature = "audio")]
    async fn load(settings: &Settings) -> Self {
        let mut sounds = HashMap::new();
        for effect in SoundEffect::ALL {
            let path = settings.resource(effect.file_name());
            match macroquad::audio::load_sound(&path_str(&path)).await {
                Ok(sound) => {
                    sounds.insert(effect, sound);
                }
                Err(e) => log::warn!("Sound {} unavailable: {e}", path.display()),
            }
        }
        Self {
            levels: AudioLevels::from_settings(settings),
            sounds,
        }
    }

    #[cfg(not(feature = "audio"))]
    async fn load(settings: &Settings) -> Self {
        log::info!("Built without the audio feature, sound is off");
        Self {
            levels: AudioLevels::from_settings(settings),
        }
    }
}

impl AudioSink for MacroquadAudio {
    #[cfg(feature = "audio")]
    fn play(&mut self, effect: SoundEffect) {
        if !self.levels.is_audible() {
            return;
        }
        if let Some(&sound) = self.sounds.get(&effect) {
            macroquad::audio::play_sound(
                sound,
                macroquad::audio::PlaySoundParams {
                    looped: false,
                    volume: self.levels.effective_volume(),
                },
            );
        }
    }

    #[cfg(not(feature = "audio"))]
    fn play(&mut self, effect: SoundEffect) {
        log::trace!(
            "Sound {:?} (volume {:.2})",
            effect,
            self.levels.effective_volume()
        );
    }
}

fn path_str(path: &Path) -> String {
    path.to_string_lossy().into_owned()
}
