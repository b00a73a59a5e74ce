//! Title / Play / Game Over state machine
//!
//! Each screen reacts to input, updates and draws once per simulation frame.
//! Transitions take effect in the frame that triggered them.

use crate::audio::{AudioSink, SoundEffect};
use crate::persistence::{SaveStorage, load_game, save_game};
use crate::platform::FrameInput;
use crate::renderer::{self, Canvas};
use crate::sim::{GameEvent, GameState, TickInput, TickOutcome, tick};

/// How long the "game saved" notice stays up (frames)
pub const SAVE_NOTICE_FRAMES: u64 = 120;
/// Menu prompts appear once the blink counter passes this
const PROMPT_SHOWN_AFTER: u64 = 120;
/// The blink counter starts over after this
const BLINK_PERIOD: u64 = 150;

/// Play-screen data that only exists while playing
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct PlaySession {
    pub paused: bool,
    /// Frame of the last successful save
    pub saved_at: Option<u64>,
    /// Controls captured by the latest input pass
    pub controls: TickInput,
}

/// Current screen
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Screen {
    Title,
    Play(PlaySession),
    GameOver,
}

impl Screen {
    fn play() -> Self {
        Screen::Play(PlaySession::default())
    }
}

/// Whole game: play field plus screen state
#[derive(Debug)]
pub struct Game {
    pub state: GameState,
    screen: Screen,
    frame_count: u64,
    quit: bool,
    events: Vec<GameEvent>,
}

impl Default for Game {
    fn default() -> Self {
        Self::new()
    }
}

impl Game {
    pub fn new() -> Self {
        Self {
            state: GameState::new(),
            screen: Screen::Title,
            frame_count: 0,
            quit: false,
            events: Vec::with_capacity(16),
        }
    }

    pub fn screen(&self) -> &Screen {
        &self.screen
    }

    pub fn frame_count(&self) -> u64 {
        self.frame_count
    }

    /// Window close was requested
    pub fn should_quit(&self) -> bool {
        self.quit
    }

    /// Events produced by the most recent simulation step
    pub fn events(&self) -> &[GameEvent] {
        &self.events
    }

    /// One full frame minus drawing
    pub fn step(
        &mut self,
        input: &FrameInput,
        audio: &mut dyn AudioSink,
        storage: &mut dyn SaveStorage,
    ) {
        self.process_input(input, audio, storage);
        self.update(audio);
    }

    pub fn process_input(
        &mut self,
        input: &FrameInput,
        audio: &mut dyn AudioSink,
        storage: &mut dyn SaveStorage,
    ) {
        if input.close {
            self.quit = true;
        }

        let screen = self.screen;
        self.screen = match screen {
            Screen::Title => self.title_input(input, audio, storage),
            Screen::Play(session) => Screen::Play(self.play_input(session, input, storage)),
            Screen::GameOver => self.game_over_input(input),
        };
    }

    fn title_input(
        &mut self,
        input: &FrameInput,
        audio: &mut dyn AudioSink,
        storage: &dyn SaveStorage,
    ) -> Screen {
        if input.load {
            self.resume_from(storage);
        } else if input.confirm {
            log::info!("Starting new game");
        } else {
            return Screen::Title;
        }
        audio.play(SoundEffect::Start);
        Screen::play()
    }

    /// Apply a save if there is a usable one, otherwise start fresh
    fn resume_from(&mut self, storage: &dyn SaveStorage) {
        match load_game(storage) {
            Ok(Some(blob)) => {
                blob.apply(&mut self.state);
                log::info!(
                    "Resumed save: {} bricks left, {} lives",
                    blob.active_bricks(),
                    blob.lives
                );
            }
            Ok(None) => {
                self.state.reset();
                log::info!("No save found, starting new game");
            }
            Err(e) => {
                self.state.reset();
                log::warn!("Ignoring unusable save: {e}");
            }
        }
    }

    fn play_input(
        &mut self,
        mut session: PlaySession,
        input: &FrameInput,
        storage: &mut dyn SaveStorage,
    ) -> PlaySession {
        session.controls = input.tick_input();
        if input.pause {
            session.paused = !session.paused;
            log::debug!("Paused: {}", session.paused);
        }
        if input.save {
            match save_game(&self.state, storage) {
                Ok(()) => session.saved_at = Some(self.frame_count),
                Err(e) => log::error!("Failed to save game: {e}"),
            }
        }
        session
    }

    fn game_over_input(&mut self, input: &FrameInput) -> Screen {
        if !input.confirm {
            return Screen::GameOver;
        }
        self.frame_count = 0;
        self.state.reset();
        log::info!("Back to title");
        Screen::Title
    }

    pub fn update(&mut self, audio: &mut dyn AudioSink) {
        self.frame_count += 1;
        let screen = self.screen;
        self.screen = match screen {
            Screen::Title => {
                self.wrap_blink();
                Screen::Title
            }
            Screen::Play(session) => self.play_update(session, audio),
            Screen::GameOver => {
                self.wrap_blink();
                Screen::GameOver
            }
        };
    }

    fn wrap_blink(&mut self) {
        if self.frame_count > BLINK_PERIOD {
            self.frame_count = 0;
        }
    }

    fn play_update(&mut self, mut session: PlaySession, audio: &mut dyn AudioSink) -> Screen {
        if let Some(saved_at) = session.saved_at {
            if self.frame_count.saturating_sub(saved_at) > SAVE_NOTICE_FRAMES {
                session.saved_at = None;
            }
        }
        if session.paused {
            return Screen::Play(session);
        }

        self.events.clear();
        let outcome = tick(&mut self.state, &session.controls, &mut self.events);
        for event in &self.events {
            match event {
                GameEvent::PaddleBounce => audio.play(SoundEffect::Bounce),
                GameEvent::BrickDestroyed { .. } => audio.play(SoundEffect::Explosion),
                GameEvent::BurstDropped { row, col } => {
                    log::debug!("No free particle generator for brick ({row}, {col})")
                }
                GameEvent::BallLost { lives_left } => log::debug!("Ball lost, {lives_left} left"),
                GameEvent::Launched => {}
            }
        }

        match outcome {
            TickOutcome::Continue => Screen::Play(session),
            TickOutcome::Won => {
                log::info!("All bricks destroyed");
                Screen::GameOver
            }
            TickOutcome::Lost => {
                log::info!("Out of lives");
                Screen::GameOver
            }
        }
    }

    fn prompt_visible(&self) -> bool {
        self.frame_count > PROMPT_SHOWN_AFTER
    }

    pub fn draw(&self, canvas: &mut dyn Canvas) {
        match &self.screen {
            Screen::Title => renderer::draw_title(canvas, self.prompt_visible()),
            Screen::Play(session) => renderer::draw_play(
                canvas,
                &self.state,
                session.paused,
                session.saved_at.is_some(),
            ),
            Screen::GameOver => renderer::draw_game_over(canvas, self.prompt_visible()),
        }
    }
}
