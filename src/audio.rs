//! Sound effect triggers
//!
//! The game only says *which* sound to play; a backend behind [`AudioSink`]
//! does the playing. Playback is fire-and-forget.

use crate::settings::Settings;

/// Sound effect types
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum SoundEffect {
    /// Ball hits paddle
    Bounce,
    /// Brick destroyed
    Explosion,
    /// Run started or resumed from the title screen
    Start,
}

impl SoundEffect {
    pub const ALL: [SoundEffect; 3] = [SoundEffect::Bounce, SoundEffect::Explosion, SoundEffect::Start];

    /// Asset file name inside the resource directory
    pub fn file_name(self) -> &'static str {
        match self {
            SoundEffect::Bounce => "bounce.wav",
            SoundEffect::Explosion => "explosion.wav",
            SoundEffect::Start => "start.wav",
        }
    }
}

/// Anything that can play a sound effect
pub trait AudioSink {
    fn play(&mut self, effect: SoundEffect);
}

/// Records effects instead of playing them
impl AudioSink for Vec<SoundEffect> {
    fn play(&mut self, effect: SoundEffect) {
        self.push(effect);
    }
}

/// Volume controls shared by audio backends
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct AudioLevels {
    master_volume: f32,
    sfx_volume: f32,
    muted: bool,
}

impl Default for AudioLevels {
    fn default() -> Self {
        Self {
            master_volume: 0.8,
            sfx_volume: 1.0,
            muted: false,
        }
    }
}

impl AudioLevels {
    pub fn from_settings(settings: &Settings) -> Self {
        let mut levels = Self::default();
        levels.set_master_volume(settings.master_volume);
        levels.set_sfx_volume(settings.sfx_volume);
        levels.set_muted(settings.muted);
        levels
    }

    /// Set master volume (0.0 - 1.0)
    pub fn set_master_volume(&mut self, vol: f32) {
        self.master_volume = vol.clamp(0.0, 1.0);
    }

    /// Set SFX volume (0.0 - 1.0)
    pub fn set_sfx_volume(&mut self, vol: f32) {
        self.sfx_volume = vol.clamp(0.0, 1.0);
    }

    /// Mute/unmute all audio
    pub fn set_muted(&mut self, muted: bool) {
        self.muted = muted;
    }

    /// Get effective volume
    pub fn effective_volume(&self) -> f32 {
        if self.muted {
            0.0
        } else {
            self.master_volume * self.sfx_volume
        }
    }

    pub fn is_audible(&self) -> bool {
        self.effective_volume() > 0.0
    }
}
