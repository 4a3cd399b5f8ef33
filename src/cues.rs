//! Haptic and sound cue ports.
//!
//! The engine only *requests* feedback; playback is owned by the platform
//! layer. Both ports are fire-and-forget and infallible from the engine's
//! point of view.

/// Haptic pulse intensity.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum HapticIntensity {
    /// Short, subtle tap.
    Light,
    /// Standard confirmation pulse.
    Medium,
    /// Strong emphasis pulse.
    Heavy,
}

/// Haptic feedback collaborator.
///
/// Implementations are expected to be failure-tolerant: fall back to a
/// weaker vibration primitive or no-op rather than reporting errors.
pub trait Haptics {
    /// Requests a single haptic pulse.
    fn pulse(&self, intensity: HapticIntensity);
}

/// Haptics implementation that does nothing.
#[derive(Debug, Clone, Copy, Default)]
pub struct NoopHaptics;

impl Haptics for NoopHaptics {
    fn pulse(&self, _intensity: HapticIntensity) {}
}

/// Named sound effect.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum SoundCue {
    /// A new card slides in.
    CardDraw,
    /// Card dismissed to the left (reject).
    SwipeLeft,
    /// Card dismissed to the right (accept).
    SwipeRight,
    /// Generic positive confirmation.
    Success,
    /// Generic error feedback.
    Error,
    /// Handover to the next player.
    PlayerChange,
    /// A drink penalty was applied.
    Drink,
}

/// Sound playback collaborator.
pub trait SoundPlayer {
    /// Requests playback of a named effect.
    fn play(&self, cue: SoundCue);
}

/// Sound player that does nothing.
#[derive(Debug, Clone, Copy, Default)]
pub struct NoopSounds;

impl SoundPlayer for NoopSounds {
    fn play(&self, _cue: SoundCue) {}
}

/// Bundle of feedback collaborators with per-channel enable flags.
///
/// Disabled channels silently drop requests, mirroring the user-facing
/// sound/haptic settings toggles.
pub struct Cues {
    haptics: Box<dyn Haptics>,
    sounds: Box<dyn SoundPlayer>,
    haptic_enabled: bool,
    sound_enabled: bool,
}

impl Cues {
    /// Creates a cue bundle from the given collaborators.
    #[must_use]
    pub fn new(haptics: Box<dyn Haptics>, sounds: Box<dyn SoundPlayer>) -> Self {
        Self {
            haptics,
            sounds,
            haptic_enabled: true,
            sound_enabled: true,
        }
    }

    /// Creates a cue bundle that drops every request.
    #[must_use]
    pub fn noop() -> Self {
        Self::new(Box::new(NoopHaptics), Box::new(NoopSounds))
    }

    /// Enables or disables the haptic channel.
    pub fn set_haptic_enabled(&mut self, enabled: bool) {
        self.haptic_enabled = enabled;
    }

    /// Enables or disables the sound channel.
    pub fn set_sound_enabled(&mut self, enabled: bool) {
        self.sound_enabled = enabled;
    }

    /// Requests a haptic pulse if the channel is enabled.
    pub fn pulse(&self, intensity: HapticIntensity) {
        if self.haptic_enabled {
            self.haptics.pulse(intensity);
        }
    }

    /// Requests a sound effect if the channel is enabled.
    pub fn play(&self, cue: SoundCue) {
        if self.sound_enabled {
            self.sounds.play(cue);
        }
    }
}

impl Default for Cues {
    fn default() -> Self {
        Self::noop()
    }
}

impl core::fmt::Debug for Cues {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        f.debug_struct("Cues")
            .field("haptic_enabled", &self.haptic_enabled)
            .field("sound_enabled", &self.sound_enabled)
            .finish_non_exhaustive()
    }
}
