//! Game and gesture configuration options.

/// Threshold policy for committing a swipe.
///
/// The two policies behave differently across device sizes: a fixed
/// 100 px drag commits easily on a narrow phone but feels twitchy on a
/// wide tablet, while a viewport fraction scales with the screen. The
/// engine uses exactly one policy per tracker; they are never mixed.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum ThresholdPolicy {
    /// Commit after a fixed pixel distance.
    FixedPixels(f32),
    /// Commit after a fraction of the viewport width.
    ViewportFraction(f32),
}

impl Default for ThresholdPolicy {
    fn default() -> Self {
        Self::ViewportFraction(0.35)
    }
}

/// Configuration for the swipe gesture recognizer.
///
/// Use the builder pattern to customize options:
///
/// ```
/// use schluck::{SwipeOptions, ThresholdPolicy};
///
/// let options = SwipeOptions::default()
///     .with_threshold(ThresholdPolicy::FixedPixels(100.0))
///     .with_detect_vertical(true);
/// ```
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SwipeOptions {
    /// Commit threshold policy.
    pub threshold: ThresholdPolicy,
    /// Distance in pixels before a provisional direction hint is emitted.
    pub intent_threshold: f32,
    /// Whether upward swipes are recognized.
    pub detect_vertical: bool,
    /// Maximum card rotation in degrees for drag feedback.
    pub max_rotation_deg: f32,
    /// Milliseconds before a stuck gesture force-cancels itself.
    pub safety_timeout_ms: u64,
    /// Viewport width in pixels, used by the relative threshold policy.
    pub viewport_width: f32,
}

impl Default for SwipeOptions {
    fn default() -> Self {
        Self {
            threshold: ThresholdPolicy::default(),
            intent_threshold: 30.0,
            detect_vertical: false,
            max_rotation_deg: 15.0,
            safety_timeout_ms: 3000,
            viewport_width: 390.0,
        }
    }
}

impl SwipeOptions {
    /// Sets the commit threshold policy.
    ///
    /// # Example
    ///
    /// ```
    /// use schluck::{SwipeOptions, ThresholdPolicy};
    ///
    /// let options = SwipeOptions::default().with_threshold(ThresholdPolicy::FixedPixels(100.0));
    /// assert_eq!(options.threshold, ThresholdPolicy::FixedPixels(100.0));
    /// ```
    #[must_use]
    pub const fn with_threshold(mut self, threshold: ThresholdPolicy) -> Self {
        self.threshold = threshold;
        self
    }

    /// Sets the direction-hint intent threshold in pixels.
    ///
    /// # Example
    ///
    /// ```
    /// use schluck::SwipeOptions;
    ///
    /// let options = SwipeOptions::default().with_intent_threshold(20.0);
    /// assert_eq!(options.intent_threshold, 20.0);
    /// ```
    #[must_use]
    pub const fn with_intent_threshold(mut self, pixels: f32) -> Self {
        self.intent_threshold = pixels;
        self
    }

    /// Sets whether upward swipes are recognized.
    ///
    /// # Example
    ///
    /// ```
    /// use schluck::SwipeOptions;
    ///
    /// let options = SwipeOptions::default().with_detect_vertical(true);
    /// assert!(options.detect_vertical);
    /// ```
    #[must_use]
    pub const fn with_detect_vertical(mut self, detect: bool) -> Self {
        self.detect_vertical = detect;
        self
    }

    /// Sets the maximum drag-feedback rotation in degrees.
    ///
    /// # Example
    ///
    /// ```
    /// use schluck::SwipeOptions;
    ///
    /// let options = SwipeOptions::default().with_max_rotation_deg(10.0);
    /// assert_eq!(options.max_rotation_deg, 10.0);
    /// ```
    #[must_use]
    pub const fn with_max_rotation_deg(mut self, degrees: f32) -> Self {
        self.max_rotation_deg = degrees;
        self
    }

    /// Sets the stuck-gesture safety timeout in milliseconds.
    ///
    /// # Example
    ///
    /// ```
    /// use schluck::SwipeOptions;
    ///
    /// let options = SwipeOptions::default().with_safety_timeout_ms(5000);
    /// assert_eq!(options.safety_timeout_ms, 5000);
    /// ```
    #[must_use]
    pub const fn with_safety_timeout_ms(mut self, ms: u64) -> Self {
        self.safety_timeout_ms = ms;
        self
    }

    /// Sets the viewport width in pixels.
    ///
    /// # Example
    ///
    /// ```
    /// use schluck::SwipeOptions;
    ///
    /// let options = SwipeOptions::default().with_viewport_width(768.0);
    /// assert_eq!(options.viewport_width, 768.0);
    /// ```
    #[must_use]
    pub const fn with_viewport_width(mut self, pixels: f32) -> Self {
        self.viewport_width = pixels;
        self
    }

    /// Resolves the commit threshold to pixels for the current viewport.
    #[must_use]
    pub const fn threshold_px(&self) -> f32 {
        match self.threshold {
            ThresholdPolicy::FixedPixels(px) => px,
            ThresholdPolicy::ViewportFraction(fraction) => self.viewport_width * fraction,
        }
    }
}

/// Configuration options for a game session.
///
/// Use the builder pattern to customize options:
///
/// ```
/// use schluck::GameOptions;
///
/// let options = GameOptions::default()
///     .with_stale_after_ms(12 * 60 * 60 * 1000)
///     .with_sound_enabled(false);
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct GameOptions {
    /// Minimum number of players required to start.
    pub min_players: usize,
    /// Age in milliseconds after which a saved session is discarded.
    pub stale_after_ms: u64,
    /// Interval in milliseconds between automatic saves.
    pub autosave_interval_ms: u64,
    /// Whether sound cues are emitted.
    pub sound_enabled: bool,
    /// Whether haptic pulses are emitted.
    pub haptic_enabled: bool,
}

impl Default for GameOptions {
    fn default() -> Self {
        Self {
            min_players: 2,
            stale_after_ms: 24 * 60 * 60 * 1000,
            autosave_interval_ms: 10_000,
            sound_enabled: true,
            haptic_enabled: true,
        }
    }
}

impl GameOptions {
    /// Sets the minimum number of players.
    ///
    /// # Example
    ///
    /// ```
    /// use schluck::GameOptions;
    ///
    /// let options = GameOptions::default().with_min_players(3);
    /// assert_eq!(options.min_players, 3);
    /// ```
    #[must_use]
    pub const fn with_min_players(mut self, min: usize) -> Self {
        self.min_players = min;
        self
    }

    /// Sets the saved-session staleness window in milliseconds.
    ///
    /// # Example
    ///
    /// ```
    /// use schluck::GameOptions;
    ///
    /// let options = GameOptions::default().with_stale_after_ms(3_600_000);
    /// assert_eq!(options.stale_after_ms, 3_600_000);
    /// ```
    #[must_use]
    pub const fn with_stale_after_ms(mut self, ms: u64) -> Self {
        self.stale_after_ms = ms;
        self
    }

    /// Sets the autosave interval in milliseconds.
    ///
    /// # Example
    ///
    /// ```
    /// use schluck::GameOptions;
    ///
    /// let options = GameOptions::default().with_autosave_interval_ms(5000);
    /// assert_eq!(options.autosave_interval_ms, 5000);
    /// ```
    #[must_use]
    pub const fn with_autosave_interval_ms(mut self, ms: u64) -> Self {
        self.autosave_interval_ms = ms;
        self
    }

    /// Sets whether sound cues are emitted.
    ///
    /// # Example
    ///
    /// ```
    /// use schluck::GameOptions;
    ///
    /// let options = GameOptions::default().with_sound_enabled(false);
    /// assert!(!options.sound_enabled);
    /// ```
    #[must_use]
    pub const fn with_sound_enabled(mut self, enabled: bool) -> Self {
        self.sound_enabled = enabled;
        self
    }

    /// Sets whether haptic pulses are emitted.
    ///
    /// # Example
    ///
    /// ```
    /// use schluck::GameOptions;
    ///
    /// let options = GameOptions::default().with_haptic_enabled(false);
    /// assert!(!options.haptic_enabled);
    /// ```
    #[must_use]
    pub const fn with_haptic_enabled(mut self, enabled: bool) -> Self {
        self.haptic_enabled = enabled;
        self
    }
}
