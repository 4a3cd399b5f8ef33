//! Swipe gesture recognition.
//!
//! [`SwipeTracker`] turns a stream of pointer/touch samples into a single
//! discrete outcome per gesture ([`SwipeDirection`] or nothing), plus
//! continuous feedback values (offset, rotation, opacity) the presentation
//! layer can render during the drag. The tracker holds no game state and
//! can equally be driven by synthetic input in tests.
//!
//! Timestamps are injected (`now_ms`) so the stuck-gesture safety timeout
//! is deterministic.

use crate::cues::{HapticIntensity, Haptics, NoopHaptics};
use crate::options::SwipeOptions;

/// A screen-space input sample.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct Point {
    /// Horizontal coordinate in pixels.
    pub x: f32,
    /// Vertical coordinate in pixels (down is positive).
    pub y: f32,
}

impl Point {
    /// Creates a point.
    #[must_use]
    pub const fn new(x: f32, y: f32) -> Self {
        Self { x, y }
    }
}

/// Discrete swipe outcome.
///
/// Downward swipes are never recognized.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum SwipeDirection {
    /// Card dismissed to the left.
    Left,
    /// Card dismissed to the right.
    Right,
    /// Card dismissed upward.
    Up,
}

/// Source of input samples.
///
/// Once a gesture starts from one source, samples from the other source
/// are ignored until the gesture resolves, so a stray mouse event cannot
/// corrupt an in-flight touch drag.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum InputSource {
    /// Touch events.
    Touch,
    /// Mouse/pointer events.
    Pointer,
}

/// Continuous feedback values for the in-flight gesture.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SwipeFeedback {
    /// Whether a gesture is currently being tracked.
    pub is_active: bool,
    /// Provisional direction once the intent threshold is passed.
    ///
    /// Visual feedback only; the final decision is made by
    /// [`SwipeTracker::end`].
    pub direction_hint: Option<SwipeDirection>,
    /// Signed horizontal distance from the start point in pixels.
    pub horizontal_distance: f32,
    /// Signed vertical distance from the start point in pixels.
    pub vertical_distance: f32,
    /// Card rotation in degrees, proportional to the drag and clamped.
    pub rotation_deg: f32,
    /// Card opacity in `0.5..=1.0`, fading as the drag approaches commit.
    pub opacity: f32,
}

impl SwipeFeedback {
    const fn idle() -> Self {
        Self {
            is_active: false,
            direction_hint: None,
            horizontal_distance: 0.0,
            vertical_distance: 0.0,
            rotation_deg: 0.0,
            opacity: 1.0,
        }
    }
}

impl Default for SwipeFeedback {
    fn default() -> Self {
        Self::idle()
    }
}

#[derive(Debug, Clone, Copy)]
struct ActiveGesture {
    source: InputSource,
    start: Point,
    current: Point,
    started_at_ms: u64,
}

/// Swipe gesture recognizer.
///
/// # Example
///
/// ```
/// use schluck::{InputSource, Point, SwipeDirection, SwipeOptions, SwipeTracker, ThresholdPolicy};
///
/// let options = SwipeOptions::default().with_threshold(ThresholdPolicy::FixedPixels(100.0));
/// let mut tracker = SwipeTracker::new(options);
///
/// tracker.start(InputSource::Touch, Point::new(200.0, 400.0), 0);
/// tracker.move_to(InputSource::Touch, Point::new(320.0, 404.0), 16);
/// let outcome = tracker.end(InputSource::Touch, 32);
/// assert_eq!(outcome, Some(SwipeDirection::Right));
/// assert!(!tracker.is_active());
/// ```
pub struct SwipeTracker {
    options: SwipeOptions,
    haptics: Box<dyn Haptics>,
    active: Option<ActiveGesture>,
}

impl SwipeTracker {
    /// Creates a tracker with no haptic feedback.
    #[must_use]
    pub fn new(options: SwipeOptions) -> Self {
        Self {
            options,
            haptics: Box::new(NoopHaptics),
            active: None,
        }
    }

    /// Attaches a haptics collaborator; a medium pulse fires on every
    /// committed swipe.
    #[must_use]
    pub fn with_haptics(mut self, haptics: Box<dyn Haptics>) -> Self {
        self.haptics = haptics;
        self
    }

    /// Returns the tracker options.
    #[must_use]
    pub const fn options(&self) -> &SwipeOptions {
        &self.options
    }

    /// Updates the viewport width (host calls this on resize).
    pub const fn set_viewport_width(&mut self, pixels: f32) {
        self.options.viewport_width = pixels;
    }

    /// Returns whether a gesture is currently being tracked.
    #[must_use]
    pub const fn is_active(&self) -> bool {
        self.active.is_some()
    }

    /// Begins tracking a gesture at `point`.
    ///
    /// Restarts tracking if the same source is already mid-gesture.
    /// Returns `false` (and ignores the sample) if the *other* source owns
    /// an unresolved gesture.
    pub fn start(&mut self, source: InputSource, point: Point, now_ms: u64) -> bool {
        self.expire_if_stale(now_ms);

        if let Some(active) = &self.active {
            if active.source != source {
                return false;
            }
        }

        self.active = Some(ActiveGesture {
            source,
            start: point,
            current: point,
            started_at_ms: now_ms,
        });
        true
    }

    /// Updates the current point and returns fresh feedback values.
    ///
    /// Only the latest point is kept, so any number of same-frame calls
    /// coalesce to one O(1) recomputation. Samples from a non-owning
    /// source are ignored.
    pub fn move_to(&mut self, source: InputSource, point: Point, now_ms: u64) -> SwipeFeedback {
        self.expire_if_stale(now_ms);

        if let Some(active) = &mut self.active {
            if active.source == source {
                active.current = point;
            }
        }

        self.feedback()
    }

    /// Finalizes the gesture and returns the committed direction, if any.
    ///
    /// The dominant axis is measured against the commit threshold; the
    /// boundary is inclusive (a drag of exactly the threshold commits).
    /// Upward swipes require vertical detection to be enabled; downward
    /// drags never commit. On a commit, one medium haptic pulse is
    /// requested. The tracker is inactive afterwards whether or not a
    /// direction was emitted.
    pub fn end(&mut self, source: InputSource, now_ms: u64) -> Option<SwipeDirection> {
        if self.expire_if_stale(now_ms) {
            return None;
        }

        let active = self.active.as_ref()?;
        if active.source != source {
            return None;
        }

        let dx = active.current.x - active.start.x;
        let dy = active.current.y - active.start.y;
        self.active = None;

        let threshold = self.options.threshold_px();
        let outcome = if dx.abs() > dy.abs() {
            if dx.abs() >= threshold {
                Some(if dx > 0.0 {
                    SwipeDirection::Right
                } else {
                    SwipeDirection::Left
                })
            } else {
                None
            }
        } else if self.options.detect_vertical && dy < 0.0 && dy.abs() >= threshold {
            Some(SwipeDirection::Up)
        } else {
            None
        };

        if outcome.is_some() {
            self.haptics.pulse(HapticIntensity::Medium);
        }

        outcome
    }

    /// Aborts the gesture without emitting a directional outcome.
    pub fn cancel(&mut self) {
        self.active = None;
    }

    /// Force-clears all feedback values, even mid-gesture.
    ///
    /// Used when the owning screen discards visual state without waiting
    /// for the gesture to resolve naturally (screen transitions).
    pub fn reset(&mut self) {
        self.active = None;
    }

    /// Current feedback values for the presentation layer.
    #[must_use]
    pub fn feedback(&self) -> SwipeFeedback {
        let Some(active) = &self.active else {
            return SwipeFeedback::idle();
        };

        let dx = active.current.x - active.start.x;
        let dy = active.current.y - active.start.y;
        let dominant = dx.abs().max(dy.abs());
        let threshold = self.options.threshold_px();

        let direction_hint = if dominant > self.options.intent_threshold {
            if dx.abs() > dy.abs() {
                Some(if dx > 0.0 {
                    SwipeDirection::Right
                } else {
                    SwipeDirection::Left
                })
            } else if self.options.detect_vertical && dy < 0.0 {
                Some(SwipeDirection::Up)
            } else {
                None
            }
        } else {
            None
        };

        let max_rotation = self.options.max_rotation_deg;
        let rotation_deg = (dx / threshold * max_rotation).clamp(-max_rotation, max_rotation);
        let opacity = 1.0 - (dominant / threshold).min(1.0) * 0.5;

        SwipeFeedback {
            is_active: true,
            direction_hint,
            horizontal_distance: dx,
            vertical_distance: dy,
            rotation_deg,
            opacity,
        }
    }

    /// Force-cancels a gesture whose safety timeout has elapsed.
    ///
    /// A gesture can get stuck when pointer capture is lost or the app is
    /// backgrounded mid-drag; every entry point checks this first so the
    /// card can never stay glued to a dead gesture. Returns `true` if a
    /// gesture was expired.
    pub fn expire_if_stale(&mut self, now_ms: u64) -> bool {
        if let Some(active) = &self.active {
            if now_ms.saturating_sub(active.started_at_ms) >= self.options.safety_timeout_ms {
                self.active = None;
                return true;
            }
        }
        false
    }
}

impl core::fmt::Debug for SwipeTracker {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        f.debug_struct("SwipeTracker")
            .field("options", &self.options)
            .field("active", &self.active)
            .finish_non_exhaustive()
    }
}
