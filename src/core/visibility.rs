//! One-shot viewport visibility latch
//!
//! Entrance animations only ever play once: the first time an element is
//! reported as intersecting the viewport the latch closes and the element is
//! no longer observed.

/// Options passed to the intersection observer
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ObserverOptions {
    /// Fraction of the element that must be visible (0.0..=1.0)
    pub threshold: f64,
}

impl ObserverOptions {
    pub fn with_threshold(threshold: f64) -> Self {
        Self {
            threshold: threshold.clamp(0.0, 1.0),
        }
    }
}

/// Options for the benefit cards: a tenth of the card must be visible
pub fn benefit_card_options() -> ObserverOptions {
    ObserverOptions::with_threshold(0.1)
}

impl Default for ObserverOptions {
    fn default() -> Self {
        Self::with_threshold(0.0)
    }
}

/// Outcome of feeding an intersection report into a latch
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LatchEvent {
    /// The element entered view for the first time; stop observing it
    Entered,
    /// Nothing changed
    Unchanged,
}

/// Monotonic "has entered view" flag
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct VisibilityLatch {
    entered: bool,
}

impl VisibilityLatch {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn has_entered(&self) -> bool {
        self.entered
    }

    /// Feed one intersection report
    pub fn observe(&mut self, is_intersecting: bool) -> LatchEvent {
        if self.entered || !is_intersecting {
            return LatchEvent::Unchanged;
        }
        self.entered = true;
        LatchEvent::Entered
    }
}

/// Presentation state of an element with an entrance animation.
///
/// Content is only hidden while an observer is attached and waiting, so
/// server-rendered markup, visitors without scripts and browsers without the
/// observer API all see it in its resting position.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum RevealState {
    /// No observer attached; render at rest
    #[default]
    Static,
    /// Observer attached, element not yet seen
    Armed,
    /// Element has been seen; stays here for good
    Entered,
}

impl RevealState {
    /// Observer attached. Has no effect once the element has entered.
    pub fn armed(self) -> Self {
        match self {
            RevealState::Static => RevealState::Armed,
            other => other,
        }
    }

    pub fn is_hidden(self) -> bool {
        self == RevealState::Armed
    }

    pub fn has_entered(self) -> bool {
        self == RevealState::Entered
    }

    pub fn as_str(self) -> &'static str {
        match self {
            RevealState::Static => "static",
            RevealState::Armed => "armed",
            RevealState::Entered => "entered",
        }
    }
}

/// Stagger between consecutive cards' entrance transitions
pub const ENTRANCE_STAGGER_MS: u32 = 100;

/// Duration of a card's entrance transition
pub const ENTRANCE_DURATION_MS: u32 = 800;

/// Transition delay for the card at `index` within its grid
pub fn entrance_delay_ms(index: usize) -> u32 {
    (index as u32).saturating_mul(ENTRANCE_STAGGER_MS)
}
