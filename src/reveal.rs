//! Visibility-gated reveal state.
//!
//! Skills, projects and experience fade in (and skill bars fill) the first
//! time their section scrolls into view. Each section owns a [`RevealLatch`]:
//!
//! ```text
//! NotRevealed ──(visibility ratio >= threshold)──▶ Revealed
//!                                                     │
//!                      any later signal ──────────────┘ (no change)
//! ```
//!
//! The latch only moves forward. Scrolling away and back does not replay the
//! animation.
//!
//! Until the latch fires, every value it gates reads as its baseline: bar
//! width 0, opacity 0, no delay. The document may be fully loaded long
//! before the section is seen; loading and revealing are separate facts.

use crate::types::SectionId;
use tracing::debug;

/// Fraction of the section that must be visible to reveal it.
pub const DEFAULT_THRESHOLD: f64 = 0.3;

/// Delay between consecutive items of a staggered reveal.
pub const DEFAULT_STAGGER_MS: u32 = 200;

/// A visibility observation for one section.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct VisibilitySignal {
    /// Visible fraction of the section, `0.0..=1.0`.
    pub ratio: f64,
}

impl VisibilitySignal {
    pub fn new(ratio: f64) -> Self {
        Self { ratio }
    }

    /// A signal meaning "the whole section is on screen".
    pub fn fully_visible() -> Self {
        Self { ratio: 1.0 }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum RevealState {
    #[default]
    NotRevealed,
    Revealed,
}

/// One-way latch for a single section.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct RevealLatch {
    state: RevealState,
    threshold: f64,
}

impl Default for RevealLatch {
    fn default() -> Self {
        Self::new(DEFAULT_THRESHOLD)
    }
}

impl RevealLatch {
    pub fn new(threshold: f64) -> Self {
        Self {
            state: RevealState::NotRevealed,
            threshold,
        }
    }

    pub fn state(&self) -> RevealState {
        self.state
    }

    pub fn is_revealed(&self) -> bool {
        self.state == RevealState::Revealed
    }

    pub fn threshold(&self) -> f64 {
        self.threshold
    }

    /// Feed a visibility signal. Returns `true` only on the transition.
    pub fn observe(&mut self, signal: VisibilitySignal) -> bool {
        if self.is_revealed() || signal.ratio < self.threshold {
            return false;
        }
        self.state = RevealState::Revealed;
        true
    }

    /// Skill bar fill, in percent.
    pub fn bar_width(&self, level: u8) -> u8 {
        if self.is_revealed() { level.min(100) } else { 0 }
    }

    pub fn opacity(&self) -> f32 {
        if self.is_revealed() { 1.0 } else { 0.0 }
    }

    /// Animation delay of the `index`-th item (0-based) of a staggered list.
    pub fn stagger_delay_ms(&self, index: usize, step_ms: u32) -> u32 {
        if self.is_revealed() {
            stagger_target_ms(index, step_ms)
        } else {
            0
        }
    }
}

/// Delay the `index`-th item settles at once its section is revealed.
pub fn stagger_target_ms(index: usize, step_ms: u32) -> u32 {
    step_ms.saturating_mul(u32::try_from(index).unwrap_or(u32::MAX))
}

/// The latches of every animated section on the page.
#[derive(Debug, Clone, PartialEq)]
pub struct SectionReveals {
    skills: RevealLatch,
    projects: RevealLatch,
    experience: RevealLatch,
}

impl SectionReveals {
    pub fn new(threshold: f64) -> Self {
        Self {
            skills: RevealLatch::new(threshold),
            projects: RevealLatch::new(threshold),
            experience: RevealLatch::new(threshold),
        }
    }

    /// The latch for a section, or `None` if the section does not animate.
    pub fn latch(&self, section: SectionId) -> Option<&RevealLatch> {
        match section {
            SectionId::Skills => Some(&self.skills),
            SectionId::Projects => Some(&self.projects),
            SectionId::Experience => Some(&self.experience),
            _ => None,
        }
    }

    fn latch_mut(&mut self, section: SectionId) -> Option<&mut RevealLatch> {
        match section {
            SectionId::Skills => Some(&mut self.skills),
            SectionId::Projects => Some(&mut self.projects),
            SectionId::Experience => Some(&mut self.experience),
            _ => None,
        }
    }

    /// Route a signal to its section. Non-animated sections ignore signals.
    pub fn observe(&mut self, section: SectionId, signal: VisibilitySignal) -> bool {
        let fired = self
            .latch_mut(section)
            .map(|latch| latch.observe(signal))
            .unwrap_or(false);
        if fired {
            debug!(section = section.anchor(), "section revealed");
        }
        fired
    }

    /// Reveal every section at once (animations disabled).
    pub fn reveal_all(&mut self) {
        for section in SectionId::ANIMATED {
            self.observe(section, VisibilitySignal::fully_visible());
        }
    }
}
