//! One-shot scroll reveal.
//!
//! `NotVisible --(ratio >= threshold)--> Visible`, and `Visible` is terminal.

use std::time::Duration;

/// Visible fraction that flips a reveal by default
pub const DEFAULT_THRESHOLD: f64 = 0.2;

/// CSS class toggled on revealed elements
pub const VISIBLE_CLASS: &str = "visible";

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Visibility {
    NotVisible,
    Visible,
}

/// Latch driven by intersection ratios
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ScrollReveal {
    state: Visibility,
    threshold: f64,
    delay: Duration,
}

impl Default for ScrollReveal {
    fn default() -> Self {
        Self::new(DEFAULT_THRESHOLD)
    }
}

impl ScrollReveal {
    /// `threshold` is clamped into `[0, 1]`
    pub fn new(threshold: f64) -> Self {
        let threshold = if threshold.is_nan() {
            DEFAULT_THRESHOLD
        } else {
            threshold.clamp(0.0, 1.0)
        };
        Self {
            state: Visibility::NotVisible,
            threshold,
            delay: Duration::ZERO,
        }
    }

    /// Stagger the transition of this instance within a group
    pub fn with_delay(mut self, delay: Duration) -> Self {
        self.delay = delay;
        self
    }

    pub fn threshold(&self) -> f64 {
        self.threshold
    }

    pub fn delay(&self) -> Duration {
        self.delay
    }

    pub fn state(&self) -> Visibility {
        self.state
    }

    pub fn is_visible(&self) -> bool {
        self.state == Visibility::Visible
    }

    /// Feed one observation. Returns true only on the transition to visible.
    pub fn observe(&mut self, intersecting: bool, ratio: f64) -> bool {
        if self.is_visible() {
            return false;
        }
        if intersecting && ratio >= self.threshold {
            self.state = Visibility::Visible;
            return true;
        }
        false
    }

    /// Class list fragment for the observed element
    pub fn class(&self) -> &'static str {
        if self.is_visible() {
            VISIBLE_CLASS
        } else {
            ""
        }
    }

    /// Inline `transition-delay` style
    pub fn delay_style(&self) -> String {
        format!("transition-delay: {}ms;", self.delay.as_millis())
    }
}

/// Delay for the `index`-th item of a staggered group
pub fn stagger(index: usize, step: Duration) -> Duration {
    step * index as u32
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn flips_once_threshold_is_crossed() {
        let mut reveal = ScrollReveal::new(0.2);
        assert!(!reveal.observe(true, 0.1));
        assert!(!reveal.is_visible());
        assert!(reveal.observe(true, 0.25));
        assert!(reveal.is_visible());
        assert_eq!(reveal.class(), "visible");
    }

    #[test]
    fn never_hides_again() {
        let mut reveal = ScrollReveal::default();
        reveal.observe(true, 1.0);
        assert!(!reveal.observe(false, 0.0));
        assert!(!reveal.observe(true, 0.5));
        assert_eq!(reveal.state(), Visibility::Visible);
    }

    #[test]
    fn non_intersecting_entries_are_ignored() {
        let mut reveal = ScrollReveal::new(0.0);
        assert!(!reveal.observe(false, 0.0));
        assert!(reveal.observe(true, 0.0));
    }

    #[test]
    fn threshold_is_clamped() {
        assert_eq!(ScrollReveal::new(3.0).threshold(), 1.0);
        assert_eq!(ScrollReveal::new(-1.0).threshold(), 0.0);
        assert_eq!(ScrollReveal::new(f64::NAN).threshold(), DEFAULT_THRESHOLD);
    }

    #[test]
    fn stagger_and_delay_style() {
        let reveal = ScrollReveal::default().with_delay(stagger(3, Duration::from_millis(70)));
        assert_eq!(reveal.delay(), Duration::from_millis(210));
        assert_eq!(reveal.delay_style(), "transition-delay: 210ms;");
    }
}
