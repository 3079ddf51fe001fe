//! Typewriter reveal.
//!
//! A [`Typewriter`] reveals a string one character at a time. It owns no
//! timer: the driver asks [`Typewriter::next_delay`] how long to wait, sleeps,
//! then calls [`Typewriter::advance`]. Restarting with new text resets the
//! reveal to zero, and the driver is expected to cancel whatever sleep it
//! had outstanding for the old text.
//!
//! ```
//! use std::time::Duration;
//! use bravonest_core::typewriter::{Typewriter, TypewriterOptions};
//!
//! let mut tw = Typewriter::new("hey", TypewriterOptions::with_speed(Duration::from_millis(40)));
//! while let Some(_delay) = tw.next_delay() {
//!     tw.advance();
//! }
//! assert_eq!(tw.revealed(), "hey");
//! assert!(tw.is_complete());
//! ```

use std::time::Duration;

/// Per-character delay used when none is configured
pub const DEFAULT_SPEED: Duration = Duration::from_millis(45);

/// Pause on a fully revealed string before a looping typewriter rewinds
pub const LOOP_PAUSE: Duration = Duration::from_millis(800);

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TypewriterOptions {
    /// Delay before each character appears
    pub speed: Duration,
    /// Rewind and retype after completion
    pub looping: bool,
}

impl Default for TypewriterOptions {
    fn default() -> Self {
        Self {
            speed: DEFAULT_SPEED,
            looping: false,
        }
    }
}

impl TypewriterOptions {
    pub fn with_speed(speed: Duration) -> Self {
        Self {
            speed,
            ..Self::default()
        }
    }

    pub fn looping(mut self, looping: bool) -> Self {
        self.looping = looping;
        self
    }
}

/// Outcome of one scheduled tick
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Tick {
    /// One more character became visible
    Typed,
    /// The last character became visible
    Completed,
    /// A looping typewriter went back to an empty prefix
    Rewound,
    /// Nothing was scheduled; the tick was ignored
    Idle,
}

/// Reveal state for one source string.
///
/// `revealed` counts characters, not bytes, and always satisfies
/// `revealed <= text.chars().count()`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Typewriter {
    text: String,
    char_len: usize,
    revealed: usize,
    playing: bool,
    options: TypewriterOptions,
}

impl Typewriter {
    pub fn new(text: impl Into<String>, options: TypewriterOptions) -> Self {
        let mut tw = Self {
            text: String::new(),
            char_len: 0,
            revealed: 0,
            playing: true,
            options,
        };
        tw.start(text);
        tw
    }

    /// Reset to an empty prefix of `text` and start playing
    pub fn start(&mut self, text: impl Into<String>) {
        self.text = text.into();
        self.char_len = self.text.chars().count();
        self.revealed = 0;
        self.playing = true;
    }

    /// Like [`start`](Self::start), but a no-op when the text is unchanged.
    ///
    /// Returns true when the reveal was reset.
    pub fn retarget(&mut self, text: &str) -> bool {
        if self.text == text {
            return false;
        }
        self.start(text);
        true
    }

    pub fn set_speed(&mut self, speed: Duration) {
        self.options.speed = speed;
    }

    pub fn pause(&mut self) {
        self.playing = false;
    }

    pub fn resume(&mut self) {
        self.playing = true;
    }

    pub fn is_playing(&self) -> bool {
        self.playing
    }

    pub fn text(&self) -> &str {
        &self.text
    }

    pub fn options(&self) -> TypewriterOptions {
        self.options
    }

    /// Number of visible characters
    pub fn revealed_len(&self) -> usize {
        self.revealed
    }

    /// Total number of characters in the source text
    pub fn len(&self) -> usize {
        self.char_len
    }

    pub fn is_empty(&self) -> bool {
        self.char_len == 0
    }

    pub fn is_complete(&self) -> bool {
        self.revealed >= self.char_len
    }

    /// The visible prefix
    pub fn revealed(&self) -> &str {
        prefix_chars(&self.text, self.revealed)
    }

    /// Visible part of the characters in `range_start..range_start + len`.
    ///
    /// Used to split a headline into separately styled segments that share
    /// one reveal.
    pub fn revealed_segment(&self, range_start: usize, len: usize) -> &str {
        let visible = self.revealed.saturating_sub(range_start).min(len);
        let start = byte_offset(&self.text, range_start);
        prefix_chars(&self.text[start..], visible)
    }

    /// Delay until the next tick, or `None` when nothing is scheduled
    pub fn next_delay(&self) -> Option<Duration> {
        if !self.playing || self.char_len == 0 {
            return None;
        }
        if self.revealed < self.char_len {
            Some(self.options.speed)
        } else if self.options.looping {
            Some(LOOP_PAUSE)
        } else {
            None
        }
    }

    /// Apply one tick that the driver waited [`next_delay`](Self::next_delay) for
    pub fn advance(&mut self) -> Tick {
        if self.next_delay().is_none() {
            return Tick::Idle;
        }
        if self.revealed < self.char_len {
            self.revealed += 1;
            if self.revealed == self.char_len {
                Tick::Completed
            } else {
                Tick::Typed
            }
        } else {
            self.revealed = 0;
            Tick::Rewound
        }
    }

    /// Time left until the full text is visible while playing
    pub fn remaining(&self) -> Duration {
        let left = (self.char_len - self.revealed) as u32;
        self.options.speed * left
    }
}

fn byte_offset(text: &str, chars: usize) -> usize {
    text.char_indices()
        .nth(chars)
        .map(|(idx, _)| idx)
        .unwrap_or(text.len())
}

fn prefix_chars(text: &str, chars: usize) -> &str {
    &text[..byte_offset(text, chars)]
}

#[cfg(test)]
mod tests {
    use super::*;

    fn fast() -> TypewriterOptions {
        TypewriterOptions::with_speed(Duration::from_millis(10))
    }

    #[test]
    fn starts_empty_and_reveals_one_char_per_tick() {
        let mut tw = Typewriter::new("abc", fast());
        assert_eq!(tw.revealed(), "");
        assert_eq!(tw.next_delay(), Some(Duration::from_millis(10)));

        assert_eq!(tw.advance(), Tick::Typed);
        assert_eq!(tw.revealed(), "a");
        assert_eq!(tw.advance(), Tick::Typed);
        assert_eq!(tw.advance(), Tick::Completed);
        assert_eq!(tw.revealed(), "abc");
        assert!(tw.is_complete());
        assert_eq!(tw.next_delay(), None);
        assert_eq!(tw.advance(), Tick::Idle);
        assert_eq!(tw.revealed_len(), 3);
    }

    #[test]
    fn looping_pauses_then_rewinds() {
        let mut tw = Typewriter::new("ab", fast().looping(true));
        tw.advance();
        tw.advance();
        assert_eq!(tw.next_delay(), Some(LOOP_PAUSE));
        assert_eq!(tw.advance(), Tick::Rewound);
        assert_eq!(tw.revealed(), "");
        assert_eq!(tw.next_delay(), Some(Duration::from_millis(10)));
    }

    #[test]
    fn changing_text_mid_reveal_resets() {
        let mut tw = Typewriter::new("hello", fast());
        tw.advance();
        tw.advance();
        assert!(tw.retarget("world"));
        assert_eq!(tw.revealed_len(), 0);
        assert_eq!(tw.revealed(), "");
        assert!(!tw.retarget("world"));
    }

    #[test]
    fn pause_stops_scheduling_and_resume_continues() {
        let mut tw = Typewriter::new("abc", fast());
        tw.advance();
        tw.pause();
        assert_eq!(tw.next_delay(), None);
        assert_eq!(tw.advance(), Tick::Idle);
        assert_eq!(tw.revealed(), "a");

        tw.resume();
        assert_eq!(tw.advance(), Tick::Typed);
        assert_eq!(tw.revealed(), "ab");
    }

    #[test]
    fn multibyte_text_is_revealed_by_character() {
        let mut tw = Typewriter::new("héllo ☀", fast());
        assert_eq!(tw.len(), 7);
        tw.advance();
        tw.advance();
        assert_eq!(tw.revealed(), "hé");
        while tw.next_delay().is_some() {
            tw.advance();
        }
        assert_eq!(tw.revealed(), "héllo ☀");
    }

    #[test]
    fn empty_text_is_complete_and_never_schedules() {
        let tw = Typewriter::new("", fast().looping(true));
        assert!(tw.is_complete());
        assert_eq!(tw.next_delay(), None);
    }

    #[test]
    fn segments_share_one_reveal() {
        let lead = "Where Ideas Become ";
        let target = "Innovative";
        let mut tw = Typewriter::new(format!("{lead}{target}"), fast());
        let lead_len = lead.chars().count();
        let target_len = target.chars().count();

        for _ in 0..5 {
            tw.advance();
        }
        assert_eq!(tw.revealed_segment(0, lead_len), "Where");
        assert_eq!(tw.revealed_segment(lead_len, target_len), "");

        for _ in 0..(lead_len - 5 + 3) {
            tw.advance();
        }
        assert_eq!(tw.revealed_segment(0, lead_len), lead);
        assert_eq!(tw.revealed_segment(lead_len, target_len), "Inn");
    }

    #[test]
    fn remaining_is_speed_times_hidden_chars() {
        let mut tw = Typewriter::new("abcd", fast());
        assert_eq!(tw.remaining(), Duration::from_millis(40));
        tw.advance();
        assert_eq!(tw.remaining(), Duration::from_millis(30));
    }
}
