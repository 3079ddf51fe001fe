//! Focus trap for the navigation drawer.
//!
//! The trap works on positions within the drawer's ordered list of focusable
//! descendants; the browser layer resolves those positions to elements. `H`
//! is whatever handle the platform uses for "the element focused before the
//! drawer opened".

use std::time::Duration;

/// Descendants that can take keyboard focus
pub const FOCUSABLE_SELECTOR: &str =
    "a[href], button:not([disabled]), textarea, input, select, [tabindex]:not([tabindex=\"-1\"])";

/// Wait for the slide-in transition before focusing the first item
pub const INITIAL_FOCUS_DELAY: Duration = Duration::from_millis(120);

/// Per-item delay while the drawer opens
pub const ENTER_STAGGER: Duration = Duration::from_millis(60);

/// Per-item delay while the drawer closes (last item leaves first)
pub const EXIT_STAGGER: Duration = Duration::from_millis(40);

/// Keys the trap cares about
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TrapKey {
    Tab,
    ShiftTab,
    Escape,
    Other,
}

impl TrapKey {
    /// Classify a `KeyboardEvent.key` value
    pub fn from_key(key: &str, shift: bool) -> Self {
        match key {
            "Tab" if shift => TrapKey::ShiftTab,
            "Tab" => TrapKey::Tab,
            "Escape" | "Esc" => TrapKey::Escape,
            _ => TrapKey::Other,
        }
    }
}

/// What the drawer should do with a key press
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TrapAction {
    /// Let the browser handle the key
    Pass,
    /// Prevent the default and focus the item at this position
    Focus(usize),
    /// Prevent the default and close the drawer
    Close,
}

impl TrapAction {
    pub fn prevents_default(&self) -> bool {
        !matches!(self, TrapAction::Pass)
    }
}

#[derive(Debug)]
pub struct FocusTrap<H> {
    previously_focused: Option<H>,
    open: bool,
}

impl<H> Default for FocusTrap<H> {
    fn default() -> Self {
        Self {
            previously_focused: None,
            open: false,
        }
    }
}

impl<H> FocusTrap<H> {
    pub fn new() -> Self {
        Self::default()
    }

    /// Start trapping and remember where focus was
    pub fn open(&mut self, previously_focused: Option<H>) {
        self.previously_focused = previously_focused;
        self.open = true;
    }

    pub fn is_open(&self) -> bool {
        self.open
    }

    /// Stop trapping and hand back the element that should regain focus
    pub fn close(&mut self) -> Option<H> {
        self.open = false;
        self.previously_focused.take()
    }

    /// Position to focus once the panel has slid in
    pub fn initial_focus(&self, focusable: usize) -> Option<usize> {
        (self.open && focusable > 0).then_some(0)
    }

    /// Decide how to handle `key` given which item (if any) has focus
    pub fn on_key(&self, key: TrapKey, active: Option<usize>, focusable: usize) -> TrapAction {
        if !self.open {
            return TrapAction::Pass;
        }
        if key == TrapKey::Escape {
            return TrapAction::Close;
        }
        if focusable == 0 {
            return TrapAction::Pass;
        }

        let last = focusable - 1;
        match (key, active) {
            (TrapKey::Tab, Some(i)) if i >= last => TrapAction::Focus(0),
            (TrapKey::Tab, None) => TrapAction::Focus(0),
            (TrapKey::ShiftTab, Some(0)) | (TrapKey::ShiftTab, None) => TrapAction::Focus(last),
            _ => TrapAction::Pass,
        }
    }
}

/// Transition delay for the `index`-th of `count` drawer items.
///
/// Items cascade in top-down when opening and bottom-up when closing.
pub fn item_transition_delay(index: usize, count: usize, open: bool) -> Duration {
    if open {
        ENTER_STAGGER * index as u32
    } else {
        EXIT_STAGGER * count.saturating_sub(index) as u32
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn open_trap() -> FocusTrap<&'static str> {
        let mut trap = FocusTrap::new();
        trap.open(Some("menu-button"));
        trap
    }

    #[test]
    fn tab_on_last_wraps_to_first() {
        let trap = open_trap();
        assert_eq!(trap.on_key(TrapKey::Tab, Some(4), 5), TrapAction::Focus(0));
        assert_eq!(trap.on_key(TrapKey::Tab, Some(2), 5), TrapAction::Pass);
    }

    #[test]
    fn shift_tab_on_first_wraps_to_last() {
        let trap = open_trap();
        assert_eq!(trap.on_key(TrapKey::ShiftTab, Some(0), 5), TrapAction::Focus(4));
        assert_eq!(trap.on_key(TrapKey::ShiftTab, Some(3), 5), TrapAction::Pass);
    }

    #[test]
    fn focus_outside_panel_is_pulled_in() {
        let trap = open_trap();
        assert_eq!(trap.on_key(TrapKey::Tab, None, 3), TrapAction::Focus(0));
        assert_eq!(trap.on_key(TrapKey::ShiftTab, None, 3), TrapAction::Focus(2));
    }

    #[test]
    fn escape_requests_close() {
        let trap = open_trap();
        let action = trap.on_key(TrapKey::from_key("Escape", false), Some(1), 3);
        assert_eq!(action, TrapAction::Close);
        assert!(action.prevents_default());
    }

    #[test]
    fn closed_trap_passes_everything() {
        let trap: FocusTrap<()> = FocusTrap::new();
        assert_eq!(trap.on_key(TrapKey::Escape, None, 3), TrapAction::Pass);
        assert_eq!(trap.initial_focus(3), None);
    }

    #[test]
    fn close_restores_previous_focus_once() {
        let mut trap = open_trap();
        assert_eq!(trap.initial_focus(2), Some(0));
        assert_eq!(trap.close(), Some("menu-button"));
        assert!(!trap.is_open());
        assert_eq!(trap.close(), None);
    }

    #[test]
    fn key_classification() {
        assert_eq!(TrapKey::from_key("Tab", true), TrapKey::ShiftTab);
        assert_eq!(TrapKey::from_key("Tab", false), TrapKey::Tab);
        assert_eq!(TrapKey::from_key("Enter", false), TrapKey::Other);
    }

    #[test]
    fn items_cascade_both_ways() {
        assert_eq!(item_transition_delay(0, 5, true), Duration::ZERO);
        assert_eq!(item_transition_delay(2, 5, true), Duration::from_millis(120));
        assert_eq!(item_transition_delay(0, 5, false), Duration::from_millis(200));
        assert_eq!(item_transition_delay(4, 5, false), Duration::from_millis(40));
    }
}
