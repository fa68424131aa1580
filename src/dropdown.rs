//! Dropdown visibility state machine for the breed filter.

/// Whether the breed panel is shown
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum DropdownState {
    #[default]
    Closed,
    Open,
}

/// UI events that can move the dropdown between states
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DropdownEvent {
    /// Click on the toggle button (browsers also fire this for Enter/Space)
    ToggleActivated,
    EscapePressed,
    /// Pointer pressed somewhere on the page
    PointerDown { inside: bool },
    /// Keyboard focus landed on a new element
    FocusMoved { inside: bool },
}

impl DropdownState {
    pub fn is_open(self) -> bool {
        self == DropdownState::Open
    }

    /// Next state after `event`
    pub fn apply(self, event: DropdownEvent) -> Self {
        use DropdownEvent::*;
        use DropdownState::*;

        match (self, event) {
            (Closed, ToggleActivated) => Open,
            (Open, ToggleActivated) => Closed,
            (_, EscapePressed) => Closed,
            (Open, PointerDown { inside: false }) | (Open, FocusMoved { inside: false }) => Closed,
            (state, PointerDown { .. }) | (state, FocusMoved { .. }) => state,
        }
    }
}
