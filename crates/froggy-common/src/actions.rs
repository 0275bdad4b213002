use serde::{Deserialize, Serialize};

/// Every user-triggerable input on the companion.
///
/// The desktop shell (mouse, keyboard, context menu, tray) and the line
/// shell both resolve their raw input to an `Action`; the controller
/// matches on this enum to drive the state machine.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub enum Action {
    // -- Prompt / chat --
    /// Context menu "Inquiry": reveal and focus the prompt input.
    OpenPrompt,
    /// Escape while the prompt is focused: hide it without submitting.
    HidePrompt,
    /// Return pressed in the prompt input. The text is sent as-is.
    SubmitPrompt(String),

    // -- Companion body --
    /// Double-click anywhere on the companion: tell a random fact.
    Poke,

    // -- Window --
    /// Primary button pressed; coordinates are window-relative.
    DragStart { x: f64, y: f64 },
    /// Pointer moved with the primary button held.
    DragMove { x: f64, y: f64 },
    /// Primary button released.
    DragEnd,

    // -- Process --
    /// Context menu "Dismiss" or tray "Quit".
    Quit,
}

impl Action {
    /// Human-readable label for menus and the line shell's help text.
    pub fn label(&self) -> &'static str {
        match self {
            Action::OpenPrompt => "Inquiry",
            Action::HidePrompt => "Hide Prompt",
            Action::SubmitPrompt(_) => "Ask",
            Action::Poke => "Poke",
            Action::DragStart { .. } => "Drag Start",
            Action::DragMove { .. } => "Drag Move",
            Action::DragEnd => "Drag End",
            Action::Quit => "Dismiss",
        }
    }
}
