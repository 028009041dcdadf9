/// Global keyboard shortcuts.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum KeyAction {
    TogglePanel,
    TogglePause,
    RegenerateRandomMotion,
    ToggleFullscreen,
    ExitFullscreen,
}

#[inline]
pub fn action_for_key(key: &str) -> Option<KeyAction> {
    match key {
        "h" | "H" => Some(KeyAction::TogglePanel),
        " " => Some(KeyAction::TogglePause),
        "r" | "R" => Some(KeyAction::RegenerateRandomMotion),
        "Enter" => Some(KeyAction::ToggleFullscreen),
        "Escape" => Some(KeyAction::ExitFullscreen),
        _ => None,
    }
}

/// Whether a focused element consumes plain key presses itself.
///
/// Sliders, checkboxes and color swatches take no typed text, so shortcuts
/// stay live after one of them is used.
pub fn captures_keys(tag: &str, input_type: &str) -> bool {
    match tag.to_ascii_uppercase().as_str() {
        "TEXTAREA" | "SELECT" => true,
        "INPUT" => !matches!(
            input_type.to_ascii_lowercase().as_str(),
            "range" | "checkbox" | "color"
        ),
        _ => false,
    }
}
