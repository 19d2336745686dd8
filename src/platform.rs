//! Platform-specific configuration

use crossterm::event::KeyModifiers;

/// Modifiers that trigger the submit shortcut with `s`
/// - macOS: SUPER (Cmd key) or CONTROL
/// - Linux/Windows: CONTROL (Ctrl key)
#[cfg(target_os = "macos")]
pub const SUBMIT_MODIFIERS: KeyModifiers = KeyModifiers::SUPER.union(KeyModifiers::CONTROL);

#[cfg(not(target_os = "macos"))]
pub const SUBMIT_MODIFIERS: KeyModifiers = KeyModifiers::CONTROL;

/// Submit shortcut display for the status bar
/// Ctrl+S works on all platforms (Cmd+S also works on macOS)
#[cfg(target_os = "macos")]
pub const SUBMIT_SHORTCUT: &str = "Cmd+S";

#[cfg(not(target_os = "macos"))]
pub const SUBMIT_SHORTCUT: &str = "Ctrl+S";

/// Whether `modifiers` turn `s` into the submit shortcut
pub fn is_submit_modifier(modifiers: KeyModifiers) -> bool {
    modifiers.intersects(SUBMIT_MODIFIERS)
}

/// Whether a character key should be typed into the focused field
pub fn is_text_input(modifiers: KeyModifiers) -> bool {
    !modifiers.intersects(KeyModifiers::CONTROL | KeyModifiers::ALT | KeyModifiers::SUPER)
}
