//! Platform-specific configuration

use crossterm::event::KeyModifiers;

/// Modifier for the submit and reload shortcuts.
/// Terminals rarely forward Cmd, so Ctrl is used everywhere.
pub const SHORTCUT_MODIFIER: KeyModifiers = KeyModifiers::CONTROL;

/// Submit shortcut display for help text
pub const SUBMIT_SHORTCUT: &str = "Ctrl+S";

/// Reload locations shortcut display
pub const RELOAD_SHORTCUT: &str = "Ctrl+R";

/// Quit shortcut display
pub const QUIT_SHORTCUT: &str = "Esc/Ctrl+C";
