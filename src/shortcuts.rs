//! Centralized shortcut and action system.
//!
//! This module provides a unified system for keyboard shortcuts and actions,
//! connecting help text definitions with actual event handling logic.

use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};
use std::collections::HashMap;

/// Shortcut context names.
pub mod contexts {
    /// Map view (no popup)
    pub const MAIN: &str = "main";
    /// Help overlay
    pub const HELP: &str = "help";
}

/// Every action a key can trigger in the interactive map.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Action {
    // === NAVIGATION ===
    /// Move the region cursor up one row
    NavigateUp,
    /// Move the region cursor down one row
    NavigateDown,
    /// Move the region cursor left
    NavigateLeft,
    /// Move the region cursor right
    NavigateRight,
    /// Jump to the first region
    JumpToFirst,
    /// Jump to the last region
    JumpToLast,

    // === PALETTE ===
    /// Select the palette color at this zero-based slot
    SelectColorSlot(usize),
    /// Select the next palette color
    NextColor,
    /// Select the previous palette color
    PreviousColor,
    /// Drop the selected color
    ClearSelection,

    // === COLORING ===
    /// Color the region under the cursor
    ColorRegion,
    /// Run greedy auto-coloring with a fresh shuffled order
    AutoColor,
    /// Clear the map
    Reset,

    // === HELP ===
    /// Open or close the help overlay
    ToggleHelp,
    /// Scroll help up
    ScrollUp,
    /// Scroll help down
    ScrollDown,
    /// Scroll help by a page up
    PageUp,
    /// Scroll help by a page down
    PageDown,

    // === GENERAL ===
    /// Leave the application
    Quit,
}

impl Action {
    /// Stable identifier used in logs.
    #[must_use]
    pub const fn id(&self) -> &'static str {
        match self {
            Self::NavigateUp => "navigate_up",
            Self::NavigateDown => "navigate_down",
            Self::NavigateLeft => "navigate_left",
            Self::NavigateRight => "navigate_right",
            Self::JumpToFirst => "jump_first",
            Self::JumpToLast => "jump_last",

            Self::SelectColorSlot(_) => "select_color_slot",
            Self::NextColor => "next_color",
            Self::PreviousColor => "previous_color",
            Self::ClearSelection => "clear_selection",

            Self::ColorRegion => "color_region",
            Self::AutoColor => "auto_color",
            Self::Reset => "reset",

            Self::ToggleHelp => "toggle_help",
            Self::ScrollUp => "scroll_up",
            Self::ScrollDown => "scroll_down",
            Self::PageUp => "page_up",
            Self::PageDown => "page_down",

            Self::Quit => "quit",
        }
    }
}

/// One line of help text: key label, short hint, long description.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct HelpEntry {
    /// Keys as shown to the user
    pub keys: &'static str,
    /// Short label for the status bar
    pub hint: &'static str,
    /// Full description for the help overlay
    pub description: &'static str,
}

const fn entry(keys: &'static str, hint: &'static str, description: &'static str) -> HelpEntry {
    HelpEntry {
        keys,
        hint,
        description,
    }
}

/// Help sections for the map view, in display order.
pub const MAIN_HELP: &[(&str, &[HelpEntry])] = &[
    (
        "NAVIGATION",
        &[
            entry("Arrows / hjkl", "Move", "Move between regions"),
            entry("Home / End", "First/Last", "Jump to the first or last region"),
        ],
    ),
    (
        "COLORS",
        &[
            entry("1-9", "Pick color", "Select a palette color by number"),
            entry("Tab / Shift+Tab", "Cycle", "Select the next or previous color"),
            entry("Esc", "Deselect", "Clear the selected color"),
        ],
    ),
    (
        "COLORING",
        &[
            entry("Enter / Space", "Color", "Color the highlighted region"),
            entry("a", "Auto", "Greedy auto-color in a random order"),
            entry("r", "Reset", "Clear all colors and the trace"),
        ],
    ),
    (
        "GENERAL",
        &[
            entry("?", "Help", "Show or hide this help"),
            entry("q / Ctrl+Q", "Quit", "Quit"),
        ],
    ),
];

/// Hints shown in the status bar for the help overlay.
pub const HELP_OVERLAY_HINTS: &[HelpEntry] = &[
    entry("↑↓ / jk", "Scroll", "Scroll"),
    entry("PgUp/PgDn", "Page", "Scroll by page"),
    entry("? / Esc", "Close", "Close help"),
];

/// Shortcut registry that maps key events to actions for a given context.
///
/// This is the central source of truth for all keyboard shortcuts in the application.
pub struct ShortcutRegistry {
    /// Maps (context, key_binding) to Action
    bindings: HashMap<(&'static str, KeyBinding), Action>,
}

/// A key binding (key + modifiers).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct KeyBinding {
    /// Key code
    pub code: KeyCode,
    /// Modifier keys
    pub modifiers: KeyModifiers,
}

impl KeyBinding {
    /// Create a new key binding.
    #[must_use]
    pub const fn new(code: KeyCode, modifiers: KeyModifiers) -> Self {
        Self { code, modifiers }
    }

    /// Create a key binding from a KeyEvent.
    #[must_use]
    pub const fn from_event(event: KeyEvent) -> Self {
        Self {
            code: event.code,
            modifiers: event.modifiers,
        }
    }
}

impl ShortcutRegistry {
    /// Create a new shortcut registry with default bindings.
    #[must_use]
    pub fn new() -> Self {
        let mut registry = Self {
            bindings: HashMap::new(),
        };

        registry.register_main_shortcuts();
        registry.register_help_shortcuts();
        registry
    }

    /// Register all shortcuts for the main context.
    fn register_main_shortcuts(&mut self) {
        use KeyCode as K;
        use KeyModifiers as M;

        let ctx = contexts::MAIN;

        // === NAVIGATION ===
        self.register(ctx, K::Up, M::NONE, Action::NavigateUp);
        self.register(ctx, K::Down, M::NONE, Action::NavigateDown);
        self.register(ctx, K::Left, M::NONE, Action::NavigateLeft);
        self.register(ctx, K::Right, M::NONE, Action::NavigateRight);
        self.register(ctx, K::Char('k'), M::NONE, Action::NavigateUp);
        self.register(ctx, K::Char('j'), M::NONE, Action::NavigateDown);
        self.register(ctx, K::Char('h'), M::NONE, Action::NavigateLeft);
        self.register(ctx, K::Char('l'), M::NONE, Action::NavigateRight);
        self.register(ctx, K::Home, M::NONE, Action::JumpToFirst);
        self.register(ctx, K::End, M::NONE, Action::JumpToLast);

        // === PALETTE ===
        for (slot, digit) in ('1'..='9').enumerate() {
            self.register(ctx, K::Char(digit), M::NONE, Action::SelectColorSlot(slot));
        }
        self.register(ctx, K::Tab, M::NONE, Action::NextColor);
        self.register(ctx, K::BackTab, M::SHIFT, Action::PreviousColor);
        self.register(ctx, K::BackTab, M::NONE, Action::PreviousColor);
        self.register(ctx, K::Esc, M::NONE, Action::ClearSelection);

        // === COLORING ===
        self.register(ctx, K::Enter, M::NONE, Action::ColorRegion);
        self.register(ctx, K::Char(' '), M::NONE, Action::ColorRegion);
        self.register(ctx, K::Char('a'), M::NONE, Action::AutoColor);
        self.register(ctx, K::Char('r'), M::NONE, Action::Reset);

        // === HELP ===
        self.register(ctx, K::Char('?'), M::NONE, Action::ToggleHelp);
        self.register(ctx, K::Char('?'), M::SHIFT, Action::ToggleHelp);

        // === GENERAL ===
        self.register(ctx, K::Char('q'), M::NONE, Action::Quit);
        self.register(ctx, K::Char('q'), M::CONTROL, Action::Quit);
    }

    /// Register shortcuts active while the help overlay is open.
    fn register_help_shortcuts(&mut self) {
        use KeyCode as K;
        use KeyModifiers as M;

        let ctx = contexts::HELP;

        self.register(ctx, K::Up, M::NONE, Action::ScrollUp);
        self.register(ctx, K::Down, M::NONE, Action::ScrollDown);
        self.register(ctx, K::Char('k'), M::NONE, Action::ScrollUp);
        self.register(ctx, K::Char('j'), M::NONE, Action::ScrollDown);
        self.register(ctx, K::PageUp, M::NONE, Action::PageUp);
        self.register(ctx, K::PageDown, M::NONE, Action::PageDown);
        self.register(ctx, K::Char('?'), M::NONE, Action::ToggleHelp);
        self.register(ctx, K::Char('?'), M::SHIFT, Action::ToggleHelp);
        self.register(ctx, K::Esc, M::NONE, Action::ToggleHelp);
        self.register(ctx, K::Char('q'), M::CONTROL, Action::Quit);
    }

    /// Register a shortcut binding.
    fn register(
        &mut self,
        context: &'static str,
        code: KeyCode,
        modifiers: KeyModifiers,
        action: Action,
    ) {
        let binding = KeyBinding::new(code, modifiers);
        self.bindings.insert((context, binding), action);
    }

    /// Look up an action for a given context and key event.
    #[must_use]
    pub fn lookup(&self, context: &'static str, event: KeyEvent) -> Option<Action> {
        let binding = KeyBinding::from_event(event);
        self.bindings.get(&(context, binding)).copied()
    }
}

impl Default for ShortcutRegistry {
    fn default() -> Self {
        Self::new()
    }
}
