//! Action handlers organized by category

/// Palette selection, manual and automatic coloring
pub mod coloring;

/// Region cursor navigation handlers
pub mod navigation;

/// Popup and overlay management handlers
pub mod popups;
