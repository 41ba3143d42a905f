//! Application-wide constants.

/// The display name of the application.
pub const APP_NAME: &str = "Map Coloring";

/// The binary name of the application (used in command examples).
pub const APP_BINARY_NAME: &str = "mapcolor";
