//! Static assets compiled into the binary.

/// Route the stylesheet is served from; the root layout links to it.
pub const STYLESHEET_PATH: &str = "/globals.css";

/// Utility classes used by the page components.
pub const GLOBALS_CSS: &str = include_str!("globals.css");
