//! Visual styling utilities.
//!
//! Themes hold the colour scheme for every part of the screen; built-ins are
//! looked up by name from configuration or the command line.

pub mod theme;

pub use theme::{LIGHT, SLATE, SOLARIZED, Theme, by_name, default_theme, names};
