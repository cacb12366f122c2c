//! TUI (Text User Interface) module for the landing page
//!
//! This module provides terminal-based UI components using ratatui/crossterm.
//! The view is separated from the terminal so it can be rendered against a
//! test backend.

pub mod app;
pub mod landing_app;
pub mod status_footer;
pub mod theme;
pub mod ui;
pub mod widgets;

pub use app::App;
pub use landing_app::{KeyResult, LandingApp, LandingView, Mode};
