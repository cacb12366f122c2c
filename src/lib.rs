//! BlitzCoder landing page
//!
//! A terminal rendition of the BlitzCoder marketing page. The two
//! interactive pieces are the hero terminal (`player`), which types a
//! scripted CLI session on a loop, and the credential modal (`auth`),
//! which validates and submits sign-in/sign-up forms.

pub mod auth;
pub mod cli;
pub mod config;
pub mod landing;
pub mod logging;
pub mod player;
pub mod tui;

pub use config::Config;
pub use tui::theme;
