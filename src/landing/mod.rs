//! Landing page host and copy.
//!
//! - `content` - static text of every section (hero, features, steps,
//!   pricing, footer)
//! - `host` - `LandingPage`, which mounts the hero terminal and the
//!   credential modal and routes page actions to them

pub mod content;
mod host;

pub use host::{HostAction, HostEffect, LandingPage, Section};
