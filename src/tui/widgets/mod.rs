//! TUI widgets for the landing page
//!
//! Reusable UI components for the terminal interface.

pub mod auth_modal;
pub mod pricing;
pub mod sections;
pub mod terminal_demo;

pub use auth_modal::{modal_height, AuthModal, MODAL_WIDTH};
pub use pricing::PricingTable;
pub use sections::{nav_line, SectionView};
pub use terminal_demo::{truncate_to_width, visible_lines, TerminalDemo};
