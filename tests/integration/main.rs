//! Integration tests for blitz-landing

mod cli_test;
mod config_test;
mod demo_test;
mod helpers;
mod landing_test;
