//! Transit CLI library.
//!
//! This crate provides command-line interface utilities for the transit
//! network tools, including terminal styling, output formatting and the
//! friendly messages shown for failed lookups.

pub mod logging;
pub mod messages;
pub mod output;
pub mod terminal;
