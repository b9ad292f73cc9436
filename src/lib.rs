//! mojicount library - character, line and byte counting for text
//!
//! [`measure`] is the whole counting engine; the remaining modules make up
//! the terminal application built around it.

pub mod app;
pub mod clipboard;
pub mod config;
pub mod error;
pub mod help;
pub mod input;
pub mod metrics;
pub mod notification;
pub mod report;
pub mod scroll;
pub mod stats;

#[cfg(test)]
pub mod test_utils;
pub mod theme;
pub mod widgets;

// Re-export commonly used types for convenience
pub use app::{App, OutputMode};
pub use config::Config;
pub use metrics::{TextStats, measure};
