//! vsc-to-tm - VS Code to TextMate theme converter
//!
//! This library converts VS Code color themes into TextMate `.tmTheme` property lists, the
//! format consumed by Sublime Text, bat, syntect and other TextMate-grammar highlighters.

// Allow certain clippy warnings that are stylistic
#![allow(clippy::uninlined_format_args)] // Style preference
#![allow(clippy::return_self_not_must_use)] // Builder pattern is clear enough

pub mod cli;
pub mod config;
pub mod logger;
pub mod theme;
pub mod ui;

// Re-export important structs and functions for easier testing
pub use config::Config;
pub use theme::{ConvertOptions, SourceTheme, TargetTheme, ThemeError, convert, convert_with};
