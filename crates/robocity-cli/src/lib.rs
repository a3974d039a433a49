//! Console front end for `robocity`: configuration, text rendering, and the input loop.
#![forbid(unsafe_code)]

pub mod config;
pub mod console;
pub mod controller;

pub use config::ConsoleConfig;
pub use console::Console;
pub use controller::ConsoleController;
