//! Console front-end for the turnwise tic-tac-toe engine.
//!
//! The binary wires [`Cli`] and [`GameConfig`] into a [`Console`] over
//! stdin/stdout and hands it to [`session::run`]. Everything here works on
//! any `BufRead`/`Write` pair, so whole sessions can be scripted in tests.

#![warn(missing_docs)]

mod cli;
mod config;
mod console;
pub mod display;
pub mod session;

pub use cli::Cli;
pub use config::{ConfigError, GameConfig};
pub use console::Console;
pub use session::SessionReport;
