//! Console front end for noughts and crosses.
//!
//! # Architecture
//!
//! - **Config**: TOML file plus command-line overrides
//! - **Console**: board rendering and line input over any reader/writer
//! - **Session**: main menu, turn loop, replay prompt
//! - **Analysis**: one-shot search report for a given position

#![warn(missing_docs)]
#![forbid(unsafe_code)]

mod analysis;
mod cli;
mod config;
mod console;
mod session;

pub use analysis::analyze_position;
pub use cli::{Cli, Command};
pub use config::{CONFIG_ENV, ConfigError, ConfigFile, Mode, Seat, Settings, Symbols, locate};
pub use console::{Console, parse_cell_number, render_board};
pub use session::Session;
