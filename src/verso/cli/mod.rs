//! The CLI layer: argument parsing, printing, and the interactive loop.
//! Everything terminal-shaped lives here; the library below it only ever
//! sees and returns plain data.

mod browse;
mod commands;
mod print;
pub mod setup;
mod styles;

pub use commands::run;
