// src/lib.rs

#[macro_use]
pub mod macros;

pub mod config;
pub mod core;
pub mod error;
pub mod report;
pub mod runner;
pub mod runs;
pub mod sink;
pub mod source;
pub mod specs;

#[cfg(feature = "cli")]
pub mod cli;

pub use error::{Error, Result};
pub use runs::{Core, Run};
