//! Command-line interface.
//!
//! | Module    | Purpose                                       |
//! |-----------|-----------------------------------------------|
//! | `args`    | clap definitions                              |
//! | `resolve` | `urlbuilder resolve`: JSON entities to URLs   |
//! | `kinds`   | `urlbuilder kinds`: list URL rules            |

mod args;
pub mod kinds;
pub mod resolve;

pub use args::{Cli, Commands, ResolveArgs};
