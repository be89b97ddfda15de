//! Configuration utility types.
//!
//! | Module   | Purpose                                      |
//! |----------|----------------------------------------------|
//! | `error`  | Configuration error types                    |
//! | `field`  | Type-safe field paths for diagnostics        |
//! | `handle` | Global configuration handle (thread-safe)    |

mod error;
mod field;
pub mod handle;

pub use error::{ConfigDiagnostic, ConfigDiagnostics, ConfigError};
pub use field::FieldPath;
pub use handle::{cfg, init_config, set_base_url};
