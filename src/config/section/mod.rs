//! Configuration section definitions.
//!
//! | Section      | Purpose                                  |
//! |--------------|------------------------------------------|
//! | `[instance]` | Base URL of the code-hosting instance    |

mod instance;

pub use instance::InstanceConfig;
