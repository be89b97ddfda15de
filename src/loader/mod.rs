//! Deferred entity placeholders.
//!
//! - [`Lazy`]: a value produced on first access, at most once
//! - [`BatchLoader`]: hands out `Lazy` placeholders per key and settles all
//!   pending keys with a single batch call when the first one is forced
//!
//! The resolver never builds placeholders, it only forces them.

mod batch;
mod lazy;

pub use batch::BatchLoader;
pub use lazy::Lazy;
