//! Eager, type-changing value chains with an execute-once result.
//!
//! A [`Chain`] wraps a value and threads it through a sequence of transforms.
//! Every link runs immediately and may change the payload type. Only the
//! final extraction is guarded: a chain hands out its result once, and any
//! further evaluation fails with [`ChainError::AlreadyConsumed`].
//!
//! - [`Chain`] — the wrapper, with `then`, `tap`, `run` and friends
//! - [`Pipe`] — starts a chain from any value with `.pipe(f)`
//! - [`size`] — a transform that reports a container's element count
//!
//! # Example
//!
//! ```
//! use strand_core::{Pipe, size};
//!
//! let mut doubled_len = "Hello World!".pipe(size).then(|n| n * 2);
//!
//! assert_eq!(doubled_len.run(), Ok(24));
//! assert!(doubled_len.run().is_err());
//! ```

mod chain;
mod error;
mod pipe;
mod size;

pub use chain::Chain;
pub use error::ChainError;
pub use pipe::Pipe;
pub use size::{Size, size};
