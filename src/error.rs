//! .
//!
//! Every variant is a contract violation reported by the call that detected it.
//! The failing call leaves its receiver untouched.

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum Error {
  #[error("invalid argument: {0}")]
  InvalidArgument(String),

  #[error("index {index} out of range for length {len}")]
  IndexOutOfRange { index: usize, len: usize },

  #[error("illegal iterator state: {0}")]
  IllegalIteratorState(&'static str),

  #[error("slot {index} holds no element")]
  AbsentSlot { index: usize },
}

/// Convenient wrapper around `std::Result`.
pub type Result<T> = std::result::Result<T, Error>;
