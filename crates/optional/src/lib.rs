#![cfg_attr(not(feature = "std"), no_std)]

pub mod optional;
pub use optional::Optional;

// Canonical absent marker
pub mod empty;
pub use empty::{Empty, EMPTY};

pub mod error;
pub use error::NoValueError;
