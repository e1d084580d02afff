//! Architecture-specific implementations.
//!
//! This module provides platform abstractions for different target architectures.
//! Currently supported: bare-metal x86_64.

pub mod x86_64;

pub use self::x86_64::*;
