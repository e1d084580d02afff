//! Types shared between the Lithax kernel and its platform crates.

#![cfg_attr(not(test), no_std)]

pub mod error;

pub use error::InputFault;
