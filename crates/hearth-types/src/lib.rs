//! Foundation types for Hearth.
//!
//! This crate provides the identity and temporal primitives shared by every
//! other Hearth crate. Both are thin newtypes with a fixed canonical text
//! form, so values survive the serialize/reload round-trip byte-for-byte.
//!
//! # Key Types
//!
//! - [`EntityId`] — 128-bit random entity identifier (UUID v4)
//! - [`Timestamp`] — wall-clock timestamp fixed to microsecond precision
//! - [`TypeError`] — parse failures for the canonical text forms

pub mod error;
pub mod id;
pub mod timestamp;

pub use error::TypeError;
pub use id::EntityId;
pub use timestamp::{Timestamp, TIMESTAMP_FORMAT};
