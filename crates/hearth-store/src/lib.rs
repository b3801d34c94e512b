//! Whole-file storage engine for Hearth.
//!
//! [`FileStorage`] owns the in-memory registry of every live entity, keyed
//! by `"{Kind}.{id}"`, and serializes the whole registry to a single JSON
//! file on demand. At startup, [`FileStorage::reload`] reads that file
//! back and reconstructs typed entities through the [`VariantRegistry`] —
//! a static table mapping each persisted discriminator to its constructor.
//!
//! # Design Rules
//!
//! 1. The registry is the sole owner of every live entity.
//! 2. `save` is a truncate-and-rewrite of the complete file — there is no
//!    append log and no partial write. A save either reflects the whole
//!    registry or fails outright.
//! 3. A missing backing file is a valid initial state, not an error.
//! 4. An unknown discriminator fails the reload; records are never
//!    silently dropped.
//! 5. All I/O and format errors are propagated, never swallowed.
//!
//! # Caveats
//!
//! The engine is single-threaded and offers no transaction boundary: if
//! two logical flows mutate the registry and save without external
//! serialization, the last save wins. The backing file is not
//! advisory-locked either, so separate processes racing on the same path
//! can interleave unsafely. Serializing access is the caller's job.

pub mod error;
pub mod file;
pub mod registry;

pub use error::{StoreError, StoreResult};
pub use file::{FileStorage, DEFAULT_STORE_PATH};
pub use registry::{Constructor, VariantRegistry};
