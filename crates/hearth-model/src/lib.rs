//! Domain models for Hearth.
//!
//! Every persisted object is built from the same base: an [`EntityCore`]
//! carrying identity and timestamps, plus variant-specific attributes. The
//! object-safe [`Model`] trait is the seam between the domain variants and
//! the storage engine: the engine only ever sees `dyn Model` and plain
//! attribute maps.
//!
//! # Lifecycle
//!
//! 1. Fresh creation: `User::new()` — new [`EntityId`], one `now()` for
//!    both timestamps.
//! 2. Reconstruction: `User::from_attrs(&attrs)` — every attribute is
//!    taken from the persisted record; timestamps are parsed from their
//!    canonical text form, and a malformed value is an error, never a
//!    silent default.
//!
//! The two paths are distinct operations on purpose: only the caller knows
//! whether an object is new (and should be registered with the store) or
//! is being rebuilt during a reload.
//!
//! # Variants
//!
//! The closed set of domain kinds: [`User`], [`State`], [`City`],
//! [`Amenity`], [`Place`], [`Review`].

pub mod amenity;
pub mod attrs;
pub mod city;
pub mod entity;
pub mod error;
pub mod place;
pub mod review;
pub mod state;
pub mod user;

pub use amenity::Amenity;
pub use attrs::{AttrMap, CLASS_KEY};
pub use city::City;
pub use entity::{EntityCore, Model};
pub use error::{ModelError, ModelResult};
pub use place::Place;
pub use review::Review;
pub use state::State;
pub use user::User;

// Re-export the foundation types for downstream convenience.
pub use hearth_types::{EntityId, Timestamp, TypeError};
