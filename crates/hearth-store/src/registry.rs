//! The variant registry: a static discriminator → constructor table.
//!
//! Reload needs to turn an untyped attribute record back into a typed
//! entity. The table is populated once at startup with the closed set of
//! domain variants; resolving a name never executes anything beyond the
//! registered constructor function.

use std::collections::BTreeMap;

use hearth_model::{Amenity, AttrMap, City, Model, ModelResult, Place, Review, State, User};

/// Constructor reconstructing one variant from a persisted record.
pub type Constructor = fn(&AttrMap) -> ModelResult<Box<dyn Model>>;

/// Maps a persisted discriminator to the matching variant constructor.
pub struct VariantRegistry {
    table: BTreeMap<&'static str, Constructor>,
}

impl VariantRegistry {
    /// An empty registry. Most callers want
    /// [`with_domain_models`](Self::with_domain_models) instead.
    pub fn new() -> Self {
        Self {
            table: BTreeMap::new(),
        }
    }

    /// The registry wired with the full closed set of domain variants.
    pub fn with_domain_models() -> Self {
        let mut registry = Self::new();
        registry.register(User::KIND, |record| Ok(Box::new(User::from_attrs(record)?)));
        registry.register(State::KIND, |record| {
            Ok(Box::new(State::from_attrs(record)?))
        });
        registry.register(City::KIND, |record| Ok(Box::new(City::from_attrs(record)?)));
        registry.register(Amenity::KIND, |record| {
            Ok(Box::new(Amenity::from_attrs(record)?))
        });
        registry.register(Place::KIND, |record| {
            Ok(Box::new(Place::from_attrs(record)?))
        });
        registry.register(Review::KIND, |record| {
            Ok(Box::new(Review::from_attrs(record)?))
        });
        registry
    }

    /// Register a constructor under a variant name. Re-registering a name
    /// replaces the previous constructor.
    pub fn register(&mut self, kind: &'static str, constructor: Constructor) {
        self.table.insert(kind, constructor);
    }

    /// Look up the constructor for a discriminator.
    pub fn resolve(&self, kind: &str) -> Option<Constructor> {
        self.table.get(kind).copied()
    }

    /// Whether a discriminator is registered.
    pub fn contains(&self, kind: &str) -> bool {
        self.table.contains_key(kind)
    }

    /// Registered variant names, sorted.
    pub fn names(&self) -> Vec<&'static str> {
        self.table.keys().copied().collect()
    }
}

impl Default for VariantRegistry {
    fn default() -> Self {
        Self::new()
    }
}

impl std::fmt::Debug for VariantRegistry {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("VariantRegistry")
            .field("names", &self.names())
            .finish()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn domain_registry_knows_the_closed_set() {
        let registry = VariantRegistry::with_domain_models();
        assert_eq!(
            registry.names(),
            vec!["Amenity", "City", "Place", "Review", "State", "User"]
        );
    }

    #[test]
    fn resolve_unknown_returns_none() {
        let registry = VariantRegistry::with_domain_models();
        assert!(registry.resolve("Ghost").is_none());
        assert!(!registry.contains("Ghost"));
    }

    #[test]
    fn resolved_constructor_rebuilds_the_variant() {
        let registry = VariantRegistry::with_domain_models();
        let user = User::new();
        let record = user.to_attrs().unwrap();
        let rebuilt = registry.resolve("User").unwrap()(&record).unwrap();
        assert_eq!(rebuilt.kind(), "User");
        assert_eq!(rebuilt.core().id, user.core.id);
    }

    #[test]
    fn empty_registry_resolves_nothing() {
        let registry = VariantRegistry::new();
        assert!(registry.names().is_empty());
        assert!(registry.resolve("User").is_none());
    }
}
