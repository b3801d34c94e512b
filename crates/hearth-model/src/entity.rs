use std::fmt;

use serde::{Deserialize, Serialize};

use hearth_types::{EntityId, Timestamp};

use crate::attrs::AttrMap;
use crate::error::ModelResult;

/// Identity and timestamp lifecycle shared by every domain variant.
///
/// Variants embed an `EntityCore` with `#[serde(flatten)]`, so a persisted
/// record stays a flat object: `id`, `created_at`, `updated_at` alongside
/// the variant's own attributes.
///
/// Invariant: `created_at <= updated_at`, and neither the id nor
/// `created_at` ever changes after creation.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct EntityCore {
    pub id: EntityId,
    pub created_at: Timestamp,
    pub updated_at: Timestamp,
}

impl EntityCore {
    /// A fresh core: new random id, both timestamps from a single `now()`.
    pub fn fresh() -> Self {
        let now = Timestamp::now();
        Self {
            id: EntityId::generate(),
            created_at: now,
            updated_at: now,
        }
    }

    /// Refresh `updated_at`. Never moves it backwards, even if the system
    /// clock does.
    pub fn touch(&mut self) {
        self.updated_at = self.updated_at.max(Timestamp::now());
    }
}

/// The seam between domain variants and the storage engine.
///
/// Object-safe on purpose: the engine holds `Box<dyn Model>` and never
/// learns the concrete variant types. Reconstruction goes the other way,
/// through the engine's variant registry.
pub trait Model: fmt::Debug + Send + Sync {
    /// The variant name used as discriminator and registry-key prefix.
    fn kind(&self) -> &'static str;

    /// Shared identity/timestamp state.
    fn core(&self) -> &EntityCore;

    /// Mutable access to the shared state (for `touch`).
    fn core_mut(&mut self) -> &mut EntityCore;

    /// The persisted attribute record, tagged with the discriminator.
    fn to_attrs(&self) -> ModelResult<AttrMap>;

    /// Composite registry key: `"{Kind}.{id}"`.
    fn storage_key(&self) -> String {
        format!("{}.{}", self.kind(), self.core().id)
    }

    /// Human-readable form: `[Kind] (id) {attributes}`. Informational
    /// only; never used for persistence.
    fn display_string(&self) -> String {
        let attrs = self.to_attrs().unwrap_or_default();
        format!(
            "[{}] ({}) {}",
            self.kind(),
            self.core().id,
            serde_json::Value::Object(attrs)
        )
    }
}

impl fmt::Display for dyn Model {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.display_string())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::user::User;

    #[test]
    fn fresh_core_has_equal_timestamps() {
        let core = EntityCore::fresh();
        assert_eq!(core.created_at, core.updated_at);
    }

    #[test]
    fn fresh_cores_have_unique_ids() {
        let a = EntityCore::fresh();
        let b = EntityCore::fresh();
        assert_ne!(a.id, b.id);
    }

    #[test]
    fn touch_never_decreases_updated_at() {
        let mut core = EntityCore::fresh();
        let before = core.updated_at;
        core.touch();
        assert!(core.updated_at >= before);
        assert!(core.created_at <= core.updated_at);
    }

    #[test]
    fn storage_key_is_kind_dot_id() {
        let user = User::new();
        assert_eq!(
            user.storage_key(),
            format!("User.{}", user.core.id)
        );
    }

    #[test]
    fn display_string_names_kind_and_id() {
        let user = User::new();
        let text = user.display_string();
        assert!(text.starts_with("[User] ("));
        assert!(text.contains(&user.core.id.to_string()));
    }

    #[test]
    fn dyn_model_displays_like_display_string() {
        let user = User::new();
        let expected = user.display_string();
        let boxed: Box<dyn Model> = Box::new(user);
        assert_eq!(format!("{boxed}"), expected);
    }
}
