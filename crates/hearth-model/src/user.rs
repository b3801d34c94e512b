use serde::{Deserialize, Serialize};

use crate::attrs::{self, AttrMap};
use crate::entity::{EntityCore, Model};
use crate::error::ModelResult;

/// A registered account. Owns places and writes reviews.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct User {
    #[serde(flatten)]
    pub core: EntityCore,
    #[serde(default)]
    pub email: String,
    #[serde(default)]
    pub password: String,
    #[serde(default)]
    pub first_name: String,
    #[serde(default)]
    pub last_name: String,
}

impl User {
    pub const KIND: &'static str = "User";

    /// Fresh user with a new identity and empty profile fields.
    pub fn new() -> Self {
        Self {
            core: EntityCore::fresh(),
            email: String::new(),
            password: String::new(),
            first_name: String::new(),
            last_name: String::new(),
        }
    }

    /// Rebuild from a persisted attribute record.
    pub fn from_attrs(record: &AttrMap) -> ModelResult<Self> {
        attrs::from_attrs(record)
    }
}

impl Default for User {
    fn default() -> Self {
        Self::new()
    }
}

impl Model for User {
    fn kind(&self) -> &'static str {
        Self::KIND
    }

    fn core(&self) -> &EntityCore {
        &self.core
    }

    fn core_mut(&mut self) -> &mut EntityCore {
        &mut self.core
    }

    fn to_attrs(&self) -> ModelResult<AttrMap> {
        attrs::to_attrs(self, Self::KIND)
    }
}
