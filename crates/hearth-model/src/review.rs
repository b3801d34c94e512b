use serde::{Deserialize, Serialize};

use crate::attrs::{self, AttrMap};
use crate::entity::{EntityCore, Model};
use crate::error::ModelResult;

/// A user's review of a place.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct Review {
    #[serde(flatten)]
    pub core: EntityCore,
    #[serde(default)]
    pub place_id: String,
    #[serde(default)]
    pub user_id: String,
    #[serde(default)]
    pub text: String,
}

impl Review {
    pub const KIND: &'static str = "Review";

    pub fn new() -> Self {
        Self {
            core: EntityCore::fresh(),
            place_id: String::new(),
            user_id: String::new(),
            text: String::new(),
        }
    }

    pub fn from_attrs(record: &AttrMap) -> ModelResult<Self> {
        attrs::from_attrs(record)
    }
}

impl Default for Review {
    fn default() -> Self {
        Self::new()
    }
}

impl Model for Review {
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
