use serde::{Deserialize, Serialize};

use crate::attrs::{self, AttrMap};
use crate::entity::{EntityCore, Model};
use crate::error::ModelResult;

/// A city within a [`State`](crate::State).
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct City {
    #[serde(flatten)]
    pub core: EntityCore,
    /// Id of the owning state.
    #[serde(default)]
    pub state_id: String,
    #[serde(default)]
    pub name: String,
}

impl City {
    pub const KIND: &'static str = "City";

    pub fn new() -> Self {
        Self {
            core: EntityCore::fresh(),
            state_id: String::new(),
            name: String::new(),
        }
    }

    pub fn from_attrs(record: &AttrMap) -> ModelResult<Self> {
        attrs::from_attrs(record)
    }
}

impl Default for City {
    fn default() -> Self {
        Self::new()
    }
}

impl Model for City {
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
