use serde::{Deserialize, Serialize};

use crate::attrs::{self, AttrMap};
use crate::entity::{EntityCore, Model};
use crate::error::ModelResult;

/// A top-level geographic region. Cities point back at it by id.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct State {
    #[serde(flatten)]
    pub core: EntityCore,
    #[serde(default)]
    pub name: String,
}

impl State {
    pub const KIND: &'static str = "State";

    pub fn new() -> Self {
        Self {
            core: EntityCore::fresh(),
            name: String::new(),
        }
    }

    pub fn from_attrs(record: &AttrMap) -> ModelResult<Self> {
        attrs::from_attrs(record)
    }
}

impl Default for State {
    fn default() -> Self {
        Self::new()
    }
}

impl Model for State {
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
