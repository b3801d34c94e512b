use serde::{Deserialize, Serialize};

use crate::attrs::{self, AttrMap};
use crate::entity::{EntityCore, Model};
use crate::error::ModelResult;

/// A listing: somewhere to stay, owned by a user, located in a city.
///
/// The widest variant schema. Numeric attributes default to zero and
/// `amenity_ids` to empty, matching a listing that has just been drafted.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct Place {
    #[serde(flatten)]
    pub core: EntityCore,
    #[serde(default)]
    pub city_id: String,
    #[serde(default)]
    pub user_id: String,
    #[serde(default)]
    pub name: String,
    #[serde(default)]
    pub description: String,
    #[serde(default)]
    pub number_rooms: u32,
    #[serde(default)]
    pub number_bathrooms: u32,
    #[serde(default)]
    pub max_guest: u32,
    #[serde(default)]
    pub price_by_night: u32,
    #[serde(default)]
    pub latitude: f64,
    #[serde(default)]
    pub longitude: f64,
    /// Ids of [`Amenity`](crate::Amenity) entities offered here.
    #[serde(default)]
    pub amenity_ids: Vec<String>,
}

impl Place {
    pub const KIND: &'static str = "Place";

    /// Fresh listing with every attribute at its draft default.
    pub fn new() -> Self {
        Self {
            core: EntityCore::fresh(),
            city_id: String::new(),
            user_id: String::new(),
            name: String::new(),
            description: String::new(),
            number_rooms: 0,
            number_bathrooms: 0,
            max_guest: 0,
            price_by_night: 0,
            latitude: 0.0,
            longitude: 0.0,
            amenity_ids: Vec::new(),
        }
    }

    pub fn from_attrs(record: &AttrMap) -> ModelResult<Self> {
        attrs::from_attrs(record)
    }
}

impl Default for Place {
    fn default() -> Self {
        Self::new()
    }
}

impl Model for Place {
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

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn draft_place_has_zeroed_attributes() {
        let place = Place::new();
        assert_eq!(place.number_rooms, 0);
        assert_eq!(place.price_by_night, 0);
        assert_eq!(place.latitude, 0.0);
        assert!(place.amenity_ids.is_empty());
    }

    #[test]
    fn attrs_roundtrip_preserves_numbers_and_lists() {
        let mut place = Place::new();
        place.name = "Loft".into();
        place.number_rooms = 3;
        place.price_by_night = 120;
        place.latitude = 48.8566;
        place.longitude = 2.3522;
        place.amenity_ids = vec!["a1".into(), "a2".into()];
        let rebuilt = Place::from_attrs(&place.to_attrs().unwrap()).unwrap();
        assert_eq!(place, rebuilt);
    }
}
