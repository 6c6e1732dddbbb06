use std::hash::{Hash, Hasher};

use serde::{Deserialize, Serialize};

/// Image reference attached to a place.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PlaceImage {
    pub src: String,
    pub alt: String,
}

/// A catalog place.
///
/// Identity is the `id`: two places with the same id compare equal even if
/// their descriptive fields differ.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Place {
    /// Stable unique identifier (e.g., "p1").
    pub id: String,
    /// Display name (e.g., "Forest Waterfall").
    pub title: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub image: Option<PlaceImage>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub lat: Option<f64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub lon: Option<f64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub address: Option<String>,
}

impl Place {
    /// Create a place with only the fields the favorites logic needs.
    pub fn new(id: impl Into<String>, title: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            title: title.into(),
            image: None,
            lat: None,
            lon: None,
            address: None,
        }
    }
}

impl PartialEq for Place {
    fn eq(&self, other: &Self) -> bool {
        self.id == other.id
    }
}

impl Eq for Place {}

impl Hash for Place {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.id.hash(state);
    }
}

/// Wire envelope for `GET /places` and `GET /user-places`.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PlacesEnvelope {
    pub places: Vec<Place>,
}
