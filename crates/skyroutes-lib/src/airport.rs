use serde::{Deserialize, Serialize};

use crate::geo::Coordinates;

/// Stable airport identifier as supplied by the dataset.
pub type AirportId = String;

/// Airport record: a node in the routing graph.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Airport {
    pub id: AirportId,
    pub name: String,
    pub city: String,
    pub country: String,
    #[serde(rename = "lat")]
    pub latitude: f64,
    #[serde(rename = "lng")]
    pub longitude: f64,
}

impl Airport {
    pub fn new(
        id: impl Into<AirportId>,
        name: impl Into<String>,
        city: impl Into<String>,
        country: impl Into<String>,
        latitude: f64,
        longitude: f64,
    ) -> Self {
        Self {
            id: id.into(),
            name: name.into(),
            city: city.into(),
            country: country.into(),
            latitude,
            longitude,
        }
    }

    pub fn coordinates(&self) -> Coordinates {
        Coordinates::new(self.latitude, self.longitude)
    }
}

/// Undirected route between two airports. Direction in the record carries no
/// meaning; the graph builder expands it both ways.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Route {
    #[serde(rename = "id_origin")]
    pub origin: AirportId,
    #[serde(rename = "id_destination")]
    pub destination: AirportId,
    /// Route length in kilometres.
    pub distance: f64,
}

impl Route {
    pub fn new(
        origin: impl Into<AirportId>,
        destination: impl Into<AirportId>,
        distance: f64,
    ) -> Self {
        Self {
            origin: origin.into(),
            destination: destination.into(),
            distance,
        }
    }
}
