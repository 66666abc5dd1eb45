use serde::Serialize;

/// Separator between the tiers of a region path.
pub const REGION_SEPARATOR: &str = " > ";

#[derive(Debug, Clone, Serialize, PartialEq)]
pub struct Venue {
    pub id: String,
    pub name: String,
    pub city: String,
    pub borough: String,
    pub neighborhood: String,
    pub lat: Option<f64>,
    pub lon: Option<f64>,
    /// "city > borough > neighborhood", derived once at load time.
    pub region_path: String,
}

impl Venue {
    pub fn new(
        id: impl Into<String>,
        name: impl Into<String>,
        city: impl Into<String>,
        borough: impl Into<String>,
        neighborhood: impl Into<String>,
        lat: Option<f64>,
        lon: Option<f64>,
    ) -> Self {
        let city = city.into();
        let borough = borough.into();
        let neighborhood = neighborhood.into();
        let region_path = region_path(&city, &borough, &neighborhood);

        Self {
            id: id.into(),
            name: name.into(),
            city,
            borough,
            neighborhood,
            lat,
            lon,
            region_path,
        }
    }
}

pub fn region_path(city: &str, borough: &str, neighborhood: &str) -> String {
    [city, borough, neighborhood].join(REGION_SEPARATOR)
}
