use geo::{MultiPolygon, Point};

#[derive(Debug, Clone)]
pub struct Country {
    pub name: String,
    pub gdp: f64,
    pub gdp_text: String, // As written in the source, for popups
    pub geometry: MultiPolygon<f64>,
}

#[derive(Debug, Clone)]
pub struct Endorser {
    pub name: String,
    pub website: String,
    pub category: Option<String>, // Raw label, classified at render time
    pub location: Point<f64>,
}

/// Both map layers as loaded. Either may be empty if its source failed.
#[derive(Debug, Clone, Default)]
pub struct Layers {
    pub countries: Vec<Country>,
    pub endorsers: Vec<Endorser>,
}
