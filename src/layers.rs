use crate::config::MapConfig;
use serde::Serialize;

pub const BASE_PANE: &str = "basePane";
pub const VECTOR_PANE: &str = "vectorPane";
pub const LABELS_PANE: &str = "labelsPane";

#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct MapSetup {
    pub center: [f64; 2],
    pub zoom: u8,
    pub panes: Vec<Pane>,
    pub base_layer: TileLayer,
    pub label_layer: TileLayer,
    pub overlays: Vec<Overlay>,
    pub legend: LegendControl,
    pub geocoder: GeocoderControl,
}

#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Pane {
    pub name: &'static str,
    pub z_index: u32,
}

#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct TileLayer {
    pub url: String,
    pub pane: &'static str,
    pub attribution: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub max_zoom: Option<u8>,
}

#[derive(Debug, Clone, Serialize)]
pub struct Overlay {
    pub name: &'static str,
    pub source: &'static str,
    pub pane: &'static str,
    pub clustered: bool,
}

#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct LegendControl {
    pub position: &'static str,
    pub background: &'static str,
    pub padding: &'static str,
    pub border_radius: &'static str,
    pub source: &'static str,
}

#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct GeocoderControl {
    pub default_mark_geocode: bool,
}

pub const GDP_LAYER_FILE: &str = "country_gdp.styled.geojson";
pub const ENDORSER_LAYER_FILE: &str = "endorser.styled.geojson";
pub const LEGEND_FILE: &str = "legend.html";
pub const MAP_SETUP_FILE: &str = "map.json";

impl MapSetup {
    pub fn from_config(map: &MapConfig) -> Self {
        Self {
            center: map.center,
            zoom: map.zoom,
            // Labels sit above the vectors, which sit above the base tiles.
            panes: vec![
                Pane { name: BASE_PANE, z_index: 100 },
                Pane { name: VECTOR_PANE, z_index: 200 },
                Pane { name: LABELS_PANE, z_index: 300 },
            ],
            base_layer: TileLayer {
                url: map.base_tiles.clone(),
                pane: BASE_PANE,
                attribution: map.attribution.clone(),
                max_zoom: Some(map.max_zoom),
            },
            label_layer: TileLayer {
                url: map.label_tiles.clone(),
                pane: LABELS_PANE,
                attribution: String::new(),
                max_zoom: None,
            },
            overlays: vec![
                Overlay {
                    name: "GDP Layer",
                    source: GDP_LAYER_FILE,
                    pane: VECTOR_PANE,
                    clustered: false,
                },
                Overlay {
                    name: "Endorsers",
                    source: ENDORSER_LAYER_FILE,
                    pane: VECTOR_PANE,
                    clustered: true,
                },
            ],
            legend: LegendControl {
                position: "bottomright",
                background: "rgba(255, 255, 255, 0.5)",
                padding: "10px",
                border_radius: "8px",
                source: LEGEND_FILE,
            },
            geocoder: GeocoderControl { default_mark_geocode: true },
        }
    }
}
