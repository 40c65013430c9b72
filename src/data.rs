use crate::config::AppConfig;
use crate::types::{Country, Endorser, Layers};
use anyhow::{Context, Result, anyhow};
use geo::MultiPolygon;
use geojson::{FeatureCollection, GeoJson};
use serde_json::{Map, Value};
use std::path::Path;
use tracing::{debug, info, warn};

/// Load both layers. The two sources are read concurrently and independently;
/// a failure on either side is logged and leaves that layer empty.
pub async fn load_layers(config: &AppConfig) -> Layers {
    let (countries, endorsers) = tokio::join!(
        load_countries(&config.input.gdp_geojson),
        load_endorsers(&config.input.endorser_geojson),
    );

    let countries = countries.unwrap_or_else(|e| {
        warn!("Error loading GDP GeoJSON data: {:#}", e);
        Vec::new()
    });
    let endorsers = endorsers.unwrap_or_else(|e| {
        warn!("Error loading endorsers GeoJSON data: {:#}", e);
        Vec::new()
    });

    info!("Loaded {} countries and {} endorsers", countries.len(), endorsers.len());
    Layers { countries, endorsers }
}

pub async fn load_countries(path: &Path) -> Result<Vec<Country>> {
    let content = read_source(path).await?;
    parse_countries(&content)
}

pub async fn load_endorsers(path: &Path) -> Result<Vec<Endorser>> {
    let content = read_source(path).await?;
    parse_endorsers(&content)
}

async fn read_source(path: &Path) -> Result<String> {
    debug!("Loading GeoJSON from {:?}...", path);
    tokio::fs::read_to_string(path)
        .await
        .with_context(|| format!("Failed to open GeoJSON file: {:?}", path))
}

fn feature_collection(content: &str) -> Result<FeatureCollection> {
    let geojson: GeoJson = content.parse().context("Failed to parse GeoJSON")?;
    match geojson {
        GeoJson::FeatureCollection(fc) => Ok(fc),
        _ => Err(anyhow!("GeoJSON must be a FeatureCollection")),
    }
}

pub fn parse_countries(content: &str) -> Result<Vec<Country>> {
    let collection = feature_collection(content)?;
    let mut countries = Vec::new();

    for feature in collection.features {
        let geometry = match feature.geometry {
            Some(geom) => match geo::Geometry::<f64>::try_from(geom.value) {
                Ok(geo::Geometry::MultiPolygon(mp)) => mp,
                Ok(geo::Geometry::Polygon(p)) => MultiPolygon::new(vec![p]),
                Ok(_) => continue, // Skip points/lines
                Err(e) => {
                    debug!("Skipping country with invalid geometry: {:?}", e);
                    continue;
                }
            },
            None => continue,
        };

        let props = feature.properties.as_ref();
        countries.push(Country {
            name: string_property(props, "name"),
            gdp: gdp_property(props),
            gdp_text: string_property(props, "GDP"),
            geometry,
        });
    }

    Ok(countries)
}

pub fn parse_endorsers(content: &str) -> Result<Vec<Endorser>> {
    let collection = feature_collection(content)?;
    let mut endorsers = Vec::new();

    for feature in collection.features {
        let location = match feature.geometry {
            Some(geom) => match geo::Geometry::<f64>::try_from(geom.value) {
                Ok(geo::Geometry::Point(p)) => p,
                _ => continue,
            },
            None => continue,
        };

        let props = feature.properties.as_ref();
        let category = category_property(props);

        endorsers.push(Endorser {
            name: string_property(props, "Name"),
            website: string_property(props, "Website"),
            category,
            location,
        });
    }

    Ok(endorsers)
}

fn string_property(props: Option<&Map<String, Value>>, key: &str) -> String {
    match props.and_then(|p| p.get(key)) {
        Some(Value::String(s)) => s.clone(),
        Some(Value::Number(n)) => n.to_string(),
        _ => String::new(),
    }
}

// Any truthy value is a category label; unknown ones fall back to the defaults.
fn category_property(props: Option<&Map<String, Value>>) -> Option<String> {
    match props.and_then(|p| p.get("Category"))? {
        Value::String(s) if !s.is_empty() => Some(s.clone()),
        Value::Number(n) if n.as_f64() != Some(0.0) => Some(n.to_string()),
        Value::Bool(true) => Some("true".to_string()),
        Value::Array(_) | Value::Object(_) => Some("[object]".to_string()),
        _ => None,
    }
}

// Missing or unreadable GDP falls into the lowest bucket.
fn gdp_property(props: Option<&Map<String, Value>>) -> f64 {
    match props.and_then(|p| p.get("GDP")) {
        Some(Value::Number(n)) => n.as_f64().unwrap_or(0.0),
        Some(Value::String(s)) => s.trim().parse().unwrap_or(0.0),
        _ => 0.0,
    }
}
