use crate::classify::category_class;
use crate::config::AppConfig;
use crate::layers::{MapSetup, ENDORSER_LAYER_FILE, GDP_LAYER_FILE, LEGEND_FILE, MAP_SETUP_FILE};
use crate::legend::legend_html;
use crate::popup::{country_popup, endorser_popup};
use crate::style::{CountryStyle, MarkerStyle};
use crate::types::{Country, Endorser, Layers};
use anyhow::{Context, Result};
use geojson::{Feature, FeatureCollection, Geometry, JsonObject, JsonValue};
use std::fs;
use std::path::Path;
use tracing::info;

pub fn write_outputs(config: &AppConfig, layers: &Layers) -> Result<()> {
    let dir = &config.output.dir;
    fs::create_dir_all(dir)
        .with_context(|| format!("Failed to create output directory: {:?}", dir))?;

    info!("Writing {} styled countries", layers.countries.len());
    write_json(&dir.join(GDP_LAYER_FILE), &countries_collection(&layers.countries)?)?;

    info!("Writing {} styled endorsers", layers.endorsers.len());
    write_json(&dir.join(ENDORSER_LAYER_FILE), &endorsers_collection(&layers.endorsers)?)?;

    let legend_path = dir.join(LEGEND_FILE);
    fs::write(&legend_path, legend_html())
        .with_context(|| format!("Failed to write legend: {:?}", legend_path))?;

    write_json(&dir.join(MAP_SETUP_FILE), &MapSetup::from_config(&config.map))?;

    Ok(())
}

fn write_json<T: serde::Serialize>(path: &Path, value: &T) -> Result<()> {
    let content = serde_json::to_string(value)
        .with_context(|| format!("Failed to serialize {:?}", path))?;
    fs::write(path, content).with_context(|| format!("Failed to write {:?}", path))
}

fn feature(geometry: geojson::Value, properties: JsonObject) -> Feature {
    Feature {
        bbox: None,
        geometry: Some(Geometry::new(geometry)),
        id: None,
        properties: Some(properties),
        foreign_members: None,
    }
}

pub fn countries_collection(countries: &[Country]) -> Result<FeatureCollection> {
    let mut features = Vec::with_capacity(countries.len());

    for country in countries {
        let mut props = JsonObject::new();
        props.insert("name".into(), JsonValue::from(country.name.as_str()));
        props.insert("GDP".into(), JsonValue::from(country.gdp));
        props.insert("style".into(), serde_json::to_value(CountryStyle::for_gdp(country.gdp))?);
        props.insert("popup".into(), JsonValue::from(country_popup(&country.name, &country.gdp_text)));

        features.push(feature(geojson::Value::from(&country.geometry), props));
    }

    Ok(FeatureCollection { bbox: None, features, foreign_members: None })
}

pub fn endorsers_collection(endorsers: &[Endorser]) -> Result<FeatureCollection> {
    let mut features = Vec::with_capacity(endorsers.len());

    for endorser in endorsers {
        let category = endorser.category.as_deref();
        let mut props = JsonObject::new();
        props.insert("Name".into(), JsonValue::from(endorser.name.as_str()));
        props.insert("Website".into(), JsonValue::from(endorser.website.as_str()));
        props.insert("Category".into(), category.map_or(JsonValue::Null, JsonValue::from));
        props.insert("style".into(), serde_json::to_value(MarkerStyle::for_category(category))?);
        props.insert("popup".into(), JsonValue::from(endorser_popup(&endorser.name, &endorser.website)));
        props.insert("clusterClass".into(), JsonValue::from(category_class(category)));

        features.push(feature(geojson::Value::from(&endorser.location), props));
    }

    Ok(FeatureCollection { bbox: None, features, foreign_members: None })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::{InputConfig, MapConfig, OutputConfig, ServerConfig};
    use crate::data::parse_countries;
    use crate::data::parse_endorsers;
    use crate::data::tests::{COUNTRIES, ENDORSERS};
    use std::path::PathBuf;

    #[test]
    fn country_features_carry_style_and_popup() {
        let countries = parse_countries(COUNTRIES).unwrap();
        let fc = countries_collection(&countries).unwrap();
        assert_eq!(fc.features.len(), 3);

        let props = fc.features[0].properties.as_ref().unwrap();
        assert_eq!(props["style"]["fillColor"], "#225EA8");
        assert_eq!(props["name"], "Squareland");
        assert!(props["popup"].as_str().unwrap().contains("Squareland"));
        assert!(props["popup"].as_str().unwrap().ends_with("$600000000000"));

        let no_gdp = fc.features[2].properties.as_ref().unwrap();
        assert!(no_gdp["popup"].as_str().unwrap().ends_with("<strong>GDP:</strong> $"));
        assert_eq!(no_gdp["style"]["fillColor"], "#f7fbff");
    }

    #[test]
    fn endorser_features_carry_cluster_class() {
        let endorsers = parse_endorsers(ENDORSERS).unwrap();
        let fc = endorsers_collection(&endorsers).unwrap();

        let first = fc.features[0].properties.as_ref().unwrap();
        assert_eq!(first["clusterClass"], "cluster-finance");
        assert_eq!(first["style"]["fillColor"], "#0095D3");

        let second = fc.features[1].properties.as_ref().unwrap();
        assert_eq!(second["Category"], JsonValue::Null);
        assert_eq!(second["clusterClass"], "cluster-default");
    }

    #[test]
    fn writes_all_artifacts() {
        let dir = tempfile::tempdir().unwrap();
        let out = dir.path().join("public");
        let config = AppConfig {
            input: InputConfig {
                gdp_geojson: PathBuf::from("unused"),
                endorser_geojson: PathBuf::from("unused"),
            },
            output: OutputConfig { dir: out.clone() },
            server: ServerConfig { port: 0 },
            map: MapConfig::default(),
        };
        let layers = Layers {
            countries: parse_countries(COUNTRIES).unwrap(),
            endorsers: Vec::new(),
        };

        write_outputs(&config, &layers).unwrap();

        for file in [GDP_LAYER_FILE, ENDORSER_LAYER_FILE, LEGEND_FILE, MAP_SETUP_FILE] {
            assert!(out.join(file).exists(), "{} missing", file);
        }
        let empty = fs::read_to_string(out.join(ENDORSER_LAYER_FILE)).unwrap();
        let parsed: geojson::GeoJson = empty.parse().unwrap();
        match parsed {
            geojson::GeoJson::FeatureCollection(fc) => assert!(fc.features.is_empty()),
            other => panic!("unexpected {:?}", other),
        }
    }
}
