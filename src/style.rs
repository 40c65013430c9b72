use crate::classify::{endorser_color, gdp_color};
use serde::Serialize;

/// Path options for a country polygon.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct CountryStyle {
    pub fill_color: &'static str,
    pub weight: u32,
    pub opacity: f64,
    pub color: &'static str,
    pub dash_array: &'static str,
    pub fill_opacity: f64,
}

impl CountryStyle {
    pub fn for_gdp(gdp: f64) -> Self {
        Self {
            fill_color: gdp_color(gdp),
            weight: 1,
            opacity: 1.0,
            color: "white",
            dash_array: "3",
            fill_opacity: 0.8,
        }
    }
}

/// Circle marker options for an endorser.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct MarkerStyle {
    pub radius: u32,
    pub fill_color: &'static str,
    pub color: &'static str,
    pub weight: u32,
    pub opacity: f64,
    pub fill_opacity: f64,
}

impl MarkerStyle {
    pub fn for_category(category: Option<&str>) -> Self {
        Self {
            radius: 10,
            fill_color: endorser_color(category),
            color: "#FFFFFF",
            weight: 1,
            opacity: 1.0,
            fill_opacity: 1.0,
        }
    }
}
