use crate::classify::gdp_color;
use crate::cluster::{cluster_icon, ClusterIcon};
use crate::config::AppConfig;
use crate::legend::legend_html;
use crate::types::Country;
use anyhow::{Context, Result};
use axum::{
    extract::{Query, State},
    response::{Html, Json},
    routing::{get, post},
    Router,
};
use geo::algorithm::contains::Contains;
use geo::bounding_rect::BoundingRect;
use geo::Point;
use rstar::{RTree, RTreeObject, AABB};
use serde::{Deserialize, Serialize};
use std::net::SocketAddr;
use std::sync::Arc;
use tower_http::cors::CorsLayer;
use tower_http::services::ServeDir;
use tracing::info;

// Wrapper for RTree indexing
pub struct CountryIndex {
    index: usize,
    aabb: AABB<[f64; 2]>,
}

impl RTreeObject for CountryIndex {
    type Envelope = AABB<[f64; 2]>;
    fn envelope(&self) -> Self::Envelope {
        self.aabb
    }
}

pub struct AppState {
    pub countries: Vec<Country>,
    pub tree: RTree<CountryIndex>,
}

impl AppState {
    pub fn new(countries: Vec<Country>) -> Self {
        // Countries with empty geometry have no bounding box and cannot be hit.
        let items: Vec<CountryIndex> = countries
            .iter()
            .enumerate()
            .filter_map(|(i, country)| {
                let rect = country.geometry.bounding_rect()?;
                Some(CountryIndex {
                    index: i,
                    aabb: AABB::from_corners([rect.min().x, rect.min().y], [rect.max().x, rect.max().y]),
                })
            })
            .collect();

        Self {
            countries,
            tree: RTree::bulk_load(items),
        }
    }

    pub fn country_at(&self, lon: f64, lat: f64) -> Option<&Country> {
        let point = Point::new(lon, lat);
        let envelope = AABB::from_point([lon, lat]);

        self.tree
            .locate_in_envelope_intersecting(&envelope)
            .filter_map(|candidate| self.countries.get(candidate.index))
            .find(|country| country.geometry.contains(&point))
    }
}

#[derive(Deserialize)]
pub struct QueryParams {
    lat: f64,
    lon: f64,
}

#[derive(Serialize, Debug, PartialEq)]
pub struct QueryResponse {
    name: String,
    gdp: f64,
    color: &'static str,
}

#[derive(Deserialize)]
pub struct ClusterRequest {
    categories: Vec<Option<String>>,
}

pub fn router(state: Arc<AppState>) -> Router {
    Router::new()
        .route("/api/query", get(query_handler))
        .route("/api/cluster-icon", post(cluster_icon_handler))
        .route("/api/legend", get(legend_handler))
        .layer(CorsLayer::permissive())
        .with_state(state)
}

pub async fn start_server(config: AppConfig, countries: Vec<Country>) -> Result<()> {
    info!("Building spatial index for {} countries...", countries.len());
    let state = Arc::new(AppState::new(countries));

    let addr = SocketAddr::from(([127, 0, 0, 1], config.server.port));
    info!("Starting server on http://{}", addr);

    let app = router(state).fallback_service(ServeDir::new(&config.output.dir));

    let listener = tokio::net::TcpListener::bind(addr)
        .await
        .with_context(|| format!("Failed to bind {}", addr))?;
    axum::serve(listener, app).await?;
    Ok(())
}

async fn query_handler(
    State(state): State<Arc<AppState>>,
    Query(params): Query<QueryParams>,
) -> Json<Option<QueryResponse>> {
    Json(state.country_at(params.lon, params.lat).map(|country| QueryResponse {
        name: country.name.clone(),
        gdp: country.gdp,
        color: gdp_color(country.gdp),
    }))
}

async fn cluster_icon_handler(Json(request): Json<ClusterRequest>) -> Json<ClusterIcon> {
    let count = request.categories.len();
    Json(cluster_icon(request.categories.iter().map(|c| c.as_deref()), count))
}

async fn legend_handler() -> Html<String> {
    Html(legend_html())
}
