use axum::Json;
use serde::Serialize;

use crate::{
    connections::ServiceKind,
    models::{
        catalog::{ModelPricing, DEMO_MODELS},
        PrimaryService,
    },
};

#[derive(Debug, Serialize)]
pub struct CatalogEntry {
    pub id: &'static str,
    pub name: &'static str,
}

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct CatalogResponse {
    pub primary_services: Vec<CatalogEntry>,
    pub connectable_services: Vec<CatalogEntry>,
    pub demo_models: &'static [ModelPricing],
}

/// Handle GET /v1/catalog
pub async fn list_catalog() -> Json<CatalogResponse> {
    let primary_services = PrimaryService::ALL
        .iter()
        .map(|service| CatalogEntry {
            id: service.as_str(),
            name: service.display_name(),
        })
        .collect();

    let connectable_services = ServiceKind::ALL
        .iter()
        .map(|kind| CatalogEntry {
            id: kind.id(),
            name: kind.display_name(),
        })
        .collect();

    Json(CatalogResponse {
        primary_services,
        connectable_services,
        demo_models: &DEMO_MODELS,
    })
}
