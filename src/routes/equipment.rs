// ABOUTME: Route handler for the static home equipment catalog
// ABOUTME: Public endpoint; the catalog holds no user data

use crate::workouts::{catalog, EquipmentCategory};
use axum::{routing::get, Json, Router};
use serde::Serialize;

/// Catalog response
#[derive(Debug, Serialize)]
pub struct EquipmentCatalogResponse {
    /// Categories with their items
    pub categories: &'static [EquipmentCategory],
}

/// Equipment routes handler
pub struct EquipmentRoutes;

impl EquipmentRoutes {
    /// Create the catalog route
    pub fn routes() -> Router {
        Router::new().route("/api/equipment", get(Self::handle_catalog))
    }

    async fn handle_catalog() -> Json<EquipmentCatalogResponse> {
        Json(EquipmentCatalogResponse {
            categories: catalog(),
        })
    }
}
