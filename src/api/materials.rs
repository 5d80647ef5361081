//! GET /materials - the fixed roof material reference table.

use serde::Serialize;
use strum::IntoEnumIterator;

use crate::api::response::ApiResponse;
use crate::domain::{MaterialProperties, RoofMaterial};

#[derive(Debug, Serialize)]
pub struct MaterialsResponse {
    pub materials: Vec<MaterialProperties>,
}

/// GET /materials - list every supported roof material with its hydraulic
/// properties, so clients can explain coefficients before a user submits.
pub async fn list_materials() -> ApiResponse<MaterialsResponse> {
    let materials: Vec<MaterialProperties> =
        RoofMaterial::iter().map(RoofMaterial::properties).collect();
    let count = materials.len();
    ApiResponse::success(MaterialsResponse { materials }).with_count(count)
}
