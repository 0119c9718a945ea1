use axum::{
    Json, Router,
    extract::State,
    routing::{get, post},
};

use crate::{
    dto::shipping::{CheckCostRequest, CitiesRequest, CityView, CourierCost, ProvinceView},
    error::AppResult,
    response::ApiResponse,
    services::shipping_service,
    state::AppState,
};

pub fn router() -> Router<AppState> {
    Router::new()
        .route("/provinces", get(provinces))
        .route("/cities", post(cities))
        .route("/checkOngkir", post(check_cost))
}

#[utoipa::path(
    get,
    path = "/web/rajaongkir/provinces",
    responses(
        (status = 200, description = "All provinces", body = ApiResponse<Vec<ProvinceView>>)
    ),
    tag = "Web RajaOngkir"
)]
pub async fn provinces(
    State(state): State<AppState>,
) -> AppResult<Json<ApiResponse<Vec<ProvinceView>>>> {
    let resp = shipping_service::get_provinces(&state).await?;
    Ok(Json(resp))
}

#[utoipa::path(
    post,
    path = "/web/rajaongkir/cities",
    request_body = CitiesRequest,
    responses(
        (status = 200, description = "Cities of a province", body = ApiResponse<Vec<CityView>>),
        (status = 404, description = "Province not found"),
    ),
    tag = "Web RajaOngkir"
)]
pub async fn cities(
    State(state): State<AppState>,
    Json(payload): Json<CitiesRequest>,
) -> AppResult<Json<ApiResponse<Vec<CityView>>>> {
    let resp = shipping_service::get_cities(&state, payload.province_id).await?;
    Ok(Json(resp))
}

#[utoipa::path(
    post,
    path = "/web/rajaongkir/checkOngkir",
    request_body = CheckCostRequest,
    responses(
        (status = 200, description = "Quoted delivery options", body = ApiResponse<Vec<CourierCost>>),
        (status = 502, description = "Courier API failure"),
    ),
    tag = "Web RajaOngkir"
)]
pub async fn check_cost(
    State(state): State<AppState>,
    Json(payload): Json<CheckCostRequest>,
) -> AppResult<Json<ApiResponse<Vec<CourierCost>>>> {
    let resp = shipping_service::check_cost(&state, payload).await?;
    Ok(Json(resp))
}
