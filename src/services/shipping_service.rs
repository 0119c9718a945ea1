use std::time::Duration;

use reqwest::Client;
use sea_orm::{ColumnTrait, EntityTrait, QueryFilter, QueryOrder};
use serde::Deserialize;
use validator::Validate;

use crate::{
    config::CourierConfig,
    dto::shipping::{CheckCostRequest, CityView, CourierCost, ProvinceView},
    entity::cities::{Column as CityCol, Entity as Cities},
    entity::provinces::{Column as ProvinceCol, Entity as Provinces},
    error::{AppError, AppResult},
    response::ApiResponse,
    state::AppState,
};

/// Thin client over the courier cost API. One synchronous call per quote;
/// no retry, no caching. Failures surface as upstream errors.
#[derive(Clone)]
pub struct ShippingGateway {
    client: Client,
    config: CourierConfig,
}

#[derive(Debug, Deserialize)]
struct CostResponse {
    rajaongkir: CostEnvelope,
}

#[derive(Debug, Deserialize)]
struct CostEnvelope {
    results: Vec<CourierResult>,
}

#[derive(Debug, Deserialize)]
struct CourierResult {
    costs: Vec<CourierCost>,
}

impl ShippingGateway {
    pub fn new(config: CourierConfig) -> anyhow::Result<Self> {
        let client = Client::builder()
            .timeout(Duration::from_secs(30))
            .build()?;
        Ok(Self { client, config })
    }

    /// Quote delivery options for a destination; the origin is fixed by
    /// configuration.
    pub async fn check_cost(
        &self,
        destination: i32,
        weight: i32,
        courier: &str,
    ) -> AppResult<Vec<CourierCost>> {
        let url = format!("{}/cost", self.config.base_url);
        let response = self
            .client
            .post(&url)
            .header("key", &self.config.api_key)
            .json(&serde_json::json!({
                "origin": self.config.origin,
                "destination": destination,
                "weight": weight,
                "courier": courier,
            }))
            .send()
            .await?;

        if !response.status().is_success() {
            return Err(AppError::Upstream(format!(
                "courier API returned {}",
                response.status()
            )));
        }

        let body: CostResponse = response.json().await?;
        Ok(body
            .rajaongkir
            .results
            .into_iter()
            .next()
            .map(|r| r.costs)
            .unwrap_or_default())
    }
}

pub async fn get_provinces(state: &AppState) -> AppResult<ApiResponse<Vec<ProvinceView>>> {
    let provinces = Provinces::find()
        .order_by_asc(ProvinceCol::Id)
        .all(&state.orm)
        .await?
        .into_iter()
        .map(ProvinceView::from)
        .collect();

    Ok(ApiResponse::success("List Data Provinces", provinces))
}

pub async fn get_cities(
    state: &AppState,
    province_id: i32,
) -> AppResult<ApiResponse<Vec<CityView>>> {
    let province = Provinces::find_by_id(province_id)
        .one(&state.orm)
        .await?
        .ok_or_else(|| AppError::NotFound("Province Not Found!".into()))?;

    let cities = Cities::find()
        .filter(CityCol::ProvinceId.eq(province.id))
        .order_by_asc(CityCol::Id)
        .all(&state.orm)
        .await?
        .into_iter()
        .map(CityView::from)
        .collect();

    let message = format!("List Data City By Province : {}", province.name);
    Ok(ApiResponse::success(message, cities))
}

pub async fn check_cost(
    state: &AppState,
    payload: CheckCostRequest,
) -> AppResult<ApiResponse<Vec<CourierCost>>> {
    payload.validate()?;

    let costs = state
        .shipping
        .check_cost(payload.destination, payload.weight, &payload.courier)
        .await?;

    let message = format!("List Data Shipping Cost : {}", payload.courier);
    Ok(ApiResponse::success(message, costs))
}
