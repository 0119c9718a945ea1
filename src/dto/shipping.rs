use serde::{Deserialize, Serialize};
use utoipa::ToSchema;
use validator::Validate;

use crate::entity::{cities, provinces};

#[derive(Debug, Serialize, ToSchema)]
pub struct ProvinceView {
    pub id: i32,
    pub name: String,
}

impl From<provinces::Model> for ProvinceView {
    fn from(model: provinces::Model) -> Self {
        Self {
            id: model.id,
            name: model.name,
        }
    }
}

#[derive(Debug, Serialize, ToSchema)]
pub struct CityView {
    pub id: i32,
    pub province_id: i32,
    pub name: String,
}

impl From<cities::Model> for CityView {
    fn from(model: cities::Model) -> Self {
        Self {
            id: model.id,
            province_id: model.province_id,
            name: model.name,
        }
    }
}

#[derive(Debug, Deserialize, ToSchema)]
pub struct CitiesRequest {
    pub province_id: i32,
}

#[derive(Debug, Deserialize, Validate, ToSchema)]
pub struct CheckCostRequest {
    /// Destination city id in the courier API's own numbering.
    pub destination: i32,
    #[validate(range(min = 1, message = "The weight must be at least 1."))]
    pub weight: i32,
    #[validate(length(min = 1, message = "The courier field is required."))]
    pub courier: String,
}

/// One service option quoted by the courier, passed through verbatim.
#[derive(Debug, Serialize, Deserialize, ToSchema)]
pub struct CourierCost {
    pub service: String,
    pub description: String,
    pub cost: Vec<CostDetail>,
}

#[derive(Debug, Serialize, Deserialize, ToSchema)]
pub struct CostDetail {
    pub value: i64,
    pub etd: String,
    pub note: String,
}
