use chrono::{DateTime, Utc};
use serde::Serialize;
use utoipa::ToSchema;
use uuid::Uuid;

use crate::dto::auth::CustomerView;
use crate::dto::catalog::ProductView;
use crate::dto::shipping::{CityView, ProvinceView};
use crate::entity::invoices;

#[derive(Debug, Serialize, ToSchema)]
pub struct InvoiceView {
    pub id: Uuid,
    pub invoice: String,
    pub customer_id: Uuid,
    pub courier: String,
    pub courier_service: String,
    pub courier_cost: i64,
    pub weight: i32,
    pub name: String,
    pub phone: String,
    pub city_id: i32,
    pub province_id: i32,
    pub address: String,
    pub status: String,
    pub grand_total: i64,
    pub snap_token: String,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl From<invoices::Model> for InvoiceView {
    fn from(model: invoices::Model) -> Self {
        Self {
            id: model.id,
            invoice: model.invoice,
            customer_id: model.customer_id,
            courier: model.courier,
            courier_service: model.courier_service,
            courier_cost: model.courier_cost,
            weight: model.weight,
            name: model.name,
            phone: model.phone,
            city_id: model.city_id,
            province_id: model.province_id,
            address: model.address,
            status: model.status,
            grand_total: model.grand_total,
            snap_token: model.snap_token,
            created_at: model.created_at.with_timezone(&Utc),
            updated_at: model.updated_at.with_timezone(&Utc),
        }
    }
}

/// Admin/customer listing row.
#[derive(Debug, Serialize, ToSchema)]
pub struct InvoiceWithCustomer {
    #[serde(flatten)]
    pub invoice: InvoiceView,
    pub customer: CustomerView,
}

#[derive(Debug, Serialize, ToSchema)]
pub struct OrderLine {
    pub id: Uuid,
    pub invoice_id: Uuid,
    pub product_id: Uuid,
    pub qty: i32,
    pub price: i64,
    pub product: ProductView,
}

#[derive(Debug, Serialize, ToSchema)]
pub struct InvoiceDetail {
    #[serde(flatten)]
    pub invoice: InvoiceView,
    pub customer: CustomerView,
    pub city: CityView,
    pub province: ProvinceView,
    pub orders: Vec<OrderLine>,
}
