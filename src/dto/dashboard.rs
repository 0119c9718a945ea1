use serde::Serialize;
use utoipa::ToSchema;

#[derive(Debug, Serialize, ToSchema)]
pub struct StatusCounts {
    pub pending: i64,
    pub success: i64,
    pub expired: i64,
    pub failed: i64,
}

/// Month buckets for the current year's success invoices. When no invoice
/// qualifies, both arrays carry a single empty-string element; consumers
/// depend on that exact shape.
#[derive(Debug, Serialize, ToSchema)]
pub struct DashboardChart {
    #[schema(value_type = Vec<Object>)]
    pub month_name: Vec<serde_json::Value>,
    #[schema(value_type = Vec<Object>)]
    pub grand_total: Vec<serde_json::Value>,
}

#[derive(Debug, Serialize, ToSchema)]
pub struct DashboardData {
    pub count: StatusCounts,
    pub chart: DashboardChart,
}
