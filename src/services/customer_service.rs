use sea_orm::sea_query::Expr;
use sea_orm::sea_query::extension::postgres::PgExpr;
use sea_orm::{Condition, EntityTrait, PaginatorTrait, QueryFilter, QueryOrder, QuerySelect};

use crate::{
    dto::auth::CustomerView,
    entity::customers::{Column, Entity as Customers},
    error::AppResult,
    response::{ApiResponse, Paginated},
    state::AppState,
};

pub const ADMIN_PAGE_SIZE: i64 = 5;

pub async fn list_customers(
    state: &AppState,
    q: Option<&str>,
    page: i64,
) -> AppResult<ApiResponse<Paginated<CustomerView>>> {
    let page = page.max(1);
    let mut condition = Condition::all();
    if let Some(search) = q.filter(|s| !s.is_empty()) {
        let pattern = format!("%{}%", search);
        condition = condition.add(Expr::col(Column::Name).ilike(pattern));
    }

    let finder = Customers::find()
        .filter(condition)
        .order_by_desc(Column::CreatedAt);

    let total = finder.clone().count(&state.orm).await? as i64;

    let items = finder
        .limit(ADMIN_PAGE_SIZE as u64)
        .offset(((page - 1) * ADMIN_PAGE_SIZE) as u64)
        .all(&state.orm)
        .await?
        .into_iter()
        .map(CustomerView::from)
        .collect();

    let data = Paginated::new(items, "/admin/customers", page, ADMIN_PAGE_SIZE, total);
    Ok(ApiResponse::success("List Data Customers", data))
}
