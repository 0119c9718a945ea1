use sea_orm::sea_query::Expr;
use sea_orm::sea_query::extension::postgres::PgExpr;
use sea_orm::{
    ColumnTrait, Condition, EntityTrait, PaginatorTrait, QueryFilter, QueryOrder, QuerySelect,
};
use uuid::Uuid;

use crate::{
    dto::auth::CustomerView,
    dto::catalog::ProductView,
    dto::invoices::{InvoiceDetail, InvoiceView, InvoiceWithCustomer, OrderLine},
    dto::shipping::{CityView, ProvinceView},
    entity::cities::Entity as Cities,
    entity::customers::Entity as Customers,
    entity::invoices::{Column as InvoiceCol, Entity as Invoices, Model as InvoiceModel},
    entity::orders::{Column as OrderCol, Entity as Orders},
    entity::products::Entity as Products,
    entity::provinces::Entity as Provinces,
    error::{AppError, AppResult},
    middleware::auth::CustomerUser,
    response::{ApiResponse, Paginated},
    state::AppState,
};

pub const ADMIN_PAGE_SIZE: i64 = 5;

async fn paginated_invoices(
    state: &AppState,
    q: Option<&str>,
    page: i64,
    scope: Option<Uuid>,
    path: &str,
) -> AppResult<Paginated<InvoiceWithCustomer>> {
    let page = page.max(1);
    let mut condition = Condition::all();
    if let Some(search) = q.filter(|s| !s.is_empty()) {
        let pattern = format!("%{}%", search);
        condition = condition.add(Expr::col(InvoiceCol::Invoice).ilike(pattern));
    }
    if let Some(customer_id) = scope {
        condition = condition.add(InvoiceCol::CustomerId.eq(customer_id));
    }

    let finder = Invoices::find()
        .filter(condition)
        .order_by_desc(InvoiceCol::CreatedAt);

    let total = finder.clone().count(&state.orm).await? as i64;

    let items = finder
        .find_also_related(Customers)
        .limit(ADMIN_PAGE_SIZE as u64)
        .offset(((page - 1) * ADMIN_PAGE_SIZE) as u64)
        .all(&state.orm)
        .await?
        .into_iter()
        .filter_map(|(invoice, customer)| {
            customer.map(|c| InvoiceWithCustomer {
                invoice: InvoiceView::from(invoice),
                customer: CustomerView::from(c),
            })
        })
        .collect();

    Ok(Paginated::new(items, path, page, ADMIN_PAGE_SIZE, total))
}

/// Assemble the full read model: invoice plus customer, destination and
/// line items with their products.
async fn build_detail(state: &AppState, invoice: InvoiceModel) -> AppResult<InvoiceDetail> {
    let customer = Customers::find_by_id(invoice.customer_id)
        .one(&state.orm)
        .await?
        .ok_or_else(|| AppError::NotFound("Customer Not Found!".into()))?;

    let city = Cities::find_by_id(invoice.city_id)
        .one(&state.orm)
        .await?
        .ok_or_else(|| AppError::NotFound("City Not Found!".into()))?;

    let province = Provinces::find_by_id(invoice.province_id)
        .one(&state.orm)
        .await?
        .ok_or_else(|| AppError::NotFound("Province Not Found!".into()))?;

    let orders = Orders::find()
        .filter(OrderCol::InvoiceId.eq(invoice.id))
        .find_also_related(Products)
        .all(&state.orm)
        .await?
        .into_iter()
        .filter_map(|(order, product)| {
            product.map(|p| OrderLine {
                id: order.id,
                invoice_id: order.invoice_id,
                product_id: order.product_id,
                qty: order.qty,
                price: order.price,
                product: ProductView::from_model(p, &state.config.app_url),
            })
        })
        .collect();

    Ok(InvoiceDetail {
        invoice: InvoiceView::from(invoice),
        customer: CustomerView::from(customer),
        city: CityView::from(city),
        province: ProvinceView::from(province),
        orders,
    })
}

pub async fn admin_list_invoices(
    state: &AppState,
    q: Option<&str>,
    page: i64,
) -> AppResult<ApiResponse<Paginated<InvoiceWithCustomer>>> {
    let data = paginated_invoices(state, q, page, None, "/admin/invoices").await?;
    Ok(ApiResponse::success("List Data Invoices", data))
}

pub async fn admin_invoice_detail(
    state: &AppState,
    id: Uuid,
) -> AppResult<ApiResponse<InvoiceDetail>> {
    let invoice = Invoices::find_by_id(id)
        .one(&state.orm)
        .await?
        .ok_or_else(|| AppError::NotFound("Invoice Not Found!".into()))?;

    let data = build_detail(state, invoice).await?;
    Ok(ApiResponse::success("Detail Data Invoice", data))
}

pub async fn customer_list_invoices(
    state: &AppState,
    customer: &CustomerUser,
    q: Option<&str>,
    page: i64,
) -> AppResult<ApiResponse<Paginated<InvoiceWithCustomer>>> {
    let data = paginated_invoices(
        state,
        q,
        page,
        Some(customer.customer_id),
        "/customer/invoices",
    )
    .await?;
    Ok(ApiResponse::success("List Data Invoices", data))
}

/// Customers look invoices up by payment-session token, never by id.
pub async fn customer_invoice_detail(
    state: &AppState,
    customer: &CustomerUser,
    snap_token: &str,
) -> AppResult<ApiResponse<InvoiceDetail>> {
    let invoice = Invoices::find()
        .filter(
            Condition::all()
                .add(InvoiceCol::CustomerId.eq(customer.customer_id))
                .add(InvoiceCol::SnapToken.eq(snap_token)),
        )
        .one(&state.orm)
        .await?
        .ok_or_else(|| AppError::NotFound("Invoice Not Found!".into()))?;

    let message = format!("Detail Data Invoice : {}", invoice.snap_token);
    let data = build_detail(state, invoice).await?;
    Ok(ApiResponse::success(message, data))
}
