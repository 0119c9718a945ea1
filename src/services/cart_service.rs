use chrono::Utc;
use sea_orm::ActiveValue::NotSet;
use sea_orm::sea_query::LockType;
use sea_orm::{
    ActiveModelTrait, ColumnTrait, Condition, EntityTrait, QueryFilter, QueryOrder, QuerySelect,
    Set, TransactionTrait,
};
use uuid::Uuid;
use validator::Validate;

use crate::{
    dto::carts::{AddToCartRequest, CartLine, CartLineWithProduct},
    dto::catalog::ProductView,
    entity::carts::{ActiveModel as CartActive, Column as CartCol, Entity as Carts},
    entity::products::Entity as Products,
    error::{AppError, AppResult},
    middleware::auth::CustomerUser,
    response::ApiResponse,
    state::AppState,
};

pub async fn list_carts(
    state: &AppState,
    customer: &CustomerUser,
) -> AppResult<ApiResponse<Vec<CartLineWithProduct>>> {
    let rows = Carts::find()
        .filter(CartCol::CustomerId.eq(customer.customer_id))
        .order_by_desc(CartCol::CreatedAt)
        .find_also_related(Products)
        .all(&state.orm)
        .await?;

    let items = rows
        .into_iter()
        .filter_map(|(cart, product)| {
            product.map(|p| CartLineWithProduct {
                line: CartLine::from(cart),
                product: ProductView::from_model(p, &state.config.app_url),
            })
        })
        .collect();

    Ok(ApiResponse::success("List Data Carts", items))
}

/// Upsert keyed on (product, customer). A repeated add increments the stored
/// quantity and rewrites price/weight as unit value times the new quantity,
/// so callers must always send unit values. The row is locked for the
/// read-modify-write so concurrent adds serialize.
///
/// Returns `true` when a new row was inserted.
pub async fn add_to_cart(
    state: &AppState,
    customer: &CustomerUser,
    payload: AddToCartRequest,
) -> AppResult<(bool, ApiResponse<CartLine>)> {
    payload.validate()?;

    let txn = state.orm.begin().await?;

    let existing = Carts::find()
        .filter(
            Condition::all()
                .add(CartCol::ProductId.eq(payload.product_id))
                .add(CartCol::CustomerId.eq(customer.customer_id)),
        )
        .lock(LockType::Update)
        .one(&txn)
        .await?;

    let (created, line) = if let Some(item) = existing {
        let qty = item.qty + payload.qty;
        let mut active: CartActive = item.into();
        active.qty = Set(qty);
        active.price = Set(payload.price * qty as i64);
        active.weight = Set(payload.weight * qty);
        active.updated_at = Set(Utc::now().into());
        (false, active.update(&txn).await?)
    } else {
        let line = CartActive {
            id: Set(Uuid::new_v4()),
            product_id: Set(payload.product_id),
            customer_id: Set(customer.customer_id),
            qty: Set(payload.qty),
            price: Set(payload.price),
            weight: Set(payload.weight),
            created_at: NotSet,
            updated_at: NotSet,
        }
        .insert(&txn)
        .await?;
        (true, line)
    };

    txn.commit().await?;

    Ok((
        created,
        ApiResponse::success("Success Add To Cart", CartLine::from(line)),
    ))
}

/// Deletes by id alone; any authenticated customer may remove any row.
pub async fn remove_cart(
    state: &AppState,
    cart_id: Uuid,
) -> AppResult<ApiResponse<CartLineWithProduct>> {
    let found = Carts::find_by_id(cart_id)
        .find_also_related(Products)
        .one(&state.orm)
        .await?;

    let (cart, product) = match found {
        Some((cart, Some(product))) => (cart, product),
        _ => return Err(AppError::NotFound("Cart Not Found!".into())),
    };

    Carts::delete_by_id(cart.id).exec(&state.orm).await?;

    let data = CartLineWithProduct {
        line: CartLine::from(cart),
        product: ProductView::from_model(product, &state.config.app_url),
    };
    Ok(ApiResponse::success("Success Remove Cart", data))
}

pub async fn total_price(state: &AppState, customer: &CustomerUser) -> AppResult<ApiResponse<i64>> {
    let total: (i64,) = sqlx::query_as(
        "SELECT COALESCE(SUM(price), 0)::BIGINT FROM carts WHERE customer_id = $1",
    )
    .bind(customer.customer_id)
    .fetch_one(&state.pool)
    .await?;

    Ok(ApiResponse::success("Total Cart Price", total.0))
}

pub async fn total_weight(state: &AppState, customer: &CustomerUser) -> AppResult<ApiResponse<i64>> {
    let total: (i64,) = sqlx::query_as(
        "SELECT COALESCE(SUM(weight), 0)::BIGINT FROM carts WHERE customer_id = $1",
    )
    .bind(customer.customer_id)
    .fetch_one(&state.pool)
    .await?;

    Ok(ApiResponse::success("Total Cart Weight", total.0))
}
