use std::collections::HashMap;

use sea_orm::sea_query::Expr;
use sea_orm::sea_query::extension::postgres::PgExpr;
use sea_orm::{
    ColumnTrait, Condition, EntityTrait, PaginatorTrait, QueryFilter, QueryOrder, QuerySelect,
};
use sqlx::FromRow;
use uuid::Uuid;

use crate::{
    dto::auth::CustomerView,
    dto::catalog::{
        CategoryDetail, CategoryView, ProductDetail, ProductView, RatedProduct, ReviewView,
        SliderView, format_rating,
    },
    entity::categories::{Column as CategoryCol, Entity as Categories},
    entity::customers::Entity as Customers,
    entity::products::{Column as ProductCol, Entity as Products, Model as ProductModel},
    entity::reviews::{Column as ReviewCol, Entity as Reviews},
    entity::sliders::{Column as SliderCol, Entity as Sliders},
    error::{AppError, AppResult},
    response::{ApiResponse, Paginated},
    state::AppState,
};

pub const WEB_PAGE_SIZE: i64 = 10;

#[derive(FromRow)]
struct RatingRow {
    product_id: Uuid,
    avg_rating: f64,
    reviews_count: i64,
}

/// Review aggregates for a set of products, computed at read time.
async fn rating_aggregates(
    state: &AppState,
    product_ids: &[Uuid],
) -> AppResult<HashMap<Uuid, (f64, i64)>> {
    if product_ids.is_empty() {
        return Ok(HashMap::new());
    }
    let rows: Vec<RatingRow> = sqlx::query_as(
        r#"
        SELECT product_id,
               AVG(rating)::FLOAT8 AS avg_rating,
               COUNT(*)::BIGINT AS reviews_count
        FROM reviews
        WHERE product_id = ANY($1)
        GROUP BY product_id
        "#,
    )
    .bind(product_ids.to_vec())
    .fetch_all(&state.pool)
    .await?;

    Ok(rows
        .into_iter()
        .map(|r| (r.product_id, (r.avg_rating, r.reviews_count)))
        .collect())
}

fn rated_product(
    state: &AppState,
    product: ProductModel,
    category: crate::entity::categories::Model,
    aggregates: &HashMap<Uuid, (f64, i64)>,
) -> RatedProduct {
    let (avg, count) = match aggregates.get(&product.id) {
        Some((avg, count)) => (Some(*avg), *count),
        None => (None, 0),
    };
    RatedProduct {
        product: ProductView::from_model(product, &state.config.app_url),
        category: CategoryView::from_model(category, &state.config.app_url),
        reviews_avg_rating: format_rating(avg),
        reviews_count: count,
    }
}

pub async fn list_categories(state: &AppState) -> AppResult<ApiResponse<Vec<CategoryView>>> {
    let categories = Categories::find()
        .order_by_desc(CategoryCol::CreatedAt)
        .all(&state.orm)
        .await?
        .into_iter()
        .map(|c| CategoryView::from_model(c, &state.config.app_url))
        .collect();

    Ok(ApiResponse::success("List Data Categories", categories))
}

pub async fn category_detail(
    state: &AppState,
    slug: &str,
) -> AppResult<ApiResponse<CategoryDetail>> {
    let category = Categories::find()
        .filter(CategoryCol::Slug.eq(slug))
        .one(&state.orm)
        .await?
        .ok_or_else(|| AppError::NotFound("Category Not Found!".into()))?;

    let products = Products::find()
        .filter(ProductCol::CategoryId.eq(category.id))
        .order_by_desc(ProductCol::CreatedAt)
        .all(&state.orm)
        .await?;

    let ids: Vec<Uuid> = products.iter().map(|p| p.id).collect();
    let aggregates = rating_aggregates(state, &ids).await?;

    let rated = products
        .into_iter()
        .map(|p| rated_product(state, p, category.clone(), &aggregates))
        .collect();

    let message = format!("Data Product By Category : {}", category.name);
    let data = CategoryDetail {
        category: CategoryView::from_model(category, &state.config.app_url),
        products: rated,
    };
    Ok(ApiResponse::success(message, data))
}

pub async fn list_products(
    state: &AppState,
    q: Option<&str>,
    page: i64,
) -> AppResult<ApiResponse<Paginated<RatedProduct>>> {
    let page = page.max(1);
    let mut condition = Condition::all();
    if let Some(search) = q.filter(|s| !s.is_empty()) {
        let pattern = format!("%{}%", search);
        condition = condition.add(Expr::col(ProductCol::Title).ilike(pattern));
    }

    let finder = Products::find()
        .filter(condition)
        .order_by_desc(ProductCol::CreatedAt);

    let total = finder.clone().count(&state.orm).await? as i64;

    let rows = finder
        .find_also_related(Categories)
        .limit(WEB_PAGE_SIZE as u64)
        .offset(((page - 1) * WEB_PAGE_SIZE) as u64)
        .all(&state.orm)
        .await?;

    let ids: Vec<Uuid> = rows.iter().map(|(p, _)| p.id).collect();
    let aggregates = rating_aggregates(state, &ids).await?;

    let items = rows
        .into_iter()
        .filter_map(|(product, category)| {
            category.map(|c| rated_product(state, product, c, &aggregates))
        })
        .collect();

    let data = Paginated::new(items, "/web/products", page, WEB_PAGE_SIZE, total);
    Ok(ApiResponse::success("List Data Products", data))
}

pub async fn product_detail(state: &AppState, slug: &str) -> AppResult<ApiResponse<ProductDetail>> {
    let found = Products::find()
        .filter(ProductCol::Slug.eq(slug))
        .find_also_related(Categories)
        .one(&state.orm)
        .await?;

    let (product, category) = match found {
        Some((product, Some(category))) => (product, category),
        _ => return Err(AppError::NotFound("Product Not Found!".into())),
    };

    let aggregates = rating_aggregates(state, &[product.id]).await?;

    let reviews = Reviews::find()
        .filter(ReviewCol::ProductId.eq(product.id))
        .order_by_desc(ReviewCol::CreatedAt)
        .find_also_related(Customers)
        .all(&state.orm)
        .await?
        .into_iter()
        .filter_map(|(review, customer)| {
            customer.map(|c| ReviewView {
                id: review.id,
                rating: review.rating,
                review: review.review,
                customer: CustomerView::from(c),
                created_at: review.created_at.with_timezone(&chrono::Utc),
            })
        })
        .collect();

    let data = ProductDetail {
        product: rated_product(state, product, category, &aggregates),
        reviews,
    };
    Ok(ApiResponse::success("Detail Data Product", data))
}

pub async fn list_sliders(state: &AppState) -> AppResult<ApiResponse<Vec<SliderView>>> {
    let sliders = Sliders::find()
        .order_by_desc(SliderCol::CreatedAt)
        .all(&state.orm)
        .await?
        .into_iter()
        .map(|s| SliderView::from_model(s, &state.config.app_url))
        .collect();

    Ok(ApiResponse::success("List Data Sliders", sliders))
}
