use std::collections::HashMap;
use std::str::FromStr;

use chrono::Utc;
use sea_orm::ActiveValue::NotSet;
use sea_orm::sea_query::Expr;
use sea_orm::sea_query::extension::postgres::PgExpr;
use sea_orm::{
    ActiveModelTrait, ColumnTrait, Condition, EntityTrait, PaginatorTrait, QueryFilter,
    QueryOrder, QuerySelect, Set,
};
use uuid::Uuid;

use crate::{
    dto::catalog::{CategoryView, ProductView, ProductWithCategory},
    entity::categories::Entity as Categories,
    entity::products::{ActiveModel, Column, Entity as Products},
    error::{AppError, AppResult},
    middleware::auth::AdminUser,
    response::{ApiResponse, Paginated},
    services::image_service::{self, UploadedImage},
    services::slugify,
    state::AppState,
};

pub const ADMIN_PAGE_SIZE: i64 = 5;

/// Fields collected from the multipart create/update form; everything
/// arrives as text and is parsed during validation.
#[derive(Debug, Default)]
pub struct ProductForm {
    pub title: Option<String>,
    pub category_id: Option<String>,
    pub description: Option<String>,
    pub weight: Option<String>,
    pub price: Option<String>,
    pub stock: Option<String>,
    pub discount: Option<String>,
    pub image: Option<UploadedImage>,
}

impl ProductForm {
    pub fn from_parts(fields: HashMap<String, String>, image: Option<UploadedImage>) -> Self {
        Self {
            title: fields.get("title").cloned(),
            category_id: fields.get("category_id").cloned(),
            description: fields.get("description").cloned(),
            weight: fields.get("weight").cloned(),
            price: fields.get("price").cloned(),
            stock: fields.get("stock").cloned(),
            discount: fields.get("discount").cloned(),
            image,
        }
    }
}

/// Validated form values ready to be written.
struct ProductValues {
    title: String,
    category_id: Uuid,
    description: String,
    weight: i32,
    price: i64,
    stock: i32,
    discount: i32,
}

fn require<'a>(
    errors: &mut HashMap<String, Vec<String>>,
    field: &str,
    value: Option<&'a String>,
) -> Option<&'a str> {
    match value.map(|v| v.as_str()).filter(|v| !v.is_empty()) {
        Some(v) => Some(v),
        None => {
            errors
                .entry(field.to_string())
                .or_default()
                .push(format!("The {} field is required.", field));
            None
        }
    }
}

fn parse_number<T: FromStr>(
    errors: &mut HashMap<String, Vec<String>>,
    field: &str,
    value: Option<&str>,
) -> Option<T> {
    let raw = value?;
    match raw.parse::<T>() {
        Ok(parsed) => Some(parsed),
        Err(_) => {
            errors
                .entry(field.to_string())
                .or_default()
                .push(format!("The {} must be a number.", field));
            None
        }
    }
}

async fn title_taken(state: &AppState, title: &str, exclude: Option<Uuid>) -> AppResult<bool> {
    let mut condition = Condition::all().add(Column::Title.eq(title));
    if let Some(id) = exclude {
        condition = condition.add(Column::Id.ne(id));
    }
    let count = Products::find().filter(condition).count(&state.orm).await?;
    Ok(count > 0)
}

async fn validate_form(
    state: &AppState,
    form: &ProductForm,
    exclude: Option<Uuid>,
    image_required: bool,
) -> AppResult<ProductValues> {
    let mut errors: HashMap<String, Vec<String>> = HashMap::new();

    let title = require(&mut errors, "title", form.title.as_ref());
    if let Some(title) = title {
        if title_taken(state, title, exclude).await? {
            errors
                .entry("title".into())
                .or_default()
                .push("The title has already been taken.".into());
        }
    }

    let category_raw = require(&mut errors, "category_id", form.category_id.as_ref());
    let category_id = category_raw.and_then(|raw| match Uuid::parse_str(raw) {
        Ok(id) => Some(id),
        Err(_) => {
            errors
                .entry("category_id".into())
                .or_default()
                .push("The category_id must be a valid id.".into());
            None
        }
    });

    let description = require(&mut errors, "description", form.description.as_ref());
    let weight = require(&mut errors, "weight", form.weight.as_ref());
    let weight: Option<i32> = parse_number(&mut errors, "weight", weight);
    let price = require(&mut errors, "price", form.price.as_ref());
    let price: Option<i64> = parse_number(&mut errors, "price", price);
    let stock = require(&mut errors, "stock", form.stock.as_ref());
    let stock: Option<i32> = parse_number(&mut errors, "stock", stock);
    let discount = require(&mut errors, "discount", form.discount.as_ref());
    let discount: Option<i32> = parse_number(&mut errors, "discount", discount);

    match &form.image {
        None if image_required => {
            errors
                .entry("image".into())
                .or_default()
                .push("The image field is required.".into());
        }
        Some(image) => {
            if let Err(message) = image_service::validate_image(image) {
                errors.entry("image".into()).or_default().push(message);
            }
        }
        None => {}
    }

    if !errors.is_empty() {
        return Err(AppError::Validation(errors));
    }

    // Every branch above recorded an error before leaving a None behind.
    match (title, category_id, description, weight, price, stock, discount) {
        (
            Some(title),
            Some(category_id),
            Some(description),
            Some(weight),
            Some(price),
            Some(stock),
            Some(discount),
        ) => Ok(ProductValues {
            title: title.to_string(),
            category_id,
            description: description.to_string(),
            weight,
            price,
            stock,
            discount,
        }),
        _ => Err(AppError::BadRequest("invalid product form".into())),
    }
}

pub async fn list_products(
    state: &AppState,
    q: Option<&str>,
    page: i64,
) -> AppResult<ApiResponse<Paginated<ProductWithCategory>>> {
    let page = page.max(1);
    let mut condition = Condition::all();
    if let Some(search) = q.filter(|s| !s.is_empty()) {
        let pattern = format!("%{}%", search);
        condition = condition.add(Expr::col(Column::Title).ilike(pattern));
    }

    let finder = Products::find()
        .filter(condition)
        .order_by_desc(Column::CreatedAt);

    let total = finder.clone().count(&state.orm).await? as i64;

    let items = finder
        .find_also_related(Categories)
        .limit(ADMIN_PAGE_SIZE as u64)
        .offset(((page - 1) * ADMIN_PAGE_SIZE) as u64)
        .all(&state.orm)
        .await?
        .into_iter()
        .filter_map(|(product, category)| {
            category.map(|c| ProductWithCategory {
                product: ProductView::from_model(product, &state.config.app_url),
                category: CategoryView::from_model(c, &state.config.app_url),
            })
        })
        .collect();

    let data = Paginated::new(items, "/admin/products", page, ADMIN_PAGE_SIZE, total);
    Ok(ApiResponse::success("List Data Products", data))
}

pub async fn create_product(
    state: &AppState,
    admin: &AdminUser,
    form: ProductForm,
) -> AppResult<ApiResponse<ProductView>> {
    let values = validate_form(state, &form, None, true).await?;
    let Some(image) = form.image else {
        return Err(AppError::BadRequest("image field is missing".into()));
    };
    let stored = image_service::store_image(&state.config.storage_dir, "products", &image).await?;

    let product = ActiveModel {
        id: Set(Uuid::new_v4()),
        category_id: Set(values.category_id),
        user_id: Set(admin.user_id),
        title: Set(values.title.clone()),
        slug: Set(slugify(&values.title)),
        description: Set(values.description),
        weight: Set(values.weight),
        price: Set(values.price),
        stock: Set(values.stock),
        discount: Set(values.discount),
        image: Set(stored),
        created_at: NotSet,
        updated_at: NotSet,
    }
    .insert(&state.orm)
    .await?;

    Ok(ApiResponse::success(
        "Product created",
        ProductView::from_model(product, &state.config.app_url),
    ))
}

pub async fn get_product(state: &AppState, id: Uuid) -> AppResult<ApiResponse<ProductView>> {
    let product = Products::find_by_id(id)
        .one(&state.orm)
        .await?
        .ok_or_else(|| AppError::NotFound("Product Not Found!".into()))?;

    Ok(ApiResponse::success(
        "Detail Data Product",
        ProductView::from_model(product, &state.config.app_url),
    ))
}

pub async fn update_product(
    state: &AppState,
    admin: &AdminUser,
    id: Uuid,
    form: ProductForm,
) -> AppResult<ApiResponse<ProductView>> {
    let existing = Products::find_by_id(id)
        .one(&state.orm)
        .await?
        .ok_or_else(|| AppError::NotFound("Product Not Found!".into()))?;

    let values = validate_form(state, &form, Some(existing.id), false).await?;
    let old_image = existing.image.clone();

    let mut active: ActiveModel = existing.into();
    active.category_id = Set(values.category_id);
    active.user_id = Set(admin.user_id);
    active.title = Set(values.title.clone());
    active.slug = Set(slugify(&values.title));
    active.description = Set(values.description);
    active.weight = Set(values.weight);
    active.price = Set(values.price);
    active.stock = Set(values.stock);
    active.discount = Set(values.discount);
    if let Some(image) = &form.image {
        let stored =
            image_service::store_image(&state.config.storage_dir, "products", image).await?;
        image_service::delete_image(&state.config.storage_dir, "products", &old_image).await;
        active.image = Set(stored);
    }
    active.updated_at = Set(Utc::now().into());
    let product = active.update(&state.orm).await?;

    Ok(ApiResponse::success(
        "Product updated",
        ProductView::from_model(product, &state.config.app_url),
    ))
}

pub async fn delete_product(
    state: &AppState,
    id: Uuid,
) -> AppResult<ApiResponse<serde_json::Value>> {
    let product = Products::find_by_id(id)
        .one(&state.orm)
        .await?
        .ok_or_else(|| AppError::NotFound("Product Not Found!".into()))?;

    image_service::delete_image(&state.config.storage_dir, "products", &product.image).await;
    Products::delete_by_id(product.id).exec(&state.orm).await?;

    Ok(ApiResponse {
        success: true,
        message: "Product deleted".into(),
        data: None,
    })
}
