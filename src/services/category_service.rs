use std::collections::HashMap;

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
    dto::catalog::CategoryView,
    entity::categories::{ActiveModel, Column, Entity as Categories},
    error::{AppError, AppResult},
    response::{ApiResponse, Paginated},
    services::image_service::{self, UploadedImage},
    services::slugify,
    state::AppState,
};

pub const ADMIN_PAGE_SIZE: i64 = 5;

/// Fields collected from the multipart create/update form.
#[derive(Debug, Default)]
pub struct CategoryForm {
    pub name: Option<String>,
    pub image: Option<UploadedImage>,
}

impl CategoryForm {
    pub fn from_parts(fields: HashMap<String, String>, image: Option<UploadedImage>) -> Self {
        Self {
            name: fields.get("name").cloned(),
            image,
        }
    }
}

pub async fn list_categories(
    state: &AppState,
    q: Option<&str>,
    page: i64,
) -> AppResult<ApiResponse<Paginated<CategoryView>>> {
    let page = page.max(1);
    let mut condition = Condition::all();
    if let Some(search) = q.filter(|s| !s.is_empty()) {
        let pattern = format!("%{}%", search);
        condition = condition.add(Expr::col(Column::Name).ilike(pattern));
    }

    let finder = Categories::find()
        .filter(condition)
        .order_by_desc(Column::CreatedAt);

    let total = finder.clone().count(&state.orm).await? as i64;

    let items = finder
        .limit(ADMIN_PAGE_SIZE as u64)
        .offset(((page - 1) * ADMIN_PAGE_SIZE) as u64)
        .all(&state.orm)
        .await?
        .into_iter()
        .map(|c| CategoryView::from_model(c, &state.config.app_url))
        .collect();

    let data = Paginated::new(items, "/admin/categories", page, ADMIN_PAGE_SIZE, total);
    Ok(ApiResponse::success("List Data Categories", data))
}

async fn name_taken(state: &AppState, name: &str, exclude: Option<Uuid>) -> AppResult<bool> {
    let mut condition = Condition::all().add(Column::Name.eq(name));
    if let Some(id) = exclude {
        condition = condition.add(Column::Id.ne(id));
    }
    let count = Categories::find()
        .filter(condition)
        .count(&state.orm)
        .await?;
    Ok(count > 0)
}

async fn validate_form(
    state: &AppState,
    form: &CategoryForm,
    exclude: Option<Uuid>,
    image_required: bool,
) -> AppResult<()> {
    let mut errors: HashMap<String, Vec<String>> = HashMap::new();

    match form.name.as_deref().filter(|n| !n.is_empty()) {
        None => {
            errors
                .entry("name".into())
                .or_default()
                .push("The name field is required.".into());
        }
        Some(name) => {
            if name_taken(state, name, exclude).await? {
                errors
                    .entry("name".into())
                    .or_default()
                    .push("The name has already been taken.".into());
            }
        }
    }

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

    if errors.is_empty() {
        Ok(())
    } else {
        Err(AppError::Validation(errors))
    }
}

pub async fn create_category(
    state: &AppState,
    form: CategoryForm,
) -> AppResult<ApiResponse<CategoryView>> {
    validate_form(state, &form, None, true).await?;

    let name = form.name.unwrap_or_default();
    let Some(image) = form.image else {
        return Err(AppError::BadRequest("image field is missing".into()));
    };
    let stored = image_service::store_image(&state.config.storage_dir, "categories", &image).await?;

    let category = ActiveModel {
        id: Set(Uuid::new_v4()),
        name: Set(name.clone()),
        slug: Set(slugify(&name)),
        image: Set(stored),
        created_at: NotSet,
        updated_at: NotSet,
    }
    .insert(&state.orm)
    .await?;

    Ok(ApiResponse::success(
        "Category created",
        CategoryView::from_model(category, &state.config.app_url),
    ))
}

pub async fn get_category(state: &AppState, id: Uuid) -> AppResult<ApiResponse<CategoryView>> {
    let category = Categories::find_by_id(id)
        .one(&state.orm)
        .await?
        .ok_or_else(|| AppError::NotFound("Category Not Found!".into()))?;

    Ok(ApiResponse::success(
        "Detail Data Category",
        CategoryView::from_model(category, &state.config.app_url),
    ))
}

pub async fn update_category(
    state: &AppState,
    id: Uuid,
    form: CategoryForm,
) -> AppResult<ApiResponse<CategoryView>> {
    let existing = Categories::find_by_id(id)
        .one(&state.orm)
        .await?
        .ok_or_else(|| AppError::NotFound("Category Not Found!".into()))?;

    validate_form(state, &form, Some(existing.id), false).await?;

    let name = form.name.unwrap_or_default();
    let old_image = existing.image.clone();

    let mut active: ActiveModel = existing.into();
    active.name = Set(name.clone());
    active.slug = Set(slugify(&name));
    if let Some(image) = &form.image {
        let stored =
            image_service::store_image(&state.config.storage_dir, "categories", image).await?;
        image_service::delete_image(&state.config.storage_dir, "categories", &old_image).await;
        active.image = Set(stored);
    }
    active.updated_at = Set(Utc::now().into());
    let category = active.update(&state.orm).await?;

    Ok(ApiResponse::success(
        "Category updated",
        CategoryView::from_model(category, &state.config.app_url),
    ))
}

pub async fn delete_category(
    state: &AppState,
    id: Uuid,
) -> AppResult<ApiResponse<serde_json::Value>> {
    let category = Categories::find_by_id(id)
        .one(&state.orm)
        .await?
        .ok_or_else(|| AppError::NotFound("Category Not Found!".into()))?;

    image_service::delete_image(&state.config.storage_dir, "categories", &category.image).await;
    Categories::delete_by_id(category.id).exec(&state.orm).await?;

    Ok(ApiResponse {
        success: true,
        message: "Category deleted".into(),
        data: None,
    })
}
