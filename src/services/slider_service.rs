use std::collections::HashMap;

use sea_orm::ActiveValue::NotSet;
use sea_orm::{ActiveModelTrait, EntityTrait, PaginatorTrait, QueryOrder, QuerySelect, Set};
use uuid::Uuid;

use crate::{
    dto::catalog::SliderView,
    entity::sliders::{ActiveModel, Column, Entity as Sliders},
    error::{AppError, AppResult},
    response::{ApiResponse, Paginated},
    services::image_service::{self, UploadedImage},
    state::AppState,
};

pub const ADMIN_PAGE_SIZE: i64 = 5;

#[derive(Debug, Default)]
pub struct SliderForm {
    pub link: Option<String>,
    pub image: Option<UploadedImage>,
}

impl SliderForm {
    pub fn from_parts(fields: HashMap<String, String>, image: Option<UploadedImage>) -> Self {
        Self {
            link: fields.get("link").cloned(),
            image,
        }
    }
}

pub async fn list_sliders(
    state: &AppState,
    page: i64,
) -> AppResult<ApiResponse<Paginated<SliderView>>> {
    let page = page.max(1);
    let finder = Sliders::find().order_by_desc(Column::CreatedAt);

    let total = finder.clone().count(&state.orm).await? as i64;

    let items = finder
        .limit(ADMIN_PAGE_SIZE as u64)
        .offset(((page - 1) * ADMIN_PAGE_SIZE) as u64)
        .all(&state.orm)
        .await?
        .into_iter()
        .map(|s| SliderView::from_model(s, &state.config.app_url))
        .collect();

    let data = Paginated::new(items, "/admin/sliders", page, ADMIN_PAGE_SIZE, total);
    Ok(ApiResponse::success("List Data Sliders", data))
}

pub async fn create_slider(
    state: &AppState,
    form: SliderForm,
) -> AppResult<ApiResponse<SliderView>> {
    let mut errors: HashMap<String, Vec<String>> = HashMap::new();
    match &form.image {
        None => {
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
    }
    if !errors.is_empty() {
        return Err(AppError::Validation(errors));
    }

    let Some(image) = form.image else {
        return Err(AppError::BadRequest("image field is missing".into()));
    };
    let stored = image_service::store_image(&state.config.storage_dir, "sliders", &image).await?;

    let slider = ActiveModel {
        id: Set(Uuid::new_v4()),
        image: Set(stored),
        link: Set(form.link.filter(|l| !l.is_empty())),
        created_at: NotSet,
        updated_at: NotSet,
    }
    .insert(&state.orm)
    .await?;

    Ok(ApiResponse::success(
        "Slider created",
        SliderView::from_model(slider, &state.config.app_url),
    ))
}

pub async fn delete_slider(
    state: &AppState,
    id: Uuid,
) -> AppResult<ApiResponse<serde_json::Value>> {
    let slider = Sliders::find_by_id(id)
        .one(&state.orm)
        .await?
        .ok_or_else(|| AppError::NotFound("Slider Not Found!".into()))?;

    image_service::delete_image(&state.config.storage_dir, "sliders", &slider.image).await;
    Sliders::delete_by_id(slider.id).exec(&state.orm).await?;

    Ok(ApiResponse {
        success: true,
        message: "Slider deleted".into(),
        data: None,
    })
}
