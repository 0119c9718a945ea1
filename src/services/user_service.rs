use chrono::Utc;
use sea_orm::ActiveValue::NotSet;
use sea_orm::sea_query::Expr;
use sea_orm::sea_query::extension::postgres::PgExpr;
use sea_orm::{
    ActiveModelTrait, ColumnTrait, Condition, EntityTrait, PaginatorTrait, QueryFilter,
    QueryOrder, QuerySelect, Set,
};
use uuid::Uuid;
use validator::Validate;

use crate::{
    dto::auth::UserView,
    dto::users::{CreateUserRequest, UpdateUserRequest},
    entity::users::{ActiveModel, Column, Entity as Users},
    error::{AppError, AppResult},
    response::{ApiResponse, Paginated},
    services::auth_service::hash_password,
    state::AppState,
};

pub const ADMIN_PAGE_SIZE: i64 = 5;

async fn email_taken(state: &AppState, email: &str, exclude: Option<Uuid>) -> AppResult<bool> {
    let mut condition = Condition::all().add(Column::Email.eq(email));
    if let Some(id) = exclude {
        condition = condition.add(Column::Id.ne(id));
    }
    let count = Users::find().filter(condition).count(&state.orm).await?;
    Ok(count > 0)
}

fn email_taken_error() -> AppError {
    AppError::Validation(
        [(
            "email".to_string(),
            vec!["The email has already been taken.".to_string()],
        )]
        .into(),
    )
}

pub async fn list_users(
    state: &AppState,
    q: Option<&str>,
    page: i64,
) -> AppResult<ApiResponse<Paginated<UserView>>> {
    let page = page.max(1);
    let mut condition = Condition::all();
    if let Some(search) = q.filter(|s| !s.is_empty()) {
        let pattern = format!("%{}%", search);
        condition = condition.add(Expr::col(Column::Name).ilike(pattern));
    }

    let finder = Users::find().filter(condition).order_by_desc(Column::CreatedAt);

    let total = finder.clone().count(&state.orm).await? as i64;

    let items = finder
        .limit(ADMIN_PAGE_SIZE as u64)
        .offset(((page - 1) * ADMIN_PAGE_SIZE) as u64)
        .all(&state.orm)
        .await?
        .into_iter()
        .map(UserView::from)
        .collect();

    let data = Paginated::new(items, "/admin/users", page, ADMIN_PAGE_SIZE, total);
    Ok(ApiResponse::success("List Data Users", data))
}

pub async fn create_user(
    state: &AppState,
    payload: CreateUserRequest,
) -> AppResult<ApiResponse<UserView>> {
    payload.validate()?;
    if email_taken(state, &payload.email, None).await? {
        return Err(email_taken_error());
    }

    let user = ActiveModel {
        id: Set(Uuid::new_v4()),
        name: Set(payload.name),
        email: Set(payload.email),
        password: Set(hash_password(&payload.password)?),
        created_at: NotSet,
        updated_at: NotSet,
    }
    .insert(&state.orm)
    .await?;

    Ok(ApiResponse::success("User created", UserView::from(user)))
}

pub async fn get_user(state: &AppState, id: Uuid) -> AppResult<ApiResponse<UserView>> {
    let user = Users::find_by_id(id)
        .one(&state.orm)
        .await?
        .ok_or_else(|| AppError::NotFound("User Not Found!".into()))?;

    Ok(ApiResponse::success("Detail Data User", UserView::from(user)))
}

pub async fn update_user(
    state: &AppState,
    id: Uuid,
    payload: UpdateUserRequest,
) -> AppResult<ApiResponse<UserView>> {
    let existing = Users::find_by_id(id)
        .one(&state.orm)
        .await?
        .ok_or_else(|| AppError::NotFound("User Not Found!".into()))?;

    payload.validate()?;
    if email_taken(state, &payload.email, Some(existing.id)).await? {
        return Err(email_taken_error());
    }

    let mut active: ActiveModel = existing.into();
    active.name = Set(payload.name);
    active.email = Set(payload.email);
    if let Some(password) = payload.password.filter(|p| !p.is_empty()) {
        if payload.password_confirmation.as_deref() != Some(password.as_str()) {
            return Err(AppError::Validation(
                [(
                    "password".to_string(),
                    vec!["The password confirmation does not match.".to_string()],
                )]
                .into(),
            ));
        }
        active.password = Set(hash_password(&password)?);
    }
    active.updated_at = Set(Utc::now().into());
    let user = active.update(&state.orm).await?;

    Ok(ApiResponse::success("User updated", UserView::from(user)))
}

pub async fn delete_user(state: &AppState, id: Uuid) -> AppResult<ApiResponse<serde_json::Value>> {
    let result = Users::delete_by_id(id).exec(&state.orm).await?;
    if result.rows_affected == 0 {
        return Err(AppError::NotFound("User Not Found!".into()));
    }

    Ok(ApiResponse {
        success: true,
        message: "User deleted".into(),
        data: None,
    })
}
