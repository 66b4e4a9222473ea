use uuid::Uuid;

use crate::dto::catalog::{
    CategoryList, ColorList, CreateCategoryRequest, CreateColorRequest, CreateSizeRequest,
    SizeList, UpdateCategoryRequest, UpdateColorRequest, UpdateSizeRequest,
};
use crate::{
    audit::log_audit,
    entity::{categories, colors, sizes},
    error::{AppError, AppResult},
    middleware::auth::{AuthUser, ensure_admin},
    models::{Category, ColorOption, SizeOption},
    response::{ApiResponse, Meta},
    routes::params::Pagination,
    state::AppState,
};
use sea_orm::ActiveValue::NotSet;
use sea_orm::{ActiveModelTrait, EntityTrait, PaginatorTrait, QueryOrder, QuerySelect, Set};

pub async fn list_categories(
    state: &AppState,
    user: &AuthUser,
    pagination: Pagination,
) -> AppResult<ApiResponse<CategoryList>> {
    ensure_admin(user)?;
    let (page, limit, offset) = pagination.normalize();
    let finder = categories::Entity::find().order_by_asc(categories::Column::Slug);

    let total = finder.clone().count(&state.orm).await? as i64;
    let items = finder
        .limit(limit as u64)
        .offset(offset as u64)
        .all(&state.orm)
        .await?
        .into_iter()
        .map(Category::from)
        .collect();

    let meta = Meta::new(page, limit, total);
    Ok(ApiResponse::success("Categories", CategoryList { items }, Some(meta)))
}

pub async fn create_category(
    state: &AppState,
    user: &AuthUser,
    payload: CreateCategoryRequest,
) -> AppResult<ApiResponse<Category>> {
    ensure_admin(user)?;
    let active = categories::ActiveModel {
        id: Set(Uuid::new_v4()),
        name: Set(payload.name),
        slug: Set(payload.slug),
        is_active: Set(Some(true)),
        created_at: NotSet,
    };
    let category = active.insert(&state.orm).await?;

    audit(state, user, "category_create", "categories", category.id).await;

    Ok(ApiResponse::success(
        "Category created",
        Category::from(category),
        Some(Meta::empty()),
    ))
}

pub async fn update_category(
    state: &AppState,
    user: &AuthUser,
    id: Uuid,
    payload: UpdateCategoryRequest,
) -> AppResult<ApiResponse<Category>> {
    ensure_admin(user)?;
    let existing = categories::Entity::find_by_id(id).one(&state.orm).await?;
    let existing = match existing {
        Some(c) => c,
        None => return Err(AppError::NotFound),
    };

    let mut active: categories::ActiveModel = existing.into();
    if let Some(name) = payload.name {
        active.name = Set(name);
    }
    if let Some(slug) = payload.slug {
        active.slug = Set(slug);
    }
    if let Some(is_active) = payload.is_active {
        active.is_active = Set(Some(is_active));
    }
    let category = active.update(&state.orm).await?;

    audit(state, user, "category_update", "categories", category.id).await;

    Ok(ApiResponse::success(
        "Updated",
        Category::from(category),
        Some(Meta::empty()),
    ))
}

pub async fn delete_category(
    state: &AppState,
    user: &AuthUser,
    id: Uuid,
) -> AppResult<ApiResponse<serde_json::Value>> {
    ensure_admin(user)?;
    let existing = categories::Entity::find_by_id(id).one(&state.orm).await?;
    let existing = match existing {
        Some(c) => c,
        None => return Err(AppError::NotFound),
    };

    let mut active: categories::ActiveModel = existing.into();
    active.is_active = Set(Some(false));
    active.update(&state.orm).await?;

    audit(state, user, "category_delete", "categories", id).await;

    Ok(ApiResponse::success(
        "Deleted",
        serde_json::json!({}),
        Some(Meta::empty()),
    ))
}

pub async fn list_sizes(
    state: &AppState,
    user: &AuthUser,
    pagination: Pagination,
) -> AppResult<ApiResponse<SizeList>> {
    ensure_admin(user)?;
    let (page, limit, offset) = pagination.normalize();
    let finder = sizes::Entity::find().order_by_asc(sizes::Column::Value);

    let total = finder.clone().count(&state.orm).await? as i64;
    let items = finder
        .limit(limit as u64)
        .offset(offset as u64)
        .all(&state.orm)
        .await?
        .into_iter()
        .map(SizeOption::from)
        .collect();

    let meta = Meta::new(page, limit, total);
    Ok(ApiResponse::success("Sizes", SizeList { items }, Some(meta)))
}

pub async fn create_size(
    state: &AppState,
    user: &AuthUser,
    payload: CreateSizeRequest,
) -> AppResult<ApiResponse<SizeOption>> {
    ensure_admin(user)?;
    let active = sizes::ActiveModel {
        id: Set(Uuid::new_v4()),
        value: Set(payload.value),
        is_active: Set(Some(true)),
        created_at: NotSet,
    };
    let size = active.insert(&state.orm).await?;

    audit(state, user, "size_create", "sizes", size.id).await;

    Ok(ApiResponse::success(
        "Size created",
        SizeOption::from(size),
        Some(Meta::empty()),
    ))
}

pub async fn update_size(
    state: &AppState,
    user: &AuthUser,
    id: Uuid,
    payload: UpdateSizeRequest,
) -> AppResult<ApiResponse<SizeOption>> {
    ensure_admin(user)?;
    let existing = sizes::Entity::find_by_id(id).one(&state.orm).await?;
    let existing = match existing {
        Some(s) => s,
        None => return Err(AppError::NotFound),
    };

    let mut active: sizes::ActiveModel = existing.into();
    if let Some(value) = payload.value {
        active.value = Set(value);
    }
    if let Some(is_active) = payload.is_active {
        active.is_active = Set(Some(is_active));
    }
    let size = active.update(&state.orm).await?;

    audit(state, user, "size_update", "sizes", size.id).await;

    Ok(ApiResponse::success(
        "Updated",
        SizeOption::from(size),
        Some(Meta::empty()),
    ))
}

pub async fn delete_size(
    state: &AppState,
    user: &AuthUser,
    id: Uuid,
) -> AppResult<ApiResponse<serde_json::Value>> {
    ensure_admin(user)?;
    let existing = sizes::Entity::find_by_id(id).one(&state.orm).await?;
    let existing = match existing {
        Some(s) => s,
        None => return Err(AppError::NotFound),
    };

    let mut active: sizes::ActiveModel = existing.into();
    active.is_active = Set(Some(false));
    active.update(&state.orm).await?;

    audit(state, user, "size_delete", "sizes", id).await;

    Ok(ApiResponse::success(
        "Deleted",
        serde_json::json!({}),
        Some(Meta::empty()),
    ))
}

pub async fn list_colors(
    state: &AppState,
    user: &AuthUser,
    pagination: Pagination,
) -> AppResult<ApiResponse<ColorList>> {
    ensure_admin(user)?;
    let (page, limit, offset) = pagination.normalize();
    let finder = colors::Entity::find().order_by_asc(colors::Column::Name);

    let total = finder.clone().count(&state.orm).await? as i64;
    let items = finder
        .limit(limit as u64)
        .offset(offset as u64)
        .all(&state.orm)
        .await?
        .into_iter()
        .map(ColorOption::from)
        .collect();

    let meta = Meta::new(page, limit, total);
    Ok(ApiResponse::success("Colors", ColorList { items }, Some(meta)))
}

pub async fn create_color(
    state: &AppState,
    user: &AuthUser,
    payload: CreateColorRequest,
) -> AppResult<ApiResponse<ColorOption>> {
    ensure_admin(user)?;
    let active = colors::ActiveModel {
        id: Set(Uuid::new_v4()),
        name: Set(payload.name),
        code: Set(payload.code),
        is_active: Set(Some(true)),
        created_at: NotSet,
    };
    let color = active.insert(&state.orm).await?;

    audit(state, user, "color_create", "colors", color.id).await;

    Ok(ApiResponse::success(
        "Color created",
        ColorOption::from(color),
        Some(Meta::empty()),
    ))
}

pub async fn update_color(
    state: &AppState,
    user: &AuthUser,
    id: Uuid,
    payload: UpdateColorRequest,
) -> AppResult<ApiResponse<ColorOption>> {
    ensure_admin(user)?;
    let existing = colors::Entity::find_by_id(id).one(&state.orm).await?;
    let existing = match existing {
        Some(c) => c,
        None => return Err(AppError::NotFound),
    };

    let mut active: colors::ActiveModel = existing.into();
    if let Some(name) = payload.name {
        active.name = Set(name);
    }
    if let Some(code) = payload.code {
        active.code = Set(code);
    }
    if let Some(is_active) = payload.is_active {
        active.is_active = Set(Some(is_active));
    }
    let color = active.update(&state.orm).await?;

    audit(state, user, "color_update", "colors", color.id).await;

    Ok(ApiResponse::success(
        "Updated",
        ColorOption::from(color),
        Some(Meta::empty()),
    ))
}

pub async fn delete_color(
    state: &AppState,
    user: &AuthUser,
    id: Uuid,
) -> AppResult<ApiResponse<serde_json::Value>> {
    ensure_admin(user)?;
    let existing = colors::Entity::find_by_id(id).one(&state.orm).await?;
    let existing = match existing {
        Some(c) => c,
        None => return Err(AppError::NotFound),
    };

    let mut active: colors::ActiveModel = existing.into();
    active.is_active = Set(Some(false));
    active.update(&state.orm).await?;

    audit(state, user, "color_delete", "colors", id).await;

    Ok(ApiResponse::success(
        "Deleted",
        serde_json::json!({}),
        Some(Meta::empty()),
    ))
}

async fn audit(state: &AppState, user: &AuthUser, action: &str, resource: &str, id: Uuid) {
    if let Err(err) = log_audit(
        &state.pool,
        Some(user.user_id),
        action,
        Some(resource),
        Some(serde_json::json!({ "id": id })),
    )
    .await
    {
        tracing::warn!(error = %err, "audit log failed");
    }
}
