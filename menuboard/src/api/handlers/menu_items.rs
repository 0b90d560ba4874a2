use crate::api::models::menu_items::{MenuItemCreate, MenuItemResponse, MenuItemUpdate};
use crate::auth::AdminAccess;
use crate::errors::{Error, Result};
use crate::{AppState, types::MenuItemId};
use axum::{
    Json,
    extract::{Path, State},
    http::StatusCode,
};
use tracing::{info, instrument};

fn not_found(id: MenuItemId) -> Error {
    Error::NotFound {
        resource: "Menu item".to_string(),
        id: id.to_string(),
    }
}

#[utoipa::path(
    get,
    path = "/menu-items",
    tag = "menu_items",
    summary = "List menu items",
    description = "Every menu item, in the order they were added (the order the menu page shows them).",
    responses(
        (status = 200, description = "List of menu items", body = Vec<MenuItemResponse>),
        (status = 401, description = "Missing or invalid admin API key"),
        (status = 500, description = "Internal server error")
    ),
    security(("BearerAuth" = []))
)]
#[instrument(skip_all)]
pub async fn list_menu_items(State(state): State<AppState>, _: AdminAccess) -> Result<Json<Vec<MenuItemResponse>>> {
    let items = state.store.list_all().await?;
    Ok(Json(items.into_iter().map(MenuItemResponse::from).collect()))
}

#[utoipa::path(
    post,
    path = "/menu-items",
    tag = "menu_items",
    summary = "Create menu item",
    request_body = MenuItemCreate,
    responses(
        (status = 201, description = "Menu item created", body = MenuItemResponse),
        (status = 400, description = "Invalid request (label longer than 255 characters)"),
        (status = 401, description = "Missing or invalid admin API key"),
        (status = 500, description = "Internal server error")
    ),
    security(("BearerAuth" = []))
)]
#[instrument(skip_all)]
pub async fn create_menu_item(
    State(state): State<AppState>,
    _: AdminAccess,
    Json(create): Json<MenuItemCreate>,
) -> Result<(StatusCode, Json<MenuItemResponse>)> {
    create.validate()?;

    let item = state.store.insert(&create.label, create.value).await?;
    info!(id = item.id, "Created menu item");

    Ok((StatusCode::CREATED, Json(MenuItemResponse::from(item))))
}

#[utoipa::path(
    get,
    path = "/menu-items/{id}",
    tag = "menu_items",
    summary = "Get menu item",
    params(("id" = i64, Path, description = "Menu item ID")),
    responses(
        (status = 200, description = "Menu item", body = MenuItemResponse),
        (status = 401, description = "Missing or invalid admin API key"),
        (status = 404, description = "Menu item not found"),
        (status = 500, description = "Internal server error")
    ),
    security(("BearerAuth" = []))
)]
#[instrument(skip_all)]
pub async fn get_menu_item(
    State(state): State<AppState>,
    Path(id): Path<MenuItemId>,
    _: AdminAccess,
) -> Result<Json<MenuItemResponse>> {
    let item = state.store.get(id).await?.ok_or_else(|| not_found(id))?;
    Ok(Json(item.into()))
}

#[utoipa::path(
    patch,
    path = "/menu-items/{id}",
    tag = "menu_items",
    summary = "Update menu item",
    description = "Partially update a menu item. Omitted fields keep their current values.",
    params(("id" = i64, Path, description = "Menu item ID")),
    request_body = MenuItemUpdate,
    responses(
        (status = 200, description = "Menu item updated", body = MenuItemResponse),
        (status = 400, description = "Invalid request (label longer than 255 characters)"),
        (status = 401, description = "Missing or invalid admin API key"),
        (status = 404, description = "Menu item not found"),
        (status = 500, description = "Internal server error")
    ),
    security(("BearerAuth" = []))
)]
#[instrument(skip_all)]
pub async fn update_menu_item(
    State(state): State<AppState>,
    Path(id): Path<MenuItemId>,
    _: AdminAccess,
    Json(update): Json<MenuItemUpdate>,
) -> Result<Json<MenuItemResponse>> {
    update.validate()?;

    let item = state.store.update(id, &update.into()).await?.ok_or_else(|| not_found(id))?;
    info!(id, "Updated menu item");

    Ok(Json(item.into()))
}

#[utoipa::path(
    delete,
    path = "/menu-items/{id}",
    tag = "menu_items",
    summary = "Delete menu item",
    params(("id" = i64, Path, description = "Menu item ID")),
    responses(
        (status = 204, description = "Menu item deleted"),
        (status = 401, description = "Missing or invalid admin API key"),
        (status = 404, description = "Menu item not found"),
        (status = 500, description = "Internal server error")
    ),
    security(("BearerAuth" = []))
)]
#[instrument(skip_all)]
pub async fn delete_menu_item(State(state): State<AppState>, Path(id): Path<MenuItemId>, _: AdminAccess) -> Result<StatusCode> {
    if !state.store.delete(id).await? {
        return Err(not_found(id));
    }
    info!(id, "Deleted menu item");

    Ok(StatusCode::NO_CONTENT)
}
