use axum::Json;
use axum::extract::rejection::{JsonRejection, QueryRejection};
use axum::extract::{Path, Query, State};
use axum::http::StatusCode;
use cndr_core::{ApiResponse, NewUser, Page, PaginationParams, User, UserId};

use crate::app::AppState;
use crate::error::ServerError;

const USER_NOT_FOUND: &str = "User not found";

pub async fn get_user(
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> Result<Json<ApiResponse<User>>, ServerError> {
    let id: UserId = id
        .parse()
        .map_err(|_| ServerError::NotFound(USER_NOT_FOUND.into()))?;

    let user = state
        .users
        .get(&id)
        .await
        .map_err(|e| ServerError::internal(e, state.node_env))?
        .ok_or_else(|| ServerError::NotFound(USER_NOT_FOUND.into()))?;

    Ok(Json(ApiResponse::ok(user)))
}

pub async fn list_users(
    State(state): State<AppState>,
    params: Result<Query<PaginationParams>, QueryRejection>,
) -> Result<Json<ApiResponse<Page<User>>>, ServerError> {
    let Query(params) = params.map_err(|e| ServerError::BadRequest(e.body_text()))?;

    if params.page < 1 || params.limit < 1 {
        return Err(ServerError::BadRequest(
            "page and limit must be at least 1".into(),
        ));
    }

    let page = state
        .users
        .list(params)
        .await
        .map_err(|e| ServerError::internal(e, state.node_env))?;

    Ok(Json(ApiResponse::ok(page)))
}

pub async fn create_user(
    State(state): State<AppState>,
    payload: Result<Json<NewUser>, JsonRejection>,
) -> Result<(StatusCode, Json<ApiResponse<User>>), ServerError> {
    let Json(new_user) = payload.map_err(|e| ServerError::BadRequest(e.body_text()))?;

    if new_user.name.trim().is_empty() || new_user.email.trim().is_empty() {
        return Err(ServerError::BadRequest("name and email are required".into()));
    }

    let user = state
        .users
        .create(new_user)
        .await
        .map_err(|e| ServerError::internal(e, state.node_env))?;

    Ok((StatusCode::CREATED, Json(ApiResponse::ok(user))))
}
