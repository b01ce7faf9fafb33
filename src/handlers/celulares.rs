// src/handlers/celulares.rs

use axum::{
    extract::{Path, State},
    http::StatusCode,
    response::IntoResponse,
    Json,
};
use serde_json::json;
use validator::Validate;

use crate::{
    common::error::AppError,
    config::AppState,
    middleware::auth::AuthenticatedUser,
    models::celular::{Celular, CelularDetalhe, CreateCelularPayload, UpdateCelularPayload},
    policies::{authorize, Action},
};

const NAO_ENCONTRADO: &str = "Celular não encontrado.";

// GET /api/celulares
#[utoipa::path(
    get,
    path = "/api/celulares",
    tag = "Celulares",
    responses(
        (status = 200, description = "Lista de celulares com consultor, equipe e números", body = [CelularDetalhe]),
        (status = 401, description = "Token ausente ou inválido")
    ),
    security(("api_jwt" = []))
)]
pub async fn list_celulares(
    State(app_state): State<AppState>,
    AuthenticatedUser(user): AuthenticatedUser,
) -> Result<Json<Vec<CelularDetalhe>>, AppError> {
    if !authorize::<Celular>(&user, Action::ViewAny, None)? {
        return Err(AppError::Forbidden);
    }

    let celulares = app_state.celular_service.listar_detalhes().await?;

    Ok(Json(celulares))
}

// POST /api/celulares
#[utoipa::path(
    post,
    path = "/api/celulares",
    tag = "Celulares",
    request_body = CreateCelularPayload,
    responses(
        (status = 201, description = "Celular criado, devolvido no envelope message/data"),
        (status = 403, description = "Ação não autorizada"),
        (status = 409, description = "IMEI já cadastrado"),
        (status = 422, description = "Dados inválidos ou vínculo inexistente")
    ),
    security(("api_jwt" = []))
)]
pub async fn create_celular(
    State(app_state): State<AppState>,
    AuthenticatedUser(user): AuthenticatedUser,
    Json(payload): Json<CreateCelularPayload>,
) -> Result<impl IntoResponse, AppError> {
    if !authorize::<Celular>(&user, Action::Create, None)? {
        return Err(AppError::Forbidden);
    }

    payload.validate().map_err(AppError::ValidationError)?;

    let celular = app_state.celular_service.criar(payload).await?;

    Ok((
        StatusCode::CREATED,
        Json(json!({ "message": "Celular criado com sucesso!", "data": celular })),
    ))
}

// GET /api/celulares/{id}
#[utoipa::path(
    get,
    path = "/api/celulares/{id}",
    tag = "Celulares",
    responses(
        (status = 200, description = "Celular com consultor, equipe e números", body = CelularDetalhe),
        (status = 403, description = "Ação não autorizada"),
        (status = 404, description = "Celular não encontrado")
    ),
    params(
        ("id" = i64, Path, description = "ID do celular")
    ),
    security(("api_jwt" = []))
)]
pub async fn get_celular(
    State(app_state): State<AppState>,
    AuthenticatedUser(user): AuthenticatedUser,
    Path(id): Path<i64>,
) -> Result<Json<CelularDetalhe>, AppError> {
    let celular = app_state
        .celular_service
        .buscar(id)
        .await?
        .ok_or(AppError::NotFound(NAO_ENCONTRADO))?;

    if !authorize(&user, Action::View, Some(&celular))? {
        return Err(AppError::Forbidden);
    }

    let detalhe = app_state.celular_service.detalhar(celular).await?;

    Ok(Json(detalhe))
}

// PUT /api/celulares/{id}
#[utoipa::path(
    put,
    path = "/api/celulares/{id}",
    tag = "Celulares",
    request_body = UpdateCelularPayload,
    responses(
        (status = 200, description = "Celular atualizado, devolvido no envelope message/data"),
        (status = 403, description = "Ação não autorizada"),
        (status = 404, description = "Celular não encontrado"),
        (status = 409, description = "IMEI já cadastrado")
    ),
    params(
        ("id" = i64, Path, description = "ID do celular")
    ),
    security(("api_jwt" = []))
)]
pub async fn update_celular(
    State(app_state): State<AppState>,
    AuthenticatedUser(user): AuthenticatedUser,
    Path(id): Path<i64>,
    Json(payload): Json<UpdateCelularPayload>,
) -> Result<Json<serde_json::Value>, AppError> {
    let celular = app_state
        .celular_service
        .buscar(id)
        .await?
        .ok_or(AppError::NotFound(NAO_ENCONTRADO))?;

    if !authorize(&user, Action::Update, Some(&celular))? {
        return Err(AppError::Forbidden);
    }

    payload.validate().map_err(AppError::ValidationError)?;

    let celular = app_state.celular_service.atualizar(celular, payload).await?;

    Ok(Json(
        json!({ "message": "Celular atualizado com sucesso!", "data": celular }),
    ))
}

// DELETE /api/celulares/{id}
#[utoipa::path(
    delete,
    path = "/api/celulares/{id}",
    tag = "Celulares",
    responses(
        (status = 200, description = "Celular removido"),
        (status = 403, description = "Ação não autorizada"),
        (status = 404, description = "Celular não encontrado"),
        (status = 409, description = "Celular possui números vinculados")
    ),
    params(
        ("id" = i64, Path, description = "ID do celular")
    ),
    security(("api_jwt" = []))
)]
pub async fn delete_celular(
    State(app_state): State<AppState>,
    AuthenticatedUser(user): AuthenticatedUser,
    Path(id): Path<i64>,
) -> Result<Json<serde_json::Value>, AppError> {
    let celular = app_state
        .celular_service
        .buscar(id)
        .await?
        .ok_or(AppError::NotFound(NAO_ENCONTRADO))?;

    if !authorize(&user, Action::Delete, Some(&celular))? {
        return Err(AppError::Forbidden);
    }

    app_state.celular_service.excluir(celular.id).await?;

    Ok(Json(json!({ "message": "Celular deletado com sucesso!" })))
}
