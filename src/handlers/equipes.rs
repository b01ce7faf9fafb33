// src/handlers/equipes.rs

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
    models::equipe::{CreateEquipePayload, Equipe, EquipeDetalhe, UpdateEquipePayload},
    policies::{authorize, Action},
};

const NAO_ENCONTRADA: &str = "Equipe não encontrada.";

// GET /api/equipes
#[utoipa::path(
    get,
    path = "/api/equipes",
    tag = "Equipes",
    responses(
        (status = 200, description = "Lista de equipes com gestor, consultores e celulares", body = [EquipeDetalhe]),
        (status = 401, description = "Token ausente ou inválido")
    ),
    security(("api_jwt" = []))
)]
pub async fn list_equipes(
    State(app_state): State<AppState>,
    AuthenticatedUser(user): AuthenticatedUser,
) -> Result<Json<Vec<EquipeDetalhe>>, AppError> {
    if !authorize::<Equipe>(&user, Action::ViewAny, None)? {
        return Err(AppError::Forbidden);
    }

    let equipes = app_state.equipe_service.listar_detalhes().await?;

    Ok(Json(equipes))
}

// POST /api/equipes
#[utoipa::path(
    post,
    path = "/api/equipes",
    tag = "Equipes",
    request_body = CreateEquipePayload,
    responses(
        (status = 201, description = "Equipe criada, devolvida no envelope message/data"),
        (status = 403, description = "Ação não autorizada"),
        (status = 409, description = "Nome de equipe já cadastrado"),
        (status = 422, description = "Dados inválidos ou gestor inexistente")
    ),
    security(("api_jwt" = []))
)]
pub async fn create_equipe(
    State(app_state): State<AppState>,
    AuthenticatedUser(user): AuthenticatedUser,
    Json(payload): Json<CreateEquipePayload>,
) -> Result<impl IntoResponse, AppError> {
    if !authorize::<Equipe>(&user, Action::Create, None)? {
        return Err(AppError::Forbidden);
    }

    payload.validate().map_err(AppError::ValidationError)?;

    let equipe = app_state.equipe_service.criar(payload).await?;

    Ok((
        StatusCode::CREATED,
        Json(json!({ "message": "Equipe criada com sucesso!", "data": equipe })),
    ))
}

// GET /api/equipes/{id}
#[utoipa::path(
    get,
    path = "/api/equipes/{id}",
    tag = "Equipes",
    responses(
        (status = 200, description = "Equipe com gestor, consultores e celulares", body = EquipeDetalhe),
        (status = 403, description = "Ação não autorizada"),
        (status = 404, description = "Equipe não encontrada")
    ),
    params(
        ("id" = i64, Path, description = "ID da equipe")
    ),
    security(("api_jwt" = []))
)]
pub async fn get_equipe(
    State(app_state): State<AppState>,
    AuthenticatedUser(user): AuthenticatedUser,
    Path(id): Path<i64>,
) -> Result<Json<EquipeDetalhe>, AppError> {
    let equipe = app_state
        .equipe_service
        .buscar(id)
        .await?
        .ok_or(AppError::NotFound(NAO_ENCONTRADA))?;

    if !authorize(&user, Action::View, Some(&equipe))? {
        return Err(AppError::Forbidden);
    }

    let detalhe = app_state.equipe_service.detalhar(equipe).await?;

    Ok(Json(detalhe))
}

// PUT /api/equipes/{id}
#[utoipa::path(
    put,
    path = "/api/equipes/{id}",
    tag = "Equipes",
    request_body = UpdateEquipePayload,
    responses(
        (status = 200, description = "Equipe atualizada, devolvida no envelope message/data"),
        (status = 403, description = "Ação não autorizada"),
        (status = 404, description = "Equipe não encontrada"),
        (status = 409, description = "Nome de equipe já cadastrado")
    ),
    params(
        ("id" = i64, Path, description = "ID da equipe")
    ),
    security(("api_jwt" = []))
)]
pub async fn update_equipe(
    State(app_state): State<AppState>,
    AuthenticatedUser(user): AuthenticatedUser,
    Path(id): Path<i64>,
    Json(payload): Json<UpdateEquipePayload>,
) -> Result<Json<serde_json::Value>, AppError> {
    let equipe = app_state
        .equipe_service
        .buscar(id)
        .await?
        .ok_or(AppError::NotFound(NAO_ENCONTRADA))?;

    if !authorize(&user, Action::Update, Some(&equipe))? {
        return Err(AppError::Forbidden);
    }

    payload.validate().map_err(AppError::ValidationError)?;

    let equipe = app_state.equipe_service.atualizar(equipe, payload).await?;

    Ok(Json(
        json!({ "message": "Equipe atualizada com sucesso!", "data": equipe }),
    ))
}

// DELETE /api/equipes/{id}
#[utoipa::path(
    delete,
    path = "/api/equipes/{id}",
    tag = "Equipes",
    responses(
        (status = 200, description = "Equipe removida"),
        (status = 403, description = "Ação não autorizada"),
        (status = 404, description = "Equipe não encontrada"),
        (status = 409, description = "Equipe possui vínculos e não pode ser excluída")
    ),
    params(
        ("id" = i64, Path, description = "ID da equipe")
    ),
    security(("api_jwt" = []))
)]
pub async fn delete_equipe(
    State(app_state): State<AppState>,
    AuthenticatedUser(user): AuthenticatedUser,
    Path(id): Path<i64>,
) -> Result<Json<serde_json::Value>, AppError> {
    let equipe = app_state
        .equipe_service
        .buscar(id)
        .await?
        .ok_or(AppError::NotFound(NAO_ENCONTRADA))?;

    if !authorize(&user, Action::Delete, Some(&equipe))? {
        return Err(AppError::Forbidden);
    }

    app_state.equipe_service.excluir(equipe.id).await?;

    Ok(Json(json!({ "message": "Equipe deletada com sucesso!" })))
}
