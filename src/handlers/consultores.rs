// src/handlers/consultores.rs

use axum::{
    extract::{Path, Query, State},
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
    models::user::{
        ConsultorComEquipe, ConsultorDetalhe, ConsultorFiltro, CreateConsultorPayload,
        UpdateConsultorPayload, User,
    },
    policies::{authorize, Action},
};

const NAO_ENCONTRADO: &str = "Consultor não encontrado";

// GET /api/consultores
#[utoipa::path(
    get,
    path = "/api/consultores",
    tag = "Consultores",
    responses(
        (status = 200, description = "Lista de consultores com a equipe de cada um", body = [ConsultorComEquipe]),
        (status = 401, description = "Token ausente ou inválido")
    ),
    params(ConsultorFiltro),
    security(("api_jwt" = []))
)]
pub async fn list_consultores(
    State(app_state): State<AppState>,
    AuthenticatedUser(user): AuthenticatedUser,
    Query(filtro): Query<ConsultorFiltro>,
) -> Result<Json<Vec<ConsultorComEquipe>>, AppError> {
    if !authorize::<User>(&user, Action::ViewAny, None)? {
        return Err(AppError::Forbidden);
    }

    let consultores = app_state
        .consultor_service
        .listar(filtro.equipe_id)
        .await?;

    Ok(Json(consultores))
}

// POST /api/consultores
#[utoipa::path(
    post,
    path = "/api/consultores",
    tag = "Consultores",
    request_body = CreateConsultorPayload,
    responses(
        (status = 201, description = "Consultor criado, devolvido no envelope message/data"),
        (status = 403, description = "Ação não autorizada"),
        (status = 409, description = "E-mail já cadastrado"),
        (status = 422, description = "Dados inválidos ou equipe inexistente")
    ),
    security(("api_jwt" = []))
)]
pub async fn create_consultor(
    State(app_state): State<AppState>,
    AuthenticatedUser(user): AuthenticatedUser,
    Json(payload): Json<CreateConsultorPayload>,
) -> Result<impl IntoResponse, AppError> {
    if !authorize::<User>(&user, Action::Create, None)? {
        return Err(AppError::Forbidden);
    }

    payload.validate().map_err(AppError::ValidationError)?;

    let consultor = app_state.consultor_service.criar(payload).await?;

    Ok((
        StatusCode::CREATED,
        Json(json!({ "message": "Consultor criado com sucesso", "data": consultor })),
    ))
}

// GET /api/consultores/{id}
#[utoipa::path(
    get,
    path = "/api/consultores/{id}",
    tag = "Consultores",
    responses(
        (status = 200, description = "Consultor com equipe, celulares e números", body = ConsultorDetalhe),
        (status = 403, description = "Ação não autorizada"),
        (status = 404, description = "Consultor não encontrado")
    ),
    params(
        ("id" = i64, Path, description = "ID do consultor")
    ),
    security(("api_jwt" = []))
)]
pub async fn get_consultor(
    State(app_state): State<AppState>,
    AuthenticatedUser(user): AuthenticatedUser,
    Path(id): Path<i64>,
) -> Result<Json<ConsultorDetalhe>, AppError> {
    let consultor = app_state
        .consultor_service
        .buscar(id)
        .await?
        .ok_or(AppError::NotFound(NAO_ENCONTRADO))?;

    if !authorize(&user, Action::View, Some(&consultor))? {
        return Err(AppError::Forbidden);
    }

    let detalhe = app_state.consultor_service.detalhar(consultor).await?;

    Ok(Json(detalhe))
}

// PUT /api/consultores/{id}
#[utoipa::path(
    put,
    path = "/api/consultores/{id}",
    tag = "Consultores",
    request_body = UpdateConsultorPayload,
    responses(
        (status = 200, description = "Consultor atualizado, devolvido no envelope message/data"),
        (status = 403, description = "Ação não autorizada"),
        (status = 404, description = "Consultor não encontrado"),
        (status = 409, description = "E-mail já cadastrado")
    ),
    params(
        ("id" = i64, Path, description = "ID do consultor")
    ),
    security(("api_jwt" = []))
)]
pub async fn update_consultor(
    State(app_state): State<AppState>,
    AuthenticatedUser(user): AuthenticatedUser,
    Path(id): Path<i64>,
    Json(payload): Json<UpdateConsultorPayload>,
) -> Result<Json<serde_json::Value>, AppError> {
    let consultor = app_state
        .consultor_service
        .buscar(id)
        .await?
        .ok_or(AppError::NotFound(NAO_ENCONTRADO))?;

    if !authorize(&user, Action::Update, Some(&consultor))? {
        return Err(AppError::Forbidden);
    }

    payload.validate().map_err(AppError::ValidationError)?;

    let consultor = app_state
        .consultor_service
        .atualizar(consultor, payload)
        .await?;

    Ok(Json(
        json!({ "message": "Consultor atualizado com sucesso", "data": consultor }),
    ))
}

// DELETE /api/consultores/{id}
#[utoipa::path(
    delete,
    path = "/api/consultores/{id}",
    tag = "Consultores",
    responses(
        (status = 200, description = "Consultor removido"),
        (status = 403, description = "Ação não autorizada"),
        (status = 404, description = "Consultor não encontrado"),
        (status = 409, description = "Consultor possui vínculos e não pode ser excluído")
    ),
    params(
        ("id" = i64, Path, description = "ID do consultor")
    ),
    security(("api_jwt" = []))
)]
pub async fn delete_consultor(
    State(app_state): State<AppState>,
    AuthenticatedUser(user): AuthenticatedUser,
    Path(id): Path<i64>,
) -> Result<Json<serde_json::Value>, AppError> {
    let consultor = app_state
        .consultor_service
        .buscar(id)
        .await?
        .ok_or(AppError::NotFound(NAO_ENCONTRADO))?;

    if !authorize(&user, Action::Delete, Some(&consultor))? {
        return Err(AppError::Forbidden);
    }

    app_state.consultor_service.excluir(consultor.id).await?;

    Ok(Json(json!({ "message": "Consultor deletado com sucesso" })))
}
