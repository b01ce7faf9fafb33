// src/handlers/whatsapp.rs

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
    models::whatsapp::{
        CreateWhatsappPayload, Paginado, UpdateWhatsappPayload, WhatsappDetalhe, WhatsappFiltro,
        WhatsappNumero,
    },
    policies::{authorize, Action},
};

const NAO_ENCONTRADO: &str = "Número de WhatsApp não encontrado.";

// GET /api/whatsapp
#[utoipa::path(
    get,
    path = "/api/whatsapp",
    tag = "Whatsapp",
    responses(
        (status = 200, description = "Página de números com celular, consultor e equipe", body = Paginado<WhatsappDetalhe>),
        (status = 401, description = "Token ausente ou inválido")
    ),
    params(WhatsappFiltro),
    security(("api_jwt" = []))
)]
pub async fn list_whatsapp(
    State(app_state): State<AppState>,
    AuthenticatedUser(user): AuthenticatedUser,
    Query(filtro): Query<WhatsappFiltro>,
) -> Result<Json<Paginado<WhatsappDetalhe>>, AppError> {
    if !authorize::<WhatsappNumero>(&user, Action::ViewAny, None)? {
        return Err(AppError::Forbidden);
    }

    let pagina = app_state.whatsapp_service.listar_paginado(filtro).await?;

    Ok(Json(pagina))
}

// POST /api/whatsapp
#[utoipa::path(
    post,
    path = "/api/whatsapp",
    tag = "Whatsapp",
    request_body = CreateWhatsappPayload,
    responses(
        (status = 201, description = "Número criado", body = WhatsappNumero),
        (status = 403, description = "Ação não autorizada"),
        (status = 409, description = "Número já cadastrado"),
        (status = 422, description = "Dados inválidos ou vínculo inexistente")
    ),
    security(("api_jwt" = []))
)]
pub async fn create_whatsapp(
    State(app_state): State<AppState>,
    AuthenticatedUser(user): AuthenticatedUser,
    Json(payload): Json<CreateWhatsappPayload>,
) -> Result<impl IntoResponse, AppError> {
    if !authorize::<WhatsappNumero>(&user, Action::Create, None)? {
        return Err(AppError::Forbidden);
    }

    payload.validate().map_err(AppError::ValidationError)?;

    let numero = app_state.whatsapp_service.criar(payload).await?;

    Ok((StatusCode::CREATED, Json(numero)))
}

// GET /api/whatsapp/{id}
#[utoipa::path(
    get,
    path = "/api/whatsapp/{id}",
    tag = "Whatsapp",
    responses(
        (status = 200, description = "Número com celular, consultor e equipe", body = WhatsappDetalhe),
        (status = 403, description = "Ação não autorizada"),
        (status = 404, description = "Número não encontrado")
    ),
    params(
        ("id" = i64, Path, description = "ID do número")
    ),
    security(("api_jwt" = []))
)]
pub async fn get_whatsapp(
    State(app_state): State<AppState>,
    AuthenticatedUser(user): AuthenticatedUser,
    Path(id): Path<i64>,
) -> Result<Json<WhatsappDetalhe>, AppError> {
    let numero = app_state
        .whatsapp_service
        .buscar(id)
        .await?
        .ok_or(AppError::NotFound(NAO_ENCONTRADO))?;

    if !authorize(&user, Action::View, Some(&numero))? {
        return Err(AppError::Forbidden);
    }

    let detalhe = app_state.whatsapp_service.detalhar(numero).await?;

    Ok(Json(detalhe))
}

// PUT /api/whatsapp/{id}
#[utoipa::path(
    put,
    path = "/api/whatsapp/{id}",
    tag = "Whatsapp",
    request_body = UpdateWhatsappPayload,
    responses(
        (status = 200, description = "Número atualizado", body = WhatsappNumero),
        (status = 403, description = "Ação não autorizada"),
        (status = 404, description = "Número não encontrado"),
        (status = 409, description = "Número já cadastrado")
    ),
    params(
        ("id" = i64, Path, description = "ID do número")
    ),
    security(("api_jwt" = []))
)]
pub async fn update_whatsapp(
    State(app_state): State<AppState>,
    AuthenticatedUser(user): AuthenticatedUser,
    Path(id): Path<i64>,
    Json(payload): Json<UpdateWhatsappPayload>,
) -> Result<Json<WhatsappNumero>, AppError> {
    let numero = app_state
        .whatsapp_service
        .buscar(id)
        .await?
        .ok_or(AppError::NotFound(NAO_ENCONTRADO))?;

    if !authorize(&user, Action::Update, Some(&numero))? {
        return Err(AppError::Forbidden);
    }

    payload.validate().map_err(AppError::ValidationError)?;

    let numero = app_state.whatsapp_service.atualizar(numero, payload).await?;

    Ok(Json(numero))
}

// DELETE /api/whatsapp/{id}
#[utoipa::path(
    delete,
    path = "/api/whatsapp/{id}",
    tag = "Whatsapp",
    responses(
        (status = 200, description = "Número removido"),
        (status = 403, description = "Ação não autorizada"),
        (status = 404, description = "Número não encontrado")
    ),
    params(
        ("id" = i64, Path, description = "ID do número")
    ),
    security(("api_jwt" = []))
)]
pub async fn delete_whatsapp(
    State(app_state): State<AppState>,
    AuthenticatedUser(user): AuthenticatedUser,
    Path(id): Path<i64>,
) -> Result<Json<serde_json::Value>, AppError> {
    let numero = app_state
        .whatsapp_service
        .buscar(id)
        .await?
        .ok_or(AppError::NotFound(NAO_ENCONTRADO))?;

    if !authorize(&user, Action::Delete, Some(&numero))? {
        return Err(AppError::Forbidden);
    }

    app_state.whatsapp_service.excluir(numero.id).await?;

    Ok(Json(json!({ "deleted": true })))
}
