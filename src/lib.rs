// src/lib.rs

pub mod common;
pub mod config;
pub mod db;
pub mod docs;
pub mod handlers;
pub mod middleware;
pub mod models;
pub mod policies;
pub mod services;

use axum::{
    middleware as axum_middleware,
    routing::{get, post},
    Router,
};
use utoipa::OpenApi;
use utoipa_swagger_ui::SwaggerUi;

use crate::config::AppState;
use crate::docs::ApiDoc;
use crate::middleware::auth::auth_guard;

// Monta o router completo; separado do main para os testes de integração
// conseguirem disparar requisições sem subir um servidor.
pub fn app(app_state: AppState) -> Router {
    // Rotas de autenticação (públicas)
    let auth_public = Router::new()
        .route("/register", post(handlers::auth::register))
        .route("/login", post(handlers::auth::login));

    // Rota do usuário autenticado (protegida pelo middleware)
    let auth_protected = Router::new()
        .route("/me", get(handlers::auth::get_me))
        .layer(axum_middleware::from_fn_with_state(
            app_state.clone(),
            auth_guard,
        ));

    let celular_routes = Router::new()
        .route(
            "/",
            get(handlers::celulares::list_celulares).post(handlers::celulares::create_celular),
        )
        .route(
            "/{id}",
            get(handlers::celulares::get_celular)
                .put(handlers::celulares::update_celular)
                .delete(handlers::celulares::delete_celular),
        )
        .layer(axum_middleware::from_fn_with_state(
            app_state.clone(),
            auth_guard,
        ));

    let equipe_routes = Router::new()
        .route(
            "/",
            get(handlers::equipes::list_equipes).post(handlers::equipes::create_equipe),
        )
        .route(
            "/{id}",
            get(handlers::equipes::get_equipe)
                .put(handlers::equipes::update_equipe)
                .delete(handlers::equipes::delete_equipe),
        )
        .layer(axum_middleware::from_fn_with_state(
            app_state.clone(),
            auth_guard,
        ));

    let whatsapp_routes = Router::new()
        .route(
            "/",
            get(handlers::whatsapp::list_whatsapp).post(handlers::whatsapp::create_whatsapp),
        )
        .route(
            "/{id}",
            get(handlers::whatsapp::get_whatsapp)
                .put(handlers::whatsapp::update_whatsapp)
                .delete(handlers::whatsapp::delete_whatsapp),
        )
        .layer(axum_middleware::from_fn_with_state(
            app_state.clone(),
            auth_guard,
        ));

    let consultor_routes = Router::new()
        .route(
            "/",
            get(handlers::consultores::list_consultores)
                .post(handlers::consultores::create_consultor),
        )
        .route(
            "/{id}",
            get(handlers::consultores::get_consultor)
                .put(handlers::consultores::update_consultor)
                .delete(handlers::consultores::delete_consultor),
        )
        .layer(axum_middleware::from_fn_with_state(
            app_state.clone(),
            auth_guard,
        ));

    // Combina tudo no router principal
    Router::new()
        .route("/api/health", get(|| async { "OK" }))
        .nest("/api/auth", auth_public.merge(auth_protected))
        .nest("/api/celulares", celular_routes)
        .nest("/api/equipes", equipe_routes)
        .nest("/api/whatsapp", whatsapp_routes)
        .nest("/api/consultores", consultor_routes)
        .merge(SwaggerUi::new("/swagger-ui").url("/api-docs/openapi.json", ApiDoc::openapi()))
        .with_state(app_state)
}
