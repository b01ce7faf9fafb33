// src/docs.rs

use utoipa::OpenApi;
use utoipa::openapi::security::{Http, HttpAuthScheme, SecurityScheme};
use crate::handlers;
use crate::models;

#[derive(OpenApi)]
#[openapi(
    paths(
        // --- Auth ---
        handlers::auth::register,
        handlers::auth::login,
        handlers::auth::get_me,

        // --- Celulares ---
        handlers::celulares::list_celulares,
        handlers::celulares::create_celular,
        handlers::celulares::get_celular,
        handlers::celulares::update_celular,
        handlers::celulares::delete_celular,

        // --- Equipes ---
        handlers::equipes::list_equipes,
        handlers::equipes::create_equipe,
        handlers::equipes::get_equipe,
        handlers::equipes::update_equipe,
        handlers::equipes::delete_equipe,

        // --- Whatsapp ---
        handlers::whatsapp::list_whatsapp,
        handlers::whatsapp::create_whatsapp,
        handlers::whatsapp::get_whatsapp,
        handlers::whatsapp::update_whatsapp,
        handlers::whatsapp::delete_whatsapp,

        // --- Consultores ---
        handlers::consultores::list_consultores,
        handlers::consultores::create_consultor,
        handlers::consultores::get_consultor,
        handlers::consultores::update_consultor,
        handlers::consultores::delete_consultor,
    ),
    components(
        schemas(
            // --- Auth ---
            models::auth::RegisterUserPayload,
            models::auth::LoginUserPayload,
            models::auth::AuthResponse,

            // --- Usuários ---
            models::user::Cargo,
            models::user::User,
            models::user::ConsultorComEquipe,
            models::user::ConsultorDetalhe,
            models::user::CreateConsultorPayload,
            models::user::UpdateConsultorPayload,

            // --- Equipes ---
            models::equipe::Equipe,
            models::equipe::EquipeDetalhe,
            models::equipe::CreateEquipePayload,
            models::equipe::UpdateEquipePayload,

            // --- Celulares ---
            models::celular::Celular,
            models::celular::CelularDetalhe,
            models::celular::CreateCelularPayload,
            models::celular::UpdateCelularPayload,

            // --- Whatsapp ---
            models::whatsapp::StatusWhatsapp,
            models::whatsapp::WhatsappNumero,
            models::whatsapp::WhatsappDetalhe,
            models::whatsapp::CreateWhatsappPayload,
            models::whatsapp::UpdateWhatsappPayload,
            models::whatsapp::Paginado<models::whatsapp::WhatsappDetalhe>,
        )
    ),
    tags(
        (name = "Auth", description = "Autenticação e Registro"),
        (name = "Celulares", description = "Gestão dos Celulares Corporativos"),
        (name = "Equipes", description = "Gestão das Equipes de Vendas"),
        (name = "Whatsapp", description = "Gestão dos Números de WhatsApp"),
        (name = "Consultores", description = "Gestão dos Consultores")
    ),
    modifiers(&SecurityAddon)
)]
pub struct ApiDoc;

struct SecurityAddon;

impl utoipa::Modify for SecurityAddon {
    fn modify(&self, openapi: &mut utoipa::openapi::OpenApi) {
        let components = openapi.components.get_or_insert_with(Default::default);
        components.add_security_scheme(
            "api_jwt",
            SecurityScheme::Http(
                Http::new(HttpAuthScheme::Bearer)
            ),
        );
    }
}
