use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use serde_json::json;
use thiserror::Error;

use crate::policies::PolicyError;

// Nosso tipo de erro, com `thiserror` para melhor ergonomia.
#[derive(Debug, Error)]
pub enum AppError {
    #[error("Erro de validação")]
    ValidationError(#[from] validator::ValidationErrors),

    #[error("E-mail já existe")]
    EmailAlreadyExists,

    #[error("Conflito: {0}")]
    Conflict(&'static str),

    #[error("Referência inválida: {0}")]
    InvalidReference(&'static str),

    #[error("Credenciais inválidas")]
    InvalidCredentials,

    #[error("Token inválido")]
    InvalidToken,

    #[error("Usuário não encontrado")]
    UserNotFound,

    #[error("{0}")]
    NotFound(&'static str),

    #[error("Ação não autorizada")]
    Forbidden,

    // Chamada errada ao motor de autorização (alvo não carregado).
    // Bug nosso, nunca culpa do cliente: vira 500.
    #[error("Erro de política: {0}")]
    PolicyError(#[from] PolicyError),

    // Variante para erros de banco de dados
    #[error("Erro de banco de dados")]
    DatabaseError(#[from] sqlx::Error),

    // Variante genérica para qualquer outro erro inesperado
    #[error("Erro interno do servidor")]
    InternalServerError(#[from] anyhow::Error),

    #[error("Erro de Bcrypt: {0}")]
    BcryptError(#[from] bcrypt::BcryptError),

    #[error("Erro de JWT: {0}")]
    JwtError(#[from] jsonwebtoken::errors::Error),
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        let (status, message) = match self {
            // Devolve cada campo reprovado com as mensagens, no formato
            // que o painel já espera.
            AppError::ValidationError(errors) => {
                let mut details = std::collections::HashMap::new();
                for (field, field_errors) in errors.field_errors() {
                    let messages: Vec<String> = field_errors
                        .iter()
                        .filter_map(|e| e.message.as_ref().map(|m| m.to_string()))
                        .collect();
                    details.insert(field.to_string(), messages);
                }
                let body = Json(json!({
                    "message": "Os dados fornecidos são inválidos.",
                    "errors": details,
                }));
                return (StatusCode::UNPROCESSABLE_ENTITY, body).into_response();
            }
            AppError::EmailAlreadyExists => {
                (StatusCode::CONFLICT, "Este e-mail já está em uso.".to_string())
            }
            AppError::Conflict(msg) => (StatusCode::CONFLICT, msg.to_string()),
            AppError::InvalidReference(msg) => {
                (StatusCode::UNPROCESSABLE_ENTITY, msg.to_string())
            }
            AppError::InvalidCredentials => {
                (StatusCode::UNAUTHORIZED, "E-mail ou senha inválidos.".to_string())
            }
            AppError::InvalidToken => (
                StatusCode::UNAUTHORIZED,
                "Token de autenticação inválido ou ausente.".to_string(),
            ),
            AppError::UserNotFound => {
                (StatusCode::NOT_FOUND, "Usuário não encontrado.".to_string())
            }
            AppError::NotFound(msg) => (StatusCode::NOT_FOUND, msg.to_string()),
            AppError::Forbidden => {
                (StatusCode::FORBIDDEN, "Esta ação não é autorizada.".to_string())
            }

            // Todos os outros (PolicyError, DatabaseError, etc.) viram 500.
            // O `tracing` loga a mensagem detalhada que `thiserror` nos deu.
            ref e => {
                tracing::error!("Erro Interno do Servidor: {}", e);
                (
                    StatusCode::INTERNAL_SERVER_ERROR,
                    "Ocorreu um erro inesperado.".to_string(),
                )
            }
        };

        // Resposta padrão para erros simples que só têm uma mensagem.
        let body = Json(json!({ "message": message }));
        (status, body).into_response()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::policies::{Action, PolicyError};

    fn status_de(err: AppError) -> StatusCode {
        err.into_response().status()
    }

    #[test]
    fn mapeamento_de_status_por_variante() {
        assert_eq!(status_de(AppError::Forbidden), StatusCode::FORBIDDEN);
        assert_eq!(
            status_de(AppError::NotFound("Celular não encontrado.")),
            StatusCode::NOT_FOUND
        );
        assert_eq!(status_de(AppError::UserNotFound), StatusCode::NOT_FOUND);
        assert_eq!(status_de(AppError::EmailAlreadyExists), StatusCode::CONFLICT);
        assert_eq!(
            status_de(AppError::Conflict("Registro em uso.")),
            StatusCode::CONFLICT
        );
        assert_eq!(
            status_de(AppError::InvalidReference("Consultor inexistente.")),
            StatusCode::UNPROCESSABLE_ENTITY
        );
        assert_eq!(status_de(AppError::InvalidCredentials), StatusCode::UNAUTHORIZED);
        assert_eq!(status_de(AppError::InvalidToken), StatusCode::UNAUTHORIZED);
    }

    #[test]
    fn erro_de_politica_e_bug_interno() {
        let err = AppError::PolicyError(PolicyError::TargetRequired(Action::Update));
        assert_eq!(status_de(err), StatusCode::INTERNAL_SERVER_ERROR);
    }

    #[test]
    fn validacao_retorna_os_campos_reprovados() {
        use validator::Validate;

        #[derive(Validate)]
        struct Probe {
            #[validate(length(min = 6, message = "A senha deve ter no mínimo 6 caracteres."))]
            password: String,
        }

        let probe = Probe {
            password: "123".into(),
        };
        let err = AppError::ValidationError(probe.validate().unwrap_err());
        let resposta = err.into_response();
        assert_eq!(resposta.status(), StatusCode::UNPROCESSABLE_ENTITY);
    }
}
