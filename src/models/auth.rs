// src/models/auth.rs

use serde::{Deserialize, Serialize};
use utoipa::ToSchema;
use validator::Validate;

use crate::models::user::{Cargo, User};

// Dados para registro de um novo usuário
#[derive(Debug, Deserialize, Validate, ToSchema)]
pub struct RegisterUserPayload {
    #[validate(length(min = 1, max = 100, message = "O nome deve ter entre 1 e 100 caracteres."))]
    pub name: String,
    #[validate(email(message = "O e-mail fornecido é inválido."))]
    pub email: String,
    #[validate(length(min = 6, message = "A senha deve ter no mínimo 6 caracteres."))]
    pub password: String,
    #[validate(must_match(other = "password", message = "A confirmação de senha não confere."))]
    pub password_confirmation: String,
    // Quando ausente, o usuário entra como consultor.
    pub cargo: Option<Cargo>,
    pub equipe_id: Option<i64>,
}

// Dados para login
#[derive(Debug, Deserialize, Validate, ToSchema)]
pub struct LoginUserPayload {
    #[validate(email(message = "O e-mail fornecido é inválido."))]
    pub email: String,
    #[validate(length(min = 6, message = "A senha deve ter no mínimo 6 caracteres."))]
    pub password: String,
}

// Resposta de autenticação com o usuário e o token
#[derive(Debug, Serialize, ToSchema)]
pub struct AuthResponse {
    pub user: User,
    pub token: String,
}

// Estrutura de dados ("claims") dentro do JWT
#[derive(Debug, Serialize, Deserialize)]
pub struct Claims {
    pub sub: i64,   // Subject (ID do usuário)
    pub exp: usize, // Expiration time (quando o token expira)
    pub iat: usize, // Issued At (quando o token foi criado)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn confirmacao_de_senha_diferente_reprova() {
        let payload = RegisterUserPayload {
            name: "Ana Costa".into(),
            email: "ana.costa@famartcorp.com".into(),
            password: "123456".into(),
            password_confirmation: "654321".into(),
            cargo: None,
            equipe_id: None,
        };
        let erros = payload.validate().unwrap_err();
        assert!(erros.field_errors().contains_key("password_confirmation"));
    }

    #[test]
    fn registro_valido_passa() {
        let payload = RegisterUserPayload {
            name: "Ana Costa".into(),
            email: "ana.costa@famartcorp.com".into(),
            password: "123456".into(),
            password_confirmation: "123456".into(),
            cargo: Some(Cargo::Consultor),
            equipe_id: Some(2),
        };
        assert!(payload.validate().is_ok());
    }
}
