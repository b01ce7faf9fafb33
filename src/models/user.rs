// src/models/user.rs

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use utoipa::{IntoParams, ToSchema};
use validator::Validate;

use crate::models::celular::Celular;
use crate::models::equipe::Equipe;
use crate::models::whatsapp::WhatsappNumero;

// Cargo do usuário. Enum fechado nos dois lados: o banco usa o tipo
// `cargo` e o JSON só aceita exatamente estes três valores.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, sqlx::Type, ToSchema)]
#[sqlx(type_name = "cargo", rename_all = "lowercase")]
#[serde(rename_all = "lowercase")]
pub enum Cargo {
    Consultor,
    Gestor,
    Master,
}

// Representa um usuário vindo do banco de dados
#[derive(Debug, Clone, Serialize, sqlx::FromRow, ToSchema)]
pub struct User {
    pub id: i64,
    pub name: String,
    pub email: String,

    #[serde(skip_serializing)] // IMPORTANTE para segurança
    pub password_hash: String,

    pub cargo: Cargo,
    pub equipe_id: Option<i64>,

    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

// Item da listagem de consultores (com a equipe embutida)
#[derive(Debug, Serialize, ToSchema)]
pub struct ConsultorComEquipe {
    #[serde(flatten)]
    pub consultor: User,
    pub equipe: Option<Equipe>,
}

// Detalhe de um consultor, com os vínculos que o painel exibe
#[derive(Debug, Serialize, ToSchema)]
pub struct ConsultorDetalhe {
    #[serde(flatten)]
    pub consultor: User,
    pub equipe: Option<Equipe>,
    pub celulares: Vec<Celular>,
    pub whatsapp_numeros: Vec<WhatsappNumero>,
}

// Dados para criação de um consultor
#[derive(Debug, Deserialize, Validate, ToSchema)]
pub struct CreateConsultorPayload {
    #[validate(length(min = 1, max = 100, message = "O nome deve ter entre 1 e 100 caracteres."))]
    pub name: String,
    #[validate(email(message = "O e-mail fornecido é inválido."))]
    pub email: String,
    #[validate(length(min = 6, message = "A senha deve ter no mínimo 6 caracteres."))]
    pub password: String,
    pub equipe_id: Option<i64>,
}

// Dados para atualização parcial de um consultor
#[derive(Debug, Deserialize, Validate, ToSchema)]
pub struct UpdateConsultorPayload {
    #[validate(length(min = 1, max = 100, message = "O nome deve ter entre 1 e 100 caracteres."))]
    pub name: Option<String>,
    #[validate(email(message = "O e-mail fornecido é inválido."))]
    pub email: Option<String>,
    #[validate(length(min = 6, message = "A senha deve ter no mínimo 6 caracteres."))]
    pub password: Option<String>,
    pub equipe_id: Option<i64>,
}

// Filtro opcional da listagem de consultores
#[derive(Debug, Deserialize, IntoParams)]
#[into_params(parameter_in = Query)]
pub struct ConsultorFiltro {
    pub equipe_id: Option<i64>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn cargo_serializa_em_minusculas() {
        assert_eq!(serde_json::to_string(&Cargo::Master).unwrap(), "\"master\"");
        assert_eq!(serde_json::to_string(&Cargo::Consultor).unwrap(), "\"consultor\"");
    }

    #[test]
    fn cargo_rejeita_valor_fora_do_conjunto() {
        let resultado: Result<Cargo, _> = serde_json::from_str("\"admin\"");
        assert!(resultado.is_err());
    }

    #[test]
    fn senha_nunca_aparece_no_json() {
        let user = User {
            id: 1,
            name: "Administrador".into(),
            email: "admin@famartcorp.com".into(),
            password_hash: "$2y$10$segredo".into(),
            cargo: Cargo::Master,
            equipe_id: None,
            created_at: Utc::now(),
            updated_at: Utc::now(),
        };
        let json = serde_json::to_string(&user).unwrap();
        assert!(!json.contains("password_hash"));
        assert!(!json.contains("segredo"));
    }

    #[test]
    fn payload_de_consultor_valida_limites() {
        let payload = CreateConsultorPayload {
            name: "Pedro Oliveira".into(),
            email: "pedro.oliveira@famartcorp.com".into(),
            password: "123456".into(),
            equipe_id: Some(1),
        };
        assert!(payload.validate().is_ok());

        let invalido = CreateConsultorPayload {
            name: "a".repeat(101),
            email: "nao-e-email".into(),
            password: "123".into(),
            equipe_id: None,
        };
        let erros = invalido.validate().unwrap_err();
        assert!(erros.field_errors().contains_key("name"));
        assert!(erros.field_errors().contains_key("email"));
        assert!(erros.field_errors().contains_key("password"));
    }
}
