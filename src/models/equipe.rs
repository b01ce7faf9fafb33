// src/models/equipe.rs

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;
use validator::Validate;

use crate::models::celular::Celular;
use crate::models::user::User;

// Representa uma equipe comercial (ex.: Equipe A)
#[derive(Debug, Clone, Serialize, sqlx::FromRow, ToSchema)]
pub struct Equipe {
    pub id: i64,
    pub nome: String,
    pub gestor_id: Option<i64>,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

// Equipe com gestor, membros e aparelhos embutidos
#[derive(Debug, Serialize, ToSchema)]
pub struct EquipeDetalhe {
    #[serde(flatten)]
    pub equipe: Equipe,
    pub gestor: Option<User>,
    pub consultores: Vec<User>,
    pub celulares: Vec<Celular>,
}

#[derive(Debug, Deserialize, Validate, ToSchema)]
pub struct CreateEquipePayload {
    #[validate(length(min = 1, max = 100, message = "O nome deve ter entre 1 e 100 caracteres."))]
    pub nome: String,
    pub gestor_id: Option<i64>,
}

#[derive(Debug, Deserialize, Validate, ToSchema)]
pub struct UpdateEquipePayload {
    #[validate(length(min = 1, max = 100, message = "O nome deve ter entre 1 e 100 caracteres."))]
    pub nome: Option<String>,
    pub gestor_id: Option<i64>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn nome_acima_do_limite_reprova() {
        let payload = CreateEquipePayload {
            nome: "x".repeat(101),
            gestor_id: None,
        };
        let erros = payload.validate().unwrap_err();
        assert!(erros.field_errors().contains_key("nome"));
    }

    #[test]
    fn atualizacao_sem_campos_e_valida() {
        let payload = UpdateEquipePayload {
            nome: None,
            gestor_id: None,
        };
        assert!(payload.validate().is_ok());
    }
}
