// src/models/whatsapp.rs

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use utoipa::{IntoParams, ToSchema};
use validator::Validate;

use crate::models::celular::Celular;
use crate::models::equipe::Equipe;
use crate::models::user::User;

// Situação operacional de um número. Espelha o tipo `status_whatsapp`
// do banco; valores fora do conjunto são rejeitados na desserialização.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, sqlx::Type, ToSchema)]
#[sqlx(type_name = "status_whatsapp", rename_all = "snake_case")]
#[serde(rename_all = "snake_case")]
pub enum StatusWhatsapp {
    Ativo,
    Restrito,
    Banido,
    BanidoPermanente,
    Emprestado,
}

// Representa um número de WhatsApp vinculado a um celular
#[derive(Debug, Clone, Serialize, sqlx::FromRow, ToSchema)]
pub struct WhatsappNumero {
    pub id: i64,
    pub numero: String,
    pub status: StatusWhatsapp,
    pub celular_id: i64,
    pub consultor_id: i64,
    pub equipe_id: i64,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

// Número com celular, consultor e equipe embutidos
#[derive(Debug, Serialize, ToSchema)]
pub struct WhatsappDetalhe {
    #[serde(flatten)]
    pub numero: WhatsappNumero,
    pub celular: Option<Celular>,
    pub consultor: Option<User>,
    pub equipe: Option<Equipe>,
}

#[derive(Debug, Deserialize, Validate, ToSchema)]
pub struct CreateWhatsappPayload {
    #[validate(length(min = 1, max = 20, message = "O número deve ter entre 1 e 20 caracteres."))]
    pub numero: String,
    // Quando ausente, o número entra como `ativo`.
    pub status: Option<StatusWhatsapp>,
    pub celular_id: i64,
    pub consultor_id: i64,
    pub equipe_id: i64,
}

#[derive(Debug, Deserialize, Validate, ToSchema)]
pub struct UpdateWhatsappPayload {
    #[validate(length(min = 1, max = 20, message = "O número deve ter entre 1 e 20 caracteres."))]
    pub numero: Option<String>,
    pub status: Option<StatusWhatsapp>,
    pub celular_id: Option<i64>,
    pub consultor_id: Option<i64>,
    pub equipe_id: Option<i64>,
}

// Filtros e paginação da listagem de números
#[derive(Debug, Deserialize, IntoParams)]
#[into_params(parameter_in = Query)]
pub struct WhatsappFiltro {
    pub status: Option<StatusWhatsapp>,
    pub equipe_id: Option<i64>,
    pub consultor_id: Option<i64>,
    pub per_page: Option<i64>,
    pub page: Option<i64>,
}

// Envelope de página no mesmo formato que o painel já consome
#[derive(Debug, Serialize, ToSchema)]
pub struct Paginado<T> {
    pub data: Vec<T>,
    pub current_page: i64,
    pub last_page: i64,
    pub per_page: i64,
    pub total: i64,
}

impl<T> Paginado<T> {
    pub fn new(data: Vec<T>, total: i64, page: i64, per_page: i64) -> Self {
        let last_page = if total == 0 { 1 } else { (total + per_page - 1) / per_page };
        Self {
            data,
            current_page: page,
            last_page,
            per_page,
            total,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn status_serializa_em_snake_case() {
        let json = serde_json::to_string(&StatusWhatsapp::BanidoPermanente).unwrap();
        assert_eq!(json, "\"banido_permanente\"");
    }

    #[test]
    fn status_invalido_e_rejeitado() {
        let resultado: Result<StatusWhatsapp, _> = serde_json::from_str("\"bloqueado\"");
        assert!(resultado.is_err());
    }

    #[test]
    fn paginacao_calcula_ultima_pagina() {
        let pagina: Paginado<i32> = Paginado::new(vec![], 31, 1, 15);
        assert_eq!(pagina.last_page, 3);

        let vazia: Paginado<i32> = Paginado::new(vec![], 0, 1, 15);
        assert_eq!(vazia.last_page, 1);
        assert_eq!(vazia.total, 0);
    }

    #[test]
    fn pagina_exata_nao_cria_pagina_extra() {
        let pagina: Paginado<i32> = Paginado::new(vec![], 30, 2, 15);
        assert_eq!(pagina.last_page, 2);
    }
}
