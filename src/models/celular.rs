// src/models/celular.rs

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;
use validator::Validate;

use crate::models::equipe::Equipe;
use crate::models::user::User;
use crate::models::whatsapp::WhatsappNumero;

// Representa um aparelho corporativo
#[derive(Debug, Clone, Serialize, sqlx::FromRow, ToSchema)]
pub struct Celular {
    pub id: i64,
    pub marca: String,
    pub modelo: String,
    pub imei: Option<String>,
    pub observacao: Option<String>,
    pub consultor_id: i64,
    pub equipe_id: i64,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

// Celular com consultor, equipe e números embutidos
#[derive(Debug, Serialize, ToSchema)]
pub struct CelularDetalhe {
    #[serde(flatten)]
    pub celular: Celular,
    pub consultor: Option<User>,
    pub equipe: Option<Equipe>,
    pub whatsapp_numeros: Vec<WhatsappNumero>,
}

// Dados para cadastro de um celular. O consultor e a equipe são
// obrigatórios: as colunas correspondentes não aceitam nulo.
#[derive(Debug, Deserialize, Validate, ToSchema)]
pub struct CreateCelularPayload {
    #[validate(length(min = 1, max = 50, message = "A marca deve ter entre 1 e 50 caracteres."))]
    pub marca: String,
    #[validate(length(min = 1, max = 100, message = "O modelo deve ter entre 1 e 100 caracteres."))]
    pub modelo: String,
    #[validate(length(min = 1, max = 20, message = "O IMEI deve ter entre 1 e 20 caracteres."))]
    pub imei: String,
    pub observacao: Option<String>,
    pub consultor_id: i64,
    pub equipe_id: i64,
}

#[derive(Debug, Deserialize, Validate, ToSchema)]
pub struct UpdateCelularPayload {
    #[validate(length(min = 1, max = 50, message = "A marca deve ter entre 1 e 50 caracteres."))]
    pub marca: Option<String>,
    #[validate(length(min = 1, max = 100, message = "O modelo deve ter entre 1 e 100 caracteres."))]
    pub modelo: Option<String>,
    #[validate(length(min = 1, max = 20, message = "O IMEI deve ter entre 1 e 20 caracteres."))]
    pub imei: Option<String>,
    pub observacao: Option<String>,
    pub consultor_id: Option<i64>,
    pub equipe_id: Option<i64>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn payload_completo_passa_na_validacao() {
        let payload = CreateCelularPayload {
            marca: "Samsung".into(),
            modelo: "Galaxy A54".into(),
            imei: "350000000001000".into(),
            observacao: Some("Celular em bom estado".into()),
            consultor_id: 3,
            equipe_id: 1,
        };
        assert!(payload.validate().is_ok());
    }

    #[test]
    fn imei_longo_demais_reprova() {
        let payload = CreateCelularPayload {
            marca: "Samsung".into(),
            modelo: "Galaxy A54".into(),
            imei: "9".repeat(21),
            observacao: None,
            consultor_id: 3,
            equipe_id: 1,
        };
        let erros = payload.validate().unwrap_err();
        assert!(erros.field_errors().contains_key("imei"));
    }
}
