// src/db/whatsapp_repo.rs

use sqlx::PgPool;

use crate::common::db_utils::violated_constraint;
use crate::common::error::AppError;
use crate::models::whatsapp::{StatusWhatsapp, WhatsappNumero};

#[derive(Clone)]
pub struct WhatsappRepository {
    pool: PgPool,
}

impl WhatsappRepository {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }

    pub async fn find_by_id(&self, id: i64) -> Result<Option<WhatsappNumero>, AppError> {
        let maybe_numero = sqlx::query_as::<_, WhatsappNumero>(
            r#"
            SELECT id, numero, status, celular_id, consultor_id, equipe_id,
                   created_at, updated_at
            FROM whatsapp_numeros
            WHERE id = $1
            "#,
        )
        .bind(id)
        .fetch_optional(&self.pool)
        .await?;
        Ok(maybe_numero)
    }

    // Página de números já filtrada, mais o total para montar o envelope
    pub async fn list_page(
        &self,
        status: Option<StatusWhatsapp>,
        equipe_id: Option<i64>,
        consultor_id: Option<i64>,
        per_page: i64,
        offset: i64,
    ) -> Result<(Vec<WhatsappNumero>, i64), AppError> {
        let numeros = sqlx::query_as::<_, WhatsappNumero>(
            r#"
            SELECT id, numero, status, celular_id, consultor_id, equipe_id,
                   created_at, updated_at
            FROM whatsapp_numeros
            WHERE ($1::status_whatsapp IS NULL OR status = $1)
              AND ($2::bigint IS NULL OR equipe_id = $2)
              AND ($3::bigint IS NULL OR consultor_id = $3)
            ORDER BY id
            LIMIT $4 OFFSET $5
            "#,
        )
        .bind(status)
        .bind(equipe_id)
        .bind(consultor_id)
        .bind(per_page)
        .bind(offset)
        .fetch_all(&self.pool)
        .await?;

        let total = sqlx::query_scalar::<_, i64>(
            r#"
            SELECT COUNT(*)
            FROM whatsapp_numeros
            WHERE ($1::status_whatsapp IS NULL OR status = $1)
              AND ($2::bigint IS NULL OR equipe_id = $2)
              AND ($3::bigint IS NULL OR consultor_id = $3)
            "#,
        )
        .bind(status)
        .bind(equipe_id)
        .bind(consultor_id)
        .fetch_one(&self.pool)
        .await?;

        Ok((numeros, total))
    }

    pub async fn list_by_celular_ids(
        &self,
        celular_ids: &[i64],
    ) -> Result<Vec<WhatsappNumero>, AppError> {
        let numeros = sqlx::query_as::<_, WhatsappNumero>(
            r#"
            SELECT id, numero, status, celular_id, consultor_id, equipe_id,
                   created_at, updated_at
            FROM whatsapp_numeros
            WHERE celular_id = ANY($1)
            ORDER BY id
            "#,
        )
        .bind(celular_ids)
        .fetch_all(&self.pool)
        .await?;
        Ok(numeros)
    }

    pub async fn list_by_consultor(
        &self,
        consultor_id: i64,
    ) -> Result<Vec<WhatsappNumero>, AppError> {
        let numeros = sqlx::query_as::<_, WhatsappNumero>(
            r#"
            SELECT id, numero, status, celular_id, consultor_id, equipe_id,
                   created_at, updated_at
            FROM whatsapp_numeros
            WHERE consultor_id = $1
            ORDER BY id
            "#,
        )
        .bind(consultor_id)
        .fetch_all(&self.pool)
        .await?;
        Ok(numeros)
    }

    pub async fn create(
        &self,
        numero: &str,
        status: StatusWhatsapp,
        celular_id: i64,
        consultor_id: i64,
        equipe_id: i64,
    ) -> Result<WhatsappNumero, AppError> {
        let registro = sqlx::query_as::<_, WhatsappNumero>(
            r#"
            INSERT INTO whatsapp_numeros (numero, status, celular_id, consultor_id, equipe_id)
            VALUES ($1, $2, $3, $4, $5)
            RETURNING id, numero, status, celular_id, consultor_id, equipe_id,
                      created_at, updated_at
            "#,
        )
        .bind(numero)
        .bind(status)
        .bind(celular_id)
        .bind(consultor_id)
        .bind(equipe_id)
        .fetch_one(&self.pool)
        .await
        .map_err(|e| match violated_constraint(&e).as_deref() {
            Some("whatsapp_numeros_numero_unique") => {
                AppError::Conflict("Este número já está cadastrado.")
            }
            Some("whatsapp_numeros_celular_id_foreign") => {
                AppError::InvalidReference("O celular informado não existe.")
            }
            Some("whatsapp_numeros_consultor_id_foreign") => {
                AppError::InvalidReference("O consultor informado não existe.")
            }
            Some("whatsapp_numeros_equipe_id_foreign") => {
                AppError::InvalidReference("A equipe informada não existe.")
            }
            _ => e.into(),
        })?;

        Ok(registro)
    }

    pub async fn update(&self, numero: &WhatsappNumero) -> Result<WhatsappNumero, AppError> {
        let atualizado = sqlx::query_as::<_, WhatsappNumero>(
            r#"
            UPDATE whatsapp_numeros
            SET numero = $2, status = $3, celular_id = $4, consultor_id = $5,
                equipe_id = $6, updated_at = now()
            WHERE id = $1
            RETURNING id, numero, status, celular_id, consultor_id, equipe_id,
                      created_at, updated_at
            "#,
        )
        .bind(numero.id)
        .bind(&numero.numero)
        .bind(numero.status)
        .bind(numero.celular_id)
        .bind(numero.consultor_id)
        .bind(numero.equipe_id)
        .fetch_one(&self.pool)
        .await
        .map_err(|e| match violated_constraint(&e).as_deref() {
            Some("whatsapp_numeros_numero_unique") => {
                AppError::Conflict("Este número já está cadastrado.")
            }
            Some("whatsapp_numeros_celular_id_foreign") => {
                AppError::InvalidReference("O celular informado não existe.")
            }
            Some("whatsapp_numeros_consultor_id_foreign") => {
                AppError::InvalidReference("O consultor informado não existe.")
            }
            Some("whatsapp_numeros_equipe_id_foreign") => {
                AppError::InvalidReference("A equipe informada não existe.")
            }
            _ => e.into(),
        })?;

        Ok(atualizado)
    }

    // Nenhuma tabela referencia números; a exclusão não tem RESTRICT.
    pub async fn delete(&self, id: i64) -> Result<(), AppError> {
        sqlx::query("DELETE FROM whatsapp_numeros WHERE id = $1")
            .bind(id)
            .execute(&self.pool)
            .await?;
        Ok(())
    }
}
