// src/db/celular_repo.rs

use sqlx::PgPool;

use crate::common::db_utils::violated_constraint;
use crate::common::error::AppError;
use crate::models::celular::Celular;

#[derive(Clone)]
pub struct CelularRepository {
    pool: PgPool,
}

impl CelularRepository {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }

    pub async fn find_by_id(&self, id: i64) -> Result<Option<Celular>, AppError> {
        let maybe_celular = sqlx::query_as::<_, Celular>(
            r#"
            SELECT id, marca, modelo, imei, observacao, consultor_id, equipe_id,
                   created_at, updated_at
            FROM celulares
            WHERE id = $1
            "#,
        )
        .bind(id)
        .fetch_optional(&self.pool)
        .await?;
        Ok(maybe_celular)
    }

    pub async fn find_by_ids(&self, ids: &[i64]) -> Result<Vec<Celular>, AppError> {
        let celulares = sqlx::query_as::<_, Celular>(
            r#"
            SELECT id, marca, modelo, imei, observacao, consultor_id, equipe_id,
                   created_at, updated_at
            FROM celulares
            WHERE id = ANY($1)
            "#,
        )
        .bind(ids)
        .fetch_all(&self.pool)
        .await?;
        Ok(celulares)
    }

    pub async fn list(&self) -> Result<Vec<Celular>, AppError> {
        let celulares = sqlx::query_as::<_, Celular>(
            r#"
            SELECT id, marca, modelo, imei, observacao, consultor_id, equipe_id,
                   created_at, updated_at
            FROM celulares
            ORDER BY id
            "#,
        )
        .fetch_all(&self.pool)
        .await?;
        Ok(celulares)
    }

    pub async fn list_by_consultor(&self, consultor_id: i64) -> Result<Vec<Celular>, AppError> {
        let celulares = sqlx::query_as::<_, Celular>(
            r#"
            SELECT id, marca, modelo, imei, observacao, consultor_id, equipe_id,
                   created_at, updated_at
            FROM celulares
            WHERE consultor_id = $1
            ORDER BY id
            "#,
        )
        .bind(consultor_id)
        .fetch_all(&self.pool)
        .await?;
        Ok(celulares)
    }

    pub async fn list_by_equipe_ids(&self, equipe_ids: &[i64]) -> Result<Vec<Celular>, AppError> {
        let celulares = sqlx::query_as::<_, Celular>(
            r#"
            SELECT id, marca, modelo, imei, observacao, consultor_id, equipe_id,
                   created_at, updated_at
            FROM celulares
            WHERE equipe_id = ANY($1)
            ORDER BY id
            "#,
        )
        .bind(equipe_ids)
        .fetch_all(&self.pool)
        .await?;
        Ok(celulares)
    }

    pub async fn create(
        &self,
        marca: &str,
        modelo: &str,
        imei: &str,
        observacao: Option<&str>,
        consultor_id: i64,
        equipe_id: i64,
    ) -> Result<Celular, AppError> {
        let celular = sqlx::query_as::<_, Celular>(
            r#"
            INSERT INTO celulares (marca, modelo, imei, observacao, consultor_id, equipe_id)
            VALUES ($1, $2, $3, $4, $5, $6)
            RETURNING id, marca, modelo, imei, observacao, consultor_id, equipe_id,
                      created_at, updated_at
            "#,
        )
        .bind(marca)
        .bind(modelo)
        .bind(imei)
        .bind(observacao)
        .bind(consultor_id)
        .bind(equipe_id)
        .fetch_one(&self.pool)
        .await
        .map_err(|e| match violated_constraint(&e).as_deref() {
            Some("celulares_imei_unique") => {
                AppError::Conflict("Este IMEI já está cadastrado.")
            }
            Some("celulares_consultor_id_foreign") => {
                AppError::InvalidReference("O consultor informado não existe.")
            }
            Some("celulares_equipe_id_foreign") => {
                AppError::InvalidReference("A equipe informada não existe.")
            }
            _ => e.into(),
        })?;

        Ok(celular)
    }

    pub async fn update(&self, celular: &Celular) -> Result<Celular, AppError> {
        let atualizado = sqlx::query_as::<_, Celular>(
            r#"
            UPDATE celulares
            SET marca = $2, modelo = $3, imei = $4, observacao = $5,
                consultor_id = $6, equipe_id = $7, updated_at = now()
            WHERE id = $1
            RETURNING id, marca, modelo, imei, observacao, consultor_id, equipe_id,
                      created_at, updated_at
            "#,
        )
        .bind(celular.id)
        .bind(&celular.marca)
        .bind(&celular.modelo)
        .bind(celular.imei.as_deref())
        .bind(celular.observacao.as_deref())
        .bind(celular.consultor_id)
        .bind(celular.equipe_id)
        .fetch_one(&self.pool)
        .await
        .map_err(|e| match violated_constraint(&e).as_deref() {
            Some("celulares_imei_unique") => {
                AppError::Conflict("Este IMEI já está cadastrado.")
            }
            Some("celulares_consultor_id_foreign") => {
                AppError::InvalidReference("O consultor informado não existe.")
            }
            Some("celulares_equipe_id_foreign") => {
                AppError::InvalidReference("A equipe informada não existe.")
            }
            _ => e.into(),
        })?;

        Ok(atualizado)
    }

    // Números de WhatsApp apontam para o celular com RESTRICT.
    pub async fn delete(&self, id: i64) -> Result<(), AppError> {
        sqlx::query("DELETE FROM celulares WHERE id = $1")
            .bind(id)
            .execute(&self.pool)
            .await
            .map_err(|e| match violated_constraint(&e) {
                Some(_) => AppError::Conflict(
                    "O celular possui números de WhatsApp vinculados e não pode ser excluído.",
                ),
                None => e.into(),
            })?;
        Ok(())
    }
}
