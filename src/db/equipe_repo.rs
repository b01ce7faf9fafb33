// src/db/equipe_repo.rs

use sqlx::PgPool;

use crate::common::db_utils::violated_constraint;
use crate::common::error::AppError;
use crate::models::equipe::Equipe;

#[derive(Clone)]
pub struct EquipeRepository {
    pool: PgPool,
}

impl EquipeRepository {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }

    pub async fn find_by_id(&self, id: i64) -> Result<Option<Equipe>, AppError> {
        let maybe_equipe = sqlx::query_as::<_, Equipe>(
            r#"
            SELECT id, nome, gestor_id, created_at, updated_at
            FROM equipes
            WHERE id = $1
            "#,
        )
        .bind(id)
        .fetch_optional(&self.pool)
        .await?;
        Ok(maybe_equipe)
    }

    pub async fn find_by_ids(&self, ids: &[i64]) -> Result<Vec<Equipe>, AppError> {
        let equipes = sqlx::query_as::<_, Equipe>(
            r#"
            SELECT id, nome, gestor_id, created_at, updated_at
            FROM equipes
            WHERE id = ANY($1)
            "#,
        )
        .bind(ids)
        .fetch_all(&self.pool)
        .await?;
        Ok(equipes)
    }

    pub async fn list(&self) -> Result<Vec<Equipe>, AppError> {
        let equipes = sqlx::query_as::<_, Equipe>(
            r#"
            SELECT id, nome, gestor_id, created_at, updated_at
            FROM equipes
            ORDER BY id
            "#,
        )
        .fetch_all(&self.pool)
        .await?;
        Ok(equipes)
    }

    pub async fn create(&self, nome: &str, gestor_id: Option<i64>) -> Result<Equipe, AppError> {
        let equipe = sqlx::query_as::<_, Equipe>(
            r#"
            INSERT INTO equipes (nome, gestor_id)
            VALUES ($1, $2)
            RETURNING id, nome, gestor_id, created_at, updated_at
            "#,
        )
        .bind(nome)
        .bind(gestor_id)
        .fetch_one(&self.pool)
        .await
        .map_err(|e| match violated_constraint(&e).as_deref() {
            Some("equipes_nome_unique") => {
                AppError::Conflict("Já existe uma equipe com este nome.")
            }
            Some("equipes_gestor_id_foreign") => {
                AppError::InvalidReference("O gestor informado não existe.")
            }
            _ => e.into(),
        })?;

        Ok(equipe)
    }

    pub async fn update(&self, equipe: &Equipe) -> Result<Equipe, AppError> {
        let atualizada = sqlx::query_as::<_, Equipe>(
            r#"
            UPDATE equipes
            SET nome = $2, gestor_id = $3, updated_at = now()
            WHERE id = $1
            RETURNING id, nome, gestor_id, created_at, updated_at
            "#,
        )
        .bind(equipe.id)
        .bind(&equipe.nome)
        .bind(equipe.gestor_id)
        .fetch_one(&self.pool)
        .await
        .map_err(|e| match violated_constraint(&e).as_deref() {
            Some("equipes_nome_unique") => {
                AppError::Conflict("Já existe uma equipe com este nome.")
            }
            Some("equipes_gestor_id_foreign") => {
                AppError::InvalidReference("O gestor informado não existe.")
            }
            _ => e.into(),
        })?;

        Ok(atualizada)
    }

    // Celulares e números apontam para a equipe com RESTRICT; membros
    // (users.equipe_id) são desvinculados com SET NULL.
    pub async fn delete(&self, id: i64) -> Result<(), AppError> {
        sqlx::query("DELETE FROM equipes WHERE id = $1")
            .bind(id)
            .execute(&self.pool)
            .await
            .map_err(|e| match violated_constraint(&e) {
                Some(_) => AppError::Conflict(
                    "A equipe possui celulares ou números vinculados e não pode ser excluída.",
                ),
                None => e.into(),
            })?;
        Ok(())
    }
}
