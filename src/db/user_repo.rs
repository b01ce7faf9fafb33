// src/db/user_repo.rs

use sqlx::PgPool;

use crate::common::db_utils::violated_constraint;
use crate::common::error::AppError;
use crate::models::user::{Cargo, User};

// O repositório de usuários, responsável por todas as interações com a tabela 'users'
#[derive(Clone)]
pub struct UserRepository {
    pool: PgPool,
}

impl UserRepository {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }

    // Busca um usuário pelo seu e-mail
    pub async fn find_by_email(&self, email: &str) -> Result<Option<User>, AppError> {
        let maybe_user = sqlx::query_as::<_, User>(
            r#"
            SELECT id, name, email, password_hash, cargo, equipe_id, created_at, updated_at
            FROM users
            WHERE email = $1
            "#,
        )
        .bind(email)
        .fetch_optional(&self.pool)
        .await?;
        Ok(maybe_user)
    }

    // Busca um usuário pelo seu ID
    pub async fn find_by_id(&self, id: i64) -> Result<Option<User>, AppError> {
        let maybe_user = sqlx::query_as::<_, User>(
            r#"
            SELECT id, name, email, password_hash, cargo, equipe_id, created_at, updated_at
            FROM users
            WHERE id = $1
            "#,
        )
        .bind(id)
        .fetch_optional(&self.pool)
        .await?;
        Ok(maybe_user)
    }

    // Busca vários usuários de uma vez (montagem das respostas com vínculos)
    pub async fn find_by_ids(&self, ids: &[i64]) -> Result<Vec<User>, AppError> {
        let users = sqlx::query_as::<_, User>(
            r#"
            SELECT id, name, email, password_hash, cargo, equipe_id, created_at, updated_at
            FROM users
            WHERE id = ANY($1)
            "#,
        )
        .bind(ids)
        .fetch_all(&self.pool)
        .await?;
        Ok(users)
    }

    // Membros de um conjunto de equipes (qualquer cargo)
    pub async fn list_by_equipe_ids(&self, equipe_ids: &[i64]) -> Result<Vec<User>, AppError> {
        let users = sqlx::query_as::<_, User>(
            r#"
            SELECT id, name, email, password_hash, cargo, equipe_id, created_at, updated_at
            FROM users
            WHERE equipe_id = ANY($1)
            ORDER BY id
            "#,
        )
        .bind(equipe_ids)
        .fetch_all(&self.pool)
        .await?;
        Ok(users)
    }

    // Cria um novo usuário, traduzindo violações de e-mail e de equipe
    pub async fn create_user(
        &self,
        name: &str,
        email: &str,
        password_hash: &str,
        cargo: Cargo,
        equipe_id: Option<i64>,
    ) -> Result<User, AppError> {
        let user = sqlx::query_as::<_, User>(
            r#"
            INSERT INTO users (name, email, password_hash, cargo, equipe_id)
            VALUES ($1, $2, $3, $4, $5)
            RETURNING id, name, email, password_hash, cargo, equipe_id, created_at, updated_at
            "#,
        )
        .bind(name)
        .bind(email)
        .bind(password_hash)
        .bind(cargo)
        .bind(equipe_id)
        .fetch_one(&self.pool)
        .await
        .map_err(|e| match violated_constraint(&e).as_deref() {
            Some("users_email_unique") => AppError::EmailAlreadyExists,
            Some("users_equipe_id_foreign") => {
                AppError::InvalidReference("A equipe informada não existe.")
            }
            _ => e.into(),
        })?;

        Ok(user)
    }

    // Salva nome, e-mail, senha e equipe já mesclados pelo serviço
    pub async fn update_user(&self, user: &User) -> Result<User, AppError> {
        let atualizado = sqlx::query_as::<_, User>(
            r#"
            UPDATE users
            SET name = $2, email = $3, password_hash = $4, equipe_id = $5, updated_at = now()
            WHERE id = $1
            RETURNING id, name, email, password_hash, cargo, equipe_id, created_at, updated_at
            "#,
        )
        .bind(user.id)
        .bind(&user.name)
        .bind(&user.email)
        .bind(&user.password_hash)
        .bind(user.equipe_id)
        .fetch_one(&self.pool)
        .await
        .map_err(|e| match violated_constraint(&e).as_deref() {
            Some("users_email_unique") => AppError::EmailAlreadyExists,
            Some("users_equipe_id_foreign") => {
                AppError::InvalidReference("A equipe informada não existe.")
            }
            _ => e.into(),
        })?;

        Ok(atualizado)
    }

    // Exclusão definitiva. Celulares e números apontam para o usuário
    // com RESTRICT, então a exclusão falha enquanto houver vínculo.
    pub async fn delete_user(&self, id: i64) -> Result<(), AppError> {
        sqlx::query("DELETE FROM users WHERE id = $1")
            .bind(id)
            .execute(&self.pool)
            .await
            .map_err(|e| match violated_constraint(&e) {
                Some(_) => AppError::Conflict(
                    "O consultor possui celulares ou números vinculados e não pode ser excluído.",
                ),
                None => e.into(),
            })?;
        Ok(())
    }

    // --- Consultores (usuários com cargo 'consultor') ---

    pub async fn find_consultor_by_id(&self, id: i64) -> Result<Option<User>, AppError> {
        let maybe_user = sqlx::query_as::<_, User>(
            r#"
            SELECT id, name, email, password_hash, cargo, equipe_id, created_at, updated_at
            FROM users
            WHERE id = $1 AND cargo = 'consultor'
            "#,
        )
        .bind(id)
        .fetch_optional(&self.pool)
        .await?;
        Ok(maybe_user)
    }

    pub async fn list_consultores(&self, equipe_id: Option<i64>) -> Result<Vec<User>, AppError> {
        let users = sqlx::query_as::<_, User>(
            r#"
            SELECT id, name, email, password_hash, cargo, equipe_id, created_at, updated_at
            FROM users
            WHERE cargo = 'consultor'
              AND ($1::bigint IS NULL OR equipe_id = $1)
            ORDER BY id
            "#,
        )
        .bind(equipe_id)
        .fetch_all(&self.pool)
        .await?;
        Ok(users)
    }
}
