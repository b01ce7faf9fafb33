// src/config.rs

use sqlx::{postgres::PgPoolOptions, PgPool};
use std::{env, time::Duration};

use crate::{
    db::{CelularRepository, EquipeRepository, UserRepository, WhatsappRepository},
    services::{AuthService, CelularService, ConsultorService, EquipeService, WhatsappService},
};

#[derive(Clone)]
pub struct AppState {
    pub db_pool: PgPool,
    pub jwt_secret: String,
    pub auth_service: AuthService,
    pub celular_service: CelularService,
    pub equipe_service: EquipeService,
    pub whatsapp_service: WhatsappService,
    pub consultor_service: ConsultorService,
}

impl AppState {
    pub async fn new() -> anyhow::Result<Self> {
        dotenvy::dotenv().ok();

        let database_url = env::var("DATABASE_URL").expect("DATABASE_URL deve ser definida");
        let jwt_secret = env::var("JWT_SECRET").expect("JWT_SECRET deve ser definido");

        // Conecta ao banco de dados, usando '?' para propagar erros
        let db_pool = PgPoolOptions::new()
            .max_connections(5)
            .acquire_timeout(Duration::from_secs(3))
            .connect(&database_url)
            .await?;

        tracing::info!("✅ Conexão com o banco de dados estabelecida com sucesso!");

        Ok(Self::from_pool(db_pool, jwt_secret))
    }

    // Monta o gráfico de dependências sobre um pool já criado.
    pub fn from_pool(db_pool: PgPool, jwt_secret: String) -> Self {
        let user_repo = UserRepository::new(db_pool.clone());
        let equipe_repo = EquipeRepository::new(db_pool.clone());
        let celular_repo = CelularRepository::new(db_pool.clone());
        let whatsapp_repo = WhatsappRepository::new(db_pool.clone());

        let auth_service = AuthService::new(user_repo.clone(), jwt_secret.clone());
        let celular_service = CelularService::new(
            celular_repo.clone(),
            user_repo.clone(),
            equipe_repo.clone(),
            whatsapp_repo.clone(),
        );
        let equipe_service = EquipeService::new(
            equipe_repo.clone(),
            user_repo.clone(),
            celular_repo.clone(),
        );
        let whatsapp_service = WhatsappService::new(
            whatsapp_repo.clone(),
            celular_repo.clone(),
            user_repo.clone(),
            equipe_repo.clone(),
        );
        let consultor_service =
            ConsultorService::new(user_repo, equipe_repo, celular_repo, whatsapp_repo);

        Self {
            db_pool,
            jwt_secret,
            auth_service,
            celular_service,
            equipe_service,
            whatsapp_service,
            consultor_service,
        }
    }
}
