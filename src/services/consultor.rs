// src/services/consultor.rs

use std::collections::HashMap;

use bcrypt::hash;

use crate::{
    common::error::AppError,
    db::{CelularRepository, EquipeRepository, UserRepository, WhatsappRepository},
    models::equipe::Equipe,
    models::user::{
        Cargo, ConsultorComEquipe, ConsultorDetalhe, CreateConsultorPayload,
        UpdateConsultorPayload, User,
    },
};

// Operações sobre usuários com cargo 'consultor'. Outros cargos não
// aparecem por este serviço.
#[derive(Clone)]
pub struct ConsultorService {
    user_repo: UserRepository,
    equipe_repo: EquipeRepository,
    celular_repo: CelularRepository,
    whatsapp_repo: WhatsappRepository,
}

impl ConsultorService {
    pub fn new(
        user_repo: UserRepository,
        equipe_repo: EquipeRepository,
        celular_repo: CelularRepository,
        whatsapp_repo: WhatsappRepository,
    ) -> Self {
        Self {
            user_repo,
            equipe_repo,
            celular_repo,
            whatsapp_repo,
        }
    }

    pub async fn buscar(&self, id: i64) -> Result<Option<User>, AppError> {
        self.user_repo.find_consultor_by_id(id).await
    }

    pub async fn listar(
        &self,
        equipe_id: Option<i64>,
    ) -> Result<Vec<ConsultorComEquipe>, AppError> {
        let consultores = self.user_repo.list_consultores(equipe_id).await?;

        let equipe_ids: Vec<i64> = consultores.iter().filter_map(|c| c.equipe_id).collect();
        let equipes: HashMap<i64, Equipe> = self
            .equipe_repo
            .find_by_ids(&equipe_ids)
            .await?
            .into_iter()
            .map(|e| (e.id, e))
            .collect();

        Ok(consultores
            .into_iter()
            .map(|consultor| ConsultorComEquipe {
                equipe: consultor
                    .equipe_id
                    .and_then(|id| equipes.get(&id).cloned()),
                consultor,
            })
            .collect())
    }

    pub async fn detalhar(&self, consultor: User) -> Result<ConsultorDetalhe, AppError> {
        let equipe = match consultor.equipe_id {
            Some(id) => self.equipe_repo.find_by_id(id).await?,
            None => None,
        };
        let celulares = self.celular_repo.list_by_consultor(consultor.id).await?;
        let whatsapp_numeros = self.whatsapp_repo.list_by_consultor(consultor.id).await?;

        Ok(ConsultorDetalhe {
            equipe,
            celulares,
            whatsapp_numeros,
            consultor,
        })
    }

    // Cria o usuário já com cargo 'consultor' e a senha com hash.
    pub async fn criar(&self, payload: CreateConsultorPayload) -> Result<User, AppError> {
        let password = payload.password.clone();
        let hashed_password =
            tokio::task::spawn_blocking(move || hash(&password, bcrypt::DEFAULT_COST))
                .await
                .map_err(|e| anyhow::anyhow!("Falha na task de hashing: {}", e))??;

        self.user_repo
            .create_user(
                &payload.name,
                &payload.email,
                &hashed_password,
                Cargo::Consultor,
                payload.equipe_id,
            )
            .await
    }

    // Se vier senha nova, ela é re-hashada antes de salvar.
    pub async fn atualizar(
        &self,
        mut consultor: User,
        payload: UpdateConsultorPayload,
    ) -> Result<User, AppError> {
        if let Some(name) = payload.name {
            consultor.name = name;
        }
        if let Some(email) = payload.email {
            consultor.email = email;
        }
        if let Some(equipe_id) = payload.equipe_id {
            consultor.equipe_id = Some(equipe_id);
        }
        if let Some(password) = payload.password {
            let hashed_password =
                tokio::task::spawn_blocking(move || hash(&password, bcrypt::DEFAULT_COST))
                    .await
                    .map_err(|e| anyhow::anyhow!("Falha na task de hashing: {}", e))??;
            consultor.password_hash = hashed_password;
        }

        self.user_repo.update_user(&consultor).await
    }

    pub async fn excluir(&self, id: i64) -> Result<(), AppError> {
        self.user_repo.delete_user(id).await
    }
}
