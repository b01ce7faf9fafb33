// src/services/equipe.rs

use std::collections::HashMap;

use crate::{
    common::error::AppError,
    db::{CelularRepository, EquipeRepository, UserRepository},
    models::celular::Celular,
    models::equipe::{CreateEquipePayload, Equipe, EquipeDetalhe, UpdateEquipePayload},
    models::user::User,
};

#[derive(Clone)]
pub struct EquipeService {
    equipe_repo: EquipeRepository,
    user_repo: UserRepository,
    celular_repo: CelularRepository,
}

impl EquipeService {
    pub fn new(
        equipe_repo: EquipeRepository,
        user_repo: UserRepository,
        celular_repo: CelularRepository,
    ) -> Self {
        Self {
            equipe_repo,
            user_repo,
            celular_repo,
        }
    }

    pub async fn buscar(&self, id: i64) -> Result<Option<Equipe>, AppError> {
        self.equipe_repo.find_by_id(id).await
    }

    pub async fn listar_detalhes(&self) -> Result<Vec<EquipeDetalhe>, AppError> {
        let equipes = self.equipe_repo.list().await?;
        self.montar_detalhes(equipes).await
    }

    pub async fn detalhar(&self, equipe: Equipe) -> Result<EquipeDetalhe, AppError> {
        let mut detalhes = self.montar_detalhes(vec![equipe]).await?;
        detalhes
            .pop()
            .ok_or_else(|| anyhow::anyhow!("montagem de detalhe sem resultado").into())
    }

    pub async fn criar(&self, payload: CreateEquipePayload) -> Result<Equipe, AppError> {
        self.equipe_repo
            .create(&payload.nome, payload.gestor_id)
            .await
    }

    pub async fn atualizar(
        &self,
        mut equipe: Equipe,
        payload: UpdateEquipePayload,
    ) -> Result<Equipe, AppError> {
        if let Some(nome) = payload.nome {
            equipe.nome = nome;
        }
        if let Some(gestor_id) = payload.gestor_id {
            equipe.gestor_id = Some(gestor_id);
        }

        self.equipe_repo.update(&equipe).await
    }

    pub async fn excluir(&self, id: i64) -> Result<(), AppError> {
        self.equipe_repo.delete(id).await
    }

    async fn montar_detalhes(&self, equipes: Vec<Equipe>) -> Result<Vec<EquipeDetalhe>, AppError> {
        let ids: Vec<i64> = equipes.iter().map(|e| e.id).collect();
        let gestor_ids: Vec<i64> = equipes.iter().filter_map(|e| e.gestor_id).collect();

        let gestores: HashMap<i64, User> = self
            .user_repo
            .find_by_ids(&gestor_ids)
            .await?
            .into_iter()
            .map(|u| (u.id, u))
            .collect();

        let mut membros_por_equipe: HashMap<i64, Vec<User>> = HashMap::new();
        for membro in self.user_repo.list_by_equipe_ids(&ids).await? {
            if let Some(equipe_id) = membro.equipe_id {
                membros_por_equipe.entry(equipe_id).or_default().push(membro);
            }
        }

        let mut celulares_por_equipe: HashMap<i64, Vec<Celular>> = HashMap::new();
        for celular in self.celular_repo.list_by_equipe_ids(&ids).await? {
            celulares_por_equipe
                .entry(celular.equipe_id)
                .or_default()
                .push(celular);
        }

        Ok(equipes
            .into_iter()
            .map(|equipe| EquipeDetalhe {
                gestor: equipe
                    .gestor_id
                    .and_then(|id| gestores.get(&id).cloned()),
                consultores: membros_por_equipe.remove(&equipe.id).unwrap_or_default(),
                celulares: celulares_por_equipe.remove(&equipe.id).unwrap_or_default(),
                equipe,
            })
            .collect())
    }
}
