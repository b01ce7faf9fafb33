// src/services/celular.rs

use std::collections::HashMap;

use crate::{
    common::error::AppError,
    db::{CelularRepository, EquipeRepository, UserRepository, WhatsappRepository},
    models::celular::{Celular, CelularDetalhe, CreateCelularPayload, UpdateCelularPayload},
    models::equipe::Equipe,
    models::user::User,
    models::whatsapp::WhatsappNumero,
};

#[derive(Clone)]
pub struct CelularService {
    celular_repo: CelularRepository,
    user_repo: UserRepository,
    equipe_repo: EquipeRepository,
    whatsapp_repo: WhatsappRepository,
}

impl CelularService {
    pub fn new(
        celular_repo: CelularRepository,
        user_repo: UserRepository,
        equipe_repo: EquipeRepository,
        whatsapp_repo: WhatsappRepository,
    ) -> Self {
        Self {
            celular_repo,
            user_repo,
            equipe_repo,
            whatsapp_repo,
        }
    }

    // Linha crua, para o handler decidir 404 e autorização antes de
    // montar a resposta completa.
    pub async fn buscar(&self, id: i64) -> Result<Option<Celular>, AppError> {
        self.celular_repo.find_by_id(id).await
    }

    pub async fn listar_detalhes(&self) -> Result<Vec<CelularDetalhe>, AppError> {
        let celulares = self.celular_repo.list().await?;
        self.montar_detalhes(celulares).await
    }

    pub async fn detalhar(&self, celular: Celular) -> Result<CelularDetalhe, AppError> {
        let mut detalhes = self.montar_detalhes(vec![celular]).await?;
        detalhes
            .pop()
            .ok_or_else(|| anyhow::anyhow!("montagem de detalhe sem resultado").into())
    }

    pub async fn criar(&self, payload: CreateCelularPayload) -> Result<Celular, AppError> {
        self.celular_repo
            .create(
                &payload.marca,
                &payload.modelo,
                &payload.imei,
                payload.observacao.as_deref(),
                payload.consultor_id,
                payload.equipe_id,
            )
            .await
    }

    // Mescla os campos enviados sobre a linha carregada e salva.
    pub async fn atualizar(
        &self,
        mut celular: Celular,
        payload: UpdateCelularPayload,
    ) -> Result<Celular, AppError> {
        if let Some(marca) = payload.marca {
            celular.marca = marca;
        }
        if let Some(modelo) = payload.modelo {
            celular.modelo = modelo;
        }
        if let Some(imei) = payload.imei {
            celular.imei = Some(imei);
        }
        if let Some(observacao) = payload.observacao {
            celular.observacao = Some(observacao);
        }
        if let Some(consultor_id) = payload.consultor_id {
            celular.consultor_id = consultor_id;
        }
        if let Some(equipe_id) = payload.equipe_id {
            celular.equipe_id = equipe_id;
        }

        self.celular_repo.update(&celular).await
    }

    pub async fn excluir(&self, id: i64) -> Result<(), AppError> {
        self.celular_repo.delete(id).await
    }

    // Uma consulta por relação, costurada em memória; nada de uma
    // consulta por linha.
    async fn montar_detalhes(
        &self,
        celulares: Vec<Celular>,
    ) -> Result<Vec<CelularDetalhe>, AppError> {
        let ids: Vec<i64> = celulares.iter().map(|c| c.id).collect();
        let consultor_ids: Vec<i64> = celulares.iter().map(|c| c.consultor_id).collect();
        let equipe_ids: Vec<i64> = celulares.iter().map(|c| c.equipe_id).collect();

        let consultores: HashMap<i64, User> = self
            .user_repo
            .find_by_ids(&consultor_ids)
            .await?
            .into_iter()
            .map(|u| (u.id, u))
            .collect();

        let equipes: HashMap<i64, Equipe> = self
            .equipe_repo
            .find_by_ids(&equipe_ids)
            .await?
            .into_iter()
            .map(|e| (e.id, e))
            .collect();

        let mut numeros_por_celular: HashMap<i64, Vec<WhatsappNumero>> = HashMap::new();
        for numero in self.whatsapp_repo.list_by_celular_ids(&ids).await? {
            numeros_por_celular
                .entry(numero.celular_id)
                .or_default()
                .push(numero);
        }

        Ok(celulares
            .into_iter()
            .map(|celular| CelularDetalhe {
                consultor: consultores.get(&celular.consultor_id).cloned(),
                equipe: equipes.get(&celular.equipe_id).cloned(),
                whatsapp_numeros: numeros_por_celular.remove(&celular.id).unwrap_or_default(),
                celular,
            })
            .collect())
    }
}
