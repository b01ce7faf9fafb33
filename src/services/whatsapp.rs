// src/services/whatsapp.rs

use std::collections::HashMap;

use crate::{
    common::error::AppError,
    db::{CelularRepository, EquipeRepository, UserRepository, WhatsappRepository},
    models::celular::Celular,
    models::equipe::Equipe,
    models::user::User,
    models::whatsapp::{
        CreateWhatsappPayload, Paginado, StatusWhatsapp, UpdateWhatsappPayload, WhatsappDetalhe,
        WhatsappFiltro, WhatsappNumero,
    },
};

const PER_PAGE_PADRAO: i64 = 15;

#[derive(Clone)]
pub struct WhatsappService {
    whatsapp_repo: WhatsappRepository,
    celular_repo: CelularRepository,
    user_repo: UserRepository,
    equipe_repo: EquipeRepository,
}

impl WhatsappService {
    pub fn new(
        whatsapp_repo: WhatsappRepository,
        celular_repo: CelularRepository,
        user_repo: UserRepository,
        equipe_repo: EquipeRepository,
    ) -> Self {
        Self {
            whatsapp_repo,
            celular_repo,
            user_repo,
            equipe_repo,
        }
    }

    pub async fn buscar(&self, id: i64) -> Result<Option<WhatsappNumero>, AppError> {
        self.whatsapp_repo.find_by_id(id).await
    }

    pub async fn listar_paginado(
        &self,
        filtro: WhatsappFiltro,
    ) -> Result<Paginado<WhatsappDetalhe>, AppError> {
        let per_page = filtro.per_page.unwrap_or(PER_PAGE_PADRAO).max(1);
        let page = filtro.page.unwrap_or(1).max(1);
        let offset = (page - 1) * per_page;

        let (numeros, total) = self
            .whatsapp_repo
            .list_page(
                filtro.status,
                filtro.equipe_id,
                filtro.consultor_id,
                per_page,
                offset,
            )
            .await?;

        let detalhes = self.montar_detalhes(numeros).await?;
        Ok(Paginado::new(detalhes, total, page, per_page))
    }

    pub async fn detalhar(&self, numero: WhatsappNumero) -> Result<WhatsappDetalhe, AppError> {
        let mut detalhes = self.montar_detalhes(vec![numero]).await?;
        detalhes
            .pop()
            .ok_or_else(|| anyhow::anyhow!("montagem de detalhe sem resultado").into())
    }

    pub async fn criar(&self, payload: CreateWhatsappPayload) -> Result<WhatsappNumero, AppError> {
        let status = payload.status.unwrap_or(StatusWhatsapp::Ativo);
        self.whatsapp_repo
            .create(
                &payload.numero,
                status,
                payload.celular_id,
                payload.consultor_id,
                payload.equipe_id,
            )
            .await
    }

    pub async fn atualizar(
        &self,
        mut numero: WhatsappNumero,
        payload: UpdateWhatsappPayload,
    ) -> Result<WhatsappNumero, AppError> {
        if let Some(valor) = payload.numero {
            numero.numero = valor;
        }
        if let Some(status) = payload.status {
            numero.status = status;
        }
        if let Some(celular_id) = payload.celular_id {
            numero.celular_id = celular_id;
        }
        if let Some(consultor_id) = payload.consultor_id {
            numero.consultor_id = consultor_id;
        }
        if let Some(equipe_id) = payload.equipe_id {
            numero.equipe_id = equipe_id;
        }

        self.whatsapp_repo.update(&numero).await
    }

    pub async fn excluir(&self, id: i64) -> Result<(), AppError> {
        self.whatsapp_repo.delete(id).await
    }

    async fn montar_detalhes(
        &self,
        numeros: Vec<WhatsappNumero>,
    ) -> Result<Vec<WhatsappDetalhe>, AppError> {
        let celular_ids: Vec<i64> = numeros.iter().map(|n| n.celular_id).collect();
        let consultor_ids: Vec<i64> = numeros.iter().map(|n| n.consultor_id).collect();
        let equipe_ids: Vec<i64> = numeros.iter().map(|n| n.equipe_id).collect();

        let celulares: HashMap<i64, Celular> = self
            .celular_repo
            .find_by_ids(&celular_ids)
            .await?
            .into_iter()
            .map(|c| (c.id, c))
            .collect();

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

        Ok(numeros
            .into_iter()
            .map(|numero| WhatsappDetalhe {
                celular: celulares.get(&numero.celular_id).cloned(),
                consultor: consultores.get(&numero.consultor_id).cloned(),
                equipe: equipes.get(&numero.equipe_id).cloned(),
                numero,
            })
            .collect())
    }
}
