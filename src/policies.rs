// src/policies.rs
//
// Motor de autorização: função pura que decide, a partir do cargo e da
// equipe de quem chama, se uma ação sobre uma instância é permitida.
// Negação é um `Ok(false)` normal; erro só existe quando o chamador
// esqueceu de carregar o alvo de uma ação que exige instância.

use thiserror::Error;

use crate::models::user::{Cargo, User};

pub mod celular_policy;
pub mod equipe_policy;
pub mod user_policy;
pub mod whatsapp_policy;

// Ações que o painel pode pedir. `Restore` e `ForceDelete` existem no
// contrato mas nenhuma entidade tem soft delete no armazenamento.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Action {
    ViewAny,
    View,
    Create,
    Update,
    Delete,
    Restore,
    ForceDelete,
}

// Predicados que uma célula da tabela de regras pode exigir. Nenhuma
// regra precisa de mais do que dono, equipe ou a combinação dos dois.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Rule {
    Allow,
    Deny,
    // principal.equipe_id == alvo.equipe_id
    SameTeam,
    // principal.id == alvo.consultor_id
    Owner,
    OwnerOrSameTeam,
    // alvo é um consultor da mesma equipe (usado na exclusão de usuários)
    SameTeamConsultor,
}

// Linha da tabela: o que um cargo pode fazer com a entidade.
#[derive(Debug, Clone, Copy)]
pub struct RoleRules {
    pub view_any: Rule,
    pub view: Rule,
    pub create: Rule,
    pub update: Rule,
    pub delete: Rule,
}

// Tabela declarativa por entidade. Master não tem linha: curto-circuita
// antes de qualquer predicado.
#[derive(Debug, Clone, Copy)]
pub struct PolicyTable {
    pub gestor: RoleRules,
    pub consultor: RoleRules,
}

#[derive(Debug, Error, PartialEq, Eq)]
pub enum PolicyError {
    #[error("a ação {0:?} exige a instância alvo carregada")]
    TargetRequired(Action),
}

// Capacidade mínima que o motor lê de um alvo: dono, escopo de equipe
// e, quando o alvo é um usuário, o cargo dele.
pub trait PolicyTarget {
    const REGRAS: PolicyTable;

    fn consultor_id(&self) -> Option<i64> {
        None
    }

    fn equipe_id(&self) -> Option<i64>;

    fn cargo(&self) -> Option<Cargo> {
        None
    }
}

// Decisão de autorização. Pura e sem I/O: depende só dos argumentos.
pub fn authorize<T: PolicyTarget>(
    user: &User,
    action: Action,
    target: Option<&T>,
) -> Result<bool, PolicyError> {
    let rules = match user.cargo {
        // Master curto-circuita toda verificação.
        Cargo::Master => return Ok(true),
        Cargo::Gestor => T::REGRAS.gestor,
        Cargo::Consultor => T::REGRAS.consultor,
    };

    let rule = match action {
        Action::ViewAny => rules.view_any,
        Action::View => rules.view,
        Action::Create => rules.create,
        Action::Update => rules.update,
        Action::Delete => rules.delete,
        // Sem soft delete no armazenamento, restaurar e expurgar ficam
        // reservados ao master.
        Action::Restore | Action::ForceDelete => Rule::Deny,
    };

    // Célula incondicional: vale para verificações de classe (view_any,
    // create) e dispensa o alvo.
    match rule {
        Rule::Allow => return Ok(true),
        Rule::Deny => return Ok(false),
        _ => {}
    }

    let Some(target) = target else {
        return Err(PolicyError::TargetRequired(action));
    };

    Ok(evaluate(rule, user, target))
}

fn evaluate<T: PolicyTarget>(rule: Rule, user: &User, target: &T) -> bool {
    let dono = target.consultor_id() == Some(user.id);
    // Igualdade de Option: quem não tem equipe nunca casa com uma equipe
    // concreta; dois lados sem equipe casam entre si.
    let mesma_equipe = user.equipe_id == target.equipe_id();

    match rule {
        Rule::Allow => true,
        Rule::Deny => false,
        Rule::SameTeam => mesma_equipe,
        Rule::Owner => dono,
        Rule::OwnerOrSameTeam => dono || mesma_equipe,
        Rule::SameTeamConsultor => target.cargo() == Some(Cargo::Consultor) && mesma_equipe,
    }
}

#[cfg(test)]
pub(crate) mod test_fixtures {
    use chrono::Utc;

    use crate::models::celular::Celular;
    use crate::models::equipe::Equipe;
    use crate::models::user::{Cargo, User};
    use crate::models::whatsapp::{StatusWhatsapp, WhatsappNumero};

    pub fn usuario(id: i64, cargo: Cargo, equipe_id: Option<i64>) -> User {
        User {
            id,
            name: format!("Pessoa {id}"),
            email: format!("pessoa{id}@famartcorp.com"),
            password_hash: String::new(),
            cargo,
            equipe_id,
            created_at: Utc::now(),
            updated_at: Utc::now(),
        }
    }

    pub fn celular(id: i64, consultor_id: i64, equipe_id: i64) -> Celular {
        Celular {
            id,
            marca: "Samsung".into(),
            modelo: "Galaxy A54".into(),
            imei: Some(format!("3500000000000{id:02}")),
            observacao: None,
            consultor_id,
            equipe_id,
            created_at: Utc::now(),
            updated_at: Utc::now(),
        }
    }

    pub fn equipe(id: i64) -> Equipe {
        Equipe {
            id,
            nome: format!("Equipe {id}"),
            gestor_id: None,
            created_at: Utc::now(),
            updated_at: Utc::now(),
        }
    }

    pub fn whatsapp(id: i64, consultor_id: i64, equipe_id: i64) -> WhatsappNumero {
        WhatsappNumero {
            id,
            numero: format!("+55119000000{id:02}"),
            status: StatusWhatsapp::Ativo,
            celular_id: 1,
            consultor_id,
            equipe_id,
            created_at: Utc::now(),
            updated_at: Utc::now(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::test_fixtures::{celular, equipe, usuario};
    use super::*;
    use crate::models::celular::Celular;
    use crate::models::equipe::Equipe;

    #[test]
    fn master_pode_tudo_em_qualquer_entidade() {
        let master = usuario(1, Cargo::Master, None);
        let alvo = celular(9, 5, 3);

        for action in [
            Action::ViewAny,
            Action::View,
            Action::Create,
            Action::Update,
            Action::Delete,
            Action::Restore,
            Action::ForceDelete,
        ] {
            assert_eq!(authorize(&master, action, Some(&alvo)), Ok(true));
        }
    }

    #[test]
    fn master_dispensa_o_alvo() {
        // O curto-circuito vem antes da exigência de instância.
        let master = usuario(1, Cargo::Master, None);
        assert_eq!(authorize::<Celular>(&master, Action::Update, None), Ok(true));
    }

    #[test]
    fn restaurar_e_expurgar_negados_fora_do_master() {
        let gestor = usuario(2, Cargo::Gestor, Some(1));
        let consultor = usuario(3, Cargo::Consultor, Some(1));
        let alvo = celular(9, 3, 1);

        assert_eq!(authorize(&gestor, Action::Restore, Some(&alvo)), Ok(false));
        assert_eq!(authorize(&gestor, Action::ForceDelete, Some(&alvo)), Ok(false));
        assert_eq!(authorize(&consultor, Action::Restore, Some(&alvo)), Ok(false));
        assert_eq!(authorize(&consultor, Action::ForceDelete, Some(&alvo)), Ok(false));
    }

    #[test]
    fn acao_de_instancia_sem_alvo_e_erro_de_chamador() {
        let gestor = usuario(2, Cargo::Gestor, Some(1));

        assert_eq!(
            authorize::<Celular>(&gestor, Action::Update, None),
            Err(PolicyError::TargetRequired(Action::Update))
        );
        assert_eq!(
            authorize::<Equipe>(&gestor, Action::View, None),
            Err(PolicyError::TargetRequired(Action::View))
        );
    }

    #[test]
    fn negacao_e_resultado_normal_e_nao_erro() {
        let consultor = usuario(3, Cargo::Consultor, Some(1));
        let alheio = celular(9, 4, 2);

        assert_eq!(authorize(&consultor, Action::Delete, Some(&alheio)), Ok(false));
    }

    #[test]
    fn decisao_e_idempotente() {
        let gestor = usuario(7, Cargo::Gestor, Some(2));
        let alvo = celular(9, 5, 2);

        let primeira = authorize(&gestor, Action::Update, Some(&alvo));
        let segunda = authorize(&gestor, Action::Update, Some(&alvo));
        assert_eq!(primeira, segunda);
    }

    #[test]
    fn principal_sem_equipe_nao_casa_com_equipe_concreta() {
        let gestor_sem_equipe = usuario(7, Cargo::Gestor, None);
        let alvo = celular(9, 5, 2);
        let equipe_concreta = equipe(2);

        assert_eq!(authorize(&gestor_sem_equipe, Action::View, Some(&alvo)), Ok(false));
        assert_eq!(
            authorize(&gestor_sem_equipe, Action::Update, Some(&equipe_concreta)),
            Ok(false)
        );
    }
}
