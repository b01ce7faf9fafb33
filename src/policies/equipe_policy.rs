// src/policies/equipe_policy.rs

use crate::models::equipe::Equipe;
use crate::policies::{PolicyTable, PolicyTarget, Rule, RoleRules};

impl PolicyTarget for Equipe {
    const REGRAS: PolicyTable = PolicyTable {
        gestor: RoleRules {
            view_any: Rule::Allow,
            view: Rule::SameTeam,
            create: Rule::Deny,
            update: Rule::SameTeam,
            delete: Rule::Deny,
        },
        consultor: RoleRules {
            view_any: Rule::Allow,
            view: Rule::SameTeam,
            create: Rule::Deny,
            update: Rule::Deny,
            delete: Rule::Deny,
        },
    };

    // O escopo de equipe de uma equipe é ela mesma.
    fn equipe_id(&self) -> Option<i64> {
        Some(self.id)
    }
}

#[cfg(test)]
mod tests {
    use crate::models::equipe::Equipe;
    use crate::models::user::Cargo;
    use crate::policies::test_fixtures::{equipe, usuario};
    use crate::policies::{authorize, Action};

    #[test]
    fn gestor_edita_a_propria_equipe_e_nenhuma_outra() {
        let gestor = usuario(7, Cargo::Gestor, Some(2));

        assert_eq!(authorize(&gestor, Action::Update, Some(&equipe(2))), Ok(true));
        assert_eq!(authorize(&gestor, Action::Update, Some(&equipe(4))), Ok(false));
    }

    #[test]
    fn membros_veem_apenas_a_propria_equipe() {
        let consultor = usuario(5, Cargo::Consultor, Some(2));

        assert_eq!(authorize(&consultor, Action::View, Some(&equipe(2))), Ok(true));
        assert_eq!(authorize(&consultor, Action::View, Some(&equipe(3))), Ok(false));
    }

    #[test]
    fn criar_e_excluir_equipe_sao_exclusivos_do_master() {
        let gestor = usuario(7, Cargo::Gestor, Some(2));
        let consultor = usuario(5, Cargo::Consultor, Some(2));
        let master = usuario(1, Cargo::Master, None);

        assert_eq!(authorize::<Equipe>(&gestor, Action::Create, None), Ok(false));
        assert_eq!(authorize::<Equipe>(&consultor, Action::Create, None), Ok(false));
        assert_eq!(authorize::<Equipe>(&master, Action::Create, None), Ok(true));

        assert_eq!(authorize(&gestor, Action::Delete, Some(&equipe(2))), Ok(false));
        assert_eq!(authorize(&master, Action::Delete, Some(&equipe(2))), Ok(true));
    }

    #[test]
    fn consultor_sem_campo_extra_nao_cria_equipe() {
        // Negado independente de id ou equipe do chamador.
        let sem_equipe = usuario(50, Cargo::Consultor, None);
        assert_eq!(authorize::<Equipe>(&sem_equipe, Action::Create, None), Ok(false));
    }
}
