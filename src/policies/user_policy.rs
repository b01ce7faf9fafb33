// src/policies/user_policy.rs

use crate::models::user::{Cargo, User};
use crate::policies::{PolicyTable, PolicyTarget, Rule, RoleRules};

impl PolicyTarget for User {
    const REGRAS: PolicyTable = PolicyTable {
        gestor: RoleRules {
            view_any: Rule::Allow,
            view: Rule::SameTeam,
            create: Rule::Allow,
            update: Rule::SameTeam,
            // Gestor só exclui consultores da própria equipe, nunca
            // outro gestor ou master.
            delete: Rule::SameTeamConsultor,
        },
        consultor: RoleRules {
            view_any: Rule::Allow,
            view: Rule::OwnerOrSameTeam,
            create: Rule::Deny,
            update: Rule::Owner,
            delete: Rule::Deny,
        },
    };

    // Um usuário é dono de si mesmo.
    fn consultor_id(&self) -> Option<i64> {
        Some(self.id)
    }

    fn equipe_id(&self) -> Option<i64> {
        self.equipe_id
    }

    fn cargo(&self) -> Option<Cargo> {
        Some(self.cargo)
    }
}

#[cfg(test)]
mod tests {
    use crate::models::user::{Cargo, User};
    use crate::policies::test_fixtures::usuario;
    use crate::policies::{authorize, Action};

    #[test]
    fn consultor_edita_somente_a_si_mesmo() {
        let consultor = usuario(5, Cargo::Consultor, Some(2));
        let ele_mesmo = usuario(5, Cargo::Consultor, Some(2));
        let colega = usuario(8, Cargo::Consultor, Some(2));

        assert_eq!(authorize(&consultor, Action::Update, Some(&ele_mesmo)), Ok(true));
        assert_eq!(authorize(&consultor, Action::Update, Some(&colega)), Ok(false));
    }

    #[test]
    fn consultor_ve_a_si_mesmo_fora_de_qualquer_equipe() {
        // Sem equipe dos dois lados o auto-acesso continua valendo pela
        // regra de dono.
        let consultor = usuario(5, Cargo::Consultor, None);
        let ele_mesmo = usuario(5, Cargo::Consultor, None);

        assert_eq!(authorize(&consultor, Action::View, Some(&ele_mesmo)), Ok(true));
        assert_eq!(authorize(&consultor, Action::Update, Some(&ele_mesmo)), Ok(true));
    }

    #[test]
    fn consultor_ve_colegas_da_mesma_equipe() {
        let consultor = usuario(5, Cargo::Consultor, Some(2));
        let colega = usuario(8, Cargo::Consultor, Some(2));
        let de_outra = usuario(9, Cargo::Consultor, Some(3));

        assert_eq!(authorize(&consultor, Action::View, Some(&colega)), Ok(true));
        assert_eq!(authorize(&consultor, Action::View, Some(&de_outra)), Ok(false));
    }

    #[test]
    fn gestor_exclui_apenas_consultor_da_propria_equipe() {
        let gestor = usuario(7, Cargo::Gestor, Some(2));
        let consultor_da_equipe = usuario(5, Cargo::Consultor, Some(2));
        let consultor_de_fora = usuario(6, Cargo::Consultor, Some(3));
        let outro_gestor = usuario(10, Cargo::Gestor, Some(2));

        assert_eq!(
            authorize(&gestor, Action::Delete, Some(&consultor_da_equipe)),
            Ok(true)
        );
        assert_eq!(
            authorize(&gestor, Action::Delete, Some(&consultor_de_fora)),
            Ok(false)
        );
        // Mesmo na mesma equipe, o alvo precisa ser consultor.
        assert_eq!(authorize(&gestor, Action::Delete, Some(&outro_gestor)), Ok(false));
    }

    #[test]
    fn gestor_cria_usuarios_e_edita_a_equipe() {
        let gestor = usuario(7, Cargo::Gestor, Some(2));
        let membro = usuario(5, Cargo::Consultor, Some(2));
        let de_fora = usuario(6, Cargo::Consultor, Some(3));

        assert_eq!(authorize::<User>(&gestor, Action::Create, None), Ok(true));
        assert_eq!(authorize(&gestor, Action::Update, Some(&membro)), Ok(true));
        assert_eq!(authorize(&gestor, Action::Update, Some(&de_fora)), Ok(false));
    }

    #[test]
    fn gestor_sem_equipe_alcanca_apenas_usuarios_sem_equipe() {
        let gestor = usuario(7, Cargo::Gestor, None);
        let sem_equipe = usuario(5, Cargo::Consultor, None);
        let com_equipe = usuario(6, Cargo::Consultor, Some(1));

        assert_eq!(authorize(&gestor, Action::View, Some(&sem_equipe)), Ok(true));
        assert_eq!(authorize(&gestor, Action::View, Some(&com_equipe)), Ok(false));
    }
}
