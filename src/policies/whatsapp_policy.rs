// src/policies/whatsapp_policy.rs

use crate::models::whatsapp::WhatsappNumero;
use crate::policies::{PolicyTable, PolicyTarget, Rule, RoleRules};

// Mesmo formato de regras do celular: o número herda a visibilidade do
// vínculo consultor/equipe gravado na própria linha.
impl PolicyTarget for WhatsappNumero {
    const REGRAS: PolicyTable = PolicyTable {
        gestor: RoleRules {
            view_any: Rule::Allow,
            view: Rule::SameTeam,
            create: Rule::Allow,
            update: Rule::SameTeam,
            delete: Rule::SameTeam,
        },
        consultor: RoleRules {
            view_any: Rule::Allow,
            view: Rule::OwnerOrSameTeam,
            create: Rule::Deny,
            update: Rule::Owner,
            delete: Rule::Deny,
        },
    };

    fn consultor_id(&self) -> Option<i64> {
        Some(self.consultor_id)
    }

    fn equipe_id(&self) -> Option<i64> {
        Some(self.equipe_id)
    }
}

#[cfg(test)]
mod tests {
    use crate::models::user::Cargo;
    use crate::models::whatsapp::WhatsappNumero;
    use crate::policies::test_fixtures::{usuario, whatsapp};
    use crate::policies::{authorize, Action};

    #[test]
    fn dono_edita_mas_nao_exclui() {
        let consultor = usuario(5, Cargo::Consultor, Some(2));
        let proprio = whatsapp(1, 5, 2);

        assert_eq!(authorize(&consultor, Action::Update, Some(&proprio)), Ok(true));
        assert_eq!(authorize(&consultor, Action::Delete, Some(&proprio)), Ok(false));
    }

    #[test]
    fn colega_de_equipe_ve_mas_nao_edita() {
        let consultor = usuario(5, Cargo::Consultor, Some(2));
        let do_colega = whatsapp(1, 8, 2);

        assert_eq!(authorize(&consultor, Action::View, Some(&do_colega)), Ok(true));
        assert_eq!(authorize(&consultor, Action::Update, Some(&do_colega)), Ok(false));
    }

    #[test]
    fn gestor_administra_numeros_da_propria_equipe() {
        let gestor = usuario(7, Cargo::Gestor, Some(2));
        let da_equipe = whatsapp(1, 5, 2);
        let de_fora = whatsapp(2, 6, 4);

        assert_eq!(authorize(&gestor, Action::Delete, Some(&da_equipe)), Ok(true));
        assert_eq!(authorize(&gestor, Action::Delete, Some(&de_fora)), Ok(false));
    }

    #[test]
    fn consultor_nao_cria_numero() {
        let consultor = usuario(5, Cargo::Consultor, Some(2));
        assert_eq!(
            authorize::<WhatsappNumero>(&consultor, Action::Create, None),
            Ok(false)
        );
    }
}
