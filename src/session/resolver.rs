use crate::models::{Company, CompanyRole, CompanyUser, User};

/// Grupo que otorga alcance administrativo total aunque el usuario no tenga
/// los flags de superusuario.
pub const ADMIN_GROUP: &str = "Administrador";

/// Conjunto cerrado de estrategias de resolución de membresías. La
/// clasificación ocurre una sola vez por resolución; los llamadores hacen
/// match sobre el resultado en lugar de repetir chequeos booleanos.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MembershipClass {
    Superuser,
    SystemAdmin,
    Standard,
}

impl MembershipClass {
    pub fn of(user: &User) -> Self {
        if user.is_superuser {
            MembershipClass::Superuser
        } else if user.is_system_admin || user.groups.iter().any(|g| g == ADMIN_GROUP) {
            MembershipClass::SystemAdmin
        } else {
            MembershipClass::Standard
        }
    }

    /// Las clases administradoras ven todas las empresas.
    pub fn is_admin(self) -> bool {
        !matches!(self, MembershipClass::Standard)
    }
}

/// Una membresía admin sintetizada por empresa existente: los usuarios de
/// clase administradora son miembros de todos los tenants por definición de
/// alcance, no por una relación almacenada.
pub fn synthesize_admin_memberships(user: &User, companies: Vec<Company>) -> Vec<CompanyUser> {
    companies
        .into_iter()
        .map(|company| CompanyUser {
            id: company.id,
            username: user.username.clone(),
            full_name: user.full_name(),
            role: CompanyRole::Admin,
            is_company_admin: true,
            is_active: true,
            created_at: company.created_at.clone(),
            company,
        })
        .collect()
}

/// Selección efectiva de empresa: una selección persistida solo sobrevive si
/// sigue perteneciendo a la lista de membresías recién resuelta; si no, gana
/// la primera membresía.
pub fn effective_selection(stored: Option<Company>, memberships: &[CompanyUser]) -> Option<Company> {
    match stored {
        Some(company) if memberships.iter().any(|m| m.company.id == company.id) => Some(company),
        _ => memberships.first().map(|m| m.company.clone()),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn user(is_superuser: bool, is_system_admin: bool, groups: &[&str]) -> User {
        User {
            id: 1,
            username: "alice".to_string(),
            email: "alice@moonbar.app".to_string(),
            first_name: "Alice".to_string(),
            last_name: "Soto".to_string(),
            is_active: true,
            date_joined: "2023-01-10T00:00:00Z".to_string(),
            groups: groups.iter().map(|g| g.to_string()).collect(),
            is_superuser,
            is_system_admin,
        }
    }

    fn company(id: i64, name: &str) -> Company {
        Company {
            id,
            name: name.to_string(),
            business_name: format!("{} SpA", name),
            rut: "76.543.210-K".to_string(),
            email: format!("contacto@{}.cl", name.to_lowercase()),
            phone: "+56 9 1234 5678".to_string(),
            address: "Av. Principal 123".to_string(),
            is_active: true,
            website: None,
            description: None,
            created_at: "2023-05-01T12:00:00Z".to_string(),
            updated_at: "2023-05-01T12:00:00Z".to_string(),
            modules: None,
        }
    }

    fn membership(company: Company) -> CompanyUser {
        CompanyUser {
            id: company.id,
            username: "alice".to_string(),
            full_name: "Alice Soto".to_string(),
            role: CompanyRole::Staff,
            is_company_admin: false,
            is_active: true,
            created_at: company.created_at.clone(),
            company,
        }
    }

    #[test]
    fn classification_table() {
        assert_eq!(MembershipClass::of(&user(true, false, &[])), MembershipClass::Superuser);
        assert_eq!(MembershipClass::of(&user(false, true, &[])), MembershipClass::SystemAdmin);
        assert_eq!(
            MembershipClass::of(&user(false, false, &["Administrador"])),
            MembershipClass::SystemAdmin
        );
        assert_eq!(
            MembershipClass::of(&user(false, false, &["Ventas"])),
            MembershipClass::Standard
        );
        // is_superuser manda aunque existan otras marcas
        assert_eq!(
            MembershipClass::of(&user(true, true, &["Administrador"])),
            MembershipClass::Superuser
        );
    }

    #[test]
    fn admin_classes_are_admin() {
        assert!(MembershipClass::Superuser.is_admin());
        assert!(MembershipClass::SystemAdmin.is_admin());
        assert!(!MembershipClass::Standard.is_admin());
    }

    #[test]
    fn synthesized_memberships_cover_every_company_as_admin() {
        let admin = user(true, false, &[]);
        let companies = vec![company(1, "Andes"), company(2, "Pacifico"), company(3, "Austral")];
        let memberships = synthesize_admin_memberships(&admin, companies);

        assert_eq!(memberships.len(), 3);
        for membership in &memberships {
            assert_eq!(membership.role, CompanyRole::Admin);
            assert!(membership.is_company_admin);
            assert_eq!(membership.username, "alice");
        }
    }

    #[test]
    fn stored_selection_survives_if_still_member() {
        let memberships = vec![membership(company(1, "Andes")), membership(company(2, "Pacifico"))];
        let selected = effective_selection(Some(company(2, "Pacifico")), &memberships);
        assert_eq!(selected.map(|c| c.id), Some(2));
    }

    #[test]
    fn stale_selection_falls_back_to_first_membership() {
        let memberships = vec![membership(company(1, "Andes")), membership(company(2, "Pacifico"))];
        let selected = effective_selection(Some(company(99, "Extinta")), &memberships);
        assert_eq!(selected.map(|c| c.id), Some(1));
    }

    #[test]
    fn no_memberships_means_no_selection() {
        assert_eq!(effective_selection(Some(company(1, "Andes")), &[]), None);
        assert_eq!(effective_selection(None, &[]), None);
    }
}
