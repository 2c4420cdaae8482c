use crate::models::{Company, CompanyUser, User};

/// Representación en memoria del actor autenticado y su alcance de tenants.
/// Nace vacía, se hidrata en el bootstrap y se reemplaza completa en cada
/// login/logout; nunca se parcha incrementalmente.
#[derive(Clone, Debug, PartialEq, Default)]
pub struct Session {
    pub token: Option<String>,
    pub is_authenticated: bool,
    pub user: Option<User>,
    pub companies: Vec<CompanyUser>,
    pub selected_company: Option<Company>,
}

impl Session {
    pub fn username(&self) -> Option<&str> {
        self.user.as_ref().map(|u| u.username.as_str())
    }

    /// Primer grupo del usuario, usado como etiqueta de perfil en el header.
    pub fn first_group(&self) -> Option<&str> {
        self.user
            .as_ref()
            .and_then(|u| u.groups.first())
            .map(|g| g.as_str())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_session_is_unauthenticated() {
        let session = Session::default();
        assert!(!session.is_authenticated);
        assert!(session.token.is_none());
        assert!(session.user.is_none());
        assert!(session.companies.is_empty());
        assert!(session.selected_company.is_none());
    }

    #[test]
    fn first_group_empty_without_user() {
        assert_eq!(Session::default().first_group(), None);
        assert_eq!(Session::default().username(), None);
    }
}
