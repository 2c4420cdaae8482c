use yew::prelude::*;

use crate::hooks::use_auth;
use crate::models::CompanyUser;
use crate::session::MembershipClass;

#[derive(Properties, PartialEq)]
pub struct HeaderProps {
    pub on_toggle_sidebar: Callback<()>,
}

/// Barra superior: selector de empresa activa, usuario/perfil y logout. Solo
/// los usuarios de clase administradora con más de una membresía ven el
/// selector desplegable.
#[function_component(Header)]
pub fn header(props: &HeaderProps) -> Html {
    let auth = use_auth();
    let dropdown_open = use_state(|| false);

    let session = auth.session().clone();
    let is_admin = session
        .user
        .as_ref()
        .map(|u| MembershipClass::of(u).is_admin())
        .unwrap_or(false);

    let company_label = session
        .selected_company
        .as_ref()
        .map(|c| c.name.clone())
        .unwrap_or_else(|| "Sin empresa asignada".to_string());

    let toggle_dropdown = {
        let dropdown_open = dropdown_open.clone();
        Callback::from(move |_: MouseEvent| dropdown_open.set(!*dropdown_open))
    };

    let company_item = |membership: &CompanyUser| -> Html {
        let company = membership.company.clone();
        let select_company = auth.select_company.clone();
        let dropdown_open = dropdown_open.clone();
        let name = company.name.clone();
        let onclick = Callback::from(move |_: MouseEvent| {
            select_company.emit(company.clone());
            dropdown_open.set(false);
        });
        html! {
            <button class="company-dropdown-item" {onclick}>{ name }</button>
        }
    };

    html! {
        <header class="app-header">
            <button class="btn-ghost" onclick={props.on_toggle_sidebar.reform(|_: MouseEvent| ())}>
                {"☰"}
            </button>
            <div class="spacer"></div>
            <div class="header-chip">
                {"🏢"}
                if is_admin && session.companies.len() > 1 {
                    <div class="company-dropdown">
                        <button class="btn-ghost" onclick={toggle_dropdown}>
                            { company_label.clone() } {" ▾"}
                        </button>
                        if *dropdown_open {
                            <div class="company-dropdown-menu">
                                { for session.companies.iter().map(company_item) }
                            </div>
                        }
                    </div>
                } else {
                    <span>{ company_label }</span>
                }
            </div>
            <span class="header-chip">
                {"👤 Usuario: "}{ session.username().unwrap_or("-") }
            </span>
            <span class="header-chip">
                {"👥 Perfil: "}{ session.first_group().unwrap_or("Sin grupo") }
            </span>
            <button class="btn-ghost" onclick={auth.logout.reform(|_: MouseEvent| ())} title="Cerrar sesión">
                {"⏻"}
            </button>
        </header>
    }
}
