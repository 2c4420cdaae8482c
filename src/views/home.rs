use yew::prelude::*;

use crate::hooks::use_auth;
use crate::session::MembershipClass;
use crate::views::Screen;

#[derive(Properties, PartialEq)]
pub struct HomeViewProps {
    pub on_navigate: Callback<Screen>,
}

#[function_component(HomeView)]
pub fn home_view(props: &HomeViewProps) -> Html {
    let auth = use_auth();
    let session = auth.session().clone();

    let is_admin = session
        .user
        .as_ref()
        .map(|u| MembershipClass::of(u).is_admin())
        .unwrap_or(false);

    let greeting = session
        .user
        .as_ref()
        .map(|u| {
            if u.first_name.is_empty() {
                u.username.clone()
            } else {
                u.full_name()
            }
        })
        .unwrap_or_else(|| "Usuario".to_string());

    let company = session
        .selected_company
        .as_ref()
        .map(|c| c.name.clone())
        .unwrap_or_else(|| "Sin empresa asignada".to_string());

    let card = |title: &'static str, text: &'static str, screen: Screen| -> Html {
        let on_navigate = props.on_navigate.clone();
        let onclick = Callback::from(move |_: MouseEvent| on_navigate.emit(screen.clone()));
        html! {
            <div class="home-card" {onclick}>
                <h6>{ title }</h6>
                <p>{ text }</p>
            </div>
        }
    };

    html! {
        <div>
            <div class="screen-header">
                <h5>{ format!("Bienvenido, {}", greeting) }</h5>
                <p>{ format!("Empresa activa: {}", company) }</p>
            </div>
            <div class="home-grid">
                if is_admin {
                    { card("Usuarios", "Cuentas, perfiles y accesos", Screen::Users) }
                    { card("Empresas", "Tenants y módulos habilitados", Screen::Companies) }
                    { card("Registro de actividad", "Auditoría de sesiones", Screen::ActivityLog) }
                }
                { card("Productos", "Catálogo y stock", Screen::Products) }
                { card("Categorías", "Organización del catálogo", Screen::Categories) }
                { card("Cambiar contraseña", "Seguridad de tu cuenta", Screen::ChangePassword) }
            </div>
        </div>
    }
}
