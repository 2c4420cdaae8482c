use yew::prelude::*;

use crate::hooks::use_auth;
use crate::session::MembershipClass;
use crate::views::Screen;

#[derive(Properties, PartialEq)]
pub struct SidebarProps {
    pub open: bool,
    pub current: Screen,
    pub on_navigate: Callback<Screen>,
}

/// Menú lateral. Las secciones administrativas solo aparecen para la clase
/// administradora; el catálogo y la cuenta son para todos.
#[function_component(Sidebar)]
pub fn sidebar(props: &SidebarProps) -> Html {
    let auth = use_auth();
    let is_admin = auth
        .session()
        .user
        .as_ref()
        .map(|u| MembershipClass::of(u).is_admin())
        .unwrap_or(false);

    let active_root = props.current.menu_root();

    let item = |label: &'static str, screen: Screen| -> Html {
        let class = if screen == active_root { "sidebar-item active" } else { "sidebar-item" };
        let on_navigate = props.on_navigate.clone();
        let target = screen.clone();
        let onclick = Callback::from(move |_: MouseEvent| on_navigate.emit(target.clone()));
        html! { <button {class} {onclick}>{ label }</button> }
    };

    let class = if props.open { "app-sidebar" } else { "app-sidebar closed" };

    html! {
        <nav {class}>
            <div class="sidebar-brand">{"🌙 MoonBar"}</div>
            { item("Inicio", Screen::Home) }
            if is_admin {
                <div class="sidebar-section">{"Administración"}</div>
                { item("Usuarios", Screen::Users) }
                { item("Grupos", Screen::Groups) }
                { item("Empresas", Screen::Companies) }
                { item("Registro de actividad", Screen::ActivityLog) }
            }
            <div class="sidebar-section">{"Catálogo"}</div>
            { item("Categorías", Screen::Categories) }
            { item("Productos", Screen::Products) }
            <div class="sidebar-section">{"Cuenta"}</div>
            { item("Cambiar contraseña", Screen::ChangePassword) }
        </nav>
    }
}
