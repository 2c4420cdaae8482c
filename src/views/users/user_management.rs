use wasm_bindgen_futures::spawn_local;
use yew::prelude::*;

use crate::hooks::use_loading;
use crate::models::User;
use crate::services::user_service;
use crate::utils::format_date;
use crate::views::shared::{Column, ConfirmModal, DataTable, Toast, ToastMessage};
use crate::views::Screen;

/// Filtro de búsqueda en cliente: subcadena sobre id, usuario, nombres,
/// email y grupos.
pub fn filter_users(users: &[User], term: &str) -> Vec<User> {
    let term = term.trim().to_lowercase();
    if term.is_empty() {
        return users.to_vec();
    }

    users
        .iter()
        .filter(|user| {
            user.id.to_string().contains(&term)
                || user.username.to_lowercase().contains(&term)
                || user.first_name.to_lowercase().contains(&term)
                || user.last_name.to_lowercase().contains(&term)
                || user.email.to_lowercase().contains(&term)
                || user.groups.iter().any(|g| g.to_lowercase().contains(&term))
        })
        .cloned()
        .collect()
}

#[derive(Properties, PartialEq)]
pub struct UserManagementProps {
    pub on_navigate: Callback<Screen>,
}

#[function_component(UserManagement)]
pub fn user_management(props: &UserManagementProps) -> Html {
    let loading = use_loading();
    let users = use_state(Vec::<User>::new);
    let search_term = use_state(String::new);
    let error = use_state(|| None::<String>);
    let user_to_delete = use_state(|| None::<i64>);
    let toast = use_state(|| None::<ToastMessage>);

    let load_users = {
        let users = users.clone();
        let error = error.clone();
        let loading = loading.clone();
        Callback::from(move |_: ()| {
            let users = users.clone();
            let error = error.clone();
            let loading = loading.clone();
            spawn_local(async move {
                loading.set(true);
                match user_service::get_all().await {
                    Ok(data) => {
                        users.set(data);
                        error.set(None);
                    }
                    Err(e) => {
                        log::error!("❌ Error cargando usuarios: {}", e);
                        error.set(Some("Error al cargar los usuarios".to_string()));
                    }
                }
                loading.set(false);
            });
        })
    };

    {
        let load_users = load_users.clone();
        use_effect_with((), move |_| {
            load_users.emit(());
            || ()
        });
    }

    let on_search = {
        let search_term = search_term.clone();
        Callback::from(move |term: String| search_term.set(term))
    };

    let on_delete_confirm = {
        let user_to_delete = user_to_delete.clone();
        let toast = toast.clone();
        let loading = loading.clone();
        let load_users = load_users.clone();
        Callback::from(move |_: ()| {
            let Some(id) = *user_to_delete else { return };
            let user_to_delete = user_to_delete.clone();
            let toast = toast.clone();
            let loading = loading.clone();
            let load_users = load_users.clone();
            spawn_local(async move {
                loading.set(true);
                match user_service::delete(id).await {
                    Ok(()) => {
                        load_users.emit(());
                        toast.set(Some(ToastMessage::success("Usuario eliminado exitosamente")));
                    }
                    Err(e) => {
                        log::error!("❌ Error eliminando usuario: {}", e);
                        toast.set(Some(ToastMessage::danger("Error al eliminar el usuario")));
                    }
                }
                loading.set(false);
                user_to_delete.set(None);
            });
        })
    };

    let columns = {
        let on_navigate = props.on_navigate.clone();
        let user_to_delete = user_to_delete.clone();
        vec![
            Column::text("ID", |u: &User| u.id.to_string()),
            Column::text("Usuario", |u: &User| u.username.clone()),
            Column::text("Nombre", |u: &User| u.full_name()),
            Column::text("Perfil", |u: &User| u.groups.join(", ")),
            Column::text("Email", |u: &User| u.email.clone()),
            Column::text("Fecha Creación", |u: &User| format_date(&u.date_joined)),
            Column::new("Estado", |u: &User| {
                let class = if u.is_active { "badge bg-success" } else { "badge bg-danger" };
                let label = if u.is_active { "Activo" } else { "Inactivo" };
                html! { <span {class}>{ label }</span> }
            }),
            Column::new("Acciones", move |u: &User| {
                let edit = {
                    let on_navigate = on_navigate.clone();
                    let id = u.id;
                    Callback::from(move |_: MouseEvent| on_navigate.emit(Screen::UserEdit(id)))
                };
                let delete = {
                    let user_to_delete = user_to_delete.clone();
                    let id = u.id;
                    Callback::from(move |_: MouseEvent| user_to_delete.set(Some(id)))
                };
                html! {
                    <div class="btn-group">
                        <button class="btn btn-sm" onclick={edit}>{"✏️"}</button>
                        <button class="btn btn-sm btn-danger" onclick={delete}>{"🗑️"}</button>
                    </div>
                }
            }),
        ]
    };

    let filtered = filter_users(&users, &search_term);

    let new_user = {
        let on_navigate = props.on_navigate.clone();
        Callback::from(move |_: MouseEvent| on_navigate.emit(Screen::UserCreate))
    };

    html! {
        <div>
            <div class="screen-header">
                <h5>{"Gestión de Usuarios"}</h5>
                <p>{"Administración de usuarios del sistema"}</p>
            </div>

            if let Some(error) = &*error {
                <div class="alert alert-danger">{ error.clone() }</div>
            }

            <DataTable<User>
                columns={columns}
                data={filtered}
                on_search={Some(on_search)}
                actions={Some(html! {
                    <button class="btn" onclick={new_user}>{"➕ Nuevo Usuario"}</button>
                })}
                empty_text="No hay usuarios"
            />

            <ConfirmModal
                show={user_to_delete.is_some()}
                title="Confirmar Eliminación"
                message="¿Está seguro que desea eliminar este usuario? Esta acción no se puede deshacer."
                on_confirm={on_delete_confirm}
                on_cancel={Callback::from({
                    let user_to_delete = user_to_delete.clone();
                    move |_| user_to_delete.set(None)
                })}
            />

            <Toast
                message={(*toast).clone()}
                on_close={Callback::from({
                    let toast = toast.clone();
                    move |_| toast.set(None)
                })}
            />
        </div>
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn user(id: i64, username: &str, first: &str, email: &str, groups: &[&str]) -> User {
        User {
            id,
            username: username.to_string(),
            email: email.to_string(),
            first_name: first.to_string(),
            last_name: "Soto".to_string(),
            is_active: true,
            date_joined: "2023-01-10T00:00:00Z".to_string(),
            groups: groups.iter().map(|g| g.to_string()).collect(),
            is_superuser: false,
            is_system_admin: false,
        }
    }

    #[test]
    fn empty_term_returns_everything() {
        let users = vec![user(1, "alice", "Alice", "alice@x.cl", &[]), user(2, "bob", "Bob", "bob@x.cl", &[])];
        assert_eq!(filter_users(&users, "").len(), 2);
        assert_eq!(filter_users(&users, "   ").len(), 2);
    }

    #[test]
    fn matches_several_fields_case_insensitive() {
        let users = vec![
            user(10, "alice", "Alicia", "alice@moonbar.app", &["Ventas"]),
            user(20, "bruno", "Bruno", "bruno@moonbar.app", &["Administrador"]),
        ];

        assert_eq!(filter_users(&users, "ALICIA").len(), 1);
        assert_eq!(filter_users(&users, "administra")[0].username, "bruno");
        assert_eq!(filter_users(&users, "moonbar").len(), 2);
        assert_eq!(filter_users(&users, "10")[0].id, 10);
        assert!(filter_users(&users, "zeta").is_empty());
    }
}
