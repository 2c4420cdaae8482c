use wasm_bindgen_futures::spawn_local;
use web_sys::HtmlInputElement;
use yew::prelude::*;

use crate::hooks::use_loading;
use crate::models::{Group, UserPayload};
use crate::services::{group_service, user_service};
use crate::views::Screen;

#[derive(Properties, PartialEq)]
pub struct UserFormProps {
    /// None crea; Some(id) edita
    pub user_id: Option<i64>,
    pub on_navigate: Callback<Screen>,
}

#[function_component(UserForm)]
pub fn user_form(props: &UserFormProps) -> Html {
    let loading = use_loading();
    let username = use_state(String::new);
    let email = use_state(String::new);
    let first_name = use_state(String::new);
    let last_name = use_state(String::new);
    let password = use_state(String::new);
    let is_active = use_state(|| true);
    let selected_groups = use_state(Vec::<String>::new);
    let groups = use_state(Vec::<Group>::new);
    let error = use_state(|| None::<String>);
    let saving = use_state(|| false);

    // Catálogo de grupos para los checkboxes
    {
        let groups = groups.clone();
        use_effect_with((), move |_| {
            spawn_local(async move {
                match group_service::get_all().await {
                    Ok(data) => groups.set(data),
                    Err(e) => log::error!("❌ Error cargando grupos: {}", e),
                }
            });
            || ()
        });
    }

    // En modo edición se precargan los datos del usuario
    {
        let username = username.clone();
        let email = email.clone();
        let first_name = first_name.clone();
        let last_name = last_name.clone();
        let is_active = is_active.clone();
        let selected_groups = selected_groups.clone();
        let error = error.clone();
        let loading = loading.clone();
        use_effect_with(props.user_id, move |user_id| {
            if let Some(id) = *user_id {
                spawn_local(async move {
                    loading.set(true);
                    match user_service::get_by_id(id).await {
                        Ok(user) => {
                            username.set(user.username);
                            email.set(user.email);
                            first_name.set(user.first_name);
                            last_name.set(user.last_name);
                            is_active.set(user.is_active);
                            selected_groups.set(user.groups);
                        }
                        Err(e) => {
                            log::error!("❌ Error cargando usuario: {}", e);
                            error.set(Some("Error al cargar el usuario".to_string()));
                        }
                    }
                    loading.set(false);
                });
            }
            || ()
        });
    }

    let text_input = |state: &UseStateHandle<String>| {
        let state = state.clone();
        Callback::from(move |e: InputEvent| {
            let input: HtmlInputElement = e.target_unchecked_into();
            state.set(input.value());
        })
    };

    let toggle_group = {
        let selected_groups = selected_groups.clone();
        Callback::from(move |name: String| {
            let mut current = (*selected_groups).clone();
            if let Some(pos) = current.iter().position(|g| g == &name) {
                current.remove(pos);
            } else {
                current.push(name);
            }
            selected_groups.set(current);
        })
    };

    let on_submit = {
        let username = username.clone();
        let email = email.clone();
        let first_name = first_name.clone();
        let last_name = last_name.clone();
        let password = password.clone();
        let is_active = is_active.clone();
        let selected_groups = selected_groups.clone();
        let error = error.clone();
        let saving = saving.clone();
        let user_id = props.user_id;
        let on_navigate = props.on_navigate.clone();

        Callback::from(move |e: SubmitEvent| {
            e.prevent_default();

            if username.trim().is_empty() || email.trim().is_empty() {
                error.set(Some("Usuario y email son obligatorios".to_string()));
                return;
            }
            if user_id.is_none() && password.is_empty() {
                error.set(Some("La contraseña es obligatoria al crear un usuario".to_string()));
                return;
            }

            let payload = UserPayload {
                username: (*username).clone(),
                password: if password.is_empty() { None } else { Some((*password).clone()) },
                email: (*email).clone(),
                first_name: (*first_name).clone(),
                last_name: (*last_name).clone(),
                is_active: *is_active,
                groups: (*selected_groups).clone(),
            };

            let error = error.clone();
            let saving = saving.clone();
            let on_navigate = on_navigate.clone();
            spawn_local(async move {
                saving.set(true);
                let result = match user_id {
                    Some(id) => user_service::update(id, &payload).await,
                    None => user_service::create(&payload).await,
                };
                saving.set(false);

                match result {
                    Ok(_) => on_navigate.emit(Screen::Users),
                    Err(e) => {
                        log::error!("❌ Error guardando usuario: {}", e);
                        error.set(Some("Error al guardar el usuario".to_string()));
                    }
                }
            });
        })
    };

    let on_cancel = {
        let on_navigate = props.on_navigate.clone();
        Callback::from(move |_: MouseEvent| on_navigate.emit(Screen::Users))
    };

    let title = if props.user_id.is_some() { "Editar Usuario" } else { "Nuevo Usuario" };

    html! {
        <div>
            <div class="screen-header">
                <h5>{ title }</h5>
                <p>{"Datos de la cuenta y perfiles asignados"}</p>
            </div>

            if let Some(error) = &*error {
                <div class="alert alert-danger">{ error.clone() }</div>
            }

            <form class="form-card" onsubmit={on_submit}>
                <div class="form-row">
                    <div class="form-group">
                        <label>{"Usuario"}</label>
                        <input type="text" value={(*username).clone()} oninput={text_input(&username)} />
                    </div>
                    <div class="form-group">
                        <label>{"Email"}</label>
                        <input type="email" value={(*email).clone()} oninput={text_input(&email)} />
                    </div>
                </div>
                <div class="form-row">
                    <div class="form-group">
                        <label>{"Nombre"}</label>
                        <input type="text" value={(*first_name).clone()} oninput={text_input(&first_name)} />
                    </div>
                    <div class="form-group">
                        <label>{"Apellido"}</label>
                        <input type="text" value={(*last_name).clone()} oninput={text_input(&last_name)} />
                    </div>
                </div>
                if props.user_id.is_none() {
                    <div class="form-group">
                        <label>{"Contraseña"}</label>
                        <input type="password" value={(*password).clone()} oninput={text_input(&password)} />
                    </div>
                }
                <div class="form-group">
                    <label>{"Perfiles"}</label>
                    <div class="group-checks">
                        { for groups.iter().map(|group| {
                            let name = group.name.clone();
                            let checked = selected_groups.contains(&name);
                            let toggle_group = toggle_group.clone();
                            let onchange = Callback::from(move |_: Event| toggle_group.emit(name.clone()));
                            html! {
                                <label class="checkbox-row">
                                    <input type="checkbox" {checked} {onchange} />
                                    { &group.name }
                                </label>
                            }
                        }) }
                    </div>
                </div>
                <label class="checkbox-row">
                    <input
                        type="checkbox"
                        checked={*is_active}
                        onchange={Callback::from({
                            let is_active = is_active.clone();
                            move |_: Event| is_active.set(!*is_active)
                        })}
                    />
                    {"Cuenta activa"}
                </label>
                <div class="form-actions">
                    <button type="submit" class="btn" disabled={*saving}>
                        { if *saving { "Guardando..." } else { "Guardar" } }
                    </button>
                    <button type="button" class="btn btn-secondary" onclick={on_cancel}>
                        {"Cancelar"}
                    </button>
                </div>
            </form>
        </div>
    }
}
