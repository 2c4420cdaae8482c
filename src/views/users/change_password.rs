use wasm_bindgen_futures::spawn_local;
use web_sys::HtmlInputElement;
use yew::prelude::*;

use crate::models::ChangePasswordRequest;
use crate::services::user_service;

#[function_component(ChangePasswordView)]
pub fn change_password_view() -> Html {
    let current_password = use_state(String::new);
    let new_password = use_state(String::new);
    let confirm_password = use_state(String::new);
    let error = use_state(|| None::<String>);
    let success = use_state(|| None::<String>);
    let saving = use_state(|| false);

    let text_input = |state: &UseStateHandle<String>| {
        let state = state.clone();
        Callback::from(move |e: InputEvent| {
            let input: HtmlInputElement = e.target_unchecked_into();
            state.set(input.value());
        })
    };

    let on_submit = {
        let current_password = current_password.clone();
        let new_password = new_password.clone();
        let confirm_password = confirm_password.clone();
        let error = error.clone();
        let success = success.clone();
        let saving = saving.clone();

        Callback::from(move |e: SubmitEvent| {
            e.prevent_default();
            success.set(None);

            if current_password.is_empty() || new_password.is_empty() {
                error.set(Some("Completa todos los campos".to_string()));
                return;
            }
            if *new_password != *confirm_password {
                error.set(Some("La confirmación no coincide con la nueva contraseña".to_string()));
                return;
            }

            let request = ChangePasswordRequest {
                current_password: (*current_password).clone(),
                new_password: (*new_password).clone(),
            };

            let current_password = current_password.clone();
            let new_password = new_password.clone();
            let confirm_password = confirm_password.clone();
            let error = error.clone();
            let success = success.clone();
            let saving = saving.clone();
            spawn_local(async move {
                saving.set(true);
                match user_service::change_password(&request).await {
                    Ok(()) => {
                        error.set(None);
                        success.set(Some("Contraseña actualizada exitosamente".to_string()));
                        current_password.set(String::new());
                        new_password.set(String::new());
                        confirm_password.set(String::new());
                    }
                    Err(e) => {
                        log::error!("❌ Error cambiando contraseña: {}", e);
                        error.set(Some("Error al cambiar la contraseña".to_string()));
                    }
                }
                saving.set(false);
            });
        })
    };

    html! {
        <div>
            <div class="screen-header">
                <h5>{"Cambiar Contraseña"}</h5>
                <p>{"Actualiza la contraseña de tu cuenta"}</p>
            </div>

            if let Some(error) = &*error {
                <div class="alert alert-danger">{ error.clone() }</div>
            }
            if let Some(success) = &*success {
                <div class="alert alert-success">{ success.clone() }</div>
            }

            <form class="form-card" onsubmit={on_submit}>
                <div class="form-group">
                    <label>{"Contraseña actual"}</label>
                    <input
                        type="password"
                        value={(*current_password).clone()}
                        oninput={text_input(&current_password)}
                    />
                </div>
                <div class="form-group">
                    <label>{"Nueva contraseña"}</label>
                    <input
                        type="password"
                        value={(*new_password).clone()}
                        oninput={text_input(&new_password)}
                    />
                </div>
                <div class="form-group">
                    <label>{"Confirmar nueva contraseña"}</label>
                    <input
                        type="password"
                        value={(*confirm_password).clone()}
                        oninput={text_input(&confirm_password)}
                    />
                </div>
                <div class="form-actions">
                    <button type="submit" class="btn" disabled={*saving}>
                        { if *saving { "Guardando..." } else { "Cambiar contraseña" } }
                    </button>
                </div>
            </form>
        </div>
    }
}
