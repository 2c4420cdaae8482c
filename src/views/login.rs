use web_sys::HtmlInputElement;
use yew::prelude::*;

use crate::hooks::use_auth;

/// Pantalla de inicio de sesión. El error de autenticación llega desde el
/// contexto y se muestra inline sobre el formulario.
#[function_component(LoginView)]
pub fn login_view() -> Html {
    let auth = use_auth();
    let username = use_state(String::new);
    let password = use_state(String::new);
    let validation = use_state(|| None::<String>);

    let on_username_change = {
        let username = username.clone();
        Callback::from(move |e: InputEvent| {
            let input: HtmlInputElement = e.target_unchecked_into();
            username.set(input.value());
        })
    };

    let on_password_change = {
        let password = password.clone();
        Callback::from(move |e: InputEvent| {
            let input: HtmlInputElement = e.target_unchecked_into();
            password.set(input.value());
        })
    };

    let on_submit = {
        let username = username.clone();
        let password = password.clone();
        let validation = validation.clone();
        let login = auth.login.clone();

        Callback::from(move |e: SubmitEvent| {
            e.prevent_default();

            let username_val = (*username).clone();
            let password_val = (*password).clone();

            if username_val.trim().is_empty() || password_val.is_empty() {
                validation.set(Some("Por favor, completa todos los campos".to_string()));
                return;
            }

            validation.set(None);
            login.emit((username_val, password_val));
        })
    };

    let error = (*validation)
        .clone()
        .or_else(|| auth.state.login_error.clone());

    html! {
        <div class="login-screen">
            <div class="login-container">
                <div class="login-header">
                    <div class="login-logo">{"🌙"}</div>
                    <h1>{"MoonBar"}</h1>
                    <p>{"Panel de administración"}</p>
                </div>

                if let Some(error) = error {
                    <div class="alert alert-danger">{ error }</div>
                }

                <form class="login-form" onsubmit={on_submit}>
                    <div class="form-group">
                        <label for="username">{"Usuario"}</label>
                        <input
                            type="text"
                            id="username"
                            name="username"
                            placeholder="Ingresa tu usuario"
                            value={(*username).clone()}
                            oninput={on_username_change}
                        />
                    </div>

                    <div class="form-group">
                        <label for="password">{"Contraseña"}</label>
                        <input
                            type="password"
                            id="password"
                            name="password"
                            placeholder="Ingresa tu contraseña"
                            value={(*password).clone()}
                            oninput={on_password_change}
                        />
                    </div>

                    <button type="submit" class="btn-login">
                        {"Iniciar Sesión"}
                    </button>
                </form>
            </div>
        </div>
    }
}
