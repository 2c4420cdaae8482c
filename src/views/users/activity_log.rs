use wasm_bindgen_futures::spawn_local;
use web_sys::{HtmlInputElement, HtmlSelectElement};
use yew::prelude::*;

use crate::hooks::use_loading;
use crate::models::{ActivityLogEntry, ActivityType};
use crate::services::activity_service;
use crate::utils::format_datetime;
use crate::views::shared::{Column, DataTable};

/// Auditoría de sesiones: consulta filtrada del registro de actividad.
#[function_component(ActivityLogView)]
pub fn activity_log_view() -> Html {
    let loading = use_loading();
    let entries = use_state(Vec::<ActivityLogEntry>::new);
    let days = use_state(|| 7u32);
    let activity_type = use_state(String::new);
    let username = use_state(String::new);
    let error = use_state(|| None::<String>);

    let load_logs = {
        let entries = entries.clone();
        let days = days.clone();
        let activity_type = activity_type.clone();
        let username = username.clone();
        let error = error.clone();
        let loading = loading.clone();
        Callback::from(move |_: ()| {
            let entries = entries.clone();
            let error = error.clone();
            let loading = loading.clone();
            let days = *days;
            let kind = (*activity_type).clone();
            let user = (*username).clone();
            spawn_local(async move {
                loading.set(true);
                let kind = if kind.is_empty() { None } else { Some(kind.as_str()) };
                let user = if user.trim().is_empty() { None } else { Some(user.as_str()) };
                match activity_service::get_logs(days, kind, user).await {
                    Ok(data) => {
                        entries.set(data);
                        error.set(None);
                    }
                    Err(e) => {
                        log::error!("❌ Error cargando registro de actividad: {}", e);
                        error.set(Some("Error al cargar el registro de actividad".to_string()));
                    }
                }
                loading.set(false);
            });
        })
    };

    {
        let load_logs = load_logs.clone();
        use_effect_with((), move |_| {
            load_logs.emit(());
            || ()
        });
    }

    let on_days_change = {
        let days = days.clone();
        Callback::from(move |e: Event| {
            let select: HtmlSelectElement = e.target_unchecked_into();
            days.set(select.value().parse().unwrap_or(7));
        })
    };

    let on_type_change = {
        let activity_type = activity_type.clone();
        Callback::from(move |e: Event| {
            let select: HtmlSelectElement = e.target_unchecked_into();
            activity_type.set(select.value());
        })
    };

    let on_username_change = {
        let username = username.clone();
        Callback::from(move |e: InputEvent| {
            let input: HtmlInputElement = e.target_unchecked_into();
            username.set(input.value());
        })
    };

    let on_filter = {
        let load_logs = load_logs.clone();
        Callback::from(move |_: MouseEvent| load_logs.emit(()))
    };

    let columns = vec![
        Column::text("Fecha", |e: &ActivityLogEntry| format_datetime(&e.timestamp)),
        Column::text("Usuario", |e: &ActivityLogEntry| e.username.clone()),
        Column::text("Actividad", |e: &ActivityLogEntry| e.activity_type.clone()),
        Column::text("Detalles", |e: &ActivityLogEntry| e.details.clone()),
        Column::text("IP", |e: &ActivityLogEntry| {
            e.ip_address.clone().unwrap_or_else(|| "-".to_string())
        }),
    ];

    html! {
        <div>
            <div class="screen-header">
                <h5>{"Registro de Actividad"}</h5>
                <p>{"Eventos de seguridad de las sesiones"}</p>
            </div>

            if let Some(error) = &*error {
                <div class="alert alert-danger">{ error.clone() }</div>
            }

            <div class="filters-row">
                <div class="form-group">
                    <label>{"Período"}</label>
                    <select onchange={on_days_change}>
                        <option value="7" selected={*days == 7}>{"Últimos 7 días"}</option>
                        <option value="30" selected={*days == 30}>{"Últimos 30 días"}</option>
                        <option value="90" selected={*days == 90}>{"Últimos 90 días"}</option>
                    </select>
                </div>
                <div class="form-group">
                    <label>{"Actividad"}</label>
                    <select onchange={on_type_change}>
                        <option value="" selected={activity_type.is_empty()}>{"Todas"}</option>
                        { for ActivityType::ALL.iter().map(|kind| html! {
                            <option
                                value={kind.as_str()}
                                selected={*activity_type == kind.as_str()}
                            >
                                { kind.label() }
                            </option>
                        }) }
                    </select>
                </div>
                <div class="form-group">
                    <label>{"Usuario"}</label>
                    <input type="text" value={(*username).clone()} oninput={on_username_change} />
                </div>
                <button class="btn" onclick={on_filter}>{"Filtrar"}</button>
            </div>

            <DataTable<ActivityLogEntry>
                columns={columns}
                data={(*entries).clone()}
                empty_text="Sin actividad en el período"
            />
        </div>
    }
}
