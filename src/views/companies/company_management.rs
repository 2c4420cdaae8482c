use wasm_bindgen_futures::spawn_local;
use web_sys::HtmlInputElement;
use yew::prelude::*;

use crate::hooks::use_loading;
use crate::models::{Company, CompanyPayload};
use crate::services::company_service;
use crate::utils::format_date;
use crate::views::shared::{Column, ConfirmModal, DataTable, Toast, ToastMessage};

/// Filtro en cliente sobre nombre, razón social, RUT y email.
pub fn filter_companies(companies: &[Company], term: &str) -> Vec<Company> {
    let term = term.trim().to_lowercase();
    if term.is_empty() {
        return companies.to_vec();
    }

    companies
        .iter()
        .filter(|company| {
            company.name.to_lowercase().contains(&term)
                || company.business_name.to_lowercase().contains(&term)
                || company.rut.to_lowercase().contains(&term)
                || company.email.to_lowercase().contains(&term)
        })
        .cloned()
        .collect()
}

/// Pantalla de empresas: listado + formulario embebido de creación/edición.
#[function_component(CompanyManagement)]
pub fn company_management() -> Html {
    let loading = use_loading();
    let companies = use_state(Vec::<Company>::new);
    let search_term = use_state(String::new);
    let error = use_state(|| None::<String>);
    let toast = use_state(|| None::<ToastMessage>);
    let company_to_delete = use_state(|| None::<i64>);

    // Formulario: visible + empresa en edición (None = creación)
    let show_form = use_state(|| false);
    let editing_id = use_state(|| None::<i64>);
    let name = use_state(String::new);
    let business_name = use_state(String::new);
    let rut = use_state(String::new);
    let email = use_state(String::new);
    let phone = use_state(String::new);
    let address = use_state(String::new);
    let website = use_state(String::new);
    let description = use_state(String::new);
    let is_active = use_state(|| true);

    let load_companies = {
        let companies = companies.clone();
        let error = error.clone();
        let loading = loading.clone();
        Callback::from(move |_: ()| {
            let companies = companies.clone();
            let error = error.clone();
            let loading = loading.clone();
            spawn_local(async move {
                loading.set(true);
                match company_service::get_all().await {
                    Ok(data) => {
                        companies.set(data);
                        error.set(None);
                    }
                    Err(e) => {
                        log::error!("❌ Error cargando empresas: {}", e);
                        error.set(Some("Error al cargar las empresas".to_string()));
                    }
                }
                loading.set(false);
            });
        })
    };

    {
        let load_companies = load_companies.clone();
        use_effect_with((), move |_| {
            load_companies.emit(());
            || ()
        });
    }

    let reset_form = {
        let show_form = show_form.clone();
        let editing_id = editing_id.clone();
        let name = name.clone();
        let business_name = business_name.clone();
        let rut = rut.clone();
        let email = email.clone();
        let phone = phone.clone();
        let address = address.clone();
        let website = website.clone();
        let description = description.clone();
        let is_active = is_active.clone();
        Callback::from(move |_: ()| {
            show_form.set(false);
            editing_id.set(None);
            name.set(String::new());
            business_name.set(String::new());
            rut.set(String::new());
            email.set(String::new());
            phone.set(String::new());
            address.set(String::new());
            website.set(String::new());
            description.set(String::new());
            is_active.set(true);
        })
    };

    let open_create = {
        let reset_form = reset_form.clone();
        let show_form = show_form.clone();
        Callback::from(move |_: MouseEvent| {
            reset_form.emit(());
            show_form.set(true);
        })
    };

    let open_edit = {
        let show_form = show_form.clone();
        let editing_id = editing_id.clone();
        let name = name.clone();
        let business_name = business_name.clone();
        let rut = rut.clone();
        let email = email.clone();
        let phone = phone.clone();
        let address = address.clone();
        let website = website.clone();
        let description = description.clone();
        let is_active = is_active.clone();
        Callback::from(move |company: Company| {
            editing_id.set(Some(company.id));
            name.set(company.name);
            business_name.set(company.business_name);
            rut.set(company.rut);
            email.set(company.email);
            phone.set(company.phone);
            address.set(company.address);
            website.set(company.website.unwrap_or_default());
            description.set(company.description.unwrap_or_default());
            is_active.set(company.is_active);
            show_form.set(true);
        })
    };

    let on_submit = {
        let editing_id = editing_id.clone();
        let name = name.clone();
        let business_name = business_name.clone();
        let rut = rut.clone();
        let email = email.clone();
        let phone = phone.clone();
        let address = address.clone();
        let website = website.clone();
        let description = description.clone();
        let is_active = is_active.clone();
        let error = error.clone();
        let toast = toast.clone();
        let reset_form = reset_form.clone();
        let load_companies = load_companies.clone();

        Callback::from(move |e: SubmitEvent| {
            e.prevent_default();

            if name.trim().is_empty() || rut.trim().is_empty() {
                error.set(Some("Nombre y RUT son obligatorios".to_string()));
                return;
            }

            let payload = CompanyPayload {
                name: (*name).clone(),
                business_name: (*business_name).clone(),
                rut: (*rut).clone(),
                email: (*email).clone(),
                phone: (*phone).clone(),
                address: (*address).clone(),
                website: if website.is_empty() { None } else { Some((*website).clone()) },
                description: if description.is_empty() { None } else { Some((*description).clone()) },
                is_active: *is_active,
            };
            let editing = *editing_id;

            let error = error.clone();
            let toast = toast.clone();
            let reset_form = reset_form.clone();
            let load_companies = load_companies.clone();
            spawn_local(async move {
                let result = match editing {
                    Some(id) => company_service::update(id, &payload).await,
                    None => company_service::create(&payload).await,
                };

                match result {
                    Ok(_) => {
                        reset_form.emit(());
                        load_companies.emit(());
                        error.set(None);
                        toast.set(Some(ToastMessage::success("Empresa guardada exitosamente")));
                    }
                    Err(e) => {
                        log::error!("❌ Error guardando empresa: {}", e);
                        error.set(Some("Error al guardar la empresa".to_string()));
                    }
                }
            });
        })
    };

    let on_delete_confirm = {
        let company_to_delete = company_to_delete.clone();
        let load_companies = load_companies.clone();
        let toast = toast.clone();
        Callback::from(move |_: ()| {
            let Some(id) = *company_to_delete else { return };
            let company_to_delete = company_to_delete.clone();
            let load_companies = load_companies.clone();
            let toast = toast.clone();
            spawn_local(async move {
                match company_service::delete(id).await {
                    Ok(()) => {
                        load_companies.emit(());
                        toast.set(Some(ToastMessage::success("Empresa eliminada exitosamente")));
                    }
                    Err(e) => {
                        log::error!("❌ Error eliminando empresa: {}", e);
                        toast.set(Some(ToastMessage::danger("Error al eliminar la empresa")));
                    }
                }
                company_to_delete.set(None);
            });
        })
    };

    let text_input = |state: &UseStateHandle<String>| {
        let state = state.clone();
        Callback::from(move |e: InputEvent| {
            let input: HtmlInputElement = e.target_unchecked_into();
            state.set(input.value());
        })
    };

    let columns = {
        let open_edit = open_edit.clone();
        let company_to_delete = company_to_delete.clone();
        vec![
            Column::text("ID", |c: &Company| c.id.to_string()),
            Column::text("Nombre", |c: &Company| c.name.clone()),
            Column::text("Razón Social", |c: &Company| c.business_name.clone()),
            Column::text("RUT", |c: &Company| c.rut.clone()),
            Column::text("Email", |c: &Company| c.email.clone()),
            Column::text("Creada", |c: &Company| format_date(&c.created_at)),
            Column::new("Estado", |c: &Company| {
                let class = if c.is_active { "badge bg-success" } else { "badge bg-danger" };
                let label = if c.is_active { "Activa" } else { "Inactiva" };
                html! { <span {class}>{ label }</span> }
            }),
            Column::new("Acciones", move |c: &Company| {
                let edit = {
                    let open_edit = open_edit.clone();
                    let company = c.clone();
                    Callback::from(move |_: MouseEvent| open_edit.emit(company.clone()))
                };
                let delete = {
                    let company_to_delete = company_to_delete.clone();
                    let id = c.id;
                    Callback::from(move |_: MouseEvent| company_to_delete.set(Some(id)))
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

    let filtered = filter_companies(&companies, &search_term);

    html! {
        <div>
            <div class="screen-header">
                <h5>{"Gestión de Empresas"}</h5>
                <p>{"Tenants habilitados en la plataforma"}</p>
            </div>

            if let Some(error) = &*error {
                <div class="alert alert-danger">{ error.clone() }</div>
            }

            if *show_form {
                <form class="form-card" onsubmit={on_submit}>
                    <div class="form-row">
                        <div class="form-group">
                            <label>{"Nombre"}</label>
                            <input type="text" value={(*name).clone()} oninput={text_input(&name)} />
                        </div>
                        <div class="form-group">
                            <label>{"Razón Social"}</label>
                            <input type="text" value={(*business_name).clone()} oninput={text_input(&business_name)} />
                        </div>
                    </div>
                    <div class="form-row">
                        <div class="form-group">
                            <label>{"RUT"}</label>
                            <input type="text" value={(*rut).clone()} oninput={text_input(&rut)} />
                        </div>
                        <div class="form-group">
                            <label>{"Email"}</label>
                            <input type="email" value={(*email).clone()} oninput={text_input(&email)} />
                        </div>
                    </div>
                    <div class="form-row">
                        <div class="form-group">
                            <label>{"Teléfono"}</label>
                            <input type="text" value={(*phone).clone()} oninput={text_input(&phone)} />
                        </div>
                        <div class="form-group">
                            <label>{"Dirección"}</label>
                            <input type="text" value={(*address).clone()} oninput={text_input(&address)} />
                        </div>
                    </div>
                    <div class="form-group">
                        <label>{"Sitio web"}</label>
                        <input type="text" value={(*website).clone()} oninput={text_input(&website)} />
                    </div>
                    <div class="form-group">
                        <label>{"Descripción"}</label>
                        <input type="text" value={(*description).clone()} oninput={text_input(&description)} />
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
                        {"Empresa activa"}
                    </label>
                    <div class="form-actions">
                        <button type="submit" class="btn">{"Guardar"}</button>
                        <button
                            type="button"
                            class="btn btn-secondary"
                            onclick={Callback::from({
                                let reset_form = reset_form.clone();
                                move |_: MouseEvent| reset_form.emit(())
                            })}
                        >
                            {"Cancelar"}
                        </button>
                    </div>
                </form>
            }

            <DataTable<Company>
                columns={columns}
                data={filtered}
                on_search={Some(Callback::from({
                    let search_term = search_term.clone();
                    move |term: String| search_term.set(term)
                }))}
                actions={Some(html! {
                    <button class="btn" onclick={open_create}>{"➕ Nueva Empresa"}</button>
                })}
                empty_text="No hay empresas"
            />

            <ConfirmModal
                show={company_to_delete.is_some()}
                title="Confirmar Eliminación"
                message="¿Está seguro que desea eliminar esta empresa? Esta acción no se puede deshacer."
                on_confirm={on_delete_confirm}
                on_cancel={Callback::from({
                    let company_to_delete = company_to_delete.clone();
                    move |_| company_to_delete.set(None)
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

    fn company(id: i64, name: &str, rut: &str) -> Company {
        Company {
            id,
            name: name.to_string(),
            business_name: format!("{} SpA", name),
            rut: rut.to_string(),
            email: format!("contacto@{}.cl", name.to_lowercase()),
            phone: String::new(),
            address: String::new(),
            is_active: true,
            website: None,
            description: None,
            created_at: "2023-05-01T12:00:00Z".to_string(),
            updated_at: "2023-05-01T12:00:00Z".to_string(),
            modules: None,
        }
    }

    #[test]
    fn filters_by_name_rut_and_email() {
        let companies = vec![company(1, "Andes", "76.111.111-1"), company(2, "Pacifico", "76.222.222-2")];

        assert_eq!(filter_companies(&companies, "andes").len(), 1);
        assert_eq!(filter_companies(&companies, "76.222")[0].id, 2);
        assert_eq!(filter_companies(&companies, "contacto@").len(), 2);
        assert!(filter_companies(&companies, "inexistente").is_empty());
    }

    #[test]
    fn empty_term_returns_everything() {
        let companies = vec![company(1, "Andes", "76.111.111-1")];
        assert_eq!(filter_companies(&companies, " ").len(), 1);
    }
}
