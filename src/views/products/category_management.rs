use wasm_bindgen_futures::spawn_local;
use web_sys::HtmlInputElement;
use yew::prelude::*;

use crate::hooks::use_loading;
use crate::models::{Category, CategoryPayload};
use crate::services::product_service;
use crate::views::shared::{Column, ConfirmModal, DataTable, Toast, ToastMessage};

pub fn filter_categories(categories: &[Category], term: &str) -> Vec<Category> {
    let term = term.trim().to_lowercase();
    if term.is_empty() {
        return categories.to_vec();
    }

    categories
        .iter()
        .filter(|category| {
            category.name.to_lowercase().contains(&term)
                || category
                    .description
                    .as_ref()
                    .map(|d| d.to_lowercase().contains(&term))
                    .unwrap_or(false)
        })
        .cloned()
        .collect()
}

#[function_component(CategoryManagement)]
pub fn category_management() -> Html {
    let loading = use_loading();
    let categories = use_state(Vec::<Category>::new);
    let search_term = use_state(String::new);
    let error = use_state(|| None::<String>);
    let toast = use_state(|| None::<ToastMessage>);
    let category_to_delete = use_state(|| None::<i64>);

    let show_form = use_state(|| false);
    let editing_id = use_state(|| None::<i64>);
    let name = use_state(String::new);
    let description = use_state(String::new);
    let is_active = use_state(|| true);

    let load_categories = {
        let categories = categories.clone();
        let error = error.clone();
        let loading = loading.clone();
        Callback::from(move |_: ()| {
            let categories = categories.clone();
            let error = error.clone();
            let loading = loading.clone();
            spawn_local(async move {
                loading.set(true);
                match product_service::get_categories().await {
                    Ok(data) => {
                        categories.set(data);
                        error.set(None);
                    }
                    Err(e) => {
                        log::error!("❌ Error cargando categorías: {}", e);
                        error.set(Some("Error al cargar las categorías".to_string()));
                    }
                }
                loading.set(false);
            });
        })
    };

    {
        let load_categories = load_categories.clone();
        use_effect_with((), move |_| {
            load_categories.emit(());
            || ()
        });
    }

    let reset_form = {
        let show_form = show_form.clone();
        let editing_id = editing_id.clone();
        let name = name.clone();
        let description = description.clone();
        let is_active = is_active.clone();
        Callback::from(move |_: ()| {
            show_form.set(false);
            editing_id.set(None);
            name.set(String::new());
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
        let description = description.clone();
        let is_active = is_active.clone();
        Callback::from(move |category: Category| {
            editing_id.set(Some(category.id));
            name.set(category.name);
            description.set(category.description.unwrap_or_default());
            is_active.set(category.is_active);
            show_form.set(true);
        })
    };

    let on_submit = {
        let editing_id = editing_id.clone();
        let name = name.clone();
        let description = description.clone();
        let is_active = is_active.clone();
        let error = error.clone();
        let toast = toast.clone();
        let reset_form = reset_form.clone();
        let load_categories = load_categories.clone();

        Callback::from(move |e: SubmitEvent| {
            e.prevent_default();

            if name.trim().is_empty() {
                error.set(Some("El nombre es obligatorio".to_string()));
                return;
            }

            let payload = CategoryPayload {
                name: (*name).clone(),
                description: if description.is_empty() { None } else { Some((*description).clone()) },
                is_active: *is_active,
            };
            let editing = *editing_id;

            let error = error.clone();
            let toast = toast.clone();
            let reset_form = reset_form.clone();
            let load_categories = load_categories.clone();
            spawn_local(async move {
                let result = match editing {
                    Some(id) => product_service::update_category(id, &payload).await,
                    None => product_service::create_category(&payload).await,
                };

                match result {
                    Ok(_) => {
                        reset_form.emit(());
                        load_categories.emit(());
                        error.set(None);
                        toast.set(Some(ToastMessage::success("Categoría guardada exitosamente")));
                    }
                    Err(e) => {
                        log::error!("❌ Error guardando categoría: {}", e);
                        error.set(Some("Error al guardar la categoría".to_string()));
                    }
                }
            });
        })
    };

    let on_delete_confirm = {
        let category_to_delete = category_to_delete.clone();
        let load_categories = load_categories.clone();
        let toast = toast.clone();
        Callback::from(move |_: ()| {
            let Some(id) = *category_to_delete else { return };
            let category_to_delete = category_to_delete.clone();
            let load_categories = load_categories.clone();
            let toast = toast.clone();
            spawn_local(async move {
                match product_service::delete_category(id).await {
                    Ok(()) => {
                        load_categories.emit(());
                        toast.set(Some(ToastMessage::success("Categoría eliminada exitosamente")));
                    }
                    Err(e) => {
                        log::error!("❌ Error eliminando categoría: {}", e);
                        toast.set(Some(ToastMessage::danger("Error al eliminar la categoría")));
                    }
                }
                category_to_delete.set(None);
            });
        })
    };

    let columns = {
        let open_edit = open_edit.clone();
        let category_to_delete = category_to_delete.clone();
        vec![
            Column::text("ID", |c: &Category| c.id.to_string()),
            Column::text("Nombre", |c: &Category| c.name.clone()),
            Column::text("Descripción", |c: &Category| {
                c.description.clone().unwrap_or_default()
            }),
            Column::text("Productos", |c: &Category| c.product_count.to_string()),
            Column::new("Estado", |c: &Category| {
                let class = if c.is_active { "badge bg-success" } else { "badge bg-danger" };
                let label = if c.is_active { "Activa" } else { "Inactiva" };
                html! { <span {class}>{ label }</span> }
            }),
            Column::new("Acciones", move |c: &Category| {
                let edit = {
                    let open_edit = open_edit.clone();
                    let category = c.clone();
                    Callback::from(move |_: MouseEvent| open_edit.emit(category.clone()))
                };
                let delete = {
                    let category_to_delete = category_to_delete.clone();
                    let id = c.id;
                    Callback::from(move |_: MouseEvent| category_to_delete.set(Some(id)))
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

    let filtered = filter_categories(&categories, &search_term);

    html! {
        <div>
            <div class="screen-header">
                <h5>{"Categorías"}</h5>
                <p>{"Organización del catálogo de productos"}</p>
            </div>

            if let Some(error) = &*error {
                <div class="alert alert-danger">{ error.clone() }</div>
            }

            if *show_form {
                <form class="form-card" onsubmit={on_submit}>
                    <div class="form-row">
                        <div class="form-group">
                            <label>{"Nombre"}</label>
                            <input
                                type="text"
                                value={(*name).clone()}
                                oninput={Callback::from({
                                    let name = name.clone();
                                    move |e: InputEvent| {
                                        let input: HtmlInputElement = e.target_unchecked_into();
                                        name.set(input.value());
                                    }
                                })}
                            />
                        </div>
                        <div class="form-group">
                            <label>{"Descripción"}</label>
                            <input
                                type="text"
                                value={(*description).clone()}
                                oninput={Callback::from({
                                    let description = description.clone();
                                    move |e: InputEvent| {
                                        let input: HtmlInputElement = e.target_unchecked_into();
                                        description.set(input.value());
                                    }
                                })}
                            />
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
                        {"Categoría activa"}
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

            <DataTable<Category>
                columns={columns}
                data={filtered}
                on_search={Some(Callback::from({
                    let search_term = search_term.clone();
                    move |term: String| search_term.set(term)
                }))}
                actions={Some(html! {
                    <button class="btn" onclick={open_create}>{"➕ Nueva Categoría"}</button>
                })}
                empty_text="No hay categorías"
            />

            <ConfirmModal
                show={category_to_delete.is_some()}
                title="Confirmar Eliminación"
                message="¿Está seguro que desea eliminar esta categoría?"
                on_confirm={on_delete_confirm}
                on_cancel={Callback::from({
                    let category_to_delete = category_to_delete.clone();
                    move |_| category_to_delete.set(None)
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

    fn category(id: i64, name: &str, description: Option<&str>) -> Category {
        Category {
            id,
            name: name.to_string(),
            description: description.map(|d| d.to_string()),
            image: None,
            image_url: None,
            is_active: true,
            product_count: 0,
        }
    }

    #[test]
    fn filters_by_name_and_description() {
        let categories = vec![
            category(1, "Bebidas", Some("Jugos y aguas")),
            category(2, "Snacks", None),
        ];

        assert_eq!(filter_categories(&categories, "bebi").len(), 1);
        assert_eq!(filter_categories(&categories, "jugos")[0].id, 1);
        assert!(filter_categories(&categories, "galletas").is_empty());
        assert_eq!(filter_categories(&categories, "").len(), 2);
    }
}
