use wasm_bindgen_futures::spawn_local;
use web_sys::HtmlInputElement;
use yew::prelude::*;

use crate::hooks::use_loading;
use crate::models::Group;
use crate::services::group_service;
use crate::views::shared::{Column, ConfirmModal, DataTable, Toast, ToastMessage};

#[function_component(GroupManagement)]
pub fn group_management() -> Html {
    let loading = use_loading();
    let groups = use_state(Vec::<Group>::new);
    let new_name = use_state(String::new);
    let editing = use_state(|| None::<(i64, String)>);
    let group_to_delete = use_state(|| None::<i64>);
    let error = use_state(|| None::<String>);
    let toast = use_state(|| None::<ToastMessage>);

    let load_groups = {
        let groups = groups.clone();
        let error = error.clone();
        let loading = loading.clone();
        Callback::from(move |_: ()| {
            let groups = groups.clone();
            let error = error.clone();
            let loading = loading.clone();
            spawn_local(async move {
                loading.set(true);
                match group_service::get_all().await {
                    Ok(data) => {
                        groups.set(data);
                        error.set(None);
                    }
                    Err(e) => {
                        log::error!("❌ Error cargando grupos: {}", e);
                        error.set(Some("Error al cargar los grupos".to_string()));
                    }
                }
                loading.set(false);
            });
        })
    };

    {
        let load_groups = load_groups.clone();
        use_effect_with((), move |_| {
            load_groups.emit(());
            || ()
        });
    }

    let on_create = {
        let new_name = new_name.clone();
        let load_groups = load_groups.clone();
        let toast = toast.clone();
        Callback::from(move |e: SubmitEvent| {
            e.prevent_default();
            let name = new_name.trim().to_string();
            if name.is_empty() {
                return;
            }
            let new_name = new_name.clone();
            let load_groups = load_groups.clone();
            let toast = toast.clone();
            spawn_local(async move {
                match group_service::create(&name).await {
                    Ok(_) => {
                        new_name.set(String::new());
                        load_groups.emit(());
                        toast.set(Some(ToastMessage::success("Grupo creado exitosamente")));
                    }
                    Err(e) => {
                        log::error!("❌ Error creando grupo: {}", e);
                        toast.set(Some(ToastMessage::danger("Error al crear el grupo")));
                    }
                }
            });
        })
    };

    let on_rename = {
        let editing = editing.clone();
        let load_groups = load_groups.clone();
        let toast = toast.clone();
        Callback::from(move |_: MouseEvent| {
            let Some((id, name)) = (*editing).clone() else { return };
            if name.trim().is_empty() {
                return;
            }
            let editing = editing.clone();
            let load_groups = load_groups.clone();
            let toast = toast.clone();
            spawn_local(async move {
                match group_service::update(id, name.trim()).await {
                    Ok(_) => {
                        editing.set(None);
                        load_groups.emit(());
                        toast.set(Some(ToastMessage::success("Grupo actualizado exitosamente")));
                    }
                    Err(e) => {
                        log::error!("❌ Error actualizando grupo: {}", e);
                        toast.set(Some(ToastMessage::danger("Error al actualizar el grupo")));
                    }
                }
            });
        })
    };

    let on_delete_confirm = {
        let group_to_delete = group_to_delete.clone();
        let load_groups = load_groups.clone();
        let toast = toast.clone();
        Callback::from(move |_: ()| {
            let Some(id) = *group_to_delete else { return };
            let group_to_delete = group_to_delete.clone();
            let load_groups = load_groups.clone();
            let toast = toast.clone();
            spawn_local(async move {
                match group_service::delete(id).await {
                    Ok(()) => {
                        load_groups.emit(());
                        toast.set(Some(ToastMessage::success("Grupo eliminado exitosamente")));
                    }
                    Err(e) => {
                        log::error!("❌ Error eliminando grupo: {}", e);
                        toast.set(Some(ToastMessage::danger("Error al eliminar el grupo")));
                    }
                }
                group_to_delete.set(None);
            });
        })
    };

    let columns = {
        let editing = editing.clone();
        let group_to_delete = group_to_delete.clone();
        let on_rename = on_rename.clone();
        vec![
            Column::text("ID", |g: &Group| g.id.to_string()),
            Column::new("Nombre", {
                let editing = editing.clone();
                let on_rename = on_rename.clone();
                move |g: &Group| {
                    match &*editing {
                        Some((id, name)) if *id == g.id => {
                            let oninput = {
                                let editing = editing.clone();
                                let id = *id;
                                Callback::from(move |e: InputEvent| {
                                    let input: HtmlInputElement = e.target_unchecked_into();
                                    editing.set(Some((id, input.value())));
                                })
                            };
                            let cancel = {
                                let editing = editing.clone();
                                Callback::from(move |_: MouseEvent| editing.set(None))
                            };
                            html! {
                                <div class="btn-group">
                                    <input type="text" value={name.clone()} {oninput} />
                                    <button class="btn btn-sm" onclick={on_rename.clone()}>{"💾"}</button>
                                    <button class="btn btn-sm btn-secondary" onclick={cancel}>{"✕"}</button>
                                </div>
                            }
                        }
                        _ => html! { <>{ &g.name }</> },
                    }
                }
            }),
            Column::new("Acciones", move |g: &Group| {
                let start_edit = {
                    let editing = editing.clone();
                    let id = g.id;
                    let name = g.name.clone();
                    Callback::from(move |_: MouseEvent| editing.set(Some((id, name.clone()))))
                };
                let delete = {
                    let group_to_delete = group_to_delete.clone();
                    let id = g.id;
                    Callback::from(move |_: MouseEvent| group_to_delete.set(Some(id)))
                };
                html! {
                    <div class="btn-group">
                        <button class="btn btn-sm" onclick={start_edit}>{"✏️"}</button>
                        <button class="btn btn-sm btn-danger" onclick={delete}>{"🗑️"}</button>
                    </div>
                }
            }),
        ]
    };

    html! {
        <div>
            <div class="screen-header">
                <h5>{"Gestión de Grupos"}</h5>
                <p>{"Perfiles de acceso del sistema"}</p>
            </div>

            if let Some(error) = &*error {
                <div class="alert alert-danger">{ error.clone() }</div>
            }

            <form class="filters-row" onsubmit={on_create}>
                <div class="form-group">
                    <label>{"Nuevo grupo"}</label>
                    <input
                        type="text"
                        value={(*new_name).clone()}
                        oninput={Callback::from({
                            let new_name = new_name.clone();
                            move |e: InputEvent| {
                                let input: HtmlInputElement = e.target_unchecked_into();
                                new_name.set(input.value());
                            }
                        })}
                    />
                </div>
                <button type="submit" class="btn">{"➕ Crear"}</button>
            </form>

            <DataTable<Group>
                columns={columns}
                data={(*groups).clone()}
                empty_text="No hay grupos"
            />

            <ConfirmModal
                show={group_to_delete.is_some()}
                title="Confirmar Eliminación"
                message="¿Está seguro que desea eliminar este grupo?"
                on_confirm={on_delete_confirm}
                on_cancel={Callback::from({
                    let group_to_delete = group_to_delete.clone();
                    move |_| group_to_delete.set(None)
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
