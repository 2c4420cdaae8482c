use wasm_bindgen_futures::spawn_local;
use web_sys::{File, HtmlInputElement, HtmlSelectElement};
use yew::prelude::*;

use crate::hooks::use_loading;
use crate::models::{Category, ProductFields};
use crate::services::product_service;
use crate::views::Screen;

#[derive(Properties, PartialEq)]
pub struct ProductFormProps {
    /// None crea; Some(id) edita
    pub product_id: Option<i64>,
    pub on_navigate: Callback<Screen>,
}

#[function_component(ProductForm)]
pub fn product_form(props: &ProductFormProps) -> Html {
    let loading = use_loading();
    let name = use_state(String::new);
    let description = use_state(String::new);
    let price = use_state(String::new);
    let category = use_state(|| 0i64);
    let stock = use_state(|| "0".to_string());
    let is_available = use_state(|| true);
    let image = use_state(|| None::<File>);
    let current_image = use_state(|| None::<String>);
    let categories = use_state(Vec::<Category>::new);
    let error = use_state(|| None::<String>);
    let saving = use_state(|| false);

    // Catálogo de categorías para el select
    {
        let categories = categories.clone();
        let category = category.clone();
        use_effect_with((), move |_| {
            spawn_local(async move {
                match product_service::get_categories().await {
                    Ok(data) => {
                        if *category == 0 {
                            if let Some(first) = data.first() {
                                category.set(first.id);
                            }
                        }
                        categories.set(data);
                    }
                    Err(e) => log::error!("❌ Error cargando categorías: {}", e),
                }
            });
            || ()
        });
    }

    // En modo edición se precarga el producto
    {
        let name = name.clone();
        let description = description.clone();
        let price = price.clone();
        let category = category.clone();
        let stock = stock.clone();
        let is_available = is_available.clone();
        let current_image = current_image.clone();
        let error = error.clone();
        let loading = loading.clone();
        use_effect_with(props.product_id, move |product_id| {
            if let Some(id) = *product_id {
                spawn_local(async move {
                    loading.set(true);
                    match product_service::get_product(id).await {
                        Ok(product) => {
                            name.set(product.name);
                            description.set(product.description.unwrap_or_default());
                            price.set(product.price.to_string());
                            category.set(product.category);
                            stock.set(product.stock.to_string());
                            is_available.set(product.is_available);
                            current_image.set(product.image);
                        }
                        Err(e) => {
                            log::error!("❌ Error cargando producto: {}", e);
                            error.set(Some("Error al cargar el producto".to_string()));
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

    let on_category_change = {
        let category = category.clone();
        Callback::from(move |e: Event| {
            let select: HtmlSelectElement = e.target_unchecked_into();
            category.set(select.value().parse().unwrap_or(0));
        })
    };

    let on_image_change = {
        let image = image.clone();
        Callback::from(move |e: Event| {
            let input: HtmlInputElement = e.target_unchecked_into();
            let file = input.files().and_then(|files| files.item(0));
            image.set(file);
        })
    };

    let on_submit = {
        let name = name.clone();
        let description = description.clone();
        let price = price.clone();
        let category = category.clone();
        let stock = stock.clone();
        let is_available = is_available.clone();
        let image = image.clone();
        let error = error.clone();
        let saving = saving.clone();
        let product_id = props.product_id;
        let on_navigate = props.on_navigate.clone();

        Callback::from(move |e: SubmitEvent| {
            e.prevent_default();

            if name.trim().is_empty() {
                error.set(Some("El nombre es obligatorio".to_string()));
                return;
            }
            if price.trim().parse::<f64>().is_err() {
                error.set(Some("El precio debe ser un número".to_string()));
                return;
            }
            if stock.trim().parse::<i32>().is_err() {
                error.set(Some("El stock debe ser un número entero".to_string()));
                return;
            }
            if *category == 0 {
                error.set(Some("Selecciona una categoría".to_string()));
                return;
            }

            let fields = ProductFields {
                name: (*name).clone(),
                description: (*description).clone(),
                price: price.trim().to_string(),
                category: *category,
                stock: stock.trim().to_string(),
                is_available: *is_available,
            };
            let file = (*image).clone();

            let error = error.clone();
            let saving = saving.clone();
            let on_navigate = on_navigate.clone();
            spawn_local(async move {
                saving.set(true);
                let result = match product_id {
                    Some(id) => product_service::update_product(id, &fields, file.as_ref()).await,
                    None => product_service::create_product(&fields, file.as_ref()).await,
                };
                saving.set(false);

                match result {
                    Ok(_) => on_navigate.emit(Screen::Products),
                    Err(e) => {
                        log::error!("❌ Error guardando producto: {}", e);
                        error.set(Some("Error al guardar el producto".to_string()));
                    }
                }
            });
        })
    };

    let on_cancel = {
        let on_navigate = props.on_navigate.clone();
        Callback::from(move |_: MouseEvent| on_navigate.emit(Screen::Products))
    };

    let title = if props.product_id.is_some() { "Editar Producto" } else { "Nuevo Producto" };

    html! {
        <div>
            <div class="screen-header">
                <h5>{ title }</h5>
                <p>{"Datos del producto y su imagen"}</p>
            </div>

            if let Some(error) = &*error {
                <div class="alert alert-danger">{ error.clone() }</div>
            }

            <form class="form-card" onsubmit={on_submit}>
                <div class="form-row">
                    <div class="form-group">
                        <label>{"Nombre"}</label>
                        <input type="text" value={(*name).clone()} oninput={text_input(&name)} />
                    </div>
                    <div class="form-group">
                        <label>{"Categoría"}</label>
                        <select onchange={on_category_change}>
                            { for categories.iter().map(|c| html! {
                                <option value={c.id.to_string()} selected={c.id == *category}>
                                    { &c.name }
                                </option>
                            }) }
                        </select>
                    </div>
                </div>
                <div class="form-group">
                    <label>{"Descripción"}</label>
                    <input type="text" value={(*description).clone()} oninput={text_input(&description)} />
                </div>
                <div class="form-row">
                    <div class="form-group">
                        <label>{"Precio"}</label>
                        <input type="number" step="0.01" value={(*price).clone()} oninput={text_input(&price)} />
                    </div>
                    <div class="form-group">
                        <label>{"Stock"}</label>
                        <input type="number" value={(*stock).clone()} oninput={text_input(&stock)} />
                    </div>
                </div>
                <div class="form-group">
                    <label>{"Imagen"}</label>
                    if let Some(url) = &*current_image {
                        <img class="product-thumb" src={url.clone()} alt="imagen actual" />
                    }
                    <input type="file" accept="image/*" onchange={on_image_change} />
                </div>
                <label class="checkbox-row">
                    <input
                        type="checkbox"
                        checked={*is_available}
                        onchange={Callback::from({
                            let is_available = is_available.clone();
                            move |_: Event| is_available.set(!*is_available)
                        })}
                    />
                    {"Disponible para la venta"}
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
