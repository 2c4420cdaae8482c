use wasm_bindgen_futures::spawn_local;
use yew::prelude::*;

use crate::hooks::use_loading;
use crate::models::{PaginatedProducts, Product};
use crate::services::product_service;
use crate::utils::{format_date, format_price};
use crate::views::shared::{Column, ConfirmModal, DataTable, Toast, ToastMessage};
use crate::views::Screen;

const PAGE_SIZE: u32 = 10;

/// Total de páginas para la paginación del servidor.
pub fn total_pages(count: i64, page_size: u32) -> u32 {
    if count <= 0 {
        1
    } else {
        ((count as u64).div_ceil(page_size as u64)) as u32
    }
}

#[derive(Properties, PartialEq)]
pub struct ProductManagementProps {
    pub on_navigate: Callback<Screen>,
}

/// Listado de productos con paginación y búsqueda del lado del servidor.
#[function_component(ProductManagement)]
pub fn product_management(props: &ProductManagementProps) -> Html {
    let loading = use_loading();
    let products = use_state(PaginatedProducts::empty);
    let page = use_state(|| 1u32);
    let search_term = use_state(String::new);
    let error = use_state(|| None::<String>);
    let toast = use_state(|| None::<ToastMessage>);
    let product_to_delete = use_state(|| None::<i64>);

    let load_products = {
        let products = products.clone();
        let error = error.clone();
        let loading = loading.clone();
        Callback::from(move |(page, search): (u32, String)| {
            let products = products.clone();
            let error = error.clone();
            let loading = loading.clone();
            spawn_local(async move {
                loading.set(true);
                let search = if search.trim().is_empty() { None } else { Some(search) };
                match product_service::get_products(Some(page), Some(PAGE_SIZE), search.as_deref())
                    .await
                {
                    Ok(data) => {
                        products.set(data);
                        error.set(None);
                    }
                    Err(e) => {
                        log::error!("❌ Error cargando productos: {}", e);
                        error.set(Some("Error al cargar los productos".to_string()));
                    }
                }
                loading.set(false);
            });
        })
    };

    // Recargar al cambiar página o término de búsqueda
    {
        let load_products = load_products.clone();
        use_effect_with((*page, (*search_term).clone()), move |(page, search)| {
            load_products.emit((*page, search.clone()));
            || ()
        });
    }

    let on_search = {
        let search_term = search_term.clone();
        let page = page.clone();
        Callback::from(move |term: String| {
            page.set(1);
            search_term.set(term);
        })
    };

    let on_delete_confirm = {
        let product_to_delete = product_to_delete.clone();
        let load_products = load_products.clone();
        let toast = toast.clone();
        let page = page.clone();
        let search_term = search_term.clone();
        Callback::from(move |_: ()| {
            let Some(id) = *product_to_delete else { return };
            let product_to_delete = product_to_delete.clone();
            let load_products = load_products.clone();
            let toast = toast.clone();
            let page = *page;
            let search = (*search_term).clone();
            spawn_local(async move {
                match product_service::delete_product(id).await {
                    Ok(()) => {
                        load_products.emit((page, search));
                        toast.set(Some(ToastMessage::success("Producto eliminado exitosamente")));
                    }
                    Err(e) => {
                        log::error!("❌ Error eliminando producto: {}", e);
                        toast.set(Some(ToastMessage::danger("Error al eliminar el producto")));
                    }
                }
                product_to_delete.set(None);
            });
        })
    };

    let columns = {
        let on_navigate = props.on_navigate.clone();
        let product_to_delete = product_to_delete.clone();
        vec![
            Column::text("ID", |p: &Product| p.id.to_string()),
            Column::new("Imagen", |p: &Product| match &p.image {
                Some(url) => html! { <img class="product-thumb" src={url.clone()} alt={p.name.clone()} /> },
                None => html! { <span>{"—"}</span> },
            }),
            Column::text("Nombre", |p: &Product| p.name.clone()),
            Column::text("Categoría", |p: &Product| p.category_name.clone()),
            Column::text("Precio", |p: &Product| format_price(p.price)),
            Column::text("Stock", |p: &Product| p.stock.to_string()),
            Column::new("Disponible", |p: &Product| {
                let class = if p.is_available { "badge bg-success" } else { "badge bg-danger" };
                let label = if p.is_available { "Sí" } else { "No" };
                html! { <span {class}>{ label }</span> }
            }),
            Column::text("Creado", |p: &Product| format_date(&p.created_at)),
            Column::new("Acciones", move |p: &Product| {
                let edit = {
                    let on_navigate = on_navigate.clone();
                    let id = p.id;
                    Callback::from(move |_: MouseEvent| on_navigate.emit(Screen::ProductEdit(id)))
                };
                let delete = {
                    let product_to_delete = product_to_delete.clone();
                    let id = p.id;
                    Callback::from(move |_: MouseEvent| product_to_delete.set(Some(id)))
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

    let pages = total_pages(products.count, PAGE_SIZE);

    let prev_page = {
        let page = page.clone();
        Callback::from(move |_: MouseEvent| {
            if *page > 1 {
                page.set(*page - 1);
            }
        })
    };

    let next_page = {
        let page = page.clone();
        let pages = pages;
        Callback::from(move |_: MouseEvent| {
            if *page < pages {
                page.set(*page + 1);
            }
        })
    };

    let new_product = {
        let on_navigate = props.on_navigate.clone();
        Callback::from(move |_: MouseEvent| on_navigate.emit(Screen::ProductCreate))
    };

    let footer = html! {
        <>
            <span>{ format!("{} productos", products.count) }</span>
            <button class="btn btn-sm btn-secondary" onclick={prev_page} disabled={*page <= 1}>
                {"◀"}
            </button>
            <span>{ format!("Página {} de {}", *page, pages) }</span>
            <button class="btn btn-sm btn-secondary" onclick={next_page} disabled={*page >= pages}>
                {"▶"}
            </button>
        </>
    };

    html! {
        <div>
            <div class="screen-header">
                <h5>{"Productos"}</h5>
                <p>{"Catálogo de productos de la empresa"}</p>
            </div>

            if let Some(error) = &*error {
                <div class="alert alert-danger">{ error.clone() }</div>
            }

            <DataTable<Product>
                columns={columns}
                data={products.results.clone()}
                on_search={Some(on_search)}
                actions={Some(html! {
                    <button class="btn" onclick={new_product}>{"➕ Nuevo Producto"}</button>
                })}
                empty_text="No hay productos"
                footer={Some(footer)}
            />

            <ConfirmModal
                show={product_to_delete.is_some()}
                title="Confirmar Eliminación"
                message="¿Está seguro que desea eliminar este producto? Esta acción no se puede deshacer."
                on_confirm={on_delete_confirm}
                on_cancel={Callback::from({
                    let product_to_delete = product_to_delete.clone();
                    move |_| product_to_delete.set(None)
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

    #[test]
    fn total_pages_rounds_up() {
        assert_eq!(total_pages(0, 10), 1);
        assert_eq!(total_pages(10, 10), 1);
        assert_eq!(total_pages(11, 10), 2);
        assert_eq!(total_pages(95, 10), 10);
    }
}
