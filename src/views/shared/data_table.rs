// ============================================================================
// TABLA GENÉRICA
// ============================================================================
// Descriptores de columna (nombre + celda) sobre cualquier fila clonable.
// Todas las pantallas de gestión comparten esta tabla: buscador, slot de
// acciones y estado vacío.
// ============================================================================

use std::rc::Rc;

use web_sys::HtmlInputElement;
use yew::prelude::*;

pub struct Column<T> {
    pub name: &'static str,
    render: Rc<dyn Fn(&T) -> Html>,
}

impl<T> Column<T> {
    pub fn new(name: &'static str, render: impl Fn(&T) -> Html + 'static) -> Self {
        Self { name, render: Rc::new(render) }
    }

    /// Columna de solo texto.
    pub fn text(name: &'static str, value: impl Fn(&T) -> String + 'static) -> Self {
        Self::new(name, move |row| html! { <>{ value(row) }</> })
    }

    pub fn render_cell(&self, row: &T) -> Html {
        (self.render)(row)
    }
}

impl<T> Clone for Column<T> {
    fn clone(&self) -> Self {
        Self { name: self.name, render: Rc::clone(&self.render) }
    }
}

impl<T> PartialEq for Column<T> {
    fn eq(&self, other: &Self) -> bool {
        self.name == other.name && Rc::ptr_eq(&self.render, &other.render)
    }
}

#[derive(Properties, PartialEq)]
pub struct DataTableProps<T: Clone + PartialEq + 'static> {
    pub columns: Vec<Column<T>>,
    pub data: Vec<T>,
    /// Si está presente se muestra el buscador y cada tecla emite el término
    #[prop_or_default]
    pub on_search: Option<Callback<String>>,
    #[prop_or_default]
    pub actions: Option<Html>,
    #[prop_or(AttrValue::Static("No hay registros"))]
    pub empty_text: AttrValue,
    #[prop_or_default]
    pub footer: Option<Html>,
}

#[function_component(DataTable)]
pub fn data_table<T: Clone + PartialEq + 'static>(props: &DataTableProps<T>) -> Html {
    let oninput = props.on_search.clone().map(|on_search| {
        Callback::from(move |e: InputEvent| {
            let input: HtmlInputElement = e.target_unchecked_into();
            on_search.emit(input.value());
        })
    });

    html! {
        <div class="data-table-wrapper">
            <div class="data-table-toolbar">
                if let Some(oninput) = oninput {
                    <input
                        type="text"
                        class="data-table-search"
                        placeholder="Buscar..."
                        {oninput}
                    />
                }
                <div class="spacer"></div>
                if let Some(actions) = &props.actions {
                    { actions.clone() }
                }
            </div>
            <table class="data-table">
                <thead>
                    <tr>
                        { for props.columns.iter().map(|column| html! { <th>{ column.name }</th> }) }
                    </tr>
                </thead>
                <tbody>
                    if props.data.is_empty() {
                        <tr>
                            <td class="empty" colspan={props.columns.len().to_string()}>
                                { props.empty_text.clone() }
                            </td>
                        </tr>
                    } else {
                        { for props.data.iter().map(|row| html! {
                            <tr>
                                { for props.columns.iter().map(|column| html! {
                                    <td>{ column.render_cell(row) }</td>
                                }) }
                            </tr>
                        }) }
                    }
                </tbody>
            </table>
            if let Some(footer) = &props.footer {
                <div class="table-pagination">{ footer.clone() }</div>
            }
        </div>
    }
}
