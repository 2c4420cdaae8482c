use yew::prelude::*;

#[derive(Properties, PartialEq)]
pub struct ConfirmModalProps {
    pub show: bool,
    pub title: AttrValue,
    pub message: AttrValue,
    #[prop_or(AttrValue::Static("Eliminar"))]
    pub confirm_label: AttrValue,
    pub on_confirm: Callback<()>,
    pub on_cancel: Callback<()>,
}

/// Modal de confirmación para acciones destructivas.
#[function_component(ConfirmModal)]
pub fn confirm_modal(props: &ConfirmModalProps) -> Html {
    if !props.show {
        return html! {};
    }

    html! {
        <div class="modal-backdrop">
            <div class="modal-card">
                <div class="modal-header">
                    <strong>{ props.title.clone() }</strong>
                    <button class="btn-close" onclick={props.on_cancel.reform(|_: MouseEvent| ())}>
                        {"✕"}
                    </button>
                </div>
                <div class="modal-body">{ props.message.clone() }</div>
                <div class="modal-footer">
                    <button class="btn btn-secondary" onclick={props.on_cancel.reform(|_: MouseEvent| ())}>
                        {"Cancelar"}
                    </button>
                    <button class="btn btn-danger" onclick={props.on_confirm.reform(|_: MouseEvent| ())}>
                        { props.confirm_label.clone() }
                    </button>
                </div>
            </div>
        </div>
    }
}
