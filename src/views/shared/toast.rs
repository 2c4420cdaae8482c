use gloo_timers::callback::Timeout;
use yew::prelude::*;

#[derive(Clone, PartialEq, Debug)]
pub enum ToastKind {
    Success,
    Danger,
}

#[derive(Clone, PartialEq, Debug)]
pub struct ToastMessage {
    pub text: String,
    pub kind: ToastKind,
}

impl ToastMessage {
    pub fn success(text: impl Into<String>) -> Self {
        Self { text: text.into(), kind: ToastKind::Success }
    }

    pub fn danger(text: impl Into<String>) -> Self {
        Self { text: text.into(), kind: ToastKind::Danger }
    }
}

#[derive(Properties, PartialEq)]
pub struct ToastProps {
    pub message: Option<ToastMessage>,
    pub on_close: Callback<()>,
}

/// Notificación flotante con autocierre a los 3 segundos.
#[function_component(Toast)]
pub fn toast(props: &ToastProps) -> Html {
    {
        let on_close = props.on_close.clone();
        use_effect_with(props.message.clone(), move |message| {
            if message.is_some() {
                Timeout::new(3_000, move || on_close.emit(())).forget();
            }
            || ()
        });
    }

    let Some(message) = &props.message else {
        return html! {};
    };

    let class = match message.kind {
        ToastKind::Success => "toast success",
        ToastKind::Danger => "toast danger",
    };

    html! {
        <div {class} onclick={props.on_close.reform(|_: MouseEvent| ())}>
            { &message.text }
        </div>
    }
}
