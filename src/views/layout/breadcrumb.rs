use yew::prelude::*;

use crate::views::Screen;

#[derive(Properties, PartialEq)]
pub struct BreadcrumbProps {
    pub current: Screen,
}

#[function_component(Breadcrumb)]
pub fn breadcrumb(props: &BreadcrumbProps) -> Html {
    let mut trail = vec!["Inicio"];
    if let Some(section) = props.current.section() {
        trail.push(section);
    }
    if props.current != Screen::Home {
        trail.push(props.current.title());
    }

    html! {
        <div class="breadcrumb">{ trail.join(" / ") }</div>
    }
}
