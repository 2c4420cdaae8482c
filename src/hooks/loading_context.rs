use yew::prelude::*;

/// Indicador de carga global: un único booleano de proceso que prende y apaga
/// la pantalla que esté llamando a la API. Sin conteo de referencias, así que
/// llamadas superpuestas de pantallas distintas pueden apagarlo antes de
/// tiempo; se mantiene así a propósito.
#[derive(Clone, PartialEq)]
pub struct UseLoadingHandle {
    state: UseStateHandle<bool>,
}

impl UseLoadingHandle {
    pub fn set(&self, loading: bool) {
        self.state.set(loading);
    }

    pub fn is_loading(&self) -> bool {
        *self.state
    }
}

#[derive(Properties, PartialEq)]
pub struct LoadingProviderProps {
    pub children: Children,
}

#[function_component(LoadingProvider)]
pub fn loading_provider(props: &LoadingProviderProps) -> Html {
    let state = use_state(|| false);
    let handle = UseLoadingHandle { state: state.clone() };

    html! {
        <ContextProvider<UseLoadingHandle> context={handle}>
            {props.children.clone()}
            if *state {
                <div class="loading-overlay">
                    <div class="spinner"></div>
                </div>
            }
        </ContextProvider<UseLoadingHandle>>
    }
}

#[hook]
pub fn use_loading() -> UseLoadingHandle {
    use_context::<UseLoadingHandle>().expect("use_loading debe ser usado dentro de un LoadingProvider")
}
