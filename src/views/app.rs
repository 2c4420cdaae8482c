use yew::prelude::*;

use crate::hooks::{use_auth, AuthProvider, LoadingProvider};
use crate::views::companies::CompanyManagement;
use crate::views::home::HomeView;
use crate::views::layout::{Breadcrumb, Header, Sidebar};
use crate::views::login::LoginView;
use crate::views::products::{CategoryManagement, ProductForm, ProductManagement};
use crate::views::shared::Spinner;
use crate::views::users::{
    ActivityLogView, ChangePasswordView, GroupManagement, UserForm, UserManagement,
};
use crate::views::Screen;

/// Raíz de la aplicación: providers anidados + shell.
#[function_component(App)]
pub fn app() -> Html {
    html! {
        <LoadingProvider>
            <AuthProvider>
                <Shell />
            </AuthProvider>
        </LoadingProvider>
    }
}

#[function_component(Shell)]
fn shell() -> Html {
    let auth = use_auth();
    let screen = use_state(|| Screen::Home);
    let sidebar_open = use_state(|| true);

    // Bootstrap en curso: pantalla de arranque
    if auth.state.checking {
        return html! {
            <div class="boot-screen"><Spinner /></div>
        };
    }

    if !auth.session().is_authenticated {
        return html! { <LoginView /> };
    }

    let on_navigate = {
        let screen = screen.clone();
        Callback::from(move |next: Screen| screen.set(next))
    };

    let on_toggle_sidebar = {
        let sidebar_open = sidebar_open.clone();
        Callback::from(move |_| sidebar_open.set(!*sidebar_open))
    };

    let body = match &*screen {
        Screen::Home => html! { <HomeView on_navigate={on_navigate.clone()} /> },
        Screen::Users => html! { <UserManagement on_navigate={on_navigate.clone()} /> },
        Screen::UserCreate => {
            html! { <UserForm user_id={None} on_navigate={on_navigate.clone()} /> }
        }
        Screen::UserEdit(id) => {
            html! { <UserForm user_id={Some(*id)} on_navigate={on_navigate.clone()} /> }
        }
        Screen::Groups => html! { <GroupManagement /> },
        Screen::ActivityLog => html! { <ActivityLogView /> },
        Screen::ChangePassword => html! { <ChangePasswordView /> },
        Screen::Companies => html! { <CompanyManagement /> },
        Screen::Categories => html! { <CategoryManagement /> },
        Screen::Products => html! { <ProductManagement on_navigate={on_navigate.clone()} /> },
        Screen::ProductCreate => {
            html! { <ProductForm product_id={None} on_navigate={on_navigate.clone()} /> }
        }
        Screen::ProductEdit(id) => {
            html! { <ProductForm product_id={Some(*id)} on_navigate={on_navigate.clone()} /> }
        }
    };

    html! {
        <div class="app-layout">
            <Sidebar
                open={*sidebar_open}
                current={(*screen).clone()}
                on_navigate={on_navigate.clone()}
            />
            <div class="app-main">
                <Header on_toggle_sidebar={on_toggle_sidebar} />
                <Breadcrumb current={(*screen).clone()} />
                <main class="app-content">{ body }</main>
            </div>
        </div>
    }
}
