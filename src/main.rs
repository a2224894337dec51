mod aggregate;
mod api;
mod components;
mod context;
mod events;
mod filters;
mod format;
mod models;
mod pages;
mod session;

use components::Sidebar;
use context::{AppContext, Page};
use events::EventBus;
use pages::{BudgetPage, DashboardPage, LoginPage, RegisterPage, SettingsPage, TransactionsPage};
use yew::prelude::*;

#[derive(Clone, Copy, PartialEq, Eq)]
enum AuthStatus {
    Authenticated,
    Unauthenticated,
}

#[derive(Clone, Copy, PartialEq, Eq)]
enum AuthView {
    Login,
    Register,
}

#[function_component(App)]
fn app() -> Html {
    let auth = use_state(|| {
        if session::load_token().is_some() {
            AuthStatus::Authenticated
        } else {
            AuthStatus::Unauthenticated
        }
    });
    let auth_view = use_state(|| AuthView::Login);
    let page = use_state(|| Page::Dashboard);
    let events = use_state(EventBus::new);

    let on_navigate = {
        let page = page.clone();
        Callback::from(move |next: Page| page.set(next))
    };

    let on_logout = {
        let auth = auth.clone();
        let auth_view = auth_view.clone();
        let page = page.clone();
        Callback::from(move |_| {
            session::clear();
            page.set(Page::Dashboard);
            auth_view.set(AuthView::Login);
            auth.set(AuthStatus::Unauthenticated);
        })
    };

    let on_authenticated = {
        let auth = auth.clone();
        let page = page.clone();
        Callback::from(move |_| {
            page.set(Page::Dashboard);
            auth.set(AuthStatus::Authenticated);
        })
    };

    if *auth == AuthStatus::Unauthenticated {
        let to_register = {
            let auth_view = auth_view.clone();
            Callback::from(move |_| auth_view.set(AuthView::Register))
        };
        let to_login = {
            let auth_view = auth_view.clone();
            Callback::from(move |_| auth_view.set(AuthView::Login))
        };
        return match *auth_view {
            AuthView::Login => html! {
                <LoginPage on_authenticated={on_authenticated} on_switch={to_register} />
            },
            AuthView::Register => html! {
                <RegisterPage on_authenticated={on_authenticated} on_switch={to_login} />
            },
        };
    }

    let ctx = AppContext {
        events: (*events).clone(),
        on_navigate: on_navigate.clone(),
        on_logout,
    };

    html! {
        <ContextProvider<AppContext> context={ctx}>
            <div class="flex min-h-screen bg-gray-100">
                <Sidebar active_page={*page} on_select={on_navigate} />
                { match *page {
                    Page::Dashboard => html! { <DashboardPage /> },
                    Page::Transactions => html! { <TransactionsPage /> },
                    Page::Budget => html! { <BudgetPage /> },
                    Page::Settings => html! { <SettingsPage /> },
                }}
            </div>
        </ContextProvider<AppContext>>
    }
}

fn main() {
    wasm_logger::init(wasm_logger::Config::default());
    yew::Renderer::<App>::new().render();
}
