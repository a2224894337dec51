use crate::components::{icon_exchange, icon_gauge, icon_settings, icon_wallet};
use crate::context::Page;
use yew::prelude::*;

struct NavItem {
    label: &'static str,
    page: Page,
    icon: fn() -> Html,
}

#[derive(Properties, PartialEq)]
pub struct SidebarProps {
    pub active_page: Page,
    pub on_select: Callback<Page>,
}

#[function_component(Sidebar)]
pub fn sidebar(props: &SidebarProps) -> Html {
    let nav_items = vec![
        NavItem {
            label: "Dashboard",
            page: Page::Dashboard,
            icon: icon_gauge,
        },
        NavItem {
            label: "Transactions",
            page: Page::Transactions,
            icon: icon_exchange,
        },
        NavItem {
            label: "Budget",
            page: Page::Budget,
            icon: icon_wallet,
        },
        NavItem {
            label: "Settings",
            page: Page::Settings,
            icon: icon_settings,
        },
    ];

    html! {
        <div class="w-64 h-screen bg-white shadow-md p-5 flex flex-col shrink-0">
            <h2 class="text-2xl font-bold mb-8">{"Expense Tracker"}</h2>

            <nav class="space-y-3">
                { for nav_items.iter().map(|item| {
                    let is_active = item.page == props.active_page;
                    let class_name = if is_active {
                        "flex items-center space-x-2 px-3 py-2 rounded-lg w-full text-blue-700 font-semibold bg-gray-100"
                    } else {
                        "flex items-center space-x-2 px-3 py-2 rounded-lg w-full text-gray-800 hover:bg-gray-100 transition-all duration-200"
                    };
                    let on_select = props.on_select.clone();
                    let page = item.page;

                    html! {
                        <button type="button" class={class_name} onclick={Callback::from(move |_| on_select.emit(page))}>
                            <span class="shrink-0">{ (item.icon)() }</span>
                            <span>{ item.label }</span>
                        </button>
                    }
                }) }
            </nav>
        </div>
    }
}
