use crate::components::icon_log_out;
use crate::context::AppContext;
use yew::prelude::*;

#[derive(Properties, PartialEq)]
pub struct NavbarProps {
    pub title: &'static str,
}

/// Page title row with the logout action, rendered at the top of every
/// protected view.
#[function_component(Navbar)]
pub fn navbar(props: &NavbarProps) -> Html {
    let Some(ctx) = use_context::<AppContext>() else {
        return html! {};
    };

    let on_logout = {
        let on_logout = ctx.on_logout.clone();
        Callback::from(move |_| on_logout.emit(()))
    };

    html! {
        <div class="flex justify-between items-center mb-6">
            <h1 class="text-2xl font-bold">{ props.title }</h1>
            <button onclick={on_logout} class="flex items-center gap-2 px-4 py-2 bg-gray-200 rounded-lg hover:bg-gray-300">
                { icon_log_out() }
                {"Logout"}
            </button>
        </div>
    }
}
