use crate::components::{icon_log_out, Navbar};
use crate::context::AppContext;
use crate::session;
use yew::prelude::*;

/// Profile display only. The name and email shown here are the snapshot
/// stored at login; there is no profile-edit endpoint.
#[function_component(SettingsPage)]
pub fn settings_page() -> Html {
    let Some(ctx) = use_context::<AppContext>() else {
        return html! {};
    };

    let profile = session::load_profile();

    let on_logout = {
        let on_logout = ctx.on_logout.clone();
        Callback::from(move |_| on_logout.emit(()))
    };

    html! {
        <div class="flex-1 p-6 w-full">
            <Navbar title="Settings" />

            <div class="bg-white rounded-xl shadow-md p-5 mb-6 max-w-xl">
                <h2 class="text-lg font-semibold mb-4">{"Profile"}</h2>
                { match &profile {
                    Some(profile) => html! {
                        <div class="space-y-3 text-sm">
                            <div>
                                <div class="text-gray-500">{"Name"}</div>
                                <div class="font-medium">{ profile.name.clone() }</div>
                            </div>
                            <div>
                                <div class="text-gray-500">{"Email"}</div>
                                <div class="font-medium">{ profile.email.clone() }</div>
                            </div>
                        </div>
                    },
                    None => html! {
                        <div class="text-gray-500 text-sm">{"No profile information available"}</div>
                    },
                }}
            </div>

            <button onclick={on_logout} class="flex items-center gap-2 px-4 py-2 bg-red-600 text-white rounded-lg hover:bg-red-700">
                { icon_log_out() }
                {"Logout"}
            </button>
        </div>
    }
}
