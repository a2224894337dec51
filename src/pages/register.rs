use crate::api::auth::{register_user, RegisterRequest};
use crate::session;
use wasm_bindgen_futures::spawn_local;
use yew::prelude::*;

#[derive(Properties, PartialEq)]
pub struct RegisterProps {
    pub on_authenticated: Callback<()>,
    pub on_switch: Callback<()>,
}

#[function_component(RegisterPage)]
pub fn register_page(props: &RegisterProps) -> Html {
    let name = use_state(String::new);
    let email = use_state(String::new);
    let password = use_state(String::new);
    let error = use_state(|| None::<String>);
    let submitting = use_state(|| false);

    let on_submit = {
        let name = name.clone();
        let email = email.clone();
        let password = password.clone();
        let error = error.clone();
        let submitting = submitting.clone();
        let on_authenticated = props.on_authenticated.clone();
        let on_switch = props.on_switch.clone();
        Callback::from(move |e: SubmitEvent| {
            e.prevent_default();

            let request = RegisterRequest {
                name: name.trim().to_string(),
                email: email.trim().to_string(),
                password: (*password).clone(),
            };
            if request.name.is_empty() || request.email.is_empty() || request.password.is_empty() {
                error.set(Some("All fields are required.".to_string()));
                return;
            }

            error.set(None);
            submitting.set(true);

            let error = error.clone();
            let submitting = submitting.clone();
            let on_authenticated = on_authenticated.clone();
            let on_switch = on_switch.clone();
            spawn_local(async move {
                match register_user(&request).await {
                    Ok(response) => match response.token.as_deref() {
                        Some(token) => {
                            session::store_token(token);
                            session::store_profile(&response.profile());
                            on_authenticated.emit(());
                        }
                        // Account created but not signed in; hand over to
                        // the login form.
                        None => on_switch.emit(()),
                    },
                    Err(err) => error.set(Some(err.message_or("Registration failed"))),
                }
                submitting.set(false);
            });
        })
    };

    let on_switch = {
        let on_switch = props.on_switch.clone();
        Callback::from(move |_| on_switch.emit(()))
    };

    html! {
        <div class="min-h-screen flex items-center justify-center bg-gray-100 p-4">
            <div class="bg-white rounded-xl shadow-md p-8 w-full max-w-md">
                <h1 class="text-2xl font-bold text-center mb-1">{"Expense Tracker"}</h1>
                <p class="text-gray-500 text-center mb-6">{"Create your account"}</p>

                if let Some(msg) = &*error {
                    <div class="bg-red-100 text-red-700 rounded-lg px-4 py-3 mb-4 text-sm">{ msg.clone() }</div>
                }

                <form onsubmit={on_submit}>
                    <label class="block mb-3">
                        <span class="text-sm text-gray-600">{"Name"}</span>
                        <input
                            type="text"
                            value={(*name).clone()}
                            oninput={{
                                let name = name.clone();
                                Callback::from(move |e: InputEvent| {
                                    let input: web_sys::HtmlInputElement = e.target_unchecked_into();
                                    name.set(input.value());
                                })
                            }}
                            class="mt-1 w-full border rounded-lg px-3 py-2 focus:outline-none focus:ring-2 focus:ring-blue-500"
                        />
                    </label>
                    <label class="block mb-3">
                        <span class="text-sm text-gray-600">{"Email"}</span>
                        <input
                            type="email"
                            value={(*email).clone()}
                            oninput={{
                                let email = email.clone();
                                Callback::from(move |e: InputEvent| {
                                    let input: web_sys::HtmlInputElement = e.target_unchecked_into();
                                    email.set(input.value());
                                })
                            }}
                            class="mt-1 w-full border rounded-lg px-3 py-2 focus:outline-none focus:ring-2 focus:ring-blue-500"
                        />
                    </label>
                    <label class="block mb-5">
                        <span class="text-sm text-gray-600">{"Password"}</span>
                        <input
                            type="password"
                            value={(*password).clone()}
                            oninput={{
                                let password = password.clone();
                                Callback::from(move |e: InputEvent| {
                                    let input: web_sys::HtmlInputElement = e.target_unchecked_into();
                                    password.set(input.value());
                                })
                            }}
                            class="mt-1 w-full border rounded-lg px-3 py-2 focus:outline-none focus:ring-2 focus:ring-blue-500"
                        />
                    </label>
                    <button
                        type="submit"
                        disabled={*submitting}
                        class="w-full bg-blue-600 text-white py-2 rounded-lg hover:bg-blue-700"
                    >
                        { if *submitting { "Creating account..." } else { "Register" } }
                    </button>
                </form>

                <p class="text-sm text-gray-500 text-center mt-5">
                    {"Already have an account? "}
                    <button onclick={on_switch} class="text-blue-600 hover:underline">{"Login"}</button>
                </p>
            </div>
        </div>
    }
}
