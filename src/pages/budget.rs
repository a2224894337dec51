use crate::aggregate::{budget_overview, Band};
use crate::api;
use crate::components::{icon_edit, icon_plus, icon_trash, Navbar};
use crate::context::AppContext;
use crate::events::Topic;
use crate::format::format_currency;
use crate::models::{Budget, BudgetInput, Transaction};
use crate::pages::{confirm, handle_api_error};
use crate::session;
use wasm_bindgen_futures::spawn_local;
use yew::prelude::*;

fn band_class(band: Band) -> &'static str {
    match band {
        Band::OverBudget => "bg-red-500",
        Band::Warning => "bg-yellow-400",
        Band::Normal => "bg-green-500",
    }
}

/// Budgets and transactions are applied together, after both requests
/// resolve, so spent figures never render against a stale counterpart.
async fn load_budget_data(
    budgets: UseStateHandle<Vec<Budget>>,
    transactions: UseStateHandle<Vec<Transaction>>,
    loading: UseStateHandle<bool>,
    error: UseStateHandle<Option<String>>,
    ctx: AppContext,
) {
    loading.set(true);
    let budgets_result = api::budget::get_budgets().await;
    let transactions_result = api::transactions::get_transactions().await;
    match (budgets_result, transactions_result) {
        (Ok(fetched_budgets), Ok(fetched_transactions)) => {
            budgets.set(fetched_budgets);
            transactions.set(fetched_transactions);
            error.set(None);
        }
        (Err(err), _) | (_, Err(err)) => {
            handle_api_error(err, "Failed to load budgets", &error, &ctx);
        }
    }
    loading.set(false);
}

#[function_component(BudgetPage)]
pub fn budget_page() -> Html {
    let Some(ctx) = use_context::<AppContext>() else {
        return html! {};
    };

    let budgets = use_state(Vec::<Budget>::new);
    let transactions = use_state(Vec::<Transaction>::new);
    let loading = use_state(|| true);
    let error = use_state(|| None::<String>);

    let form_open = use_state(|| false);
    let editing_id = use_state(|| None::<String>);
    let form_category = use_state(String::new);
    let form_limit = use_state(String::new);
    let saving = use_state(|| false);

    {
        let budgets = budgets.clone();
        let transactions = transactions.clone();
        let loading = loading.clone();
        let error = error.clone();
        let ctx = ctx.clone();
        use_effect_with(
            (),
            move |_| {
                if session::load_token().is_none() {
                    ctx.on_logout.emit(());
                } else {
                    spawn_local(load_budget_data(budgets, transactions, loading, error, ctx));
                }
                || ()
            },
        );
    }

    {
        let events = ctx.events.clone();
        let budgets = budgets.clone();
        let transactions = transactions.clone();
        let loading = loading.clone();
        let error = error.clone();
        let refresh_ctx = ctx.clone();
        use_effect_with(
            (),
            move |_| {
                let on_changed = Callback::from(move |_| {
                    spawn_local(load_budget_data(
                        budgets.clone(),
                        transactions.clone(),
                        loading.clone(),
                        error.clone(),
                        refresh_ctx.clone(),
                    ));
                });
                let subscription = events.subscribe(Topic::TransactionsChanged, on_changed);
                move || drop(subscription)
            },
        );
    }

    let reset_form = {
        let form_open = form_open.clone();
        let editing_id = editing_id.clone();
        let form_category = form_category.clone();
        let form_limit = form_limit.clone();
        Callback::from(move |_: ()| {
            form_open.set(false);
            editing_id.set(None);
            form_category.set(String::new());
            form_limit.set(String::new());
        })
    };

    let on_open_create = {
        let form_open = form_open.clone();
        let reset_form = reset_form.clone();
        let error = error.clone();
        Callback::from(move |_| {
            reset_form.emit(());
            error.set(None);
            form_open.set(true);
        })
    };

    let on_open_edit = {
        let form_open = form_open.clone();
        let editing_id = editing_id.clone();
        let form_category = form_category.clone();
        let form_limit = form_limit.clone();
        let error = error.clone();
        Callback::from(move |budget: Budget| {
            editing_id.set(Some(budget.id.clone()));
            form_category.set(budget.category.clone());
            form_limit.set(budget.limit.to_string());
            error.set(None);
            form_open.set(true);
        })
    };

    let on_submit = {
        let budgets = budgets.clone();
        let transactions = transactions.clone();
        let loading = loading.clone();
        let error = error.clone();
        let editing_id = editing_id.clone();
        let form_category = form_category.clone();
        let form_limit = form_limit.clone();
        let saving = saving.clone();
        let reset_form = reset_form.clone();
        let ctx = ctx.clone();
        Callback::from(move |e: SubmitEvent| {
            e.prevent_default();

            let category = form_category.trim().to_string();
            if category.is_empty() {
                error.set(Some("Category is required.".to_string()));
                return;
            }
            let Ok(limit) = form_limit.trim().parse::<f64>() else {
                error.set(Some("Limit must be a number.".to_string()));
                return;
            };
            if limit < 0.0 {
                error.set(Some("Limit must not be negative.".to_string()));
                return;
            }

            let input = BudgetInput { category, limit };
            let editing = (*editing_id).clone();

            error.set(None);
            saving.set(true);

            let budgets = budgets.clone();
            let transactions = transactions.clone();
            let loading = loading.clone();
            let error = error.clone();
            let saving = saving.clone();
            let reset_form = reset_form.clone();
            let ctx = ctx.clone();
            spawn_local(async move {
                let result = match editing.as_deref() {
                    Some(id) => api::budget::update_budget(id, &input).await,
                    None => api::budget::create_budget(&input).await,
                };
                match result {
                    Ok(_) => {
                        load_budget_data(budgets, transactions, loading, error, ctx).await;
                        reset_form.emit(());
                    }
                    Err(err) => handle_api_error(err, "Failed to save budget", &error, &ctx),
                }
                saving.set(false);
            });
        })
    };

    let on_delete = {
        let budgets = budgets.clone();
        let transactions = transactions.clone();
        let loading = loading.clone();
        let error = error.clone();
        let ctx = ctx.clone();
        Callback::from(move |id: String| {
            if !confirm("Are you sure you want to delete this budget?") {
                return;
            }
            let budgets = budgets.clone();
            let transactions = transactions.clone();
            let loading = loading.clone();
            let error = error.clone();
            let ctx = ctx.clone();
            spawn_local(async move {
                match api::budget::delete_budget(&id).await {
                    Ok(()) => load_budget_data(budgets, transactions, loading, error, ctx).await,
                    Err(err) => handle_api_error(err, "Failed to delete budget", &error, &ctx),
                }
            });
        })
    };

    let overview = budget_overview(&budgets, &transactions);

    html! {
        <div class="flex-1 p-6 w-full">
            <Navbar title="Budget" />

            if let Some(msg) = &*error {
                <div class="bg-red-100 text-red-700 rounded-lg px-4 py-3 mb-4">{ msg.clone() }</div>
            }

            <div class="bg-white rounded-xl shadow-md p-5 mb-6">
                <div class="flex justify-between items-center mb-3">
                    <div class="font-semibold">{"Monthly Overview"}</div>
                    <span class="text-sm text-gray-500">
                        { format!("{} of {} spent", format_currency(overview.total_spent), format_currency(overview.total_budget)) }
                    </span>
                </div>
                <div class="w-full bg-gray-200 rounded-full h-3 mb-2">
                    <div
                        class={format!("{} h-3 rounded-full", band_class(overview.band))}
                        style={format!("width: {}%", overview.percent.min(100))}
                    ></div>
                </div>
                <div class="flex justify-between text-sm text-gray-600">
                    <span>{ format!("{}%", overview.percent) }</span>
                    <span>{ format!("Remaining: {}", format_currency(overview.remaining)) }</span>
                </div>
            </div>

            <div class="flex justify-between items-center mb-4">
                <h2 class="text-lg font-semibold">{"Category Budgets"}</h2>
                <button onclick={on_open_create} class="flex items-center gap-2 bg-blue-600 text-white px-4 py-2 rounded-lg hover:bg-blue-700 text-sm">
                    { icon_plus() }
                    {"Add Budget"}
                </button>
            </div>

            if *form_open {
                <div class="bg-white rounded-xl shadow-md p-5 mb-4">
                    <h2 class="text-lg font-semibold mb-3">
                        { if editing_id.is_some() { "Edit Budget" } else { "Add Budget" } }
                    </h2>
                    <form onsubmit={on_submit}>
                        <div class="grid grid-cols-1 md:grid-cols-2 gap-3 mb-3">
                            <input type="text" placeholder="Category" value={(*form_category).clone()} oninput={{
                                let form_category = form_category.clone();
                                Callback::from(move |e: InputEvent| {
                                    let input: web_sys::HtmlInputElement = e.target_unchecked_into();
                                    form_category.set(input.value());
                                })
                            }} class="border rounded-lg px-3 py-2" />
                            <input type="number" min="0" step="0.01" placeholder="Monthly limit" value={(*form_limit).clone()} oninput={{
                                let form_limit = form_limit.clone();
                                Callback::from(move |e: InputEvent| {
                                    let input: web_sys::HtmlInputElement = e.target_unchecked_into();
                                    form_limit.set(input.value());
                                })
                            }} class="border rounded-lg px-3 py-2" />
                        </div>
                        <div class="flex gap-2 justify-end">
                            <button type="button" onclick={{
                                let reset_form = reset_form.clone();
                                Callback::from(move |_| reset_form.emit(()))
                            }} class="px-4 py-2 rounded-lg border hover:bg-gray-100">{"Cancel"}</button>
                            <button type="submit" disabled={*saving} class="px-4 py-2 rounded-lg bg-blue-600 text-white hover:bg-blue-700">
                                { if *saving { "Saving..." } else if editing_id.is_some() { "Update" } else { "Add" } }
                            </button>
                        </div>
                    </form>
                </div>
            }

            { if *loading {
                html! { <div class="text-center py-8">{"Loading..."}</div> }
            } else if overview.categories.is_empty() {
                html! { <div class="bg-white rounded-xl shadow-md text-center py-8 text-gray-500">{"No budgets yet"}</div> }
            } else {
                html! {
                    <div class="grid grid-cols-1 md:grid-cols-2 gap-4">
                        { for overview.categories.iter().map(|status| {
                            let edit_budget = status.budget.clone();
                            let on_open_edit = on_open_edit.clone();
                            let delete_id = status.budget.id.clone();
                            let on_delete = on_delete.clone();
                            html! {
                                <div key={status.budget.id.clone()} class="bg-white rounded-xl shadow-md p-5">
                                    <div class="flex justify-between items-center mb-2">
                                        <span class="font-semibold">{ status.budget.category.clone() }</span>
                                        <span>
                                            <button
                                                class="text-blue-600 hover:text-blue-800 p-1"
                                                onclick={Callback::from(move |_| on_open_edit.emit(edit_budget.clone()))}
                                            >
                                                { icon_edit() }
                                            </button>
                                            <button
                                                class="text-red-600 hover:text-red-800 p-1"
                                                onclick={Callback::from(move |_| on_delete.emit(delete_id.clone()))}
                                            >
                                                { icon_trash() }
                                            </button>
                                        </span>
                                    </div>
                                    <div class="text-sm text-gray-600 mb-2">
                                        { format!("{} of {}", format_currency(status.spent), format_currency(status.budget.limit)) }
                                    </div>
                                    <div class="w-full bg-gray-200 rounded-full h-2 mb-1">
                                        <div
                                            class={format!("{} h-2 rounded-full", band_class(status.band))}
                                            style={format!("width: {}%", status.percent.min(100))}
                                        ></div>
                                    </div>
                                    <div class="flex justify-between text-xs text-gray-500">
                                        <span>{ format!("{}%", status.percent) }</span>
                                        if status.band == Band::OverBudget {
                                            <span class="text-red-600 font-medium">{"Over budget"}</span>
                                        }
                                    </div>
                                </div>
                            }
                        }) }
                    </div>
                }
            }}
        </div>
    }
}
