use crate::api;
use crate::components::{icon_edit, icon_filter, icon_plus, icon_trash, Navbar};
use crate::context::AppContext;
use crate::events::Topic;
use crate::filters::{distinct_categories, filter_transactions};
use crate::format::{format_currency, format_date};
use crate::models::{Transaction, TransactionInput, TransactionType};
use crate::pages::{confirm, handle_api_error};
use crate::session;
use wasm_bindgen_futures::spawn_local;
use yew::prelude::*;

async fn load_transactions(
    transactions: UseStateHandle<Vec<Transaction>>,
    loading: UseStateHandle<bool>,
    error: UseStateHandle<Option<String>>,
    ctx: AppContext,
) {
    loading.set(true);
    match api::transactions::get_transactions().await {
        Ok(list) => {
            transactions.set(list);
            error.set(None);
        }
        Err(err) => handle_api_error(err, "Failed to load transactions", &error, &ctx),
    }
    loading.set(false);
}

#[function_component(TransactionsPage)]
pub fn transactions_page() -> Html {
    let Some(ctx) = use_context::<AppContext>() else {
        return html! {};
    };

    let transactions = use_state(Vec::<Transaction>::new);
    let loading = use_state(|| true);
    let error = use_state(|| None::<String>);

    let search = use_state(String::new);
    let filter_open = use_state(|| false);
    let filter_kind = use_state(|| None::<TransactionType>);
    let filter_category = use_state(|| None::<String>);

    let form_open = use_state(|| false);
    let editing_id = use_state(|| None::<String>);
    let form_kind = use_state(|| TransactionType::Expense);
    let form_category = use_state(String::new);
    let form_amount = use_state(String::new);
    let form_date = use_state(String::new);
    let form_description = use_state(String::new);
    let saving = use_state(|| false);

    {
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
                    spawn_local(load_transactions(transactions, loading, error, ctx));
                }
                || ()
            },
        );
    }

    let reset_form = {
        let form_open = form_open.clone();
        let editing_id = editing_id.clone();
        let form_kind = form_kind.clone();
        let form_category = form_category.clone();
        let form_amount = form_amount.clone();
        let form_date = form_date.clone();
        let form_description = form_description.clone();
        Callback::from(move |_: ()| {
            form_open.set(false);
            editing_id.set(None);
            form_kind.set(TransactionType::Expense);
            form_category.set(String::new());
            form_amount.set(String::new());
            form_date.set(String::new());
            form_description.set(String::new());
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
        let form_kind = form_kind.clone();
        let form_category = form_category.clone();
        let form_amount = form_amount.clone();
        let form_date = form_date.clone();
        let form_description = form_description.clone();
        let error = error.clone();
        Callback::from(move |tx: Transaction| {
            editing_id.set(Some(tx.id.clone()));
            form_kind.set(tx.kind);
            form_category.set(tx.category.clone());
            form_amount.set(tx.amount.to_string());
            form_date.set(tx.date.get(0..10).unwrap_or(&tx.date).to_string());
            form_description.set(tx.description.clone().unwrap_or_default());
            error.set(None);
            form_open.set(true);
        })
    };

    let on_submit = {
        let transactions = transactions.clone();
        let loading = loading.clone();
        let error = error.clone();
        let editing_id = editing_id.clone();
        let form_kind = form_kind.clone();
        let form_category = form_category.clone();
        let form_amount = form_amount.clone();
        let form_date = form_date.clone();
        let form_description = form_description.clone();
        let saving = saving.clone();
        let reset_form = reset_form.clone();
        let ctx = ctx.clone();
        Callback::from(move |e: SubmitEvent| {
            e.prevent_default();

            let category = form_category.trim().to_string();
            let date = form_date.trim().to_string();
            if category.is_empty() || date.is_empty() {
                error.set(Some("Category and date are required.".to_string()));
                return;
            }
            let Ok(amount) = form_amount.trim().parse::<f64>() else {
                error.set(Some("Amount must be a number.".to_string()));
                return;
            };
            if amount < 0.0 {
                error.set(Some("Amount must not be negative.".to_string()));
                return;
            }

            let input = TransactionInput {
                kind: *form_kind,
                category,
                amount,
                date,
                description: form_description.trim().to_string(),
            };
            let editing = (*editing_id).clone();

            error.set(None);
            saving.set(true);

            let transactions = transactions.clone();
            let loading = loading.clone();
            let error = error.clone();
            let saving = saving.clone();
            let reset_form = reset_form.clone();
            let ctx = ctx.clone();
            spawn_local(async move {
                let result = match editing.as_deref() {
                    Some(id) => api::transactions::update_transaction(id, &input).await,
                    None => api::transactions::add_transaction(&input).await,
                };
                match result {
                    Ok(_) => {
                        load_transactions(transactions, loading, error, ctx.clone()).await;
                        reset_form.emit(());
                        // Tell any other mounted view showing derived
                        // transaction data to re-fetch.
                        ctx.events.publish(Topic::TransactionsChanged);
                    }
                    Err(err) => handle_api_error(err, "Failed to save transaction", &error, &ctx),
                }
                saving.set(false);
            });
        })
    };

    let on_delete = {
        let transactions = transactions.clone();
        let loading = loading.clone();
        let error = error.clone();
        let ctx = ctx.clone();
        Callback::from(move |id: String| {
            if !confirm("Are you sure you want to delete this transaction?") {
                return;
            }
            let transactions = transactions.clone();
            let loading = loading.clone();
            let error = error.clone();
            let ctx = ctx.clone();
            spawn_local(async move {
                match api::transactions::delete_transaction(&id).await {
                    Ok(()) => {
                        load_transactions(transactions, loading, error, ctx.clone()).await;
                        ctx.events.publish(Topic::TransactionsChanged);
                    }
                    Err(err) => handle_api_error(err, "Failed to delete transaction", &error, &ctx),
                }
            });
        })
    };

    let categories = distinct_categories(&transactions);
    let filtered = filter_transactions(
        &transactions,
        &search,
        *filter_kind,
        filter_category.as_deref(),
    );

    html! {
        <div class="flex-1 p-6 w-full">
            <Navbar title="Transactions" />

            <div class="flex flex-col sm:flex-row sm:items-center sm:justify-between gap-3 mb-4">
                <div class="flex flex-wrap items-center gap-2">
                    <input
                        type="text"
                        placeholder="Search"
                        value={(*search).clone()}
                        oninput={{
                            let search = search.clone();
                            Callback::from(move |e: InputEvent| {
                                let input: web_sys::HtmlInputElement = e.target_unchecked_into();
                                search.set(input.value());
                            })
                        }}
                        class="border rounded-lg px-3 py-2 text-sm focus:outline-none focus:ring-2 focus:ring-blue-500"
                    />
                    <button
                        onclick={{
                            let filter_open = filter_open.clone();
                            Callback::from(move |_| filter_open.set(!*filter_open))
                        }}
                        class="flex items-center gap-1 border rounded-lg px-3 py-2 text-sm hover:bg-gray-100"
                    >
                        { icon_filter() }
                        <span>{"Filter"}</span>
                    </button>
                </div>

                <button onclick={on_open_create} class="flex items-center justify-center gap-2 bg-blue-600 text-white px-4 py-2 rounded-lg hover:bg-blue-700 text-sm">
                    { icon_plus() }
                    {"Add Transaction"}
                </button>
            </div>

            if *filter_open {
                <div class="bg-gray-100 rounded-lg p-3 mb-4 text-sm flex flex-wrap gap-3">
                    <label class="flex items-center gap-2">
                        {"Type"}
                        <select
                            onchange={{
                                let filter_kind = filter_kind.clone();
                                Callback::from(move |e: Event| {
                                    let select: web_sys::HtmlSelectElement = e.target_unchecked_into();
                                    filter_kind.set(match select.value().as_str() {
                                        "Income" => Some(TransactionType::Income),
                                        "Expense" => Some(TransactionType::Expense),
                                        _ => None,
                                    });
                                })
                            }}
                            class="border rounded px-2 py-1 bg-white"
                        >
                            <option value="All" selected={filter_kind.is_none()}>{"All"}</option>
                            <option value="Income" selected={*filter_kind == Some(TransactionType::Income)}>{"Income"}</option>
                            <option value="Expense" selected={*filter_kind == Some(TransactionType::Expense)}>{"Expense"}</option>
                        </select>
                    </label>
                    <label class="flex items-center gap-2">
                        {"Category"}
                        <select
                            onchange={{
                                let filter_category = filter_category.clone();
                                Callback::from(move |e: Event| {
                                    let select: web_sys::HtmlSelectElement = e.target_unchecked_into();
                                    let value = select.value();
                                    filter_category.set(if value == "All" { None } else { Some(value) });
                                })
                            }}
                            class="border rounded px-2 py-1 bg-white"
                        >
                            <option value="All" selected={filter_category.is_none()}>{"All"}</option>
                            { for categories.iter().map(|cat| html! {
                                <option value={cat.clone()} selected={filter_category.as_deref() == Some(cat.as_str())}>{ cat.clone() }</option>
                            }) }
                        </select>
                    </label>
                </div>
            }

            if let Some(msg) = &*error {
                <div class="bg-red-100 text-red-700 rounded-lg px-4 py-3 mb-4">{ msg.clone() }</div>
            }

            if *form_open {
                <div class="bg-white rounded-xl shadow-md p-5 mb-4">
                    <h2 class="text-lg font-semibold mb-3">
                        { if editing_id.is_some() { "Edit Transaction" } else { "Add Transaction" } }
                    </h2>
                    <form onsubmit={on_submit}>
                        <div class="grid grid-cols-1 md:grid-cols-5 gap-3 mb-3">
                            <select
                                onchange={{
                                    let form_kind = form_kind.clone();
                                    Callback::from(move |e: Event| {
                                        let select: web_sys::HtmlSelectElement = e.target_unchecked_into();
                                        form_kind.set(if select.value() == "Income" {
                                            TransactionType::Income
                                        } else {
                                            TransactionType::Expense
                                        });
                                    })
                                }}
                                class="border rounded-lg px-3 py-2"
                            >
                                <option value="Expense" selected={*form_kind == TransactionType::Expense}>{"Expense"}</option>
                                <option value="Income" selected={*form_kind == TransactionType::Income}>{"Income"}</option>
                            </select>
                            <input type="text" placeholder="Category" value={(*form_category).clone()} oninput={{
                                let form_category = form_category.clone();
                                Callback::from(move |e: InputEvent| {
                                    let input: web_sys::HtmlInputElement = e.target_unchecked_into();
                                    form_category.set(input.value());
                                })
                            }} class="border rounded-lg px-3 py-2" />
                            <input type="number" min="0" step="0.01" placeholder="Amount" value={(*form_amount).clone()} oninput={{
                                let form_amount = form_amount.clone();
                                Callback::from(move |e: InputEvent| {
                                    let input: web_sys::HtmlInputElement = e.target_unchecked_into();
                                    form_amount.set(input.value());
                                })
                            }} class="border rounded-lg px-3 py-2" />
                            <input type="date" value={(*form_date).clone()} oninput={{
                                let form_date = form_date.clone();
                                Callback::from(move |e: InputEvent| {
                                    let input: web_sys::HtmlInputElement = e.target_unchecked_into();
                                    form_date.set(input.value());
                                })
                            }} class="border rounded-lg px-3 py-2" />
                            <input type="text" placeholder="Description" value={(*form_description).clone()} oninput={{
                                let form_description = form_description.clone();
                                Callback::from(move |e: InputEvent| {
                                    let input: web_sys::HtmlInputElement = e.target_unchecked_into();
                                    form_description.set(input.value());
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

            <div class="bg-white rounded-xl shadow-md overflow-x-auto">
                { if *loading {
                    html! { <div class="text-center py-8">{"Loading..."}</div> }
                } else if filtered.is_empty() {
                    html! { <div class="text-center py-8 text-gray-500">{"No transactions found"}</div> }
                } else {
                    html! {
                        <table class="w-full text-left border-collapse">
                            <thead>
                                <tr class="text-gray-500 text-sm border-b">
                                    <th class="px-5 py-3 font-semibold">{"Date"}</th>
                                    <th class="px-5 py-3 font-semibold">{"Category"}</th>
                                    <th class="px-5 py-3 font-semibold">{"Description"}</th>
                                    <th class="px-5 py-3 font-semibold text-right">{"Amount"}</th>
                                    <th class="px-5 py-3 font-semibold">{"Type"}</th>
                                    <th class="px-5 py-3 font-semibold text-center">{"Action"}</th>
                                </tr>
                            </thead>
                            <tbody class="divide-y">
                                { for filtered.iter().map(|tx| {
                                    let type_color = if tx.kind == TransactionType::Expense { "text-red-600" } else { "text-green-600" };
                                    let edit_tx = (*tx).clone();
                                    let on_open_edit = on_open_edit.clone();
                                    let delete_id = tx.id.clone();
                                    let on_delete = on_delete.clone();
                                    html! {
                                        <tr key={tx.id.clone()} class="text-sm hover:bg-gray-50">
                                            <td class="px-5 py-3 text-gray-500 whitespace-nowrap">{ format_date(&tx.date) }</td>
                                            <td class="px-5 py-3 whitespace-nowrap">{ tx.category.clone() }</td>
                                            <td class="px-5 py-3">{ tx.description.clone().unwrap_or_else(|| "-".to_string()) }</td>
                                            <td class="px-5 py-3 text-right">{ format_currency(tx.amount) }</td>
                                            <td class={format!("px-5 py-3 font-medium {}", type_color)}>{ tx.kind.to_string() }</td>
                                            <td class="px-5 py-3 text-center whitespace-nowrap">
                                                <button
                                                    class="text-blue-600 hover:text-blue-800 p-1"
                                                    onclick={Callback::from(move |_| on_open_edit.emit(edit_tx.clone()))}
                                                >
                                                    { icon_edit() }
                                                </button>
                                                <button
                                                    class="text-red-600 hover:text-red-800 p-1"
                                                    onclick={Callback::from(move |_| on_delete.emit(delete_id.clone()))}
                                                >
                                                    { icon_trash() }
                                                </button>
                                            </td>
                                        </tr>
                                    }
                                }) }
                            </tbody>
                        </table>
                    }
                }}
            </div>
        </div>
    }
}
