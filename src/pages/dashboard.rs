use crate::aggregate::{expense_breakdown, CategorySlice};
use crate::api;
use crate::components::{icon_plus, Navbar, StatCard};
use crate::context::{AppContext, Page};
use crate::events::Topic;
use crate::format::{format_currency, format_date};
use crate::models::{DashboardStats, Transaction, TransactionType};
use crate::pages::handle_api_error;
use crate::session;
use wasm_bindgen_futures::spawn_local;
use yew::prelude::*;

const SLICE_COLORS: [&str; 4] = ["bg-green-400", "bg-blue-500", "bg-orange-400", "bg-red-500"];

/// Stats come from the backend verbatim; only the expense breakdown and
/// the recent-five table are derived locally.
async fn load_dashboard(
    stats: UseStateHandle<DashboardStats>,
    recent: UseStateHandle<Vec<Transaction>>,
    breakdown: UseStateHandle<Vec<CategorySlice>>,
    loading: UseStateHandle<bool>,
    error: UseStateHandle<Option<String>>,
    ctx: AppContext,
) {
    loading.set(true);
    let stats_result = api::dashboard::get_dashboard_stats().await;
    let transactions_result = api::transactions::get_transactions().await;
    match (stats_result, transactions_result) {
        (Ok(fetched_stats), Ok(transactions)) => {
            stats.set(fetched_stats);
            breakdown.set(expense_breakdown(&transactions, 4));
            recent.set(transactions.into_iter().take(5).collect());
            error.set(None);
        }
        (Err(err), _) | (_, Err(err)) => {
            handle_api_error(err, "Failed to load dashboard data", &error, &ctx);
        }
    }
    loading.set(false);
}

#[function_component(DashboardPage)]
pub fn dashboard_page() -> Html {
    let Some(ctx) = use_context::<AppContext>() else {
        return html! {};
    };

    let stats = use_state(DashboardStats::default);
    let recent = use_state(Vec::<Transaction>::new);
    let breakdown = use_state(Vec::<CategorySlice>::new);
    let loading = use_state(|| true);
    let error = use_state(|| None::<String>);

    {
        let stats = stats.clone();
        let recent = recent.clone();
        let breakdown = breakdown.clone();
        let loading = loading.clone();
        let error = error.clone();
        let ctx = ctx.clone();
        use_effect_with(
            (),
            move |_| {
                if session::load_token().is_none() {
                    ctx.on_logout.emit(());
                } else {
                    spawn_local(load_dashboard(stats, recent, breakdown, loading, error, ctx));
                }
                || ()
            },
        );
    }

    {
        let events = ctx.events.clone();
        let stats = stats.clone();
        let recent = recent.clone();
        let breakdown = breakdown.clone();
        let loading = loading.clone();
        let error = error.clone();
        let refresh_ctx = ctx.clone();
        use_effect_with(
            (),
            move |_| {
                let on_changed = Callback::from(move |_| {
                    spawn_local(load_dashboard(
                        stats.clone(),
                        recent.clone(),
                        breakdown.clone(),
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

    let on_add = {
        let on_navigate = ctx.on_navigate.clone();
        Callback::from(move |_| on_navigate.emit(Page::Transactions))
    };

    let breakdown_total: f64 = breakdown.iter().map(|s| s.total).sum();

    html! {
        <div class="flex-1 p-6 w-full">
            <Navbar title="Dashboard" />

            if let Some(msg) = &*error {
                <div class="bg-red-100 text-red-700 rounded-lg px-4 py-3 mb-4">{ msg.clone() }</div>
            }

            if *loading {
                <div class="text-center py-8">{"Loading..."}</div>
            } else {
                <div class="grid grid-cols-1 sm:grid-cols-3 gap-6 mb-6">
                    <StatCard title="Total Balance" amount={format_currency(stats.balance)} color="bg-blue-500" />
                    <StatCard title="Total Income" amount={format_currency(stats.total_income)} color="bg-green-500" />
                    <StatCard title="Total Expense" amount={format_currency(stats.total_expense)} color="bg-red-500" />
                </div>
            }

            <div class="grid grid-cols-1 md:grid-cols-2 gap-6 mb-6">
                <div class="bg-white p-5 rounded-xl shadow-md">
                    <div class="flex justify-between items-center mb-4">
                        <div class="font-semibold">{"Expense Breakdown"}</div>
                        <span class="text-sm text-gray-500">
                            { format!("Top category: {} ({})", stats.top_category, format_currency(stats.top_category_spent)) }
                        </span>
                    </div>
                    { if breakdown.is_empty() {
                        html! { <div class="text-center py-8 text-gray-500">{"No expense data available"}</div> }
                    } else {
                        html! {
                            <div class="space-y-3">
                                { for breakdown.iter().enumerate().map(|(idx, slice)| {
                                    let share = if breakdown_total > 0.0 {
                                        (slice.total / breakdown_total * 100.0).round() as i64
                                    } else {
                                        0
                                    };
                                    let color = SLICE_COLORS[idx % SLICE_COLORS.len()];
                                    html! {
                                        <div>
                                            <div class="flex justify-between text-sm mb-1">
                                                <span class="flex items-center gap-2">
                                                    <span class={format!("w-3 h-3 rounded-full inline-block {}", color)}></span>
                                                    { slice.category.clone() }
                                                </span>
                                                <span class="text-gray-600">{ format_currency(slice.total) }</span>
                                            </div>
                                            <div class="w-full bg-gray-200 rounded-full h-2">
                                                <div class={format!("{} h-2 rounded-full", color)} style={format!("width: {}%", share)}></div>
                                            </div>
                                        </div>
                                    }
                                }) }
                            </div>
                        }
                    }}
                </div>

                <div class="bg-white p-5 rounded-xl shadow-md">
                    <div class="flex justify-between mb-4">
                        <div class="font-semibold">{"Recent Transactions"}</div>
                        <button onclick={on_add} class="flex items-center gap-1 text-blue-600 hover:text-blue-800 font-semibold">
                            { icon_plus() }
                            {"Add"}
                        </button>
                    </div>
                    { if *loading {
                        html! { <div class="text-center py-8">{"Loading..."}</div> }
                    } else if recent.is_empty() {
                        html! { <div class="text-center py-8 text-gray-500">{"No transactions found"}</div> }
                    } else {
                        html! {
                            <table class="w-full text-left border-collapse">
                                <thead>
                                    <tr class="text-gray-500 text-sm border-b">
                                        <th class="py-2 font-semibold">{"Date"}</th>
                                        <th class="py-2 font-semibold">{"Category"}</th>
                                        <th class="py-2 font-semibold">{"Description"}</th>
                                        <th class="py-2 font-semibold text-right">{"Amount"}</th>
                                        <th class="py-2 font-semibold text-right">{"Type"}</th>
                                    </tr>
                                </thead>
                                <tbody class="divide-y">
                                    { for recent.iter().map(|tx| {
                                        let type_color = if tx.kind == TransactionType::Expense { "text-red-600" } else { "text-green-600" };
                                        html! {
                                            <tr key={tx.id.clone()} class="text-sm hover:bg-gray-50">
                                                <td class="py-2 text-gray-500">{ format_date(&tx.date) }</td>
                                                <td class="py-2">{ tx.category.clone() }</td>
                                                <td class="py-2">{ tx.description.clone().unwrap_or_else(|| "-".to_string()) }</td>
                                                <td class="py-2 text-right">{ format_currency(tx.amount) }</td>
                                                <td class={format!("py-2 text-right font-medium {}", type_color)}>{ tx.kind.to_string() }</td>
                                            </tr>
                                        }
                                    }) }
                                </tbody>
                            </table>
                        }
                    }}
                </div>
            </div>
        </div>
    }
}
