mod budget;
mod dashboard;
mod login;
mod register;
mod settings;
mod transactions;

pub use budget::BudgetPage;
pub use dashboard::DashboardPage;
pub use login::LoginPage;
pub use register::RegisterPage;
pub use settings::SettingsPage;
pub use transactions::TransactionsPage;

use crate::api::ApiError;
use crate::context::AppContext;
use yew::UseStateHandle;

/// Shared failure path for fetches and mutations: a 401 ends the session;
/// anything else is logged and surfaced with the backend message when
/// present. No retries anywhere.
pub(crate) fn handle_api_error(
    err: ApiError,
    fallback: &str,
    message: &UseStateHandle<Option<String>>,
    ctx: &AppContext,
) {
    match err {
        ApiError::Unauthorized => ctx.on_logout.emit(()),
        err => {
            log::error!("api call failed: {}", err);
            message.set(Some(err.message_or(fallback)));
        }
    }
}

pub(crate) fn confirm(prompt: &str) -> bool {
    web_sys::window()
        .map(|window| window.confirm_with_message(prompt).unwrap_or(false))
        .unwrap_or(false)
}
