//! Application-level context handed to every mounted view: the
//! synchronization bus plus the two callbacks a page needs to hand control
//! back to the shell (navigation and ending the session).

use crate::events::EventBus;
use yew::Callback;

#[derive(Clone, Copy, PartialEq, Eq, Debug)]
pub enum Page {
    Dashboard,
    Transactions,
    Budget,
    Settings,
}

#[derive(Clone, PartialEq)]
pub struct AppContext {
    pub events: EventBus,
    pub on_navigate: Callback<Page>,
    /// Clears the stored session and returns to the login view. Emitted on
    /// explicit logout and on any 401 response.
    pub on_logout: Callback<()>,
}
