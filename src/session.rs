//! Bearer token and profile snapshot in browser localStorage. Presence of
//! the token is the logged-in state; both entries are cleared on logout or
//! on any 401 response.

use crate::models::UserProfile;

const TOKEN_KEY: &str = "token";
const PROFILE_KEY: &str = "userData";

fn storage() -> Option<web_sys::Storage> {
    web_sys::window().and_then(|window| window.local_storage().ok().flatten())
}

pub fn load_token() -> Option<String> {
    storage()?
        .get_item(TOKEN_KEY)
        .ok()
        .flatten()
        .filter(|token| !token.is_empty())
}

pub fn store_token(token: &str) {
    if let Some(storage) = storage() {
        let _ = storage.set_item(TOKEN_KEY, token);
    }
}

pub fn load_profile() -> Option<UserProfile> {
    let raw = storage()?.get_item(PROFILE_KEY).ok().flatten()?;
    serde_json::from_str(&raw).ok()
}

pub fn store_profile(profile: &UserProfile) {
    if let Some(storage) = storage() {
        if let Ok(raw) = serde_json::to_string(profile) {
            let _ = storage.set_item(PROFILE_KEY, &raw);
        }
    }
}

pub fn clear() {
    if let Some(storage) = storage() {
        let _ = storage.remove_item(TOKEN_KEY);
        let _ = storage.remove_item(PROFILE_KEY);
    }
}
