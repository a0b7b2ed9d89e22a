use gloo::storage::{LocalStorage, Storage};
use shared::{LoginRequest, RegisterRequest};
use wasm_bindgen_futures::spawn_local;
use yew::prelude::*;

use crate::hooks::use_notification::Notification;
use crate::services::api::ApiClient;

/// Local storage key for the display username (the only persisted state).
const USERNAME_KEY: &str = "username";

/// Where the view stands with respect to the backend session.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SessionState {
    /// The one-shot check-session call is still in flight
    Checking,
    LoggedIn { username: String },
    LoggedOut,
}

pub struct UseSessionResult {
    pub state: SessionState,
    /// Login/register failure message shown inside the auth view
    pub auth_error: Option<String>,
    /// Set once a registration succeeds, so the auth view can switch back
    /// to the login form
    pub registered: bool,
    pub login: Callback<LoginRequest>,
    pub register: Callback<RegisterRequest>,
    pub logout: Callback<()>,
}

/// Session gate and auth actions.
///
/// On mount this fires a single check-session request; a transport failure
/// reads the same as "not logged in". The session is not revalidated after
/// that - an expiry only shows up when the next mutating call fails.
#[hook]
pub fn use_session(api_client: &ApiClient, notify: Callback<Notification>) -> UseSessionResult {
    let state = use_state(|| SessionState::Checking);
    let auth_error = use_state(|| Option::<String>::None);
    let registered = use_state(|| false);

    {
        let api_client = api_client.clone();
        let state = state.clone();
        use_effect_with((), move |_| {
            spawn_local(async move {
                match api_client.check_session().await {
                    Ok(info) if info.logged_in => {
                        let username = info.username.unwrap_or_default();
                        state.set(SessionState::LoggedIn { username });
                    }
                    Ok(_) => state.set(SessionState::LoggedOut),
                    Err(e) => {
                        gloo::console::warn!("Session check failed:", e.to_string());
                        state.set(SessionState::LoggedOut);
                    }
                }
            });
            || ()
        });
    }

    let login = {
        let api_client = api_client.clone();
        let state = state.clone();
        let auth_error = auth_error.clone();
        use_callback((), move |request: LoginRequest, _| {
            let api_client = api_client.clone();
            let state = state.clone();
            let auth_error = auth_error.clone();
            spawn_local(async move {
                auth_error.set(None);
                match api_client.login(&request).await {
                    Ok(response) => {
                        let _ = LocalStorage::set(USERNAME_KEY, &response.username);
                        state.set(SessionState::LoggedIn {
                            username: response.username,
                        });
                    }
                    Err(e) => {
                        // Login is the one place the backend's own message
                        // is surfaced to the user
                        let message = e
                            .backend_message()
                            .unwrap_or("Login failed. Please try again.")
                            .to_string();
                        auth_error.set(Some(message));
                    }
                }
            });
        })
    };

    let register = {
        let api_client = api_client.clone();
        let auth_error = auth_error.clone();
        let registered = registered.clone();
        use_callback((), move |request: RegisterRequest, _| {
            let api_client = api_client.clone();
            let auth_error = auth_error.clone();
            let registered = registered.clone();
            spawn_local(async move {
                auth_error.set(None);
                match api_client.register(&request).await {
                    Ok(()) => registered.set(true),
                    Err(e) => {
                        gloo::console::error!("Registration failed:", e.to_string());
                        auth_error.set(Some("Registration failed. Please try again.".to_string()));
                    }
                }
            });
        })
    };

    let logout = {
        let api_client = api_client.clone();
        let state = state.clone();
        let notify = notify.clone();
        use_callback((), move |_, _| {
            let api_client = api_client.clone();
            let state = state.clone();
            let notify = notify.clone();
            spawn_local(async move {
                match api_client.logout().await {
                    Ok(()) => {
                        LocalStorage::delete(USERNAME_KEY);
                        state.set(SessionState::LoggedOut);
                    }
                    Err(e) => {
                        gloo::console::error!("Logout failed:", e.to_string());
                        notify.emit(Notification::error("Failed to log out"));
                    }
                }
            });
        })
    };

    UseSessionResult {
        state: (*state).clone(),
        auth_error: (*auth_error).clone(),
        registered: *registered,
        login,
        register,
        logout,
    }
}
