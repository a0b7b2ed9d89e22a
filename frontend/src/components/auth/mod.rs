pub mod login_form;
pub mod register_form;

use shared::{LoginRequest, RegisterRequest};
use yew::prelude::*;

pub use login_form::LoginForm;
pub use register_form::RegisterForm;

#[derive(Clone, Copy, PartialEq, Eq)]
enum AuthPage {
    Login,
    Register,
}

#[derive(Properties, PartialEq)]
pub struct AuthViewProps {
    /// Login/register failure message from the session controller
    pub auth_error: Option<String>,
    /// Flips true once registration succeeds
    pub registered: bool,
    pub on_login: Callback<LoginRequest>,
    pub on_register: Callback<RegisterRequest>,
}

/// The logged-out view: a login card with a toggle to registration.
/// This stands in for the original app's /login and /register routes;
/// routing proper is out of scope.
#[function_component(AuthView)]
pub fn auth_view(props: &AuthViewProps) -> Html {
    let page = use_state(|| AuthPage::Login);

    // A successful registration drops the user back on the login form
    {
        let page = page.clone();
        use_effect_with(props.registered, move |registered| {
            if *registered {
                page.set(AuthPage::Login);
            }
            || ()
        });
    }

    let to_register = {
        let page = page.clone();
        Callback::from(move |_: MouseEvent| page.set(AuthPage::Register))
    };
    let to_login = {
        let page = page.clone();
        Callback::from(move |_: MouseEvent| page.set(AuthPage::Login))
    };

    html! {
        <div class="auth-container">
            <div class="auth-card">
                {match *page {
                    AuthPage::Login => html! {
                        <>
                            {if props.registered {
                                html! {
                                    <div class="success-message">
                                        {"Account created successfully. Please log in."}
                                    </div>
                                }
                            } else { html! {} }}
                            <LoginForm
                                error={props.auth_error.clone()}
                                on_submit={props.on_login.clone()}
                            />
                            <div class="auth-footer">
                                {"Don't have an account? "}
                                <button onclick={to_register}>{"Register here"}</button>
                            </div>
                        </>
                    },
                    AuthPage::Register => html! {
                        <>
                            <RegisterForm
                                error={props.auth_error.clone()}
                                on_submit={props.on_register.clone()}
                            />
                            <div class="auth-footer">
                                {"Already have an account? "}
                                <button onclick={to_login}>{"Login here"}</button>
                            </div>
                        </>
                    },
                }}
            </div>
        </div>
    }
}
