use shared::{RegisterFormFields, RegisterRequest};
use web_sys::HtmlInputElement;
use yew::prelude::*;

#[derive(Properties, PartialEq)]
pub struct RegisterFormProps {
    /// Backend failure message from the last registration attempt
    pub error: Option<String>,
    pub on_submit: Callback<RegisterRequest>,
}

#[function_component(RegisterForm)]
pub fn register_form(props: &RegisterFormProps) -> Html {
    let username = use_state(String::new);
    let password = use_state(String::new);
    let local_error = use_state(|| Option::<String>::None);

    let on_username_change = {
        let username = username.clone();
        Callback::from(move |e: Event| {
            let input: HtmlInputElement = e.target_unchecked_into();
            username.set(input.value());
        })
    };

    let on_password_change = {
        let password = password.clone();
        Callback::from(move |e: Event| {
            let input: HtmlInputElement = e.target_unchecked_into();
            password.set(input.value());
        })
    };

    let onsubmit = {
        let username = username.clone();
        let password = password.clone();
        let local_error = local_error.clone();
        let on_submit = props.on_submit.clone();
        Callback::from(move |e: SubmitEvent| {
            e.prevent_default();
            let fields = RegisterFormFields {
                username: (*username).clone(),
                password: (*password).clone(),
            };
            match fields.validate() {
                Ok(request) => {
                    local_error.set(None);
                    on_submit.emit(request);
                }
                Err(error) => local_error.set(Some(error.to_string())),
            }
        })
    };

    let error = (*local_error).clone().or_else(|| props.error.clone());

    html! {
        <>
            <h2>{"Register"}</h2>
            {if let Some(error) = error {
                html! { <div class="error-message">{error}</div> }
            } else { html! {} }}
            <form {onsubmit}>
                <div class="form-group">
                    <label>{"Username"}</label>
                    <input
                        type="text"
                        name="username"
                        placeholder="Choose a username"
                        value={(*username).clone()}
                        onchange={on_username_change}
                    />
                </div>
                <div class="form-group">
                    <label>{"Password"}</label>
                    <input
                        type="password"
                        name="password"
                        placeholder="Choose a password"
                        value={(*password).clone()}
                        onchange={on_password_change}
                    />
                </div>
                <button type="submit" class="btn">{"Register"}</button>
            </form>
        </>
    }
}
