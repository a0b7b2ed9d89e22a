use yew::prelude::*;

#[derive(Properties, PartialEq)]
pub struct NavbarProps {
    pub username: String,
    pub on_logout: Callback<()>,
}

#[function_component(Navbar)]
pub fn navbar(props: &NavbarProps) -> Html {
    let on_logout = {
        let on_logout = props.on_logout.clone();
        Callback::from(move |_: MouseEvent| on_logout.emit(()))
    };

    html! {
        <nav class="navbar">
            <h1>{"💰 Expense Tracker"}</h1>
            <div class="navbar-links">
                <span>{format!("Welcome, {}!", props.username)}</span>
                <button onclick={on_logout}>{"Logout"}</button>
            </div>
        </nav>
    }
}
