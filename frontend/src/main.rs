mod components;
mod hooks;
mod services;

use yew::prelude::*;

use components::forms::{ExpenseForm, IncomeForm};
use components::transactions::TransactionTable;
use components::{AuthView, BalanceCard, MessageBanner, Navbar};
use hooks::{
    use_expense_form, use_finance_data, use_income_form, use_notification, use_session,
    SessionState,
};
use services::api::ApiClient;

#[function_component(App)]
fn app() -> Html {
    let api_client = ApiClient::new();

    let notification = use_notification();
    let session = use_session(&api_client, notification.show.clone());
    let data = use_finance_data(&api_client);

    // Unlock the data fetch only once the session gate reports logged in;
    // nothing is requested while the auth view is showing
    {
        let refresh = data.refresh.clone();
        use_effect_with(session.state.clone(), move |state| {
            if matches!(state, SessionState::LoggedIn { .. }) {
                refresh.emit(());
            }
            || ()
        });
    }

    let income_form = use_income_form(&api_client, notification.show.clone(), data.refresh.clone());
    let expense_form =
        use_expense_form(&api_client, notification.show.clone(), data.refresh.clone());

    match &session.state {
        SessionState::Checking => html! {
            <div class="loading">{"Loading..."}</div>
        },
        SessionState::LoggedOut => html! {
            <AuthView
                auth_error={session.auth_error.clone()}
                registered={session.registered}
                on_login={session.login.clone()}
                on_register={session.register.clone()}
            />
        },
        SessionState::LoggedIn { username } => html! {
            <>
                <Navbar username={username.clone()} on_logout={session.logout.clone()} />
                <div class="container">
                    <MessageBanner notification={notification.current.clone()} />
                    <BalanceCard summary={data.summary.clone()} />
                    <IncomeForm
                        fields={income_form.fields.clone()}
                        submitting={income_form.submitting}
                        on_amount_change={income_form.on_amount_change.clone()}
                        on_source_change={income_form.on_source_change.clone()}
                        on_date_change={income_form.on_date_change.clone()}
                        on_description_change={income_form.on_description_change.clone()}
                        on_submit={income_form.submit.clone()}
                    />
                    <ExpenseForm
                        fields={expense_form.fields.clone()}
                        editing={expense_form.editing.is_some()}
                        submitting={expense_form.submitting}
                        on_amount_change={expense_form.on_amount_change.clone()}
                        on_category_change={expense_form.on_category_change.clone()}
                        on_date_change={expense_form.on_date_change.clone()}
                        on_description_change={expense_form.on_description_change.clone()}
                        on_submit={expense_form.submit.clone()}
                        on_cancel={expense_form.cancel_edit.clone()}
                    />
                    <TransactionTable
                        income={data.income.clone()}
                        expenses={data.expenses.clone()}
                        loading={data.loading}
                        on_edit={expense_form.begin_edit.clone()}
                        on_delete={expense_form.delete.clone()}
                    />
                </div>
            </>
        },
    }
}

fn main() {
    yew::Renderer::<App>::new().render();
}
