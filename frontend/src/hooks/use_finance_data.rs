use shared::{Expense, Income, Summary};
use wasm_bindgen_futures::spawn_local;
use yew::prelude::*;

use crate::services::api::ApiClient;

pub struct UseFinanceDataResult {
    pub summary: Summary,
    pub income: Vec<Income>,
    pub expenses: Vec<Expense>,
    pub loading: bool,
    /// Refetch all three read endpoints. Emitted when the session unlocks
    /// and after every successful mutation.
    pub refresh: Callback<()>,
}

/// Server-state mirror: summary, income list, expense list.
///
/// `refresh` always re-requests all three endpoints; mutations never patch
/// this state locally. A failed fetch logs and keeps the previous value so
/// the view stays usable.
#[hook]
pub fn use_finance_data(api_client: &ApiClient) -> UseFinanceDataResult {
    let summary = use_state(Summary::default);
    let income = use_state(Vec::<Income>::new);
    let expenses = use_state(Vec::<Expense>::new);
    let loading = use_state(|| false);

    let refresh = {
        let api_client = api_client.clone();
        let summary = summary.clone();
        let income = income.clone();
        let expenses = expenses.clone();
        let loading = loading.clone();

        use_callback((), move |_, _| {
            let api_client = api_client.clone();
            let summary = summary.clone();
            let income = income.clone();
            let expenses = expenses.clone();
            let loading = loading.clone();

            spawn_local(async move {
                loading.set(true);

                match api_client.get_summary().await {
                    Ok(data) => summary.set(data),
                    Err(e) => gloo::console::error!("Failed to fetch summary:", e.to_string()),
                }

                match api_client.get_income().await {
                    Ok(data) => income.set(data),
                    Err(e) => gloo::console::error!("Failed to fetch income:", e.to_string()),
                }

                match api_client.get_expenses().await {
                    Ok(data) => expenses.set(data),
                    Err(e) => gloo::console::error!("Failed to fetch expenses:", e.to_string()),
                }

                loading.set(false);
            });
        })
    };

    UseFinanceDataResult {
        summary: (*summary).clone(),
        income: (*income).clone(),
        expenses: (*expenses).clone(),
        loading: *loading,
        refresh,
    }
}
