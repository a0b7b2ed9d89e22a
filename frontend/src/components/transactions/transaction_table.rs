use shared::{combine_transactions, Expense, Income, Transaction, TransactionKind};
use yew::prelude::*;

use crate::services::date_utils::format_display_date;

#[derive(Properties, PartialEq)]
pub struct TransactionTableProps {
    pub income: Vec<Income>,
    pub expenses: Vec<Expense>,
    pub loading: bool,
    pub on_edit: Callback<Expense>,
    pub on_delete: Callback<i64>,
}

/// Combined transaction history, newest first. The merged view is rebuilt
/// from the two lists on every render; fine at personal-finance scale.
#[function_component(TransactionTable)]
pub fn transaction_table(props: &TransactionTableProps) -> Html {
    let transactions = combine_transactions(&props.income, &props.expenses);

    let rows: Html = if transactions.is_empty() {
        html! {
            <tr>
                <td colspan="6" style="text-align: center">{"No transactions yet"}</td>
            </tr>
        }
    } else {
        transactions
            .iter()
            .map(|transaction| render_row(props, transaction))
            .collect()
    };

    html! {
        <div class="card">
            <h2>{"Transaction History"}</h2>
            {if props.loading {
                html! { <div class="loading">{"Loading transactions..."}</div> }
            } else {
                html! {
                    <div class="table-container">
                        <table>
                            <thead>
                                <tr>
                                    <th>{"Date"}</th>
                                    <th>{"Type"}</th>
                                    <th>{"Category/Source"}</th>
                                    <th>{"Amount"}</th>
                                    <th>{"Description"}</th>
                                    <th>{"Actions"}</th>
                                </tr>
                            </thead>
                            <tbody>{rows}</tbody>
                        </table>
                    </div>
                }
            }}
        </div>
    }
}

fn render_row(props: &TransactionTableProps, transaction: &Transaction) -> Html {
    let kind_class = match transaction.kind {
        TransactionKind::Income => "income",
        TransactionKind::Expense => "expense",
    };

    let actions = match transaction.expense_id {
        Some(expense_id) => {
            // The edit action needs the full record, looked up via the
            // back-reference into the expense list
            let record = props.expenses.iter().find(|e| e.id == expense_id).cloned();
            let on_edit = props.on_edit.clone();
            let on_delete = props.on_delete.clone();
            html! {
                <div class="action-buttons">
                    <button
                        class="btn btn-edit"
                        onclick={Callback::from(move |_: MouseEvent| {
                            if let Some(record) = record.clone() {
                                on_edit.emit(record);
                            }
                        })}
                    >
                        {"Edit"}
                    </button>
                    <button
                        class="btn btn-danger"
                        onclick={Callback::from(move |_: MouseEvent| {
                            on_delete.emit(expense_id);
                        })}
                    >
                        {"Delete"}
                    </button>
                </div>
            }
        }
        None => html! {},
    };

    html! {
        <tr key={transaction.id.clone()}>
            <td>{format_display_date(&transaction.date)}</td>
            <td><span class={kind_class}>{transaction.kind.to_string()}</span></td>
            <td>{&transaction.label}</td>
            <td>{format!("₹{:.2}", transaction.amount)}</td>
            <td>{transaction.description.clone().unwrap_or_else(|| "-".to_string())}</td>
            <td>{actions}</td>
        </tr>
    }
}
