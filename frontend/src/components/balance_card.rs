use shared::Summary;
use yew::prelude::*;

#[derive(Properties, PartialEq)]
pub struct BalanceCardProps {
    pub summary: Summary,
}

/// Balance card showing the server-computed totals. The remaining amount is
/// displayed exactly as reported, never recomputed here.
#[function_component(BalanceCard)]
pub fn balance_card(props: &BalanceCardProps) -> Html {
    let summary = &props.summary;

    html! {
        <div class="card balance-card">
            <h2>{"Remaining Balance"}</h2>
            <div class="balance-amount">{format!("₹{:.2}", summary.remaining_amount)}</div>
            <div class="balance-details">
                <div class="balance-item">
                    <h3>{"Total Income"}</h3>
                    <p>{format!("₹{:.2}", summary.total_income)}</p>
                </div>
                <div class="balance-item">
                    <h3>{"Total Expense"}</h3>
                    <p>{format!("₹{:.2}", summary.total_expense)}</p>
                </div>
            </div>
        </div>
    }
}
