use shared::IncomeFormFields;
use yew::prelude::*;

#[derive(Properties, PartialEq)]
pub struct IncomeFormProps {
    pub fields: IncomeFormFields,
    pub submitting: bool,

    pub on_amount_change: Callback<Event>,
    pub on_source_change: Callback<Event>,
    pub on_date_change: Callback<Event>,
    pub on_description_change: Callback<Event>,
    pub on_submit: Callback<()>,
}

#[function_component(IncomeForm)]
pub fn income_form(props: &IncomeFormProps) -> Html {
    let onsubmit = {
        let on_submit = props.on_submit.clone();
        Callback::from(move |e: SubmitEvent| {
            e.prevent_default();
            on_submit.emit(());
        })
    };

    html! {
        <div class="card">
            <h2>{"Add Income"}</h2>
            <form {onsubmit}>
                <div class="form-grid">
                    <div class="form-group">
                        <label>{"Amount *"}</label>
                        <input
                            type="number"
                            name="amount"
                            placeholder="Enter amount"
                            step="0.01"
                            value={props.fields.amount.clone()}
                            onchange={props.on_amount_change.clone()}
                            disabled={props.submitting}
                        />
                    </div>
                    <div class="form-group">
                        <label>{"Source *"}</label>
                        <input
                            type="text"
                            name="source"
                            placeholder="e.g., Salary, Freelance"
                            value={props.fields.source.clone()}
                            onchange={props.on_source_change.clone()}
                            disabled={props.submitting}
                        />
                    </div>
                </div>
                <div class="form-grid">
                    <div class="form-group">
                        <label>{"Date *"}</label>
                        <input
                            type="date"
                            name="date"
                            value={props.fields.date.clone()}
                            onchange={props.on_date_change.clone()}
                            disabled={props.submitting}
                        />
                    </div>
                    <div class="form-group">
                        <label>{"Description"}</label>
                        <input
                            type="text"
                            name="description"
                            placeholder="Optional description"
                            value={props.fields.description.clone()}
                            onchange={props.on_description_change.clone()}
                            disabled={props.submitting}
                        />
                    </div>
                </div>
                <button type="submit" class="btn" disabled={props.submitting}>
                    {"Add Income"}
                </button>
            </form>
        </div>
    }
}
