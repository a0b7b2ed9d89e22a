use shared::{ExpenseCategory, ExpenseFormFields};
use yew::prelude::*;

#[derive(Properties, PartialEq)]
pub struct ExpenseFormProps {
    pub fields: ExpenseFormFields,
    /// True while an existing expense is loaded for editing; switches the
    /// heading, submit label, and shows the cancel button.
    pub editing: bool,
    pub submitting: bool,

    pub on_amount_change: Callback<Event>,
    pub on_category_change: Callback<Event>,
    pub on_date_change: Callback<Event>,
    pub on_description_change: Callback<Event>,
    pub on_submit: Callback<()>,
    pub on_cancel: Callback<()>,
}

#[function_component(ExpenseForm)]
pub fn expense_form(props: &ExpenseFormProps) -> Html {
    let onsubmit = {
        let on_submit = props.on_submit.clone();
        Callback::from(move |e: SubmitEvent| {
            e.prevent_default();
            on_submit.emit(());
        })
    };

    let on_cancel = {
        let on_cancel = props.on_cancel.clone();
        Callback::from(move |_: MouseEvent| on_cancel.emit(()))
    };

    html! {
        <div class="card">
            <h2>{if props.editing { "Edit Expense" } else { "Add Expense" }}</h2>
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
                        <label>{"Category *"}</label>
                        <select
                            name="category"
                            value={props.fields.category.clone()}
                            onchange={props.on_category_change.clone()}
                            disabled={props.submitting}
                        >
                            <option value="" selected={props.fields.category.is_empty()}>
                                {"Select category"}
                            </option>
                            {for ExpenseCategory::ALL.iter().map(|category| {
                                let name = category.as_str();
                                html! {
                                    <option
                                        value={name}
                                        selected={props.fields.category == name}
                                    >
                                        {name}
                                    </option>
                                }
                            })}
                        </select>
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
                <div class="form-actions">
                    <button type="submit" class="btn" disabled={props.submitting}>
                        {if props.editing { "Update Expense" } else { "Add Expense" }}
                    </button>
                    {if props.editing {
                        html! {
                            <button type="button" class="btn btn-danger" onclick={on_cancel}>
                                {"Cancel"}
                            </button>
                        }
                    } else { html! {} }}
                </div>
            </form>
        </div>
    }
}
