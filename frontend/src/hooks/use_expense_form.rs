use gloo::dialogs::confirm;
use shared::{Expense, ExpenseFormFields};
use wasm_bindgen_futures::spawn_local;
use web_sys::{HtmlInputElement, HtmlSelectElement};
use yew::prelude::*;

use crate::hooks::use_notification::Notification;
use crate::services::api::ApiClient;

pub struct UseExpenseFormResult {
    pub fields: ExpenseFormFields,
    /// The record currently loaded for editing, if any. `Some` switches the
    /// form (and submit) into update mode.
    pub editing: Option<Expense>,
    pub submitting: bool,
    pub on_amount_change: Callback<Event>,
    pub on_category_change: Callback<Event>,
    pub on_date_change: Callback<Event>,
    pub on_description_change: Callback<Event>,
    pub submit: Callback<()>,
    pub begin_edit: Callback<Expense>,
    pub cancel_edit: Callback<()>,
    pub delete: Callback<i64>,
}

// Rebuilt each render, not memoized: these read the current field values and
// a memoized closure would hold a stale snapshot.
fn field_change(
    fields: UseStateHandle<ExpenseFormFields>,
    apply: fn(&mut ExpenseFormFields, String),
) -> Callback<Event> {
    Callback::from(move |e: Event| {
        let input: HtmlInputElement = e.target_unchecked_into();
        let mut next = (*fields).clone();
        apply(&mut next, input.value());
        fields.set(next);
    })
}

/// Expense form controller, covering create, update, and delete.
///
/// Editing holds a reference to the record being updated; submit in that
/// mode calls update-by-id instead of create. Cancel resets the form with no
/// network call. Delete asks for confirmation first. Every successful
/// mutation resets state and emits `refresh`.
#[hook]
pub fn use_expense_form(
    api_client: &ApiClient,
    notify: Callback<Notification>,
    refresh: Callback<()>,
) -> UseExpenseFormResult {
    let fields = use_state(ExpenseFormFields::default);
    let editing = use_state(|| Option::<Expense>::None);
    let submitting = use_state(|| false);

    let on_amount_change = field_change(fields.clone(), |f, v| f.amount = v);
    let on_date_change = field_change(fields.clone(), |f, v| f.date = v);
    let on_description_change = field_change(fields.clone(), |f, v| f.description = v);

    let on_category_change = {
        let fields = fields.clone();
        Callback::from(move |e: Event| {
            let select: HtmlSelectElement = e.target_unchecked_into();
            let mut next = (*fields).clone();
            next.category = select.value();
            fields.set(next);
        })
    };

    let submit = {
        let api_client = api_client.clone();
        let fields = fields.clone();
        let editing = editing.clone();
        let submitting = submitting.clone();
        let notify = notify.clone();
        let refresh = refresh.clone();

        Callback::from(move |_| {
            let request = match fields.validate() {
                Ok(request) => request,
                Err(e) => {
                    notify.emit(Notification::error(e.to_string()));
                    return;
                }
            };
            let editing_record = (*editing).clone();

            let api_client = api_client.clone();
            let fields = fields.clone();
            let editing = editing.clone();
            let submitting = submitting.clone();
            let notify = notify.clone();
            let refresh = refresh.clone();

            spawn_local(async move {
                submitting.set(true);

                let result = match &editing_record {
                    Some(record) => api_client.update_expense(record.id, &request).await,
                    None => api_client.add_expense(&request).await,
                };

                match result {
                    Ok(()) => {
                        let message = if editing_record.is_some() {
                            "Expense updated successfully"
                        } else {
                            "Expense added successfully"
                        };
                        editing.set(None);
                        fields.set(ExpenseFormFields::default());
                        notify.emit(Notification::success(message));
                        refresh.emit(());
                    }
                    Err(e) => {
                        gloo::console::error!("Failed to save expense:", e.to_string());
                        notify.emit(Notification::error("Failed to save expense"));
                    }
                }

                submitting.set(false);
            });
        })
    };

    let begin_edit = {
        let fields = fields.clone();
        let editing = editing.clone();
        Callback::from(move |record: Expense| {
            fields.set(ExpenseFormFields::from_expense(&record));
            editing.set(Some(record));
        })
    };

    let cancel_edit = {
        let fields = fields.clone();
        let editing = editing.clone();
        Callback::from(move |_| {
            editing.set(None);
            fields.set(ExpenseFormFields::default());
        })
    };

    let delete = {
        let api_client = api_client.clone();
        let notify = notify.clone();
        let refresh = refresh.clone();
        Callback::from(move |id: i64| {
            if !confirm("Are you sure you want to delete this expense?") {
                return;
            }

            let api_client = api_client.clone();
            let notify = notify.clone();
            let refresh = refresh.clone();
            spawn_local(async move {
                match api_client.delete_expense(id).await {
                    Ok(()) => {
                        notify.emit(Notification::success("Expense deleted successfully"));
                        refresh.emit(());
                    }
                    Err(e) => {
                        gloo::console::error!("Failed to delete expense:", e.to_string());
                        notify.emit(Notification::error("Failed to delete expense"));
                    }
                }
            });
        })
    };

    UseExpenseFormResult {
        fields: (*fields).clone(),
        editing: (*editing).clone(),
        submitting: *submitting,
        on_amount_change,
        on_category_change,
        on_date_change,
        on_description_change,
        submit,
        begin_edit,
        cancel_edit,
        delete,
    }
}
