use shared::IncomeFormFields;
use wasm_bindgen_futures::spawn_local;
use web_sys::HtmlInputElement;
use yew::prelude::*;

use crate::hooks::use_notification::Notification;
use crate::services::api::ApiClient;

pub struct UseIncomeFormResult {
    pub fields: IncomeFormFields,
    pub submitting: bool,
    pub on_amount_change: Callback<Event>,
    pub on_source_change: Callback<Event>,
    pub on_date_change: Callback<Event>,
    pub on_description_change: Callback<Event>,
    pub submit: Callback<()>,
}

// The callbacks are rebuilt each render rather than memoized: they read the
// current field values, and a memoized closure would hold a stale snapshot.
fn field_change(
    fields: UseStateHandle<IncomeFormFields>,
    apply: fn(&mut IncomeFormFields, String),
) -> Callback<Event> {
    Callback::from(move |e: Event| {
        let input: HtmlInputElement = e.target_unchecked_into();
        let mut next = (*fields).clone();
        apply(&mut next, input.value());
        fields.set(next);
    })
}

/// Income form controller: per-field state, presence validation, submit.
///
/// A validation failure surfaces as an error notification and makes no
/// network call. A successful create resets the form and emits `refresh`.
#[hook]
pub fn use_income_form(
    api_client: &ApiClient,
    notify: Callback<Notification>,
    refresh: Callback<()>,
) -> UseIncomeFormResult {
    let fields = use_state(IncomeFormFields::default);
    let submitting = use_state(|| false);

    let on_amount_change = field_change(fields.clone(), |f, v| f.amount = v);
    let on_source_change = field_change(fields.clone(), |f, v| f.source = v);
    let on_date_change = field_change(fields.clone(), |f, v| f.date = v);
    let on_description_change = field_change(fields.clone(), |f, v| f.description = v);

    let submit = {
        let api_client = api_client.clone();
        let fields = fields.clone();
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

            let api_client = api_client.clone();
            let fields = fields.clone();
            let submitting = submitting.clone();
            let notify = notify.clone();
            let refresh = refresh.clone();

            spawn_local(async move {
                submitting.set(true);

                match api_client.add_income(&request).await {
                    Ok(()) => {
                        fields.set(IncomeFormFields::default());
                        notify.emit(Notification::success("Income added successfully"));
                        refresh.emit(());
                    }
                    Err(e) => {
                        gloo::console::error!("Failed to add income:", e.to_string());
                        notify.emit(Notification::error("Failed to add income"));
                    }
                }

                submitting.set(false);
            });
        })
    };

    UseIncomeFormResult {
        fields: (*fields).clone(),
        submitting: *submitting,
        on_amount_change,
        on_source_change,
        on_date_change,
        on_description_change,
        submit,
    }
}
