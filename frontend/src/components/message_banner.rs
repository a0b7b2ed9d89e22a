use yew::prelude::*;

use crate::hooks::{Notification, NotificationKind};

#[derive(Properties, PartialEq)]
pub struct MessageBannerProps {
    pub notification: Option<Notification>,
}

/// Renders the current transient notification, if any.
#[function_component(MessageBanner)]
pub fn message_banner(props: &MessageBannerProps) -> Html {
    match props.notification.as_ref() {
        Some(notification) => {
            let class = match notification.kind {
                NotificationKind::Success => "success-message",
                NotificationKind::Error => "error-message",
            };
            html! { <div class={class}>{&notification.text}</div> }
        }
        None => html! {},
    }
}
