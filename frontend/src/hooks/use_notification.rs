use gloo::timers::callback::Timeout;
use yew::prelude::*;

/// How long a notification stays visible.
pub const NOTIFICATION_TIMEOUT_MS: u32 = 3_000;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum NotificationKind {
    Success,
    Error,
}

/// A transient success or error message. Only the most recent one is ever
/// shown; there is no queue.
#[derive(Debug, Clone, PartialEq)]
pub struct Notification {
    pub kind: NotificationKind,
    pub text: String,
}

impl Notification {
    pub fn success(text: impl Into<String>) -> Notification {
        Notification {
            kind: NotificationKind::Success,
            text: text.into(),
        }
    }

    pub fn error(text: impl Into<String>) -> Notification {
        Notification {
            kind: NotificationKind::Error,
            text: text.into(),
        }
    }
}

pub struct UseNotificationResult {
    pub current: Option<Notification>,
    pub show: Callback<Notification>,
}

/// Transient notification state with a 3-second auto-clear.
///
/// Each `show` swaps in a fresh timeout; dropping the previous handle
/// cancels its pending clear, so a newer message always gets the full
/// window. Unmount drops the handle too, so the timer never fires into a
/// torn-down view.
#[hook]
pub fn use_notification() -> UseNotificationResult {
    let current = use_state(|| Option::<Notification>::None);
    let pending_clear = use_mut_ref(|| Option::<Timeout>::None);

    let show = {
        let current = current.clone();
        let pending_clear = pending_clear.clone();
        use_callback((), move |notification: Notification, _| {
            current.set(Some(notification));
            let current = current.clone();
            let timeout = Timeout::new(NOTIFICATION_TIMEOUT_MS, move || {
                current.set(None);
            });
            *pending_clear.borrow_mut() = Some(timeout);
        })
    };

    {
        let pending_clear = pending_clear.clone();
        use_effect_with((), move |_| {
            move || {
                pending_clear.borrow_mut().take();
            }
        });
    }

    UseNotificationResult {
        current: (*current).clone(),
        show,
    }
}
