use std::time::Duration;

use api::ApiError;
use dioxus::dioxus_core::spawn_forever;
use dioxus::prelude::*;

/// How long a notification stays on screen.
const NOTICE_TTL: Duration = Duration::from_secs(3);

pub const SUCCESS_MESSAGE: &str = "Operación exitosa";

#[derive(Clone, Debug, PartialEq)]
pub enum NoticeLevel {
    Success,
    Error,
}

#[derive(Clone, Debug, PartialEq)]
pub struct Notice {
    pub id: u64,
    pub level: NoticeLevel,
    pub message: String,
}

#[derive(Clone, Debug, Default)]
pub struct Notifications {
    pub entries: Vec<Notice>,
    next_id: u64,
}

pub fn use_notifications() -> Signal<Notifications> {
    use_context::<Signal<Notifications>>()
}

/// Show a transient notification.
pub fn notify(notices: &mut Signal<Notifications>, level: NoticeLevel, message: &str) {
    let id = {
        let mut state = notices.write();
        let id = state.next_id;
        state.next_id += 1;
        state.entries.push(Notice {
            id,
            level,
            message: message.to_string(),
        });
        id
    };

    // The caller often navigates away right after notifying, so the timer
    // must not belong to its scope.
    let mut notices = *notices;
    spawn_forever(async move {
        sleep(NOTICE_TTL).await;
        if let Ok(mut state) = notices.try_write() {
            state.entries.retain(|n| n.id != id);
        }
    });
}

pub fn notify_success(notices: &mut Signal<Notifications>, message: &str) {
    notify(notices, NoticeLevel::Success, message);
}

/// Show the error's message, or nothing when it has none.
pub fn report_error(notices: &mut Signal<Notifications>, error: &ApiError) {
    tracing::warn!("request failed: {error:?}");
    if let Some(message) = error.user_message() {
        notify(notices, NoticeLevel::Error, &message);
    }
}

#[cfg(target_arch = "wasm32")]
async fn sleep(duration: Duration) {
    gloo_timers::future::sleep(duration).await;
}

#[cfg(not(target_arch = "wasm32"))]
async fn sleep(duration: Duration) {
    tokio::time::sleep(duration).await;
}
