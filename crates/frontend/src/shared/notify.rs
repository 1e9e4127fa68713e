//! Transient user notifications
//!
//! The queue itself is plain data; `Notifier` is the reactive handle that
//! lives in `AppGlobalContext` and is created before anything that can fail.

use crate::shared::icons::icon;
use gloo_timers::future::TimeoutFuture;
use leptos::prelude::*;
use leptos::task::spawn_local;
use thaw::*;

/// How long a notification stays on screen
const AUTO_DISMISS_MS: u32 = 3_000;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum NotificationLevel {
    Warning,
    Error,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Notification {
    pub id: u64,
    pub level: NotificationLevel,
    pub text: String,
}

#[derive(Debug, Clone, Default)]
pub struct NotificationQueue {
    next_id: u64,
    items: Vec<Notification>,
}

impl NotificationQueue {
    /// Adds a notification and returns its id. Ids are never reused.
    pub fn push(&mut self, level: NotificationLevel, text: impl Into<String>) -> u64 {
        self.next_id += 1;
        let id = self.next_id;
        self.items.push(Notification {
            id,
            level,
            text: text.into(),
        });
        id
    }

    /// Returns false if the notification was already gone
    pub fn dismiss(&mut self, id: u64) -> bool {
        let before = self.items.len();
        self.items.retain(|n| n.id != id);
        self.items.len() != before
    }

    pub fn items(&self) -> &[Notification] {
        &self.items
    }
}

/// Handle for posting notifications
#[derive(Clone, Copy)]
pub struct Notifier {
    queue: RwSignal<NotificationQueue>,
}

impl Notifier {
    pub fn new() -> Self {
        Self {
            queue: RwSignal::new(NotificationQueue::default()),
        }
    }

    pub fn error(&self, text: impl Into<String>) {
        self.notify(NotificationLevel::Error, text);
    }

    pub fn warning(&self, text: impl Into<String>) {
        self.notify(NotificationLevel::Warning, text);
    }

    pub fn notify(&self, level: NotificationLevel, text: impl Into<String>) {
        let text = text.into();
        let Some(id) = self.queue.try_update(|q| q.push(level, text)) else {
            return;
        };

        let queue = self.queue;
        spawn_local(async move {
            TimeoutFuture::new(AUTO_DISMISS_MS).await;
            let _ = queue.try_update(|q| q.dismiss(id));
        });
    }

    pub fn dismiss(&self, id: u64) {
        self.queue.update(|q| {
            q.dismiss(id);
        });
    }

    pub fn items(&self) -> Vec<Notification> {
        self.queue.with(|q| q.items().to_vec())
    }
}

impl Default for Notifier {
    fn default() -> Self {
        Self::new()
    }
}

/// Renders the notification queue in the top-right corner
#[component]
pub fn Notifications(notifier: Notifier) -> impl IntoView {
    view! {
        <div class="notifications">
            <For
                each=move || notifier.items()
                key=|n| n.id
                children=move |n: Notification| {
                    let id = n.id;
                    let intent = match n.level {
                        NotificationLevel::Warning => MessageBarIntent::Warning,
                        NotificationLevel::Error => MessageBarIntent::Error,
                    };
                    view! {
                        <MessageBar intent=intent>
                            <div class="notifications__item">
                                <span>{n.text}</span>
                                <button
                                    class="notifications__close"
                                    title="Dismiss"
                                    on:click=move |_| notifier.dismiss(id)
                                >
                                    {icon("x")}
                                </button>
                            </div>
                        </MessageBar>
                    }
                }
            />
        </div>
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_push_assigns_increasing_ids() {
        let mut queue = NotificationQueue::default();
        let a = queue.push(NotificationLevel::Error, "first");
        let b = queue.push(NotificationLevel::Warning, "second");
        assert!(b > a);
        assert_eq!(queue.items().len(), 2);
        assert_eq!(queue.items()[0].text, "first");
    }

    #[test]
    fn test_dismiss_removes_only_target() {
        let mut queue = NotificationQueue::default();
        let a = queue.push(NotificationLevel::Error, "a");
        let b = queue.push(NotificationLevel::Error, "b");
        assert!(queue.dismiss(a));
        assert!(!queue.dismiss(a));
        assert_eq!(queue.items().len(), 1);
        assert_eq!(queue.items()[0].id, b);
    }

    #[test]
    fn test_ids_not_reused_after_dismiss() {
        let mut queue = NotificationQueue::default();
        let a = queue.push(NotificationLevel::Error, "a");
        queue.dismiss(a);
        let b = queue.push(NotificationLevel::Error, "b");
        assert_ne!(a, b);
        assert_eq!(queue.items().len(), 1);
    }
}
