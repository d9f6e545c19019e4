//! Transient notifications in the corner of the screen.

use folio::config::{MAX_TOASTS, TOAST_DURATION_MS};
use folio::Notification;
use gloo_timers::callback::Timeout;
use leptos::*;

/// One visible notification.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Toast {
    pub id: u64,
    pub notification: Notification,
}

/// Ordered toasts, oldest first, capped at [`MAX_TOASTS`].
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ToastQueue {
    next_id: u64,
    toasts: Vec<Toast>,
}

impl ToastQueue {
    pub fn new() -> Self {
        Self::default()
    }

    /// Add a toast, evicting the oldest past the cap. Returns its id.
    pub fn push(&mut self, notification: Notification) -> u64 {
        let id = self.next_id;
        self.next_id += 1;
        self.toasts.push(Toast { id, notification });
        if self.toasts.len() > MAX_TOASTS {
            let excess = self.toasts.len() - MAX_TOASTS;
            self.toasts.drain(..excess);
        }
        id
    }

    /// Remove a toast. `false` if it was already gone.
    pub fn dismiss(&mut self, id: u64) -> bool {
        let before = self.toasts.len();
        self.toasts.retain(|toast| toast.id != id);
        self.toasts.len() != before
    }

    pub fn contains(&self, id: u64) -> bool {
        self.toasts.iter().any(|toast| toast.id == id)
    }

    pub fn toasts(&self) -> &[Toast] {
        &self.toasts
    }

    pub fn len(&self) -> usize {
        self.toasts.len()
    }

    pub fn is_empty(&self) -> bool {
        self.toasts.is_empty()
    }

    pub fn clear(&mut self) {
        self.toasts.clear();
    }
}

/// Shared handle for raising toasts. Provided as context by the page shell.
#[derive(Clone, Copy)]
pub struct Toaster {
    queue: RwSignal<ToastQueue>,
    timers: StoredValue<Vec<(u64, Timeout)>>,
}

impl Toaster {
    pub fn new() -> Self {
        Self {
            queue: create_rw_signal(ToastQueue::new()),
            timers: store_value(Vec::new()),
        }
    }

    /// Show `notification` and dismiss it after [`TOAST_DURATION_MS`].
    pub fn notify(&self, notification: Notification) {
        let Some(id) = self.queue.try_update(|queue| queue.push(notification)) else {
            return;
        };

        let queue = self.queue;
        let timer = Timeout::new(TOAST_DURATION_MS, move || {
            queue.try_update(|queue| queue.dismiss(id));
        });

        // Expired timers are dropped here, never from inside their own callback
        let live = self.queue.with_untracked(|queue| {
            queue.toasts().iter().map(|toast| toast.id).collect::<Vec<_>>()
        });
        self.timers.update_value(|timers| {
            timers.retain(|(id, _)| live.contains(id));
            timers.push((id, timer));
        });
    }

    pub fn dismiss(&self, id: u64) {
        self.queue.update(|queue| {
            queue.dismiss(id);
        });
    }

    /// Drop every toast and pending timer.
    pub fn clear(&self) {
        self.timers.try_update_value(Vec::clear);
        self.queue.try_update(ToastQueue::clear);
    }
}

impl Default for Toaster {
    fn default() -> Self {
        Self::new()
    }
}

/// Toaster from context, if the shell provided one.
pub fn use_toaster() -> Option<Toaster> {
    let toaster = use_context::<Toaster>();
    if toaster.is_none() {
        log::warn!("⚠️ No toaster in context");
    }
    toaster
}

#[component]
pub fn Toasts() -> impl IntoView {
    let Some(toaster) = use_toaster() else {
        return ().into_view();
    };

    view! {
        <div class="toast-viewport" role="status" aria-live="polite">
            <For
                each=move || toaster.queue.with(|queue| queue.toasts().to_vec())
                key=|toast| toast.id
                children=move |toast| {
                    let id = toast.id;
                    let note = toast.notification;
                    let is_error = note.is_error();
                    view! {
                        <div class="toast glass-card" class:toast-destructive=is_error>
                            <div class="toast-body">
                                <p class="toast-title">{note.title}</p>
                                <p class="toast-description">{note.description}</p>
                            </div>
                            <button
                                class="toast-close"
                                aria-label="Dismiss"
                                on:click=move |_| toaster.dismiss(id)
                            >
                                "✕"
                            </button>
                        </div>
                    }
                }
            />
        </div>
    }
    .into_view()
}

#[cfg(test)]
mod tests {
    use super::*;
    use folio::SubmitError;

    #[test]
    fn test_push_assigns_increasing_ids() {
        let mut queue = ToastQueue::new();
        let first = queue.push(Notification::success());
        let second = queue.push(Notification::success());

        assert!(second > first);
        assert_eq!(queue.len(), 2);
        assert_eq!(queue.toasts()[0].id, first);
    }

    #[test]
    fn test_push_evicts_oldest_past_cap() {
        let mut queue = ToastQueue::new();
        let ids: Vec<u64> = (0..MAX_TOASTS + 2)
            .map(|_| queue.push(Notification::success()))
            .collect();

        assert_eq!(queue.len(), MAX_TOASTS);
        assert!(!queue.contains(ids[0]));
        assert!(!queue.contains(ids[1]));
        assert!(queue.contains(ids[ids.len() - 1]));
    }

    #[test]
    fn test_dismiss() {
        let mut queue = ToastQueue::new();
        let id = queue.push(Notification::failure(&SubmitError::InFlight));

        assert!(queue.toasts()[0].notification.is_error());
        assert!(queue.dismiss(id));
        assert!(!queue.dismiss(id));
        assert!(queue.is_empty());
    }

    #[test]
    fn test_clear_keeps_id_sequence() {
        let mut queue = ToastQueue::new();
        let first = queue.push(Notification::success());
        queue.clear();
        let next = queue.push(Notification::success());

        assert!(next > first);
        assert_eq!(queue.len(), 1);
    }
}
