use std::fmt;
use std::sync::Arc;
use std::time::Duration;

use log::*;
use tokio::sync::watch;

use super::*;

/// Handle to the list of active toasts.
///
/// Cloning is cheap and every clone shares the same list, so the handle can
/// be passed to whichever part of the UI needs to raise or render toasts.
/// Each toast removes itself once its duration has elapsed; there is no way
/// to dismiss one early.
#[derive(Clone)]
pub struct ToastQueue {
    list: Arc<watch::Sender<ToastList>>,
    scheduler: Arc<dyn Scheduler>,
    settings: ToastSettings,
}

impl ToastQueue {
    pub fn new(settings: ToastSettings) -> Self {
        Self::with_scheduler(settings, default_scheduler())
    }

    pub fn with_scheduler(settings: ToastSettings, scheduler: Arc<dyn Scheduler>) -> Self {
        let (list, _) = watch::channel(ToastList::new());

        Self {
            list: Arc::new(list),
            scheduler,
            settings,
        }
    }

    pub fn settings(&self) -> &ToastSettings {
        &self.settings
    }

    /// Show a toast using the configured kind and duration
    pub fn show(&self, message: impl Into<String>) {
        self.show_toast(message, self.settings.kind.clone(), self.settings.duration())
    }

    /// Show a toast of `kind` using the configured duration
    pub fn show_kind(&self, message: impl Into<String>, kind: impl Into<ToastKind>) {
        self.show_toast(message, kind, self.settings.duration())
    }

    /// Append a toast and schedule its removal after `duration`.
    pub fn show_toast(&self, message: impl Into<String>, kind: impl Into<ToastKind>, duration: Duration) {
        let toast = Toast::new(message, kind);
        let id = toast.id.clone();

        debug!("showing toast {} ({}) for {:?}", id, toast.kind, duration);
        self.apply(ToastAction::Show(toast));

        let list = self.list.clone();
        self.scheduler.schedule(duration, Box::new(move || {
            debug!("toast {} expired", id);
            Self::update(&list, ToastAction::Expire(id));
        }));
    }

    /// Snapshot of the current list
    pub fn toasts(&self) -> ToastList {
        self.list.borrow().clone()
    }

    /// Receiver that sees the current list and is woken on every change
    pub fn subscribe(&self) -> watch::Receiver<ToastList> {
        self.list.subscribe()
    }

    fn apply(&self, action: ToastAction) {
        Self::update(&self.list, action)
    }

    fn update(list: &watch::Sender<ToastList>, action: ToastAction) {
        list.send_modify(|current| {
            *current = match action {
                ToastAction::Show(toast) => current.appended(toast),
                ToastAction::Expire(id) => {
                    if !current.contains(&id) {
                        trace!("toast {} was already gone", id);
                    }
                    current.without(&id)
                },
            };
        });
    }
}

impl Default for ToastQueue {
    fn default() -> Self {
        Self::new(ToastSettings::default())
    }
}

impl PartialEq for ToastQueue {
    fn eq(&self, other: &Self) -> bool {
        Arc::ptr_eq(&self.list, &other.list)
    }
}

impl fmt::Debug for ToastQueue {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        f.debug_struct("ToastQueue")
            .field("toasts", &*self.list.borrow())
            .field("settings", &self.settings)
            .finish()
    }
}
