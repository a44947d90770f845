use std::time::Duration;

use log::*;
use tokio::sync::watch;
use tokio::time::{sleep_until, Instant};

use toast_config::DemoToast;
use toast_queue::{ToastList, ToastQueue};

/// Raise every scripted toast at its offset from now.
/// Returns once the last one has been shown.
pub async fn play(queue: &ToastQueue, script: &[DemoToast]) {
    let start = Instant::now();

    let mut script: Vec<&DemoToast> = script.iter().collect();
    script.sort_by_key(|t| t.at_ms);

    for toast in script {
        sleep_until(start + Duration::from_millis(toast.at_ms)).await;

        let duration = toast.duration_ms
            .map(Duration::from_millis)
            .unwrap_or_else(|| queue.settings().duration());

        trace!("script: {:?} for {:?}", toast.message, duration);
        queue.show_toast(toast.message.clone(), toast.kind.clone(), duration);
    }
}

/// Wait for the list to be empty
pub async fn drained(mut rx: watch::Receiver<ToastList>) {
    loop {
        if rx.borrow_and_update().is_empty() {
            return;
        }

        if rx.changed().await.is_err() {
            warn!("toast queue went away before draining");
            return;
        }
    }
}

/// One-line text rendering of the tray
pub fn render(list: &ToastList) -> String {
    if list.is_empty() {
        return "(no toasts)".to_string();
    }

    list.iter()
        .map(|t| format!("[{}] {}", t.kind, t.message))
        .collect::<Vec<_>>()
        .join(" | ")
}

#[cfg(test)]
mod tests {
    use super::*;
    use toast_queue::{ToastKind, ToastSettings};

    fn scripted(at_ms: u64, message: &str, kind: ToastKind, duration_ms: Option<u64>) -> DemoToast {
        DemoToast {
            at_ms,
            message: message.to_string(),
            kind,
            duration_ms,
        }
    }

    #[test]
    fn render_lists_kind_and_message() {
        let list = ToastList::new();
        assert_eq!(render(&list), "(no toasts)");

        let list = list
            .appended(toast_queue::Toast::new("A", "error"))
            .appended(toast_queue::Toast::new("B", "info"));
        assert_eq!(render(&list), "[error] A | [info] B");
    }

    #[tokio::test(start_paused = true)]
    async fn play_honours_offsets_and_durations() {
        let queue = ToastQueue::new(ToastSettings::default());
        let script = vec![
            scripted(500, "late", ToastKind::Warning, None),
            scripted(0, "early", ToastKind::Error, Some(1_000)),
        ];

        let start = Instant::now();
        play(&queue, &script).await;
        assert!(Instant::now() - start >= Duration::from_millis(500));
        assert_eq!(queue.toasts().messages(), vec!["early", "late"]);

        // early expires at 1000, late at 500 + 3000
        sleep_until(start + Duration::from_millis(1_100)).await;
        assert_eq!(queue.toasts().messages(), vec!["late"]);

        sleep_until(start + Duration::from_millis(3_600)).await;
        assert!(queue.toasts().is_empty());
    }

    #[tokio::test(start_paused = true)]
    async fn drained_waits_for_last_expiry() {
        let queue = ToastQueue::new(ToastSettings::default());
        queue.show_toast("A", "error", Duration::from_millis(1_000));
        queue.show_toast("B", "info", Duration::from_millis(5_000));

        let start = Instant::now();
        drained(queue.subscribe()).await;

        assert!(Instant::now() - start >= Duration::from_millis(5_000));
        assert!(queue.toasts().is_empty());
    }
}
