//! Clipboard copy with a transient confirmation label.

use std::future::Future;
use std::time::Duration;

use dioxus::prelude::*;

use crate::compat;
use crate::compat::ClipboardError;
use crate::feedback;
use crate::feedback::Generation;
use crate::feedback::Transient;
use crate::feedback::TransientSlot;

/// The label of a copy button.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum CopyLabel {
    #[default]
    Copy,
    Copied,
    Error,
}

impl CopyLabel {
    pub fn text(&self) -> &'static str {
        match self {
            CopyLabel::Copy => "Copy",
            CopyLabel::Copied => "Copied",
            CopyLabel::Error => "Error",
        }
    }

    /// The label shown after a clipboard write finished.
    pub fn after(result: &Result<(), ClipboardError>) -> Self {
        match result {
            Ok(()) => CopyLabel::Copied,
            Err(_) => CopyLabel::Error,
        }
    }
}

/// The text to copy: the trimmed source, or `None` when there is nothing to copy.
pub fn copy_source(raw: &str) -> Option<&str> {
    let trimmed = raw.trim();
    (!trimmed.is_empty()).then_some(trimmed)
}

/// Copies `source` to the clipboard and flashes the outcome on `label`.
///
/// Empty sources are ignored. The trigger claims its generation before the
/// write starts, so the label always reports the most recent trigger even
/// when an older write finishes later.
pub fn copy_with_feedback(mut label: Signal<Transient<CopyLabel>>, source: &str, window: Duration) {
    let Some(text) = copy_source(source) else {
        return;
    };
    let generation = label.write().reserve();

    spawn(report_copy(
        label,
        generation,
        text.to_string(),
        window,
        compat::clipboard_set,
    ));
}

/// Runs `write` and shows its outcome on `label` for `generation`.
pub async fn report_copy<S, W, F>(label: S, generation: Generation, text: String, window: Duration, write: W)
where
    S: TransientSlot<CopyLabel>,
    W: FnOnce(String) -> F,
    F: Future<Output = Result<(), ClipboardError>>,
{
    let result = write(text).await;
    if let Err(e) = &result {
        dioxus_logger::tracing::warn!("clipboard write failed: {}", e);
    }
    feedback::show_for(label, generation, CopyLabel::after(&result), window).await;
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn source_is_trimmed() {
        assert_eq!(copy_source("  0xABC123\n"), Some("0xABC123"));
        assert_eq!(copy_source(" \t "), None);
        assert_eq!(copy_source(""), None);
    }

    #[test]
    fn success_shows_copied_then_reverts() {
        let mut label = Transient::new(CopyLabel::Copy);
        let result: Result<(), ClipboardError> = Ok(());

        let generation = label.show(CopyLabel::after(&result));
        assert_eq!(label.current().text(), "Copied");

        label.expire(generation);
        assert_eq!(label.current().text(), "Copy");
    }

    #[test]
    fn failure_shows_error_then_reverts() {
        let mut label = Transient::new(CopyLabel::Copy);
        let result = Err(ClipboardError::Denied("permission denied".to_string()));

        let generation = label.show(CopyLabel::after(&result));
        assert_eq!(label.current().text(), "Error");

        label.expire(generation);
        assert_eq!(label.current().text(), "Copy");
    }

    #[tokio::test(start_paused = true)]
    async fn latest_trigger_owns_the_label_when_writes_finish_out_of_order() {
        use std::cell::RefCell;
        use std::rc::Rc;

        let window = Duration::from_secs(2);
        let label = Rc::new(RefCell::new(Transient::new(CopyLabel::Copy)));

        let local = tokio::task::LocalSet::new();
        local
            .run_until(async {
                // A slow write that succeeds.
                let first = label.borrow_mut().reserve();
                tokio::task::spawn_local(report_copy(
                    label.clone(),
                    first,
                    "0xABC123".to_string(),
                    window,
                    |_| async {
                        tokio::time::sleep(Duration::from_millis(2500)).await;
                        Ok(())
                    },
                ));

                // A later trigger whose write fails quickly.
                tokio::time::sleep(Duration::from_secs(1)).await;
                let second = label.borrow_mut().reserve();
                tokio::task::spawn_local(report_copy(
                    label.clone(),
                    second,
                    "0xABC123".to_string(),
                    window,
                    |_| async { Err(ClipboardError::Denied("permission denied".to_string())) },
                ));

                tokio::time::sleep(Duration::from_millis(500)).await;
                assert_eq!(*label.borrow().current(), CopyLabel::Error);

                // The first write lands after the second; it must not show.
                tokio::time::sleep(Duration::from_millis(1200)).await;
                assert_eq!(*label.borrow().current(), CopyLabel::Error);

                tokio::time::sleep(Duration::from_millis(500)).await;
                assert_eq!(*label.borrow().current(), CopyLabel::Copy);
            })
            .await;
    }

    #[tokio::test(start_paused = true)]
    async fn success_reverts_after_the_window() {
        use std::cell::RefCell;
        use std::rc::Rc;

        let window = Duration::from_secs(2);
        let label = Rc::new(RefCell::new(Transient::new(CopyLabel::Copy)));
        let generation = label.borrow_mut().reserve();

        let local = tokio::task::LocalSet::new();
        local
            .run_until(async {
                let task = tokio::task::spawn_local(report_copy(
                    label.clone(),
                    generation,
                    "0xABC123".to_string(),
                    window,
                    |text| async move {
                        assert_eq!(text, "0xABC123");
                        Ok(())
                    },
                ));

                tokio::time::sleep(Duration::from_millis(100)).await;
                assert_eq!(label.borrow().current().text(), "Copied");

                let _ = task.await;
                assert_eq!(label.borrow().current().text(), "Copy");
            })
            .await;
    }
}
