//! Short-lived UI feedback: labels and notices that revert after a fixed window.

use std::time::Duration;

use dioxus::prelude::*;

use crate::compat;

/// Identifies one `show` call on a [`Transient`].
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Generation(u64);

/// A value that temporarily replaces a resting value.
///
/// Every `show` bumps the generation. An `expire` only reverts when it carries
/// the latest generation, so an older timer can never cut a newer value short
/// and the value can never stay stuck.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Transient<T> {
    resting: T,
    current: T,
    generation: u64,
}

impl<T: Clone> Transient<T> {
    pub fn new(resting: T) -> Self {
        Self {
            current: resting.clone(),
            resting,
            generation: 0,
        }
    }

    pub fn current(&self) -> &T {
        &self.current
    }

    /// Claims the next generation without changing the current value.
    ///
    /// Every older generation is superseded from here on, even before the
    /// new value is known.
    pub fn reserve(&mut self) -> Generation {
        self.generation += 1;
        Generation(self.generation)
    }

    /// Shows `value` if `generation` is still the latest.
    pub fn settle(&mut self, generation: Generation, value: T) -> bool {
        if generation.0 != self.generation {
            return false;
        }
        self.current = value;
        true
    }

    /// Replaces the current value until the returned generation expires.
    pub fn show(&mut self, value: T) -> Generation {
        let generation = self.reserve();
        self.current = value;
        generation
    }

    /// Reverts to the resting value if `generation` is still the latest.
    pub fn expire(&mut self, generation: Generation) -> bool {
        if generation.0 != self.generation {
            return false;
        }
        self.current = self.resting.clone();
        true
    }
}

/// Somewhere a [`Transient`] lives: a signal in the app, a plain cell in tests.
pub trait TransientSlot<T> {
    fn with_mut<R>(&mut self, f: impl FnOnce(&mut Transient<T>) -> R) -> R;
}

impl<T: 'static> TransientSlot<T> for Signal<Transient<T>> {
    fn with_mut<R>(&mut self, f: impl FnOnce(&mut Transient<T>) -> R) -> R {
        f(&mut self.write())
    }
}

#[cfg(test)]
impl<T> TransientSlot<T> for std::rc::Rc<std::cell::RefCell<Transient<T>>> {
    fn with_mut<R>(&mut self, f: impl FnOnce(&mut Transient<T>) -> R) -> R {
        f(&mut self.borrow_mut())
    }
}

/// Waits out `window`, then reverts `generation` unless something newer was shown.
pub async fn hold<T: Clone, S: TransientSlot<T>>(mut slot: S, generation: Generation, window: Duration) {
    compat::sleep(window).await;
    slot.with_mut(|transient| transient.expire(generation));
}

/// Shows `value` for a reserved `generation` and reverts it after `window`.
///
/// Does nothing when a newer generation was reserved in the meantime.
pub async fn show_for<T: Clone, S: TransientSlot<T>>(
    mut slot: S,
    generation: Generation,
    value: T,
    window: Duration,
) {
    if slot.with_mut(|transient| transient.settle(generation, value)) {
        hold(slot, generation, window).await;
    }
}

/// Shows `value` in `signal` and schedules its revert after `window`.
pub fn flash<T: Clone + 'static>(mut signal: Signal<Transient<T>>, value: T, window: Duration) {
    let generation = signal.write().show(value);
    spawn(hold(signal, generation, window));
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum NoticeKind {
    Info,
    Error,
}

/// An advisory message shown in the notice bar.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Notice {
    pub kind: NoticeKind,
    pub text: String,
}

impl Notice {
    pub fn info(text: impl Into<String>) -> Self {
        Self {
            kind: NoticeKind::Info,
            text: text.into(),
        }
    }

    pub fn error(text: impl Into<String>) -> Self {
        Self {
            kind: NoticeKind::Error,
            text: text.into(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn expire_reverts_to_resting() {
        let mut label = Transient::new("Copy");
        let generation = label.show("Copied");
        assert_eq!(*label.current(), "Copied");
        assert!(label.expire(generation));
        assert_eq!(*label.current(), "Copy");
    }

    #[test]
    fn stale_timer_does_not_cut_newer_value_short() {
        let mut label = Transient::new("Copy");
        let first = label.show("Copied");
        let second = label.show("Error");

        assert!(!label.expire(first));
        assert_eq!(*label.current(), "Error");

        assert!(label.expire(second));
        assert_eq!(*label.current(), "Copy");
    }

    #[test]
    fn reserved_generation_supersedes_older_ones() {
        let mut label = Transient::new("Copy");
        let first = label.reserve();
        let second = label.reserve();

        assert!(!label.settle(first, "Copied"));
        assert_eq!(*label.current(), "Copy");
        assert!(label.settle(second, "Error"));
        assert_eq!(*label.current(), "Error");
    }

    #[tokio::test(start_paused = true)]
    async fn newer_flash_survives_older_timer() {
        use std::cell::RefCell;
        use std::rc::Rc;

        let window = Duration::from_secs(2);
        let slot = Rc::new(RefCell::new(Transient::new("Copy")));

        let local = tokio::task::LocalSet::new();
        local
            .run_until(async {
                let first = slot.borrow_mut().reserve();
                tokio::task::spawn_local(show_for(slot.clone(), first, "Copied", window));

                tokio::time::sleep(Duration::from_secs(1)).await;
                let second = slot.borrow_mut().reserve();
                tokio::task::spawn_local(show_for(slot.clone(), second, "Error", window));

                // The first window ends here and must not revert the newer label.
                tokio::time::sleep(Duration::from_millis(1500)).await;
                assert_eq!(*slot.borrow().current(), "Error");

                tokio::time::sleep(Duration::from_secs(1)).await;
                assert_eq!(*slot.borrow().current(), "Copy");
            })
            .await;
    }

    #[test]
    fn late_expiry_after_revert_is_harmless() {
        let mut notice: Transient<Option<Notice>> = Transient::new(None);
        let first = notice.show(Some(Notice::info("hello")));
        assert!(notice.expire(first));
        notice.expire(first);
        assert!(notice.current().is_none());
    }
}
