//! Cancellable timers.
//!
//! Everything time-driven on the page goes through a [`Scheduler`]: a
//! one-shot "run this after a delay" primitive that hands back a handle the
//! owner can cancel. Owners keep at most one pending handle and cancel it
//! when dropped, so nothing fires after its component is gone.

use std::cell::RefCell;
use std::rc::Rc;
use std::time::Duration;

use crate::typewriter::Typewriter;

/// One-shot deferred callbacks.
pub trait Scheduler: Clone + 'static {
    type Handle: 'static;

    fn schedule(&self, delay: Duration, task: Box<dyn FnOnce()>) -> Self::Handle;

    fn cancel(&self, handle: Self::Handle);
}

/// `setTimeout` / `clearTimeout` through Leptos.
#[derive(Debug, Clone, Copy, Default)]
pub struct BrowserScheduler;

impl Scheduler for BrowserScheduler {
    type Handle = Option<leptos::prelude::TimeoutHandle>;

    fn schedule(&self, delay: Duration, task: Box<dyn FnOnce()>) -> Self::Handle {
        match leptos::prelude::set_timeout_with_handle(task, delay) {
            Ok(handle) => Some(handle),
            Err(e) => {
                tracing::warn!("setTimeout failed: {e:?}");
                None
            }
        }
    }

    fn cancel(&self, handle: Self::Handle) {
        if let Some(handle) = handle {
            handle.clear();
        }
    }
}

/// A single pending callback, cancelled on drop.
pub struct Timeout<S: Scheduler> {
    scheduler: S,
    handle: Rc<RefCell<Option<S::Handle>>>,
}

impl<S: Scheduler> Timeout<S> {
    pub fn start(scheduler: S, delay: Duration, task: impl FnOnce() + 'static) -> Self {
        let slot: Rc<RefCell<Option<S::Handle>>> = Rc::new(RefCell::new(None));
        let fired = Rc::clone(&slot);
        let handle = scheduler.schedule(
            delay,
            Box::new(move || {
                // the handle is spent once the callback runs
                fired.borrow_mut().take();
                task();
            }),
        );
        *slot.borrow_mut() = Some(handle);
        Self {
            scheduler,
            handle: slot,
        }
    }

    pub fn is_pending(&self) -> bool {
        self.handle.borrow().is_some()
    }

    pub fn cancel(&mut self) {
        if let Some(handle) = self.handle.borrow_mut().take() {
            self.scheduler.cancel(handle);
        }
    }
}

impl<S: Scheduler> Drop for Timeout<S> {
    fn drop(&mut self) {
        self.cancel();
    }
}

struct LoopInner<S: Scheduler> {
    scheduler: S,
    typewriter: Typewriter,
    pending: Option<S::Handle>,
    stopped: bool,
    on_frame: Box<dyn Fn(&str)>,
}

/// Drives a [`Typewriter`] with exactly one pending tick at a time.
///
/// Each tick updates the state, reports the visible text through `on_frame`
/// and only then schedules the next tick. [`TypewriterLoop::stop`] (or
/// dropping the loop) cancels the pending tick.
pub struct TypewriterLoop<S: Scheduler> {
    inner: Rc<RefCell<LoopInner<S>>>,
}

impl<S: Scheduler> TypewriterLoop<S> {
    pub fn start(scheduler: S, typewriter: Typewriter, on_frame: impl Fn(&str) + 'static) -> Self {
        let delay = typewriter.initial_delay();
        let inner = Rc::new(RefCell::new(LoopInner {
            scheduler,
            typewriter,
            pending: None,
            stopped: false,
            on_frame: Box::new(on_frame),
        }));
        on_frame_now(&inner);
        arm(&inner, delay);
        Self { inner }
    }

    pub fn stop(&self) {
        let mut inner = self.inner.borrow_mut();
        inner.stopped = true;
        if let Some(handle) = inner.pending.take() {
            inner.scheduler.cancel(handle);
            tracing::debug!("typewriter loop stopped, pending tick cancelled");
        }
    }

    pub fn is_running(&self) -> bool {
        let inner = self.inner.borrow();
        !inner.stopped && inner.pending.is_some()
    }

    /// Snapshot of the animator.
    pub fn typewriter(&self) -> Typewriter {
        self.inner.borrow().typewriter.clone()
    }
}

impl<S: Scheduler> Drop for TypewriterLoop<S> {
    fn drop(&mut self) {
        self.stop();
    }
}

fn on_frame_now<S: Scheduler>(inner: &Rc<RefCell<LoopInner<S>>>) {
    let inner = inner.borrow();
    (inner.on_frame)(inner.typewriter.current_text());
}

fn arm<S: Scheduler>(inner: &Rc<RefCell<LoopInner<S>>>, delay: Duration) {
    if inner.borrow().stopped {
        return;
    }
    let weak = Rc::downgrade(inner);
    let scheduler = inner.borrow().scheduler.clone();
    let handle = scheduler.schedule(
        delay,
        Box::new(move || {
            if let Some(inner) = weak.upgrade() {
                run_tick(&inner);
            }
        }),
    );
    inner.borrow_mut().pending = Some(handle);
}

fn run_tick<S: Scheduler>(inner: &Rc<RefCell<LoopInner<S>>>) {
    let delay = {
        let mut guard = inner.borrow_mut();
        guard.pending = None;
        if guard.stopped {
            return;
        }
        guard.typewriter.tick()
    };
    on_frame_now(inner);
    arm(inner, delay);
}

#[cfg(test)]
pub(crate) mod manual {
    //! Virtual clock for driving timers in tests.

    use super::Scheduler;
    use std::cell::RefCell;
    use std::collections::BTreeMap;
    use std::rc::Rc;
    use std::time::Duration;

    type Task = Box<dyn FnOnce()>;

    #[derive(Default)]
    struct Clock {
        now: Duration,
        next_id: u64,
        queue: BTreeMap<(Duration, u64), Task>,
    }

    #[derive(Clone, Default)]
    pub struct ManualScheduler {
        clock: Rc<RefCell<Clock>>,
    }

    impl ManualScheduler {
        pub fn new() -> Self {
            Self::default()
        }

        pub fn pending(&self) -> usize {
            self.clock.borrow().queue.len()
        }

        /// Run every task due within `by`, in deadline order.
        pub fn advance(&self, by: Duration) {
            let target = self.clock.borrow().now + by;
            loop {
                let next = {
                    let mut clock = self.clock.borrow_mut();
                    let key = match clock.queue.keys().next() {
                        Some(key) if key.0 <= target => *key,
                        _ => break,
                    };
                    clock.now = key.0;
                    clock.queue.remove(&key)
                };
                if let Some(task) = next {
                    task();
                }
            }
            self.clock.borrow_mut().now = target;
        }
    }

    impl Scheduler for ManualScheduler {
        type Handle = (Duration, u64);

        fn schedule(&self, delay: Duration, task: Task) -> Self::Handle {
            let mut clock = self.clock.borrow_mut();
            let key = (clock.now + delay, clock.next_id);
            clock.next_id += 1;
            clock.queue.insert(key, task);
            key
        }

        fn cancel(&self, handle: Self::Handle) {
            self.clock.borrow_mut().queue.remove(&handle);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::manual::ManualScheduler;
    use super::*;
    use crate::typewriter::Timing;
    use pretty_assertions::assert_eq;
    use std::cell::Cell;

    fn ms(n: u64) -> Duration {
        Duration::from_millis(n)
    }

    fn recording_loop(
        scheduler: &ManualScheduler,
        roles: &[&str],
    ) -> (TypewriterLoop<ManualScheduler>, Rc<RefCell<Vec<String>>>) {
        let frames = Rc::new(RefCell::new(Vec::new()));
        let sink = Rc::clone(&frames);
        let typewriter = Typewriter::new(
            roles.iter().map(|r| r.to_string()).collect(),
            Timing::default(),
        )
        .expect("valid roles");
        let lp = TypewriterLoop::start(scheduler.clone(), typewriter, move |text| {
            sink.borrow_mut().push(text.to_string())
        });
        (lp, frames)
    }

    #[test]
    fn timeout_fires_once() {
        let scheduler = ManualScheduler::new();
        let hits = Rc::new(Cell::new(0));
        let counter = Rc::clone(&hits);
        let timeout = Timeout::start(scheduler.clone(), ms(5000), move || {
            counter.set(counter.get() + 1)
        });

        scheduler.advance(ms(4999));
        assert_eq!(hits.get(), 0);
        assert!(timeout.is_pending());

        scheduler.advance(ms(1));
        assert_eq!(hits.get(), 1);
        assert!(!timeout.is_pending());

        scheduler.advance(ms(10_000));
        assert_eq!(hits.get(), 1);
    }

    #[test]
    fn dropped_timeout_never_fires() {
        let scheduler = ManualScheduler::new();
        let hits = Rc::new(Cell::new(0));
        let counter = Rc::clone(&hits);
        let timeout = Timeout::start(scheduler.clone(), ms(5000), move || {
            counter.set(counter.get() + 1)
        });
        drop(timeout);

        assert_eq!(scheduler.pending(), 0);
        scheduler.advance(ms(10_000));
        assert_eq!(hits.get(), 0);
    }

    #[test]
    fn loop_keeps_one_pending_tick() {
        let scheduler = ManualScheduler::new();
        let (lp, _frames) = recording_loop(&scheduler, &["Dev", "Ops"]);
        for _ in 0..100 {
            assert_eq!(scheduler.pending(), 1);
            scheduler.advance(ms(50));
        }
        assert!(lp.is_running());
    }

    #[test]
    fn loop_types_on_schedule() {
        let scheduler = ManualScheduler::new();
        let (_lp, frames) = recording_loop(&scheduler, &["Hi"]);

        assert_eq!(*frames.borrow(), vec![""]);
        scheduler.advance(ms(99));
        assert_eq!(frames.borrow().len(), 1);
        scheduler.advance(ms(1));
        assert_eq!(*frames.borrow(), vec!["", "H"]);
        scheduler.advance(ms(100));
        assert_eq!(*frames.borrow(), vec!["", "H", "Hi"]);
        // full role stays up for the long pause
        scheduler.advance(ms(1499));
        assert_eq!(frames.borrow().len(), 3);
        scheduler.advance(ms(1));
        assert_eq!(frames.borrow().last().map(String::as_str), Some("H"));
    }

    #[test]
    fn stop_mid_cycle_freezes_state() {
        let scheduler = ManualScheduler::new();
        let (lp, frames) = recording_loop(&scheduler, &["Problem Solver"]);
        scheduler.advance(ms(350));
        let state = lp.typewriter().state();
        let seen = frames.borrow().len();

        lp.stop();
        assert!(!lp.is_running());
        assert_eq!(scheduler.pending(), 0);

        scheduler.advance(ms(60_000));
        assert_eq!(lp.typewriter().state(), state);
        assert_eq!(frames.borrow().len(), seen);
    }

    /// Hands tasks back to the test instead of running them; `cancel` is
    /// ignored, like a host callback that was already queued.
    #[derive(Clone, Default)]
    struct StaleScheduler {
        tasks: Rc<RefCell<Vec<Box<dyn FnOnce()>>>>,
    }

    impl Scheduler for StaleScheduler {
        type Handle = ();

        fn schedule(&self, _delay: Duration, task: Box<dyn FnOnce()>) -> Self::Handle {
            self.tasks.borrow_mut().push(task);
        }

        fn cancel(&self, _handle: Self::Handle) {}
    }

    #[test]
    fn queued_tick_after_stop_is_ignored() {
        let scheduler = StaleScheduler::default();
        let frames = Rc::new(RefCell::new(Vec::new()));
        let sink = Rc::clone(&frames);
        let typewriter = Typewriter::new(vec!["Dev".into()], Timing::default()).expect("roles");
        let lp = TypewriterLoop::start(scheduler.clone(), typewriter, move |text| {
            sink.borrow_mut().push(text.to_string())
        });

        let first = scheduler.tasks.borrow_mut().pop().expect("first tick queued");
        first();
        assert_eq!(*frames.borrow(), vec!["", "D"]);
        let state = lp.typewriter().state();

        lp.stop();
        let stale = scheduler.tasks.borrow_mut().pop().expect("second tick queued");
        stale();

        assert_eq!(*frames.borrow(), vec!["", "D"]);
        assert_eq!(lp.typewriter().state(), state);
        assert!(scheduler.tasks.borrow().is_empty());
        assert!(!lp.is_running());
    }

    #[test]
    fn drop_cancels_pending_tick() {
        let scheduler = ManualScheduler::new();
        let (lp, frames) = recording_loop(&scheduler, &["Quick Learner"]);
        scheduler.advance(ms(250));
        let seen = frames.borrow().len();

        drop(lp);
        assert_eq!(scheduler.pending(), 0);
        scheduler.advance(ms(60_000));
        assert_eq!(frames.borrow().len(), seen);
    }
}
