//! One-shot deferred tasks.
//!
//! SYSTEM CONTEXT
//! ==============
//! The success banner hides itself after a fixed delay. Scheduling goes
//! through `OneShotTimer` so state code can request the hide without a
//! browser; hydrate builds hand the task to a forgotten `gloo_timers`
//! `Timeout`. Scheduled tasks are never cancelled.

#[cfg(test)]
#[path = "timer_test.rs"]
mod timer_test;

pub trait OneShotTimer {
    /// Run `task` once after `delay_ms` milliseconds.
    fn after(&mut self, delay_ms: u32, task: impl FnOnce() + 'static);
}

/// Browser `setTimeout`.
#[derive(Clone, Copy, Debug, Default)]
pub struct BrowserTimer;

impl OneShotTimer for BrowserTimer {
    fn after(&mut self, delay_ms: u32, task: impl FnOnce() + 'static) {
        #[cfg(feature = "hydrate")]
        {
            gloo_timers::callback::Timeout::new(delay_ms, task).forget();
        }
        #[cfg(not(feature = "hydrate"))]
        {
            let _ = (delay_ms, task);
        }
    }
}

/// Timer that queues tasks until a test fires them.
#[cfg(test)]
#[derive(Default)]
pub(crate) struct ManualTimer {
    pending: Vec<(u32, Box<dyn FnOnce()>)>,
}

#[cfg(test)]
impl ManualTimer {
    pub(crate) fn delays(&self) -> Vec<u32> {
        self.pending.iter().map(|(delay, _)| *delay).collect()
    }

    /// Run every queued task in scheduling order.
    pub(crate) fn fire_all(&mut self) {
        for (_, task) in self.pending.drain(..) {
            task();
        }
    }
}

#[cfg(test)]
impl OneShotTimer for ManualTimer {
    fn after(&mut self, delay_ms: u32, task: impl FnOnce() + 'static) {
        self.pending.push((delay_ms, Box::new(task)));
    }
}
