use std::{
    cell::{Cell, RefCell},
    rc::Rc,
    time::Duration,
};

pub const AUTO_ADVANCE_INTERVAL: Duration = Duration::from_millis(4000);

/// A running repeating timer.
pub trait TimerHandle {
    /// Stop the timer. Calling this more than once is harmless.
    fn cancel(&self);
}

/// Source of repeating timers, injected so tests can drive time by hand.
pub trait Scheduler {
    type Handle: TimerHandle;

    fn repeat(&self, interval: Duration, tick: Rc<dyn Fn()>) -> Self::Handle;
}

/// Owns the auto-advance timer for a mounted carousel. Dropping the guard
/// cancels the timer, so a torn-down carousel can never be advanced.
#[must_use = "dropping the guard stops auto-advance immediately"]
pub struct AutoAdvance<H: TimerHandle> {
    handle: H,
}

impl<H: TimerHandle> AutoAdvance<H> {
    pub fn start<S>(scheduler: &S, interval: Duration, advance: impl Fn() + 'static) -> Self
    where
        S: Scheduler<Handle = H>,
    {
        let handle = scheduler.repeat(interval, Rc::new(advance));
        Self { handle }
    }

    pub fn stop(self) {
        drop(self);
    }
}

impl<H: TimerHandle> Drop for AutoAdvance<H> {
    fn drop(&mut self) {
        self.handle.cancel();
    }
}

struct ManualTimer {
    interval: Duration,
    next_due: Duration,
    tick: Rc<dyn Fn()>,
    cancelled: Rc<Cell<bool>>,
}

#[derive(Default)]
struct ManualClock {
    now: Duration,
    timers: Vec<ManualTimer>,
}

/// Deterministic scheduler: time only moves when [`ManualScheduler::advance_by`]
/// is called.
#[derive(Clone, Default)]
pub struct ManualScheduler {
    clock: Rc<RefCell<ManualClock>>,
}

pub struct ManualHandle {
    cancelled: Rc<Cell<bool>>,
}

impl TimerHandle for ManualHandle {
    fn cancel(&self) {
        self.cancelled.set(true);
    }
}

impl Scheduler for ManualScheduler {
    type Handle = ManualHandle;

    fn repeat(&self, interval: Duration, tick: Rc<dyn Fn()>) -> ManualHandle {
        let interval = interval.max(Duration::from_millis(1));
        let cancelled = Rc::new(Cell::new(false));
        let mut clock = self.clock.borrow_mut();
        let next_due = clock.now + interval;
        clock.timers.push(ManualTimer {
            interval,
            next_due,
            tick,
            cancelled: cancelled.clone(),
        });
        ManualHandle { cancelled }
    }
}

impl ManualScheduler {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn now(&self) -> Duration {
        self.clock.borrow().now
    }

    /// Timers that have not been cancelled.
    pub fn active_timers(&self) -> usize {
        self.clock
            .borrow()
            .timers
            .iter()
            .filter(|t| !t.cancelled.get())
            .count()
    }

    /// Move time forward, firing every tick that falls due on the way, in
    /// due order. Returns how many ticks fired.
    pub fn advance_by(&self, elapsed: Duration) -> usize {
        let target = self.clock.borrow().now + elapsed;
        let mut fired = 0;
        loop {
            let tick = {
                let mut clock = self.clock.borrow_mut();
                clock.timers.retain(|t| !t.cancelled.get());
                let next = clock
                    .timers
                    .iter()
                    .enumerate()
                    .filter(|(_, t)| t.next_due <= target)
                    .min_by_key(|(_, t)| t.next_due)
                    .map(|(i, _)| i);
                let Some(i) = next else {
                    clock.now = target;
                    break;
                };
                let timer = &mut clock.timers[i];
                let due = timer.next_due;
                timer.next_due += timer.interval;
                let tick = timer.tick.clone();
                clock.now = due;
                tick
            };
            // clock is released here; the tick may cancel timers
            tick();
            fired += 1;
        }
        fired
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::carousel::Carousel;

    fn mounted(
        scheduler: &ManualScheduler,
        len: u32,
    ) -> (Rc<RefCell<Carousel<u32>>>, Rc<Cell<usize>>, AutoAdvance<ManualHandle>) {
        let carousel = Rc::new(RefCell::new(Carousel::new((0..len).collect()).unwrap()));
        let observed = Rc::new(Cell::new(0));
        let guard = {
            let carousel = carousel.clone();
            let observed = observed.clone();
            AutoAdvance::start(scheduler, AUTO_ADVANCE_INTERVAL, move || {
                carousel.borrow_mut().advance();
                observed.set(observed.get() + 1);
            })
        };
        (carousel, observed, guard)
    }

    #[test]
    fn test_three_ticks_advance_three() {
        let scheduler = ManualScheduler::new();
        let (carousel, observed, _guard) = mounted(&scheduler, 8);

        assert_eq!(scheduler.advance_by(Duration::from_millis(3999)), 0);
        assert_eq!(carousel.borrow().current(), 0);

        assert_eq!(scheduler.advance_by(Duration::from_millis(8001)), 3);
        assert_eq!(carousel.borrow().current(), 3);
        assert_eq!(observed.get(), 3);
        assert_eq!(scheduler.now(), Duration::from_millis(12000));
    }

    #[test]
    fn test_ticks_wrap_around() {
        let scheduler = ManualScheduler::new();
        let (carousel, _, _guard) = mounted(&scheduler, 2);
        scheduler.advance_by(AUTO_ADVANCE_INTERVAL * 3);
        assert_eq!(carousel.borrow().current(), 1);
    }

    #[test]
    fn test_teardown_cancels_timer() {
        let scheduler = ManualScheduler::new();
        let (carousel, observed, guard) = mounted(&scheduler, 8);
        scheduler.advance_by(AUTO_ADVANCE_INTERVAL);
        assert_eq!(carousel.borrow().current(), 1);
        assert_eq!(scheduler.active_timers(), 1);

        drop(guard);
        assert_eq!(scheduler.active_timers(), 0);
        assert_eq!(scheduler.advance_by(AUTO_ADVANCE_INTERVAL * 5), 0);
        assert_eq!(carousel.borrow().current(), 1);
        assert_eq!(observed.get(), 1);
    }

    #[test]
    fn test_stop_from_inside_tick() {
        let scheduler = ManualScheduler::new();
        let fired = Rc::new(Cell::new(0));
        let slot: Rc<RefCell<Option<AutoAdvance<ManualHandle>>>> = Rc::new(RefCell::new(None));
        let guard = {
            let fired = fired.clone();
            let slot = slot.clone();
            AutoAdvance::start(&scheduler, Duration::from_millis(10), move || {
                fired.set(fired.get() + 1);
                if fired.get() == 2 {
                    drop(slot.borrow_mut().take());
                }
            })
        };
        *slot.borrow_mut() = Some(guard);
        scheduler.advance_by(Duration::from_millis(100));
        assert_eq!(fired.get(), 2);
    }

    #[test]
    fn test_user_input_interleaves_with_ticks() {
        let scheduler = ManualScheduler::new();
        let (carousel, _, _guard) = mounted(&scheduler, 5);
        scheduler.advance_by(AUTO_ADVANCE_INTERVAL);
        carousel.borrow_mut().retreat();
        carousel.borrow_mut().retreat();
        assert_eq!(carousel.borrow().current(), 4);
        scheduler.advance_by(AUTO_ADVANCE_INTERVAL);
        assert_eq!(carousel.borrow().current(), 0);
    }
}
