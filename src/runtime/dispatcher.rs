//! Reentrancy-safe FIFO event dispatch.

use crate::config::DispatchConfig;
use crate::core::Event;
use crate::runtime::error::DispatchError;
use std::cell::{Cell, RefCell};
use std::collections::VecDeque;

/// FIFO queue of pending events plus a reentrancy flag.
///
/// `submit` enqueues and, unless a drain loop is already running on this
/// dispatcher, drains the queue by handing each event to `deliver`. A
/// `submit` made from inside `deliver` only enqueues: the running loop picks
/// the event up, so chained events are handled in submission order with no
/// extra stack depth.
///
/// If `deliver` fails the loop stops, the remaining queued events are
/// dropped and the error is returned to the outermost caller. The flag is
/// cleared on every exit path, including unwinding.
///
/// Single-threaded by construction: the dispatcher is `!Sync`.
///
/// # Example
///
/// ```rust
/// use eventide::core::Event;
/// use eventide::runtime::Dispatcher;
/// use std::cell::RefCell;
///
/// #[derive(Debug)]
/// struct Tick(u32);
///
/// impl Event for Tick {
///     fn kind(&self) -> &'static str {
///         "Tick"
///     }
/// }
///
/// let dispatcher = Dispatcher::default();
/// let seen = RefCell::new(Vec::new());
///
/// dispatcher
///     .submit(Tick(0), |tick| {
///         seen.borrow_mut().push(tick.0);
///         if tick.0 < 3 {
///             // Only enqueues: the loop above is still running.
///             dispatcher.submit(Tick(tick.0 + 1), |_| unreachable!())?;
///         }
///         Ok(())
///     })
///     .unwrap();
///
/// assert_eq!(*seen.borrow(), vec![0, 1, 2, 3]);
/// assert!(!dispatcher.is_draining());
/// ```
pub struct Dispatcher<E> {
    queue: RefCell<VecDeque<E>>,
    draining: Cell<bool>,
    config: DispatchConfig,
}

impl<E: Event> Dispatcher<E> {
    pub fn new(config: DispatchConfig) -> Self {
        Self {
            queue: RefCell::new(VecDeque::new()),
            draining: Cell::new(false),
            config,
        }
    }

    /// Enqueue `event` and drain unless a drain loop is already active.
    ///
    /// Returns once every event queued by this call, and by anything it
    /// triggered, has been handled. A nested call returns right after
    /// enqueueing.
    pub fn submit<F>(&self, event: E, deliver: F) -> Result<(), DispatchError>
    where
        F: FnMut(E) -> Result<(), DispatchError>,
    {
        self.post(event)?;
        self.drain(deliver).map(|_| ())
    }

    /// Enqueue without draining.
    pub fn post(&self, event: E) -> Result<(), DispatchError> {
        let mut queue = self.queue.borrow_mut();
        if let Some(limit) = self.config.max_pending {
            if queue.len() >= limit {
                return Err(DispatchError::QueueFull { limit });
            }
        }

        tracing::trace!(
            event = event.kind(),
            pending = queue.len(),
            deferred = self.draining.get(),
            "event queued"
        );
        queue.push_back(event);
        Ok(())
    }

    /// Run the drain loop if none is active; returns the number of events
    /// handled by this call.
    pub fn drain<F>(&self, mut deliver: F) -> Result<usize, DispatchError>
    where
        F: FnMut(E) -> Result<(), DispatchError>,
    {
        if self.draining.get() {
            return Ok(0);
        }

        let _active = DrainGuard::enter(self);
        let mut handled = 0;

        loop {
            if self.queue.borrow().is_empty() {
                break;
            }

            // Checked before popping so the guard counts every dropped event.
            if let Some(limit) = self.config.max_events_per_drain {
                if handled >= limit {
                    return Err(DispatchError::DrainLimitExceeded { limit });
                }
            }

            let next = self.queue.borrow_mut().pop_front();
            let Some(event) = next else {
                break;
            };

            handled += 1;
            deliver(event)?;
        }

        tracing::trace!(handled, "drain finished");
        Ok(handled)
    }

    /// Number of queued events not yet handed out.
    pub fn pending(&self) -> usize {
        self.queue.borrow().len()
    }

    /// Whether a drain loop is currently running.
    pub fn is_draining(&self) -> bool {
        self.draining.get()
    }

    pub fn config(&self) -> &DispatchConfig {
        &self.config
    }
}

impl<E: Event> Default for Dispatcher<E> {
    fn default() -> Self {
        Self::new(DispatchConfig::default())
    }
}

impl<E> std::fmt::Debug for Dispatcher<E> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Dispatcher")
            .field("pending", &self.queue.borrow().len())
            .field("draining", &self.draining.get())
            .field("config", &self.config)
            .finish()
    }
}

/// Holds the reentrancy flag for the lifetime of one drain loop.
///
/// Dropping it clears the flag and discards whatever is still queued, so an
/// aborted drain leaves the dispatcher ready for a fresh `submit`.
struct DrainGuard<'a, E> {
    dispatcher: &'a Dispatcher<E>,
}

impl<'a, E> DrainGuard<'a, E> {
    fn enter(dispatcher: &'a Dispatcher<E>) -> Self {
        dispatcher.draining.set(true);
        tracing::trace!(
            pending = dispatcher.queue.borrow().len(),
            "drain started"
        );
        Self { dispatcher }
    }
}

impl<E> Drop for DrainGuard<'_, E> {
    fn drop(&mut self) {
        let discarded: Vec<E> = self.dispatcher.queue.borrow_mut().drain(..).collect();
        if !discarded.is_empty() {
            tracing::warn!(
                discarded = discarded.len(),
                "drain aborted, pending events dropped"
            );
        }
        self.dispatcher.draining.set(false);
    }
}
