//! Deferred acquisition of a resource that can only be constructed in an
//! interactive context.
//!
//! The executable cell touches browser globals, so it cannot be built while
//! a page is prerendered. [`Deferred`] starts out unloaded, hands out its
//! acquisition task exactly once (and only when the context allows it), and
//! notifies listeners when the resource arrives. Renderers show a degraded
//! view until then.
//!
//! There is no timeout, retry or cancellation: a task that never completes
//! leaves the handle acquiring forever.

use std::cell::RefCell;
use std::fmt;
use std::future::Future;
use std::rc::Rc;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ExecutionContext {
    /// Running in a live page, browser globals are available.
    Interactive,
    /// Producing markup ahead of time, nothing browser-only may be touched.
    Prerender,
}

enum Slot<R> {
    Unloaded,
    Acquiring,
    Loaded(R),
}

type ReadyCallback<R> = Box<dyn FnOnce(&R)>;

pub struct Deferred<R> {
    slot: Rc<RefCell<Slot<R>>>,
    ready_callbacks: Rc<RefCell<Vec<ReadyCallback<R>>>>,
}

impl<R: Clone + 'static> Deferred<R> {
    pub fn new() -> Self {
        Self {
            slot: Rc::new(RefCell::new(Slot::Unloaded)),
            ready_callbacks: Rc::new(RefCell::new(Vec::new())),
        }
    }

    pub fn get(&self) -> Option<R> {
        match &*self.slot.borrow() {
            Slot::Loaded(resource) => Some(resource.clone()),
            _ => None,
        }
    }

    pub fn is_loaded(&self) -> bool {
        matches!(*self.slot.borrow(), Slot::Loaded(_))
    }

    pub fn is_acquiring(&self) -> bool {
        matches!(*self.slot.borrow(), Slot::Acquiring)
    }

    /// Runs `callback` once the resource is loaded, immediately if it already is.
    pub fn on_ready(&self, callback: impl FnOnce(&R) + 'static) {
        if let Some(resource) = self.get() {
            callback(&resource);
            return;
        }
        self.ready_callbacks.borrow_mut().push(Box::new(callback));
    }

    /// Returns the acquisition task if this call is the one that should start it.
    ///
    /// Safe to call on every render: it yields `None` while prerendering and
    /// after the first interactive call. `acquire` itself is only invoked when
    /// a task is returned.
    pub fn acquire<F, Fut>(
        &self,
        context: ExecutionContext,
        acquire: F,
    ) -> Option<impl Future<Output = ()> + 'static + use<R, F, Fut>>
    where
        F: FnOnce() -> Fut,
        Fut: Future<Output = R> + 'static,
    {
        if context == ExecutionContext::Prerender {
            return None;
        }
        {
            let mut slot = self.slot.borrow_mut();
            if !matches!(*slot, Slot::Unloaded) {
                return None;
            }
            *slot = Slot::Acquiring;
        }
        log::debug!("Acquiring deferred resource");
        let resource = acquire();
        let slot = Rc::clone(&self.slot);
        let ready_callbacks = Rc::clone(&self.ready_callbacks);
        Some(async move {
            let resource = resource.await;
            *slot.borrow_mut() = Slot::Loaded(resource.clone());
            log::debug!("Deferred resource loaded");
            let callbacks = std::mem::take(&mut *ready_callbacks.borrow_mut());
            for callback in callbacks {
                callback(&resource);
            }
        })
    }
}

impl<R: Clone + 'static> Default for Deferred<R> {
    fn default() -> Self {
        Self::new()
    }
}

impl<R> Clone for Deferred<R> {
    fn clone(&self) -> Self {
        Self {
            slot: Rc::clone(&self.slot),
            ready_callbacks: Rc::clone(&self.ready_callbacks),
        }
    }
}

impl<R> fmt::Debug for Deferred<R> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let state = match &*self.slot.borrow() {
            Slot::Unloaded => "Unloaded",
            Slot::Acquiring => "Acquiring",
            Slot::Loaded(_) => "Loaded",
        };
        write!(f, "Deferred({state})")
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::cell::Cell;

    #[tokio::test]
    async fn acquires_exactly_once() {
        let deferred = Deferred::<Rc<str>>::new();
        let calls = Rc::new(Cell::new(0));

        let make = |calls: Rc<Cell<u32>>| {
            move || {
                calls.set(calls.get() + 1);
                async { Rc::<str>::from("cell") }
            }
        };

        let task = deferred.acquire(ExecutionContext::Interactive, make(calls.clone()));
        assert!(task.is_some());
        assert!(deferred.is_acquiring());
        assert!(deferred.acquire(ExecutionContext::Interactive, make(calls.clone())).is_none());

        if let Some(task) = task {
            task.await;
        }
        assert!(deferred.is_loaded());
        assert_eq!(deferred.get().as_deref(), Some("cell"));
        assert!(deferred.acquire(ExecutionContext::Interactive, make(calls.clone())).is_none());
        assert_eq!(calls.get(), 1);
    }

    #[tokio::test]
    async fn prerender_never_acquires() {
        let deferred = Deferred::<u32>::new();
        let task = deferred.acquire(ExecutionContext::Prerender, || async { 1 });
        assert!(task.is_none());
        assert!(!deferred.is_acquiring());
        assert_eq!(deferred.get(), None);

        let task = deferred.acquire(ExecutionContext::Interactive, || async { 2 });
        if let Some(task) = task {
            task.await;
        }
        assert_eq!(deferred.get(), Some(2));
    }

    #[tokio::test]
    async fn notifies_ready_listeners() {
        let deferred = Deferred::<u32>::new();
        let seen = Rc::new(RefCell::new(Vec::new()));

        {
            let seen = seen.clone();
            deferred.on_ready(move |value| seen.borrow_mut().push(("early", *value)));
        }
        let task = deferred.acquire(ExecutionContext::Interactive, || async { 7 });
        assert!(seen.borrow().is_empty());
        if let Some(task) = task {
            task.await;
        }
        {
            let seen = seen.clone();
            deferred.on_ready(move |value| seen.borrow_mut().push(("late", *value)));
        }
        assert_eq!(*seen.borrow(), [("early", 7), ("late", 7)]);
    }

    #[test]
    fn dropped_task_stays_acquiring() {
        let deferred = Deferred::<u32>::new();
        drop(deferred.acquire(ExecutionContext::Interactive, || async { 1 }));
        assert!(deferred.is_acquiring());
        assert_eq!(deferred.get(), None);
        assert_eq!(format!("{deferred:?}"), "Deferred(Acquiring)");
    }
}
