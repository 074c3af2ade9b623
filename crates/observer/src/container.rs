//! Container-width breakpoint listeners.

use std::collections::BTreeMap;

use log::{debug, trace};
use tracing::debug_span;

type WidthCallback = Box<dyn FnMut(f64) + Send>;

/// Handle returned by [`ContainerBreakpoints::register`].
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct ListenerId(u64);

impl ListenerId {
    /// Handed out for registrations without thresholds; unregistering it is a no-op.
    pub const INERT: Self = Self(0);

    #[inline]
    pub const fn is_inert(self) -> bool {
        self.0 == 0
    }
}

struct Listener {
    thresholds: Vec<f64>,
    callback: WidthCallback,
}

/// Breakpoint registry of one container.
///
/// Every listener contributes the widths it depends on. On each layout pass
/// the container picks the largest registered threshold not above its width
/// and notifies all listeners when that threshold differs from the previous
/// pass.
pub struct ContainerBreakpoints {
    listeners: BTreeMap<ListenerId, Listener>,
    next_id: u64,
    /// Threshold selected by the last notifying layout pass, `0` initially.
    active: f64,
}

impl Default for ContainerBreakpoints {
    fn default() -> Self {
        Self {
            listeners: BTreeMap::new(),
            next_id: 1,
            active: 0.0,
        }
    }
}

impl core::fmt::Debug for ContainerBreakpoints {
    fn fmt(&self, formatter: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        formatter
            .debug_struct("ContainerBreakpoints")
            .field("listeners", &self.listeners.len())
            .field("thresholds", &self.thresholds())
            .field("active", &self.active)
            .finish()
    }
}

impl ContainerBreakpoints {
    #[inline]
    pub fn new() -> Self {
        Self::default()
    }

    /// Subscribe `callback` to crossings of `thresholds`.
    ///
    /// An empty threshold set registers nothing and returns [`ListenerId::INERT`].
    pub fn register<I, F>(&mut self, thresholds: I, callback: F) -> ListenerId
    where
        I: IntoIterator<Item = f64>,
        F: FnMut(f64) + Send + 'static,
    {
        let thresholds: Vec<f64> = thresholds.into_iter().collect();
        if thresholds.is_empty() {
            return ListenerId::INERT;
        }
        let id = ListenerId(self.next_id);
        self.next_id += 1;
        trace!("registering container listener {id:?} for {thresholds:?}");
        self.listeners.insert(
            id,
            Listener {
                thresholds,
                callback: Box::new(callback),
            },
        );
        id
    }

    /// Remove a listener together with the thresholds it contributed.
    /// Returns whether anything was removed.
    pub fn unregister(&mut self, id: ListenerId) -> bool {
        self.listeners.remove(&id).is_some()
    }

    /// Union of all registered thresholds, ascending and deduplicated.
    pub fn thresholds(&self) -> Vec<f64> {
        let mut thresholds: Vec<f64> = self
            .listeners
            .values()
            .flat_map(|listener| listener.thresholds.iter().copied())
            .collect();
        thresholds.sort_by(f64::total_cmp);
        thresholds.dedup();
        thresholds
    }

    #[inline]
    pub const fn active_threshold(&self) -> f64 {
        self.active
    }

    #[inline]
    pub fn len(&self) -> usize {
        self.listeners.len()
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.listeners.is_empty()
    }

    /// Feed a measured container width. Returns the number of listeners notified.
    ///
    /// A width of `0` means the container has not been laid out yet and is
    /// ignored.
    pub fn on_layout(&mut self, width: f64) -> usize {
        if width == 0.0 || self.listeners.is_empty() {
            return 0;
        }
        let matching = self
            .listeners
            .values()
            .flat_map(|listener| listener.thresholds.iter().copied())
            .filter(|threshold| *threshold <= width)
            .max_by(f64::total_cmp);

        match matching {
            None if self.active == 0.0 => return 0,
            None => self.active = 0.0,
            Some(threshold) if threshold == self.active => return 0,
            Some(threshold) => self.active = threshold,
        }
        self.notify(width)
    }

    fn notify(&mut self, width: f64) -> usize {
        let _span = debug_span!("container_breakpoints.notify", width, active = self.active).entered();
        debug!(
            "container width {width} crossed into threshold {}, notifying {} listeners",
            self.active,
            self.listeners.len()
        );
        for listener in self.listeners.values_mut() {
            (listener.callback)(width);
        }
        self.listeners.len()
    }
}
