// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Single-slot observable of the element's current size.
//!
//! Observers are called immediately on subscription with the current value and
//! again on every publish, in subscription order. A revision counter bumps on
//! each publish so pollers can detect changes without subscribing.
//!
//! ```
//! use core::cell::Cell;
//! use std::rc::Rc;
//!
//! use kurbo::Size;
//! use understory_resize::broadcast::DimensionBroadcast;
//!
//! let mut dims = DimensionBroadcast::new(Size::new(200.0, 100.0));
//! let seen = Rc::new(Cell::new(Size::ZERO));
//!
//! let sink = seen.clone();
//! let id = dims.subscribe(move |size| sink.set(size));
//! assert_eq!(seen.get(), Size::new(200.0, 100.0));
//!
//! dims.publish(Size::new(300.0, 150.0));
//! assert_eq!(seen.get(), Size::new(300.0, 150.0));
//! assert_eq!(dims.revision(), 1);
//!
//! assert!(dims.unsubscribe(id));
//! ```

use alloc::boxed::Box;
use alloc::vec::Vec;
use core::fmt;

use kurbo::Size;

/// Identifies a subscription for [`DimensionBroadcast::unsubscribe`].
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct SubscriptionId(u64);

type Observer = Box<dyn FnMut(Size)>;

/// Latest `{width, height}` plus the observers interested in it.
pub struct DimensionBroadcast {
    latest: Size,
    revision: u64,
    next_id: u64,
    observers: Vec<(SubscriptionId, Observer)>,
}

impl fmt::Debug for DimensionBroadcast {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("DimensionBroadcast")
            .field("latest", &self.latest)
            .field("revision", &self.revision)
            .field("next_id", &self.next_id)
            .field("observers", &self.observers.len())
            .finish()
    }
}

impl DimensionBroadcast {
    /// Create a channel seeded with `initial`. The revision starts at zero.
    #[must_use]
    pub fn new(initial: Size) -> Self {
        Self {
            latest: initial,
            revision: 0,
            next_id: 0,
            observers: Vec::new(),
        }
    }

    /// The most recently published size.
    #[must_use]
    pub fn latest(&self) -> Size {
        self.latest
    }

    /// Number of publishes since creation.
    #[must_use]
    pub fn revision(&self) -> u64 {
        self.revision
    }

    /// Number of live subscriptions.
    #[must_use]
    pub fn observer_count(&self) -> usize {
        self.observers.len()
    }

    /// Register `observer`. It is called right away with [`Self::latest`].
    pub fn subscribe(&mut self, mut observer: impl FnMut(Size) + 'static) -> SubscriptionId {
        let id = SubscriptionId(self.next_id);
        self.next_id += 1;
        observer(self.latest);
        self.observers.push((id, Box::new(observer)));
        id
    }

    /// Drop a subscription. Returns `false` if `id` was not subscribed.
    pub fn unsubscribe(&mut self, id: SubscriptionId) -> bool {
        let before = self.observers.len();
        self.observers.retain(|(sub, _)| *sub != id);
        self.observers.len() != before
    }

    /// Store `size` and notify every observer.
    pub fn publish(&mut self, size: Size) {
        self.latest = size;
        self.revision += 1;
        for (_, observer) in &mut self.observers {
            observer(size);
        }
    }
}
