// Copyright 2025 the Plottir Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Gradient identifier allocation.
//!
//! Gradient definitions must be uniquely named within an emitted document.
//! The allocator is the only process-wide mutable state in the toolkit: a
//! single integer counter, initialized to zero at load and atomically
//! incremented, so charts built concurrently never collide.

use core::sync::atomic::{AtomicU64, Ordering};

static NEXT_GRADIENT_ID: AtomicU64 = AtomicU64::new(0);

/// A unique identifier for a linear-gradient definition.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct GradientId(pub u64);

impl GradientId {
    /// Mints a fresh, process-unique gradient identifier.
    pub fn mint() -> Self {
        Self(NEXT_GRADIENT_ID.fetch_add(1, Ordering::Relaxed))
    }
}
