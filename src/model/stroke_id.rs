// Copyright 2026 the Tenarai Authors
// SPDX-License-Identifier: Apache-2.0

//! Unique identifiers for captured strokes.
//!
//! Each `StrokeId` is a monotonically increasing `u64` generated from a
//! global atomic counter. The rendering layer uses them as stable keys when
//! diffing the completed-strokes list, so ids are never reused within a
//! process and a committed stroke keeps its id for its whole lifetime.

use std::sync::atomic::{AtomicU64, Ordering};

/// A unique identifier for one captured stroke
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct StrokeId(u64);

static STROKE_COUNTER: AtomicU64 = AtomicU64::new(1);

impl StrokeId {
    /// Create a new unique stroke ID
    pub fn next() -> Self {
        Self(STROKE_COUNTER.fetch_add(1, Ordering::Relaxed))
    }
}

impl Default for StrokeId {
    fn default() -> Self {
        Self::next()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn ids_are_unique_and_increasing() {
        let a = StrokeId::next();
        let b = StrokeId::next();
        assert_ne!(a, b);
        assert!(a < b);
    }
}
