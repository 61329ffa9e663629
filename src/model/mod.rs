// Copyright 2026 the Tenarai Authors
// SPDX-License-Identifier: Apache-2.0

//! Stroke data model

pub mod bounds;
pub mod stroke;
pub mod stroke_id;

pub use bounds::CanvasBounds;
pub use stroke::Stroke;
pub use stroke_id::StrokeId;
