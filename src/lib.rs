// Copyright 2026 the Tenarai Authors
// SPDX-License-Identifier: Apache-2.0

//! Tenarai: stroke capture core for a hiragana tracing practice canvas.
//!
//! The heart of the crate is [`capture::CaptureSession`], which turns the
//! raw pointer/touch stream of a drag gesture into clean, displayable
//! strokes: genuine pen movement is accumulated, discontinuous jumps (e.g.
//! multi-touch artifacts reported as one pointer) and points outside the
//! drawable region are dropped. The [`replay`] module loads recorded
//! sessions from JSON so captured input can be reproduced off-device.

use anyhow::Context;

pub mod capture;
pub mod model;
pub mod replay;
pub mod settings;

pub use capture::{CaptureSession, PointerPhase, PointerSample};
pub use model::{CanvasBounds, Stroke, StrokeId};
pub use settings::CanvasSettings;

/// Entry point for the session replay tool
pub fn run() -> anyhow::Result<()> {
    // Initialize tracing subscriber (can be controlled via RUST_LOG env var)
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::from_default_env()
                .add_directive("tenarai=info".parse().unwrap()),
        )
        .init();

    let args: Vec<String> = std::env::args().collect();
    let path = match args.get(1) {
        Some(arg) => std::path::PathBuf::from(arg),
        None => anyhow::bail!("usage: tenarai <session.json>"),
    };

    let session = replay::RecordedSession::load(&path)
        .with_context(|| format!("failed to load session from {}", path.display()))?;
    tracing::info!(
        "replaying {} events from {}",
        session.events.len(),
        path.display()
    );

    let strokes = replay::replay(&session);
    for (index, stroke) in strokes.iter().enumerate() {
        let points: Vec<String> = stroke
            .points()
            .iter()
            .map(|p| format!("({:.1}, {:.1})", p.x, p.y))
            .collect();
        println!("stroke {:>2}: {} points: {}", index + 1, stroke.len(), points.join(" "));
    }
    Ok(())
}
