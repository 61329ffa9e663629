// Copyright 2026 the Tenarai Authors
// SPDX-License-Identifier: Apache-2.0

//! Tenarai: stroke capture core for a hiragana tracing practice canvas

fn main() -> anyhow::Result<()> {
    tenarai::run()
}
