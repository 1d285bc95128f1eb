// ABOUTME: Command modules for runcalc-cli
// ABOUTME: One-shot evaluation, interactive session and batch files
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Runcalc Contributors

pub mod batch;
pub mod oneshot;
pub mod repl;
