// ABOUTME: Conversational shell - mode selection, session state and line dispatch
// ABOUTME: Adapts a (mode, line) pair to the engine and renders the answer
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Runcalc Contributors

//! The shell owns no state of its own. Callers keep a [`SessionState`],
//! update it with [`SessionState::select`] and [`SessionState::back`], and
//! pass it to [`Shell::dispatch`] with every line.

/// Line dispatch and outcomes
pub mod dispatch;
/// Welcome and help text
pub mod messages;
/// Calculator flows
pub mod mode;
/// Per-conversation state
pub mod session;

pub use dispatch::{Evaluation, Outcome, Shell};
pub use mode::{Mode, UnknownMode};
pub use session::SessionState;
