// ABOUTME: Helper modules for runcalc-cli
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Runcalc Contributors

pub mod display;
