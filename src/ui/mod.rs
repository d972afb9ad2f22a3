// Copyright (c) 2025, Jason Jenkins
// SPDX-License-Identifier: BSD-3-Clause

//! Console UI for the figure editor.

pub mod console;
pub mod menu;
