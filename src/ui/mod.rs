// Copyright (c) 2025, Jason Jenkins
// SPDX-License-Identifier: BSD-3-Clause

//! UI components for the MindList application.

pub mod canvas;
pub mod home;
pub mod inspector;
pub mod sidebar;
pub mod toolbar;
