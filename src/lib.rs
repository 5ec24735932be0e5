// Copyright (c) 2025, Jason Jenkins
// SPDX-License-Identifier: BSD-3-Clause

//! MindList core: project model, infinite-canvas workspace logic,
//! generation service boundary and persistence.

pub mod config;
pub mod generation;
pub mod io;
pub mod models;
pub mod workspace;
