// Copyright (c) 2025, Jason Jenkins
// SPDX-License-Identifier: BSD-3-Clause

//! Data model for projects, concept nodes and drawings.

pub mod drawing;
pub mod node;
pub mod project;
