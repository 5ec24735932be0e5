// Copyright (c) 2025, Jason Jenkins
// SPDX-License-Identifier: BSD-3-Clause

//! I/O operations for the project store and project files.

pub mod serialization;
pub mod store;
