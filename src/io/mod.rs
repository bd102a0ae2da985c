// SPDX-License-Identifier: Apache-2.0
// Copyright (c) 2025 Polyframe Inc.

//! I/O module - binary STL import and export

mod stl;

pub use stl::{expected_size, export_stl, load_stl, read_stl, write_stl, HEADER_SIZE, TRIANGLE_SIZE};
