// Copyright (c) 2025 Soumyadip Sarkar.
// All rights reserved.
//
// This source code is licensed under the license found in the
// LICENSE file in the root directory of this source tree.

pub mod cli;
pub mod db;
pub mod models;
pub mod utils;
pub mod dates;
pub mod projection;
pub mod grid;
pub mod form;
pub mod store;
pub mod state;
pub mod commands;
