// (c) Copyright 2025 Mikołaj Kuranowski
// SPDX-License-Identifier: MIT

mod error;
mod solver;

pub use error::RouteError;
pub use solver::shortest_path;
