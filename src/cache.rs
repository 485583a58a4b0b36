// (c) Copyright 2025 Mikołaj Kuranowski
// SPDX-License-Identifier: MIT

use std::collections::BTreeMap;
use std::path::{Path, PathBuf};

use log::{debug, error};

use crate::data;

/// Persisted store of previously computed routes, keyed `"{start}_{end}"`.
///
/// A single computation populates both the forward key and the reverse key
/// (with the node sequence reversed), so the return trip never recomputes.
/// When a backing file is configured, every mutation rewrites it in full;
/// a failed write is logged and the in-process copy stays authoritative
/// for the rest of the run.
#[derive(Debug, Default, Clone, PartialEq)]
pub struct RouteCache {
    routes: BTreeMap<String, Vec<String>>,
    path: Option<PathBuf>,
}

impl RouteCache {
    /// A cache with no backing file. Useful for tests and one-off runs.
    pub fn in_memory() -> Self {
        Self::default()
    }

    /// A cache backed by a JSON file. A missing or unreadable file simply
    /// starts the cache off empty.
    pub fn load<P: AsRef<Path>>(path: P) -> Self {
        Self {
            routes: data::load_routes(path.as_ref()),
            path: Some(path.as_ref().to_path_buf()),
        }
    }

    /// The composite key under which a route is stored.
    pub fn key(start: &str, end: &str) -> String {
        format!("{}_{}", start, end)
    }

    /// Returns the number of stored routes (forward and reverse entries
    /// count separately).
    pub fn len(&self) -> usize {
        self.routes.len()
    }

    /// Returns true if no routes are stored.
    pub fn is_empty(&self) -> bool {
        self.routes.is_empty()
    }

    /// Looks up the stored route from `start` to `end`.
    pub fn get(&self, start: &str, end: &str) -> Option<&[String]> {
        self.routes.get(&Self::key(start, end)).map(Vec::as_slice)
    }

    /// Stores a computed route under the forward key, and its reversal
    /// under the reverse key, then persists.
    pub fn put(&mut self, start: &str, end: &str, route: Vec<String>) {
        let mut reversed = route.clone();
        reversed.reverse();

        self.routes.insert(Self::key(end, start), reversed);
        self.routes.insert(Self::key(start, end), route);
        self.persist();
    }

    fn persist(&self) {
        let Some(ref path) = self.path else {
            return;
        };
        match data::save_routes(path, &self.routes) {
            Ok(()) => debug!("saved {} routes to {}", self.routes.len(), path.display()),
            Err(e) => error!("could not save routes to {}: {}", path.display(), e),
        }
    }
}
