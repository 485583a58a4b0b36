// (c) Copyright 2025 Mikołaj Kuranowski
// SPDX-License-Identifier: MIT

//! JSON persistence for the four data files the engine touches:
//! node coordinates, forbidden zones, precomputed routes, and the
//! write-only graph snapshot.
//!
//! Loading follows one policy uniformly: a missing or malformed file
//! degrades to an empty collection with a logged diagnostic, and the run
//! carries on. Saving reports its errors to the caller instead.

use std::collections::BTreeMap;
use std::fs::File;
use std::io::{BufReader, BufWriter};
use std::path::Path;

use log::warn;
use serde::de::DeserializeOwned;
use serde::{Deserialize, Serialize};

use crate::{CoordinateStore, ForbiddenZone, ForbiddenZoneIndex, Graph, Point};

/// Error conditions which may occur while reading or writing a JSON
/// data file.
#[derive(Debug, thiserror::Error)]
pub enum DataError {
    #[error(transparent)]
    Io(#[from] std::io::Error),

    #[error(transparent)]
    Json(#[from] serde_json::Error),
}

/// On-disk shape of the forbidden zones file: the zone rectangles sit
/// under a single fixed key, each with an identifier used only for
/// iteration.
#[derive(Debug, Deserialize)]
struct ZonesFile {
    #[serde(rename = "rangos_prohibidos", default)]
    zones: BTreeMap<String, ForbiddenZone>,
}

fn read_json<T: DeserializeOwned, P: AsRef<Path>>(path: P) -> Result<T, DataError> {
    let f = File::open(path)?;
    Ok(serde_json::from_reader(BufReader::new(f))?)
}

fn write_json<T: Serialize, P: AsRef<Path>>(path: P, value: &T) -> Result<(), DataError> {
    let f = File::create(path)?;
    serde_json::to_writer_pretty(BufWriter::new(f), value)?;
    Ok(())
}

/// Loads the node coordinate mapping (`{"id": [x, y], ...}`).
///
/// A missing or malformed file degrades to an empty store with a
/// diagnostic; routing then reports every node as unknown instead of
/// aborting the run.
pub fn load_coordinates<P: AsRef<Path>>(path: P) -> CoordinateStore {
    match read_json::<BTreeMap<String, Point>, _>(&path) {
        Ok(map) => CoordinateStore::from(map),
        Err(e) => {
            warn!(
                "could not load coordinates from {}: {}",
                path.as_ref().display(),
                e
            );
            CoordinateStore::default()
        }
    }
}

/// Loads the forbidden zones file. Degrades to an empty index (no zone
/// ever matches) with a diagnostic on failure.
pub fn load_zones<P: AsRef<Path>>(path: P) -> ForbiddenZoneIndex {
    match read_json::<ZonesFile, _>(&path) {
        Ok(file) => file.zones.into_values().collect(),
        Err(e) => {
            warn!(
                "could not load forbidden zones from {}: {}",
                path.as_ref().display(),
                e
            );
            ForbiddenZoneIndex::default()
        }
    }
}

/// Loads the precomputed routes file (`{"start_end": ["id", ...], ...}`).
/// Degrades to an empty mapping with a diagnostic on failure.
pub fn load_routes<P: AsRef<Path>>(path: P) -> BTreeMap<String, Vec<String>> {
    match read_json(&path) {
        Ok(routes) => routes,
        Err(e) => {
            warn!(
                "could not load routes from {}: {}",
                path.as_ref().display(),
                e
            );
            BTreeMap::new()
        }
    }
}

/// Rewrites the precomputed routes file in full, pretty-printed.
pub fn save_routes<P: AsRef<Path>>(
    path: P,
    routes: &BTreeMap<String, Vec<String>>,
) -> Result<(), DataError> {
    write_json(path, routes)
}

/// Writes the built graph as `{"node": {"neighbor": weight, ...}, ...}`,
/// optionally nested under a route key. The snapshot exists for external
/// inspection only; nothing ever reads it back.
pub fn save_graph_snapshot<P: AsRef<Path>>(
    path: P,
    graph: &Graph,
    key: Option<&str>,
) -> Result<(), DataError> {
    match key {
        Some(key) => {
            let mut wrapped = BTreeMap::new();
            wrapped.insert(key, graph);
            write_json(path, &wrapped)
        }
        None => write_json(path, graph),
    }
}
