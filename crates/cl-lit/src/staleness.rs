// Copyright 2019-2026 Maravilla Labs, operated by SOLUTAS GmbH, Switzerland
// SPDX-License-Identifier: Apache-2.0
// SPDX-License-Identifier: MIT

//! Freshness checks for derived outputs.

use crate::error::{Result, UnlitError};
use crate::paths::ModulePaths;
use std::fs;
use std::io;
use std::path::Path;
use std::time::SystemTime;

/// Decides whether a module's outputs must be regenerated.
///
/// A missing output counts as the earliest possible instant. The outputs are
/// fresh only when the source is strictly older than both of them.
pub fn needs_regeneration(
    source: SystemTime,
    definition: Option<SystemTime>,
    implementation: Option<SystemTime>,
) -> bool {
    let is_older_than = |output: Option<SystemTime>| output.is_some_and(|t| source < t);
    !(is_older_than(definition) && is_older_than(implementation))
}

/// The modification times of a module's three files.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Freshness {
    /// Literate source modification time.
    pub source: SystemTime,
    /// Definition output modification time, if it exists.
    pub definition: Option<SystemTime>,
    /// Implementation output modification time, if it exists.
    pub implementation: Option<SystemTime>,
}

impl Freshness {
    /// Reads modification times from the filesystem.
    ///
    /// Returns `Ok(None)` when the literate source does not exist.
    pub fn probe(paths: &ModulePaths) -> Result<Option<Self>> {
        let Some(source) = modified(&paths.literate)? else {
            return Ok(None);
        };
        Ok(Some(Self {
            source,
            definition: modified(&paths.definition)?,
            implementation: modified(&paths.implementation)?,
        }))
    }

    /// See [`needs_regeneration`].
    pub fn is_stale(&self) -> bool {
        needs_regeneration(self.source, self.definition, self.implementation)
    }
}

fn modified(path: &Path) -> Result<Option<SystemTime>> {
    match fs::metadata(path) {
        Ok(meta) => meta
            .modified()
            .map(Some)
            .map_err(|e| UnlitError::io(path, e)),
        Err(e) if e.kind() == io::ErrorKind::NotFound => Ok(None),
        Err(e) => Err(UnlitError::io(path, e)),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::time::Duration;

    fn at(secs: u64) -> SystemTime {
        SystemTime::UNIX_EPOCH + Duration::from_secs(secs)
    }

    #[test]
    fn test_source_newer_than_one_output() {
        assert!(needs_regeneration(at(10), Some(at(5)), Some(at(20))));
        assert!(needs_regeneration(at(10), Some(at(20)), Some(at(5))));
    }

    #[test]
    fn test_source_older_than_both() {
        assert!(!needs_regeneration(at(10), Some(at(11)), Some(at(20))));
    }

    #[test]
    fn test_equal_times_are_stale() {
        assert!(needs_regeneration(at(10), Some(at(10)), Some(at(20))));
        assert!(needs_regeneration(at(10), Some(at(10)), Some(at(10))));
    }

    #[test]
    fn test_missing_outputs_are_stale() {
        assert!(needs_regeneration(at(10), None, Some(at(20))));
        assert!(needs_regeneration(at(10), Some(at(20)), None));
        assert!(needs_regeneration(at(0), None, None));
    }

    #[test]
    fn test_monotonic_in_output_time() {
        let source = at(100);
        let implementation = Some(at(200));
        assert!(needs_regeneration(source, Some(at(50)), implementation));
        assert!(needs_regeneration(source, Some(at(100)), implementation));
        assert!(!needs_regeneration(source, Some(at(101)), implementation));
        assert!(!needs_regeneration(source, Some(at(500)), implementation));
        assert!(needs_regeneration(source, None, implementation));
    }
}
