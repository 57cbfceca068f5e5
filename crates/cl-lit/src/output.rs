// Copyright 2019-2026 Maravilla Labs, operated by SOLUTAS GmbH, Switzerland
// SPDX-License-Identifier: Apache-2.0
// SPDX-License-Identifier: MIT

//! Writing derived outputs to disk.
//!
//! Outputs are always fully regenerated. In [`WriteMode::Atomic`] both are
//! first written to temporary siblings and renamed into place only after the
//! whole literate source was scanned, so an interrupted run never leaves a
//! truncated file with a fresh timestamp behind. If only the second rename
//! fails, the definition just written is removed again so the module stays
//! stale.

use crate::classify::PrefixTable;
use crate::error::{Result, UnlitError};
use crate::paths::ModulePaths;
use crate::transform::{unliterate_to, StreamError};
use std::fs::{self, File};
use std::io::{BufReader, BufWriter};
use std::path::Path;
use tempfile::NamedTempFile;

/// How derived outputs are replaced.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum WriteMode {
    /// Write to temporary files, then rename over the outputs.
    #[default]
    Atomic,
    /// Truncate and write the outputs directly. Both outputs are removed if
    /// the scan fails, so the next run regenerates them.
    InPlace,
}

/// Regenerates both outputs of a module from its literate source.
///
/// Returns the number of lines written to each output.
pub fn write_outputs(paths: &ModulePaths, prefixes: &PrefixTable, mode: WriteMode) -> Result<usize> {
    let source = File::open(&paths.literate).map_err(|e| UnlitError::io(&paths.literate, e))?;
    match mode {
        WriteMode::Atomic => write_atomic(source, paths, prefixes),
        WriteMode::InPlace => write_in_place(source, paths, prefixes),
    }
}

fn write_atomic(source: File, paths: &ModulePaths, prefixes: &PrefixTable) -> Result<usize> {
    let mut definition = BufWriter::new(temp_sibling(&paths.definition)?);
    let mut implementation = BufWriter::new(temp_sibling(&paths.implementation)?);

    let lines = unliterate_to(
        BufReader::new(source),
        prefixes,
        &mut definition,
        &mut implementation,
    )
    .map_err(|e| attribute(e, paths))?;

    // Dropping an unpersisted temp file deletes it, so early returns clean up.
    let definition = definition
        .into_inner()
        .map_err(|e| UnlitError::io(&paths.definition, e.into_error()))?;
    let implementation = implementation
        .into_inner()
        .map_err(|e| UnlitError::io(&paths.implementation, e.into_error()))?;

    definition
        .persist(&paths.definition)
        .map_err(|e| UnlitError::io(&paths.definition, e.error))?;
    if let Err(e) = implementation.persist(&paths.implementation) {
        // A fresh definition next to an old implementation would look up to date
        remove_partial(&paths.definition);
        return Err(UnlitError::io(&paths.implementation, e.error));
    }

    Ok(lines)
}

fn write_in_place(source: File, paths: &ModulePaths, prefixes: &PrefixTable) -> Result<usize> {
    let result = stream_in_place(source, paths, prefixes);
    if result.is_err() {
        remove_partial(&paths.definition);
        remove_partial(&paths.implementation);
    }
    result
}

fn remove_partial(path: &Path) {
    if let Err(e) = fs::remove_file(path) {
        tracing::debug!("Could not remove partial output {}: {}", path.display(), e);
    }
}

fn stream_in_place(source: File, paths: &ModulePaths, prefixes: &PrefixTable) -> Result<usize> {
    let mut definition = BufWriter::new(
        File::create(&paths.definition).map_err(|e| UnlitError::io(&paths.definition, e))?,
    );
    let mut implementation = BufWriter::new(
        File::create(&paths.implementation).map_err(|e| UnlitError::io(&paths.implementation, e))?,
    );
    unliterate_to(
        BufReader::new(source),
        prefixes,
        &mut definition,
        &mut implementation,
    )
    .map_err(|e| attribute(e, paths))
}

fn temp_sibling(target: &Path) -> Result<NamedTempFile> {
    let dir = match target.parent() {
        Some(parent) if !parent.as_os_str().is_empty() => parent,
        _ => Path::new("."),
    };
    let prefix = target
        .file_name()
        .map(|name| format!(".{}.", name.to_string_lossy()))
        .unwrap_or_else(|| ".unlit.".to_string());

    let mut builder = tempfile::Builder::new();
    builder.prefix(&prefix).suffix(".tmp");
    // Same mode as a freshly created file, subject to the umask
    #[cfg(unix)]
    {
        use std::os::unix::fs::PermissionsExt;
        builder.permissions(fs::Permissions::from_mode(0o666));
    }
    builder
        .tempfile_in(dir)
        .map_err(|e| UnlitError::io(target, e))
}

fn attribute(error: StreamError, paths: &ModulePaths) -> UnlitError {
    match error {
        StreamError::Read(e) => UnlitError::io(&paths.literate, e),
        StreamError::Definition(e) => UnlitError::io(&paths.definition, e),
        StreamError::Implementation(e) => UnlitError::io(&paths.implementation, e),
    }
}
