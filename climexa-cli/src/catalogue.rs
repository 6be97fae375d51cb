//! Location catalogue loading and report output shared by every command.

use std::io::{BufReader, Write};

use camino::Utf8Path;
use climexa_core::{Location, RandomSource, RngSource};
use climexa_fs::open_utf8_file;
use serde::Serialize;

use crate::CliError;

/// Fail unless `path` names an existing regular file.
pub(crate) fn require_existing(path: &Utf8Path, field: &'static str) -> Result<(), CliError> {
    match climexa_fs::file_is_file(path) {
        Ok(true) => Ok(()),
        Ok(false) => Err(CliError::SourcePathNotFile {
            field,
            path: path.to_path_buf(),
        }),
        Err(source) if source.kind() == std::io::ErrorKind::NotFound => {
            Err(CliError::MissingSourceFile {
                field,
                path: path.to_path_buf(),
            })
        }
        Err(source) => Err(CliError::InspectSourcePath {
            field,
            path: path.to_path_buf(),
            source,
        }),
    }
}

/// Load a JSON array of [`Location`] values from disk.
pub(crate) fn load_locations(path: &Utf8Path) -> Result<Vec<Location>, CliError> {
    let file = open_utf8_file(path).map_err(|source| CliError::OpenLocations {
        path: path.to_path_buf(),
        source,
    })?;
    let locations: Vec<Location> = serde_json::from_reader(BufReader::new(file)).map_err(
        |source| CliError::ParseLocations {
            path: path.to_path_buf(),
            source,
        },
    )?;
    log::debug!("loaded {} locations from {path}", locations.len());
    Ok(locations)
}

/// Find the location with `id`.
pub(crate) fn find_location<'a>(
    locations: &'a [Location],
    id: &str,
) -> Result<&'a Location, CliError> {
    locations
        .iter()
        .find(|location| location.id == id)
        .ok_or_else(|| CliError::UnknownLocation { id: id.to_owned() })
}

/// Seeded source when `seed` is set, thread-local otherwise.
pub(crate) fn random_source(seed: Option<u64>) -> Box<dyn RandomSource> {
    match seed {
        Some(value) => Box::new(RngSource::seeded(value)),
        None => Box::new(RngSource::thread()),
    }
}

/// Pretty-print `value` as JSON to `output`, or to `writer` when unset.
pub(crate) fn emit<T: Serialize + ?Sized>(
    writer: &mut dyn Write,
    output: Option<&Utf8Path>,
    value: &T,
) -> Result<(), CliError> {
    let mut payload = serde_json::to_string_pretty(value).map_err(CliError::SerializeOutput)?;
    payload.push('\n');
    if let Some(path) = output {
        climexa_fs::write_file(path, payload).map_err(|source| CliError::WriteOutputFile {
            path: path.to_path_buf(),
            source,
        })?;
        log::info!("wrote report to {path}");
        return Ok(());
    }
    writer
        .write_all(payload.as_bytes())
        .map_err(CliError::WriteOutput)
}
