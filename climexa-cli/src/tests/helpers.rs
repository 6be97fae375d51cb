//! Test helpers for writing location catalogues to a scratch directory.

use camino::{Utf8Path, Utf8PathBuf};
use climexa_core::{Location, Terrain};
use tempfile::TempDir;

/// Scratch directory holding a `locations.json` catalogue.
#[derive(Debug)]
pub(super) struct Catalogue {
    _dir: TempDir,
    root: Utf8PathBuf,
    path: Utf8PathBuf,
}

impl Catalogue {
    /// Write the standard Andean catalogue.
    pub(super) fn andean() -> Self {
        Self::with_locations(&andean_locations())
    }

    /// Write `locations` as the catalogue.
    pub(super) fn with_locations(locations: &[Location]) -> Self {
        let payload = serde_json::to_vec_pretty(locations).expect("serialise locations");
        Self::with_payload(&payload)
    }

    /// Write raw bytes as the catalogue.
    pub(super) fn with_payload(payload: &[u8]) -> Self {
        let dir = TempDir::new().expect("tempdir");
        let root = Utf8PathBuf::from_path_buf(dir.path().to_path_buf()).expect("utf-8 workspace");
        let path = root.join("locations.json");
        write_utf8(&path, payload);
        Self {
            _dir: dir,
            root,
            path,
        }
    }

    pub(super) fn path(&self) -> &Utf8Path {
        &self.path
    }

    pub(super) fn root(&self) -> &Utf8Path {
        &self.root
    }
}

pub(super) fn write_utf8(path: &Utf8Path, contents: &[u8]) {
    std::fs::write(path.as_std_path(), contents).expect("write test file");
}

pub(super) fn andean_locations() -> Vec<Location> {
    vec![
        Location::new("salar", "Salar de Tara", Terrain::Desert),
        Location::new("mirador", "Mirador del Valle", Terrain::Viewpoint).with_elevation(2600.0),
        Location::new("chajnantor", "Llano de Chajnantor", Terrain::Mountain)
            .with_elevation(5000.0),
        Location::new("quebrada", "Quebrada de Jere", Terrain::Canyon).with_elevation(2500.0),
        Location::new("lagoon", "Laguna Verde", Terrain::from("lake")).with_elevation(1800.0),
    ]
}
