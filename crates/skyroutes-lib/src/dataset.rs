//! Flat-file dataset loading.
//!
//! Airports and routes are stored as two CSV files inside a data directory.
//! The planner itself never touches the filesystem; callers load the records
//! here and hand them to [`build_graph`](crate::build_graph).

use std::io::Read;
use std::path::{Path, PathBuf};

use directories::ProjectDirs;
use serde::de::DeserializeOwned;
use tracing::{debug, info};

use crate::airport::{Airport, Route};
use crate::error::{Error, Result};

/// Default filename for the airport records.
pub const AIRPORTS_FILENAME: &str = "airports.csv";
/// Default filename for the route records.
pub const ROUTES_FILENAME: &str = "routes.csv";

/// Paths to the two dataset files.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DatasetPaths {
    pub airports: PathBuf,
    pub routes: PathBuf,
}

impl DatasetPaths {
    /// Paths for the default filenames inside `dir`.
    pub fn in_dir(dir: &Path) -> Self {
        Self {
            airports: dir.join(AIRPORTS_FILENAME),
            routes: dir.join(ROUTES_FILENAME),
        }
    }
}

/// Airport and route records as loaded from disk.
#[derive(Debug, Clone, Default)]
pub struct Dataset {
    pub airports: Vec<Airport>,
    pub routes: Vec<Route>,
}

/// Resolve the default data directory using platform-specific project directories.
pub fn default_data_dir() -> Result<PathBuf> {
    let dirs = ProjectDirs::from("com", "skyroutes", "skyroutes")
        .ok_or(Error::ProjectDirsUnavailable)?;
    Ok(dirs.data_dir().to_path_buf())
}

/// Resolve the data directory, preferring an explicit override.
pub fn resolve_data_dir(override_dir: Option<&Path>) -> Result<PathBuf> {
    match override_dir {
        Some(dir) => Ok(dir.to_path_buf()),
        None => default_data_dir(),
    }
}

/// Load both record collections.
pub fn load_dataset(paths: &DatasetPaths) -> Result<Dataset> {
    let airports = load_airports(&paths.airports)?;
    let routes = load_routes(&paths.routes)?;
    info!(airports = airports.len(), routes = routes.len(), "loaded dataset");
    Ok(Dataset { airports, routes })
}

/// Load airport records from a CSV file with an `id,name,city,country,lat,lng` header.
pub fn load_airports(path: &Path) -> Result<Vec<Airport>> {
    read_records(open(path)?)
}

/// Load route records from a CSV file with an `id_origin,id_destination,distance` header.
pub fn load_routes(path: &Path) -> Result<Vec<Route>> {
    read_records(open(path)?)
}

/// Parse airport records from any CSV source.
pub fn airports_from_reader<R: Read>(reader: R) -> Result<Vec<Airport>> {
    read_records(reader)
}

/// Parse route records from any CSV source.
pub fn routes_from_reader<R: Read>(reader: R) -> Result<Vec<Route>> {
    read_records(reader)
}

fn open(path: &Path) -> Result<std::fs::File> {
    if !path.exists() {
        return Err(Error::DatasetNotFound {
            path: path.to_path_buf(),
        });
    }
    debug!("reading {}", path.display());
    Ok(std::fs::File::open(path)?)
}

fn read_records<T: DeserializeOwned, R: Read>(reader: R) -> Result<Vec<T>> {
    let mut csv = csv::ReaderBuilder::new()
        .trim(csv::Trim::All)
        .from_reader(reader);
    let mut records = Vec::new();
    for record in csv.deserialize() {
        records.push(record?);
    }
    Ok(records)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn dataset_paths_use_default_filenames() {
        let paths = DatasetPaths::in_dir(Path::new("/data"));
        assert_eq!(paths.airports, Path::new("/data").join("airports.csv"));
        assert_eq!(paths.routes, Path::new("/data").join("routes.csv"));
    }

    #[test]
    fn override_wins_over_default_dir() {
        let dir = resolve_data_dir(Some(Path::new("/tmp/skyroutes"))).unwrap();
        assert_eq!(dir, PathBuf::from("/tmp/skyroutes"));
    }

    #[test]
    fn parses_airports_with_padded_fields() {
        let csv = "id, name, city, country, lat, lng\n\
                   MAD, Adolfo Suárez Madrid-Barajas, Madrid, Spain, 40.4719, -3.5626\n";
        let airports = airports_from_reader(csv.as_bytes()).unwrap();
        assert_eq!(airports.len(), 1);
        assert_eq!(airports[0].id, "MAD");
        assert_eq!(airports[0].city, "Madrid");
        assert!((airports[0].longitude + 3.5626).abs() < 1e-9);
    }

    #[test]
    fn malformed_distance_is_a_csv_error() {
        let csv = "id_origin,id_destination,distance\nMAD,BCN,far\n";
        let err = routes_from_reader(csv.as_bytes()).unwrap_err();
        assert!(matches!(err, Error::Csv(_)));
    }
}
