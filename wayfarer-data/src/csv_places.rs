//! Place loader for headered CSV exports.
#![forbid(unsafe_code)]

use camino::{Utf8Path, Utf8PathBuf};
use log::{debug, warn};
use wayfarer_core::{Place, PlaceSource, SourceError};
use wayfarer_fs::open_utf8_file;

use crate::record::ColumnMap;

/// Reads places from a CSV file with a header row.
///
/// Recognised columns are `place_id`, `name`, `category`, `types`,
/// `latitude`, `longitude`, `rating`, `user_ratings_total`, `price_level`
/// and `formatted_address`, matched case-insensitively; other columns are
/// ignored. Rows that cannot become a valid [`Place`] are skipped with a
/// warning.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CsvPlaceSource {
    path: Utf8PathBuf,
}

impl CsvPlaceSource {
    /// Create a loader for `path`.
    pub fn new(path: impl Into<Utf8PathBuf>) -> Self {
        Self { path: path.into() }
    }

    /// Path the loader reads.
    pub fn path(&self) -> &Utf8Path {
        &self.path
    }
}

impl PlaceSource for CsvPlaceSource {
    fn load_places(&self) -> Result<Vec<Place>, SourceError> {
        let path = self.path();
        let file = open_utf8_file(path)
            .map_err(|err| SourceError::unavailable(path.as_str(), err))?;
        let mut reader = csv::ReaderBuilder::new()
            .flexible(true)
            .from_reader(file);
        let headers = reader
            .headers()
            .map_err(|err| SourceError::unavailable(path.as_str(), err))?
            .clone();
        let columns = ColumnMap::from_headers(headers.iter());
        let missing = columns.missing_required();
        if !missing.is_empty() {
            return Err(SourceError::Layout {
                source_name: path.to_string(),
                reason: format!("missing column(s): {}", missing.join(", ")),
            });
        }

        let mut places = Vec::new();
        let mut skipped = 0_usize;
        for (index, record) in reader.records().enumerate() {
            let line = index + 2;
            let record = match record {
                Ok(record) => record,
                Err(err) => {
                    warn!("{}:{line}: skipping unreadable row: {err}", path);
                    skipped += 1;
                    continue;
                }
            };
            match columns.place_from(|position| record.get(position)) {
                Ok(place) => places.push(place),
                Err(err) => {
                    warn!("{}:{line}: skipping row: {err}", path);
                    skipped += 1;
                }
            }
        }
        debug!(
            "loaded {} place(s) from {} ({skipped} skipped)",
            places.len(),
            path
        );
        Ok(places)
    }
}

#[cfg(test)]
mod tests {
    use std::io::Write;

    use rstest::{fixture, rstest};
    use tempfile::TempDir;

    use super::*;

    #[fixture]
    fn workspace() -> (TempDir, Utf8PathBuf) {
        let temp = TempDir::new().expect("temp dir");
        let root = Utf8PathBuf::from_path_buf(temp.path().to_path_buf()).expect("utf8 temp path");
        (temp, root)
    }

    fn write_csv(root: &Utf8Path, contents: &str) -> Utf8PathBuf {
        let path = root.join("places.csv");
        let mut file = std::fs::File::create(path.as_std_path()).expect("create csv");
        file.write_all(contents.as_bytes()).expect("write csv");
        path
    }

    #[rstest]
    fn malformed_rows_are_skipped(workspace: (TempDir, Utf8PathBuf)) {
        let (_temp, root) = workspace;
        let path = write_csv(
            &root,
            "place_id,name,Category,latitude,longitude,rating,user_ratings_total,url\n\
             a1,Chinatown Complex,Food and Beverage,1.2823,103.8431,4.1,9876,http://x\n\
             ,No Id,Shopping,1.3,103.8,4.0,10,\n\
             a3,Bad Rating,Shopping,1.3,103.8,9.9,10,\n\
             a4,Unrated Kiosk,Shopping,,,,,\n",
        );
        let places = CsvPlaceSource::new(path).load_places().expect("load csv");
        let ids: Vec<&str> = places.iter().map(|place| place.id.as_str()).collect();
        assert_eq!(ids, vec!["a1", "a4"]);
        let kiosk = places.get(1).expect("kiosk");
        assert!(kiosk.rating.is_none());
        assert_eq!(kiosk.rating_count, 0);
    }

    #[rstest]
    fn layout_errors_name_the_loader_path(workspace: (TempDir, Utf8PathBuf)) {
        let (_temp, root) = workspace;
        let source = CsvPlaceSource::new(write_csv(&root, "title\nx\n"));
        assert_eq!(source.path(), root.join("places.csv").as_path());
        let err = source.load_places().expect_err("bad layout");
        assert!(matches!(
            err,
            SourceError::Layout { source_name, .. } if source_name == source.path().as_str()
        ));
    }

    #[rstest]
    fn short_rows_still_load(workspace: (TempDir, Utf8PathBuf)) {
        let (_temp, root) = workspace;
        let path = write_csv(&root, "place_id,name,rating\nb1,Short Row\n");
        let places = CsvPlaceSource::new(path).load_places().expect("load csv");
        assert_eq!(places.len(), 1);
    }

    #[rstest]
    fn missing_file_is_unavailable(workspace: (TempDir, Utf8PathBuf)) {
        let (_temp, root) = workspace;
        let err = CsvPlaceSource::new(root.join("absent.csv"))
            .load_places()
            .expect_err("missing file");
        assert!(matches!(err, SourceError::Unavailable { .. }));
    }

    #[rstest]
    fn missing_required_columns_are_a_layout_error(workspace: (TempDir, Utf8PathBuf)) {
        let (_temp, root) = workspace;
        let path = write_csv(&root, "title,rating\nx,4.0\n");
        let err = CsvPlaceSource::new(path).load_places().expect_err("bad layout");
        assert!(matches!(err, SourceError::Layout { reason, .. } if reason.contains("place_id")));
    }
}
