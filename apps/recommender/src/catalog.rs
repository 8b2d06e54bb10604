//! Career catalog — the fixed set of career categories matched against.
//!
//! Loaded once at startup from a CSV file with `category` and `careers` columns, where
//! `careers` lists role titles separated by `;`. Any malformed row rejects the whole file.

use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};
use thiserror::Error;
use tracing::info;

/// Separator between role titles inside the `careers` column.
pub const CAREER_SEPARATOR: char = ';';

#[derive(Debug, Error)]
pub enum CatalogError {
    #[error("failed to read career catalog {}: {source}", path.display())]
    Read {
        path: PathBuf,
        #[source]
        source: csv::Error,
    },

    #[error("career catalog {} is missing required column '{column}'", path.display())]
    MissingColumn { path: PathBuf, column: &'static str },

    #[error("career catalog {}, row {row}: {message}", path.display())]
    InvalidRow {
        path: PathBuf,
        row: usize,
        message: String,
    },

    #[error("career catalog {} has no entries", path.display())]
    Empty { path: PathBuf },
}

/// One career category with its representative role titles.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CareerPath {
    pub category: String,
    pub careers: Vec<String>,
}

impl CareerPath {
    /// Text embedded for this entry: role titles joined with a single space.
    pub fn embedding_text(&self) -> String {
        self.careers.join(" ")
    }
}

#[derive(Debug, Deserialize)]
struct CatalogRecord {
    category: String,
    careers: String,
}

/// Read-only list of career paths, in file order.
#[derive(Debug, Clone)]
pub struct Catalog {
    entries: Vec<CareerPath>,
}

impl Catalog {
    /// Builds a catalog from already-validated entries.
    pub fn new(entries: Vec<CareerPath>) -> Self {
        Self { entries }
    }

    pub fn load(path: &Path) -> Result<Self, CatalogError> {
        let reader = csv::ReaderBuilder::new()
            .trim(csv::Trim::All)
            .from_path(path)
            .map_err(|source| CatalogError::Read {
                path: path.to_path_buf(),
                source,
            })?;

        let catalog = Self::from_reader(reader, path)?;
        info!(
            "Loaded {} career paths from {}",
            catalog.len(),
            path.display()
        );
        Ok(catalog)
    }

    fn from_reader<R: std::io::Read>(
        mut reader: csv::Reader<R>,
        path: &Path,
    ) -> Result<Self, CatalogError> {
        let read_err = |source| CatalogError::Read {
            path: path.to_path_buf(),
            source,
        };

        let headers = reader.headers().map_err(read_err)?.clone();
        for column in ["category", "careers"] {
            if !headers.iter().any(|h| h == column) {
                return Err(CatalogError::MissingColumn {
                    path: path.to_path_buf(),
                    column,
                });
            }
        }

        let mut entries = Vec::new();
        for record in reader.records() {
            let record = record.map_err(read_err)?;
            // Line the record starts on; quoted fields may span several.
            let row = record
                .position()
                .map(|p| p.line() as usize)
                .unwrap_or_default();
            let record: CatalogRecord = record.deserialize(Some(&headers)).map_err(read_err)?;
            entries.push(parse_record(record).map_err(|message| CatalogError::InvalidRow {
                path: path.to_path_buf(),
                row,
                message,
            })?);
        }

        if entries.is_empty() {
            return Err(CatalogError::Empty {
                path: path.to_path_buf(),
            });
        }

        Ok(Self::new(entries))
    }

    pub fn entries(&self) -> &[CareerPath] {
        &self.entries
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

fn parse_record(record: CatalogRecord) -> Result<CareerPath, String> {
    if record.category.is_empty() {
        return Err("category is blank".to_string());
    }

    let careers: Vec<String> = record
        .careers
        .split(CAREER_SEPARATOR)
        .map(str::trim)
        .filter(|c| !c.is_empty())
        .map(str::to_string)
        .collect();

    if careers.is_empty() {
        return Err(format!("category '{}' lists no careers", record.category));
    }

    Ok(CareerPath {
        category: record.category,
        careers,
    })
}
