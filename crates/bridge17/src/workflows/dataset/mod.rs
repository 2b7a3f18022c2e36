//! Loads NGO, CSR and supplier records from JSON or CSV exports and validates them once, so the
//! scorers only ever see well-formed records.

mod parser;

use serde::Serialize;
use std::fmt;
use std::fs::File;
use std::io::Read;
use std::path::{Path, PathBuf};
use tracing::info;

use crate::workflows::partnership::{CsrOpportunity, NgoId, NgoRecord, SupplierRecord};
use parser::{parse_rows, CsrRow, NgoRow, SupplierRow};

pub const NGO_FILE_STEM: &str = "ngos";
pub const CSR_FILE_STEM: &str = "csr";
pub const SUPPLIER_FILE_STEM: &str = "suppliers";

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum RecordKind {
    Ngo,
    Csr,
    Supplier,
}

impl fmt::Display for RecordKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let label = match self {
            RecordKind::Ngo => "NGO",
            RecordKind::Csr => "CSR opportunity",
            RecordKind::Supplier => "supplier",
        };
        f.write_str(label)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DatasetFormat {
    Json,
    Csv,
}

impl DatasetFormat {
    pub const fn ordered() -> [Self; 2] {
        [Self::Json, Self::Csv]
    }

    pub const fn extension(self) -> &'static str {
        match self {
            Self::Json => "json",
            Self::Csv => "csv",
        }
    }

    pub fn from_path(path: &Path) -> Option<Self> {
        let extension = path.extension()?.to_str()?.to_ascii_lowercase();
        Self::ordered()
            .into_iter()
            .find(|format| format.extension() == extension)
    }
}

#[derive(Debug, thiserror::Error)]
pub enum DatasetError {
    #[error("failed to read dataset: {0}")]
    Io(#[from] std::io::Error),
    #[error("invalid JSON dataset: {0}")]
    Json(#[from] serde_json::Error),
    #[error("invalid CSV dataset: {0}")]
    Csv(#[from] csv::Error),
    #[error("{kind} record #{index} is missing required field `{field}`")]
    MissingField {
        kind: RecordKind,
        index: usize,
        field: &'static str,
    },
    #[error("{kind} record #{index} has non-finite `{field}` ({value})")]
    NonFiniteField {
        kind: RecordKind,
        index: usize,
        field: &'static str,
        value: f64,
    },
    #[error("no {stem}.json or {stem}.csv found in {}", .dir.display())]
    MissingFile { dir: PathBuf, stem: &'static str },
    #[error("unsupported dataset file extension: {}", .path.display())]
    UnsupportedFormat { path: PathBuf },
}

/// Fully materialized record collections for one ranking batch.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct PartnershipDataset {
    pub ngos: Vec<NgoRecord>,
    pub csr: Vec<CsrOpportunity>,
    pub suppliers: Vec<SupplierRecord>,
}

impl PartnershipDataset {
    pub fn ngo(&self, id: &NgoId) -> Option<&NgoRecord> {
        self.ngos.iter().find(|ngo| &ngo.id == id)
    }
}

pub struct DatasetLoader;

impl DatasetLoader {
    /// Loads `ngos`, `csr` and `suppliers` from `dir`, preferring `.json` over `.csv`.
    pub fn from_dir<P: AsRef<Path>>(dir: P) -> Result<PartnershipDataset, DatasetError> {
        let dir = dir.as_ref();

        let dataset = PartnershipDataset {
            ngos: Self::ngos_from_path(locate(dir, NGO_FILE_STEM)?)?,
            csr: Self::csr_from_path(locate(dir, CSR_FILE_STEM)?)?,
            suppliers: Self::suppliers_from_path(locate(dir, SUPPLIER_FILE_STEM)?)?,
        };

        info!(
            dir = %dir.display(),
            ngos = dataset.ngos.len(),
            csr = dataset.csr.len(),
            suppliers = dataset.suppliers.len(),
            "loaded partnership dataset"
        );

        Ok(dataset)
    }

    pub fn ngos_from_path<P: AsRef<Path>>(path: P) -> Result<Vec<NgoRecord>, DatasetError> {
        let (file, format) = open(path.as_ref())?;
        Self::ngos_from_reader(file, format)
    }

    pub fn csr_from_path<P: AsRef<Path>>(path: P) -> Result<Vec<CsrOpportunity>, DatasetError> {
        let (file, format) = open(path.as_ref())?;
        Self::csr_from_reader(file, format)
    }

    pub fn suppliers_from_path<P: AsRef<Path>>(
        path: P,
    ) -> Result<Vec<SupplierRecord>, DatasetError> {
        let (file, format) = open(path.as_ref())?;
        Self::suppliers_from_reader(file, format)
    }

    pub fn ngos_from_reader<R: Read>(
        reader: R,
        format: DatasetFormat,
    ) -> Result<Vec<NgoRecord>, DatasetError> {
        parse_rows::<NgoRow, _>(reader, format)?
            .into_iter()
            .enumerate()
            .map(|(index, row)| row.validate(index))
            .collect()
    }

    pub fn csr_from_reader<R: Read>(
        reader: R,
        format: DatasetFormat,
    ) -> Result<Vec<CsrOpportunity>, DatasetError> {
        parse_rows::<CsrRow, _>(reader, format)?
            .into_iter()
            .enumerate()
            .map(|(index, row)| row.validate(index))
            .collect()
    }

    pub fn suppliers_from_reader<R: Read>(
        reader: R,
        format: DatasetFormat,
    ) -> Result<Vec<SupplierRecord>, DatasetError> {
        parse_rows::<SupplierRow, _>(reader, format)?
            .into_iter()
            .enumerate()
            .map(|(index, row)| row.validate(index))
            .collect()
    }
}

fn locate(dir: &Path, stem: &'static str) -> Result<PathBuf, DatasetError> {
    DatasetFormat::ordered()
        .into_iter()
        .map(|format| dir.join(format!("{stem}.{}", format.extension())))
        .find(|candidate| candidate.is_file())
        .ok_or_else(|| DatasetError::MissingFile {
            dir: dir.to_path_buf(),
            stem,
        })
}

fn open(path: &Path) -> Result<(File, DatasetFormat), DatasetError> {
    let format = DatasetFormat::from_path(path).ok_or_else(|| DatasetError::UnsupportedFormat {
        path: path.to_path_buf(),
    })?;
    Ok((File::open(path)?, format))
}
