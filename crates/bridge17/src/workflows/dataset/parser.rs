use serde::de::DeserializeOwned;
use serde::{Deserialize, Deserializer};
use serde_json::Value;
use std::io::Read;

use super::{DatasetError, DatasetFormat, RecordKind};
use crate::workflows::partnership::{CsrOpportunity, NgoId, NgoRecord, SupplierRecord};

/// A permissive row shape shared by the JSON and CSV readers.
pub(crate) trait DatasetRow: DeserializeOwned {
    /// Text fields that JSON exports sometimes write as bare numbers.
    const TEXT_FIELDS: &'static [&'static str] = &[];
}

pub(crate) fn parse_rows<T, R>(reader: R, format: DatasetFormat) -> Result<Vec<T>, DatasetError>
where
    T: DatasetRow,
    R: Read,
{
    match format {
        DatasetFormat::Json => {
            let values: Vec<Value> = serde_json::from_reader(reader)?;
            values
                .into_iter()
                .map(|mut value| {
                    stringify_numbers(&mut value, T::TEXT_FIELDS);
                    serde_json::from_value(value).map_err(DatasetError::from)
                })
                .collect()
        }
        DatasetFormat::Csv => {
            let mut csv_reader = csv::ReaderBuilder::new()
                .trim(csv::Trim::All)
                .from_reader(reader);
            let mut rows = Vec::new();
            for row in csv_reader.deserialize::<T>() {
                rows.push(row?);
            }
            Ok(rows)
        }
    }
}

/// Every field optional so absence is reported by name instead of a generic serde error.
#[derive(Debug, Deserialize)]
pub(crate) struct NgoRow {
    #[serde(default, alias = "ngo_id", deserialize_with = "empty_string_as_none")]
    id: Option<String>,
    #[serde(default, deserialize_with = "empty_string_as_none")]
    name: Option<String>,
    #[serde(default, deserialize_with = "empty_string_as_none")]
    state: Option<String>,
    #[serde(
        default,
        alias = "sdg_goal",
        alias = "sector",
        deserialize_with = "empty_string_as_none"
    )]
    category: Option<String>,
    #[serde(default)]
    trust_score: Option<f64>,
    #[serde(default)]
    certified: Option<bool>,
    #[serde(default)]
    trustee_contact: Option<String>,
    #[serde(default)]
    about: Option<String>,
}

#[derive(Debug, Deserialize)]
pub(crate) struct CsrRow {
    #[serde(default, deserialize_with = "empty_string_as_none")]
    state: Option<String>,
    #[serde(
        default,
        alias = "sdg_goal",
        alias = "sector",
        deserialize_with = "empty_string_as_none"
    )]
    category: Option<String>,
    #[serde(default)]
    csr_amount: Option<u64>,
}

#[derive(Debug, Deserialize)]
pub(crate) struct SupplierRow {
    #[serde(default, deserialize_with = "empty_string_as_none")]
    name: Option<String>,
    #[serde(default, deserialize_with = "empty_string_as_none")]
    state: Option<String>,
    #[serde(
        default,
        alias = "sdg_goal",
        alias = "sector",
        deserialize_with = "empty_string_as_none"
    )]
    category: Option<String>,
    #[serde(default)]
    reliability: Option<f64>,
}

impl DatasetRow for NgoRow {
    const TEXT_FIELDS: &'static [&'static str] = &["id", "ngo_id"];
}

impl DatasetRow for CsrRow {}

impl DatasetRow for SupplierRow {}

fn required<T>(
    value: Option<T>,
    kind: RecordKind,
    index: usize,
    field: &'static str,
) -> Result<T, DatasetError> {
    value.ok_or(DatasetError::MissingField { kind, index, field })
}

fn finite(
    value: Option<f64>,
    kind: RecordKind,
    index: usize,
    field: &'static str,
) -> Result<f64, DatasetError> {
    let value = required(value, kind, index, field)?;
    if value.is_finite() {
        Ok(value)
    } else {
        Err(DatasetError::NonFiniteField {
            kind,
            index,
            field,
            value,
        })
    }
}

impl NgoRow {
    pub(crate) fn validate(self, index: usize) -> Result<NgoRecord, DatasetError> {
        let kind = RecordKind::Ngo;
        Ok(NgoRecord {
            id: NgoId(required(self.id, kind, index, "id")?),
            name: required(self.name, kind, index, "name")?,
            state: required(self.state, kind, index, "state")?,
            category: required(self.category, kind, index, "category")?,
            trust_score: finite(self.trust_score, kind, index, "trust_score")?,
            certified: self.certified.unwrap_or(false),
            trustee_contact: self.trustee_contact.unwrap_or_default(),
            about: self.about.unwrap_or_default(),
        })
    }
}

impl CsrRow {
    pub(crate) fn validate(self, index: usize) -> Result<CsrOpportunity, DatasetError> {
        let kind = RecordKind::Csr;
        Ok(CsrOpportunity {
            state: required(self.state, kind, index, "state")?,
            category: required(self.category, kind, index, "category")?,
            csr_amount: required(self.csr_amount, kind, index, "csr_amount")?,
        })
    }
}

impl SupplierRow {
    pub(crate) fn validate(self, index: usize) -> Result<SupplierRecord, DatasetError> {
        let kind = RecordKind::Supplier;
        Ok(SupplierRecord {
            name: required(self.name, kind, index, "name")?,
            state: required(self.state, kind, index, "state")?,
            category: required(self.category, kind, index, "category")?,
            reliability: finite(self.reliability, kind, index, "reliability")?,
        })
    }
}

fn empty_string_as_none<'de, D>(deserializer: D) -> Result<Option<String>, D::Error>
where
    D: Deserializer<'de>,
{
    let opt = Option::<String>::deserialize(deserializer)?;
    Ok(opt.filter(|value| !value.trim().is_empty()))
}

/// Registry ids arrive as strings in some JSON exports and as bare numbers in others. CSV cells
/// are already text and keep leading zeros.
fn stringify_numbers(row: &mut Value, fields: &[&str]) {
    let Value::Object(map) = row else {
        return;
    };
    for field in fields {
        if let Some(Value::Number(number)) = map.get(*field) {
            let text = number.to_string();
            map.insert((*field).to_string(), Value::String(text));
        }
    }
}
