//! Delimited screening results.
//!
//! Each file has a header row followed by one row per compound with three
//! columns: an identifier, the score, and an integer hit flag (`1` marks a
//! known active, anything else a decoy).

use std::fs::File;
use std::io::Read;
use std::path::Path;

use ::csv::{ReaderBuilder, StringRecord, Trim};
use enrichvs_core::{split_scored, EnrichError, Labeled, Result, Scored};
use enrichvs_stats::Evaluator;

/// One ranked compound.
#[derive(Debug, Clone, PartialEq)]
pub struct ScreeningRecord {
    pub id: String,
    pub score: f64,
    pub hit: bool,
}

impl Scored for ScreeningRecord {
    fn score(&self) -> f64 {
        self.score
    }
}

impl Labeled for ScreeningRecord {
    fn is_hit(&self) -> bool {
        self.hit
    }
}

/// Parallel identifier, score and label columns of a screening run.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct ScreeningData {
    pub ids: Vec<String>,
    pub scores: Vec<f64>,
    pub labels: Vec<bool>,
}

impl ScreeningData {
    /// Split records into columns, keeping file order.
    pub fn from_records(records: &[ScreeningRecord]) -> Self {
        let (scores, labels) = split_scored(records);
        Self {
            ids: records.iter().map(|r| r.id.clone()).collect(),
            scores,
            labels,
        }
    }

    /// Number of rows.
    pub fn len(&self) -> usize {
        self.scores.len()
    }

    /// Whether the file held no data rows.
    pub fn is_empty(&self) -> bool {
        self.scores.is_empty()
    }

    /// Number of rows flagged as hits.
    pub fn n_hits(&self) -> usize {
        self.labels.iter().filter(|&&l| l).count()
    }

    /// Hand the score and label columns to an [`Evaluator`].
    pub fn into_evaluator(self) -> Evaluator {
        Evaluator::new(self.scores, self.labels)
    }
}

/// Read screening rows from any reader, splitting fields on `delimiter`.
pub fn read_screening<R: Read>(reader: R, delimiter: u8) -> Result<ScreeningData> {
    let mut reader = ReaderBuilder::new()
        .has_headers(true)
        .delimiter(delimiter)
        .flexible(true)
        .trim(Trim::All)
        .from_reader(reader);

    let mut records = Vec::new();
    for result in reader.records() {
        let record = result.map_err(|e| EnrichError::Parse(e.to_string()))?;
        records.push(parse_record(&record)?);
    }

    let data = ScreeningData::from_records(&records);
    tracing::debug!(rows = data.len(), hits = data.n_hits(), "read screening results");
    Ok(data)
}

/// Load a comma-separated screening file.
pub fn load_screening(path: impl AsRef<Path>) -> Result<ScreeningData> {
    load_screening_delimited(path, b',')
}

/// Load a screening file with an arbitrary single-byte delimiter (e.g.
/// `b'\t'` for TSV).
pub fn load_screening_delimited(path: impl AsRef<Path>, delimiter: u8) -> Result<ScreeningData> {
    let path = path.as_ref();
    let file = File::open(path).map_err(|e| {
        EnrichError::Io(std::io::Error::new(
            e.kind(),
            format!("{}: {}", path.display(), e),
        ))
    })?;
    read_screening(file, delimiter)
}

fn parse_record(record: &StringRecord) -> Result<ScreeningRecord> {
    let line = record.position().map(|p| p.line()).unwrap_or(0);
    if record.len() < 3 {
        return Err(EnrichError::Parse(format!(
            "line {}: expected 3 fields (id, score, hit flag), found {}",
            line,
            record.len()
        )));
    }

    let score: f64 = record[1].parse().map_err(|_| {
        EnrichError::Parse(format!("line {}: invalid score '{}'", line, &record[1]))
    })?;
    let flag: i64 = record[2].parse().map_err(|_| {
        EnrichError::Parse(format!("line {}: invalid hit flag '{}'", line, &record[2]))
    })?;

    Ok(ScreeningRecord {
        id: record[0].to_string(),
        score,
        hit: flag == 1,
    })
}
