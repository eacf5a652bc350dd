//! CSV loading for trial-level reaction-time tables.
//!
//! Supports the long "one row per trial" layout used by published saccadic
//! latency data sets: a header row naming at least the columns
//! `participant`, `condition` and `time` (milliseconds), in any order, with
//! any further columns ignored.
//!
//! # Example file content
//! ```csv
//! participant,condition,time
//! AS,p95,182
//! AS,p95,201
//! AS,p05,244
//! ```
//!
//! Rows are grouped into datasets named `participant_condition`, times are
//! converted to seconds, and each group becomes a validated [`Dataset`].
use std::collections::BTreeMap;
use std::fs::File;
use std::io::{BufRead, BufReader};
use std::path::Path;

use crate::data::{
    dataset::Dataset,
    errors::{DataError, DataResult},
};

/// Header name of the participant column.
pub const PARTICIPANT_COLUMN: &str = "participant";
/// Header name of the condition column.
pub const CONDITION_COLUMN: &str = "condition";
/// Header name of the reaction-time column (milliseconds).
pub const TIME_COLUMN: &str = "time";

const MS_PER_S: f64 = 1000.0;
const UTF8_BOM: char = '\u{feff}';

/// Load a trial table from `path`.
///
/// # Returns
/// Datasets keyed (and ordered) by `participant_condition`.
///
/// # Errors
/// - [`DataError::Io`] if the file cannot be opened or read.
/// - Any error of [`parse_trials`].
pub fn load_trials_csv(path: &Path) -> DataResult<BTreeMap<String, Dataset>> {
    let source = path.display().to_string();
    let file = File::open(path)
        .map_err(|err| DataError::Io { path: source.clone(), reason: err.to_string() })?;
    let datasets = parse_trials(BufReader::new(file), &source)?;
    tracing::debug!(path = %source, n_datasets = datasets.len(), "loaded trial table");
    Ok(datasets)
}

/// Parse a trial table from any buffered reader.
///
/// `source` is only used to label I/O errors.
///
/// # Errors
/// - [`DataError::Io`] if reading a line fails.
/// - [`DataError::MissingColumn`] if the header lacks a required column (or
///   the input has no header at all).
/// - [`DataError::Parse`] if a row is too short or its time is not a number.
/// - [`DataError::InvalidReactionTime`] if a time is not finite and `> 0`.
pub fn parse_trials<R: BufRead>(reader: R, source: &str) -> DataResult<BTreeMap<String, Dataset>> {
    let mut lines = reader.lines().enumerate();

    // First non-empty line is the header.
    let mut columns: Option<TrialColumns> = None;
    for (_, line_result) in lines.by_ref() {
        let line = read_line(line_result, source)?;
        let line = line.trim_start_matches(UTF8_BOM).trim();
        if line.is_empty() {
            continue;
        }
        let header: Vec<&str> = line.split(',').map(clean_field).collect();
        columns = Some(TrialColumns::from_header(&header)?);
        break;
    }
    let cols = columns.ok_or(DataError::MissingColumn { column: PARTICIPANT_COLUMN })?;

    let mut groups: BTreeMap<String, Vec<f64>> = BTreeMap::new();
    for (line_num, line_result) in lines {
        let line = read_line(line_result, source)?;
        let line = line.trim();

        // Skip empty lines
        if line.is_empty() {
            continue;
        }

        let fields: Vec<&str> = line.split(',').map(clean_field).collect();
        if fields.len() <= cols.max_index() {
            return Err(DataError::Parse {
                line: line_num + 1,
                reason: format!(
                    "expected at least {} columns, got {}",
                    cols.max_index() + 1,
                    fields.len()
                ),
            });
        }

        let time_str = fields[cols.time];
        let time_ms: f64 = time_str.parse().map_err(|_| DataError::Parse {
            line: line_num + 1,
            reason: format!("time '{time_str}' is not a number"),
        })?;

        let name = format!("{}_{}", fields[cols.participant], fields[cols.condition]);
        groups.entry(name).or_default().push(time_ms / MS_PER_S);
    }

    let mut datasets = BTreeMap::new();
    for (name, rt_s) in groups {
        tracing::debug!(dataset = %name, n_obs = rt_s.len(), "grouped trials");
        let dataset = Dataset::new(name.clone(), rt_s.into())?;
        datasets.insert(name, dataset);
    }
    Ok(datasets)
}

//
// ---------- Private helpers ----------
//

/// Positions of the required columns within a row.
struct TrialColumns {
    participant: usize,
    condition: usize,
    time: usize,
}

impl TrialColumns {
    fn from_header(header: &[&str]) -> DataResult<TrialColumns> {
        let find = |column: &'static str| {
            header
                .iter()
                .position(|h| *h == column)
                .ok_or(DataError::MissingColumn { column })
        };
        Ok(TrialColumns {
            participant: find(PARTICIPANT_COLUMN)?,
            condition: find(CONDITION_COLUMN)?,
            time: find(TIME_COLUMN)?,
        })
    }

    fn max_index(&self) -> usize {
        self.participant.max(self.condition).max(self.time)
    }
}

fn read_line(line_result: std::io::Result<String>, source: &str) -> DataResult<String> {
    line_result.map_err(|err| DataError::Io { path: source.to_string(), reason: err.to_string() })
}

/// Trim whitespace and one pair of surrounding double quotes.
fn clean_field(field: &str) -> &str {
    let field = field.trim();
    field
        .strip_prefix('"')
        .and_then(|f| f.strip_suffix('"'))
        .unwrap_or(field)
}
