// File: crates/looplens-demo/src/input.rs
// Summary: Load simulation results (server JSON envelope, bare JSON array, or CSV) into per-iteration records.

use std::collections::BTreeMap;
use std::io::Read;
use std::path::Path;

use anyhow::{bail, Context, Result};
use serde::Deserialize;

/// Metric name -> value for one iteration.
pub type Record = BTreeMap<String, f64>;

#[derive(Deserialize)]
#[serde(untagged)]
enum SimulationResult {
    /// `{"iterations": [...], "params": {...}}` as returned by the simulation endpoint.
    Envelope { iterations: Vec<Record> },
    Bare(Vec<Record>),
}

/// Load `path`, choosing the format from its extension.
pub fn load(path: &Path) -> Result<Vec<Record>> {
    let ext = path
        .extension()
        .map(|e| e.to_string_lossy().to_lowercase())
        .unwrap_or_default();
    match ext.as_str() {
        "json" => {
            let text = std::fs::read_to_string(path).with_context(|| format!("opening {}", path.display()))?;
            parse_json(&text)
        }
        "csv" => {
            let file = std::fs::File::open(path).with_context(|| format!("opening {}", path.display()))?;
            parse_csv(file)
        }
        _ => bail!("unsupported input format '{}': expected .json or .csv", path.display()),
    }
}

pub fn parse_json(text: &str) -> Result<Vec<Record>> {
    let result: SimulationResult = serde_json::from_str(text).context("parsing simulation result JSON")?;
    Ok(match result {
        SimulationResult::Envelope { iterations } => iterations,
        SimulationResult::Bare(records) => records,
    })
}

/// Header row names the metrics; each following row is one iteration.
pub fn parse_csv(reader: impl Read) -> Result<Vec<Record>> {
    let mut rdr = csv::ReaderBuilder::new().has_headers(true).trim(csv::Trim::All).from_reader(reader);
    let headers = rdr.headers()?.iter().map(str::to_string).collect::<Vec<_>>();

    let mut out = Vec::new();
    for (row, rec) in rdr.records().enumerate() {
        let rec = rec?;
        let mut record = Record::new();
        for (name, cell) in headers.iter().zip(rec.iter()) {
            if cell.is_empty() {
                continue;
            }
            let value = cell
                .parse::<f64>()
                .with_context(|| format!("row {row}, column '{name}': '{cell}' is not a number"))?;
            record.insert(name.clone(), value);
        }
        out.push(record);
    }
    Ok(out)
}
