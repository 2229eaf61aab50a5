use crate::domain::errors::DatasetError;
use crate::domain::latency::{LatencySample, LatencyTable};
use std::fs::File;
use std::io::BufReader;
use std::path::Path;

/// Reads a measurement CSV (header row, then size/random/sequential columns)
/// into a table. Columns are positional; the header names are whatever the
/// benchmark wrote and are skipped. The file handle lives only for the
/// duration of the read. No validation beyond what deserialization enforces:
/// rows that parse are taken as-is, in file order.
pub fn load_table(path: &Path) -> Result<LatencyTable, DatasetError> {
    let file = File::open(path).map_err(|source| DatasetError::Open {
        path: path.to_path_buf(),
        source,
    })?;

    let mut rdr = csv::Reader::from_reader(BufReader::new(file));

    let mut samples = Vec::new();
    for result in rdr.records() {
        let record = result?;
        // Positional mapping (no header lookup), matching the file contract
        // of column 0 = size, 1 = random ns, 2 = sequential ns.
        let sample: LatencySample = record.deserialize(None)?;
        samples.push(sample);
    }

    Ok(LatencyTable::new(samples))
}
