use std::fs::File;
use std::io::{BufWriter, Read, Write};
use std::path::Path;

use log::info;
use tempfile::NamedTempFile;

use crate::error::Result;
use crate::predictor::Predictor;
use crate::records::{RawInput, ScoredRecord};

/// Scores every row of a CSV whose headers are the request keys and writes
/// the rows back with a `predicted_premium` column. Returns the row count.
///
/// The first failing row aborts the batch.
pub fn score_csv<R: Read, W: Write>(predictor: &Predictor, input: R, output: W) -> Result<usize> {
    let mut reader = csv::Reader::from_reader(input);
    let mut writer = csv::Writer::from_writer(output);

    let mut count = 0;
    for record in reader.deserialize() {
        let record: RawInput = record?;
        let premium = predictor.predict(&record)?;
        writer.serialize(ScoredRecord::new(record, premium))?;
        count += 1;
    }
    writer.flush()?;

    info!("scored {} rows", count);
    Ok(count)
}

/// File-to-file [`score_csv`]. Rows go to a temporary file beside `output`,
/// which replaces `output` only once every row has been scored.
pub fn score_csv_file(predictor: &Predictor, input: &Path, output: &Path) -> Result<usize> {
    let reader = File::open(input)?;
    let dir = match output.parent() {
        Some(parent) if !parent.as_os_str().is_empty() => parent,
        _ => Path::new("."),
    };

    let mut staged = NamedTempFile::new_in(dir)?;
    let count = score_csv(predictor, reader, BufWriter::new(&mut staged))?;
    staged.persist(output).map_err(|e| e.error)?;

    Ok(count)
}
