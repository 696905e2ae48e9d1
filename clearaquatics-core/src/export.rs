use crate::{error::ClearAquaticsError, history::CombinedRow};
use csv::Writer;
use std::fs;
use std::path::{Path, PathBuf};

/// Writes date-aligned parameter rows to CSV: a `date` column followed by one
/// column per parameter. Missing values are left empty.
pub struct CombinedHistoryWriter {
    writer: Writer<fs::File>,
    path: PathBuf,
}

impl CombinedHistoryWriter {
    pub fn new<P: AsRef<Path>>(path: P, parameters: &[&str]) -> Result<Self, ClearAquaticsError> {
        let path = path.as_ref().to_path_buf();
        let mut writer = Writer::from_path(&path)
            .map_err(|e| ClearAquaticsError::CsvError(path.display().to_string(), e))?;

        let mut header = vec!["date"];
        header.extend_from_slice(parameters);
        writer
            .write_record(&header)
            .map_err(|e| ClearAquaticsError::CsvError(path.display().to_string(), e))?;

        Ok(Self { writer, path })
    }

    pub fn write_row(&mut self, row: &CombinedRow) -> Result<(), ClearAquaticsError> {
        let mut record = Vec::with_capacity(row.values.len() + 1);
        record.push(row.date.to_string());
        record.extend(row.values.iter().map(|v| v.map(|v| v.to_string()).unwrap_or_default()));

        self.writer
            .write_record(&record)
            .map_err(|e| ClearAquaticsError::CsvError(self.path.display().to_string(), e))
    }

    pub fn finish(mut self) -> Result<(), ClearAquaticsError> {
        self.writer
            .flush()
            .map_err(|e| ClearAquaticsError::FileIO(self.path.display().to_string(), e))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::NaiveDate;

    #[test]
    fn writes_header_and_sparse_rows() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("combined.csv");

        let mut writer = CombinedHistoryWriter::new(&path, &["ph", "temperature"]).unwrap();
        writer
            .write_row(&CombinedRow {
                date: NaiveDate::from_ymd_opt(2025, 9, 12).unwrap(),
                values: vec![Some(7.1), None],
            })
            .unwrap();
        writer
            .write_row(&CombinedRow {
                date: NaiveDate::from_ymd_opt(2025, 9, 15).unwrap(),
                values: vec![Some(7.2), Some(77.0)],
            })
            .unwrap();
        writer.finish().unwrap();

        let written = fs::read_to_string(&path).unwrap();
        assert_eq!(written, "date,ph,temperature\n2025-09-12,7.1,\n2025-09-15,7.2,77\n");
    }
}
