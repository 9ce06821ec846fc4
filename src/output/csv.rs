//! CSV writer for a single diff result

use std::io::Write;

use anyhow::{Context, Result};

use crate::diff::DiffResult;

/// Write the header and every tagged row as CSV
pub fn write_csv<W: Write>(result: &DiffResult, writer: W) -> Result<()> {
    let mut csv_writer = csv::Writer::from_writer(writer);

    csv_writer
        .write_record(result.header.iter())
        .context("Failed to write CSV header")?;
    for tagged in &result.rows {
        csv_writer
            .write_record(tagged.row.cells())
            .context("Failed to write CSV row")?;
    }

    csv_writer.flush()?;
    Ok(())
}

/// Serialize a result to CSV bytes
pub fn to_csv_bytes(result: &DiffResult) -> Result<Vec<u8>> {
    let mut buffer = Vec::new();
    write_csv(result, &mut buffer)?;
    Ok(buffer)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::diff::diff;
    use crate::model::{Header, Row, Table};

    #[test]
    fn test_csv_layout() {
        let header = Header::from(vec!["id", "name"]);
        let old = Table::new(
            header.clone(),
            vec![Row::from(vec!["1", "Alice"]), Row::from(vec!["2", "Bob"])],
        )
        .unwrap();
        let new = Table::new(
            header,
            vec![Row::from(vec!["1", "Alice"]), Row::from(vec!["3", "Carol, Jr."])],
        )
        .unwrap();
        let result = diff(&old, &new).unwrap();

        let text = String::from_utf8(to_csv_bytes(&result).unwrap()).unwrap();
        let lines: Vec<_> = text.lines().collect();

        assert_eq!(
            lines,
            vec![
                "id,name,status",
                "3,\"Carol, Jr.\",added",
                "2,Bob,deleted"
            ]
        );
    }

    #[test]
    fn test_written_csv_reads_back() {
        let header = Header::from(vec!["id"]);
        let old = Table::empty(header.clone());
        let new = Table::new(header, vec![Row::from(vec!["x"])]).unwrap();
        let result = diff(&old, &new).unwrap();

        let bytes = to_csv_bytes(&result).unwrap();
        let table = crate::parser::read_table(bytes.as_slice()).unwrap();

        assert_eq!(table, result.to_table());
    }
}
