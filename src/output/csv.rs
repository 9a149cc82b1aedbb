//! Lemma frequency CSV reports.

use super::ensure_parent_dir;
use crate::errors::{Error, Result};
use crate::frequency::LemmaCount;
use csv::Writer;
use std::io::Write;
use std::path::Path;

/// Header row of every frequency report.
pub const HEADER: [&str; 2] = ["Lemma", "Frequency"];

/// Write `Lemma,Frequency` rows to any writer.
pub fn write_frequencies<W: Write>(writer: W, frequencies: &[LemmaCount]) -> Result<()> {
    let mut csv = Writer::from_writer(writer);
    csv.write_record(HEADER)?;
    for entry in frequencies {
        csv.write_record([entry.lemma.as_str(), &entry.count.to_string()])?;
    }
    csv.flush()?;
    Ok(())
}

/// Write a frequency report to `path`, creating parent directories.
pub fn write_frequencies_to_csv(path: &Path, frequencies: &[LemmaCount]) -> Result<()> {
    ensure_parent_dir(path)?;
    let file = std::fs::File::create(path).map_err(|e| Error::file_system(path, e))?;
    write_frequencies(file, frequencies)?;
    tracing::info!(
        "Successfully wrote {} lemmas to {}",
        frequencies.len(),
        path.display()
    );
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use indoc::indoc;
    use pretty_assertions::assert_eq;
    use tempfile::TempDir;

    #[test]
    fn test_csv_layout() {
        let mut buffer = Vec::new();
        write_frequencies(
            &mut buffer,
            &[LemmaCount::new("kuća", 2), LemmaCount::new("mačka", 1)],
        )
        .unwrap();
        assert_eq!(
            String::from_utf8(buffer).unwrap(),
            indoc! {"
                Lemma,Frequency
                kuća,2
                mačka,1
            "}
        );
    }

    #[test]
    fn test_fields_with_commas_are_quoted() {
        let mut buffer = Vec::new();
        write_frequencies(&mut buffer, &[LemmaCount::new(",", 4)]).unwrap();
        assert_eq!(String::from_utf8(buffer).unwrap(), "Lemma,Frequency\n\",\",4\n");
    }

    #[test]
    fn test_creates_missing_output_directory() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("nested/out/poems.csv");
        write_frequencies_to_csv(&path, &[LemmaCount::new("pesma", 3)]).unwrap();
        let written = std::fs::read_to_string(&path).unwrap();
        assert!(written.starts_with("Lemma,Frequency\n"));
        assert!(written.contains("pesma,3"));
    }
}
