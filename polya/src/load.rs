//! Parsers for the pipeline's tab-separated outputs: the per-read estimate
//! table, the read-location index, and raw-signal sample dumps.
use definitions::{PolyaRecord, QcTag, ReadDb};
use std::collections::HashMap;
use std::io::{BufRead, BufReader};
use std::path::{Path, PathBuf};

const REQUIRED_COLUMNS: [&str; 7] = [
    "readname",
    "qc_tag",
    "polya_length",
    "leader_start",
    "adapter_start",
    "polya_start",
    "transcript_start",
];

fn invalid_data(msg: String) -> std::io::Error {
    std::io::Error::new(std::io::ErrorKind::InvalidData, msg)
}

/// Parse the estimate table from a reader. The first line is a header; the
/// required columns are located by name, so extra columns and column order do
/// not matter. A missing column or an unparseable field is an error.
pub fn read_estimates<R: BufRead>(rdr: R) -> std::io::Result<Vec<PolyaRecord>> {
    let mut lines = rdr.lines();
    let header = match lines.next() {
        Some(line) => line?,
        None => return Err(invalid_data("estimate table is empty".to_string())),
    };
    let columns: Vec<&str> = header.split('\t').collect();
    let mut indices = HashMap::new();
    for name in REQUIRED_COLUMNS.iter() {
        match columns.iter().position(|c| c == name) {
            Some(idx) => {
                indices.insert(*name, idx);
            }
            None => return Err(invalid_data(format!("missing required column: {}", name))),
        }
    }
    let field = |fields: &[&str], name: &str, lineno: usize| -> std::io::Result<String> {
        fields
            .get(indices[name])
            .map(|f| f.to_string())
            .ok_or_else(|| invalid_data(format!("line {}: missing field {}", lineno, name)))
    };
    let mut records = vec![];
    for (lineno, line) in lines.enumerate() {
        let line = line?;
        if line.is_empty() {
            continue;
        }
        // Header is line 1, so data lines start at 2.
        let lineno = lineno + 2;
        let fields: Vec<&str> = line.split('\t').collect();
        let parse_f64 = |name: &str| -> std::io::Result<f64> {
            field(&fields, name, lineno)?.parse().map_err(|_| {
                invalid_data(format!("line {}: unparseable {} field", lineno, name))
            })
        };
        let parse_index = |name: &str| -> std::io::Result<u64> {
            // Some pipeline versions emit boundaries as floats ("51.0").
            parse_f64(name).map(|v| v as u64)
        };
        records.push(PolyaRecord {
            readname: field(&fields, "readname", lineno)?,
            qc_tag: QcTag::from(field(&fields, "qc_tag", lineno)?.as_str()),
            polya_length: parse_f64("polya_length")?,
            leader_start: parse_index("leader_start")?,
            adapter_start: parse_index("adapter_start")?,
            polya_start: parse_index("polya_start")?,
            transcript_start: parse_index("transcript_start")?,
        });
    }
    Ok(records)
}

pub fn load_estimates<P: AsRef<Path>>(path: P) -> std::io::Result<Vec<PolyaRecord>> {
    let rdr = std::fs::File::open(path).map(BufReader::new)?;
    read_estimates(rdr)
}

/// Parse the headerless two-column readdb index (read name, signal path).
pub fn read_readdb<R: BufRead>(rdr: R) -> std::io::Result<ReadDb> {
    let mut locations = HashMap::new();
    for (lineno, line) in rdr.lines().enumerate() {
        let line = line?;
        if line.is_empty() {
            continue;
        }
        let mut fields = line.split('\t');
        match (fields.next(), fields.next()) {
            (Some(readname), Some(location)) => {
                locations.insert(readname.to_string(), PathBuf::from(location));
            }
            _ => {
                let msg = format!("readdb line {}: expected two tab-separated fields", lineno + 1);
                return Err(invalid_data(msg));
            }
        }
    }
    Ok(ReadDb::new(locations))
}

pub fn load_readdb<P: AsRef<Path>>(path: P) -> std::io::Result<ReadDb> {
    let rdr = std::fs::File::open(path).map(BufReader::new)?;
    read_readdb(rdr)
}

/// Parse a raw-signal dump, one current sample (pA) per line, ordered from
/// the 3' end.
pub fn read_signal<R: BufRead>(rdr: R) -> std::io::Result<Vec<f64>> {
    let mut signal = vec![];
    for (lineno, line) in rdr.lines().enumerate() {
        let line = line?;
        if line.is_empty() {
            continue;
        }
        let sample: f64 = line
            .trim()
            .parse()
            .map_err(|_| invalid_data(format!("signal line {}: unparseable sample", lineno + 1)))?;
        signal.push(sample);
    }
    Ok(signal)
}

pub fn load_signal<P: AsRef<Path>>(path: P) -> std::io::Result<Vec<f64>> {
    let rdr = std::fs::File::open(path).map(BufReader::new)?;
    read_signal(rdr)
}

#[cfg(test)]
mod tests {
    use super::*;
    const TABLE: &str = "readname\tcontig\tposition\tleader_start\tadapter_start\tpolya_start\ttranscript_start\tread_rate\tpolya_length\tqc_tag\n\
        read-1\tENO2\t0\t10\t50\t120\t300\t70.1\t28.50\tPASS\n\
        read-2\tENO2\t0\t5\t40\t100\t250\t68.9\t12.00\tADAPTER\n";
    #[test]
    fn estimates_parse_by_header_name() {
        let records = read_estimates(TABLE.as_bytes()).unwrap();
        assert_eq!(records.len(), 2);
        let first = &records[0];
        assert_eq!(first.readname, "read-1");
        assert!(first.qc_tag.is_pass());
        assert_eq!(first.polya_length, 28.5);
        assert_eq!(first.leader_start, 10);
        assert_eq!(first.transcript_start, 300);
        assert!(!records[1].qc_tag.is_pass());
    }
    #[test]
    fn estimates_missing_column_is_an_error() {
        let table = "readname\tqc_tag\nread-1\tPASS\n";
        let err = read_estimates(table.as_bytes()).unwrap_err();
        assert_eq!(err.kind(), std::io::ErrorKind::InvalidData);
        assert!(err.to_string().contains("polya_length"));
    }
    #[test]
    fn estimates_bad_field_is_an_error() {
        let table = TABLE.replace("28.50", "n/a");
        let err = read_estimates(table.as_bytes()).unwrap_err();
        assert!(err.to_string().contains("polya_length"));
    }
    #[test]
    fn readdb_maps_read_to_location() {
        let index = "read-1\t/data/fast5/batch0.signal\nread-2\t/data/fast5/batch1.signal\n";
        let db = read_readdb(index.as_bytes()).unwrap();
        assert_eq!(db.len(), 2);
        let loc = db.get("read-1").unwrap();
        assert_eq!(loc, &PathBuf::from("/data/fast5/batch0.signal"));
        assert!(db.get("read-3").is_none());
    }
    #[test]
    fn readdb_rejects_single_column_line() {
        assert!(read_readdb("read-1\n".as_bytes()).is_err());
    }
    #[test]
    fn signal_parses_one_sample_per_line() {
        let signal = read_signal("80.5\n81.25\n\n79.0\n".as_bytes()).unwrap();
        assert_eq!(signal, vec![80.5, 81.25, 79.0]);
        assert!(read_signal("80.5\nxyz\n".as_bytes()).is_err());
    }
}
