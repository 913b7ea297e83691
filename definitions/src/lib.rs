//! Definitions -- shared record types for the poly(A) post-processing tools.
//! The upstream pipeline emits one tab-separated estimate table per dataset and one
//! read-location index; every tool in this workspace speaks in terms of the
//! [PolyaRecord](PolyaRecord) rows parsed out of those files.

use serde::{Deserialize, Serialize};
use std::collections::HashMap;
use std::path::PathBuf;

/// QC outcome of one read's poly(A) call. Exactly [QcTag::Pass](QcTag::Pass)
/// marks an estimate as usable; every other tag excludes the read.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub enum QcTag {
    Pass,
    SuffClip,
    Adapter,
    NoRegion,
    ReadFailedLoad,
    /// Tag string not in the known vocabulary. Kept verbatim so that loading
    /// never rejects a row over an unrecognized tag.
    Other(String),
}

impl QcTag {
    pub fn is_pass(&self) -> bool {
        matches!(self, QcTag::Pass)
    }
}

impl From<&str> for QcTag {
    fn from(tag: &str) -> Self {
        match tag {
            "PASS" => QcTag::Pass,
            "SUFFCLIP" => QcTag::SuffClip,
            "ADAPTER" => QcTag::Adapter,
            "NOREGION" => QcTag::NoRegion,
            "READ_FAILED_LOAD" => QcTag::ReadFailedLoad,
            other => QcTag::Other(other.to_string()),
        }
    }
}

impl std::str::FromStr for QcTag {
    type Err = std::convert::Infallible;
    fn from_str(tag: &str) -> Result<Self, Self::Err> {
        Ok(QcTag::from(tag))
    }
}

impl std::fmt::Display for QcTag {
    fn fmt(&self, f: &mut std::fmt::Formatter) -> std::fmt::Result {
        match self {
            QcTag::Pass => write!(f, "PASS"),
            QcTag::SuffClip => write!(f, "SUFFCLIP"),
            QcTag::Adapter => write!(f, "ADAPTER"),
            QcTag::NoRegion => write!(f, "NOREGION"),
            QcTag::ReadFailedLoad => write!(f, "READ_FAILED_LOAD"),
            QcTag::Other(tag) => write!(f, "{}", tag),
        }
    }
}

/// One read's poly(A) analysis result.
/// The four `*_start` fields are sample indices into the raw signal, counted
/// from the 3' end, and are non-decreasing within a row.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PolyaRecord {
    pub readname: String,
    pub qc_tag: QcTag,
    /// Estimated poly(A) tail length in nucleotides. Nonnegative.
    pub polya_length: f64,
    pub leader_start: u64,
    pub adapter_start: u64,
    pub polya_start: u64,
    pub transcript_start: u64,
}

/// Index from read name to the file holding that read's raw signal.
/// Read names are unique within the index.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct ReadDb {
    locations: HashMap<String, PathBuf>,
}

impl ReadDb {
    pub fn new(locations: HashMap<String, PathBuf>) -> Self {
        Self { locations }
    }
    pub fn get(&self, readname: &str) -> Option<&PathBuf> {
        self.locations.get(readname)
    }
    pub fn len(&self) -> usize {
        self.locations.len()
    }
    pub fn is_empty(&self) -> bool {
        self.locations.is_empty()
    }
}
