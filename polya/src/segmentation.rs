//! Span math and read selection for segmentation plots.
use definitions::PolyaRecord;
use rand::seq::SliceRandom;
use rand::Rng;

/// The five signal regions of a segmented read, ordered 3' to 5'.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Region {
    Start,
    Leader,
    Adapter,
    PolyA,
    Transcript,
}

impl Region {
    pub fn name(&self) -> &'static str {
        match self {
            Region::Start => "start",
            Region::Leader => "leader",
            Region::Adapter => "adapter",
            Region::PolyA => "poly(A)",
            Region::Transcript => "transcript",
        }
    }
    /// Fixed shading color, as RGB.
    pub fn color(&self) -> (u8, u8, u8) {
        match self {
            Region::Start => (0, 255, 255),
            Region::Leader => (255, 255, 0),
            Region::Adapter => (255, 0, 0),
            Region::PolyA => (0, 255, 0),
            Region::Transcript => (0, 0, 255),
        }
    }
}

/// One shaded span of the plot, `[start, end)` in sample indices.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Span {
    pub region: Region,
    pub start: u64,
    pub end: u64,
}

/// Cut the signal's index range into the five regions using the record's
/// boundaries. The first span is clamped to end at `max(leader_start - 1, 1)`
/// so it never collapses to zero or negative width; the last span runs to the
/// end of the signal.
pub fn partition(record: &PolyaRecord, signal_len: u64) -> [Span; 5] {
    let start_end = record.leader_start.saturating_sub(1).max(1);
    [
        Span {
            region: Region::Start,
            start: 0,
            end: start_end,
        },
        Span {
            region: Region::Leader,
            start: record.leader_start,
            end: record.adapter_start.saturating_sub(1),
        },
        Span {
            region: Region::Adapter,
            start: record.adapter_start,
            end: record.polya_start.saturating_sub(1),
        },
        Span {
            region: Region::PolyA,
            start: record.polya_start,
            end: record.transcript_start.saturating_sub(1),
        },
        Span {
            region: Region::Transcript,
            start: record.transcript_start,
            end: signal_len,
        },
    ]
}

/// Choose one PASS-ing record uniformly at random, or `None` when no record
/// passes QC. Callers that need a reproducible choice pass a seeded rng.
pub fn choose_passing<'a, R: Rng>(
    records: &'a [PolyaRecord],
    rng: &mut R,
) -> Option<&'a PolyaRecord> {
    let passing: Vec<&PolyaRecord> = records.iter().filter(|r| r.qc_tag.is_pass()).collect();
    passing.choose(rng).copied()
}

#[cfg(test)]
mod tests {
    use super::*;
    use definitions::QcTag;
    use rand::SeedableRng;
    use rand_xoshiro::Xoshiro256StarStar;

    fn record(readname: &str, qc_tag: QcTag, bounds: (u64, u64, u64, u64)) -> PolyaRecord {
        PolyaRecord {
            readname: readname.to_string(),
            qc_tag,
            polya_length: 30.,
            leader_start: bounds.0,
            adapter_start: bounds.1,
            polya_start: bounds.2,
            transcript_start: bounds.3,
        }
    }

    #[test]
    fn partition_clamps_the_first_span() {
        let rec = record("r", QcTag::Pass, (0, 50, 120, 300));
        let spans = partition(&rec, 500);
        let coords: Vec<(u64, u64)> = spans.iter().map(|s| (s.start, s.end)).collect();
        assert_eq!(coords, vec![(0, 1), (0, 49), (50, 119), (120, 299), (300, 500)]);
    }

    #[test]
    fn partition_covers_the_signal_in_order() {
        let rec = record("r", QcTag::Pass, (20, 80, 150, 400));
        let spans = partition(&rec, 1000);
        assert_eq!(spans[0].region, Region::Start);
        assert_eq!(spans[0].end, 19);
        assert_eq!(spans[4].region, Region::Transcript);
        assert_eq!(spans[4].end, 1000);
        for pair in spans.windows(2) {
            assert!(pair[0].start <= pair[1].start);
        }
    }

    #[test]
    fn choose_passing_skips_failed_reads() {
        let records = vec![
            record("fail-1", QcTag::Adapter, (0, 1, 2, 3)),
            record("ok", QcTag::Pass, (0, 1, 2, 3)),
            record("fail-2", QcTag::NoRegion, (0, 1, 2, 3)),
        ];
        let mut rng = Xoshiro256StarStar::seed_from_u64(42);
        for _ in 0..10 {
            let chosen = choose_passing(&records, &mut rng).unwrap();
            assert_eq!(chosen.readname, "ok");
        }
    }

    #[test]
    fn choose_passing_is_none_without_candidates() {
        let records = vec![record("fail", QcTag::SuffClip, (0, 1, 2, 3))];
        let mut rng = Xoshiro256StarStar::seed_from_u64(42);
        assert!(choose_passing(&records, &mut rng).is_none());
    }

    #[test]
    fn choose_passing_is_reproducible_with_a_seed() {
        let records: Vec<_> = (0..50)
            .map(|i| record(&format!("read-{}", i), QcTag::Pass, (10, 50, 120, 300)))
            .collect();
        let mut rng = Xoshiro256StarStar::seed_from_u64(3205);
        let first = choose_passing(&records, &mut rng).unwrap().readname.clone();
        let mut rng = Xoshiro256StarStar::seed_from_u64(3205);
        let second = choose_passing(&records, &mut rng).unwrap().readname.clone();
        assert_eq!(first, second);
    }
}
