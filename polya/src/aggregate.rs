//! Summary-statistics table over the fixed set of poly(A) control datasets.
use crate::load;
use crate::stats::SummaryStatistics;
use log::*;
use std::io::Write;
use std::path::Path;

/// The control datasets of the pipeline. Each table file is named after its
/// control and paired with the expected tail length in nucleotides.
pub const CONTROL_DATASETS: [(&str, f64); 7] = [
    ("10x.polya.tsv", 10.),
    ("15x.polya.tsv", 15.),
    ("30x.polya.tsv", 30.),
    ("60x.polya.tsv", 60.),
    ("60xN.polya.tsv", 60.),
    ("80x.polya.tsv", 80.),
    ("100x.polya.tsv", 100.),
];

// Row order of the rendered table. Values are rounded to two decimals at this
// point and no earlier; count included, as in the original report.
const STATISTIC_ROWS: [(&str, fn(&SummaryStatistics) -> String); 8] = [
    ("count", |s| format!("{:.2}", s.count as f64)),
    ("mean", |s| format!("{:.2}", s.mean)),
    ("median", |s| format!("{:.2}", s.median)),
    ("mode", |s| format!("{:.2}", s.mode)),
    ("stdv", |s| format!("{:.2}", s.stdv)),
    ("mad", |s| format!("{:.2}", s.mad)),
    ("percent_within_2mad_of_expected", |s| {
        format!("{:.2}", s.percent_within_2mad_of_expected)
    }),
    ("percent_within_2stdv_of_expected", |s| {
        format!("{:.2}", s.percent_within_2stdv_of_expected)
    }),
];

/// Compute the summary statistics for one control dataset.
/// Only PASS-ing rows contribute; an empty filter result is an error rather
/// than a division by zero further down.
pub fn summarize_dataset<P: AsRef<Path>>(
    path: P,
    expected: f64,
) -> std::io::Result<SummaryStatistics> {
    let path = path.as_ref();
    let records = load::load_estimates(path)?;
    let lengths: Vec<f64> = records
        .iter()
        .filter(|r| r.qc_tag.is_pass())
        .map(|r| r.polya_length)
        .collect();
    debug!("{}: {} records, {} passing", path.display(), records.len(), lengths.len());
    if lengths.is_empty() {
        let msg = format!("no passing reads in {}", path.display());
        return Err(std::io::Error::new(std::io::ErrorKind::InvalidData, msg));
    }
    Ok(SummaryStatistics::from_lengths(&lengths, expected))
}

/// Summarize every control dataset in `polyas_dir` and render the table as
/// CSV: a header row of dataset labels, then one row per statistic, values
/// rounded to two decimals. All statistics are computed before the first row
/// is written, so a missing or malformed table yields no partial output.
pub fn summarize<P: AsRef<Path>, W: Write>(polyas_dir: P, mut wtr: W) -> std::io::Result<()> {
    let polyas_dir = polyas_dir.as_ref();
    let mut summaries = vec![];
    for &(filename, expected) in CONTROL_DATASETS.iter() {
        let summary = summarize_dataset(polyas_dir.join(filename), expected)?;
        summaries.push(summary);
    }
    for (filename, _) in CONTROL_DATASETS.iter() {
        write!(&mut wtr, ",{}", filename)?;
    }
    writeln!(&mut wtr)?;
    for (name, render) in STATISTIC_ROWS.iter() {
        write!(&mut wtr, "{}", name)?;
        for summary in summaries.iter() {
            write!(&mut wtr, ",{}", render(summary))?;
        }
        writeln!(&mut wtr)?;
    }
    Ok(())
}
