use std::path::{Path, PathBuf};
#[macro_use]
extern crate log;

fn main() -> std::io::Result<()> {
    let matches = polya_cli::commands::polya_parser().get_matches();
    if let Some((_, sub_m)) = matches.subcommand() {
        let level = match sub_m.get_count("verbose") {
            0 => "warn",
            1 => "info",
            2 => "debug",
            _ => "trace",
        };
        env_logger::Builder::from_env(env_logger::Env::default().default_filter_or(level)).init();
    }
    match matches.subcommand() {
        Some(("stats", sub_m)) => stats(sub_m),
        Some(("segmentation", sub_m)) => segmentation(sub_m),
        _ => unreachable!(),
    }
}

fn check_exists(path: &Path, what: &str) -> std::io::Result<()> {
    if path.exists() {
        Ok(())
    } else {
        let msg = format!("{} does not exist: {}", what, path.display());
        Err(std::io::Error::new(std::io::ErrorKind::NotFound, msg))
    }
}

fn stats(matches: &clap::ArgMatches) -> std::io::Result<()> {
    debug!("START\tStats");
    let polyas_dir: &String = matches.get_one("polyas_dir").unwrap();
    let polyas_dir = Path::new(polyas_dir);
    check_exists(polyas_dir, "directory")?;
    let stdout = std::io::stdout();
    let mut wtr = std::io::BufWriter::new(stdout.lock());
    polya::aggregate::summarize(polyas_dir, &mut wtr)?;
    use std::io::Write;
    wtr.flush()
}

fn segmentation(matches: &clap::ArgMatches) -> std::io::Result<()> {
    debug!("START\tSegmentation");
    let polya_tsv: &String = matches.get_one("polya_tsv").unwrap();
    let readdb_path: &String = matches.get_one("readdb").unwrap();
    check_exists(Path::new(polya_tsv), "estimate table")?;
    check_exists(Path::new(readdb_path), "readdb index")?;
    let records = polya::load::load_estimates(polya_tsv)?;
    let readdb = polya::load::load_readdb(readdb_path)?;
    debug!("Loaded {} records, {} indexed reads", records.len(), readdb.len());
    let mut rng = rand::thread_rng();
    let record = polya::segmentation::choose_passing(&records, &mut rng).ok_or_else(|| {
        let msg = format!("no passing reads in {}", polya_tsv);
        std::io::Error::new(std::io::ErrorKind::InvalidData, msg)
    })?;
    info!("Chose {}", record.readname);
    let location = readdb.get(&record.readname).ok_or_else(|| {
        let msg = format!("read {} is not in {}", record.readname, readdb_path);
        std::io::Error::new(std::io::ErrorKind::NotFound, msg)
    })?;
    let signal = polya::load::load_signal(location)?;
    if signal.is_empty() {
        let msg = format!("empty signal for read {}: {}", record.readname, location.display());
        return Err(std::io::Error::new(std::io::ErrorKind::InvalidData, msg));
    }
    let spans = polya::segmentation::partition(record, signal.len() as u64);
    let out: PathBuf = match matches.get_one::<String>("out") {
        Some(path) => PathBuf::from(path),
        None => PathBuf::from(format!("segmentation.{}.png", record.readname)),
    };
    polya::plot::render(&signal, &spans, &record.readname, &out)?;
    info!("Wrote {}", out.display());
    Ok(())
}
