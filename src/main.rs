use std::{
    fs, io,
    path::{Path, PathBuf},
};

use blockchem::{
    ActivityLog, BlockMaker, BlockOutcome, CysteineTreatment, LogFile, Modifications,
    Sequence, TracingLog, batch::default_block_name, read_batch,
};
use clap::Parser;
use miette::{IntoDiagnostic, Report, Result, WrapErr, miette};
use tracing::{debug, info, warn};
use tracing_subscriber::EnvFilter;

/// Generates block files (elemental compositions and monoisotopic masses) for peptides
#[derive(Parser, Debug)]
#[command(version, about)]
struct Args {
    /// A single peptide sequence, in one-letter amino acid codes
    #[arg(short, long, required_unless_present = "input", conflicts_with = "input")]
    sequence: Option<String>,
    /// The block name for `--sequence` (defaults to its first four residues)
    #[arg(short, long, requires = "sequence")]
    name: Option<String>,
    /// A file of newline-separated peptide sequences
    #[arg(short, long)]
    input: Option<PathBuf>,
    /// The directory block files are written to
    #[arg(short, long, default_value = ".")]
    output_dir: PathBuf,
    /// How cysteines were treated: untreated, amide (iodo- or chloroacetamide), or acid (iodo- or chloroacetic acid)
    #[arg(short, long, default_value = "untreated")]
    cysteine: CysteineTreatment,
    /// Whether every methionine is oxidized
    #[arg(short = 'm', long, default_value_t = false)]
    oxidize_methionine: bool,
    /// One-letter codes of residues whose carbons and nitrogens are all C-13 and N-15 (e.g. KR)
    #[arg(short, long)]
    label: Option<String>,
    /// The file that a record of each generated block file is appended to
    #[arg(long, default_value = "BlockMaker.log")]
    log_file: PathBuf,
    /// Don't write an activity log file
    #[arg(long, default_value_t = false, conflicts_with = "log_file")]
    no_log_file: bool,
    /// Log more detail (repeat for even more)
    #[arg(short, long, action = clap::ArgAction::Count, conflicts_with = "quiet")]
    verbose: u8,
    /// Only log warnings and errors
    #[arg(short, long, default_value_t = false)]
    quiet: bool,
}

fn main() -> Result<()> {
    let args = Args::parse();
    init_logging(args.verbose, args.quiet);
    debug!(?args, "parsed arguments");

    let modifications = modifications(&args)?;
    let log = activity_log(&args);
    let mut maker = BlockMaker::new(&args.output_dir, modifications, log);

    if let Some(input) = &args.input {
        generate_batch(&mut maker, input)
    } else if let Some(sequence) = &args.sequence {
        let name = args.name.clone().unwrap_or_else(|| {
            let sequence = sequence.trim().to_uppercase();
            default_block_name(&sequence, |_| false)
        });
        match maker.generate(&name, sequence)? {
            Some(path) => println!("{}", path.display()),
            None => info!("the sequence is empty, so no block file was generated"),
        }
        Ok(())
    } else {
        // NOTE: `clap` requires one of `--sequence` or `--input`
        Err(miette!("no sequences were given"))
    }
}

fn init_logging(verbose: u8, quiet: bool) {
    let default_level = match (quiet, verbose) {
        (true, _) => "warn",
        (false, 0) => "info",
        (false, 1) => "debug",
        (false, _) => "trace",
    };
    let filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_level));
    tracing_subscriber::fmt()
        .with_writer(io::stderr)
        .with_env_filter(filter)
        .with_target(false)
        .init();
}

fn modifications(args: &Args) -> Result<Modifications> {
    let mut modifications = Modifications::new()
        .with_cysteine_treatment(args.cysteine)
        .with_methionine_oxidized(args.oxidize_methionine);

    if let Some(label) = &args.label {
        // NOTE: Labeled residues are validated exactly like a sequence, so typos get the same diagnostics
        let residues = Sequence::parse(label).wrap_err("invalid --label residues")?;
        modifications = modifications.with_isotope_labeled(residues.iter());
    }

    Ok(modifications)
}

fn activity_log(args: &Args) -> Box<dyn ActivityLog> {
    if args.no_log_file {
        return Box::new(TracingLog);
    }

    match LogFile::append(&args.log_file) {
        Ok(log) => Box::new(log),
        Err(error) => {
            let path = args.log_file.display();
            warn!(%error, "couldn't open the activity log {path}, logging to the terminal instead");
            Box::new(TracingLog)
        }
    }
}

fn generate_batch(maker: &mut BlockMaker<Box<dyn ActivityLog>>, input: &Path) -> Result<()> {
    let text = fs::read_to_string(input)
        .into_diagnostic()
        .wrap_err_with(|| format!("failed to read sequences from {}", input.display()))?;

    let entries = read_batch(&text);
    let labeled = maker.modifications().isotope_labeled();
    if !labeled.is_empty() {
        let codes: String = labeled.iter().map(|residue| residue.code()).collect();
        info!("residues {codes} are isotope labeled");
    }
    info!(
        "generating {} block files in {}",
        entries.len(),
        maker.output_dir().display()
    );

    let outcomes = maker.generate_all(&entries);
    let total = outcomes.len();
    let mut failed = 0;
    for (entry, outcome) in entries.iter().zip(outcomes) {
        match outcome {
            BlockOutcome::Written(path) => println!("{}", path.display()),
            BlockOutcome::Skipped => (),
            BlockOutcome::Failed(error) => {
                failed += 1;
                let report = Report::new(error).wrap_err(format!("skipped block {:?}", entry.name()));
                eprintln!("{report:?}");
            }
        }
    }

    if failed == 0 {
        Ok(())
    } else {
        Err(miette!("{failed} of {total} block files could not be generated"))
    }
}
