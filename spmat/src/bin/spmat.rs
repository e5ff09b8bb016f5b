//! Command-line driver: load two matrices, combine them, save the results

use std::path::{Path, PathBuf};
use std::process::ExitCode;

use clap::{Parser, ValueEnum};
use spmat::{MatrixFile, Operation, Progress, Silent, SparseMatrix, Spinner};
use tracing::{error, info};
use tracing_subscriber::FmtSubscriber;

#[derive(Parser, Debug)]
#[command(author, version, long_about = None)]
#[command(about = "Add, subtract and multiply sparse integer matrices stored as text files")]
struct Cli {
    /// Left operand matrix file
    left: PathBuf,

    /// Right operand matrix file
    right: PathBuf,

    /// Directory the result files are written to
    #[arg(long, default_value = ".")]
    out_dir: PathBuf,

    /// Operation to run
    #[arg(long, value_enum, default_value_t = OpChoice::All)]
    op: OpChoice,

    /// Print results without saving them
    #[arg(long)]
    no_save: bool,

    /// Disable the progress spinner
    #[arg(long)]
    quiet: bool,

    /// Set the logging level
    #[arg(long, default_value = "info")]
    log_level: tracing::Level,
}

#[derive(ValueEnum, Clone, Copy, Debug, PartialEq, Eq)]
enum OpChoice {
    Add,
    Subtract,
    Multiply,
    All,
}

impl OpChoice {
    fn operations(self) -> Vec<Operation> {
        match self {
            OpChoice::Add => vec![Operation::Add],
            OpChoice::Subtract => vec![Operation::Subtract],
            OpChoice::Multiply => vec![Operation::Multiply],
            OpChoice::All => Operation::ALL.to_vec(),
        }
    }
}

fn result_path(out_dir: &Path, op: Operation) -> PathBuf {
    out_dir.join(format!("{op}_result.txt"))
}

fn run_operations<P: Progress>(
    cli: &Cli,
    left: &SparseMatrix,
    right: &SparseMatrix,
    progress: &mut P,
) -> spmat::Result<()> {
    for op in cli.op.operations() {
        info!(%op, "performing operation");
        let result = progress.track("Calculating...", || op.evaluate(left, right))?;

        println!("\n{} Result:", capitalize(&op.to_string()));
        println!("{}", result.render());

        if !cli.no_save {
            let path = result_path(&cli.out_dir, op);
            MatrixFile::write(&result, &path)?;
            info!(path = %path.display(), "{op} result saved");
        }
    }
    Ok(())
}

fn capitalize(word: &str) -> String {
    let mut chars = word.chars();
    match chars.next() {
        Some(first) => first.to_uppercase().chain(chars).collect(),
        None => String::new(),
    }
}

fn run(cli: &Cli) -> spmat::Result<()> {
    let left: SparseMatrix = MatrixFile::read(&cli.left)?;
    let right: SparseMatrix = MatrixFile::read(&cli.right)?;

    println!("Matrix 1:");
    println!("{}", left.render());
    println!("\nMatrix 2:");
    println!("{}", right.render());

    if cli.quiet {
        run_operations(cli, &left, &right, &mut Silent)
    } else {
        run_operations(cli, &left, &right, &mut Spinner::new())
    }
}

fn main() -> ExitCode {
    let cli = Cli::parse();

    let subscriber = FmtSubscriber::builder()
        .with_max_level(cli.log_level)
        .with_writer(std::io::stderr)
        .finish();
    if let Err(err) = tracing::subscriber::set_global_default(subscriber) {
        eprintln!("failed to install log subscriber: {err}");
    }

    match run(&cli) {
        Ok(()) => ExitCode::SUCCESS,
        Err(err) => {
            if err.is_dimension_mismatch() {
                error!("{err}; the column count of the first matrix must equal the row count of the second");
            } else {
                error!("{err}");
            }
            ExitCode::FAILURE
        }
    }
}
