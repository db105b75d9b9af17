use std::{
    error::Error,
    io::{self, Write},
    path::PathBuf,
};

use caseconv::{
    inflector::{self, ErrorKind},
    Batch, Mismatch, Mode, Outcome,
};
use clap::Parser;
use codespan_reporting::{
    diagnostic::{Diagnostic, Label},
    files::SimpleFile,
    term::{
        self,
        termcolor::{ColorChoice, StandardStream},
    },
};
use log::info;

#[derive(Parser)]
#[command(disable_help_subcommand = true)]
enum Args {
    /// Convert every input to the given case.
    Convert(ConvertArgs),
    /// Check that every input is already written in the given case.
    Check(CheckArgs),
}

#[derive(clap::Args)]
struct ConvertArgs {
    case: Case,
    #[command(flatten)]
    source: SourceArgs,
    /// Parse each input as a JSON value. Values other than strings are rejected.
    #[arg(long)]
    json: bool,
}

#[derive(clap::Args)]
struct CheckArgs {
    case: Case,
    #[command(flatten)]
    source: SourceArgs,
}

#[derive(clap::Args)]
struct SourceArgs {
    /// Inputs to process. When omitted, inputs are read one per line from `--file` or stdin.
    inputs: Vec<String>,
    /// Read inputs from this file, one per line.
    #[arg(long, conflicts_with = "inputs")]
    file: Option<PathBuf>,
}

impl SourceArgs {
    fn load(self) -> io::Result<Batch> {
        if !self.inputs.is_empty() {
            Ok(Batch::from_args(self.inputs))
        } else if let Some(path) = &self.file {
            Batch::read_file(path)
        } else {
            Batch::read_stdin()
        }
    }
}

#[derive(Copy, Clone, clap::ValueEnum)]
enum Case {
    #[value(name = "camelCase", aliases(["camel-case", "camel"]))]
    Camel,
    #[value(name = "dot.case", aliases(["dot-case", "dot"]))]
    Dot,
    #[value(name = "kebab-case", aliases(["kebab"]))]
    Kebab,
}

impl From<Case> for inflector::Case {
    fn from(case: Case) -> Self {
        match case {
            Case::Camel => inflector::Case::Camel,
            Case::Dot => inflector::Case::Dot,
            Case::Kebab => inflector::Case::Kebab,
        }
    }
}

fn main() -> Result<(), Box<dyn Error>> {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("warn")).init();

    let args = Args::parse();
    match args {
        Args::Convert(args) => {
            let case = inflector::Case::from(args.case);
            let mode = if args.json { Mode::Json } else { Mode::Text };
            let batch = args.source.load()?;
            let mut emitter = Emitter::new(&batch);
            let stdout = &mut io::stdout().lock();
            for outcome in batch.convert(case, mode) {
                match &outcome.result {
                    Ok(converted) => writeln!(stdout, "{converted}")?,
                    Err(err) => emitter.emit(&conversion_diagnostic(&outcome, err, case))?,
                }
            }
            stdout.flush()?;
            emitter.abort_if_errors();
        }
        Args::Check(args) => {
            let case = inflector::Case::from(args.case);
            let batch = args.source.load()?;
            let mut emitter = Emitter::new(&batch);
            for mismatch in batch.check(case) {
                emitter.emit(&invalid_case_diagnostic(&mismatch, case))?;
            }
            emitter.abort_if_errors();
            info!("all {} entries of {} use {case}", batch.len(), batch.name());
        }
    }

    Ok(())
}

struct Emitter<'a> {
    writer: StandardStream,
    config: term::Config,
    file: SimpleFile<&'a str, &'a str>,
    has_errors: bool,
}

impl<'a> Emitter<'a> {
    fn new(batch: &'a Batch) -> Self {
        Self {
            writer: StandardStream::stderr(ColorChoice::Auto),
            config: term::Config::default(),
            file: SimpleFile::new(batch.name(), batch.text()),
            has_errors: false,
        }
    }

    fn abort_if_errors(&self) {
        if self.has_errors {
            std::process::exit(1);
        }
    }

    fn emit(
        &mut self,
        diagnostic: &Diagnostic<()>,
    ) -> Result<(), codespan_reporting::files::Error> {
        self.has_errors = true;
        term::emit(
            &mut self.writer.lock(),
            &self.config,
            &self.file,
            diagnostic,
        )
    }
}

fn conversion_diagnostic(
    outcome: &Outcome,
    err: &caseconv::Error,
    case: inflector::Case,
) -> Diagnostic<()> {
    let note = match err.kind() {
        Some(ErrorKind::Type) => format!("{case} only accepts strings"),
        Some(ErrorKind::Value) => format!("{case} needs at least one word"),
        None => "with `--json`, every input must be a JSON value".to_string(),
    };
    Diagnostic::error()
        .with_message(err.to_string())
        .with_labels(vec![Label::primary((), outcome.span())])
        .with_notes(vec![note])
}

fn invalid_case_diagnostic(mismatch: &Mismatch, case: inflector::Case) -> Diagnostic<()> {
    let label = Label::primary((), mismatch.span());
    let label = match &mismatch.expected {
        Some(expected) => label.with_message(format!("should be written as {expected}")),
        None => label.with_message(format!("has no words to write in {case}")),
    };
    Diagnostic::error()
        .with_message(format!("`{}` doesn't use {case}", mismatch.input))
        .with_labels(vec![label])
}
