use std::path::PathBuf;

use clap::{Parser, ValueEnum};

/// The six queries the engine answers, matching the command codes of the
/// competition this tool's output format follows.
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum Command {
    /// One complete extension, or `NO` if none is wanted beyond the witness search.
    #[value(name = "SE-CO")]
    SeCo,
    /// One stable extension, or `NO` if none exists.
    #[value(name = "SE-ST")]
    SeSt,
    /// Credulous acceptance under the complete semantics.
    #[value(name = "DC-CO")]
    DcCo,
    /// Skeptical acceptance under the complete semantics.
    #[value(name = "DS-CO")]
    DsCo,
    /// Credulous acceptance under the stable semantics.
    #[value(name = "DC-ST")]
    DcSt,
    /// Skeptical acceptance under the stable semantics.
    #[value(name = "DS-ST")]
    DsSt,
}

impl Command {
    /// Whether this command requires `-a` to be given.
    pub fn requires_argument(self) -> bool {
        !matches!(self, Command::SeCo | Command::SeSt)
    }
}

/// Solves Dung abstract argumentation frameworks: one-shot extension search
/// and acceptance queries over the complete and stable semantics.
#[derive(Debug, Parser)]
#[command(version, about)]
pub struct Args {
    /// Query to run.
    #[arg(short = 'p', long = "problem")]
    pub command: Command,
    /// File holding the argumentation framework, in `arg(x).`/`att(x,y).` format.
    #[arg(short, long)]
    pub file: PathBuf,
    /// Argument the query concerns. Required by every command except SE-CO/SE-ST.
    #[arg(short, long)]
    pub argument: Option<String>,
}
