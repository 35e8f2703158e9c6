use std::path::PathBuf;

use clap::Parser;
use lazy_static::lazy_static;

lazy_static! {
    /// Global command line arguments.
    pub static ref ARGS: Args = Args::parse();
}

/// Generate a random argumentation framework in the `arg(x).`/`att(x,y).`
/// grammar the engine parses.
#[derive(Debug, Parser)]
#[command(version, about)]
pub struct Args {
    /// Number of arguments to generate.
    #[arg(short = 'n', long = "size", default_value_t = 10, value_name = "NUM")]
    pub arg_count: usize,
    /// Probability that any ordered pair of arguments is connected by an
    /// attack.
    #[arg(
        short = 'p',
        long = "edge",
        value_name = "FLOAT",
        default_value_t = 0.2
    )]
    pub edge_prop: f64,
    /// Seed for the PRNG. Fixing this makes generation reproducible; left
    /// unset, the framework is seeded from system entropy.
    #[arg(short, long, value_name = "SEED")]
    pub seed: Option<u64>,
    /// File to write the generated framework to.
    #[arg(short, long, value_name = "PATH")]
    pub output: PathBuf,
}
