//! Tool to generate random argumentation frameworks in the engine's
//! `arg(x).`/`att(x,y).` input grammar, for fixture and property-test
//! generation.
use std::{
    fs::File,
    io::{BufWriter, Write},
};

use rand::{rngs::SmallRng, Rng, SeedableRng};
use types::{Argument, Attack};

mod args;
mod types;

use args::ARGS;

/// A generated argumentation framework: arguments plus attacks, both dense
/// and static from the moment they're generated.
#[derive(Debug, Clone)]
struct AF {
    args: Vec<Argument>,
    atts: Vec<Attack>,
}

impl AF {
    /// Generate a new argumentation framework: `ARGS.arg_count` arguments,
    /// with every ordered pair independently attacked at probability
    /// `ARGS.edge_prop` (self-attacks included, matching the engine's
    /// permission for them).
    fn generate(rng: &mut impl Rng) -> Self {
        let args = (0..ARGS.arg_count).map(Argument::new).collect();
        let atts = (0..ARGS.arg_count)
            .flat_map(|from| (0..ARGS.arg_count).map(move |to| (from, to)))
            .filter(|_| rng.gen_bool(ARGS.edge_prop))
            .map(|(from, to)| Attack::new(from, to))
            .collect();
        Self { args, atts }
    }

    fn write_to(&self, output: &mut BufWriter<File>) -> std::io::Result<()> {
        for arg in &self.args {
            writeln!(output, "arg({}).", arg.name())?;
        }
        for attack in &self.atts {
            writeln!(output, "att({},{}).", attack.from_name(), attack.to_name())?;
        }
        Ok(())
    }
}

fn main() {
    pretty_env_logger::init();

    let mut rng = match ARGS.seed {
        Some(seed) => SmallRng::seed_from_u64(seed),
        None => SmallRng::from_rng(rand::thread_rng()).expect("initializing RNG"),
    };
    let af = AF::generate(&mut rng);
    log::debug!(
        "generated {} arguments, {} attacks",
        af.args.len(),
        af.atts.len()
    );
    let mut output = BufWriter::new(File::create(&ARGS.output).expect("creating output file"));
    af.write_to(&mut output).expect("writing generated framework");
}

