//! One-shot command line front-end for the argumentation-framework engine.
use std::process::ExitCode;

use af_engine::acceptance::{
    credulous_complete_naive, credulous_stable_naive, skeptical_complete_naive,
    skeptical_stable_naive,
};
use af_engine::enumerate::{find_one_complete, find_one_stable};
use af_engine::{ArgumentationFramework, Meter};
use clap::Parser;

use args::{Args, Command};
use error::{Error, Result};

mod args;
mod error;

fn main() -> ExitCode {
    pretty_env_logger::init();

    let args = match Args::try_parse() {
        Ok(args) => args,
        Err(err) => {
            eprintln!("{err}");
            return ExitCode::from(1);
        }
    };

    match run(args) {
        Ok(()) => ExitCode::SUCCESS,
        Err(err) => {
            eprintln!("error: {err}");
            ExitCode::FAILURE
        }
    }
}

fn run(args: Args) -> Result {
    if args.command.requires_argument() && args.argument.is_none() {
        return Err(Error::MissingArgument);
    }

    let content = std::fs::read_to_string(&args.file).map_err(af_engine::Error::from)?;
    let af = af_engine::parse(&content)?;
    let mut meter = Meter::new();

    match args.command {
        Command::SeCo => match find_one_complete(&af, &mut meter) {
            Some(ext) => println!("{}", af.format_extension(ext)),
            None => println!("NO"),
        },
        Command::SeSt => match find_one_stable(&af, &mut meter) {
            Some(ext) => println!("{}", af.format_extension(ext)),
            None => println!("NO"),
        },
        Command::DcCo | Command::DsCo | Command::DcSt | Command::DsSt => {
            let arg = resolve_argument(&af, &args)?;
            let accepted = match args.command {
                Command::DcCo => credulous_complete_naive(&af, arg, &mut meter),
                Command::DsCo => skeptical_complete_naive(&af, arg, &mut meter),
                Command::DcSt => credulous_stable_naive(&af, arg, &mut meter),
                Command::DsSt => skeptical_stable_naive(&af, arg, &mut meter),
                Command::SeCo | Command::SeSt => unreachable!(),
            };
            println!("{}", if accepted { "YES" } else { "NO" });
        }
    }

    log::trace!(
        "{:?} on {} arguments examined {} states",
        args.command,
        af.len(),
        meter.count()
    );
    Ok(())
}

fn resolve_argument(af: &ArgumentationFramework, args: &Args) -> Result<usize> {
    let name = args.argument.as_deref().ok_or(Error::MissingArgument)?;
    af.index_of(name)
        .ok_or_else(|| Error::UnknownArgument(name.to_owned()))
}
