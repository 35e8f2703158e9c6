pub mod acceptance;
pub mod characteristic;
mod error;
pub mod enumerate;
pub mod graph;
pub mod labelling;
pub mod meter;
pub mod parser;


pub use error::{Error, Result};
pub use graph::{ArgumentationFramework, Extension, MAX_ARGUMENTS};
pub use labelling::{Label, Labelling};
pub use meter::Meter;
pub use parser::parse;

/// Try setting up logging for unit tests
#[cfg(test)]
#[ctor::ctor]
fn setup_logging() {
    pretty_env_logger::formatted_builder()
        .is_test(true)
        .filter_level(log::LevelFilter::Trace)
        .try_init()
        .ok();
    log::trace!("Test logger setup");
}
