#![warn(rust_2018_idioms)]

use std::io::{stderr, stdout};

use anyhow::Result;
use clap::Parser;
use panenav::{options::args::PanenavArgs, run};

fn main() -> Result<()> {
    let args = PanenavArgs::parse();

    #[cfg(feature = "logging")]
    if let Some(debug_log) = &args.general_args.debug_log {
        panenav::utils::logging::init_logger(
            log::LevelFilter::Debug,
            std::ffi::OsStr::new(debug_log),
        )?;
    }

    #[cfg(not(feature = "logging"))]
    if args.general_args.debug_log.is_some() {
        eprintln!("'--debug_log' has no effect, panenav was built without the 'logging' feature.");
    }

    run(&args, &mut stdout().lock(), &mut stderr().lock())
}
