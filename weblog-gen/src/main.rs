mod args;
mod generator;

use std::{
    fs::File,
    io::{self, Write},
    process::ExitCode,
};

use args::CliArgs;
use clap::Parser;
use generator::{generate_malformed_row, generate_row};
use rand::{Rng, SeedableRng, rngs::StdRng};

fn main() -> ExitCode {
    let args = CliArgs::parse();
    let sink: Box<dyn Write> = match args.output() {
        Some(path) => match File::create(path) {
            Ok(file) => Box::new(file),
            Err(e) => {
                eprintln!("Cannot create {}: {e}", path.display());
                return ExitCode::FAILURE;
            }
        },
        None => Box::new(io::stdout().lock()),
    };

    if let Err(e) = write_log(&args, sink) {
        eprintln!("Failed to write log: {e}");
        return ExitCode::FAILURE;
    }
    ExitCode::SUCCESS
}

fn write_log(args: &CliArgs, sink: Box<dyn Write>) -> Result<(), csv::Error> {
    let mut rng = match args.seed() {
        Some(seed) => StdRng::seed_from_u64(*seed),
        None => StdRng::from_os_rng(),
    };
    let mut writer = csv::WriterBuilder::new().flexible(true).from_writer(sink);
    for index in 0..*args.rows() {
        let row = if rng.random_bool(*args.malformed_ratio()) {
            generate_malformed_row(&mut rng, index)
        } else {
            generate_row(&mut rng, index)
        };
        writer.write_record(&row)?;
    }
    writer.flush()?;
    Ok(())
}
