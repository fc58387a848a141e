use std::io;
use std::process;

use clap::Parser;

use kwic::cli::Cli;
use kwic::index::KwicGenerator;
use kwic::input::LineReader;
use kwic::output::render_index;
use kwic::KwicError;

fn main() {
    let cli = match Cli::try_parse() {
        Ok(cli) => cli,
        Err(err) => {
            // clap renders its own usage text; the exit code is ours.
            let _ = err.print();
            process::exit(1);
        }
    };

    if let Err(err) = run(&cli) {
        eprintln!("error: {}", err);
        process::exit(1);
    }
}

fn run(cli: &Cli) -> Result<(), KwicError> {
    let lines = LineReader::open(&cli.input)?;
    let entries = KwicGenerator::new(lines);

    let stdout = io::stdout();
    render_index(entries, &mut stdout.lock())
}
