use std::io;
use std::process;

use clap::Parser;

use rapid_pagerank::cli::{self, Cli};

fn main() {
    let args = Cli::parse();
    cli::init_logging(args.verbose);

    let stdout = io::stdout();
    let stderr = io::stderr();
    if let Err(e) = cli::run(&args, &mut stdout.lock(), &mut stderr.lock()) {
        eprintln!("error: {e:#}");
        process::exit(1);
    }
}
