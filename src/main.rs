use clap::Parser;
use std::io;
use std::process::exit;

use serge_gcd::args::Args;
use serge_gcd::{driver, session};

fn main() {
    let args = Args::parse();
    if let Err(err) = session::init_logger(args.log_level.as_deref()) {
        eprintln!("{} {}", "::", err);
        exit(2);
    }

    let stdout = io::stdout();
    let stderr = io::stderr();
    match driver::run(&args, &mut stdout.lock(), &mut stderr.lock()) {
        Ok(status) => exit(status),
        Err(err) => {
            eprintln!("{} {}", "::", err);
            exit(1);
        }
    }
}
