use clap::Parser;
use env_logger::{Builder, Target};
use log::LevelFilter;
use reverse_list::{banner, reverse::solve, scanner::Scanner};
use std::io;
use std::process::ExitCode;

#[derive(Parser)]
#[command(name = "reverse-list", author, version, about, long_about = None)]
struct Cli {
    /// Log level written to stderr; `RUST_LOG` takes precedence
    #[arg(long)]
    #[arg(default_value_t = LevelFilter::Warn)]
    log_level: LevelFilter,
}

fn main() -> ExitCode {
    let args = Cli::parse();
    Builder::new()
        .filter_level(args.log_level)
        .parse_default_env()
        .target(Target::Stderr)
        .init();

    let mut scan = Scanner::new(io::stdin().lock());
    let mut out = io::BufWriter::new(io::stdout().lock());
    match solve(&mut scan, &mut out) {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            log::debug!("failed after {} tokens", scan.position());
            banner::report(&e, &mut io::stderr().lock()).ok();
            ExitCode::FAILURE
        }
    }
}
