mod cli;

use std::fs;
use std::process::ExitCode;

use clap::Parser;
use cli::Cli;
use xv6_fs::{run_checks, FsImage, Reporter};

fn main() -> ExitCode {
    env_logger::init();
    // a wrong argument count must exit 1, not clap's default 2;
    // --help and --version land here too and are not failures
    let cli = match Cli::try_parse() {
        Ok(cli) => cli,
        Err(err) => {
            let is_usage_error = err.use_stderr();
            let _ = err.print();
            return if is_usage_error {
                ExitCode::FAILURE
            } else {
                ExitCode::SUCCESS
            };
        }
    };

    let bytes = match fs::read(&cli.image) {
        Ok(bytes) => bytes,
        Err(err) => {
            eprintln!("could not open image {:?}: {err}", cli.image);
            return ExitCode::FAILURE;
        }
    };
    log::info!("image={:?} ({} bytes)", cli.image, bytes.len());

    let Some(image) = FsImage::new(bytes) else {
        eprintln!(
            "image {:?} is truncated: need at least {} bytes",
            cli.image,
            FsImage::MIN_LEN
        );
        return ExitCode::FAILURE;
    };

    let mut reporter = Reporter::new();
    run_checks(&image, &mut reporter);

    match reporter.summary() {
        0 => ExitCode::SUCCESS,
        _ => ExitCode::FAILURE,
    }
}
