mod arguments;
mod error;
mod print;

use std::process::ExitCode;

use log::debug;

fn main() -> ExitCode {
    let args: Vec<String> = std::env::args().skip(1).collect();

    let default_filter = if arguments::wants_verbose(&args) {
        "debug"
    } else {
        "warn"
    };
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or(default_filter))
        .init();

    let parsed = match arguments::parse_args(&args) {
        Ok(parsed) => parsed,
        Err(e) => {
            eprintln!("argdump: {}", e);
            return ExitCode::FAILURE;
        }
    };

    if parsed.cmdline.help {
        print!("{}", arguments::USAGE);
        return ExitCode::SUCCESS;
    }

    debug!("bound {:?}", parsed.cmdline);

    if parsed.cmdline.quiet {
        println!("{}", parsed.operands);
    } else {
        print!("{}", print::render(&parsed.cmdline, &parsed.operands));
    }
    ExitCode::SUCCESS
}
