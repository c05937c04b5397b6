use std::process::ExitCode;

use taskprune_core::init_logging;

mod app;
mod color;
mod commands;
mod report;

fn main() -> ExitCode {
    let app = app::build_cli();
    let matches = app.get_matches();

    // Default (no flag) = quiet mode, -v/--verbose = verbose mode
    let verbose = matches.get_count("verbose") > 0;
    init_logging(!verbose);

    if matches.get_flag("no-color") {
        color::set_no_color();
    }

    let runtime = match tokio::runtime::Builder::new_multi_thread()
        .enable_all()
        .build()
    {
        Ok(runtime) => runtime,
        Err(e) => {
            eprintln!("Failed to start async runtime: {}", e);
            return ExitCode::FAILURE;
        }
    };

    match runtime.block_on(commands::run_command(&matches)) {
        Ok(()) => ExitCode::SUCCESS,
        Err(_) => ExitCode::FAILURE,
    }
}
