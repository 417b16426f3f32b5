use vsc_to_tm::{cli, log_error, logger, ui};

fn main() {
    if let Err(e) = logger::init() {
        eprintln!("Failed to initialize logging: {e}");
    }

    if let Err(e) = cli::main() {
        log_error!("{e:#}");
        ui::print_error(&format!("Error: {e:#}"));
        std::process::exit(1);
    }
}
