mod app;
mod cli;

use image_sequencer::logging;

fn main() {
    let cli = cli::parse();

    if let Err(e) = logging::init(cli.verbose, cli.log_file.as_deref()) {
        eprintln!("Warning: {:#}", e);
    }

    app::run(cli);
}
