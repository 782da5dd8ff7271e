//! CLI entry point for tile mosaic generation

use clap::Parser;
use tilemosaic::io::cli::{Cli, FileProcessor};
use tilemosaic::io::logging::init_logging;
use tracing::{error, warn};

fn main() -> tilemosaic::Result<()> {
    let cli = Cli::parse();
    init_logging(cli.quiet, cli.verbose);

    let processor = FileProcessor::new(cli);
    match processor.process() {
        Ok(0) => {
            warn!("Output already exists, nothing written");
            Ok(())
        }
        Ok(_) => Ok(()),
        Err(e) => {
            if e.is_user_error() {
                error!(error = %e, "Invalid input");
            } else {
                error!(error = %e, "Processing failed");
            }
            Err(e)
        }
    }
}
