//! jpyc-directory CLI entry point
//!
//! JPYC merchant directory client

use jpyc_directory::cli;

#[tokio::main]
async fn main() {
    if let Err(e) = cli::run().await {
        eprintln!("Error: {}", e);
        std::process::exit(1);
    }
}
