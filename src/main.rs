use centralog::cli::{print_error, Cli};
use tracing_subscriber::EnvFilter;

fn main() {
    // Internal diagnostics go to stderr, log output itself to stdout
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn")),
        )
        .with_writer(std::io::stderr)
        .init();

    if let Err(e) = Cli::run() {
        print_error(&e.to_string());
        std::process::exit(1);
    }
}
