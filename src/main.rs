use tracing_subscriber::EnvFilter;

fn main() {
    // stdout carries the UCI protocol, diagnostics go to stderr
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn")))
        .with_writer(std::io::stderr)
        .init();

    tierbot::uci::run();
}
