use tracing::error;
use tracing_subscriber::EnvFilter;

#[tokio::main]
async fn main() {
    // Diagnostics go to stderr so the startup URL line keeps stdout to itself.
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::from_default_env()
                .add_directive("echolab_server=info".parse().unwrap())
                .add_directive("echolab_core=info".parse().unwrap()),
        )
        .with_writer(std::io::stderr)
        .init();

    if let Err(err) = echolab_server::run().await {
        error!(error = %err, "server failed to start");
        std::process::exit(1);
    }
}
