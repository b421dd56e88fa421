#[tokio::main]
async fn main() {
    if let Err(e) = dotpaint::run().await {
        tracing::error!(error = %e, "fatal error");
        std::process::exit(1);
    }
}
