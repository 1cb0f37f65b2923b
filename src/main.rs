#[tokio::main]
async fn main() -> swaebot::error::Result<()> {
    env_logger::Builder::from_env(
        env_logger::Env::default().default_filter_or("swaebot=info,serenity=warn"),
    )
    .init();
    log::info!("Starting SwaeBot Discord bot");

    match swaebot::run().await {
        Ok(()) => {
            log::info!("Bot shut down successfully");
            Ok(())
        }
        Err(e) => {
            log::error!("Bot encountered an error: {e}");
            Err(e)
        }
    }
}
