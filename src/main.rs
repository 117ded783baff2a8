mod cli;

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    env_logger::init();
    lfmtrack::config::load_env();

    cli::run().await?;
    Ok(())
}
