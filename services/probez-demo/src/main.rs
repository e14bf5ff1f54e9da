use probez_demo::config::{Config, DemoConfig};
use probez_demo::server::run;
use probez_demo::telemetry::init_tracing;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    init_tracing();

    let config = DemoConfig::from_env()?;
    run(config).await?;
    Ok(())
}
