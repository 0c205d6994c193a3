use anyhow::Result;
use tracing::debug;

use datavalid::config::{AppConfig, ConfigOverrides};
use datavalid::logging::init_logging;

#[tokio::main]
async fn main() -> Result<()> {
    let mut config = AppConfig::load().await?;
    ConfigOverrides::apply(&mut config);
    init_logging(&config.logging)?;

    debug!("datavalid demo v{}", env!("CARGO_PKG_VERSION"));

    for line in datavalid::demo::render()? {
        println!("{}", line);
    }

    Ok(())
}
