//! Minccino, a PokéMeow companion that recommends which ball to throw.

mod data;
mod error;
mod lib;
mod log;
mod setup;
mod spawn;

use poise::serenity_prelude as serenity;

pub use data::Data;
pub use error::MinccinoError;
pub use setup::Config;

#[tokio::main]
async fn main() -> Result<(), MinccinoError> {
    let config = Config::read()?;

    // Dropping the guard stops file logging.
    let _guard = log::install_tracing(&config);

    let mut client = setup::client(config).await?;
    tracing::info!("Starting client.");
    client.start().await?;

    Ok(())
}
