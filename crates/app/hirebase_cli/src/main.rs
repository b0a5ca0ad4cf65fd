// Import and re-export the `error` module
pub use self::error::{Error, Result};
mod error;

use clap::Parser;
use cli::{Cli, Commands};
use commands::Context;

mod cli;
mod commands;
mod logging;

#[tokio::main]
async fn main() -> Result<()> {
    if let Err(e) = run().await {
        log::error!("{}", e);
        std::process::exit(1);
    }
    Ok(())
}

async fn run() -> Result<()> {
    dotenvy::dotenv().ok();
    logging::init()?;

    let args = Cli::parse();
    if let Commands::Version = args.command {
        println!(
            "{} {} (core {})",
            env!("CARGO_PKG_NAME"),
            env!("CARGO_PKG_VERSION"),
            hirebase_core::version()
        );
        return Ok(());
    }

    let ctx = Context::new(&args)?;
    match &args.command {
        Commands::Version => {}
        Commands::Login { token, admin } => commands::session::login(&ctx, token, *admin)?,
        Commands::Logout => commands::session::logout(&ctx)?,
        Commands::Whoami => commands::session::whoami(&ctx).await?,
        Commands::Open { path } => commands::session::open(&ctx, path)?,
        Commands::Services(cmd) => commands::listings::services(&ctx, cmd).await?,
        Commands::Jobs(cmd) => commands::listings::jobs(&ctx, cmd).await?,
        Commands::GovJobs(cmd) => commands::listings::government_jobs(&ctx, cmd).await?,
        Commands::Subscriptions(cmd) => commands::account::subscriptions(&ctx, cmd).await?,
        Commands::Referrals(cmd) => commands::account::referrals(&ctx, cmd).await?,
        Commands::Withdraw => commands::account::withdraw(&ctx).await?,
        Commands::Admin(cmd) => commands::admin::run(&ctx, cmd).await?,
        Commands::Locate { address, lat, lon } => {
            let coords = lat.zip(*lon);
            commands::locate::run(&ctx, address.as_deref(), coords).await?
        }
    }

    Ok(())
}
