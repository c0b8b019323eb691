use anyhow::Context;
use attendance::SetupContext;
use attendance::cli::reset::{
    confirm_reset, print_reset_warning, read_confirmation, reset_database,
};
use attendance::cli::setup::setup_database;
use attendance::cli::{Action, Cli};
use attendance_config::SetupConfig;
use attendance_observability::init_basic_console_logging;
use clap::Parser;
use dotenvy::dotenv;
use std::process::ExitCode;

#[tokio::main(flavor = "current_thread")]
async fn main() -> ExitCode {
    dotenv().ok();
    init_basic_console_logging();

    let cli = Cli::parse();

    let result = match cli.action() {
        Action::Setup => handle_setup().await,
        Action::Reset => handle_reset().await,
    };

    match result {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            eprintln!("\n✗ {e:?}");
            ExitCode::FAILURE
        }
    }
}

async fn connect() -> anyhow::Result<SetupContext> {
    let config = SetupConfig::from_env().context("Failed to load configuration")?;
    SetupContext::connect(config)
        .await
        .context("Failed to connect to database")
}

async fn handle_setup() -> anyhow::Result<()> {
    let ctx = connect().await?;
    setup_database(&ctx).await.context("Error during setup")?;
    println!("\nYou can now start the attendance application.");
    Ok(())
}

async fn handle_reset() -> anyhow::Result<()> {
    print_reset_warning();
    let response = read_confirmation()?;

    // Declining must not require a reachable database.
    if !confirm_reset(&response) {
        println!("Reset cancelled.");
        return Ok(());
    }

    let ctx = connect().await?;
    reset_database(&ctx, &response)
        .await
        .context("Error resetting database")?;
    println!("\nYou can now start the attendance application.");
    Ok(())
}
