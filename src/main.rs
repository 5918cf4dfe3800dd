use clap::Parser;

use bookshelf_rs::cli::{self, Cli, Commands, execute_command};
use bookshelf_rs::config::Environment;
use bookshelf_rs::server::Server;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();

    // An explicit --env wins over whatever BOOKSHELF_APP_ENV says, and it
    // has to be in place before the config loader runs.
    if let Some(env) = &cli.env {
        let env: Environment = env.clone().into();
        unsafe {
            std::env::set_var(Environment::ENV_VAR, env.as_str());
        }
    }

    let settings = cli::load_and_merge_config(&cli)?;
    cli::init_logger_from_settings(&settings)?;

    execute_command(&cli, settings.clone())
        .await
        .map_err(|e| anyhow::anyhow!("{}", e))?;

    let should_serve = match &cli.command {
        Some(Commands::Serve { dry_run, .. }) => !dry_run,
        None => true,
    };

    if should_serve {
        Server::new(settings).run().await?;
    }

    Ok(())
}
