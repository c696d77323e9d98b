use std::io;
use std::path::{Path, PathBuf};

use anyhow::Context;
use clap::Parser;

use passforge::cli::{handlers, menu, Args, CliCommand};
use passforge::core::{Config, Vault};
use passforge::db;
use passforge::generators::PasswordGenerator;
use passforge::logging;

fn main() -> anyhow::Result<()> {
    // Load environment variables
    if Path::new(".env").exists() {
        dotenvy::dotenv().ok();
    }

    let args = Args::parse();
    let config = Config::load();

    logging::init(&config, args.verbose).context("failed to set up logging")?;
    config.log_warnings();
    log::debug!("Loaded config: {:?}", config);

    let store = config
        .resolve_store_path(args.store.clone().map(PathBuf::from))
        .display()
        .to_string();
    let db = db::init_db(&store).with_context(|| format!("failed to open store '{}'", store))?;
    let vault = Vault::new(db);

    let mut stdout = io::stdout();
    let json = args.json;

    match args.command {
        Some(CliCommand::Generate(generate)) => {
            let mut generator = PasswordGenerator::new();
            handlers::handle_generate(
                &mut stdout,
                &vault,
                &mut generator,
                config.generation_defaults(),
                &generate,
                json,
            )?;
            if generator.source().is_degraded() {
                eprintln!("⚠️ Secure random source unavailable; passwords above used a weaker generator");
            }
        }
        Some(CliCommand::Analyze { password }) => handlers::handle_analyze(&mut stdout, &password, json)?,
        Some(CliCommand::History { clear }) => handlers::handle_history(&mut stdout, &vault, clear, json)?,
        Some(CliCommand::Favorite { password }) => {
            handlers::handle_favorite(&mut stdout, &vault, &password, json)?;
        }
        Some(CliCommand::Favorites) => handlers::handle_favorites(&mut stdout, &vault, json)?,
        Some(CliCommand::Export { output }) => {
            handlers::handle_export(&mut stdout, &vault, output.as_deref(), json)?
        }
        Some(CliCommand::Menu) | None => menu::run_cli_menu(&vault, &config)?,
    }

    Ok(())
}
