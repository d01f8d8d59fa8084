use clap::Parser;

mod commands;

use epsilon::{
    user_error,
    utils::{context, prelude::*},
};

#[derive(Parser)]
#[command(name = "content-cli")]
#[command(about = "Administration des collections de contenu Epsilon", long_about = None)]
#[command(version)]
struct Cli {
    /// Dossier des collections JSON (défaut : configuration)
    #[arg(long, global = true, env = "PATH_EPSILON_DATA")]
    root: Option<std::path::PathBuf>,

    #[command(subcommand)]
    command: commands::ContentCommands,
}

#[tokio::main]
async fn main() -> Result<()> {
    if let Err(e) = AppConfig::init() {
        eprintln!("❌ CRITICAL ERROR: Impossible d'initialiser la configuration.");
        eprintln!("   Détails : {}", e);
        std::process::exit(1);
    }
    context::init_logging();

    let cli = Cli::parse();
    debug!(version = env!("CARGO_PKG_VERSION"), "Démarrage du CLI");

    if let Err(e) = commands::handle(cli.root, cli.command).await {
        user_error!("CMD_FAIL", "{}", e);
        std::process::exit(1);
    }

    debug!("Fin de l'exécution du CLI");
    Ok(())
}
