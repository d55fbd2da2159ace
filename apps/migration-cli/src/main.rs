use clap::Parser;
use migration::{migrate, MigrationCommand};
use sea_orm::Database;

#[derive(Parser)]
#[command(name = "migration-cli")]
#[command(about = "College backend database migration tool")]
struct Args {
    /// up | down | fresh | reset | refresh | status
    #[arg(value_parser = parse_command)]
    command: MigrationCommand,

    /// Target database; a file-backed SQLite URL also works.
    #[arg(long, env = "DATABASE_URL", hide_env_values = true)]
    database_url: String,
}

fn parse_command(raw: &str) -> Result<MigrationCommand, String> {
    raw.parse()
}

#[tokio::main]
async fn main() {
    tracing_subscriber::fmt()
        .with_writer(std::io::stdout)
        .without_time()
        .with_target(false)
        .with_env_filter("migration=info,sqlx=warn")
        .init();

    let args = Args::parse();

    if args.database_url.contains(":memory:") {
        eprintln!("In-memory SQLite is discarded when the command exits; use a file or Postgres URL.");
        std::process::exit(2);
    }

    let db = match Database::connect(&args.database_url).await {
        Ok(db) => db,
        Err(e) => {
            eprintln!("Could not connect: {e}");
            std::process::exit(1);
        }
    };

    if let Err(e) = migrate(&db, args.command).await {
        eprintln!("Migration failed: {e}");
        std::process::exit(1);
    }
}
