//! Pokedex Engine - command line entry point.
//!
//! ```text
//! pokedex-engine list [page]
//! pokedex-engine show <id-or-name>
//! pokedex-engine search <query>
//! ```
//!
//! Results are printed to stdout as JSON; logs go to stderr.

use pokedex_engine::infrastructure::config::PokeApiConfig;
use pokedex_engine::App;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

const USAGE: &str = "usage: pokedex-engine <list [page] | show <id-or-name> | search <query>>";

#[derive(Debug, PartialEq, Eq)]
enum Command {
    List { page: i64 },
    Show { identifier: String },
    Search { query: String },
}

impl Command {
    fn parse(args: &[String]) -> anyhow::Result<Self> {
        let (name, rest) = args
            .split_first()
            .ok_or_else(|| anyhow::anyhow!(USAGE))?;

        match name.as_str() {
            "list" => {
                let page = match rest.first() {
                    Some(raw) => raw
                        .parse()
                        .map_err(|_| anyhow::anyhow!("page must be a number, got {raw:?}"))?,
                    None => 1,
                };
                Ok(Self::List { page })
            }
            "show" if !rest.is_empty() => Ok(Self::Show {
                identifier: rest.join(" "),
            }),
            "search" => Ok(Self::Search {
                query: rest.join(" "),
            }),
            _ => anyhow::bail!(USAGE),
        }
    }
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    load_dotenv_from_repo_root();

    // Logs to stderr so stdout stays machine-readable
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "pokedex_engine=info".into()),
        )
        .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
        .init();

    let args: Vec<String> = std::env::args().skip(1).collect();
    let command = Command::parse(&args)?;

    let config = PokeApiConfig::from_env();
    tracing::info!(
        base_url = %config.base_url,
        cache_ttl_secs = config.cache_ttl.as_secs(),
        max_retries = config.retry.max_retries,
        "Starting Pokedex Engine"
    );
    let app = App::from_config(&config);
    let pokemon = &app.use_cases.pokemon;

    let output = match command {
        Command::List { page } => {
            serde_json::to_string_pretty(&pokemon.list.execute_page(page).await)?
        }
        Command::Show { identifier } => {
            let Some(detail) = pokemon.detail.execute_by_identifier(&identifier).await else {
                anyhow::bail!("Pokemon not found: {identifier}");
            };
            serde_json::to_string_pretty(&detail)?
        }
        Command::Search { query } => {
            serde_json::to_string_pretty(&pokemon.search.execute(&query).await)?
        }
    };

    println!("{output}");
    Ok(())
}

fn load_dotenv_from_repo_root() {
    let repo_root = std::path::Path::new(env!("CARGO_MANIFEST_DIR"))
        .join("..")
        .join("..");

    // Prefer local overrides.
    for filename in [".env.local", ".env"] {
        let path = repo_root.join(filename);
        if path.exists() {
            let _ = dotenvy::from_path(path);
        }
    }
    let _ = dotenvy::dotenv();
}
