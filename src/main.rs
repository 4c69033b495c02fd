mod display;

use champion_codex::api::transport::Transport;
use champion_codex::config::Config;
use champion_codex::error::AppError;
use champion_codex::view::catalog::{all_tags, filter_catalog, translate_role, CHAMPIONS_PER_PAGE};
use champion_codex::{ChampionClient, ChampionView};
use clap::{Parser, Subcommand};
use display::output::{
    display_catalog, display_champion, display_error, display_info, display_role_stats,
};
use indicatif::ProgressBar;
use std::time::Duration;

#[derive(Parser, Debug)]
#[command(name = "Champion Codex")]
#[command(about = "Browse champions, their abilities and voice lines", long_about = None)]
struct Args {
    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// List champions, optionally filtered
    List {
        /// Case-insensitive part of the champion name
        #[arg(short, long, default_value = "")]
        search: String,

        /// Role tag, e.g. Mage or Fighter
        #[arg(short, long, default_value = "")]
        tag: String,

        /// Page number, starting at 1
        #[arg(short, long, default_value = "1")]
        page: usize,
    },

    /// Show one champion (name in any casing)
    Show {
        id: String,

        /// Voice line page, starting at 1
        #[arg(short, long, default_value = "1")]
        quotes_page: usize,
    },

    /// Per-role popularity and win rate
    Roles {
        /// Stats site slug, e.g. ahri
        slug: String,
    },
}

fn main() {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("warn")).init();

    let args = Args::parse();

    if let Err(e) = run(args) {
        display_error(&e.to_string());
        std::process::exit(1);
    }
}

fn run(args: Args) -> Result<(), AppError> {
    let config = Config::from_env()?;
    let client = ChampionClient::new(config);

    match args.command {
        Command::List { search, tag, page } => list(&client, &search, &tag, page),
        Command::Show { id, quotes_page } => show(&client, &id, quotes_page),
        Command::Roles { slug } => {
            let stats = with_spinner(&format!("Fetching role stats for {}", slug), || {
                client.fetch_role_stats(&slug)
            });
            display_role_stats(&slug, &stats);
            Ok(())
        }
    }
}

fn list<T: Transport>(
    client: &ChampionClient<T>,
    search: &str,
    tag: &str,
    page: usize,
) -> Result<(), AppError> {
    let champions = with_spinner("Fetching champions", || client.fetch_catalog());
    if champions.is_empty() {
        return Err(AppError::Unavailable("The champion list".to_string()));
    }

    let tags: Vec<_> = all_tags(&champions)
        .iter()
        .map(|t| format!("{} ({})", t, translate_role(t)))
        .collect();
    display_info(&format!("Roles: {}", tags.join(", ")));

    let filtered = filter_catalog(&champions, search, tag);
    display_catalog(&filtered, page.saturating_sub(1), CHAMPIONS_PER_PAGE);
    Ok(())
}

fn show<T: Transport>(
    client: &ChampionClient<T>,
    id: &str,
    quotes_page: usize,
) -> Result<(), AppError> {
    let view = with_spinner(&format!("Fetching {}", id), || {
        ChampionView::assemble(client, Some(id))
    })
    .ok_or_else(|| AppError::ChampionNotFound(id.to_string()))?;

    display_champion(&view, client.config(), quotes_page.saturating_sub(1));
    Ok(())
}

fn with_spinner<R>(message: &str, work: impl FnOnce() -> R) -> R {
    let pb = ProgressBar::new_spinner();
    pb.set_message(message.to_string());
    pb.enable_steady_tick(Duration::from_millis(100));
    let result = work();
    pb.finish_and_clear();
    result
}
