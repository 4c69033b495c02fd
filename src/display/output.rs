use champion_codex::api::endpoints;
use champion_codex::api::models::{ChampionSummary, RoleStat};
use champion_codex::config::Config;
use champion_codex::view::catalog::{paginate, page_count, translate_role};
use champion_codex::view::detail::{audio_file_stem, ChampionView, QUOTES_PER_PAGE};
use champion_codex::view::stats::stat_bars;
use colored::*;
use tabled::{settings::Style, Table, Tabled};

const BAR_WIDTH: usize = 24;

#[derive(Tabled)]
struct ChampionRow {
    #[tabled(rename = "#")]
    number: String,
    champion: String,
    title: String,
    roles: String,
}

#[derive(Tabled)]
struct RoleRow {
    role: String,
    popularity: String,
    win_rate: String,
}

#[derive(Tabled)]
struct QuoteRow {
    #[tabled(rename = "#")]
    number: String,
    line: String,
    file: String,
}

pub fn display_catalog(champions: &[&ChampionSummary], page: usize, per_page: usize) {
    let pages = page_count(champions.len(), per_page);

    println!("\n{}", "📖 CHAMPIONS".bold().cyan());
    println!("{}\n", "=".repeat(60).cyan());

    if champions.is_empty() {
        println!("{}", "No champions match the current search".yellow());
        return;
    }

    let shown = paginate(champions, page, per_page);
    if shown.is_empty() {
        println!("{}", format!("Page {} is out of range (1-{})", page + 1, pages).yellow());
        return;
    }

    let rows: Vec<ChampionRow> = shown
        .iter()
        .enumerate()
        .map(|(idx, champ)| ChampionRow {
            number: format!("{}", page * per_page + idx + 1),
            champion: champ.name.clone(),
            title: champ.title.clone(),
            roles: champ
                .tags
                .iter()
                .map(|t| translate_role(t))
                .collect::<Vec<_>>()
                .join(", "),
        })
        .collect();

    let mut table = Table::new(rows);
    table.with(Style::rounded());
    println!("{}", table);
    println!(
        "\nPage {}/{} ({} champions)\n",
        page + 1,
        pages,
        champions.len()
    );
}

pub fn display_champion(view: &ChampionView, config: &Config, quotes_page: usize) {
    let detail = &view.detail;

    println!(
        "\n{}",
        format!("🏆 {} - {}", detail.name, detail.title).bold().cyan()
    );
    println!("{}\n", "=".repeat(60).cyan());

    let roles: Vec<_> = detail.tags.iter().map(|t| translate_role(t)).collect();
    if !roles.is_empty() {
        println!("{} {}", "Roles:".bold(), roles.join(", "));
    }
    println!("{} {}\n", "Art:".bold(), endpoints::loading_art_url(config, &detail.id));

    if !detail.lore.is_empty() {
        println!("{}", "Lore".bold().yellow());
        println!("{}\n", detail.lore);
    }

    if !detail.passive.name.is_empty() {
        println!("{}", format!("Passive - {}", detail.passive.name).bold().yellow());
        println!("  {}", detail.passive.description);
        if !detail.passive.image.full.is_empty() {
            println!(
                "  {}",
                endpoints::passive_icon_url(config, &detail.passive.image.full).dimmed()
            );
        }
        println!();
    }

    for (slot, spell) in view.spell_slots() {
        println!("{}", format!("{} - {}", slot, spell.name).bold().yellow());
        println!("  {}", spell.description);
        if !spell.image.full.is_empty() {
            println!("  {}", endpoints::spell_icon_url(config, &spell.image.full).dimmed());
        }
        println!();
    }

    display_stats(view);

    if !detail.skins.is_empty() {
        println!("{}", "Skins".bold().yellow());
        for skin in &detail.skins {
            println!(
                "  • {} {}",
                skin.name,
                endpoints::splash_art_url(config, &detail.id, skin.num).dimmed()
            );
        }
        println!();
    }

    display_quotes(view, quotes_page);
}

fn display_stats(view: &ChampionView) {
    let bars = stat_bars(&view.detail.stats);
    if bars.is_empty() {
        return;
    }

    println!("{}", "Stats".bold().yellow());
    for bar in bars {
        let filled = ((bar.percentage() / 100.0) * BAR_WIDTH as f64).round() as usize;
        println!(
            "  {} {:<26} {}{} {}",
            bar.icon,
            bar.label,
            "█".repeat(filled).yellow(),
            "░".repeat(BAR_WIDTH - filled).dimmed(),
            bar.value
        );
    }
    println!();
}

fn display_quotes(view: &ChampionView, page: usize) {
    println!("{}", "🔊 Voice lines".bold().yellow());

    if view.quotes.is_empty() {
        println!("{}\n", "Voice lines are unavailable for this champion".yellow());
        return;
    }

    let pages = page_count(view.quotes.len(), QUOTES_PER_PAGE);
    let shown = paginate(&view.quotes, page, QUOTES_PER_PAGE);
    if shown.is_empty() {
        println!("{}\n", format!("Page {} is out of range (1-{})", page + 1, pages).yellow());
        return;
    }

    let rows: Vec<QuoteRow> = shown
        .iter()
        .enumerate()
        .map(|(idx, quote)| QuoteRow {
            number: format!("{}", page * QUOTES_PER_PAGE + idx + 1),
            line: quote.text.clone(),
            file: audio_file_stem(&quote.audio).to_string(),
        })
        .collect();

    let mut table = Table::new(rows);
    table.with(Style::rounded());
    println!("{}", table);
    println!("\nPage {}/{}\n", page + 1, pages);
}

pub fn display_role_stats(slug: &str, stats: &[RoleStat]) {
    println!("\n{}", format!("📈 Role stats for {}", slug).bold().cyan());
    println!("{}\n", "=".repeat(60).cyan());

    if stats.is_empty() {
        println!("{}", "Role stats are unavailable right now".yellow());
        return;
    }

    let rows: Vec<RoleRow> = stats
        .iter()
        .map(|s| RoleRow {
            role: s.role.clone(),
            popularity: format!("{:.1}%", s.popularity),
            win_rate: format!("{:.1}%", s.win_rate),
        })
        .collect();

    let mut table = Table::new(rows);
    table.with(Style::rounded());
    println!("{}\n", table);
}

pub fn display_error(error: &str) {
    eprintln!("{} {}", "❌ Error:".red().bold(), error);
}

pub fn display_info(message: &str) {
    println!("{} {}", "ℹ️".cyan(), message);
}
