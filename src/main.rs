use clap::{Parser, Subcommand};
use dota_heroes::api::HeroStatsApi;
use dota_heroes::assets::AssetUrls;
use dota_heroes::config::{parse_timeout, Config};
use dota_heroes::json::{normalize, read_hero_stats};
use dota_heroes::model::{Hero, HeroAttribute};
use dota_heroes::roster::{HeroQuery, Roster, SortOrder};
use dota_heroes::stats::DerivedStats;
use dota_heroes::HeroError;
use serde_json::Value;
use std::path::{Path, PathBuf};

#[derive(Parser)]
#[command(author, version, about, long_about = None)]
struct Cli {
    #[command(subcommand)]
    command: Commands,

    /// Read heroes from a saved heroStats JSON file instead of the API
    #[arg(short, long, global = true)]
    input: Option<PathBuf>,

    /// API host (overrides DOTA_API_BASE_URL)
    #[arg(long, global = true)]
    api_base_url: Option<String>,

    /// Image host (overrides DOTA_IMAGE_BASE_URL)
    #[arg(long, global = true)]
    image_base_url: Option<String>,

    /// Request timeout in seconds (overrides DOTA_API_TIMEOUT_SECS)
    #[arg(long, global = true)]
    timeout: Option<String>,

    /// Verbose output
    #[arg(short, long, global = true)]
    verbose: bool,
}

#[derive(Subcommand)]
enum Commands {
    /// List heroes, optionally filtered and sorted
    List {
        /// Only heroes with this primary attribute (str, agi, int, all)
        #[arg(short, long)]
        attr: Option<HeroAttribute>,

        /// Case-insensitive substring of the hero name
        #[arg(short, long)]
        search: Option<String>,

        /// Sort names Z to A
        #[arg(short, long)]
        desc: bool,
    },

    /// Show one hero with derived stats and asset URLs
    Show {
        /// Hero id
        id: u32,
    },

    /// Write every hero as camelCase JSON
    Export {
        /// Output file (stdout if omitted)
        #[arg(short, long)]
        output: Option<PathBuf>,
    },

    /// Print the camelCase-normalized form of any JSON file
    Normalize {
        /// Input JSON file
        file: PathBuf,
    },
}

fn main() -> Result<(), Box<dyn std::error::Error>> {
    let cli = Cli::parse();
    init_logging(cli.verbose);

    match &cli.command {
        Commands::List { attr, search, desc } => {
            let query = HeroQuery {
                attribute: *attr,
                search: search.clone().unwrap_or_default(),
                order: if *desc { SortOrder::Descending } else { SortOrder::Ascending },
            };
            let roster = Roster::new(load_heroes(&cli)?);
            list_command(&roster, &query);
        }
        Commands::Show { id } => {
            let config = build_config(&cli)?;
            let roster = Roster::new(load_heroes(&cli)?);
            let hero = roster
                .get(*id)
                .ok_or_else(|| format!("No hero with id {}", id))?;
            show_command(hero, &AssetUrls::new(config.image_base_url.as_str()));
        }
        Commands::Export { output } => {
            let heroes = load_heroes(&cli)?;
            export_command(&heroes, output.as_deref())?;
        }
        Commands::Normalize { file } => {
            let data = std::fs::read_to_string(file)?;
            let value: Value = serde_json::from_str(&data)?;
            println!("{}", serde_json::to_string_pretty(&normalize(&value))?);
        }
    }

    Ok(())
}

fn init_logging(verbose: bool) {
    let default_filter = if verbose { "debug" } else { "warn" };
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or(default_filter))
        .format_timestamp(None)
        .init();
}

fn build_config(cli: &Cli) -> Result<Config, HeroError> {
    let mut config = Config::from_env()?;
    if let Some(url) = &cli.api_base_url {
        config.api_base_url = url.clone();
    }
    if let Some(url) = &cli.image_base_url {
        config.image_base_url = url.clone();
    }
    if let Some(secs) = &cli.timeout {
        config.timeout = parse_timeout(secs)?;
    }
    config.validate()?;
    Ok(config)
}

fn load_heroes(cli: &Cli) -> Result<Vec<Hero>, HeroError> {
    let heroes = if let Some(path) = &cli.input {
        log::info!("Reading heroes from {}", path.display());
        let data = std::fs::read_to_string(path)?;
        read_hero_stats(&data)?
    } else {
        let config = build_config(cli)?;
        log::info!("Fetching heroes from {}", config.api_base_url);
        HeroStatsApi::from_config(&config)?.get_hero_stats()?
    };

    log::info!("Loaded {} heroes", heroes.len());
    Ok(heroes)
}

fn list_command(roster: &Roster, query: &HeroQuery) {
    let heroes = roster.query(query);
    for hero in &heroes {
        println!(
            "{:>4}  {:<22} {:<13} {}",
            hero.id.map(|id| id.to_string()).unwrap_or_else(|| "-".to_string()),
            hero.display_name(),
            hero.primary_attr.map(|a| a.title()).unwrap_or("-"),
            hero.attack_type.map(|a| a.wire_token()).unwrap_or("-"),
        );
    }
    println!("\n{} of {} heroes", heroes.len(), roster.len());
}

fn show_command(hero: &Hero, urls: &AssetUrls) {
    println!("=== {} ===", hero.display_name());
    if let Some(id) = hero.id {
        println!("Id: {}", id);
    }
    if let Some(name) = &hero.name {
        println!("Internal name: {}", name);
    }
    if let Some(attr) = hero.primary_attr {
        println!("Attribute: {}", attr.title());
    }
    if let Some(attack) = hero.attack_type {
        println!("Attack type: {}", attack.wire_token().to_uppercase());
    }
    let roles: Vec<&str> = hero.recognized_roles().map(|r| r.wire_token()).collect();
    println!("Roles: {}", roles.join(", "));
    println!();

    println!("=== Attributes ===");
    print_attribute("Strength", hero.base_str, hero.str_gain);
    print_attribute("Agility", hero.base_agi, hero.agi_gain);
    print_attribute("Intelligence", hero.base_int, hero.int_gain);
    println!();

    let stats = DerivedStats::of(hero);
    println!("=== Stats ===");
    println!("Health: {:.0} (+{:.1}/s)", stats.health, stats.health_regen);
    println!("Mana: {:.0} (+{:.1}/s)", stats.mana, stats.mana_regen);
    println!("Armor: {:.1}", stats.armor);
    println!("Damage: {:.0}-{:.0}", stats.attack_min, stats.attack_max);
    print_optional("Attack range", hero.attack_range);
    print_optional("Attack rate", hero.attack_rate);
    print_optional("Move speed", hero.move_speed);
    print_optional("Magic resistance %", hero.base_mr);
    if let (Some(day), Some(night)) = (hero.day_vision, hero.night_vision) {
        println!("Vision: {} / {}", day, night);
    }
    println!();

    println!("=== Assets ===");
    println!("Image: {}", urls.image_url(hero));
    println!("Icon: {}", urls.icon_url(hero));
    println!("Portrait: {}", urls.portrait_image_url(hero));
    println!("Video: {}", urls.portrait_video_url(hero));
}

fn print_attribute(label: &str, base: Option<f64>, gain: Option<f64>) {
    match (base, gain) {
        (Some(base), Some(gain)) => println!("{}: {} (+{})", label, base, gain),
        (Some(base), None) => println!("{}: {}", label, base),
        _ => {}
    }
}

fn print_optional(label: &str, value: Option<f64>) {
    if let Some(v) = value {
        println!("{}: {}", label, v);
    }
}

fn export_command(heroes: &[Hero], output: Option<&Path>) -> Result<(), Box<dyn std::error::Error>> {
    let json = Value::Array(heroes.iter().map(Hero::to_json).collect());
    let text = serde_json::to_string_pretty(&json)?;

    match output {
        Some(path) => {
            if let Some(parent) = path.parent() {
                if !parent.as_os_str().is_empty() {
                    std::fs::create_dir_all(parent)?;
                }
            }
            std::fs::write(path, text)?;
            println!("✓ Wrote {} heroes to {}", heroes.len(), path.display());
        }
        None => println!("{}", text),
    }
    Ok(())
}
