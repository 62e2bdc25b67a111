use std::path::PathBuf;

use anka_config::{Config, OutputFormat};
use anka_numerology::{
    ALL_PLANES, BirthProfile, CoreNumbers, Gender, LetterFilter, LoshuGrid, core_numbers,
    date_digits, decode_name, karmic_debt, kua_from_date, loshu_grid, mulank, parse_date,
    reduce_to_compound, reduce_to_digit, reduce_to_final,
};
use anka_rs::{NumerologyReading, ReportContext, reading, reading_from_config};
use anyhow::{Context, Result, bail};
use chrono::{Datelike, Local, NaiveDate};
use clap::{Parser, Subcommand};
use tracing::{debug, info};
use tracing_subscriber::EnvFilter;

#[derive(Parser)]
#[command(name = "anka", about = "Anka numerology CLI")]
struct Cli {
    /// Config file (defaults to ~/.config/anka/config.toml)
    #[arg(long, global = true, env = "ANKA_CONFIG")]
    config: Option<PathBuf>,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Reduce a number (final, compound, single digit, karmic debt)
    Reduce {
        /// Non-negative integer
        n: u32,
    },
    /// Letter sum of a name
    Name {
        /// Name text
        text: String,
        /// Letters to count: all, vowels, consonants
        #[arg(long, default_value = "all")]
        filter: String,
    },
    /// The six core numbers
    Core {
        /// Full name
        #[arg(long)]
        name: String,
        /// Date of birth (YYYY-MM-DD)
        #[arg(long)]
        dob: String,
        /// Year for the personal year (default: config, then current year)
        #[arg(long)]
        year: Option<i32>,
    },
    /// Mulank (root number) from the birth day
    Mulank {
        /// Date of birth (YYYY-MM-DD)
        #[arg(long)]
        dob: String,
    },
    /// Kua number, element and directions
    Kua {
        /// Date of birth (YYYY-MM-DD)
        #[arg(long)]
        dob: String,
        /// Male, Female or Other
        #[arg(long)]
        gender: String,
    },
    /// Loshu grid with missing/overloaded digits and planes
    Loshu {
        /// Date of birth (YYYY-MM-DD)
        #[arg(long)]
        dob: String,
        /// Male, Female or Other
        #[arg(long)]
        gender: String,
    },
    /// Full reading for birth data or a saved profile
    Reading {
        /// Full name (requires --dob and --gender)
        #[arg(long, requires_all = ["dob", "gender"], conflicts_with = "profile")]
        name: Option<String>,
        /// Date of birth (YYYY-MM-DD)
        #[arg(long)]
        dob: Option<String>,
        /// Male, Female or Other
        #[arg(long)]
        gender: Option<String>,
        /// Saved profile name (default profile if omitted)
        #[arg(long)]
        profile: Option<String>,
        /// Year for the personal year
        #[arg(long)]
        year: Option<i32>,
        /// Print the report-service context as JSON
        #[arg(long)]
        json: bool,
    },
    /// Manage saved birth profiles
    Profile {
        #[command(subcommand)]
        action: ProfileAction,
    },
}

#[derive(Subcommand)]
enum ProfileAction {
    /// Save a profile
    Add {
        /// Profile key
        key: String,
        /// Full name
        #[arg(long)]
        name: String,
        /// Date of birth (YYYY-MM-DD)
        #[arg(long)]
        dob: String,
        /// Male, Female or Other
        #[arg(long)]
        gender: String,
    },
    /// Delete a profile
    Remove {
        /// Profile key
        key: String,
    },
    /// List saved profiles
    List,
    /// Set the default profile
    Default {
        /// Profile key
        key: String,
    },
}

fn init_tracing() {
    let filter = EnvFilter::try_from_env("ANKA_LOG").unwrap_or_else(|_| EnvFilter::new("warn"));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .init();
}

fn load_config(path: Option<&PathBuf>) -> Result<Config> {
    let config = match path {
        Some(p) => Config::load_from(p),
        None => Config::load(),
    };
    config.context("Failed to load config")
}

fn save_config(config: &Config, path: Option<&PathBuf>) -> Result<()> {
    let saved = match path {
        Some(p) => config.save_to(p),
        None => config.save(),
    };
    saved.context("Failed to save config")
}

fn parse_gender(s: &str) -> Gender {
    // FromStr for Gender is infallible.
    s.parse().unwrap_or(Gender::Other)
}

fn parse_filter(s: &str) -> Result<LetterFilter> {
    match s.to_lowercase().as_str() {
        "all" => Ok(LetterFilter::All),
        "vowels" | "vowel" => Ok(LetterFilter::VowelsOnly),
        "consonants" | "consonant" => Ok(LetterFilter::ConsonantsOnly),
        _ => bail!("Invalid filter: {s} (valid: all, vowels, consonants)"),
    }
}

fn parse_profile(name: &str, dob: &str, gender: &str) -> Result<BirthProfile> {
    BirthProfile::parse(name, dob, parse_gender(gender)).context("Invalid birth data")
}

fn resolve_year(config: &Config, year: Option<i32>) -> i32 {
    year.or_else(|| config.reference_year_from_env())
        .unwrap_or_else(current_year)
}

fn current_year() -> i32 {
    Local::now().year()
}

/// Loshu grid from birth data alone; the name plays no part.
fn grid_for_date(date: NaiveDate, gender: Gender) -> LoshuGrid {
    let life_path = reduce_to_final(date_digits(date).into_iter().sum());
    let kua = kua_from_date(date, gender);
    loshu_grid(date, mulank(date), life_path, kua.value())
}

fn print_core(n: &CoreNumbers) {
    for d in n.details() {
        let mut line = format!("{:<14} {:>2}", d.kind.name(), d.value);
        if d.compound != d.value {
            line.push_str(&format!("  (compound {})", d.compound));
        }
        if let Some(debt) = d.karmic_debt {
            line.push_str(&format!("  karmic debt {debt}"));
        }
        println!("{line}");
    }
}

fn print_grid(grid: &LoshuGrid) {
    for row in &grid.grid {
        let cells: Vec<String> = row
            .iter()
            .map(|c| format!("{:^5}", c.as_deref().unwrap_or("-")))
            .collect();
        println!("|{}|", cells.join("|"));
    }
    println!("Missing:    {:?}", grid.missing_numbers);
    println!("Overloaded: {:?}", grid.overloaded_numbers);
    let present = grid.present_numbers();
    for plane in ALL_PLANES {
        let mark = if anka_numerology::is_plane_complete(plane, &present) {
            "complete"
        } else {
            "incomplete"
        };
        println!("{:<16} {:?} {mark}", plane.name(), plane.digits());
    }
}

fn print_reading(r: &NumerologyReading) {
    let p = &r.profile;
    println!(
        "{} - {} ({})",
        p.full_name,
        p.date_of_birth.format(anka_numerology::DATE_FORMAT),
        p.gender
    );
    println!();
    print_core(&r.core_numbers);
    println!("{:<14} {:>2}", "Mulank", r.mulank);
    println!(
        "{:<14} {:>2}  ({}, {} group)",
        "Kua",
        r.kua.value(),
        r.kua.element().name(),
        r.kua.group().name()
    );
    println!();
    print_grid(&r.loshu);
}

fn main() -> Result<()> {
    init_tracing();
    let cli = Cli::parse();
    let config_path = cli.config.as_ref();

    match cli.command {
        Commands::Reduce { n } => {
            let compound = reduce_to_compound(n);
            println!("Final:        {}", reduce_to_final(n));
            println!("Compound:     {compound}");
            println!("Single digit: {}", reduce_to_digit(n));
            match karmic_debt(compound) {
                Some(d) => println!("Karmic debt:  {d}"),
                None => println!("Karmic debt:  none"),
            }
        }

        Commands::Name { text, filter } => {
            let filter = parse_filter(&filter)?;
            let sum = decode_name(&text, filter);
            println!(
                "{} sum: {sum} -> {} (compound {})",
                filter.name(),
                reduce_to_final(sum),
                reduce_to_compound(sum)
            );
        }

        Commands::Core { name, dob, year } => {
            let config = load_config(config_path)?;
            // Core numbers do not depend on gender.
            let profile = BirthProfile::parse(name, &dob, Gender::Other)
                .context("Invalid birth data")?;
            let year = resolve_year(&config, year);
            debug!(year, "personal year reference");
            print_core(&core_numbers(&profile, year));
        }

        Commands::Mulank { dob } => {
            let date = parse_date(&dob).context("Invalid date of birth")?;
            println!("Mulank: {}", mulank(date));
        }

        Commands::Kua { dob, gender } => {
            let date = parse_date(&dob).context("Invalid date of birth")?;
            let kua = kua_from_date(date, parse_gender(&gender));
            let directions: Vec<&str> = kua
                .group()
                .favorable_directions()
                .iter()
                .map(|d| d.abbrev())
                .collect();
            println!("Kua: {kua}");
            println!("Element: {}", kua.element().name());
            println!("Group: {} ({})", kua.group().name(), directions.join(", "));
            println!("Success direction: {}", kua.success_direction().abbrev());
        }

        Commands::Loshu { dob, gender } => {
            let date = parse_date(&dob).context("Invalid date of birth")?;
            print_grid(&grid_for_date(date, parse_gender(&gender)));
        }

        Commands::Reading {
            name,
            dob,
            gender,
            profile,
            year,
            json,
        } => {
            let config = load_config(config_path)?;
            let r = match (name, dob, gender) {
                (Some(name), Some(dob), Some(gender)) => {
                    let p = parse_profile(&name, &dob, &gender)?;
                    reading(&p, resolve_year(&config, year))
                }
                _ => reading_from_config(&config, profile.as_deref(), year)
                    .context("Could not compute reading from config")?,
            };
            if json || config.output == OutputFormat::Json {
                let ctx = ReportContext::from_reading(&r).to_json()?;
                println!("{}", serde_json::to_string_pretty(&ctx)?);
            } else {
                print_reading(&r);
            }
        }

        Commands::Profile { action } => {
            let mut config = load_config(config_path)?;
            match action {
                ProfileAction::Add {
                    key,
                    name,
                    dob,
                    gender,
                } => {
                    let p = parse_profile(&name, &dob, &gender)?;
                    config.add_profile(key.clone(), p);
                    save_config(&config, config_path)?;
                    info!(profile = %key, "saved profile");
                    println!("Saved profile '{key}'");
                }
                ProfileAction::Remove { key } => {
                    if !config.remove_profile(&key) {
                        bail!("No profile named '{key}'");
                    }
                    save_config(&config, config_path)?;
                    println!("Removed profile '{key}'");
                }
                ProfileAction::List => {
                    if config.profiles.is_empty() {
                        println!("No saved profiles");
                    }
                    for (key, p) in &config.profiles {
                        let mark = if config.default_profile.as_deref() == Some(key.as_str()) {
                            "*"
                        } else {
                            " "
                        };
                        println!(
                            "{mark} {key}: {} {} {}",
                            p.full_name,
                            p.date_of_birth.format(anka_numerology::DATE_FORMAT),
                            p.gender
                        );
                    }
                }
                ProfileAction::Default { key } => {
                    config.set_default_profile(&key)?;
                    save_config(&config, config_path)?;
                    println!("Default profile: {key}");
                }
            }
        }
    }

    Ok(())
}
