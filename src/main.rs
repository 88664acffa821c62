use clap::{ArgAction, Parser, Subcommand};
use std::io::{BufRead, Write};
use std::path::PathBuf;
use tracing_subscriber::{fmt, EnvFilter};
use unitconv::catalog::Category;
use unitconv::config::Config;
use unitconv::convert::{ConversionTable, ConvertRequest};
use unitconv::form::{format_value, ConverterState, FormEvent};

#[derive(Parser)]
#[command(name = "unitconv")]
#[command(about = "Convert lengths, weights, volumes and temperatures", long_about = None)]
struct Cli {
    /// Config file (default: ./unitconv.toml if present)
    #[arg(long, global = true)]
    config: Option<PathBuf>,

    /// Verbosity level (-v, -vv)
    #[arg(short, long, action = ArgAction::Count, global = true)]
    verbose: u8,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Convert a single value
    Convert {
        /// Value to convert, or a quantity such as "12 ft"
        #[arg(allow_hyphen_values = true)]
        value: String,

        /// Source unit (omit when VALUE carries its unit)
        from: Option<String>,

        /// Target unit
        #[arg(short, long)]
        to: String,

        /// Category the units must belong to (default: the source unit's)
        #[arg(short, long)]
        category: Option<String>,

        /// Decimals in the output
        #[arg(short, long)]
        precision: Option<usize>,

        /// Print the result as JSON
        #[arg(long)]
        json: bool,
    },

    /// List every category with its units
    Categories,

    /// List the units of one category
    Units {
        /// Category name (length, weight, volume, temp)
        category: String,
    },

    /// Print the conversion rules
    Table {
        /// Only rules of this category
        #[arg(short, long)]
        category: Option<String>,

        /// Print the rules as JSON
        #[arg(long)]
        json: bool,
    },

    /// Interactive form: read commands from stdin, print the result after each
    Session {
        /// Initial category (default from config)
        #[arg(short, long)]
        category: Option<String>,
    },
}

fn main() {
    let cli = Cli::parse();

    let filter = match cli.verbose {
        0 => EnvFilter::try_from_default_env()
            .unwrap_or_else(|_| EnvFilter::new(log_level(cli.verbose))),
        n => EnvFilter::new(log_level(n)),
    };
    fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .init();

    if let Err(e) = run(cli) {
        eprintln!("Error: {}", e);
        std::process::exit(1);
    }
}

/// Default level for a `-v` count; RUST_LOG only applies without `-v`
fn log_level(verbose: u8) -> &'static str {
    match verbose {
        0 => "warn",
        1 => "debug",
        _ => "trace",
    }
}

fn run(cli: Cli) -> Result<(), Box<dyn std::error::Error>> {
    let config = Config::discover(cli.config.as_deref())?;

    match cli.command {
        Commands::Convert {
            value,
            from,
            to,
            category,
            precision,
            json,
        } => {
            let request = ConvertRequest {
                value,
                from,
                to,
                category,
                precision,
            };
            let outcome = request.execute(&config)?;
            if json {
                println!("{}", serde_json::to_string_pretty(&outcome)?);
            } else {
                println!("{}", outcome);
            }
            Ok(())
        }
        Commands::Categories => {
            list_categories();
            Ok(())
        }
        Commands::Units { category } => list_units(&category),
        Commands::Table { category, json } => print_table(&config, category.as_deref(), json),
        Commands::Session { category } => run_session(&config, category.as_deref()),
    }
}

fn list_categories() {
    for category in Category::all() {
        let units: Vec<&str> = category.units().iter().map(|u| u.name()).collect();
        println!("{}: {}", category, units.join(", "));
    }
}

fn list_units(category: &str) -> Result<(), Box<dyn std::error::Error>> {
    let category: Category = category.parse()?;
    for unit in category.units() {
        println!("{} ({})", unit.name(), unit.symbol());
    }
    Ok(())
}

fn print_table(
    config: &Config,
    category: Option<&str>,
    json: bool,
) -> Result<(), Box<dyn std::error::Error>> {
    let table = ConversionTable::new(config.conversion.fallback);
    let rules: Vec<_> = match category {
        Some(name) => table.rules_for(name.parse()?).collect(),
        None => table.rules().iter().collect(),
    };

    if json {
        println!("{}", serde_json::to_string_pretty(&rules)?);
        return Ok(());
    }

    for rule in rules {
        println!(
            "{:>10} -> {:<10}  {}",
            rule.from.name(),
            rule.to.name(),
            rule.transform.describe()
        );
    }
    Ok(())
}

fn run_session(config: &Config, category: Option<&str>) -> Result<(), Box<dyn std::error::Error>> {
    let mut state = ConverterState::from_config(config);
    if let Some(name) = category {
        state.select_category(name.parse()?);
    }

    let stdin = std::io::stdin();
    let mut stdout = std::io::stdout();
    print_state(&mut stdout, &state)?;

    for line in stdin.lock().lines() {
        let line = line?;
        let trimmed = line.trim();
        if trimmed.is_empty() {
            continue;
        }
        if matches!(trimmed, "quit" | "exit" | "q") {
            break;
        }

        match trimmed.parse::<FormEvent>() {
            Ok(event) => match state.apply(event) {
                Ok(()) => print_state(&mut stdout, &state)?,
                Err(e) => eprintln!("Error: {}", e),
            },
            Err(e) => eprintln!("Error: {}", e),
        }
    }

    Ok(())
}

fn print_state(out: &mut impl Write, state: &ConverterState) -> std::io::Result<()> {
    let units: Vec<&str> = state.available_units().iter().map(|u| u.name()).collect();
    writeln!(out, "[{}] units: {}", state.category(), units.join(", "))?;
    let value = format_value(state.value(), state.precision());
    match state.formatted_result() {
        Ok(result) => writeln!(
            out,
            "{} {} = {} {}",
            value,
            state.source(),
            result,
            state.target()
        )?,
        Err(e) => writeln!(
            out,
            "{} {} -> {}: {}",
            value,
            state.source(),
            state.target(),
            e
        )?,
    }
    out.flush()
}
