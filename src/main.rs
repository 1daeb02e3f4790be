use clap::{Parser, Subcommand, ValueEnum};
use std::io;
use tracing_subscriber::EnvFilter;
use unitforge::query::{format_outcome, format_outcome_json, resolve_domain};
use unitforge::registry::{self, Domain};
use unitforge::units::{format_quantity, tailwind, ViewportFrame};
use unitforge::{Engine, EngineConfig};

#[derive(Parser)]
#[command(name = "unitforge")]
#[command(about = "Unit and color conversion tool", long_about = None)]
struct Cli {
    /// Engine config file (TOML)
    #[arg(short, long, global = true)]
    config: Option<String>,

    /// Log conversions at debug level
    #[arg(short, long, global = true)]
    verbose: bool,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Convert a value between two units
    Convert {
        #[arg(allow_negative_numbers = true)]
        value: f64,
        from: String,
        to: String,

        /// Domain to convert in (inferred from the units when omitted)
        #[arg(short, long)]
        domain: Option<String>,

        /// Viewport width in px
        #[arg(long, requires = "height")]
        width: Option<f64>,

        /// Viewport height in px
        #[arg(long, requires = "width")]
        height: Option<f64>,
    },

    /// Evaluate a free-form query (e.g., "2 inch to cm")
    Query {
        #[arg(required = true, num_args = 1.., allow_hyphen_values = true)]
        text: Vec<String>,

        /// Print the outcome as JSON
        #[arg(long)]
        json: bool,
    },

    /// Convert a color between HEX, RGB and HSL
    Color {
        value: String,

        #[arg(long, default_value = "hex")]
        from: String,

        #[arg(long, default_value = "rgb")]
        to: String,
    },

    /// List the units of a domain, or of every domain
    Units { domain: Option<String> },

    /// Print the Tailwind reference tables
    Tailwind {
        table: Option<TailwindTable>,

        #[arg(long)]
        json: bool,
    },

    /// List the conversion domains
    Domains {
        #[arg(long)]
        json: bool,
    },
}

#[derive(Clone, Copy, PartialEq, ValueEnum)]
enum TailwindTable {
    Spacing,
    Fonts,
    Breakpoints,
}

fn main() {
    let cli = Cli::parse();

    let filter = if cli.verbose { "debug" } else { "warn" };
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(filter)),
        )
        .with_writer(io::stderr)
        .init();

    if let Err(e) = run(cli) {
        eprintln!("Error: {}", e);
        std::process::exit(1);
    }
}

fn run(cli: Cli) -> Result<(), Box<dyn std::error::Error>> {
    let config = match &cli.config {
        Some(path) => EngineConfig::load_from_file(path)?,
        None => EngineConfig::default(),
    };
    let engine = Engine::new(config);

    match cli.command {
        Commands::Convert {
            value,
            from,
            to,
            domain,
            width,
            height,
        } => {
            let engine = match (width, height) {
                (Some(width), Some(height)) => {
                    engine.with_viewport(ViewportFrame::new(width, height)?)?
                }
                _ => engine,
            };
            convert_value(&engine, value, &from, &to, domain.as_deref())
        }
        Commands::Query { text, json } => {
            let outcome = engine.evaluate(&text.join(" "))?;
            if json {
                println!("{}", format_outcome_json(&outcome));
            } else {
                println!("{}", format_outcome(&outcome));
            }
            Ok(())
        }
        Commands::Color { value, from, to } => {
            println!("{}", engine.convert_color(&value, &from, &to)?);
            Ok(())
        }
        Commands::Units { domain } => list_units(domain.as_deref()),
        Commands::Tailwind { table, json } => print_tailwind(table, json),
        Commands::Domains { json } => list_domains(json),
    }
}

fn convert_value(
    engine: &Engine,
    value: f64,
    from: &str,
    to: &str,
    domain: Option<&str>,
) -> Result<(), Box<dyn std::error::Error>> {
    let domain = match domain {
        Some(name) => name.parse::<Domain>()?,
        None => resolve_domain(from, to)?,
    };

    let result = engine.convert(domain, value, from, to)?;
    let precision = engine.config().display.precision;

    if let Some(warning) = engine.assess(domain, value, from) {
        eprintln!("Warning: {}", warning);
    }
    println!(
        "{} = {}",
        format_quantity(value, from, precision),
        format_quantity(result, to, precision)
    );
    Ok(())
}

fn list_units(domain: Option<&str>) -> Result<(), Box<dyn std::error::Error>> {
    match domain {
        Some(name) => {
            for unit in registry::units_for(name)? {
                println!("{}", unit);
            }
        }
        None => {
            for info in registry::domains() {
                println!("{}: {}", info.domain, info.units.join(", "));
            }
        }
    }
    Ok(())
}

fn list_domains(json: bool) -> Result<(), Box<dyn std::error::Error>> {
    let domains = registry::domains();
    if json {
        println!("{}", serde_json::to_string_pretty(&domains)?);
        return Ok(());
    }

    for info in &domains {
        println!(
            "  - {} ({}): base {}, default {} -> {}",
            info.domain, info.title, info.base_unit, info.default_from, info.default_to
        );
    }
    Ok(())
}

fn print_tailwind(table: Option<TailwindTable>, json: bool) -> Result<(), Box<dyn std::error::Error>> {
    let tables = tailwind::tables();

    if json {
        let value = match table {
            Some(TailwindTable::Spacing) => serde_json::to_value(tables.spacing)?,
            Some(TailwindTable::Fonts) => serde_json::to_value(tables.font_sizes)?,
            Some(TailwindTable::Breakpoints) => serde_json::to_value(tables.breakpoints)?,
            None => serde_json::to_value(&tables)?,
        };
        println!("{}", serde_json::to_string_pretty(&value)?);
        return Ok(());
    }

    let show = |t: TailwindTable| table.map_or(true, |selected| selected == t);

    if show(TailwindTable::Spacing) {
        println!("Spacing ({}):", tables.spacing.len());
        for step in tables.spacing {
            println!("  {:<6} {}rem  {}px", step.key, step.rem, step.px);
        }
    }
    if show(TailwindTable::Fonts) {
        println!("Font sizes ({}):", tables.font_sizes.len());
        for font in tables.font_sizes {
            println!("  {:<10} {}px", font.class, font.px);
        }
    }
    if show(TailwindTable::Breakpoints) {
        println!("Breakpoints ({}):", tables.breakpoints.len());
        for bp in tables.breakpoints {
            println!("  {:<4} min-width {}px", bp.name, bp.min_width_px);
        }
    }
    Ok(())
}
