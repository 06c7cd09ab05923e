use anyhow::bail;
use clap::{Parser, Subcommand};

use kenteken_core::plate::normalize_plate;
use kenteken_core::terms::parse_terms;
use kenteken_listings::listing_links;
use kenteken_rdw::normalize::parse_rdw_date;
use kenteken_rdw::{RdwClient, VehicleRecord, SEARCH_LIMIT};

#[derive(Debug, Parser)]
#[command(name = "kenteken-cli")]
#[command(about = "Dutch vehicle registry lookup")]
struct Cli {
    /// Registry endpoint override (defaults to the public RDW dataset).
    #[arg(long)]
    base_url: Option<String>,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Debug, Subcommand)]
enum Commands {
    /// Look up a single plate.
    Lookup {
        plate: String,
        /// Print the raw registry record as JSON.
        #[arg(long)]
        json: bool,
    },
    /// Substring search across one or more terms.
    Search { terms: Vec<String> },
    /// Print marketplace search links for a plate.
    Links {
        plate: String,
        #[arg(long)]
        brand: Option<String>,
        #[arg(long)]
        model: Option<String>,
    },
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    dotenvy::dotenv().ok();
    tracing_subscriber::fmt::init();

    let cli = Cli::parse();
    let config = kenteken_core::load_app_config_from_env()?;

    let base_url = cli.base_url.or(config.rdw_base_url);
    let client = match base_url.as_deref() {
        Some(url) => RdwClient::with_base_url(url, config.rdw_timeout_secs)?,
        None => RdwClient::new(config.rdw_timeout_secs)?,
    };

    match cli.command {
        Commands::Lookup { plate, json } => lookup(&client, &plate, json).await,
        Commands::Search { terms } => search(&client, &terms).await,
        Commands::Links {
            plate,
            brand,
            model,
        } => {
            links(&plate, brand.as_deref(), model.as_deref());
            Ok(())
        }
    }
}

async fn lookup(client: &RdwClient, plate: &str, json: bool) -> anyhow::Result<()> {
    let Some(record) = client.get_vehicle(plate).await? else {
        bail!("no vehicle found for plate {}", normalize_plate(plate));
    };

    if json {
        println!("{}", serde_json::to_string_pretty(&record)?);
    } else {
        print_record(&record);
    }
    Ok(())
}

/// Prints the commonly present registry fields. The dataset is sparse, so
/// absent columns are simply skipped.
fn print_record(record: &VehicleRecord) {
    println!("{}", record.plate());
    let labeled = [
        ("merk", "brand"),
        ("handelsbenaming", "model"),
        ("voertuigsoort", "vehicle type"),
        ("inrichting", "body type"),
        ("eerste_kleur", "color"),
        ("aantal_zitplaatsen", "seats"),
        ("catalogusprijs", "list price"),
    ];
    for (field, label) in labeled {
        if let Some(value) = record.field(field) {
            println!("  {label:<18} {value}");
        }
    }
    if let Some(date) = record
        .field("datum_eerste_toelating")
        .and_then(parse_rdw_date)
    {
        println!("  {:<18} {date}", "first registered");
    }
}

async fn search(client: &RdwClient, raw_terms: &[String]) -> anyhow::Result<()> {
    let terms = parse_terms(&raw_terms.join(","));
    if terms.is_empty() {
        bail!("at least one non-empty search term is required");
    }

    let outcome = client.search_vehicles(&terms).await?;
    if outcome.results.is_empty() {
        println!("no plates matched {}", outcome.search_terms.join(", "));
        return Ok(());
    }

    println!(
        "{} match(es) for {}",
        outcome.count,
        outcome.search_terms.join(", ")
    );
    for vehicle in &outcome.results {
        let description: Vec<&str> = [
            vehicle.record.field("merk"),
            vehicle.record.field("handelsbenaming"),
        ]
        .into_iter()
        .flatten()
        .collect();
        println!(
            "  {:<10} [{}] {}",
            vehicle.record.plate(),
            vehicle.matched_terms.join(", "),
            description.join(" ")
        );
    }
    if outcome.count >= SEARCH_LIMIT as usize {
        println!("(results are capped at {SEARCH_LIMIT} rows)");
    }
    Ok(())
}

fn links(plate: &str, brand: Option<&str>, model: Option<&str>) {
    let normalized = normalize_plate(plate);
    for listing in listing_links(&normalized, brand, model) {
        println!("{:<12} {}", listing.name, listing.url);
    }
}
