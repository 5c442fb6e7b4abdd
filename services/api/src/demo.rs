use std::fs;
use std::path::PathBuf;

use clap::Args;

use crate::infra::CatalogSource;
use stayfinder::catalog::CatalogError;
use stayfinder::config::CatalogConfig;
use stayfinder::error::AppError;
use stayfinder::recommend::{PreferenceQuery, RecommendationEngine};

#[derive(Args, Debug)]
pub(crate) struct RecommendArgs {
    /// Trip type to match, e.g. beach, family, business
    #[arg(long, default_value = "")]
    pub(crate) trip_type: String,
    /// Lower bound of the nightly budget in rupees
    #[arg(long, default_value_t = 0.0)]
    pub(crate) min_budget: f64,
    /// Upper bound of the nightly budget in rupees
    #[arg(long, default_value_t = 0.0)]
    pub(crate) max_budget: f64,
    /// Amenity to require; repeat the flag for several
    #[arg(long = "amenity")]
    pub(crate) amenities: Vec<String>,
    /// Preferred city or hotel-name fragment
    #[arg(long, default_value = "")]
    pub(crate) location: String,
    /// Sustainable Development Goal number to prioritize, e.g. 12
    #[arg(long, default_value = "")]
    pub(crate) sdg: String,
    /// Number of guests travelling
    #[arg(long, default_value_t = 1)]
    pub(crate) guests: u32,
    /// Show at most this many results
    #[arg(long, default_value_t = 6)]
    pub(crate) limit: usize,
    /// Rank hotels from a JSON catalog file instead of the built-in seed
    #[arg(long, conflicts_with = "catalog_csv")]
    pub(crate) catalog: Option<PathBuf>,
    /// Rank hotels imported from a CSV export instead of the built-in seed
    #[arg(long)]
    pub(crate) catalog_csv: Option<PathBuf>,
}

#[derive(Args, Debug)]
pub(crate) struct CatalogImportArgs {
    /// CSV export to convert
    #[arg(long)]
    pub(crate) csv: PathBuf,
    /// Write the converted catalog JSON here instead of listing the hotels
    #[arg(long)]
    pub(crate) json_out: Option<PathBuf>,
}

pub(crate) fn run_recommend(args: RecommendArgs) -> Result<(), AppError> {
    let RecommendArgs {
        trip_type,
        min_budget,
        max_budget,
        amenities,
        location,
        sdg,
        guests,
        limit,
        catalog,
        catalog_csv,
    } = args;

    let source = CatalogSource::choose(catalog, catalog_csv, &CatalogConfig::default());
    let catalog = source.load()?;
    let query = PreferenceQuery {
        trip_type,
        min_budget,
        max_budget,
        amenities,
        location_pref: location,
        sdg,
        guests,
    };

    let engine = RecommendationEngine::default();
    let results = engine.rank(&catalog, &query, Some(limit));

    println!(
        "StayFinder picks ({} catalog, {} hotels screened)",
        source.label(),
        catalog.len()
    );
    if results.is_empty() {
        println!("No hotel cleared the recommendation bar for this quiz.");
        return Ok(());
    }

    for (position, result) in results.iter().enumerate() {
        println!(
            "{}. {} ({}) | score {} | ₹{} per night",
            position + 1,
            result.hotel.name,
            result.hotel.city,
            result.score,
            result.hotel.price_per_night
        );
        for reason in &result.reasons {
            println!("   - {reason}");
        }
    }

    Ok(())
}

pub(crate) fn run_catalog_import(args: CatalogImportArgs) -> Result<(), AppError> {
    let CatalogImportArgs { csv, json_out } = args;

    let summary = stayfinder::catalog::CsvCatalogImporter::from_path(&csv)?;
    let skipped = summary.skipped_rows;
    let catalog = summary.into_catalog()?;

    println!(
        "Imported {} hotels from {} ({} nameless rows skipped)",
        catalog.len(),
        csv.display(),
        skipped
    );

    match json_out {
        Some(path) => {
            let json =
                serde_json::to_string_pretty(catalog.hotels()).map_err(CatalogError::from)?;
            fs::write(&path, json)?;
            println!("Catalog JSON written to {}", path.display());
        }
        None => {
            for hotel in catalog.iter() {
                println!(
                    "- {} | {} | ₹{} | rating {}",
                    hotel.id, hotel.city, hotel.price_per_night, hotel.rating
                );
            }
        }
    }

    Ok(())
}
