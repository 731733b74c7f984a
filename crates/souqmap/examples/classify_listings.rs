//! Listing classification
//!
//! This example demonstrates turning raw listing records into taxonomy:
//! - Loading listings from a JSON file, or using the bundled samples
//! - Classifying each record and repairing its position
//! - Looking up individual values against a table
//!
//! Run with a file of your own:
//!
//! ```text
//! cargo run --example classify_listings -- listings.json
//! ```

use serde_json::json;
use souqmap::{EnrichedListing, TaxonomyEngine, data::test_data::sample_listings, load_listings};

fn main() -> Result<(), Box<dyn std::error::Error>> {
    let engine = TaxonomyEngine::new()?;

    // Use a listings file when given, the bundled samples otherwise
    let records = match std::env::args().nth(1) {
        Some(path) => load_listings(path)?,
        None => sample_listings(),
    };

    println!("Classifying {} listings:", records.len());
    let listings = engine.enrich_all(records);
    for listing in &listings {
        print_listing(&engine, listing);
    }

    // Single values resolve against one table
    println!("\nTable lookups:");
    for (value, table) in [
        (json!("Toyota"), "carMakes"),
        (json!("عقارات"), "categories"),
        (json!("إيجار"), "dealTypes"),
        (json!("boats"), "categories"),
    ] {
        println!(
            "  {value} in {table} -> {}",
            engine.match_key(&value, table).unwrap_or("(no match)")
        );
    }

    // Free text is scanned for the first option it mentions
    let text = "للبيع هايلوكس غمارتين موديل 2015";
    println!(
        "\nDetected model in '{text}': {}",
        engine
            .detect_key(text, "carModels.toyota")
            .unwrap_or("(none)")
    );

    Ok(())
}

fn print_listing(engine: &TaxonomyEngine, listing: &EnrichedListing) {
    let registry = engine.registry();
    let taxonomy = &listing.taxonomy;
    let position = listing.coords.map_or_else(
        || "no position".to_string(),
        |c| format!("{:.4}, {:.4}", c.lat, c.lng),
    );

    println!(
        "  {:<4} {:<12} {:<10} {:<14} ({position})",
        listing.id,
        taxonomy.root,
        taxonomy.level1(registry).unwrap_or("-"),
        taxonomy.level2(registry).unwrap_or("-"),
    );
}

#[cfg(test)]
mod tests {
    use super::*;

    fn setup_test_env() {
        let _ = souqmap::init_logging(tracing::Level::WARN);
    }

    #[test]
    fn test_classify_listings_example() {
        setup_test_env();
        assert!(
            main().is_ok(),
            "Classification example should run successfully"
        );
    }
}
