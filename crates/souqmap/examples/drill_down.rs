//! Drill-down filtering with live counts
//!
//! This example walks a filter session the way a map page would:
//! - Root, facet and sub-facet selection with per-option counts
//! - Zero-count options being refused
//! - Restricting counts to the visible map area
//! - A locked page that only ever shows one category
//! - Exporting the classified listings as CSV

use souqmap::{
    CountLevel, EngineConfigBuilder, FilterSession, GeoBounds, MarkerStyleCache, TaxonomyEngine,
    data::test_data::sample_listings, report,
};

fn main() -> Result<(), Box<dyn std::error::Error>> {
    let engine = TaxonomyEngine::new()?;
    let mut session = engine.session(sample_listings());

    println!("All listings:");
    print_choices(&session);

    session.choose_root("cars");
    println!("\nCars:");
    print_choices(&session);

    // Nothing is listed for mazda, so it cannot be selected
    println!("\nChoosing mazda: {:?}", session.choose_level1("mazda"));

    session.choose_level1("toyota");
    println!("\nToyota models:");
    print_choices(&session);

    session.choose_level2("hilux");
    let mut styles = MarkerStyleCache::new();
    println!("\nMarkers for {:?}:", session.state().level());
    for marker in session.markers() {
        let style = styles.get(marker.root, false);
        println!(
            "  {} at {:?} drawn {} (z {})",
            marker.id,
            marker.coords.as_pair(),
            style.color,
            style.z_index
        );
    }

    // Only count what is on screen
    session.reset();
    session.set_viewport_bounds(Some(GeoBounds::new(15.2, 44.0, 15.5, 44.4)));
    session.set_nearby(true);
    println!("\nNearby Sana'a:");
    print_choices(&session);

    // A category page is pinned to its root
    let config = EngineConfigBuilder::new().locked_root("realestate").build();
    let locked = TaxonomyEngine::with_config(config)?;
    let mut page = locked.session(sample_listings());
    println!("\nReal estate page, choosing phones: {:?}", page.choose_root("phones"));
    print_choices(&page);

    // Export everything for offline analysis
    let mut frame = report::listings_frame(session.listings(), engine.registry())?;
    let summary = report::facet_summary(&frame, CountLevel::Root)?;
    println!("\nRoot summary:\n{summary}");

    let dir = std::env::temp_dir().join("souqmap-example");
    std::fs::create_dir_all(&dir)?;
    let path = dir.join("listings.csv");
    report::write_csv(&mut frame, &path)?;
    println!("Wrote {}", path.display());

    Ok(())
}

fn print_choices(session: &FilterSession<'_>) {
    for choice in session.choices().iter().filter(|choice| choice.count > 0) {
        println!("  {:<14} {:<16} {}", choice.key, choice.label, choice.count);
    }
}
