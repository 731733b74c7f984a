//! Tabular views of enriched listings for analysis and export.

use std::{fs::File, path::Path};

use itertools::multiunzip;
use polars::prelude::*;
use souqmap_data::TaxonomyRegistry;
use tracing::{info, instrument};

pub use error::ReportError;

use crate::{core::EnrichedListing, filter::CountLevel};

type Result<T> = std::result::Result<T, ReportError>;

type Row = (
    String,
    String,
    Option<String>,
    Option<String>,
    Option<f64>,
    Option<f64>,
);

/// One row per listing: `id, root, level1, level2, lat, lng`.
///
/// Missing facets and positions are nulls.
#[instrument(name = "Build listings frame", level = "debug", skip_all, fields(listings = listings.len()))]
pub fn listings_frame(
    listings: &[EnrichedListing],
    registry: &TaxonomyRegistry,
) -> Result<DataFrame> {
    let rows = listings.iter().map(|listing| -> Row {
        let taxonomy = &listing.taxonomy;
        (
            listing.id.clone(),
            taxonomy.root.clone(),
            taxonomy.level1(registry).map(str::to_string),
            taxonomy.level2(registry).map(str::to_string),
            listing.coords.map(|c| c.lat),
            listing.coords.map(|c| c.lng),
        )
    });
    let (id, root, level1, level2, lat, lng): (
        Vec<String>,
        Vec<String>,
        Vec<Option<String>>,
        Vec<Option<String>>,
        Vec<Option<f64>>,
        Vec<Option<f64>>,
    ) = multiunzip(rows);

    Ok(df!(
        "id" => id,
        "root" => root,
        "level1" => level1,
        "level2" => level2,
        "lat" => lat,
        "lng" => lng
    )?)
}

/// Count listings per key at `level`, most frequent first, ties by key.
///
/// Returns columns `key` (string) and `count` (u64).
pub fn facet_summary(frame: &DataFrame, level: CountLevel<'_>) -> Result<DataFrame> {
    let (column, scope) = match level {
        CountLevel::Root => ("root", lit(true)),
        CountLevel::Level1 { root } => ("level1", col("root").eq(lit(root))),
        CountLevel::Level2 { root, level1 } => (
            "level2",
            col("root").eq(lit(root)).and(col("level1").eq(lit(level1))),
        ),
    };

    Ok(frame
        .clone()
        .lazy()
        .filter(scope.and(col(column).is_not_null()))
        .group_by([col(column).alias("key")])
        .agg([len().alias("count")])
        .select([col("key"), col("count").cast(DataType::UInt64)])
        .sort(
            ["count", "key"],
            SortMultipleOptions::default().with_order_descending_multi([true, false]),
        )
        .collect()?)
}

/// Write `frame` to `path` as CSV with a header row.
#[instrument(name = "Write CSV", level = "info", skip(frame, path), fields(path = %path.as_ref().display()))]
pub fn write_csv(frame: &mut DataFrame, path: impl AsRef<Path>) -> Result<()> {
    let mut file = File::create(path.as_ref())?;
    CsvWriter::new(&mut file).include_header(true).finish(frame)?;
    info!(rows = frame.height(), "Wrote report");
    Ok(())
}

mod error {
    use thiserror::Error;

    #[derive(Error, Debug)]
    pub enum ReportError {
        #[error("DataFrame error: {0}")]
        DataFrame(#[from] polars::prelude::PolarsError),
        #[error("IO error: {0}")]
        Io(#[from] std::io::Error),
    }
}

#[cfg(test)]
mod tests {
    use souqmap_data::test_data::sample_listings;

    use super::*;
    use crate::core::TaxonomyEngine;

    fn frame() -> (TaxonomyEngine, DataFrame) {
        let engine = TaxonomyEngine::new().unwrap();
        let listings = engine.enrich_all(sample_listings());
        let frame = listings_frame(&listings, engine.registry()).unwrap();
        (engine, frame)
    }

    fn column_pairs(summary: &DataFrame) -> Vec<(String, u64)> {
        let keys = summary.column("key").unwrap().str().unwrap();
        let counts = summary.column("count").unwrap().u64().unwrap();
        keys.into_iter()
            .zip(counts)
            .map(|(key, count)| (key.unwrap().to_string(), count.unwrap()))
            .collect()
    }

    #[test]
    fn test_listings_frame_shape() {
        let (_, frame) = frame();
        assert_eq!(frame.height(), 11);
        assert_eq!(
            frame.get_column_names_str(),
            vec!["id", "root", "level1", "level2", "lat", "lng"]
        );
        // c5 and s1 have no usable position.
        assert_eq!(frame.column("lat").unwrap().null_count(), 2);
    }

    #[test]
    fn test_root_summary_is_sorted() {
        let (_, frame) = frame();
        let summary = facet_summary(&frame, CountLevel::Root).unwrap();
        assert_eq!(
            column_pairs(&summary),
            vec![
                ("cars".to_string(), 5),
                ("realestate".to_string(), 3),
                ("phones".to_string(), 2),
                ("solar".to_string(), 1),
            ]
        );
    }

    #[test]
    fn test_level_summaries_match_session_counts() {
        let (engine, frame) = frame();
        let level = CountLevel::Level1 { root: "cars" };
        let summary = column_pairs(&facet_summary(&frame, level).unwrap());
        assert_eq!(summary[0], ("toyota".to_string(), 3));

        let session = engine.session(sample_listings());
        let counts = session.counts_at(level);
        assert_eq!(summary.len(), counts.len());
        for (key, count) in &summary {
            assert_eq!(counts[key.as_str()] as u64, *count);
        }

        // Deal type is unclassified on r3, so it is left out.
        let level = CountLevel::Level1 { root: "realestate" };
        let summary = column_pairs(&facet_summary(&frame, level).unwrap());
        assert_eq!(
            summary,
            vec![("rent".to_string(), 1), ("sale".to_string(), 1)]
        );
    }

    #[test]
    fn test_write_csv() {
        let (_, mut frame) = frame();
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("listings.csv");
        write_csv(&mut frame, &path).unwrap();

        let content = std::fs::read_to_string(&path).unwrap();
        let mut lines = content.lines();
        assert_eq!(lines.next(), Some("id,root,level1,level2,lat,lng"));
        assert_eq!(lines.count(), 11);
    }
}
