//! Batch processing tests

use super::*;
use crate::config::{ProcessorConfig, ProductCatalog};
use crate::error::BulletinError;
use crate::parser::tests::OFFSHORE_BULLETIN;
use crate::processor::{BatchOutput, BulletinProcessor, MemorySource};
use std::fs;
use std::sync::Arc;
use tempfile::TempDir;

fn memory_source() -> MemorySource {
    MemorySource::new()
        .with_bulletin("NT1", OFFSHORE_BULLETIN)
        .with_bulletin("fwcsd", FWCSD_BULLETIN)
        .with_bulletin("PZ5", PZ5_BULLETIN)
}

fn products(ids: &[&str]) -> Vec<String> {
    ids.iter().map(|id| id.to_string()).collect()
}

fn processor<S: BulletinSource>(
    source: S,
    temp_dir: &TempDir,
    config: ProcessorConfig,
) -> BulletinProcessor<S> {
    BulletinProcessor::new(
        source,
        Arc::new(ProductCatalog::default()),
        temp_dir.path().join("out"),
    )
    .with_config(config.with_fallback_time("12:00 PM UTC Mon Jan 15 2024"))
}

fn read_json(path: &std::path::Path) -> serde_json::Value {
    serde_json::from_str(&fs::read_to_string(path).unwrap()).unwrap()
}

#[tokio::test]
async fn test_basic_processing_pipeline() {
    let temp_dir = TempDir::new().unwrap();
    let config = ProcessorConfig::default().with_products(products(&["NT1", "FWCSD", "NT2"]));
    let processor = processor(memory_source(), &temp_dir, config);

    let stats = processor.process().await.unwrap();

    assert_eq!(stats.products_processed, 2);
    assert_eq!(stats.products_missing, 1);
    assert_eq!(stats.zones_parsed, 5);
    assert_eq!(stats.placeholder_zones, 2);
    assert_eq!(stats.areas_parsed, 4);
    assert_eq!(stats.placeholder_areas, 2);
    assert_eq!(stats.output_paths.len(), 2);

    let offshore = read_json(&temp_dir.path().join("out").join("offshore.json"));
    let zones = offshore.as_array().unwrap();
    assert_eq!(zones.len(), 5);
    assert_eq!(zones[0]["zone"], "ANZ800");
    assert_eq!(zones[0]["warning"], "GALE WARNING");
    assert_eq!(zones[0]["forecast"][0]["Day"], "Today");

    let oparea = read_json(&temp_dir.path().join("out").join("oparea.json"));
    let areas = oparea.as_array().unwrap();
    assert_eq!(areas[0]["zone"], "area_a");
    assert_eq!(areas[0]["synopsis"], "METEOROLOGICAL SITUATION: A 1030MB HIGH WEST OF SAN FRANCISCO.");
    assert_eq!(areas[2]["forecast"], "Data unavailable");
}

#[tokio::test]
async fn test_product_order_is_preserved() {
    let temp_dir = TempDir::new().unwrap();
    let config = ProcessorConfig::default()
        .with_products(products(&["PZ5", "NT1"]))
        .with_max_concurrent(8);
    let processor = processor(memory_source(), &temp_dir, config);

    let results = processor.run().await.unwrap();
    let ids: Vec<&str> = results.iter().map(|r| r.product_id.as_str()).collect();
    assert_eq!(ids, vec!["PZ5", "NT1"]);

    let output = BatchOutput::collect(results, false);
    assert_eq!(output.zones.len(), 13);
    assert_eq!(output.zones[0].zone_id, "PZZ800");
    assert_eq!(output.zones[0].periods.len(), 2);
    assert!(output.zones[1].is_placeholder());
    assert_eq!(output.zones[8].zone_id, "ANZ800");
    assert!(output.has_offshore);
    assert!(!output.has_oparea);
}

#[tokio::test]
async fn test_only_requested_kinds_are_written() {
    let temp_dir = TempDir::new().unwrap();
    let config = ProcessorConfig::default().with_products(products(&["NT1"]));
    let processor = processor(memory_source(), &temp_dir, config);

    let stats = processor.process().await.unwrap();
    assert_eq!(stats.output_paths.len(), 1);
    assert!(temp_dir.path().join("out").join("offshore.json").exists());
    assert!(!temp_dir.path().join("out").join("oparea.json").exists());
}

#[tokio::test]
async fn test_debug_mode_wraps_output() {
    let temp_dir = TempDir::new().unwrap();
    let config = ProcessorConfig::default()
        .with_products(products(&["NT1"]))
        .with_debug();
    let processor = processor(memory_source(), &temp_dir, config);

    processor.process().await.unwrap();

    let json = read_json(&temp_dir.path().join("out").join("offshore.json"));
    assert!(json["debug"].is_array());
    assert!(!json["debug"].as_array().unwrap().is_empty());
    assert_eq!(json["data"].as_array().unwrap().len(), 5);
}

#[tokio::test]
async fn test_failed_fetch_does_not_abort_batch() {
    let temp_dir = TempDir::new().unwrap();
    let config = ProcessorConfig::default().with_products(products(&["NT1", "WRKFWNX02"]));
    let processor = processor(FailingSource, &temp_dir, config);

    let stats = processor.process().await.unwrap();
    assert_eq!(stats.products_processed, 0);
    assert_eq!(stats.products_missing, 2);

    let offshore = read_json(&temp_dir.path().join("out").join("offshore.json"));
    assert_eq!(offshore.as_array().unwrap().len(), 0);
}

#[tokio::test]
async fn test_empty_bulletin_yields_no_records() {
    let temp_dir = TempDir::new().unwrap();
    let source = MemorySource::new().with_bulletin("NT1", "  \n");
    let config = ProcessorConfig::default().with_products(products(&["NT1"]));
    let processor = processor(source, &temp_dir, config);

    let stats = processor.process().await.unwrap();
    assert_eq!(stats.products_processed, 1);
    assert_eq!(stats.zones_parsed, 0);
}

#[tokio::test]
async fn test_unknown_product_is_rejected() {
    let temp_dir = TempDir::new().unwrap();
    let config = ProcessorConfig::default().with_products(products(&["NT1", "NOPE"]));
    let processor = processor(memory_source(), &temp_dir, config);

    let result = processor.process().await;
    assert!(matches!(result, Err(BulletinError::UnknownProduct { .. })));
    assert!(!temp_dir.path().join("out").exists());
}

#[tokio::test]
async fn test_all_catalog_products_by_default() {
    let temp_dir = TempDir::new().unwrap();
    let processor = processor(memory_source(), &temp_dir, ProcessorConfig::default());

    let ids = processor.product_ids().unwrap();
    assert_eq!(ids.len(), ProductCatalog::default().products.len());

    let stats = processor.process().await.unwrap();
    assert_eq!(stats.products_processed, 3);
    assert_eq!(stats.products_missing, ids.len() - 3);
}
