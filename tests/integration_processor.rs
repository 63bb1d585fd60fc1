//! Integration tests for directory batch processing
//!
//! These tests lay out bulletin files the way a download job leaves them,
//! run the batch processor over the directory, and check the JSON files it
//! writes.

use bulletin_processor::config::{ProcessorConfig, ProductCatalog};
use bulletin_processor::fixtures::SampleGenerator;
use bulletin_processor::processor::{BulletinProcessor, DirectorySource};
use std::fs;
use std::path::Path;
use std::sync::Arc;
use tempfile::TempDir;

const WRKFWNX02_BULLETIN: &str = "\
FLEET WEATHER CENTER NORFOLK VA
0300 AM EST TUE JAN 16 2024

1. METEOROLOGICAL SITUATION AT 16/00Z: LOW PRESSURE OVER THE GULF OF MAINE
   MOVES EAST.
2. BOSTON OPAREA:
   A. HAZARDS: ...GALE WARNING...
   B. SKY/WEATHER: 16/06Z: OVERCAST, 16/12Z: CLOUDY.
   C. VSBY (NM): 16/06Z: 2-4.
   D. SURFACE WIND (KTS): 16/06Z: WEST 25 TO 35G40, 16/12Z: WEST 20 TO 30.
   E. COMBINED SEAS (FT): 16/06Z: WEST 8 TO 12, 16/12Z: WEST 7 TO 10.
3. NARRAGANSETT BAY OPAREA:
   A. HAZARDS: NONE.
   B. SKY/WEATHER: 16/06Z: PARTLY CLOUDY.
4. FORECASTER: SMITH
";

fn write_bulletin(dir: &Path, name: &str, content: &str) {
    fs::create_dir_all(dir).unwrap();
    fs::write(dir.join(name), content).unwrap();
}

fn read_json(path: &Path) -> serde_json::Value {
    serde_json::from_str(&fs::read_to_string(path).unwrap()).unwrap()
}

fn input_tree(root: &Path) {
    let catalog = ProductCatalog::default();
    let nt1 = catalog.product("NT1").unwrap();
    let bulletin = SampleGenerator::new(7).synthetic_bulletin(&nt1.zone_ids(), 4);

    write_bulletin(&root.join("opc"), "nt1.txt", &bulletin);
    write_bulletin(&root.join("navy"), "WRKFWNX02.TXT", WRKFWNX02_BULLETIN);
    write_bulletin(&root.join("navy"), "README.md", "not a bulletin");
}

/// Process a nested input directory into both output files
///
/// Purpose: Validate discovery, parsing and writing as one pipeline
/// Benefit: Ensures files found anywhere under the input root reach the output
#[tokio::test]
async fn test_directory_batch_processing() {
    let temp_dir = TempDir::new().unwrap();
    let input = temp_dir.path().join("input");
    let output = temp_dir.path().join("output");
    input_tree(&input);

    let source = DirectorySource::new(&input).unwrap();
    assert_eq!(source.len(), 2);

    let config = ProcessorConfig::default()
        .with_products(vec!["NT1".to_string(), "WRKFWNX02".to_string()])
        .with_max_concurrent(2);
    let processor = BulletinProcessor::new(source, Arc::new(ProductCatalog::default()), output.clone())
        .with_config(config);

    let stats = processor.process().await.unwrap();
    assert_eq!(stats.products_processed, 2);
    assert_eq!(stats.products_missing, 0);
    assert_eq!(stats.zones_parsed, 5);
    assert_eq!(stats.placeholder_zones, 0);
    assert_eq!(stats.areas_parsed, 2);
    assert_eq!(stats.placeholder_areas, 0);

    let offshore = read_json(&output.join("offshore.json"));
    let zones = offshore.as_array().unwrap();
    assert_eq!(zones.len(), 5);
    assert_eq!(zones[0]["zone"], "ANZ800");
    assert_eq!(zones[0]["time"], "1015 AM EST MON JAN 15 2024");
    for zone in zones {
        assert_eq!(zone["forecast"].as_array().unwrap().len(), 4);
        assert_eq!(zone["forecast"][3]["Day"], "Tue Night");
    }

    let oparea = read_json(&output.join("oparea.json"));
    let areas = oparea.as_array().unwrap();
    assert_eq!(areas.len(), 2);
    assert_eq!(areas[0]["zone"], "boston");
    assert_eq!(areas[0]["basin"], "atlantic");
    assert_eq!(areas[0]["warning"], "GALE WARNING");
    assert_eq!(areas[0]["time"], "0300 AM EST TUE JAN 16 2024");
    assert_eq!(areas[0]["sections"]["wind"][0]["gust"], 40);
    assert_eq!(areas[0]["sections"]["seas"][1]["high"], 10);
    assert_eq!(areas[1]["zone"], "narrabay");
    assert_eq!(areas[1]["warning"], "NONE");
    assert_eq!(areas[1]["sections"]["hazards"], "NONE.");
}

/// Catalog products without a file are counted as missing, not failed
#[tokio::test]
async fn test_missing_files_do_not_abort_batch() {
    let temp_dir = TempDir::new().unwrap();
    let input = temp_dir.path().join("input");
    let output = temp_dir.path().join("output");
    input_tree(&input);

    let source = DirectorySource::new(&input).unwrap();
    let processor = BulletinProcessor::new(source, Arc::new(ProductCatalog::default()), output.clone())
        .with_config(ProcessorConfig::default().with_products(vec![
            "NT1".to_string(),
            "PZ5".to_string(),
            "WRKFWNX01".to_string(),
        ]));

    let stats = processor.process().await.unwrap();
    assert_eq!(stats.products_processed, 1);
    assert_eq!(stats.products_missing, 2);

    // The OPAREA product was requested, so its file is written even though it is empty
    let oparea = read_json(&output.join("oparea.json"));
    assert_eq!(oparea.as_array().unwrap().len(), 0);
    assert_eq!(read_json(&output.join("offshore.json")).as_array().unwrap().len(), 5);
}

/// Debug mode wraps each output file in the trace envelope
#[tokio::test]
async fn test_debug_output_envelope() {
    let temp_dir = TempDir::new().unwrap();
    let input = temp_dir.path().join("input");
    let output = temp_dir.path().join("output");
    input_tree(&input);

    let source = DirectorySource::new(&input).unwrap();
    let processor = BulletinProcessor::new(source, Arc::new(ProductCatalog::default()), output.clone())
        .with_config(
            ProcessorConfig::default()
                .with_products(vec!["WRKFWNX02".to_string()])
                .with_debug(),
        );

    let stats = processor.process().await.unwrap();
    assert_eq!(stats.output_paths, vec![output.join("oparea.json")]);
    assert!(!output.join("offshore.json").exists());

    let oparea = read_json(&output.join("oparea.json"));
    assert_eq!(oparea["data"].as_array().unwrap().len(), 2);
    let events = oparea["debug"].as_array().unwrap();
    assert!(events.iter().any(|event| event["stage"] == "area_segment"));
}
