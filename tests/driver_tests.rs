// End-to-end tests: record source → scheduler → report sink, plus the
// multi-batch driver and its file mode.

use mlq_sim::driver::{self, BatchSpec, DriverConfig};
use mlq_sim::report::REPORT_HEADER;
use std::fs;
use std::path::PathBuf;

const DEMO_BATCH: &str = "\
# label;burst;arrival;queue;priority
P1;5;0;1;4
P2;2;0;1;3
P3;4;0;3;2
";

fn spec(name: &str, contents: &str) -> BatchSpec {
    BatchSpec {
        name: name.to_string(),
        contents: contents.to_string(),
    }
}

#[test]
fn parse_schedule_report_roundtrip() {
    let outcome = driver::run_batch(&spec("demo", DEMO_BATCH), &DriverConfig::default()).unwrap();

    assert_eq!(outcome.dispatch_order, vec!["P1", "P2", "P1", "P3"]);

    let lines: Vec<&str> = outcome.report.lines().collect();
    assert_eq!(lines[0], REPORT_HEADER);
    assert_eq!(lines[1], "P1; 5; 0; 1; 4; 2; 7; 0; 7");
    assert_eq!(lines[2], "P2; 2; 0; 1; 3; 3; 5; 3; 5");
    assert_eq!(lines[3], "P3; 4; 0; 3; 2; 7; 11; 7; 11");
    assert_eq!(lines[4], "");
    assert!(lines[5].starts_with("WT=4; CT=7.66"), "summary was {}", lines[5]);
    assert!(lines[5].ends_with(";"));

    let summary = outcome.summary.unwrap();
    assert_eq!(summary.process_count, 3);
    assert_eq!(summary.avg_wait_time, 4.0);
}

#[test]
fn reruns_are_bit_identical() {
    let config = DriverConfig::default();
    let first = driver::run_batch(&spec("demo", DEMO_BATCH), &config).unwrap();
    let second = driver::run_batch(&spec("demo", DEMO_BATCH), &config).unwrap();

    assert_eq!(first.report, second.report);
    assert_eq!(first.dispatch_order, second.dispatch_order);
}

#[test]
fn empty_batch_reports_header_only() {
    let outcome =
        driver::run_batch(&spec("empty", "# nothing here\n"), &DriverConfig::default()).unwrap();

    assert!(outcome.dispatch_order.is_empty());
    assert!(outcome.summary.is_none());
    assert_eq!(outcome.report, format!("{REPORT_HEADER}\n"));
}

#[test]
fn custom_quanta_change_the_slicing() {
    let config = DriverConfig {
        quantum_level1: 5,
        ..DriverConfig::default()
    };
    let outcome = driver::run_batch(&spec("demo", "P1;5;0;1;4\nP2;2;0;1;3\n"), &config).unwrap();

    // With a quantum covering the whole burst, level 1 degenerates to FCFS.
    assert_eq!(outcome.dispatch_order, vec!["P1", "P2"]);
}

#[test]
fn driver_runs_independent_sources() {
    let batches = vec![
        spec("first", DEMO_BATCH),
        spec("second", "Q1;1;0;2;1\n"),
        spec("third", ""),
    ];
    let outcomes = driver::run_batches(&batches, &DriverConfig::default()).unwrap();

    assert_eq!(outcomes.len(), 3);
    assert_eq!(
        outcomes["first"].dispatch_order,
        vec!["P1", "P2", "P1", "P3"]
    );
    assert_eq!(outcomes["second"].dispatch_order, vec!["Q1"]);
    // Batches share nothing: the second scheduler's clock started at zero.
    assert_eq!(outcomes["second"].processes[0].completion_time, 1);
    assert!(outcomes["third"].dispatch_order.is_empty());
}

#[test]
fn malformed_source_names_the_batch_and_line() {
    let batches = vec![spec("ok", DEMO_BATCH), spec("broken", "P1;5;0;1\n")];
    let err = driver::run_batches(&batches, &DriverConfig::default()).unwrap_err();
    let rendered = format!("{err:#}");
    assert!(rendered.contains("broken"), "{rendered}");
    assert!(rendered.contains("line 1"), "{rendered}");
}

#[test]
fn file_mode_writes_reports_and_summaries() {
    let dir = std::env::temp_dir().join(format!("mlq-sim-test-{}", std::process::id()));
    fs::create_dir_all(&dir).unwrap();

    let input = dir.join("mlq001.txt");
    fs::write(&input, DEMO_BATCH).unwrap();

    let config = DriverConfig {
        json_summaries: true,
        ..DriverConfig::default()
    };
    let outcomes = driver::run_files(&[PathBuf::from(&input)], &config, &dir).unwrap();
    assert_eq!(outcomes.len(), 1);

    let report = fs::read_to_string(dir.join("output_mlq001.txt")).unwrap();
    assert_eq!(report, outcomes[0].report);

    let json = fs::read_to_string(dir.join("mlq001_summary.json")).unwrap();
    let summary: mlq_sim::report::Summary = serde_json::from_str(&json).unwrap();
    assert_eq!(summary.process_count, 3);

    fs::remove_dir_all(&dir).unwrap();
}
