//! Trace export tests: the text trace round-trips every step field.

use std::fs;

use pagesim::trace::{default_file_name, export_to_path, render_trace, write_trace};
use pagesim::{Error, Policy, Scenario, SimulationConfig};
use tempfile::tempdir;

#[test]
fn test_export_to_file() {
    let dir = tempdir().unwrap();
    let sim = "normal".parse::<Scenario>().unwrap().run(Policy::Fifo).unwrap();
    let path = dir.path().join(default_file_name(&sim));

    export_to_path(&sim, &path).unwrap();

    let text = fs::read_to_string(&path).unwrap();
    assert_eq!(text, render_trace(&sim).unwrap());
    assert!(text.contains("Reference String: 7, 0, 1, 2, 0, 3, 0, 4, 2, 3, 0, 3, 2, 1, 2, 0, 1, 7, 0, 1\n"));
    assert!(text.contains("Total Page Faults: 15\n"));
    assert!(text.contains("Hit Rate: 25.00%\n"));
    assert!(text.contains("Fault Rate: 75.00%\n"));
}

#[test]
fn test_every_step_is_exported() {
    let sim = SimulationConfig::parse(3, "7 0 1 2 0 3", "lru").unwrap().run().unwrap();
    let text = render_trace(&sim).unwrap();

    assert_eq!(text.matches("Step ").count(), sim.len());
    for step in &sim {
        let header = format!("Step {}: Page Reference = {}\n", step.step, step.page);
        assert!(text.contains(&header), "missing {:?}", header);
        assert!(text.contains(&format!("  Action: {}\n", step.description)));
    }
    assert!(text.contains("  Action: Fault: Replace LRU page 7 with page 2\n"));
    assert!(text.contains("  Memory After:  [0, 1, 2]\n"));
}

#[test]
fn test_empty_trace_creates_no_file() {
    let dir = tempdir().unwrap();
    let path = dir.path().join("empty.txt");
    let sim = SimulationConfig::parse(3, "", "clock").unwrap().run().unwrap();

    assert!(matches!(export_to_path(&sim, &path), Err(Error::EmptyTrace)));
    assert!(!path.exists());
}

#[test]
fn test_export_into_missing_directory_fails() {
    let dir = tempdir().unwrap();
    let path = dir.path().join("no-such-dir").join("trace.txt");
    let sim = SimulationConfig::parse(2, "1 2 3", "fifo").unwrap().run().unwrap();

    assert!(matches!(export_to_path(&sim, &path), Err(Error::Io(_))));
}

#[test]
fn test_write_trace_to_buffer() {
    let sim = SimulationConfig::parse(1, "5,5,5", "optimal").unwrap().run().unwrap();
    let mut buf = Vec::new();
    write_trace(&sim, &mut buf).unwrap();

    let text = String::from_utf8(buf).unwrap();
    assert!(text.contains("Algorithm: OPTIMAL\n"));
    assert_eq!(text.matches("  Fault: NO\n").count(), 2);
    assert_eq!(text.matches("  Fault: YES\n").count(), 1);
}
