use std::{path::PathBuf, process::Command};

fn algoscope() -> Command {
    Command::new(env!("CARGO_BIN_EXE_algoscope"))
}

fn stdout_of(args: &[&str]) -> String {
    let output = algoscope().args(args).output().unwrap();
    assert!(
        output.status.success(),
        "algoscope {args:?} failed: {}",
        String::from_utf8_lossy(&output.stderr)
    );
    String::from_utf8(output.stdout).unwrap()
}

#[test]
fn cli_lists_all_algorithms() {
    let stdout = stdout_of(&["list"]);
    assert_eq!(stdout.lines().count(), 11);
    assert!(stdout.contains("Dijkstra's Algorithm"));
    assert!(stdout.contains("O(√n)"));
}

#[test]
fn cli_runs_bubble_sort_on_custom_array() {
    let stdout = stdout_of(&["run", "bubble", "--speed-ms", "0", "--array", "3, 1, 2"]);

    assert!(stdout.contains("Comparing 3 and 1 | Pass 1, Step 1"));
    assert!(stdout.contains("Completed after"));
    assert!(stdout.contains("Array: [1, 2, 3]"));
}

#[test]
fn cli_emits_json_steps_and_honours_max_steps() {
    let stdout = stdout_of(&[
        "run",
        "dijkstra",
        "--speed-ms",
        "0",
        "--seed",
        "5",
        "--max-steps",
        "4",
        "--json",
    ]);

    let records: Vec<serde_json::Value> = stdout
        .lines()
        .map(|line| serde_json::from_str(line).unwrap())
        .collect();
    assert_eq!(records.len(), 4);
    assert_eq!(records[0]["description"], "Visiting node 0");
    assert_eq!(records[0]["detail"], "Current distance: 0");
    assert_eq!(records[3]["index"], 3);
}

#[test]
fn cli_reads_edge_lists() {
    let dir = PathBuf::from("target").join("cli_smoke");
    std::fs::create_dir_all(&dir).unwrap();
    let path = dir.join("graph.txt");
    std::fs::write(&path, "# tiny graph\n3 2\n0 1 4\n1 2\n").unwrap();

    let stdout = stdout_of(&[
        "run",
        "bfs",
        "--speed-ms",
        "0",
        "--graph",
        path.to_str().unwrap(),
    ]);
    assert!(stdout.contains("Order: 0 -> 1 -> 2"));
}

#[test]
fn cli_rejects_invalid_input() {
    for args in [
        &["run", "bubble", "--speed-ms", "0", "--array", "1, two"][..],
        &["run", "bogosort"][..],
        &["run", "bfs", "--speed-ms", "0", "--start", "99"][..],
        &["bench", "trees"][..],
        &["run", "binary", "--speed-ms", "0", "--target", "NaN"][..],
    ] {
        let output = algoscope().args(args).output().unwrap();
        assert!(!output.status.success(), "{args:?} should fail");
    }
}

#[test]
fn cli_benchmarks_as_json() {
    let stdout = stdout_of(&["bench", "searching", "--size", "500", "--seed", "1", "--json"]);
    let reports: serde_json::Value = serde_json::from_str(&stdout).unwrap();

    assert_eq!(reports[0]["category"], "searching");
    assert_eq!(reports[0]["input_size"], 500);
    let results = reports[0]["results"].as_array().unwrap();
    assert_eq!(results.len(), 3);
    assert!(results.iter().all(|r| r["correct"] == true));
}
