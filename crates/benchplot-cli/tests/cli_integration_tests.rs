// Dweve benchplot - Benchmark throughput and speedup plotting
//
// Copyright (c) 2025 Dweve IP B.V. and individual contributors.
//
// SPDX-License-Identifier: Apache-2.0
//
// Licensed under the Apache License, Version 2.0 (the "License");
// you may not use this file except in compliance with the License.
// You may obtain a copy of the License in the LICENSE file at the
// root of this repository or at: http://www.apache.org/licenses/LICENSE-2.0
//
// Unless required by applicable law or agreed to in writing, software
// distributed under the License is distributed on an "AS IS" BASIS,
// WITHOUT WARRANTIES OR CONDITIONS OF ANY KIND, either express or implied.
// See the License for the specific language governing permissions and
// limitations under the License.

//! CLI integration tests

use assert_cmd::Command;
use predicates::prelude::*;
use std::fs;
use std::path::{Path, PathBuf};

const REPORT: &str = r#"{
    "context": {
        "experiment": "minimum",
        "floating_type": "float",
        "memory_type": "heap memory",
        "caches": [
            {"type": "Instruction", "level": 1, "size": 32768, "num_sharing": 2},
            {"type": "Data", "level": 1, "size": 32768, "num_sharing": 2},
            {"type": "Unified", "level": 2, "size": 262144, "num_sharing": 2}
        ]
    },
    "benchmarks": [
        {"name": "BM_minimum<minimum_naive>/1024", "run_type": "iteration", "real_time": 300, "time_unit": "ns"},
        {"name": "BM_minimum<minimum_naive>/2048", "run_type": "iteration", "real_time": 600, "time_unit": "ns"},
        {"name": "BM_minimum<minimum_simd<floating>>/1024", "run_type": "iteration", "real_time": 75, "time_unit": "ns"},
        {"name": "BM_minimum<minimum_simd<floating>>/2048", "run_type": "iteration", "real_time": 150, "time_unit": "ns"}
    ]
}"#;

// Test helper to create a benchplot command
fn benchplot_cmd() -> Command {
    Command::cargo_bin("benchplot").expect("Failed to find benchplot binary")
}

// Test helper to write a report into a directory
fn write_report(dir: &Path, content: &str) -> PathBuf {
    let path = dir.join("report.json");
    fs::write(&path, content).expect("Failed to write report");
    path
}

// ===== Argument Handling =====

#[test]
fn test_help_output() {
    benchplot_cmd()
        .arg("--help")
        .assert()
        .success()
        .stdout(predicate::str::contains("Usage:"))
        .stdout(predicate::str::contains("--baseline"));
}

#[test]
fn test_version_output() {
    benchplot_cmd()
        .arg("--version")
        .assert()
        .success()
        .stdout(predicate::str::contains("benchplot"));
}

#[test]
fn test_no_arguments_prints_usage() {
    benchplot_cmd()
        .assert()
        .code(1)
        .stdout(predicate::str::contains("Usage: benchplot <json report>"));
}

#[test]
fn test_two_reports_prints_usage() {
    benchplot_cmd()
        .args(["a.json", "b.json"])
        .assert()
        .code(1)
        .stdout(predicate::str::contains("Usage: benchplot <json report>"));
}

// ===== Error Reporting =====

#[test]
fn test_missing_report() {
    benchplot_cmd()
        .args(["/nonexistent/report.json", "--save"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("Error:"))
        .stderr(predicate::str::contains("/nonexistent/report.json"));
}

#[test]
fn test_invalid_json() {
    let dir = tempfile::tempdir().unwrap();
    let report = write_report(dir.path(), "{ not json");

    benchplot_cmd()
        .arg(&report)
        .arg("--save")
        .current_dir(dir.path())
        .assert()
        .failure()
        .stderr(predicate::str::contains("JSON error"));
}

#[test]
fn test_malformed_benchmark_name() {
    let dir = tempfile::tempdir().unwrap();
    let report = write_report(
        dir.path(),
        r#"{"benchmarks": [{"name": "BM_minimum/1024", "real_time": 1, "time_unit": "ns"}]}"#,
    );

    benchplot_cmd()
        .arg(&report)
        .arg("--save")
        .current_dir(dir.path())
        .assert()
        .failure()
        .stderr(predicate::str::contains("BM_minimum/1024"));
    assert!(!dir.path().join("throughput.svg").exists());
}

#[test]
fn test_unknown_time_unit() {
    let dir = tempfile::tempdir().unwrap();
    let report = write_report(
        dir.path(),
        r#"{"benchmarks": [{"name": "<k_naive>/1024", "real_time": 1, "time_unit": "min"}]}"#,
    );

    benchplot_cmd()
        .arg(&report)
        .arg("--save")
        .current_dir(dir.path())
        .assert()
        .failure()
        .stderr(predicate::str::contains("Unknown time unit 'min'"));
}

#[test]
fn test_missing_baseline() {
    let dir = tempfile::tempdir().unwrap();
    let report = write_report(dir.path(), REPORT);

    benchplot_cmd()
        .arg(&report)
        .args(["--save", "--baseline", "scalar"])
        .current_dir(dir.path())
        .assert()
        .failure()
        .stderr(predicate::str::contains("No baseline series found"));
}

// ===== Output =====

#[test]
fn test_save_writes_charts_to_working_directory() {
    let dir = tempfile::tempdir().unwrap();
    let report = write_report(dir.path(), REPORT);

    benchplot_cmd()
        .arg(&report)
        .arg("--save")
        .current_dir(dir.path())
        .assert()
        .success()
        .stdout(predicate::str::contains("throughput.svg"))
        .stdout(predicate::str::contains("speedup.svg"));

    let svg = fs::read_to_string(dir.path().join("throughput.svg")).unwrap();
    assert!(svg.contains("minimum throughput"));
    assert!(dir.path().join("speedup.svg").exists());
}

#[test]
fn test_save_to_output_dir_with_detailed_titles() {
    let dir = tempfile::tempdir().unwrap();
    let report = write_report(dir.path(), REPORT);
    let out = dir.path().join("plots");

    benchplot_cmd()
        .arg(&report)
        .arg("--save")
        .arg("--detailed-titles")
        .arg("--output-dir")
        .arg(&out)
        .assert()
        .success();

    let svg = fs::read_to_string(out.join("speedup.svg")).unwrap();
    assert!(svg.contains("minimum speedup (float, heap memory)"));
}

#[test]
fn test_custom_placeholder_is_substituted_in_legend() {
    let dir = tempfile::tempdir().unwrap();
    let report = write_report(
        dir.path(),
        &REPORT.replace("minimum_simd<floating>", "minimum_simd<real_t>"),
    );

    benchplot_cmd()
        .arg(&report)
        .args(["--save", "--placeholder", "real_t"])
        .current_dir(dir.path())
        .assert()
        .success();

    let svg = fs::read_to_string(dir.path().join("throughput.svg")).unwrap();
    assert!(svg.contains("minimum_simd&lt;float&gt;"));
    assert!(!svg.contains("real_t"));
}

#[test]
fn test_no_label_fix_keeps_reported_names() {
    let dir = tempfile::tempdir().unwrap();
    let report = write_report(dir.path(), REPORT);

    benchplot_cmd()
        .arg(&report)
        .args(["--save", "--no-label-fix"])
        .current_dir(dir.path())
        .assert()
        .success();

    let svg = fs::read_to_string(dir.path().join("throughput.svg")).unwrap();
    assert!(svg.contains("minimum_simd&lt;floating&gt;"));
}

#[cfg(target_os = "linux")]
#[test]
fn test_headless_run_falls_back_to_files() {
    let dir = tempfile::tempdir().unwrap();
    let report = write_report(dir.path(), REPORT);
    // Hide every host font so chart text has to come from the bundled face
    let fontconfig = dir.path().join("fonts.conf");
    fs::write(&fontconfig, "<fontconfig></fontconfig>\n").unwrap();

    benchplot_cmd()
        .arg(&report)
        .env_remove("DISPLAY")
        .env_remove("WAYLAND_DISPLAY")
        .env_remove("RUST_LOG")
        .env("FONTCONFIG_FILE", &fontconfig)
        .current_dir(dir.path())
        .assert()
        .success()
        .stderr(predicate::str::contains("note:"))
        .stderr(predicate::str::contains("WARN").not())
        .stdout(predicate::str::contains("Saved"));

    assert!(dir.path().join("throughput.svg").exists());
    assert!(dir.path().join("speedup.svg").exists());
}
