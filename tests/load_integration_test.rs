//! Loading coverage files from disk and printing them.

mod common;

use common::fixture_path;
use covrank::load::{load_packages, InputFormat, LcovOptions, LoadOptions};
use covrank::{render_report, Report};
use pretty_assertions::assert_eq;

fn report_from(packages: Vec<covrank::Package>) -> Report {
    let mut report = Report::new();
    for package in packages {
        report.add_package(package).unwrap();
    }
    report
}

#[test]
fn test_lcov_fixture_report() {
    let options = LoadOptions {
        format: InputFormat::Auto,
        lcov: LcovOptions {
            package_root: Some("src".into()),
            demangle: true,
        },
    };
    let packages = load_packages(&fixture_path("sample.info"), &options).unwrap();
    let report = report_from(packages);

    assert_eq!(
        render_report(&report),
        concat!(
            "./main.rs:1\t\t main\t\t\t 100.00% (2/2)\n",
            "\n",
            "store/cache.rs:12\t store::cache::insert\t 100.00% (2/2)\n",
            "store/cache.rs:3\t store::cache::get\t 75.00% (3/4)\n",
            "store/cache.rs:25\t store::cache::evict\t 0.00% (0/2)\n",
            "\n",
        )
    );
}

#[test]
fn test_lcov_fixture_without_package_root() {
    let packages = load_packages(&fixture_path("sample.info"), &LoadOptions::default()).unwrap();
    let names: Vec<&str> = packages.iter().map(|p| p.name.as_str()).collect();
    assert_eq!(names, vec!["src", "src/store"]);
}

#[test]
fn test_json_fixture_report() {
    let packages = load_packages(&fixture_path("sample.json"), &LoadOptions::default()).unwrap();
    let report = report_from(packages);

    assert_eq!(
        render_report(&report),
        concat!(
            "app/main.go:10\t main\t 0.00% (0/0)\n",
            "\n",
            "pkg/b.go:5\t f2\t 100.00% (3/3)\n",
            "pkg/a.go:3\t f1\t 50.00% (2/4)\n",
            "\n",
        )
    );
}
