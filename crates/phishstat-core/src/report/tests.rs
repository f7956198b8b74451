use super::*;
use crate::dataset::read_dataset;
use crate::domain::DomainClassifier;
use crate::prepare::prepare;

const OPTS: ReportOptions = ReportOptions {
    top_n: 10,
    daily_volume_days: 30,
};

fn prepared(csv: &str) -> PreparedDataset {
    prepare(read_dataset(csv.as_bytes()).unwrap(), &DomainClassifier::default())
}

#[test]
fn minimal_report_has_totals_and_tables() {
    let data = prepared(
        "url\n\
         http://a.evil.com/x\n\
         http://b.evil.com/y\n\
         https://shop.example.co.uk/\n",
    );
    let md = render_report(&data, &ChartPaths::default(), &OPTS);
    assert!(md.starts_with("# Phishing URL Analysis Report\n\n"));
    assert!(md.contains("- Total URLs Collected: **3**\n"));
    assert!(md.contains("## Top 10 Root Domains\n\n| root_domain | count |"));
    assert!(md.contains("| evil.com | 2 |\n| example.co.uk | 1 |\n"));
    assert!(md.contains("| com | 2 |\n| uk | 1 |\n"));
    assert!(!md.contains("Time range"));
    assert!(!md.contains("By Source"));
    assert!(!md.contains("Daily Volume"));
    assert!(!md.contains("!["));
}

#[test]
fn optional_sections_follow_columns() {
    let data = prepared(
        "url,first_seen,source\n\
         http://a.evil.com,2024-03-01 10:00:00,openphish\n\
         http://b.evil.com,2024-03-03 12:30:00,phishtank\n\
         http://c.evil.com,garbage,openphish\n",
    );
    let md = render_report(&data, &ChartPaths::default(), &OPTS);
    assert!(md.contains(
        "- Time range (first_seen): **2024-03-01 10:00:00+00:00 → 2024-03-03 12:30:00+00:00**"
    ));
    assert!(md.contains("## By Source (Top 10)\n\n"));
    assert!(md.contains("| openphish | 2 |\n| phishtank | 1 |\n"));
    assert!(md.contains("## Daily Volume (first_seen)\n\n"));
    assert!(md.contains("| 2024-03-01 | 1 |\n| 2024-03-02 | 0 |\n| 2024-03-03 | 1 |\n"));
}

#[test]
fn chart_links_use_file_names() {
    let data = prepared("url\nhttp://a.evil.com\n");
    let charts = ChartPaths {
        root_domains: Some(PathBuf::from("/tmp/out/top10_root_domains.svg")),
        tlds: Some(PathBuf::from("/tmp/out/top10_tld.svg")),
    };
    let md = render_report(&data, &charts, &OPTS);
    assert!(md.contains("![Top Root Domains](top10_root_domains.svg)"));
    assert!(md.contains("![Top TLDs](top10_tld.svg)"));
}

#[test]
fn top_n_limits_tables_and_headings() {
    let data = prepared(
        "url\n\
         http://a.one.com\n\
         http://b.one.com\n\
         http://two.net\n\
         http://three.org\n",
    );
    let opts = ReportOptions {
        top_n: 1,
        daily_volume_days: 30,
    };
    let md = render_report(&data, &ChartPaths::default(), &opts);
    assert!(md.contains("## Top 1 Root Domains"));
    assert!(md.contains("| one.com | 2 |\n\n"));
    assert!(!md.contains("two.net"));
}

#[test]
fn write_report_creates_directory() {
    let dir = tempfile::tempdir().unwrap();
    let out = dir.path().join("nested").join("reports");
    let data = prepared("url\nhttp://a.evil.com\n");
    let path = write_report(&out, &data, &ChartPaths::default(), &OPTS).unwrap();
    assert_eq!(path, out.join(REPORT_FILE));
    let body = std::fs::read_to_string(path).unwrap();
    assert!(body.contains("Total URLs Collected: **1**"));
}
