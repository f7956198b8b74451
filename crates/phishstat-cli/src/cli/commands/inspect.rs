//! `phishstat inspect <URL>...` – show how individual URLs are classified.

use anyhow::Result;
use phishstat_core::config;
use phishstat_core::{classify_host, DomainClassifier};
use serde_json::{json, Value};

/// One JSON object describing `raw`.
fn inspect_json(raw: &str, classifier: &DomainClassifier) -> Value {
    match classify_host(raw) {
        Ok(host) => {
            let features = classifier.classify(&host);
            json!({
                "url": raw,
                "host": host.as_str(),
                "root_domain": features.root_domain,
                "tld": features.tld,
            })
        }
        Err(rejection) => json!({
            "url": raw,
            "host": null,
            "rejected": rejection.kind(),
            "reason": rejection.to_string(),
        }),
    }
}

/// One human-readable line describing `raw`.
fn inspect_line(raw: &str, classifier: &DomainClassifier) -> String {
    match classify_host(raw) {
        Ok(host) => {
            let features = classifier.classify(&host);
            format!(
                "{}\thost={} root_domain={} tld={}",
                raw,
                host,
                features.root_domain,
                features.tld.as_deref().unwrap_or("-")
            )
        }
        Err(rejection) => format!("{}\trejected ({}): {}", raw, rejection.kind(), rejection),
    }
}

pub fn run_inspect(urls: &[String], json: bool) -> Result<()> {
    let classifier = config::load_or_init()?.classifier()?;
    for raw in urls {
        if json {
            println!("{}", inspect_json(raw, &classifier));
        } else {
            println!("{}", inspect_line(raw, &classifier));
        }
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use phishstat_core::SuffixSet;

    #[test]
    fn json_for_accepted_url() {
        let v = inspect_json("user:pw@Login.Example.co.uk:8080/x", &DomainClassifier::default());
        assert_eq!(v["host"], "login.example.co.uk");
        assert_eq!(v["root_domain"], "example.co.uk");
        assert_eq!(v["tld"], "uk");
    }

    #[test]
    fn json_for_rejected_url() {
        let v = inspect_json("file:///etc/passwd", &DomainClassifier::default());
        assert!(v["host"].is_null());
        assert_eq!(v["rejected"], "missing_authority");
    }

    #[test]
    fn json_single_label_host_has_null_tld() {
        let v = inspect_json("http://localhost/", &DomainClassifier::default());
        assert_eq!(v["root_domain"], "localhost");
        assert!(v["tld"].is_null());
    }

    #[test]
    fn text_line_uses_injected_suffixes() {
        let mut suffixes = SuffixSet::default();
        suffixes.insert("co.in").unwrap();
        let line = inspect_line("x.example.co.in", &DomainClassifier::new(suffixes));
        assert_eq!(
            line,
            "x.example.co.in\thost=x.example.co.in root_domain=example.co.in tld=in"
        );
    }

    #[test]
    fn text_line_for_rejection_names_kind() {
        let line = inspect_line("   ", &DomainClassifier::default());
        assert!(line.contains("rejected (empty)"), "{line}");
    }
}
