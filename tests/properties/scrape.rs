//! Property tests for CLI output scraping.

use proptest::prelude::*;

use appfleet::infrastructure::scrape;

fn branch_name() -> impl Strategy<Value = String> {
    proptest::string::string_regex("[a-z][a-z0-9/_.-]{0,20}").unwrap()
}

proptest! {
    #![proptest_config(ProptestConfig {
        cases: 128,
        .. ProptestConfig::default()
    })]

    /// PROPERTY: the starred line wins no matter where it sits.
    #[test]
    fn property_current_branch_is_the_starred_line(
        current in branch_name(),
        others in proptest::collection::vec(branch_name(), 0..5),
        position in 0usize..6,
    ) {
        let mut lines: Vec<String> = others.iter().map(|b| format!("  {b}")).collect();
        let at = position.min(lines.len());
        lines.insert(at, format!("* {current}"));
        let output = lines.join("\n") + "\n";

        prop_assert_eq!(scrape::current_branch(&output), Some(current));
    }

    /// PROPERTY: scraping never panics on arbitrary output.
    #[test]
    fn property_scrapers_accept_any_text(text in "\\PC{0,200}") {
        let _ = scrape::current_branch(&text);
        let _ = scrape::config_vars(&text);
        let _ = scrape::latest_snapshot(&text);
        let _ = scrape::remote_names(&text);
    }

    /// PROPERTY: the last listed snapshot is the one pulled.
    #[test]
    fn property_latest_snapshot_is_last_row(
        ids in proptest::collection::vec("[a-z][0-9]{3}", 1..6)
    ) {
        let listing: String = ids.iter().map(|id| format!("{id} 2024/01/01 Complete\n")).collect();
        prop_assert_eq!(scrape::latest_snapshot(&listing), ids.last().cloned());
    }
}
