//! BlockerProbe Filter-List Catalog
//!
//! The built-in catalog of probe selectors, one entry per known filter list.
//! Entries are decoded and validated once per process; every later call gets
//! the same read-only [`Catalog`].

use std::sync::OnceLock;

use base64::engine::general_purpose::STANDARD;
use base64::Engine;
use bp_core::{Catalog, CatalogError};

pub mod lists;

#[cfg(test)]
mod plain;

pub use lists::ENCODED_LISTS;

static CATALOG: OnceLock<Catalog> = OnceLock::new();

/// Decode one catalog entry into its selector.
pub fn decode(entry: &str) -> Result<String, String> {
    let bytes = STANDARD.decode(entry).map_err(|e| e.to_string())?;
    String::from_utf8(bytes).map_err(|e| e.to_string())
}

/// Decode a table of encoded lists.
pub fn decode_lists(encoded: &[(&str, &[&str])]) -> Result<Vec<(String, Vec<String>)>, CatalogError> {
    encoded
        .iter()
        .map(|(name, entries)| {
            let selectors = entries
                .iter()
                .enumerate()
                .map(|(index, entry)| {
                    decode(entry).map_err(|reason| CatalogError::Decode {
                        list: name.to_string(),
                        index,
                        reason,
                    })
                })
                .collect::<Result<Vec<_>, _>>()?;
            Ok((name.to_string(), selectors))
        })
        .collect()
}

/// Decode and validate the built-in catalog.
pub fn load_catalog() -> Result<Catalog, CatalogError> {
    Catalog::new(decode_lists(ENCODED_LISTS)?)
}

/// The process-wide built-in catalog.
pub fn catalog() -> Result<&'static Catalog, CatalogError> {
    if let Some(catalog) = CATALOG.get() {
        return Ok(catalog);
    }

    let loaded = load_catalog()?;
    log::debug!(
        "loaded {} filter lists with {} selectors",
        loaded.len(),
        loaded.selector_count()
    );
    Ok(CATALOG.get_or_init(|| loaded))
}

#[cfg(test)]
mod tests {
    use std::collections::HashSet;
    use std::future::{ready, Future};
    use std::time::Duration;

    use bp_core::{
        detect, parse_selector, CatalogSelector, DetectOptions, Detection, ElementSpec, MemoryDom, Sleep,
    };

    use super::*;
    use crate::plain::PLAIN_LISTS;

    struct NoopSleeper;

    impl Sleep for NoopSleeper {
        fn sleep(&self, _duration: Duration) -> impl Future<Output = ()> {
            ready(())
        }
    }

    fn selectors_of(catalog: &Catalog, name: &str) -> Vec<String> {
        catalog
            .get(name)
            .expect("list exists")
            .selectors()
            .iter()
            .map(|selector| selector.text().to_string())
            .collect()
    }

    #[test]
    fn test_catalog_loads() {
        let catalog = catalog().expect("built-in catalog should be valid");
        assert_eq!(catalog.len(), ENCODED_LISTS.len());
        assert!(catalog.lists().iter().all(|list| !list.is_empty()));
        assert!(std::ptr::eq(catalog, super::catalog().expect("cached")));
    }

    #[test]
    fn test_decoded_matches_plain_copy() {
        let decoded = decode_lists(ENCODED_LISTS).expect("entries decode");
        assert_eq!(decoded.len(), PLAIN_LISTS.len());

        for ((name, selectors), (plain_name, plain_selectors)) in decoded.iter().zip(PLAIN_LISTS) {
            assert_eq!(name, plain_name);
            assert_eq!(selectors, plain_selectors, "list '{name}'");
        }
    }

    #[test]
    fn test_has_only_simple_selectors() {
        for (name, selectors) in PLAIN_LISTS {
            for selector in selectors.iter() {
                let mut outside_brackets = String::new();
                let mut depth = 0usize;
                for c in selector.trim().chars() {
                    match c {
                        '[' => depth += 1,
                        ']' => depth = depth.saturating_sub(1),
                        _ if depth == 0 => outside_brackets.push(c),
                        _ => {}
                    }
                }
                assert!(
                    !outside_brackets.contains(' '),
                    "Unexpected complex selector '{selector}' in '{name}'"
                );

                let parsed = parse_selector(selector)
                    .unwrap_or_else(|e| panic!("Invalid selector in '{name}': {e}"));
                for (attribute, values) in parsed.attributes() {
                    if attribute != "class" {
                        assert!(
                            values.len() <= 1,
                            "Selector '{selector}' has a duplicating attribute '{attribute}'"
                        );
                    }
                }
            }
        }
    }

    #[test]
    fn test_has_no_duplicates() {
        let mut seen = HashSet::new();
        for (_, selectors) in PLAIN_LISTS {
            for selector in selectors.iter() {
                assert!(seen.insert(*selector), "Duplicating selector '{selector}'");
            }
        }
    }

    #[test]
    fn test_every_probe_matches_only_its_own_selector() {
        let catalog = catalog().expect("built-in catalog should be valid");
        let all: Vec<&CatalogSelector> = catalog.selectors().collect();

        for probe in &all {
            let element: &ElementSpec = probe.element();
            for selector in &all {
                let parsed = parse_selector(selector.text()).expect("valid selector");
                let matched = parsed.matches(&element.tag, &element.attributes);
                assert_eq!(
                    matched,
                    std::ptr::eq(*probe, *selector),
                    "probe for '{}' vs selector '{}'",
                    probe.text(),
                    selector.text()
                );
            }
        }
    }

    #[test]
    fn test_decode_rejects_garbage() {
        assert!(decode("not base64!").is_err());
        assert!(decode("//79").is_err());

        let lists: &[(&str, &[&str])] = &[("broken", &["I2Fk", "%%"])];
        let err = decode_lists(lists).unwrap_err();
        assert!(matches!(err, CatalogError::Decode { index: 1, .. }));
    }

    #[tokio::test]
    async fn test_detects_hidden_lists_in_full_catalog() {
        let catalog = catalog().expect("built-in catalog should be valid");
        let mut dom = MemoryDom::new();

        let mut hidden = Vec::new();
        hidden.extend(selectors_of(catalog, "frellwitSwedish").into_iter().take(2));
        hidden.extend(selectors_of(catalog, "easyListCookie").into_iter().take(3));
        hidden.extend(selectors_of(catalog, "listKr"));
        hidden.extend(selectors_of(catalog, "adGuardBase"));
        hidden.extend(selectors_of(catalog, "adGuardMobile"));
        hidden.extend(selectors_of(catalog, "adBlockPersian").into_iter().take(1));
        hidden.extend(selectors_of(catalog, "iDontCareAboutCookies").into_iter().take(1));
        hidden.extend(selectors_of(catalog, "easyListCzechSlovak").into_iter().take(2));
        dom.hide_all(hidden.iter().map(String::as_str)).expect("valid selectors");

        let detection = detect(catalog, &true, &mut dom, &NoopSleeper, &DetectOptions::default())
            .await
            .expect("detect");

        assert_eq!(
            detection,
            Detection::Detected(vec![
                "adGuardBase".to_string(),
                "adGuardMobile".to_string(),
                "easyListCookie".to_string(),
                "listKr".to_string(),
            ])
        );
        assert_eq!(dom.body_children(), 0);
    }

    #[tokio::test]
    async fn test_only_two_lists_hidden() {
        let catalog = catalog().expect("built-in catalog should be valid");
        let mut dom = MemoryDom::new();
        let mut hidden = selectors_of(catalog, "adGuardBase");
        hidden.extend(selectors_of(catalog, "adGuardMobile"));
        dom.hide_all(hidden.iter().map(String::as_str)).expect("valid selectors");

        let detection = detect(catalog, &true, &mut dom, &NoopSleeper, &DetectOptions::default())
            .await
            .expect("detect");

        assert_eq!(
            detection,
            Detection::Detected(vec!["adGuardBase".to_string(), "adGuardMobile".to_string()])
        );
    }

    #[tokio::test]
    async fn test_clean_document_detects_nothing() {
        let catalog = catalog().expect("built-in catalog should be valid");
        let mut dom = MemoryDom::new();

        let detection = detect(catalog, &true, &mut dom, &NoopSleeper, &DetectOptions::default())
            .await
            .expect("detect");
        assert_eq!(detection, Detection::Detected(Vec::new()));

        let detection = detect(catalog, &false, &mut dom, &NoopSleeper, &DetectOptions::default())
            .await
            .expect("detect");
        assert_eq!(detection, Detection::Unsupported);
    }
}
