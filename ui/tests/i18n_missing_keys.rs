use std::collections::BTreeSet;

/// Catalog parity test.
/// Ensures the Arabic catalog provides exactly the keys present in the fallback
/// (en) `nexora-ui.ftl`, and that neither file defines a key twice.
///
/// This is a lightweight parser:
/// - Ignores comment lines starting with `#`
/// - Treats any line of the form `key =` or `key=` as a message definition
/// - Skips blank / attribute / continuation lines
/// - Does not attempt to parse multi-line pattern bodies (only keys)
///
/// If you add a new locale:
/// 1. Create `ui/i18n/<locale>/nexora-ui.ftl`
/// 2. Copy all keys from `en/nexora-ui.ftl`
/// 3. Register it in `LOCALES` below.
#[test]
fn all_locales_have_all_fallback_keys() {
    const EN: &str = include_str!("../i18n/en/nexora-ui.ftl");
    const AR: &str = include_str!("../i18n/ar/nexora-ui.ftl");

    let fallback_keys = extract_keys(EN);

    assert!(!fallback_keys.is_empty(), "Fallback (en) contains no keys.");
    assert_no_dup_keys(EN, "en");

    let locales: &[(&str, &str)] = &[("ar", AR)];

    let mut failures = Vec::new();

    for (locale, src) in locales {
        assert_no_dup_keys(src, locale);

        let keys = extract_keys(src);
        let missing: Vec<_> = fallback_keys.difference(&keys).cloned().collect();
        let extra: Vec<_> = keys.difference(&fallback_keys).cloned().collect();

        if !missing.is_empty() {
            failures.push(format!(
                "Locale {locale} is missing {} key(s):\n  {}",
                missing.len(),
                missing.join("\n  ")
            ));
        }
        if !extra.is_empty() {
            failures.push(format!(
                "Locale {locale} defines {} key(s) unknown to the fallback:\n  {}",
                extra.len(),
                extra.join("\n  ")
            ));
        }
    }

    if !failures.is_empty() {
        panic!("{}", failures.join("\n\n"));
    }
}

#[test]
fn placeables_match_across_locales() {
    const EN: &str = include_str!("../i18n/en/nexora-ui.ftl");
    const AR: &str = include_str!("../i18n/ar/nexora-ui.ftl");

    for key in ["blog-min-read", "demo-updated"] {
        let en = variables(message(EN, key));
        let ar = variables(message(AR, key));
        assert!(!en.is_empty(), "{key} should take an argument");
        assert_eq!(en, ar, "argument names differ for {key}");
    }
}

fn extract_keys(src: &str) -> BTreeSet<String> {
    src.lines().filter_map(line_key).collect()
}

fn line_key(line: &str) -> Option<String> {
    let trimmed = line.trim_start();
    if trimmed.is_empty() || trimmed.starts_with('#') || trimmed.starts_with('-') {
        return None;
    }
    // Continuation lines are indented; message ids start at column 0.
    if line.starts_with(char::is_whitespace) {
        return None;
    }
    let (id, _) = trimmed.split_once('=')?;
    let id = id.trim();
    if !id.is_empty() && id.chars().all(|c| c.is_ascii_alphanumeric() || c == '-' || c == '_') {
        Some(id.to_string())
    } else {
        None
    }
}

fn assert_no_dup_keys(src: &str, locale: &str) {
    let mut seen = BTreeSet::new();
    let mut dups = Vec::new();
    for key in src.lines().filter_map(line_key) {
        if !seen.insert(key.clone()) {
            dups.push(key);
        }
    }
    assert!(dups.is_empty(), "Locale {locale} has duplicate keys: {dups:?}");
}

fn message<'a>(src: &'a str, key: &str) -> &'a str {
    src.lines()
        .find(|line| line_key(line).as_deref() == Some(key))
        .and_then(|line| line.split_once('=').map(|(_, body)| body))
        .unwrap_or_else(|| panic!("{key} not found"))
}

fn variables(body: &str) -> BTreeSet<String> {
    body.split('$')
        .skip(1)
        .filter_map(|rest| {
            let name: String = rest
                .chars()
                .take_while(|c| c.is_ascii_alphanumeric() || *c == '_' || *c == '-')
                .collect();
            (!name.is_empty()).then_some(name)
        })
        .collect()
}
