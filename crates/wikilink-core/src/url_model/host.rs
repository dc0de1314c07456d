//! Host-name model: language label and mobile/desktop variants.

/// Language code from the leading host label (`en.m.wikipedia.org` → `en`).
///
/// Hosts with fewer than three labels, or whose leading label is a known
/// non-language label (`www`, `commons`, …), have no language.
pub fn language_from_host(host: &str, non_language_labels: &[String]) -> Option<String> {
    let labels: Vec<&str> = host.split('.').collect();
    if labels.len() < 3 {
        return None;
    }
    let first = labels[0].to_ascii_lowercase();
    if first.is_empty()
        || non_language_labels
            .iter()
            .any(|label| label.eq_ignore_ascii_case(&first))
    {
        return None;
    }
    Some(first)
}

/// Lowercased host with the mobile label removed.
pub fn desktop_host(host: &str, mobile_label: &str) -> String {
    let host = host.to_ascii_lowercase();
    let mut labels: Vec<&str> = host.split('.').collect();
    if labels.len() >= 3 && labels[1].eq_ignore_ascii_case(mobile_label) {
        labels.remove(1);
    }
    labels.join(".")
}

/// Lowercased host with the mobile label after the language label.
pub fn mobile_host(host: &str, mobile_label: &str) -> String {
    let desktop = desktop_host(host, mobile_label);
    let mut labels: Vec<&str> = desktop.split('.').collect();
    if labels[0].eq_ignore_ascii_case(mobile_label) {
        return desktop;
    }
    if labels.len() >= 3 {
        labels.insert(1, mobile_label);
    } else {
        labels.insert(0, mobile_label);
    }
    labels.join(".")
}
