/// Validates a bare domain name for lookup.
///
/// Accepts conventional DNS names only: at least two dot-separated labels,
/// total length within 253 octets, each label up to 63 characters of ASCII
/// letters, digits, and interior hyphens, and an alphabetic top-level label
/// of two or more characters.
///
/// # Examples
/// ```
/// use email_posture::handlers::syntax::is_valid_domain;
///
/// assert!(is_valid_domain("example.com"));
/// assert!(is_valid_domain("mail.sub.example.co.uk"));
/// assert!(!is_valid_domain("no-tld"));
/// assert!(!is_valid_domain("-bad.example.com"));
/// ```
pub fn is_valid_domain(domain: &str) -> bool {
    // Overall length constraint (RFC 1035)
    if domain.is_empty() || domain.len() > 253 {
        return false;
    }

    let labels: Vec<&str> = domain.split('.').collect();
    if labels.len() < 2 {
        return false;
    }

    // The top-level label must be alphabetic and at least two characters
    let tld = labels[labels.len() - 1];
    if tld.len() < 2 || !tld.chars().all(|c| c.is_ascii_alphabetic()) {
        return false;
    }

    labels.iter().all(|label| is_valid_label(label))
}

/// Validates a single DNS label
fn is_valid_label(label: &str) -> bool {
    !label.is_empty()
        && label.len() <= 63
        && !label.starts_with('-')
        && !label.ends_with('-')
        && label
            .chars()
            .all(|c| c.is_ascii_alphanumeric() || c == '-')
}
