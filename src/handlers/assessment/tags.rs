/// Looks up a tag's value in semicolon/space-delimited `tag=value` TXT
/// grammar, as used by DMARC and its sibling records.
///
/// Tag names compare case-insensitively; the returned value is trimmed but
/// otherwise untouched. The first occurrence wins.
///
/// # Examples
/// ```
/// use email_posture::handlers::assessment::tags::tag_value;
///
/// let record = "v=DMARC1; p=reject; adkim=s";
/// assert_eq!(tag_value(record, "p"), Some("reject"));
/// assert_eq!(tag_value(record, "ADKIM"), Some("s"));
/// assert_eq!(tag_value(record, "sp"), None);
/// ```
pub fn tag_value<'a>(record: &'a str, tag: &str) -> Option<&'a str> {
    record
        .split(|c: char| c == ';' || c.is_whitespace())
        .filter_map(|pair| pair.split_once('='))
        .find(|(name, _)| name.trim().eq_ignore_ascii_case(tag))
        .map(|(_, value)| value.trim())
}

/// Whether the record carries the tag at all, regardless of its value.
pub fn has_tag(record: &str, tag: &str) -> bool {
    tag_value(record, tag).is_some()
}
