use super::tags;
use crate::dns::RawRecordResult;
use crate::models::report::MechanismVerdict;

const MISSING: &str =
    "No DMARC configuration found; publish a _dmarc TXT record to protect the domain from spoofing";
const INVALID: &str =
    "Invalid DMARC configuration; the p tag must be one of none, quarantine, or reject";

/// Assesses a DMARC record fetched from `_dmarc.<domain>`.
///
/// The `p` (policy) tag drives the verdict: `quarantine` and `reject` are
/// enforcing and classify as valid, `none` is reported as monitoring-only
/// rather than an error, and anything else (including a missing `p` tag) is
/// invalid.
///
/// Descriptive details are appended to the message, comma-separated, in a
/// fixed order: policy, alignment (`adkim`), subdomain policy (`sp`),
/// reporting format (`rf`). Details never change the tier.
pub fn assess(raw: &RawRecordResult) -> MechanismVerdict {
    let record = match super::present_text(raw) {
        Some(text) => text,
        None => return MechanismVerdict::missing(MISSING),
    };

    let mut details: Vec<&str> = Vec::new();
    match tags::tag_value(record, "adkim") {
        Some(mode) if mode.eq_ignore_ascii_case("s") => details.push("strict alignment"),
        Some(mode) if mode.eq_ignore_ascii_case("r") => details.push("relaxed alignment"),
        _ => {}
    }
    if tags::has_tag(record, "sp") {
        details.push("has explicit subdomain policy");
    }
    if tags::tag_value(record, "rf").is_some_and(|format| format.eq_ignore_ascii_case("afrf")) {
        details.push("reporting format valid");
    }

    let policy = tags::tag_value(record, "p").map(str::to_ascii_lowercase);
    let (base, enforcing) = match policy.as_deref() {
        Some("none") => ("DMARC configuration: none (monitoring only)", false),
        Some("quarantine") => ("DMARC configuration: quarantine", true),
        Some("reject") => ("DMARC configuration: reject", true),
        _ => {
            let message = join_details(INVALID, &details);
            return MechanismVerdict::invalid(record, &message);
        }
    };

    let message = join_details(base, &details);
    if enforcing {
        MechanismVerdict::valid(record, message)
    } else {
        MechanismVerdict::informational(record, message)
    }
}

fn join_details(base: &str, details: &[&str]) -> String {
    let mut message = base.to_string();
    for detail in details {
        message.push_str(", ");
        message.push_str(detail);
    }
    message
}
