use crate::dns::RawRecordResult;
use crate::models::report::MechanismVerdict;

const MISSING: &str = "No MX configuration found";
const VALID: &str = "MX configuration found";

/// Assesses the apex MX lookup.
///
/// The input carries only the exchange hostname of the first-priority
/// record; any non-empty hostname counts as a working configuration.
/// Priority ordering among additional MX records is not inspected.
pub fn assess(raw: &RawRecordResult) -> MechanismVerdict {
    match super::present_text(raw) {
        None => MechanismVerdict::missing(MISSING),
        Some(exchange) => MechanismVerdict::valid(exchange, VALID.to_string()),
    }
}
