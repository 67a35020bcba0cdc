use crate::dns::RawRecordResult;
use crate::models::report::MechanismVerdict;

const MISSING: &str =
    "No SPF configuration found; publish a v=spf1 TXT record at the domain apex";
const VALID: &str = "SPF configuration found";
const INVALID: &str =
    "Invalid SPF configuration found; the apex TXT record must declare v=spf1 and the hosts allowed to send mail";

/// Assesses the apex TXT record for SPF.
///
/// The `v=spf1` marker compares case-sensitively, following the SPF
/// convention of a lowercase version tag.
pub fn assess(raw: &RawRecordResult) -> MechanismVerdict {
    match super::present_text(raw) {
        None => MechanismVerdict::missing(MISSING),
        Some(record) if record.contains("v=spf1") => {
            MechanismVerdict::valid(record, VALID.to_string())
        }
        Some(record) => MechanismVerdict::invalid(record, INVALID),
    }
}
