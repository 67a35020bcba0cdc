use crate::dns::RawRecordResult;
use crate::models::report::MechanismVerdict;

const MISSING: &str =
    "No TLS reporting configuration found; publish a _smtp._tls TXT record to receive TLS failure reports";
const VALID: &str = "Valid TLS reporting configuration";
const INVALID: &str =
    "Invalid TLS reporting configuration; the record must declare v=TLSRPT and a rua= destination";

/// Assesses the `_smtp._tls.<domain>` TXT record.
///
/// A record is only valid when it both declares `v=TLSRPT` and names a
/// `rua=` reporting destination; a version tag without somewhere to send
/// reports accomplishes nothing.
pub fn assess(raw: &RawRecordResult) -> MechanismVerdict {
    match super::present_text(raw) {
        None => MechanismVerdict::missing(MISSING),
        Some(record) if record.contains("v=TLSRPT") && record.contains("rua=") => {
            MechanismVerdict::valid(record, VALID.to_string())
        }
        Some(record) => MechanismVerdict::invalid(record, INVALID),
    }
}
