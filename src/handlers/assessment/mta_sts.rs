use crate::dns::RawRecordResult;
use crate::models::report::MechanismVerdict;

const MISSING: &str =
    "No MTA-STS configuration found; publish a _mta-sts TXT record to require TLS for inbound mail";
const VALID: &str = "MTA-STS configuration found";
const INVALID: &str = "Invalid MTA-STS configuration";

/// Assesses the `_mta-sts.<domain>` TXT record for the `v=STSv1` marker.
pub fn assess(raw: &RawRecordResult) -> MechanismVerdict {
    match super::present_text(raw) {
        None => MechanismVerdict::missing(MISSING),
        Some(record) if record.contains("v=STSv1") => {
            MechanismVerdict::valid(record, VALID.to_string())
        }
        Some(record) => MechanismVerdict::invalid(record, INVALID),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::report::RecommendationTier;

    #[test]
    fn stsv1_record_is_valid() {
        let raw = RawRecordResult::Present("v=STSv1; id=20160831085700Z".to_string());
        let verdict = assess(&raw);
        assert_eq!(verdict.tier, RecommendationTier::Valid);
        assert_eq!(verdict.raw_value, "v=STSv1; id=20160831085700Z");
    }

    #[test]
    fn wrong_version_is_invalid() {
        let verdict = assess(&RawRecordResult::Present("v=WRONG".to_string()));
        assert_eq!(verdict.tier, RecommendationTier::Invalid);
    }

    #[test]
    fn absent_is_missing() {
        assert_eq!(
            assess(&RawRecordResult::Absent).tier,
            RecommendationTier::Missing
        );
    }
}
