use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

/// Verdict bucket for one mechanism, ordered worst to best.
///
/// The ordering is meaningful for assertions (`Missing < Invalid < Valid`),
/// but verdicts are reported independently; tiers are never aggregated into
/// a single score.
#[derive(
    Serialize, Deserialize, ToSchema, Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord,
)]
pub enum RecommendationTier {
    Missing,
    Invalid,
    Valid,
    ValidWithDetail,
}

/// Assessment of a single mechanism: presence, the raw record text, and a
/// human-readable recommendation with its tier.
///
/// Created fresh on every classification call; classification is a pure
/// function, so classifying the same input twice yields identical verdicts.
#[derive(Serialize, Deserialize, ToSchema, Debug, Clone, PartialEq, Eq)]
pub struct MechanismVerdict {
    pub present: bool,
    pub raw_value: String,
    pub tier: RecommendationTier,
    pub recommendation: String,
}

impl MechanismVerdict {
    /// Record absent or empty. The raw value is reported as an empty string.
    pub fn missing(recommendation: &str) -> Self {
        Self {
            present: false,
            raw_value: String::new(),
            tier: RecommendationTier::Missing,
            recommendation: recommendation.to_string(),
        }
    }

    /// Record present but not conforming to the mechanism's grammar.
    pub fn invalid(raw_value: &str, recommendation: &str) -> Self {
        Self {
            present: true,
            raw_value: raw_value.to_string(),
            tier: RecommendationTier::Invalid,
            recommendation: recommendation.to_string(),
        }
    }

    /// Record present and well formed.
    pub fn valid(raw_value: &str, recommendation: String) -> Self {
        Self {
            present: true,
            raw_value: raw_value.to_string(),
            tier: RecommendationTier::Valid,
            recommendation,
        }
    }

    /// Record present but carrying a policy that amounts to "not enforcing"
    /// (DMARC `p=none`). Reported at the Missing tier without being treated
    /// as an error.
    pub fn informational(raw_value: &str, recommendation: String) -> Self {
        Self {
            present: true,
            raw_value: raw_value.to_string(),
            tier: RecommendationTier::Missing,
            recommendation,
        }
    }
}

/// # Domain Validation Report
///
/// Aggregate of the six mechanism verdicts for one domain, flattened into the
/// wire contract: a presence boolean, the raw record value, and a
/// recommendation message per mechanism.
///
/// Built once per request and discarded after the response is sent.
///
/// ## Example JSON
/// ```json
/// {
///   "hasDMARC": true,
///   "hasSPF": true,
///   "hasDKIM": false,
///   "hasMTASTS": false,
///   "hasTLS": false,
///   "hasMX": true,
///   "dmarc": "v=DMARC1; p=reject",
///   "spf": "v=spf1 -all",
///   "dkim": "",
///   "mtaSts": "",
///   "tls": "",
///   "mx": "mail.example.com",
///   "dmarcRecommendation": "DMARC configuration: reject",
///   "spfRecommendation": "SPF configuration found",
///   "dkimRecommendation": "No DKIM configuration found for the default selector; publish a DKIM key to sign outgoing mail",
///   "mtaStsRecommendation": "No MTA-STS configuration found; publish a _mta-sts TXT record to require TLS for inbound mail",
///   "tlsRecommendation": "No TLS reporting configuration found; publish a _smtp._tls TXT record to receive TLS failure reports",
///   "mxRecommendation": "MX configuration found"
/// }
/// ```
#[derive(Serialize, Deserialize, ToSchema, Debug, PartialEq, Eq)]
pub struct DomainValidationReport {
    #[serde(rename = "hasDMARC")]
    pub has_dmarc: bool,
    #[serde(rename = "hasSPF")]
    pub has_spf: bool,
    #[serde(rename = "hasDKIM")]
    pub has_dkim: bool,
    #[serde(rename = "hasMTASTS")]
    pub has_mta_sts: bool,
    #[serde(rename = "hasTLS")]
    pub has_tls: bool,
    #[serde(rename = "hasMX")]
    pub has_mx: bool,
    pub dmarc: String,
    pub spf: String,
    pub dkim: String,
    #[serde(rename = "mtaSts")]
    pub mta_sts: String,
    pub tls: String,
    pub mx: String,
    #[serde(rename = "dmarcRecommendation")]
    pub dmarc_recommendation: String,
    #[serde(rename = "spfRecommendation")]
    pub spf_recommendation: String,
    #[serde(rename = "dkimRecommendation")]
    pub dkim_recommendation: String,
    #[serde(rename = "mtaStsRecommendation")]
    pub mta_sts_recommendation: String,
    #[serde(rename = "tlsRecommendation")]
    pub tls_recommendation: String,
    #[serde(rename = "mxRecommendation")]
    pub mx_recommendation: String,
}

impl DomainValidationReport {
    /// Assembles the report from the six verdicts. Consumes the verdicts;
    /// nothing is cached between requests.
    pub fn assemble(
        dmarc: MechanismVerdict,
        spf: MechanismVerdict,
        dkim: MechanismVerdict,
        mta_sts: MechanismVerdict,
        tls: MechanismVerdict,
        mx: MechanismVerdict,
    ) -> Self {
        Self {
            has_dmarc: dmarc.present,
            has_spf: spf.present,
            has_dkim: dkim.present,
            has_mta_sts: mta_sts.present,
            has_tls: tls.present,
            has_mx: mx.present,
            dmarc: dmarc.raw_value,
            spf: spf.raw_value,
            dkim: dkim.raw_value,
            mta_sts: mta_sts.raw_value,
            tls: tls.raw_value,
            mx: mx.raw_value,
            dmarc_recommendation: dmarc.recommendation,
            spf_recommendation: spf.recommendation,
            dkim_recommendation: dkim.recommendation,
            mta_sts_recommendation: mta_sts.recommendation,
            tls_recommendation: tls.recommendation,
            mx_recommendation: mx.recommendation,
        }
    }
}
