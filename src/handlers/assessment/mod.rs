use crate::dns::RawRecordResult;
use crate::models::report::MechanismVerdict;

/// Shared `tag=value` scanner for DNS TXT record grammar
pub mod tags;

/// DMARC policy assessment (`_dmarc.<domain>` TXT)
pub mod dmarc;
/// SPF assessment (apex TXT)
pub mod spf;
/// DKIM assessment (`default._domainkey.<domain>` TXT)
pub mod dkim;
/// MTA-STS assessment (`_mta-sts.<domain>` TXT)
pub mod mta_sts;
/// TLS reporting assessment (`_smtp._tls.<domain>` TXT)
pub mod tls_rpt;
/// MX assessment (apex MX exchange hostname)
pub mod mx;

/// Identity of an email-authentication mechanism.
///
/// Selects the matching assessor, so callers and tests can treat the six
/// classifications uniformly instead of wiring six ad-hoc call sites.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Mechanism {
    Dmarc,
    Spf,
    Dkim,
    MtaSts,
    TlsRpt,
    Mx,
}

impl Mechanism {
    pub const ALL: [Mechanism; 6] = [
        Mechanism::Dmarc,
        Mechanism::Spf,
        Mechanism::Dkim,
        Mechanism::MtaSts,
        Mechanism::TlsRpt,
        Mechanism::Mx,
    ];

    /// Classifies a settled lookup result for this mechanism.
    ///
    /// Pure function: no I/O, no shared state, no dependence on the other
    /// five mechanisms.
    pub fn classify(self, raw: &RawRecordResult) -> MechanismVerdict {
        match self {
            Mechanism::Dmarc => dmarc::assess(raw),
            Mechanism::Spf => spf::assess(raw),
            Mechanism::Dkim => dkim::assess(raw),
            Mechanism::MtaSts => mta_sts::assess(raw),
            Mechanism::TlsRpt => tls_rpt::assess(raw),
            Mechanism::Mx => mx::assess(raw),
        }
    }
}

/// Returns the record text only when something was actually published:
/// absent lookups, no-data lookups, and zero-length records all settle to
/// `None` and classify as missing.
pub(crate) fn present_text(raw: &RawRecordResult) -> Option<&str> {
    match raw.text() {
        Some(text) if !text.is_empty() => Some(text),
        _ => None,
    }
}
