/// # Record Assessment
///
/// Pure classification of fetched DNS record text, one assessor per
/// mechanism (DMARC, SPF, DKIM, MTA-STS, TLS-RPT, MX), dispatched through
/// the [`assessment::Mechanism`] enum.
///
/// Every assessor is a deterministic, side-effect-free function from a
/// settled lookup result to a [`MechanismVerdict`]; no network access is
/// needed to test them.
///
/// [`MechanismVerdict`]: crate::models::report::MechanismVerdict
pub mod assessment;

/// Validates domain name syntax before any DNS query is issued.
///
/// Server-side guard mirroring conventional DNS label/TLD rules: bounded
/// length, alphanumeric-plus-hyphen labels, alphabetic TLD.
pub mod syntax;
