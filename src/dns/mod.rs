use async_trait::async_trait;
use std::time::Duration;
use trust_dns_resolver::{
    TokioAsyncResolver,
    config::{ResolverConfig, ResolverOpts},
    error::{ResolveError, ResolveErrorKind},
    proto::op::ResponseCode,
};

/// Settled outcome of a single record lookup.
///
/// The fetcher distinguishes two non-error "nothing there" cases, and the
/// classifiers treat both as first-class inputs rather than failures:
/// - `Absent`: the queried name does not exist (NXDOMAIN)
/// - `EmptyPresent`: the name exists but has no data of the requested type
/// - `Present`: the first record's text, character-strings joined
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum RawRecordResult {
    Absent,
    EmptyPresent,
    Present(String),
}

impl RawRecordResult {
    /// Returns the record text, or `None` for both absent variants.
    pub fn text(&self) -> Option<&str> {
        match self {
            RawRecordResult::Present(value) => Some(value),
            _ => None,
        }
    }
}

/// Record fetcher contract consumed by the validation route.
///
/// Six lookups, one per mechanism, each taking a bare domain name (the
/// implementation adds mechanism prefixes such as `_dmarc.`). NXDOMAIN and
/// no-data outcomes are mapped into [`RawRecordResult`]; only hard resolver
/// failures surface as errors.
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait RecordFetcher: Send + Sync {
    async fn dmarc(&self, domain: &str) -> Result<RawRecordResult, ResolveError>;
    async fn spf(&self, domain: &str) -> Result<RawRecordResult, ResolveError>;
    async fn dkim(&self, domain: &str) -> Result<RawRecordResult, ResolveError>;
    async fn mta_sts(&self, domain: &str) -> Result<RawRecordResult, ResolveError>;
    async fn tls_rpt(&self, domain: &str) -> Result<RawRecordResult, ResolveError>;
    async fn mx(&self, domain: &str) -> Result<RawRecordResult, ResolveError>;
}

/// Production fetcher backed by a Tokio async DNS resolver.
///
/// Configured with:
/// - 2 second timeout per request
/// - 2 retry attempts
/// - Default system resolver configuration
pub struct DnsRecordFetcher {
    resolver: TokioAsyncResolver,
}

impl DnsRecordFetcher {
    pub fn new() -> Self {
        let mut opts = ResolverOpts::default();
        opts.timeout = Duration::from_secs(2);
        opts.attempts = 2;

        Self {
            resolver: TokioAsyncResolver::tokio(ResolverConfig::default(), opts),
        }
    }

    /// TXT lookup with the NXDOMAIN / no-data distinction folded into the
    /// result. Multi-part TXT records have their character-strings joined,
    /// matching how mail receivers reassemble them.
    async fn txt(&self, name: &str) -> Result<RawRecordResult, ResolveError> {
        match self.resolver.txt_lookup(name).await {
            Ok(lookup) => {
                let value = lookup.iter().next().map(|txt| {
                    txt.iter()
                        .map(|part| String::from_utf8_lossy(part).into_owned())
                        .collect::<String>()
                });
                Ok(match value {
                    Some(text) => RawRecordResult::Present(text),
                    None => RawRecordResult::EmptyPresent,
                })
            }
            Err(e) => Self::settle_missing(e),
        }
    }

    /// Maps "record missing" resolver errors to non-error outcomes and lets
    /// everything else propagate.
    fn settle_missing(e: ResolveError) -> Result<RawRecordResult, ResolveError> {
        match e.kind() {
            ResolveErrorKind::NoRecordsFound { response_code, .. } => {
                Ok(Self::classify_no_records(*response_code))
            }
            _ => Err(e),
        }
    }

    /// NXDOMAIN means the name itself does not exist; any other no-records
    /// response means the name exists without data of the requested type.
    fn classify_no_records(response_code: ResponseCode) -> RawRecordResult {
        if response_code == ResponseCode::NXDomain {
            RawRecordResult::Absent
        } else {
            RawRecordResult::EmptyPresent
        }
    }
}

impl Default for DnsRecordFetcher {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl RecordFetcher for DnsRecordFetcher {
    async fn dmarc(&self, domain: &str) -> Result<RawRecordResult, ResolveError> {
        self.txt(&format!("_dmarc.{}", domain)).await
    }

    /// SPF has no dedicated prefix; it shares the apex TXT record.
    async fn spf(&self, domain: &str) -> Result<RawRecordResult, ResolveError> {
        self.txt(domain).await
    }

    /// Probes only the `default` selector. Domains publishing under another
    /// selector are indistinguishable from domains with no DKIM at all.
    async fn dkim(&self, domain: &str) -> Result<RawRecordResult, ResolveError> {
        self.txt(&format!("default._domainkey.{}", domain)).await
    }

    async fn mta_sts(&self, domain: &str) -> Result<RawRecordResult, ResolveError> {
        self.txt(&format!("_mta-sts.{}", domain)).await
    }

    async fn tls_rpt(&self, domain: &str) -> Result<RawRecordResult, ResolveError> {
        self.txt(&format!("_smtp._tls.{}", domain)).await
    }

    /// Resolves MX for the apex and keeps the exchange hostname of the
    /// lowest-preference record only.
    async fn mx(&self, domain: &str) -> Result<RawRecordResult, ResolveError> {
        match self.resolver.mx_lookup(domain).await {
            Ok(lookup) => {
                let exchange = lookup
                    .iter()
                    .min_by_key(|mx| mx.preference())
                    .map(|mx| mx.exchange().to_utf8().trim_end_matches('.').to_string());
                Ok(match exchange {
                    Some(host) => RawRecordResult::Present(host),
                    None => RawRecordResult::EmptyPresent,
                })
            }
            Err(e) => Self::settle_missing(e),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn text_returns_none_for_both_absent_variants() {
        assert_eq!(RawRecordResult::Absent.text(), None);
        assert_eq!(RawRecordResult::EmptyPresent.text(), None);
        assert_eq!(
            RawRecordResult::Present("v=spf1 -all".to_string()).text(),
            Some("v=spf1 -all")
        );
    }

    #[test]
    fn nxdomain_settles_as_absent() {
        assert_eq!(
            DnsRecordFetcher::classify_no_records(ResponseCode::NXDomain),
            RawRecordResult::Absent
        );
    }

    #[test]
    fn no_data_settles_as_empty_present() {
        assert_eq!(
            DnsRecordFetcher::classify_no_records(ResponseCode::NoError),
            RawRecordResult::EmptyPresent
        );
    }

    #[test]
    fn hard_failures_propagate() {
        let err = ResolveError::from("connection refused");
        assert!(DnsRecordFetcher::settle_missing(err).is_err());
    }

    #[tokio::test]
    async fn fetcher_construction_does_not_panic() {
        let _fetcher = DnsRecordFetcher::new();
    }
}
