#[cfg(test)]
mod additional_coverage_tests {
    use crate::dns::RawRecordResult;
    use crate::handlers::assessment::{Mechanism, dkim, dmarc, mta_sts, mx, spf, tls_rpt};
    use crate::models::report::{DomainValidationReport, RecommendationTier};

    fn present(text: &str) -> RawRecordResult {
        RawRecordResult::Present(text.to_string())
    }

    #[test]
    fn dispatch_matches_direct_module_calls() {
        let samples = [
            present("v=DMARC1; p=quarantine"),
            present("v=spf1 -all"),
            present("v=DKIM1; k=rsa; p=abc"),
            present("v=STSv1; id=1"),
            present("v=TLSRPT; rua=mailto:t@example.com"),
            present("mx1.example.net"),
        ];

        for raw in &samples {
            assert_eq!(Mechanism::Dmarc.classify(raw), dmarc::assess(raw));
            assert_eq!(Mechanism::Spf.classify(raw), spf::assess(raw));
            assert_eq!(Mechanism::Dkim.classify(raw), dkim::assess(raw));
            assert_eq!(Mechanism::MtaSts.classify(raw), mta_sts::assess(raw));
            assert_eq!(Mechanism::TlsRpt.classify(raw), tls_rpt::assess(raw));
            assert_eq!(Mechanism::Mx.classify(raw), mx::assess(raw));
        }
    }

    #[test]
    fn end_to_end_assembly_without_http() {
        // Classifier outputs flow into the report exactly as produced
        let report = DomainValidationReport::assemble(
            Mechanism::Dmarc.classify(&present("v=DMARC1; p=none")),
            Mechanism::Spf.classify(&present("v=spf1 ~all")),
            Mechanism::Dkim.classify(&RawRecordResult::Absent),
            Mechanism::MtaSts.classify(&RawRecordResult::EmptyPresent),
            Mechanism::TlsRpt.classify(&present("v=TLSRPT")),
            Mechanism::Mx.classify(&present("mail.example.com")),
        );

        // p=none is reported as present even though its tier is Missing
        assert!(report.has_dmarc);
        assert!(report.dmarc_recommendation.contains("monitoring only"));

        assert!(report.has_spf);
        assert!(!report.has_dkim);
        assert!(!report.has_mta_sts);

        // Invalid TLS reporting still counts as present
        assert!(report.has_tls);
        assert!(report.tls_recommendation.contains("Invalid"));

        assert_eq!(report.mx, "mail.example.com");
    }

    #[test]
    fn mechanisms_are_independent_of_each_other() {
        // Classifying one mechanism against another's record text never
        // panics and never yields a false Valid for the wrong grammar.
        let dmarc_record = present("v=DMARC1; p=reject");
        assert_eq!(
            Mechanism::Spf.classify(&dmarc_record).tier,
            RecommendationTier::Invalid
        );
        assert_eq!(
            Mechanism::MtaSts.classify(&dmarc_record).tier,
            RecommendationTier::Invalid
        );

        let spf_record = present("v=spf1 -all");
        assert_eq!(
            Mechanism::Dkim.classify(&spf_record).tier,
            RecommendationTier::Invalid
        );
    }

    #[test]
    fn report_round_trips_through_json() {
        let report = DomainValidationReport::assemble(
            Mechanism::Dmarc.classify(&present("v=DMARC1; p=reject")),
            Mechanism::Spf.classify(&RawRecordResult::Absent),
            Mechanism::Dkim.classify(&RawRecordResult::Absent),
            Mechanism::MtaSts.classify(&RawRecordResult::Absent),
            Mechanism::TlsRpt.classify(&RawRecordResult::Absent),
            Mechanism::Mx.classify(&RawRecordResult::Absent),
        );

        let json = serde_json::to_string(&report).unwrap();
        let parsed: DomainValidationReport = serde_json::from_str(&json).unwrap();
        assert_eq!(parsed, report);
    }

    #[test]
    fn raw_record_result_equality_and_clone() {
        let record = present("v=spf1 -all");
        assert_eq!(record.clone(), record);
        assert_ne!(record, RawRecordResult::Absent);
        assert_ne!(RawRecordResult::Absent, RawRecordResult::EmptyPresent);
    }
}
