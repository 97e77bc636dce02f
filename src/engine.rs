use crate::phasing::*;
use crate::types::*;

/// Phase a request envelope with the default rule set.
pub fn process_payload(request: &PhasingRequest) -> PhasingResponse {
    process_payload_with_config(request, &PhasingConfig::default())
}

pub fn process_payload_with_config(request: &PhasingRequest, config: &PhasingConfig) -> PhasingResponse {
    process_payload_with_stats(request, config).0
}

/// Phase a request envelope and report what was seen along the way.
///
/// Metadata is echoed unchanged. One profile is built per gene, and the
/// profile list is sorted by gene symbol.
pub fn process_payload_with_stats(
    request: &PhasingRequest,
    config: &PhasingConfig,
) -> (PhasingResponse, PhasingStats) {
    let mut stats = PhasingStats {
        requests: 1,
        ..PhasingStats::default()
    };

    let variants = request.variants();
    stats.variants = variants.len();

    let mut profiles: Vec<ResolvedProfile> = group_by_gene(variants, config)
        .into_iter()
        .map(|group| build_profile(group, config, &mut stats))
        .collect();

    profiles.sort_by(|a, b| a.gene.cmp(&b.gene));
    stats.genes = profiles.len();

    let response = PhasingResponse {
        request_id: request.request_id.clone(),
        vcf_valid: request.vcf_valid,
        target_drugs: request.target_drugs.clone(),
        resolved_profiles: profiles,
    };

    (response, stats)
}

fn build_profile(group: GeneGroup<'_>, config: &PhasingConfig, stats: &mut PhasingStats) -> ResolvedProfile {
    let routed = route_gene(&group);

    stats.phased_variants += routed.phased;
    stats.unphased_variants += routed.unphased;
    stats.malformed_variants += routed.malformed;
    stats.hom_ref_variants += routed.hom_ref;
    if routed.copies.is_empty() {
        stats.default_diplotypes += 1;
    }

    let status = if group.uncertain {
        stats.uncertain_genes += 1;
        ProfileStatus::Uncertain
    } else {
        ProfileStatus::Resolved
    };

    ResolvedProfile {
        gene: group.gene.to_string(),
        diplotype: assemble_diplotype(&routed.copies, config),
        contributing_rsids: group.rsids,
        status,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn request(variants: Vec<Variant>) -> PhasingRequest {
        PhasingRequest {
            request_id: Some("req-1".to_string()),
            vcf_valid: Some(true),
            target_drugs: Some(vec!["CODEINE".to_string()]),
            extracted_variants: Some(variants),
        }
    }

    fn single_profile(variant: Variant) -> ResolvedProfile {
        let response = process_payload(&request(vec![variant]));
        assert_eq!(response.resolved_profiles.len(), 1);
        response.resolved_profiles.into_iter().next().unwrap()
    }

    #[test]
    fn test_phased_het() {
        let profile = single_profile(Variant::new("CYP2D6", "rs1", "4", "1|0"));
        assert_eq!(
            profile,
            ResolvedProfile {
                gene: "CYP2D6".to_string(),
                diplotype: "*4/*1".to_string(),
                contributing_rsids: vec!["rs1".to_string()],
                status: ProfileStatus::Resolved,
            }
        );
    }

    #[test]
    fn test_unphased_hom_alt() {
        let profile = single_profile(Variant::new("TPMT", "rs2", "3A", "1/1"));
        assert_eq!(profile.diplotype, "*3A/*3A");
        assert_eq!(profile.status, ProfileStatus::Resolved);
    }

    #[test]
    fn test_single_unphased_het() {
        let profile = single_profile(Variant::new("CYP2C19", "rs3", "2", "0/1"));
        assert_eq!(profile.diplotype, "*2/*1");
    }

    #[test]
    fn test_two_unphased_hets_assume_trans() {
        let response = process_payload(&request(vec![
            Variant::new("CYP2C19", "rs4244285", "2", "0/1"),
            Variant::new("CYP2C19", "rs12248560", "17", "1/0"),
        ]));
        assert_eq!(response.resolved_profiles[0].diplotype, "*2/*17");
    }

    #[test]
    fn test_unknown_star_marks_uncertain() {
        let profile = single_profile(Variant::new("DPYD", "rs5", "Unknown", "0/1"));
        assert_eq!(profile.diplotype, "*Unknown/*1");
        assert_eq!(profile.status, ProfileStatus::Uncertain);
    }

    #[test]
    fn test_empty_and_missing_variants() {
        let response = process_payload(&request(vec![]));
        assert!(response.resolved_profiles.is_empty());
        assert_eq!(response.request_id.as_deref(), Some("req-1"));

        let response = process_payload(&PhasingRequest::default());
        assert!(response.resolved_profiles.is_empty());
        assert!(response.request_id.is_none());
        assert!(response.vcf_valid.is_none());
        assert!(response.target_drugs.is_none());
    }

    #[test]
    fn test_metadata_echoed() {
        let response = process_payload(&request(vec![Variant::new("CYP2D6", "rs1", "4", "1|0")]));
        assert_eq!(response.request_id.as_deref(), Some("req-1"));
        assert_eq!(response.vcf_valid, Some(true));
        assert_eq!(response.target_drugs, Some(vec!["CODEINE".to_string()]));
    }

    #[test]
    fn test_profiles_sorted_by_gene() {
        let response = process_payload(&request(vec![
            Variant::new("TPMT", "rs1", "3A", "0/1"),
            Variant::new("CYP2D6", "rs2", "4", "1|0"),
            Variant::new("SLCO1B1", "rs3", "5", "0/0"),
            Variant::new("CYP2C19", "rs4", "2", "0/1"),
        ]));
        let genes: Vec<&str> = response
            .resolved_profiles
            .iter()
            .map(|p| p.gene.as_str())
            .collect();
        assert_eq!(genes, vec!["CYP2C19", "CYP2D6", "SLCO1B1", "TPMT"]);
    }

    #[test]
    fn test_all_hom_ref_is_default_diplotype() {
        let response = process_payload(&request(vec![
            Variant::new("CYP2C9", "rs1", "2", "0/0"),
            Variant::new("CYP2C9", "rs2", "3", "0|0"),
            Variant::new("CYP2C9", "rs3", "8", "0/0"),
        ]));
        assert_eq!(response.resolved_profiles[0].diplotype, "*1/*1");
    }

    #[test]
    fn test_malformed_rsid_still_reported() {
        let response = process_payload(&request(vec![
            Variant::new("CYP3A5", "rs776746", "3", "1"),
            Variant::new("CYP3A5", "rs10264272", "6", "0/1"),
        ]));
        let profile = &response.resolved_profiles[0];
        assert_eq!(profile.diplotype, "*6/*1");
        assert_eq!(profile.contributing_rsids, vec!["rs776746", "rs10264272"]);
    }

    #[test]
    fn test_input_not_mutated_and_deterministic() {
        let req = request(vec![
            Variant::new("CYP2C19", "rs1", "2", "0/1"),
            Variant::new("CYP2C19", "rs2", "17", "0/1"),
            Variant::new("CYP2D6", "rs3", "4", "1|1"),
        ]);
        let before = req.clone();

        let first = serde_json::to_string(&process_payload(&req)).unwrap();
        let second = serde_json::to_string(&process_payload(&req)).unwrap();

        assert_eq!(first, second);
        assert_eq!(req, before);
    }

    #[test]
    fn test_stats() {
        let (_, stats) = process_payload_with_stats(
            &request(vec![
                Variant::new("CYP2D6", "rs1", "4", "1|0"),
                Variant::new("CYP2D6", "rs2", "10", "0/1"),
                Variant::new("TPMT", "rs3", "3A", "0/0"),
                Variant::new("TPMT", "rs4", "Unknown", "bad"),
            ]),
            &PhasingConfig::default(),
        );

        assert_eq!(stats.requests, 1);
        assert_eq!(stats.genes, 2);
        assert_eq!(stats.variants, 4);
        assert_eq!(stats.phased_variants, 1);
        assert_eq!(stats.unphased_variants, 2);
        assert_eq!(stats.malformed_variants, 1);
        assert_eq!(stats.hom_ref_variants, 1);
        assert_eq!(stats.uncertain_genes, 1);
        assert_eq!(stats.default_diplotypes, 1);
    }
}
