use crate::types::*;
use std::collections::HashMap;

/// Partition variants by gene symbol in a single pass.
///
/// Groups come back in first-seen order; rsids keep input order and are not
/// deduplicated, including those whose genotype will later be dropped.
pub fn group_by_gene<'a>(variants: &'a [Variant], config: &PhasingConfig) -> Vec<GeneGroup<'a>> {
    let mut groups: Vec<GeneGroup<'a>> = Vec::new();
    let mut index: HashMap<&'a str, usize> = HashMap::new();

    for variant in variants {
        let gene = variant.gene_symbol.as_str();
        let slot = *index.entry(gene).or_insert_with(|| {
            groups.push(GeneGroup {
                gene,
                variants: Vec::new(),
                rsids: Vec::new(),
                uncertain: false,
            });
            groups.len() - 1
        });

        let group = &mut groups[slot];
        group.variants.push(variant);
        group.rsids.push(variant.rsid.clone());
        if variant.extracted_star == config.unknown_star {
            group.uncertain = true;
        }
    }

    groups
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_groups_keep_first_seen_order() {
        let variants = vec![
            Variant::new("TPMT", "rs1", "3A", "0/1"),
            Variant::new("CYP2D6", "rs2", "4", "1|0"),
            Variant::new("TPMT", "rs3", "3C", "0/1"),
        ];

        let groups = group_by_gene(&variants, &PhasingConfig::default());

        assert_eq!(groups.len(), 2);
        assert_eq!(groups[0].gene, "TPMT");
        assert_eq!(groups[0].rsids, vec!["rs1", "rs3"]);
        assert_eq!(groups[0].variants.len(), 2);
        assert_eq!(groups[1].gene, "CYP2D6");
        assert_eq!(groups[1].rsids, vec!["rs2"]);
    }

    #[test]
    fn test_rsids_not_deduplicated_and_include_malformed() {
        let variants = vec![
            Variant::new("CYP2C19", "rs9", "2", "0/1"),
            Variant::new("CYP2C19", "rs9", "2", "garbage"),
        ];

        let groups = group_by_gene(&variants, &PhasingConfig::default());

        assert_eq!(groups[0].rsids, vec!["rs9", "rs9"]);
    }

    #[test]
    fn test_unknown_star_flags_group() {
        let variants = vec![
            Variant::new("DPYD", "rs1", "2A", "0/0"),
            Variant::new("DPYD", "rs2", "Unknown", "0/0"),
            Variant::new("SLCO1B1", "rs3", "5", "0/1"),
        ];

        let groups = group_by_gene(&variants, &PhasingConfig::default());

        assert!(groups[0].uncertain);
        assert!(!groups[1].uncertain);
    }

    #[test]
    fn test_empty_input_yields_no_groups() {
        assert!(group_by_gene(&[], &PhasingConfig::default()).is_empty());
    }
}
