use crate::phasing::phased::process_phased;
use crate::phasing::unphased::process_unphased;
use crate::types::*;

/// Outcome of routing one gene: the filled copies plus what was seen on the way.
#[derive(Debug, Clone, Default)]
pub struct RoutedGene {
    pub copies: ChromosomeCopies,
    pub phased: usize,
    pub unphased: usize,
    pub malformed: usize,
    pub hom_ref: usize,
}

/// Split a gene's variants by separator and run the matching processors.
///
/// Phased calls are applied first, then unphased calls onto the same pair of
/// copies. Calls with neither separator are dropped here.
pub fn route_gene(group: &GeneGroup<'_>) -> RoutedGene {
    let mut phased: Vec<&Variant> = Vec::new();
    let mut unphased: Vec<&Variant> = Vec::new();
    let mut routed = RoutedGene::default();

    for &variant in &group.variants {
        let call = variant.genotype();
        if call.zygosity() == Some(Zygosity::HomozygousReference) {
            routed.hom_ref += 1;
        }

        match call {
            GenotypeCall::Phased { .. } => phased.push(variant),
            GenotypeCall::Unphased { .. } => unphased.push(variant),
            GenotypeCall::Malformed => {
                log::debug!(
                    "{}: dropping {} from phasing, unrecognised genotype {:?}",
                    group.gene,
                    variant.rsid,
                    variant.raw_genotype_call
                );
                routed.malformed += 1;
            }
        }
    }

    log::debug!(
        "{}: {} phased, {} unphased, {} dropped",
        group.gene,
        phased.len(),
        unphased.len(),
        routed.malformed
    );

    routed.phased = phased.len();
    routed.unphased = unphased.len();

    if !phased.is_empty() {
        process_phased(&phased, &mut routed.copies);
    }
    if !unphased.is_empty() {
        process_unphased(&unphased, &mut routed.copies);
    }

    routed
}
