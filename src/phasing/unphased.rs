use crate::types::*;

/// Dispatch unphased calls to the single-variant or conservative processor.
pub fn process_unphased(variants: &[&Variant], copies: &mut ChromosomeCopies) {
    match variants {
        [] => {}
        [single] => process_single_unphased(single, copies),
        _ => process_multi_unphased(variants, copies),
    }
}

/// A lone unphased heterozygous call always goes to copy A.
pub fn process_single_unphased(variant: &Variant, copies: &mut ChromosomeCopies) {
    let star = variant.extracted_star.as_str();
    match variant.genotype().zygosity() {
        Some(Zygosity::HomozygousAlternate) => copies.push_both(star),
        Some(Zygosity::Heterozygous) => copies.push_a(star),
        Some(Zygosity::HomozygousReference) | None => {}
    }
}

/// Conservative trans assumption for two or more unphased calls.
///
/// Heterozygous calls alternate between copies by their position in the
/// unphased list (even index to A, odd to B). The index advances for every
/// variant, including hom-alt and hom-ref ones.
pub fn process_multi_unphased(variants: &[&Variant], copies: &mut ChromosomeCopies) {
    for (idx, variant) in variants.iter().enumerate() {
        let star = variant.extracted_star.as_str();
        match variant.genotype().zygosity() {
            Some(Zygosity::HomozygousAlternate) => copies.push_both(star),
            Some(Zygosity::Heterozygous) => {
                if idx % 2 == 0 {
                    copies.push_a(star);
                } else {
                    copies.push_b(star);
                }
            }
            Some(Zygosity::HomozygousReference) | None => {}
        }
    }
}
