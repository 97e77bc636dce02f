use crate::types::*;

/// Place phased calls on the copy their indicator names.
///
/// Left indicator goes to copy A, right to copy B. `1|1` lands on both and
/// `0|0` on neither.
pub fn process_phased(variants: &[&Variant], copies: &mut ChromosomeCopies) {
    for variant in variants {
        let (left, right) = match variant.genotype() {
            GenotypeCall::Phased { left, right } => (left, right),
            _ => continue,
        };

        let star = variant.extracted_star.as_str();
        if is_alternate(left) {
            copies.push_a(star);
        }
        if is_alternate(right) {
            copies.push_b(star);
        }
    }
}
