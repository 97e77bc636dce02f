use crate::types::*;

pub fn normalize_star(label: &str) -> String {
    if label.starts_with('*') {
        label.to_string()
    } else {
        format!("*{}", label)
    }
}

fn render_copy(labels: &[String], config: &PhasingConfig) -> String {
    if labels.is_empty() {
        return config.reference_allele.clone();
    }

    labels
        .iter()
        .map(|label| normalize_star(label))
        .collect::<Vec<_>>()
        .join(&config.allele_joiner.to_string())
}

/// Render both copies as `<A>/<B>`, with an empty copy shown as `*1`.
pub fn assemble_diplotype(copies: &ChromosomeCopies, config: &PhasingConfig) -> String {
    format!(
        "{}{}{}",
        render_copy(&copies.chrom_a, config),
        config.copy_separator,
        render_copy(&copies.chrom_b, config)
    )
}
