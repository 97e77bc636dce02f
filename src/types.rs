use serde::{Deserialize, Serialize};
use std::fmt;

// ============================================================================
// Phasing Configuration
// ============================================================================

#[derive(Debug, Clone)]
pub struct PhasingConfig {
    // Rendering of a chromosome copy with no alternate alleles
    pub reference_allele: String,

    // Star label sentinel that marks a gene as uncertain
    pub unknown_star: String,

    // Diplotype rendering
    pub allele_joiner: char,
    pub copy_separator: char,
}

impl Default for PhasingConfig {
    fn default() -> Self {
        Self {
            reference_allele: "*1".to_string(),
            unknown_star: "Unknown".to_string(),
            allele_joiner: '+',
            copy_separator: '/',
        }
    }
}

impl PhasingConfig {
    pub fn validate(&self) -> anyhow::Result<()> {
        if !self.reference_allele.starts_with('*') || self.reference_allele.len() < 2 {
            anyhow::bail!(
                "reference_allele must be a star allele such as *1, got {:?}",
                self.reference_allele
            );
        }

        if self.unknown_star.is_empty() {
            anyhow::bail!("unknown_star must not be empty");
        }

        if self.allele_joiner == self.copy_separator {
            anyhow::bail!(
                "allele_joiner and copy_separator must differ, both are {:?}",
                self.allele_joiner
            );
        }

        Ok(())
    }
}

// ============================================================================
// Request / Response Envelopes
// ============================================================================

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Variant {
    pub gene_symbol: String,
    pub rsid: String,
    pub extracted_star: String,
    pub raw_genotype_call: String,
}

impl Variant {
    pub fn new(gene_symbol: &str, rsid: &str, extracted_star: &str, raw_genotype_call: &str) -> Self {
        Self {
            gene_symbol: gene_symbol.to_string(),
            rsid: rsid.to_string(),
            extracted_star: extracted_star.to_string(),
            raw_genotype_call: raw_genotype_call.to_string(),
        }
    }

    pub fn genotype(&self) -> GenotypeCall<'_> {
        GenotypeCall::classify(&self.raw_genotype_call)
    }
}

/// Input envelope produced by the upstream variant extractor.
///
/// Metadata fields are passed through to the response untouched.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct PhasingRequest {
    #[serde(default)]
    pub request_id: Option<String>,
    #[serde(default)]
    pub vcf_valid: Option<bool>,
    #[serde(default)]
    pub target_drugs: Option<Vec<String>>,
    #[serde(default)]
    pub extracted_variants: Option<Vec<Variant>>,
}

impl PhasingRequest {
    pub fn variants(&self) -> &[Variant] {
        self.extracted_variants.as_deref().unwrap_or_default()
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ProfileStatus {
    Resolved,
    Uncertain,
}

impl fmt::Display for ProfileStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ProfileStatus::Resolved => write!(f, "resolved"),
            ProfileStatus::Uncertain => write!(f, "uncertain"),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ResolvedProfile {
    pub gene: String,
    pub diplotype: String,
    pub contributing_rsids: Vec<String>,
    pub status: ProfileStatus,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PhasingResponse {
    pub request_id: Option<String>,
    pub vcf_valid: Option<bool>,
    pub target_drugs: Option<Vec<String>>,
    pub resolved_profiles: Vec<ResolvedProfile>,
}

// ============================================================================
// Genotype Classification
// ============================================================================

/// A raw genotype string split on its separator.
///
/// `Phased` wins whenever a `|` is present, even if a `/` also appears.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GenotypeCall<'a> {
    Phased { left: &'a str, right: &'a str },
    Unphased { left: &'a str, right: &'a str },
    Malformed,
}

impl<'a> GenotypeCall<'a> {
    pub fn classify(raw: &'a str) -> Self {
        if let Some((left, right)) = raw.split_once('|') {
            GenotypeCall::Phased { left, right }
        } else if let Some((left, right)) = raw.split_once('/') {
            GenotypeCall::Unphased { left, right }
        } else {
            GenotypeCall::Malformed
        }
    }

    pub fn zygosity(&self) -> Option<Zygosity> {
        match *self {
            GenotypeCall::Phased { left, right } | GenotypeCall::Unphased { left, right } => {
                Some(Zygosity::from_indicators(left, right))
            }
            GenotypeCall::Malformed => None,
        }
    }
}

/// Anything other than the literal `"0"` counts as an alternate indicator.
pub fn is_alternate(indicator: &str) -> bool {
    indicator != "0"
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Zygosity {
    /// 0/0
    HomozygousReference,
    /// 0/1, 1/0
    Heterozygous,
    /// 1/1, 1/2
    HomozygousAlternate,
}

impl Zygosity {
    pub fn from_indicators(left: &str, right: &str) -> Self {
        match (is_alternate(left), is_alternate(right)) {
            (true, true) => Zygosity::HomozygousAlternate,
            (false, false) => Zygosity::HomozygousReference,
            _ => Zygosity::Heterozygous,
        }
    }
}

// ============================================================================
// Per-Gene Working State
// ============================================================================

/// All variants sharing one gene symbol, in input order.
#[derive(Debug, Clone)]
pub struct GeneGroup<'a> {
    pub gene: &'a str,
    pub variants: Vec<&'a Variant>,
    pub rsids: Vec<String>,
    pub uncertain: bool,
}

/// The two homologous copies being filled with star labels.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ChromosomeCopies {
    pub chrom_a: Vec<String>,
    pub chrom_b: Vec<String>,
}

impl ChromosomeCopies {
    pub fn push_a(&mut self, star: &str) {
        self.chrom_a.push(star.to_string());
    }

    pub fn push_b(&mut self, star: &str) {
        self.chrom_b.push(star.to_string());
    }

    pub fn push_both(&mut self, star: &str) {
        self.push_a(star);
        self.push_b(star);
    }

    pub fn is_empty(&self) -> bool {
        self.chrom_a.is_empty() && self.chrom_b.is_empty()
    }
}

// ============================================================================
// Statistics
// ============================================================================

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct PhasingStats {
    pub requests: usize,
    pub genes: usize,
    pub variants: usize,
    pub phased_variants: usize,
    pub unphased_variants: usize,
    pub malformed_variants: usize,
    pub hom_ref_variants: usize,
    pub uncertain_genes: usize,
    pub default_diplotypes: usize,
}

impl PhasingStats {
    pub fn merge(&mut self, other: &PhasingStats) {
        self.requests += other.requests;
        self.genes += other.genes;
        self.variants += other.variants;
        self.phased_variants += other.phased_variants;
        self.unphased_variants += other.unphased_variants;
        self.malformed_variants += other.malformed_variants;
        self.hom_ref_variants += other.hom_ref_variants;
        self.uncertain_genes += other.uncertain_genes;
        self.default_diplotypes += other.default_diplotypes;
    }
}
