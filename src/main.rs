use anyhow::{Context, Result};
use clap::Parser;
use indicatif::{ProgressBar, ProgressStyle};
use pgx_phaser::*;
use rayon::prelude::*;
use std::fs;

#[derive(Parser, Debug)]
#[command(name = "pgx-phaser")]
#[command(author = "PGx Phaser Contributors")]
#[command(version = "0.3.0")]
#[command(about = "Deterministic diplotype phasing for pharmacogenomic variant calls", long_about = None)]
struct Args {
    /// Input request envelope (JSON, optionally .gz); reads stdin when omitted or "-"
    input: Option<String>,

    /// Output file path; writes stdout when omitted
    #[arg(short, long)]
    output: Option<String>,

    /// Treat input as newline-delimited envelopes and phase them in parallel
    #[arg(long)]
    batch: bool,

    /// Also write a tab-separated table of resolved profiles
    #[arg(long)]
    tsv: Option<String>,

    /// Write single-envelope output on one line
    #[arg(long)]
    compact: bool,

    /// Rendering of a chromosome copy without alternate alleles
    #[arg(long, default_value = "*1")]
    reference_allele: String,

    /// Star label that marks a gene as uncertain
    #[arg(long, default_value = "Unknown")]
    unknown_star: String,

    /// Statistics report output path
    #[arg(long)]
    stats: Option<String>,

    /// Verbose output mode
    #[arg(short, long)]
    verbose: bool,

    /// Quiet mode (no progress display)
    #[arg(short, long)]
    quiet: bool,

    /// Number of threads for batch mode (defaults to number of CPU cores)
    #[arg(short = 'j', long)]
    threads: Option<usize>,
}

fn main() -> Result<()> {
    env_logger::Builder::new()
        .filter_level(log::LevelFilter::Info)
        .parse_default_env()
        .init();

    let args = Args::parse();

    if let Some(threads) = args.threads {
        rayon::ThreadPoolBuilder::new()
            .num_threads(threads)
            .build_global()
            .context("Failed to set thread pool size")?;
    }

    let config = PhasingConfig {
        reference_allele: args.reference_allele.clone(),
        unknown_star: args.unknown_star.clone(),
        ..PhasingConfig::default()
    };
    config.validate()?;

    if args.verbose {
        display_config(&config, &args);
    }

    let (responses, stats) = if args.batch {
        run_batch(&args, &config)?
    } else {
        let request = read_request(args.input.as_deref())?;
        let (response, stats) = process_payload_with_stats(&request, &config);
        (vec![response], stats)
    };

    let text = if args.batch {
        render_batch(&responses)?
    } else {
        render_response(&responses[0], !args.compact)?
    };
    write_output(&text, args.output.as_deref())?;

    if let Some(tsv_path) = &args.tsv {
        let mut table = ProfileTableWriter::new(tsv_path)?;
        for response in &responses {
            table.write_response(response)?;
        }
        table.flush()?;
        log::info!("Wrote {} profile rows to {}", table.records_written(), tsv_path);
    }

    if args.verbose || args.stats.is_some() {
        print_statistics(&stats, args.stats.as_deref())?;
    }

    Ok(())
}

fn display_config(config: &PhasingConfig, args: &Args) {
    eprintln!("============================================================");
    eprintln!("PGx Phaser Configuration");
    eprintln!("============================================================");
    eprintln!("  Input:                 {}", args.input.as_deref().unwrap_or("<stdin>"));
    eprintln!("  Output:                {}", args.output.as_deref().unwrap_or("<stdout>"));
    eprintln!("  Batch mode:            {}", args.batch);
    eprintln!("  Threads:               {}", rayon::current_num_threads());
    eprintln!("  Reference allele:      {}", config.reference_allele);
    eprintln!("  Unknown star sentinel: {}", config.unknown_star);
    eprintln!("============================================================");
}

fn run_batch(args: &Args, config: &PhasingConfig) -> Result<(Vec<PhasingResponse>, PhasingStats)> {
    let requests = read_batch(args.input.as_deref())?;

    let progress = if !args.quiet {
        let pb = ProgressBar::new(requests.len() as u64);
        pb.set_style(
            ProgressStyle::default_bar()
                .template("{spinner:.green} [{elapsed_precise}] [{bar:40.cyan/blue}] {pos}/{len} ({eta})")
                .context("Invalid progress bar template")?
                .progress_chars("#>-"),
        );
        Some(pb)
    } else {
        None
    };

    // Collect preserves input order
    let results: Vec<(PhasingResponse, PhasingStats)> = requests
        .par_iter()
        .map(|request| {
            let result = process_payload_with_stats(request, config);
            if let Some(pb) = &progress {
                pb.inc(1);
            }
            result
        })
        .collect();

    if let Some(pb) = progress {
        pb.finish_with_message("Phasing complete");
    }

    let mut total_stats = PhasingStats::default();
    let mut responses = Vec::with_capacity(results.len());
    for (response, stats) in results {
        total_stats.merge(&stats);
        responses.push(response);
    }

    Ok((responses, total_stats))
}

fn print_statistics(stats: &PhasingStats, output_path: Option<&str>) -> Result<()> {
    let report = format!(
        r#"
═══════════════════════════════════════════════════════════
                  Phasing Statistics Report
═══════════════════════════════════════════════════════════

Requests processed:     {}
Genes resolved:         {}
  - Uncertain:          {}
  - Default *1/*1:      {}

Variants:               {}
  - Phased ("|"):       {}
  - Unphased ("/"):     {}
  - Homozygous ref:     {}
  - Dropped (no separator): {}

═══════════════════════════════════════════════════════════
"#,
        stats.requests,
        stats.genes,
        stats.uncertain_genes,
        stats.default_diplotypes,
        stats.variants,
        stats.phased_variants,
        stats.unphased_variants,
        stats.hom_ref_variants,
        stats.malformed_variants,
    );

    eprintln!("{}", report);

    if let Some(path) = output_path {
        fs::write(path, report).context("Failed to write statistics report")?;
        eprintln!("Statistics report written to: {}", path);
    }

    Ok(())
}
