//! Command-line front end.
//!
//! Analyzes one source and prints the ranked words:
//!
//! ```bash
//! # Fetch an article and show the 20 most frequent words
//! zhfreq https://www.guokr.com/article/440923/
//!
//! # Local file, words seen at least twice, radar preset (8 entries)
//! zhfreq --file article.txt --min-freq 2 --chart radar
//!
//! # Embedded sample, with a plain-text report
//! zhfreq --sample --report report.txt
//! ```
//!
//! Logging goes to stderr and is controlled by `RUST_LOG`.

use std::fs::File;
use std::io::BufWriter;
use std::path::PathBuf;
use std::time::Duration;

use anyhow::{Context, Result};
use clap::{ArgGroup, Parser, ValueEnum};

use zhfreq_core::report::{format_ranked_line, write_report};
use zhfreq_core::types::{FallbackReason, RankOptions};
use zhfreq_core::{Analysis, Analyzer, FetchConfig, Outcome, Source};

#[derive(Debug, Parser)]
#[command(name = "zhfreq")]
#[command(about = "Rank the most frequent words in Chinese web text", version)]
#[command(group(ArgGroup::new("input").args(["url", "file", "text", "sample"])))]
struct Cli {
    /// Article URL to fetch
    url: Option<String>,

    /// Read text from a local UTF-8 file
    #[arg(long, value_name = "PATH")]
    file: Option<PathBuf>,

    /// Analyze the given text
    #[arg(long, value_name = "TEXT")]
    text: Option<String>,

    /// Analyze the embedded sample text (default when no input is given)
    #[arg(long)]
    sample: bool,

    /// Drop words seen fewer times than this
    #[arg(long, default_value_t = 1, value_parser = clap::value_parser!(u8).range(1..=5))]
    min_freq: u8,

    /// Number of ranked entries to show (overrides the chart preset)
    #[arg(long, value_name = "N", value_parser = clap::value_parser!(u16).range(1..))]
    top: Option<u16>,

    /// Presentation preset, sets how many entries are shown
    #[arg(long, value_enum, default_value_t = ChartKind::Wordcloud)]
    chart: ChartKind,

    /// Write the plain-text report to this path
    #[arg(long, value_name = "PATH")]
    report: Option<PathBuf>,

    /// Fetch timeout in seconds
    #[arg(long, value_name = "SECS", default_value_t = zhfreq_core::types::DEFAULT_TIMEOUT_SECS)]
    timeout: u64,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
enum ChartKind {
    Wordcloud,
    Bar,
    Line,
    Pie,
    Radar,
    Scatter,
    Heatmap,
    Funnel,
}

impl ChartKind {
    fn options(self) -> RankOptions {
        match self {
            ChartKind::Radar => RankOptions::radar(),
            _ => RankOptions::top20(),
        }
    }
}

impl Cli {
    fn source(&self) -> Source {
        if let Some(url) = &self.url {
            Source::Url(url.clone())
        } else if let Some(path) = &self.file {
            Source::File(path.clone())
        } else if let Some(text) = &self.text {
            Source::Text(text.clone())
        } else {
            Source::Sample
        }
    }

    fn rank_options(&self) -> RankOptions {
        let options = self
            .chart
            .options()
            .with_min_frequency(usize::from(self.min_freq));
        match self.top {
            Some(n) => options.with_top_n(usize::from(n)),
            None => options,
        }
    }

    fn run(self) -> Result<()> {
        let fetch = FetchConfig::default().with_timeout(Duration::from_secs(self.timeout));
        let analyzer = Analyzer::with_fetch_config(fetch);
        let analysis = analyzer.analyze(&self.source(), self.rank_options());

        print_analysis(&analysis);

        if let Some(path) = &self.report {
            let file = File::create(path)
                .with_context(|| format!("failed to create report {}", path.display()))?;
            write_report(BufWriter::new(file), &analysis.ranking)
                .with_context(|| format!("failed to write report {}", path.display()))?;
            println!("report written to {}", path.display());
        }

        Ok(())
    }
}

fn print_analysis(analysis: &Analysis) {
    match &analysis.fallback {
        Some(reason @ FallbackReason::AcquisitionFailed(_)) => {
            eprintln!("error: {}", reason);
        }
        Some(reason @ FallbackReason::InsufficientContent { .. }) => {
            eprintln!("warning: {}", reason);
        }
        None => {}
    }

    println!("source: {}", analysis.analyzed);
    println!("{}", analysis.stats());

    match analysis.outcome() {
        Outcome::Empty => {
            println!("no words left after filtering; lower the frequency threshold and retry");
        }
        Outcome::Ranked => {
            for (i, entry) in analysis.ranking.top.iter().enumerate() {
                println!("{}", format_ranked_line(i + 1, entry));
            }
        }
    }
}

fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_writer(std::io::stderr)
        .with_env_filter(
            tracing_subscriber::EnvFilter::from_default_env()
                .add_directive("zhfreq=info".parse()?)
                .add_directive("zhfreq_core=info".parse()?),
        )
        .init();

    Cli::parse().run()
}
