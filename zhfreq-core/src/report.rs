//! Plain-text analysis report.
//!
//! Layout:
//!
//! ```text
//! 分词结果：
//! 人工智能 一门 旨在 ...        (10 tokens per line)
//!
//! 词频统计TOP20：
//!  1. 人工智能     出现次数：3
//!  2. 机器学习     出现次数：3
//! ```
//!
//! Ranked lines follow `"{rank:2d}. {word:<8} 出现次数：{count}"`: rank
//! right-aligned to width 2, word left-aligned and padded to 8 characters.
//! Existing report readers depend on this exact layout.

use core::fmt;
use std::io::{self, Write};

use zhfreq_types::{RankedEntry, Token, REPORT_TOKENS_PER_LINE, REPORT_TOP_N};

use crate::rank::Ranking;

/// Header of the token stream section.
pub const TOKENS_HEADER: &str = "分词结果：";

/// Header of the ranked section.
pub const RANKING_HEADER: &str = "词频统计TOP20：";

/// Label between the padded word and its count.
pub const COUNT_LABEL: &str = "出现次数：";

/// Formats one ranked line.
pub fn format_ranked_line(rank: usize, entry: &RankedEntry) -> String {
    format!("{:>2}. {:<8} {}{}", rank, entry.surface, COUNT_LABEL, entry.count)
}

/// Parses a line written by [`format_ranked_line`].
pub fn parse_ranked_line(line: &str) -> Option<(usize, RankedEntry)> {
    let line = line.trim_end_matches(['\r', '\n']);
    let (rank, rest) = line.split_once(". ")?;
    let rank = rank.trim_start().parse().ok()?;
    let (word, count) = rest.rsplit_once(COUNT_LABEL)?;
    let word = word.strip_suffix(' ')?.trim_end();
    if word.is_empty() {
        return None;
    }
    let count = count.parse().ok()?;
    Some((rank, RankedEntry::new(word, count)))
}

/// Renders the report into a string.
pub fn render_report(ranking: &Ranking) -> String {
    let mut out = String::new();

    out.push_str(TOKENS_HEADER);
    out.push('\n');
    for line in ranking.tokens.chunks(REPORT_TOKENS_PER_LINE) {
        let words: Vec<&str> = line.iter().map(Token::as_str).collect();
        out.push_str(&words.join(" "));
        out.push('\n');
    }

    out.push('\n');
    out.push_str(RANKING_HEADER);
    out.push('\n');
    for (i, entry) in ranking.frequencies.ranked(REPORT_TOP_N).iter().enumerate() {
        out.push_str(&format_ranked_line(i + 1, entry));
        out.push('\n');
    }

    out
}

/// Renders the report into any writer.
pub fn write_report<W: Write>(mut out: W, ranking: &Ranking) -> io::Result<()> {
    out.write_all(render_report(ranking).as_bytes())?;
    out.flush()
}

/// Errors from reading a report back.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ReportError {
    /// A required section header is absent.
    MissingSection(&'static str),
    /// A line in the ranked section does not match the format.
    MalformedLine {
        /// 1-based line number in the report.
        line: usize,
        /// The offending text.
        content: String,
    },
}

impl fmt::Display for ReportError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ReportError::MissingSection(header) => write!(f, "missing section: {}", header),
            ReportError::MalformedLine { line, content } => {
                write!(f, "malformed ranked line {}: {:?}", line, content)
            }
        }
    }
}

impl core::error::Error for ReportError {}

/// A report read back into memory.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ParsedReport {
    /// The token stream, in order.
    pub tokens: Vec<String>,
    /// `(rank, entry)` triples from the ranked section.
    pub ranked: Vec<(usize, RankedEntry)>,
}

/// Parses a full report.
pub fn parse_report(text: &str) -> Result<ParsedReport, ReportError> {
    let mut lines = text.lines().enumerate();

    if !lines.any(|(_, l)| l == TOKENS_HEADER) {
        return Err(ReportError::MissingSection(TOKENS_HEADER));
    }

    let mut report = ParsedReport::default();
    let mut found_ranking = false;

    for (_, line) in lines.by_ref() {
        if line == RANKING_HEADER {
            found_ranking = true;
            break;
        }
        report.tokens.extend(line.split_whitespace().map(str::to_owned));
    }

    if !found_ranking {
        return Err(ReportError::MissingSection(RANKING_HEADER));
    }

    for (idx, line) in lines {
        if line.trim().is_empty() {
            continue;
        }
        let parsed = parse_ranked_line(line).ok_or_else(|| ReportError::MalformedLine {
            line: idx + 1,
            content: line.to_owned(),
        })?;
        report.ranked.push(parsed);
    }

    Ok(report)
}
