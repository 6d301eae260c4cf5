//! Body text extraction from a parsed HTML document.
//!
//! Two candidates are computed and the longer one wins:
//!
//! 1. every `<p>` whose trimmed text is longer than [`MIN_PARAGRAPH_CHARS`],
//!    joined with newlines
//! 2. the trimmed text of the first `<article>` element
//!
//! Paragraph aggregation suits typical news pages; the article container
//! catches pages that use semantic markup without dense `<p>` tagging.

use once_cell::sync::Lazy;
use scraper::{ElementRef, Html, Selector};
use zhfreq_types::MIN_PARAGRAPH_CHARS;

static PARAGRAPH: Lazy<Selector> =
    Lazy::new(|| Selector::parse("p").expect("paragraph selector is valid"));

static ARTICLE: Lazy<Selector> =
    Lazy::new(|| Selector::parse("article").expect("article selector is valid"));

/// Concatenates the trimmed text nodes under `el`.
fn stripped_text(el: ElementRef<'_>) -> String {
    el.text().map(str::trim).collect()
}

/// Candidate (1): qualifying paragraphs joined with `\n`.
pub fn paragraph_text(doc: &Html) -> String {
    doc.select(&PARAGRAPH)
        .map(stripped_text)
        .filter(|t| t.chars().count() > MIN_PARAGRAPH_CHARS)
        .collect::<Vec<_>>()
        .join("\n")
}

/// Candidate (2): text of the first `<article>`, or empty.
pub fn article_text(doc: &Html) -> String {
    doc.select(&ARTICLE)
        .next()
        .map(stripped_text)
        .unwrap_or_default()
}

/// Returns the longer of the two candidates, by character count.
/// Ties go to the article container.
pub fn extract_body_text(doc: &Html) -> String {
    let paragraphs = paragraph_text(doc);
    let article = article_text(doc);

    if paragraphs.chars().count() > article.chars().count() {
        paragraphs
    } else {
        article
    }
}

/// Parses `html` and extracts its body text.
pub fn extract_from_html(html: &str) -> String {
    extract_body_text(&Html::parse_document(html))
}

#[cfg(test)]
mod tests {
    use super::*;

    const LONG_P: &str = "机器学习是人工智能的核心领域之一";
    const SHORT_P: &str = "返回";

    #[test]
    fn short_paragraphs_dropped() {
        let html = format!("<html><body><p>{}</p><p>{}</p></body></html>", SHORT_P, LONG_P);
        let doc = Html::parse_document(&html);
        assert_eq!(paragraph_text(&doc), LONG_P);
    }

    #[test]
    fn paragraph_threshold_is_exclusive() {
        let ten = "一二三四五六七八九十";
        let eleven = "一二三四五六七八九十百";
        let html = format!("<p>{}</p><p>{}</p>", ten, eleven);
        assert_eq!(paragraph_text(&Html::parse_document(&html)), eleven);
    }

    #[test]
    fn paragraphs_joined_with_newline() {
        let html = format!("<p>{}</p><p>  {}  </p>", LONG_P, LONG_P);
        let text = paragraph_text(&Html::parse_document(&html));
        assert_eq!(text, format!("{}\n{}", LONG_P, LONG_P));
    }

    #[test]
    fn nested_text_is_stripped_and_concatenated() {
        let html = "<p>  深度学习 <b> 神经网络 </b> 图像识别与语音识别  </p>";
        let text = paragraph_text(&Html::parse_document(html));
        assert_eq!(text, "深度学习神经网络图像识别与语音识别");
    }

    #[test]
    fn article_wins_without_paragraphs() {
        let html = "<article><div>自然语言处理专注于让计算机理解人类语言</div></article>";
        assert_eq!(extract_from_html(html), "自然语言处理专注于让计算机理解人类语言");
    }

    #[test]
    fn paragraphs_win_when_longer() {
        let html = format!(
            "<article><h1>标题</h1></article><p>{}</p><p>{}</p>",
            LONG_P, LONG_P
        );
        assert_eq!(extract_from_html(&html), format!("{}\n{}", LONG_P, LONG_P));
    }

    #[test]
    fn article_wins_ties_and_contains_paragraphs() {
        // The article's own text includes its paragraph, and is at least as long.
        let html = format!("<article><p>{}</p></article>", LONG_P);
        assert_eq!(extract_from_html(&html), LONG_P);
    }

    #[test]
    fn empty_document() {
        assert_eq!(extract_from_html(""), "");
        assert_eq!(extract_from_html("<html><body><div>x</div></body></html>"), "");
    }

    #[test]
    fn only_first_article_used() {
        let html = "<article>第一篇文章内容</article><article>第二篇文章的内容更长一些</article>";
        assert_eq!(extract_from_html(html), "第一篇文章内容");
    }
}
