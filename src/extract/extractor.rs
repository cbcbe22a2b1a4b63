//! Walks fund page markup and collects every parseable "as of" date with its context.

use scraper::{Html, Selector};
use tracing::debug;

use crate::domain::DateRecord;
use crate::error::AppError;
use crate::extract::context::{CONTEXT_DEPTH, ancestor_text};
use crate::extract::dates::AsOfParser;

/// Elements whose text is inspected for an "as of" marker.
const CONTAINER_TAGS: &str = "span, div";
const AS_OF_MARKER: &str = "as of";

/// Everything later stages need from one page.
#[derive(Debug, Clone, Default)]
pub struct PageDates {
    /// Parsed records in document order.
    pub records: Vec<DateRecord>,
    /// Concatenated text of the whole document.
    pub text: String,
}

#[derive(Debug, Clone)]
pub struct DateContextExtractor {
    containers: Selector,
    parser: AsOfParser,
}

impl DateContextExtractor {
    pub fn new() -> Result<Self, AppError> {
        let containers = Selector::parse(CONTAINER_TAGS)
            .map_err(|e| AppError::runtime(format!("Invalid container selector: {e:?}")))?;
        Ok(Self {
            containers,
            parser: AsOfParser::new()?,
        })
    }

    /// Best-effort: nodes whose date does not parse are skipped silently.
    pub fn extract(&self, html: &str) -> PageDates {
        let doc = Html::parse_document(html);

        let mut records = Vec::new();
        for el in doc.select(&self.containers) {
            let text: String = el.text().collect();
            if !text.to_lowercase().contains(AS_OF_MARKER) {
                continue;
            }
            let Some((date, date_text)) = self.parser.parse(&text) else {
                continue;
            };
            records.push(DateRecord {
                date,
                raw_text: text.trim().to_string(),
                date_text,
                context: ancestor_text(el, CONTEXT_DEPTH),
            });
        }

        let text: String = doc.root_element().text().collect();
        debug!(records = records.len(), "extracted as-of dates");

        PageDates { records, text }
    }
}
