use crate::board::RawTriple;
use crate::source::error::ParseError;
use crate::source::markup::{Tag, element_html, inner_html, tags, text};

/// Turns page bytes into raw status rows.
pub trait MarkupExtractor: Send + Sync {
    fn extract(&self, page: &[u8]) -> Result<Vec<RawTriple>, ParseError>;
}

/// Extractor for the area status page.
///
/// Reads the first `<table>` inside the element with class `trouble`. Cells
/// are taken three at a time (line, status, detail); a trailing partial row
/// is dropped.
#[derive(Debug, Clone, Copy, Default)]
pub struct TroubleTableExtractor;

pub const CONTAINER_CLASS: &str = "trouble";
pub const STATUS_CLASS: &str = "colTrouble";

impl MarkupExtractor for TroubleTableExtractor {
    fn extract(&self, page: &[u8]) -> Result<Vec<RawTriple>, ParseError> {
        let html = String::from_utf8_lossy(page);
        let html = html.as_ref();

        let container = tags(html, 0)
            .find(|t| !t.closing && t.has_class(CONTAINER_CLASS))
            .ok_or(ParseError::MissingContainer {
                class: CONTAINER_CLASS,
            })?;

        let scope = element_html(html, &container);
        let table = tags(scope, 0)
            .find(|t| t.is_open("table"))
            .ok_or(ParseError::MissingTable {
                class: CONTAINER_CLASS,
            })?;

        let body = inner_html(scope, &table);
        let cells = cells(body);

        Ok(cells
            .chunks_exact(3)
            .map(|row| to_triple(row[0], row[1], row[2]))
            .collect())
    }
}

/// Inner markup of every `<td>` in document order.
fn cells(table: &str) -> Vec<&str> {
    tags(table, 0)
        .filter(|t| t.is_open("td"))
        .map(|open| inner_html(table, &open))
        .collect()
}

fn to_triple(line_cell: &str, status_cell: &str, detail_cell: &str) -> RawTriple {
    let line = match first_open(line_cell, |t| t.is_open("a")) {
        Some(anchor) => text(inner_html(line_cell, &anchor)),
        None => text(line_cell),
    };

    let span = first_open(status_cell, |t| t.is_open("span") && t.has_class(STATUS_CLASS))
        .or_else(|| first_open(status_cell, |t| t.is_open("span")));

    let (status, markers) = match span {
        Some(span) => (
            text(inner_html(status_cell, &span)),
            span.classes().into_iter().map(str::to_string).collect(),
        ),
        None => (text(status_cell), Vec::new()),
    };

    RawTriple {
        line,
        status,
        markers,
        detail: text(detail_cell),
    }
}

fn first_open<'a, P>(fragment: &'a str, pred: P) -> Option<Tag<'a>>
where
    P: Fn(&Tag<'a>) -> bool,
{
    tags(fragment, 0).find(|t| pred(t))
}
