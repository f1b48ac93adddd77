//! Minimal tag scanning for the status page.
//!
//! Not a general HTML parser: it walks tags in document order and slices
//! element contents between an opening tag and the next matching close tag.

/// One tag as it appears in the markup.
#[derive(Debug, Clone, PartialEq, Eq)]
pub(crate) struct Tag<'a> {
    /// Lowercased tag name, without `/`.
    pub name: String,
    pub closing: bool,
    /// Raw attribute text between the name and `>`.
    pub attrs: &'a str,
    /// Byte offset of `<`.
    pub start: usize,
    /// Byte offset just past `>`.
    pub end: usize,
}

impl<'a> Tag<'a> {
    pub fn is_open(&self, name: &str) -> bool {
        !self.closing && self.name == name
    }

    pub fn is_close(&self, name: &str) -> bool {
        self.closing && self.name == name
    }

    /// Whitespace-separated tokens of the `class` attribute.
    pub fn classes(&self) -> Vec<&'a str> {
        attr_value(self.attrs, "class")
            .map(|v| v.split_whitespace().collect())
            .unwrap_or_default()
    }

    pub fn has_class(&self, class: &str) -> bool {
        self.classes().iter().any(|c| *c == class)
    }
}

/// Iterate tags starting at byte offset `from`. Comments are skipped.
pub(crate) fn tags(html: &str, from: usize) -> Tags<'_> {
    Tags { html, pos: from }
}

pub(crate) struct Tags<'a> {
    html: &'a str,
    pos: usize,
}

impl<'a> Iterator for Tags<'a> {
    type Item = Tag<'a>;

    fn next(&mut self) -> Option<Tag<'a>> {
        loop {
            let start = self.html.get(self.pos..)?.find('<')? + self.pos;
            let rest = &self.html[start..];

            if rest.starts_with("<!--") {
                self.pos = match rest.find("-->") {
                    Some(i) => start + i + 3,
                    None => self.html.len(),
                };
                continue;
            }

            let close = rest.find('>')?;
            let end = start + close + 1;
            self.pos = end;

            let inner = rest[1..close].trim_end_matches('/');
            let (closing, inner) = match inner.strip_prefix('/') {
                Some(i) => (true, i),
                None => (false, inner),
            };

            let name_len = inner
                .find(|c: char| c.is_whitespace())
                .unwrap_or(inner.len());
            let name = inner[..name_len].to_ascii_lowercase();

            if name.is_empty() || !name.chars().all(|c| c.is_ascii_alphanumeric()) {
                // `<!DOCTYPE>`, `<?xml>` and stray `<`.
                continue;
            }

            return Some(Tag {
                name,
                closing,
                attrs: &inner[name_len..],
                start,
                end,
            });
        }
    }
}

/// Value of attribute `name` in raw attribute text.
pub(crate) fn attr_value<'a>(attrs: &'a str, name: &str) -> Option<&'a str> {
    let mut rest = attrs;

    loop {
        rest = rest.trim_start();
        if rest.is_empty() {
            return None;
        }

        let key_len = rest
            .find(|c: char| c == '=' || c.is_whitespace())
            .unwrap_or(rest.len());
        let key = &rest[..key_len];
        rest = rest[key_len..].trim_start();

        let Some(after_eq) = rest.strip_prefix('=') else {
            // Bare attribute.
            continue;
        };
        let after_eq = after_eq.trim_start();

        let (value, remainder) = match after_eq.chars().next() {
            Some(q @ ('"' | '\'')) => {
                let body = &after_eq[1..];
                match body.find(q) {
                    Some(i) => (&body[..i], &body[i + 1..]),
                    None => (body, ""),
                }
            }
            _ => {
                let i = after_eq
                    .find(|c: char| c.is_whitespace())
                    .unwrap_or(after_eq.len());
                (&after_eq[..i], &after_eq[i..])
            }
        };

        if key.eq_ignore_ascii_case(name) {
            return Some(value);
        }
        rest = remainder;
    }
}

/// Inner markup of the element opened by `open`, up to the next `</name>`.
///
/// Falls back to the end of the document if the element is never closed.
pub(crate) fn inner_html<'a>(html: &'a str, open: &Tag<'_>) -> &'a str {
    let body_end = tags(html, open.end)
        .find(|t| t.is_close(&open.name))
        .map(|t| t.start)
        .unwrap_or(html.len());
    &html[open.end..body_end]
}

/// Inner markup of the element opened by `open`, up to its matching close.
///
/// Same-name elements nested inside are skipped over. Falls back to the end
/// of the document if the element is never closed.
pub(crate) fn element_html<'a>(html: &'a str, open: &Tag<'_>) -> &'a str {
    let mut depth = 0usize;
    let body_end = tags(html, open.end)
        .filter(|t| t.name == open.name)
        .find(|t| {
            if !t.closing {
                depth += 1;
                return false;
            }
            if depth == 0 {
                return true;
            }
            depth -= 1;
            false
        })
        .map(|t| t.start)
        .unwrap_or(html.len());
    &html[open.end..body_end]
}

/// Visible text of a markup fragment: tags removed, entities decoded.
pub(crate) fn text(fragment: &str) -> String {
    let mut out = String::with_capacity(fragment.len());
    let mut last = 0;

    for tag in tags(fragment, 0) {
        out.push_str(&fragment[last..tag.start]);
        if tag.name == "br" {
            out.push('\n');
        }
        last = tag.end;
    }
    out.push_str(&fragment[last..]);

    decode_entities(&out)
}

/// Decode named entities common in the page plus numeric references.
pub(crate) fn decode_entities(s: &str) -> String {
    if !s.contains('&') {
        return s.to_string();
    }

    let mut out = String::with_capacity(s.len());
    let mut rest = s;

    while let Some(amp) = rest.find('&') {
        out.push_str(&rest[..amp]);
        let after = &rest[amp..];

        let decoded = after
            .find(';')
            .filter(|&semi| semi <= 10)
            .and_then(|semi| decode_entity(&after[1..semi]).map(|c| (c, semi)));

        match decoded {
            Some((c, semi)) => {
                out.push(c);
                rest = &after[semi + 1..];
            }
            None => {
                out.push('&');
                rest = &after[1..];
            }
        }
    }

    out.push_str(rest);
    out
}

fn decode_entity(name: &str) -> Option<char> {
    match name {
        "amp" => Some('&'),
        "lt" => Some('<'),
        "gt" => Some('>'),
        "quot" => Some('"'),
        "apos" => Some('\''),
        "nbsp" => Some(' '),
        _ => {
            let num = name.strip_prefix('#')?;
            let code = match num.strip_prefix(['x', 'X']) {
                Some(hex) => u32::from_str_radix(hex, 16).ok()?,
                None => num.parse().ok()?,
            };
            char::from_u32(code)
        }
    }
}
