/// Strips markdown quote lines, code spans, and URLs from a raw comment body
/// so the enclosed text is never scanned for ticker mentions.
#[derive(Debug, Clone, Copy)]
pub struct TextNormalizer {
    /// When disabled, quote lines and code spans survive; URL removal and
    /// entity cleanup still apply.
    pub strip_quotes_and_code: bool,
}

impl TextNormalizer {
    pub fn new(strip_quotes_and_code: bool) -> Self {
        Self {
            strip_quotes_and_code,
        }
    }

    /// Cleans a raw comment body for matching.
    ///
    /// Stages run in a fixed order: quote lines first (they are line-scoped,
    /// and code spans may contain `>` characters), then fenced code blocks,
    /// then inline code spans, then URLs. Removed spans are replaced with a
    /// single space so the surrounding words do not fuse into new tokens.
    pub fn normalize(&self, raw: &str) -> String {
        let text = if self.strip_quotes_and_code {
            let unquoted = strip_quote_lines(raw);
            let unfenced = strip_delimited_spans(&unquoted, "```");
            strip_delimited_spans(&unfenced, "`")
        } else {
            raw.to_string()
        };

        // Comment bodies arrive with `&` HTML-escaped.
        strip_urls(&text).replace("&amp;", "&")
    }
}

/// Removes every line whose first non-whitespace character is the reply-quote
/// marker `>`.
fn strip_quote_lines(text: &str) -> String {
    text.lines()
        .filter(|line| !line.trim_start().starts_with('>'))
        .collect::<Vec<_>>()
        .join("\n")
}

/// Removes spans enclosed by paired `delimiter` markers, replacing each span
/// with a single space. An unpaired trailing delimiter is left in place.
fn strip_delimited_spans(text: &str, delimiter: &str) -> String {
    let mut segments = text.split(delimiter);
    let mut result = String::with_capacity(text.len());

    // The first segment always precedes any delimiter.
    if let Some(first) = segments.next() {
        result.push_str(first);
    }

    loop {
        match (segments.next(), segments.next()) {
            // A complete open/close pair: the enclosed segment is dropped.
            (Some(_enclosed), Some(after)) => {
                result.push(' ');
                result.push_str(after);
            }
            // A trailing delimiter with no closing partner.
            (Some(tail), None) => {
                result.push_str(delimiter);
                result.push_str(tail);
                break;
            }
            (None, _) => break,
        }
    }

    result
}

/// Removes URL tokens line by line: a fragment containing a scheme is
/// truncated from the scheme onward, and a bare `www.` fragment is dropped
/// whole.
fn strip_urls(text: &str) -> String {
    text.lines()
        .map(|line| {
            line.split_whitespace()
                .filter_map(strip_url_from_fragment)
                .collect::<Vec<_>>()
                .join(" ")
        })
        .collect::<Vec<_>>()
        .join("\n")
}

fn strip_url_from_fragment(fragment: &str) -> Option<&str> {
    for scheme in ["http://", "https://"] {
        if let Some(index) = fragment.find(scheme) {
            return if index == 0 {
                None
            } else {
                Some(&fragment[..index])
            };
        }
    }

    if fragment.starts_with("www.") {
        return None;
    }

    Some(fragment)
}
