//! Splitting a record line into fields.

/// One whitespace-separated field, or the text between a pair of double quotes.
#[derive(Debug, Clone, PartialEq, Eq)]
pub(crate) struct Field<'a> {
    pub text: &'a str,
    pub quoted: bool,
}

impl Field<'_> {
    /// Description text: underscores stand for spaces unless the field was quoted.
    pub fn description(&self) -> String {
        if self.quoted {
            self.text.to_owned()
        } else {
            self.text.replace('_', " ")
        }
    }

    pub fn is(&self, keyword: &str) -> bool {
        !self.quoted && self.text.eq_ignore_ascii_case(keyword)
    }
}

/// Returns `None` when a quote is left open.
pub(crate) fn split(line: &str) -> Option<Vec<Field<'_>>> {
    let mut fields = Vec::new();
    let mut rest = line.trim_start();
    while !rest.is_empty() {
        if let Some(quoted) = rest.strip_prefix('"') {
            let end = quoted.find('"')?;
            fields.push(Field {
                text: &quoted[..end],
                quoted: true,
            });
            rest = &quoted[end + 1..];
        } else {
            let end = rest
                .find(|c: char| c.is_whitespace() || c == '"')
                .unwrap_or(rest.len());
            fields.push(Field {
                text: &rest[..end],
                quoted: false,
            });
            rest = &rest[end..];
        }
        rest = rest.trim_start();
    }
    Some(fields)
}
