//! The prompt-file format.
//!
//! Prompts persist as UTF-8 delimited text with a fixed 7-column schema.
//! The first line is always the header row, even for an empty store. A
//! field is wrapped in double quotes (with internal quotes doubled) exactly
//! when it contains a comma, a double quote, or a line break; anything else
//! is emitted bare, so encoding and decoding are exactly reversible.
//!
//! Rows are CRLF-terminated on write. The decoder accepts CRLF, bare LF and
//! bare CR as row terminators, and never hard-fails on malformed data rows:
//! blank rows are dropped, short rows are padded with empty trailing fields,
//! and a dangling unterminated quote at end of text yields whatever was
//! scanned. The only condition reported to the caller is a header that does
//! not match the expected columns — the caller decides whether that means
//! "reinitialize the file" (load) or "reject the file" (import).

use crate::error::{PromptError, Result};
use crate::model::Record;
use chrono::{DateTime, Utc};

/// Column names in persisted order.
pub const COLUMNS: [&str; 7] = [
    "ID", "Group", "Subgroup", "Title", "Content", "CreatedAt", "UpdatedAt",
];

/// On-disk timestamp layout. Millisecond precision, always UTC; descending
/// chronological order equals descending lexicographic order.
pub const TIMESTAMP_FORMAT: &str = "%Y-%m-%dT%H:%M:%S%.3fZ";

/// One decoded data row, still in raw string form. A short row decodes with
/// its missing trailing fields empty.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct RawRow {
    pub id: String,
    pub group: String,
    pub subgroup: String,
    pub title: String,
    pub content: String,
    pub created_at: String,
    pub updated_at: String,
}

/// Encode records in column order, header row first, one CRLF-terminated
/// line per row.
pub fn encode(records: &[Record]) -> String {
    let mut out = String::new();
    out.push_str(&COLUMNS.join(","));
    out.push_str("\r\n");
    for r in records {
        let created = format_timestamp(r.created_at);
        let updated = format_timestamp(r.updated_at);
        let fields = [
            r.id.as_str(),
            r.group.as_str(),
            r.subgroup.as_str(),
            r.title.as_str(),
            r.content.as_str(),
            created.as_str(),
            updated.as_str(),
        ];
        out.push_str(&fields.map(quote_field).join(","));
        out.push_str("\r\n");
    }
    out
}

/// Decode prompt-file text into raw rows.
///
/// Returns [`PromptError::HeaderMismatch`] when the text is empty or its
/// first row does not carry the expected column names (compared
/// case-insensitively, order-sensitively). Data rows whose fields are all
/// blank are dropped; everything else is returned.
pub fn decode(text: &str) -> Result<Vec<RawRow>> {
    let mut rows = split_rows(text);
    if rows.is_empty() {
        return Err(PromptError::HeaderMismatch);
    }
    let header = rows.remove(0);
    if !header_matches(&header) {
        return Err(PromptError::HeaderMismatch);
    }
    Ok(rows
        .into_iter()
        .filter(|fields| fields.iter().any(|f| !f.trim().is_empty()))
        .map(row_from_fields)
        .collect())
}

pub fn format_timestamp(ts: DateTime<Utc>) -> String {
    ts.format(TIMESTAMP_FORMAT).to_string()
}

/// Parse a stored timestamp. Accepts any RFC 3339 offset form, not just the
/// canonical `Z` layout, so hand-edited files survive a reload.
pub fn parse_timestamp(s: &str) -> Option<DateTime<Utc>> {
    DateTime::parse_from_rfc3339(s.trim())
        .ok()
        .map(|dt| dt.with_timezone(&Utc))
}

fn header_matches(fields: &[String]) -> bool {
    fields.len() == COLUMNS.len()
        && fields
            .iter()
            .zip(COLUMNS.iter())
            .all(|(got, want)| got.trim().eq_ignore_ascii_case(want))
}

fn quote_field(field: &str) -> String {
    if field.contains(',') || field.contains('"') || field.contains('\n') || field.contains('\r') {
        format!("\"{}\"", field.replace('"', "\"\""))
    } else {
        field.to_string()
    }
}

/// Split raw text into rows of fields with a single left-to-right scan and
/// one "inside quoted field" flag. A final row without a terminator is
/// kept; so is whatever a dangling unterminated quote had accumulated.
fn split_rows(text: &str) -> Vec<Vec<String>> {
    let mut rows: Vec<Vec<String>> = Vec::new();
    let mut row: Vec<String> = Vec::new();
    let mut field = String::new();
    let mut in_quotes = false;

    let mut chars = text.chars().peekable();
    while let Some(c) = chars.next() {
        if in_quotes {
            if c == '"' {
                if chars.peek() == Some(&'"') {
                    chars.next();
                    field.push('"');
                } else {
                    in_quotes = false;
                }
            } else {
                field.push(c);
            }
        } else {
            match c {
                '"' => in_quotes = true,
                ',' => row.push(std::mem::take(&mut field)),
                '\r' | '\n' => {
                    if c == '\r' && chars.peek() == Some(&'\n') {
                        chars.next();
                    }
                    row.push(std::mem::take(&mut field));
                    rows.push(std::mem::take(&mut row));
                }
                _ => field.push(c),
            }
        }
    }

    if !field.is_empty() || !row.is_empty() {
        row.push(field);
        rows.push(row);
    }
    rows
}

fn row_from_fields(mut fields: Vec<String>) -> RawRow {
    fields.resize(COLUMNS.len(), String::new());
    let mut it = fields.into_iter();
    RawRow {
        id: it.next().unwrap_or_default(),
        group: it.next().unwrap_or_default(),
        subgroup: it.next().unwrap_or_default(),
        title: it.next().unwrap_or_default(),
        content: it.next().unwrap_or_default(),
        created_at: it.next().unwrap_or_default(),
        updated_at: it.next().unwrap_or_default(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn record(id: &str, group: &str, subgroup: &str, title: &str, content: &str) -> Record {
        let ts = parse_timestamp("2024-01-01T00:00:00.000Z").unwrap();
        Record {
            id: id.to_string(),
            group: group.to_string(),
            subgroup: subgroup.to_string(),
            title: title.to_string(),
            content: content.to_string(),
            created_at: ts,
            updated_at: ts,
        }
    }

    fn rebuild(row: &RawRow) -> Record {
        Record {
            id: row.id.clone(),
            group: row.group.clone(),
            subgroup: row.subgroup.clone(),
            title: row.title.clone(),
            content: row.content.clone(),
            created_at: parse_timestamp(&row.created_at).unwrap(),
            updated_at: parse_timestamp(&row.updated_at).unwrap(),
        }
    }

    #[test]
    fn empty_store_encodes_to_header_only() {
        assert_eq!(encode(&[]), "ID,Group,Subgroup,Title,Content,CreatedAt,UpdatedAt\r\n");
    }

    #[test]
    fn quoting_doubles_internal_quotes() {
        let r = record("1", "Work", "Emails", "Greeting", "Hi, \"friend\"");
        let text = encode(&[r]);
        let line = text.lines().nth(1).unwrap();
        assert_eq!(
            line,
            "1,Work,Emails,Greeting,\"Hi, \"\"friend\"\"\",2024-01-01T00:00:00.000Z,2024-01-01T00:00:00.000Z"
        );
    }

    #[test]
    fn round_trips_awkward_fields() {
        let records = vec![
            record("1", "a,b", "c\"d", "line\nbreak", "plain"),
            record("2", "", "", "cr\rhere", "trailing,comma,"),
            record("3", "Ünïcode", "émoji 🎉", "t", "multi\r\nline\r\ncontent"),
        ];
        let rows = decode(&encode(&records)).unwrap();
        let rebuilt: Vec<Record> = rows.iter().map(rebuild).collect();
        assert_eq!(rebuilt, records);
    }

    #[test]
    fn reencoding_a_decoded_file_is_byte_identical() {
        let records = vec![record("1", "g", "s", "t", "c,\"x\"\ny")];
        let first = encode(&records);
        let second = encode(&decode(&first).unwrap().iter().map(rebuild).collect::<Vec<_>>());
        assert_eq!(first, second);
    }

    #[test]
    fn accepts_lf_and_bare_cr_row_terminators() {
        let text = "ID,Group,Subgroup,Title,Content,CreatedAt,UpdatedAt\na,g,s,t1,c1,,\rb,g,s,t2,c2,,";
        let rows = decode(text).unwrap();
        assert_eq!(rows.len(), 2);
        assert_eq!(rows[0].title, "t1");
        assert_eq!(rows[1].title, "t2");
    }

    #[test]
    fn last_row_survives_without_final_terminator() {
        let text = "ID,Group,Subgroup,Title,Content,CreatedAt,UpdatedAt\r\n1,g,s,t,c,,";
        let rows = decode(text).unwrap();
        assert_eq!(rows.len(), 1);
        assert_eq!(rows[0].content, "c");
    }

    #[test]
    fn short_rows_pad_missing_trailing_fields() {
        let text = "ID,Group,Subgroup,Title,Content,CreatedAt,UpdatedAt\r\n1,g,s,t,c\r\n";
        let rows = decode(text).unwrap();
        assert_eq!(rows[0].content, "c");
        assert_eq!(rows[0].created_at, "");
        assert_eq!(rows[0].updated_at, "");
    }

    #[test]
    fn blank_rows_are_dropped() {
        let text = "ID,Group,Subgroup,Title,Content,CreatedAt,UpdatedAt\r\n1,g,s,t,c,,\r\n , , , , , , \r\n\r\n";
        let rows = decode(text).unwrap();
        assert_eq!(rows.len(), 1);
    }

    #[test]
    fn dangling_unterminated_quote_keeps_prior_rows() {
        let text =
            "ID,Group,Subgroup,Title,Content,CreatedAt,UpdatedAt\r\n1,g,s,t,c,,\r\n2,g,s,t2,\"never closed";
        let rows = decode(text).unwrap();
        assert_eq!(rows[0].title, "t");
        assert_eq!(rows[1].title, "t2");
        assert_eq!(rows[1].content, "never closed");
    }

    #[test]
    fn header_comparison_is_case_insensitive_but_order_sensitive() {
        let ok = "id,group,subgroup,title,content,createdat,updatedat\r\n1,g,s,t,c,,\r\n";
        assert_eq!(decode(ok).unwrap().len(), 1);

        let renamed = "ID,Group,Subgroup,Title,Body,Created,Modified\r\n1,g,s,t,c,,\r\n";
        assert!(matches!(decode(renamed), Err(PromptError::HeaderMismatch)));

        let reordered = "Group,ID,Subgroup,Title,Content,CreatedAt,UpdatedAt\r\n";
        assert!(matches!(decode(reordered), Err(PromptError::HeaderMismatch)));
    }

    #[test]
    fn empty_text_needs_reinitialization() {
        assert!(matches!(decode(""), Err(PromptError::HeaderMismatch)));
        assert!(matches!(decode("   \r\n"), Err(PromptError::HeaderMismatch)));
    }

    #[test]
    fn timestamps_accept_offset_forms_and_reject_garbage() {
        assert!(parse_timestamp("2024-01-01T00:00:00.000Z").is_some());
        assert!(parse_timestamp("2024-01-01T01:00:00+01:00").is_some());
        assert!(parse_timestamp("yesterday").is_none());
        assert!(parse_timestamp("").is_none());
    }
}
