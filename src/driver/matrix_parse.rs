use crate::error::{Result, SpanTreeError};
use crate::graph::matrix::AdjacencyMatrix;
use crate::types::Weight;

/// Parse a whitespace/comma separated weight matrix, one row per line.
///
/// `#` starts a comment, blank lines are skipped, and `[`/`]` are ignored so
/// a nested list literal can be pasted as is. `0` means "no edge".
pub fn parse_matrix(text: &str) -> Result<AdjacencyMatrix> {
    let mut rows = Vec::new();
    for (i, raw) in text.lines().enumerate() {
        if let Some(row) = parse_row(raw, i + 1)? {
            rows.push(row);
        }
    }
    if rows.is_empty() {
        return Err(SpanTreeError::Parse {
            line: 0,
            reason: "no matrix rows found".into(),
        });
    }
    AdjacencyMatrix::from_weights(rows)
}

/// Parse one line. Returns `None` for lines that carry no entries.
fn parse_row(raw: &str, line: usize) -> Result<Option<Vec<Weight>>> {
    let content = raw.split('#').next().unwrap_or(raw);
    let row = content
        .split(|c: char| c.is_whitespace() || matches!(c, ',' | '[' | ']'))
        .filter(|t| !t.is_empty())
        .map(|t| {
            t.parse::<Weight>().map_err(|e| SpanTreeError::Parse {
                line,
                reason: format!("bad weight '{t}': {e}"),
            })
        })
        .collect::<Result<Vec<_>>>()?;
    Ok((!row.is_empty()).then_some(row))
}
