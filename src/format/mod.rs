//! Output formatting for `git-tessera`.
//!
//! Currently just the fixed-width text table behind `ls`: a header row,
//! a `=` separator rule sized to the columns, then the data rows. Cell
//! widths are measured with `unicode-width` so wide glyphs line up.

use unicode_width::UnicodeWidthStr;

/// Render a fixed-width table with a header row and separator rule.
///
/// Every row must have the same number of cells as the header. Columns
/// are padded to the widest cell and joined with two spaces; the rule
/// under the header spans the summed widths plus the gaps.
#[must_use]
pub fn render_table(header: &[&str], rows: &[Vec<String>]) -> String {
    let columns = header.len();
    let mut widths: Vec<usize> = header.iter().map(|h| h.width()).collect();
    for row in rows {
        for (i, cell) in row.iter().enumerate().take(columns) {
            widths[i] = widths[i].max(cell.width());
        }
    }

    let mut out = String::new();
    push_row(&mut out, header.iter().copied(), &widths);
    let rule_width = widths.iter().sum::<usize>() + 2 * columns;
    out.push_str(&"=".repeat(rule_width));
    out.push('\n');
    for row in rows {
        push_row(&mut out, row.iter().map(String::as_str), &widths);
    }
    out
}

fn push_row<'a>(out: &mut String, cells: impl Iterator<Item = &'a str>, widths: &[usize]) {
    let mut line = String::new();
    for (cell, width) in cells.zip(widths) {
        line.push_str(cell);
        line.push_str(&" ".repeat(width.saturating_sub(cell.width()) + 2));
    }
    out.push_str(line.trim_end());
    out.push('\n');
}
