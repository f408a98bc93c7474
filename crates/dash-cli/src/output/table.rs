const MIN_WIDTH: usize = 5;
const MAX_CELL_WIDTH: usize = 48;

/// Render an aligned plain-text table: header, divider, one line per row.
///
/// Numeric-looking cells are right-aligned; long cells are cut with `…`.
#[must_use]
pub fn render(headers: &[&str], rows: &[Vec<String>]) -> String {
    let widths = headers
        .iter()
        .enumerate()
        .map(|(index, header)| {
            rows.iter()
                .filter_map(|row| row.get(index))
                .map(|cell| cell.chars().count())
                .chain([header.chars().count(), MIN_WIDTH])
                .max()
                .unwrap_or(MIN_WIDTH)
                .min(MAX_CELL_WIDTH)
        })
        .collect::<Vec<_>>();

    let header_cells = headers.iter().map(|h| (*h).to_string()).collect::<Vec<_>>();
    let header_line = format_row(&header_cells, &widths, false);
    let divider = "-".repeat(widths.iter().sum::<usize>() + widths.len().saturating_sub(1) * 2);

    let mut lines = Vec::with_capacity(rows.len() + 2);
    lines.push(header_line);
    lines.push(divider);
    lines.extend(rows.iter().map(|row| format_row(row, &widths, true)));
    lines.join("\n")
}

fn format_row(cells: &[String], widths: &[usize], align_numbers: bool) -> String {
    let line = widths
        .iter()
        .enumerate()
        .map(|(index, width)| {
            let cell = cells.get(index).map_or("-", String::as_str);
            let text = truncate(cell, *width);
            if align_numbers && looks_numeric(&text) {
                format!("{text:>width$}")
            } else {
                format!("{text:<width$}")
            }
        })
        .collect::<Vec<_>>()
        .join("  ");
    line.trim_end().to_string()
}

fn truncate(value: &str, width: usize) -> String {
    if value.chars().count() <= width {
        return value.to_string();
    }
    let mut out = value.chars().take(width.saturating_sub(1)).collect::<String>();
    out.push('…');
    out
}

fn looks_numeric(value: &str) -> bool {
    let trimmed = value.trim();
    trimmed.chars().any(|ch| ch.is_ascii_digit())
        && trimmed
            .chars()
            .all(|ch| ch.is_ascii_digit() || matches!(ch, '-' | '+' | '.'))
}
