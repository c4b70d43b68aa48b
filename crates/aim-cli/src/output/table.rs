#[derive(Clone, Copy, Debug)]
pub struct TableOptions {
    pub max_width: Option<usize>,
    pub color: bool,
}

/// Render a simple aligned table for string rows.
#[must_use]
pub fn render_entity_table(
    headers: &[&str],
    rows: &[Vec<String>],
    options: TableOptions,
) -> String {
    let mut widths: Vec<usize> = headers
        .iter()
        .enumerate()
        .map(|(index, header)| {
            rows.iter()
                .filter_map(|row| row.get(index))
                .map(|cell| cell.chars().count())
                .max()
                .unwrap_or(0)
                .max(header.len())
                .max(MIN_WIDTH)
        })
        .collect();

    fit_widths(&mut widths, headers, options.max_width);

    let header_line = headers
        .iter()
        .zip(widths.iter())
        .map(|(header, width)| pad(&truncate_text(header, *width), *width, false))
        .collect::<Vec<_>>()
        .join("  ");

    let mut lines = Vec::with_capacity(2 + rows.len());
    lines.push(header_line.trim_end().to_string());
    lines.push("-".repeat(header_line.chars().count()));

    for row in rows {
        let cells = widths
            .iter()
            .enumerate()
            .map(|(index, width)| {
                let value = row.get(index).map_or("-", String::as_str);
                let text = truncate_text(value, *width);
                let padded = pad(&text, *width, looks_numeric(&text));
                if options.color {
                    colorize_level(&padded, &text)
                } else {
                    padded
                }
            })
            .collect::<Vec<_>>();
        lines.push(cells.join("  "));
    }

    lines.join("\n")
}

const MIN_WIDTH: usize = 6;

/// Shrink the widest columns one char at a time until the table fits.
fn fit_widths(widths: &mut [usize], headers: &[&str], max_width: Option<usize>) {
    let Some(max_width) = max_width else {
        return;
    };

    let separators = widths.len().saturating_sub(1) * 2;
    let mut total = widths.iter().sum::<usize>() + separators;

    while total > max_width {
        let candidate = widths
            .iter()
            .enumerate()
            .filter(|(idx, width)| **width > headers[*idx].len().max(MIN_WIDTH))
            .max_by_key(|(_, width)| **width)
            .map(|(idx, _)| idx);

        let Some(idx) = candidate else {
            break;
        };
        widths[idx] -= 1;
        total -= 1;
    }
}

fn truncate_text(value: &str, width: usize) -> String {
    if value.chars().count() <= width {
        return value.to_string();
    }
    if width <= 1 {
        return "…".to_string();
    }

    let mut out: String = value.chars().take(width - 1).collect();
    out.push('…');
    out
}

fn looks_numeric(value: &str) -> bool {
    let trimmed = value.trim();
    !trimmed.is_empty()
        && trimmed
            .chars()
            .all(|ch| ch.is_ascii_digit() || matches!(ch, '-' | '+' | '.'))
}

fn pad(value: &str, width: usize, right_align: bool) -> String {
    let fill = " ".repeat(width.saturating_sub(value.chars().count()));
    if right_align {
        format!("{fill}{value}")
    } else {
        format!("{value}{fill}")
    }
}

/// Color risk levels and assessment statuses; everything else passes through.
fn colorize_level(padded: &str, text: &str) -> String {
    let code = match text {
        "CONTROLLED" | "LOW" | "COMPLETED" => "32",
        "MEDIUM" | "LATENT" | "IN_PROGRESS" => "33",
        "HIGH" | "CRITICAL" => "31",
        _ => return padded.to_string(),
    };
    padded.replacen(text, &format!("\u{1b}[{code}m{text}\u{1b}[0m"), 1)
}

#[cfg(test)]
mod tests {
    use super::*;

    const PLAIN: TableOptions = TableOptions {
        max_width: None,
        color: false,
    };

    #[test]
    fn table_alignment_handles_mixed_widths() {
        let headers = ["id", "status", "clientId"];
        let rows = vec![
            vec!["asm-1".to_string(), "DRAFT".to_string(), "acme".to_string()],
            vec![
                "asm-200".to_string(),
                "IN_PROGRESS".to_string(),
                "a much longer client".to_string(),
            ],
        ];

        let table = render_entity_table(&headers, &rows, PLAIN);
        let lines: Vec<&str> = table.lines().collect();

        assert_eq!(lines.len(), 4);
        assert!(lines[0].starts_with("id"));
        assert!(lines[0].contains("status"));
        assert!(lines[1].chars().all(|c| c == '-'));
        assert_eq!(lines[2].find("DRAFT"), lines[3].find("IN_PROGRESS"));
    }

    #[test]
    fn numbers_are_right_aligned() {
        let rows = vec![vec!["2.5".to_string()], vec!["12.75".to_string()]];
        let table = render_entity_table(&["score"], &rows, PLAIN);
        let lines: Vec<&str> = table.lines().collect();
        assert_eq!(lines[2].len(), lines[3].len());
        assert!(lines[2].ends_with("2.5"));
        assert!(lines[2].starts_with(' '));
    }

    #[test]
    fn narrow_terminal_truncates_widest_column() {
        let rows = vec![vec![
            "asm-1".to_string(),
            "x".repeat(60),
        ]];
        let options = TableOptions {
            max_width: Some(40),
            color: false,
        };
        let table = render_entity_table(&["id", "clientId"], &rows, options);
        let row = table.lines().nth(2).expect("row");
        assert!(row.chars().count() <= 40);
        assert!(row.ends_with('…'));
    }

    #[test]
    fn risk_levels_are_colored_when_enabled() {
        let rows = vec![vec!["CRITICAL".to_string()], vec!["acme".to_string()]];
        let options = TableOptions {
            max_width: None,
            color: true,
        };
        let table = render_entity_table(&["riskLevel"], &rows, options);
        assert!(table.contains("\u{1b}[31mCRITICAL\u{1b}[0m"));
        assert!(table.lines().nth(3).is_some_and(|line| !line.contains('\u{1b}')));
    }

    #[test]
    fn truncate_keeps_short_values() {
        assert_eq!(truncate_text("LOW", 6), "LOW");
        assert_eq!(truncate_text("strategy_governance", 8), "strateg…");
        assert_eq!(truncate_text("abc", 1), "…");
    }
}
