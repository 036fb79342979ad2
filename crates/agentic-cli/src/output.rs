use serde::Serialize;

pub const TITLE: &str = "CLAUDE CODE AGENTIC ENGINEERING";
pub const TAGLINE: &str = "Advanced Development Workflow System";

const BANNER_WIDTH: usize = 60;

pub fn print_json<T: Serialize>(value: &T) -> anyhow::Result<()> {
    let json = serde_json::to_string_pretty(value)?;
    println!("{}", json);
    Ok(())
}

pub fn print_table(headers: &[&str], rows: Vec<Vec<String>>) {
    print!("{}", render_table(headers, &rows));
}

pub fn render_table(headers: &[&str], rows: &[Vec<String>]) -> String {
    // Calculate column widths
    let mut widths: Vec<usize> = headers.iter().map(|h| h.len()).collect();
    for row in rows {
        for (i, cell) in row.iter().enumerate() {
            if i < widths.len() {
                widths[i] = widths[i].max(cell.chars().count());
            }
        }
    }

    let mut out = String::new();

    let header_row: Vec<String> = headers
        .iter()
        .enumerate()
        .map(|(i, h)| format!("{:width$}", h, width = widths[i]))
        .collect();
    out.push_str(header_row.join("  ").trim_end());
    out.push('\n');

    let sep: Vec<String> = widths.iter().map(|&w| "-".repeat(w)).collect();
    out.push_str(&sep.join("  "));
    out.push('\n');

    for row in rows {
        let cells: Vec<String> = row
            .iter()
            .enumerate()
            .map(|(i, cell)| {
                let w = widths.get(i).copied().unwrap_or(0);
                format!("{:width$}", cell, width = w)
            })
            .collect();
        out.push_str(cells.join("  ").trim_end());
        out.push('\n');
    }
    out
}

/// Title, rule and tagline, centered. ASCII only.
pub fn print_banner() {
    let rule = "=".repeat(BANNER_WIDTH);
    println!();
    println!("{:^width$}", TITLE, width = BANNER_WIDTH);
    println!("{rule}");
    println!("{:^width$}", TAGLINE, width = BANNER_WIDTH);
    println!("{rule}");
    println!();
}

/// Section heading: `--- Title ---------`.
pub fn print_rule(title: &str) {
    let lead = format!("--- {title} ");
    let fill = BANNER_WIDTH.saturating_sub(lead.chars().count());
    println!("{lead}{}", "-".repeat(fill));
}

pub fn print_panel(title: &str, body: &str) {
    print!("{}", render_panel(title, body));
}

/// Boxed block of text with the title set into the top border.
pub fn render_panel(title: &str, body: &str) -> String {
    let title_len = title.chars().count();
    let content = body
        .lines()
        .map(|l| l.chars().count())
        .max()
        .unwrap_or(0)
        .max(title_len + 3);

    let mut out = String::new();
    out.push_str(&format!(
        "+- {title} {}+\n",
        "-".repeat(content - title_len - 1)
    ));
    for line in body.lines() {
        let pad = content - line.chars().count();
        out.push_str(&format!("| {line}{} |\n", " ".repeat(pad)));
    }
    out.push_str(&format!("+{}+\n", "-".repeat(content + 2)));
    out
}
