use console::{measure_text_width, style};

use crate::dashboard::data::{BRAND, HEADER_TITLE};
use crate::dashboard::{Block, Link, Page, PageId, PieChart, Section, Table};
use crate::models::finding::{Finding, FindingCategory};
use crate::summary::SummaryRequestState;
use crate::utils::formatting::{pad_to_width, wrap_words};

/// Shown before the first summary is requested.
pub const SUMMARY_PLACEHOLDER: &str =
    "Click \"Generate\" to create an AI-powered summary of the key findings.";

const MAX_COLUMN_WIDTH: usize = 34;
const PARAGRAPH_WIDTH: usize = 96;
const PIE_BAR_WIDTH: usize = 40;

/// Header plus the navigation line with `active` highlighted.
pub fn render_header(active: PageId) -> String {
    let nav = PageId::ALL
        .iter()
        .map(|id| {
            if *id == active {
                style(format!("[{}]", id.label())).cyan().bold().to_string()
            } else {
                style(id.label()).dim().to_string()
            }
        })
        .collect::<Vec<_>>()
        .join("  ");

    format!(
        "\n  {}  {}\n  {}\n",
        style(BRAND).white().bold(),
        style(HEADER_TITLE).dim(),
        nav,
    )
}

/// Render a whole page.
pub fn render_page(page: &Page) -> String {
    let mut out = render_header(page.id);
    out.push_str(&format!("\n{}\n", style(page.title).white().bold().underlined()));
    for section in &page.sections {
        out.push_str(&render_section(section));
    }
    out
}

pub fn render_section(section: &Section) -> String {
    let mut out = format!(
        "\n{} {}\n",
        style("──").cyan().bold(),
        style(section.title).cyan().bold(),
    );
    for block in &section.blocks {
        out.push_str(&render_block(block));
    }
    out
}

fn render_block(block: &Block) -> String {
    match block {
        Block::Heading { text } => format!("\n  {}\n", style(text).white().bold()),
        Block::Paragraph { text } => {
            let mut out = String::from("\n");
            for line in wrap_words(text, PARAGRAPH_WIDTH) {
                out.push_str(&format!("  {}\n", line));
            }
            out
        }
        Block::Bullets { items } => render_bullets(items),
        Block::Table(table) => render_table(table),
        Block::Pie(pie) => render_pie(pie),
        Block::Takeaway { text } => {
            let mut out = String::from("\n");
            for line in wrap_words(text, PARAGRAPH_WIDTH) {
                out.push_str(&format!("  {} {}\n", style("▌").blue(), style(line).white().bold()));
            }
            out
        }
        Block::Links { links } => render_links(links),
    }
}

pub fn render_bullets(items: &[&str]) -> String {
    let mut out = String::from("\n");
    for item in items {
        let mut lines = wrap_words(item, PARAGRAPH_WIDTH - 4).into_iter();
        if let Some(first) = lines.next() {
            out.push_str(&format!("  {} {}\n", style("•").cyan(), first));
        }
        for rest in lines {
            out.push_str(&format!("    {}\n", rest));
        }
    }
    out
}

fn render_links(links: &[Link]) -> String {
    let mut out = String::from("\n");
    for link in links {
        out.push_str(&format!(
            "  {} {}\n    {}\n",
            style("→").cyan(),
            style(link.label).white().bold(),
            style(link.url).underlined().dim(),
        ));
    }
    out
}

/// Column-aligned table. Cells wider than the column limit wrap onto
/// continuation lines.
pub fn render_table(table: &Table) -> String {
    let widths: Vec<usize> = (0..table.headers.len())
        .map(|col| {
            let cells = std::iter::once(table.headers[col])
                .chain(table.rows.iter().filter_map(|row| row.get(col).copied()));
            cells
                .map(measure_text_width)
                .max()
                .unwrap_or(0)
                .min(MAX_COLUMN_WIDTH)
        })
        .collect();

    let mut out = String::from("\n");
    out.push_str(&render_row(table.headers, &widths, true));
    let rule: Vec<String> = widths.iter().map(|w| "─".repeat(*w)).collect();
    out.push_str(&format!("  {}\n", style(rule.join("─┼─")).dim()));
    for row in table.rows {
        out.push_str(&render_row(row, &widths, false));
    }
    out
}

fn render_row(cells: &[&str], widths: &[usize], header: bool) -> String {
    let wrapped: Vec<Vec<String>> = widths
        .iter()
        .enumerate()
        .map(|(i, w)| wrap_words(cells.get(i).copied().unwrap_or(""), *w))
        .collect();
    let height = wrapped.iter().map(Vec::len).max().unwrap_or(1);
    let sep = style(" │ ").dim().to_string();

    let mut out = String::new();
    for line in 0..height {
        let parts: Vec<String> = wrapped
            .iter()
            .zip(widths)
            .map(|(lines, w)| {
                let padded = pad_to_width(lines.get(line).map(String::as_str).unwrap_or(""), *w);
                if header {
                    style(padded).white().bold().to_string()
                } else {
                    padded
                }
            })
            .collect();
        out.push_str(&format!("  {}\n", parts.join(sep.as_str()).trim_end()));
    }
    out
}

/// Horizontal-bar rendition of a pie chart. Each bar is scaled to its share
/// of the chart total.
pub fn render_pie(pie: &PieChart) -> String {
    let total = pie.total();
    let label_width = pie
        .slices
        .iter()
        .map(|s| measure_text_width(s.name))
        .max()
        .unwrap_or(0);

    let mut out = String::from("\n");
    for slice in &pie.slices {
        let share = if total > 0.0 { slice.value / total } else { 0.0 };
        let filled = (share * PIE_BAR_WIDTH as f64).round() as usize;
        out.push_str(&format!(
            "  {} {}{} {}\n",
            pad_to_width(slice.name, label_width),
            style("█".repeat(filled)).blue(),
            style("░".repeat(PIE_BAR_WIDTH - filled.min(PIE_BAR_WIDTH))).dim(),
            style(format!("{:.0}%", share * 100.0)).white(),
        ));
    }
    out
}

pub fn render_category_marker(category: FindingCategory) -> String {
    match category {
        FindingCategory::Positive => style("✓").green().bold().to_string(),
        FindingCategory::Improvement => style("⚠").yellow().bold().to_string(),
        FindingCategory::Critical => style("✗").red().bold().to_string(),
    }
}

/// Render the findings list the summary is generated from.
pub fn render_findings(findings: &[Finding]) -> String {
    if findings.is_empty() {
        return format!("\n  {}\n", style("No findings recorded.").dim());
    }

    let mut out = format!(
        "\n{}\n\n",
        style(format!("Key Findings ({}):", findings.len())).white().bold(),
    );
    for finding in findings {
        out.push_str(&format!(
            "  {} {} {}\n",
            render_category_marker(finding.category),
            style(format!("{:<11}", finding.category.as_str())).dim(),
            finding.text,
        ));
    }
    out
}

/// Render the executive summary card for the given state.
pub fn render_summary(state: &SummaryRequestState) -> String {
    let title = style("AI Executive Summary").white().bold();
    let body = match state {
        SummaryRequestState::Idle => format!("  {}\n", style(SUMMARY_PLACEHOLDER).dim()),
        SummaryRequestState::Pending => format!("  {}\n", style("Generating...").yellow()),
        // Lines are printed exactly as returned; only the indent is added.
        SummaryRequestState::Succeeded { text } => text
            .split('\n')
            .map(|line| format!("  {}\n", line))
            .collect(),
        SummaryRequestState::Failed { message } => render_error(message) + "\n",
    };
    format!("\n{}\n\n{}", title, body)
}

/// Render the version info.
pub fn render_version() -> String {
    let version = env!("CARGO_PKG_VERSION");
    let git_hash = option_env!("GIT_HASH").unwrap_or("dev");
    let build_ts = option_env!("BUILD_TIMESTAMP").unwrap_or("unknown");

    format!(
        "\n  {} {}\n  {} {}\n  {} {}\n",
        style("Version:").dim(),
        style(version).white().bold(),
        style("Commit:").dim(),
        style(git_hash).white(),
        style("Built:").dim(),
        style(build_ts).white(),
    )
}

pub fn render_error(msg: &str) -> String {
    format!("  {} {}", style("✗").red(), style(msg).red())
}

pub fn render_success(msg: &str) -> String {
    format!("{} {}", style("✓").green(), msg)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::dashboard::page;
    use console::strip_ansi_codes;

    fn plain(s: &str) -> String {
        strip_ansi_codes(s).to_string()
    }

    #[test]
    fn test_render_header_marks_active_page() {
        let out = plain(&render_header(PageId::October));
        assert!(out.contains("WOW AUDIT"));
        assert!(out.contains("[Mth Oct]"));
        assert!(!out.contains("[Overview]"));
    }

    #[test]
    fn test_render_page_contains_sections() {
        let out = plain(&render_page(&page(PageId::Overview)));
        assert!(out.contains("5. Sports Category Demand"));
        assert!(out.contains("Tennis"));
        assert!(out.contains("≈ 11× blended ROAS"));
    }

    #[test]
    fn test_render_table_aligns_columns() {
        static TABLE: Table = Table {
            headers: &["Sport", "Share"],
            rows: &[&["Tennis", "43 %"], &["Squash", "8 %"]],
        };
        let out = plain(&render_table(&TABLE));
        let lines: Vec<&str> = out.lines().filter(|l| !l.is_empty()).collect();
        assert_eq!(lines[0], "  Sport  │ Share");
        assert_eq!(lines[2], "  Tennis │ 43 %");
        assert_eq!(lines[3], "  Squash │ 8 %");
    }

    #[test]
    fn test_render_table_wraps_long_cells() {
        static TABLE: Table = Table {
            headers: &["Task"],
            rows: &[&["Add utm_source, utm_medium, utm_campaign to every ad and bio link"]],
        };
        let out = plain(&render_table(&TABLE));
        let rows: Vec<&str> = out.lines().skip(3).collect();
        assert!(rows.len() > 1);
        assert!(rows.iter().all(|l| measure_text_width(l) <= MAX_COLUMN_WIDTH + 2));
    }

    #[test]
    fn test_render_pie_percentages() {
        static PALETTE: &[&str] = &["#0d48a2"];
        let pie = PieChart::from_values(&[("Tennis", 3.0), ("Squash", 1.0)], PALETTE);
        let out = plain(&render_pie(&pie));
        assert!(out.contains("Tennis"));
        assert!(out.contains("75%"));
        assert!(out.contains("25%"));
    }

    #[test]
    fn test_render_findings_markers() {
        let out = plain(&render_findings(&[
            Finding::positive("ROAS improved"),
            Finding::improvement("CTR fell"),
            Finding::critical("CPL rose 20%"),
        ]));
        assert!(out.contains("✓ Positive"));
        assert!(out.contains("⚠ Improvement"));
        assert!(out.contains("✗ Critical"));
        assert!(out.contains("CPL rose 20%"));
    }

    #[test]
    fn test_render_findings_empty() {
        assert!(render_findings(&[]).contains("No findings"));
    }

    #[test]
    fn test_render_summary_states() {
        assert!(plain(&render_summary(&SummaryRequestState::Idle)).contains(SUMMARY_PLACEHOLDER));
        assert!(plain(&render_summary(&SummaryRequestState::Pending)).contains("Generating..."));

        let ok = plain(&render_summary(&SummaryRequestState::Succeeded { text: "All good.".into() }));
        assert!(ok.contains("All good."));

        let failed = plain(&render_summary(&SummaryRequestState::Failed { message: "network down".into() }));
        assert!(failed.contains("✗ network down"));
    }

    #[test]
    fn test_render_summary_keeps_returned_whitespace() {
        let text = "Key points:\n  - CPL  down   18%\n  - ROAS 11x  \n\n\tNext steps";
        let out = plain(&render_summary(&SummaryRequestState::Succeeded { text: text.into() }));
        assert!(out.contains("  Key points:\n    - CPL  down   18%\n    - ROAS 11x  \n"));
        let body: Vec<&str> = out.lines().skip(3).map(|l| l.strip_prefix("  ").unwrap()).collect();
        assert_eq!(body.join("\n"), text);
    }

    #[test]
    fn test_render_summary_long_line_not_rewrapped() {
        let text = "word ".repeat(40);
        let out = plain(&render_summary(&SummaryRequestState::Succeeded { text: text.clone() }));
        assert!(out.contains(&format!("  {}\n", text)));
    }

    #[test]
    fn test_render_version() {
        let out = plain(&render_version());
        assert!(out.contains(env!("CARGO_PKG_VERSION")));
    }
}
