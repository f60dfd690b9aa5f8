//! Ports command - status table for the registered apps.

use anyhow::Result;
use netpeek_core::{ListenerScanner, PortStatus, RegistryStore, StatusRow, StatusService};
use owo_colors::OwoColorize;

const HEADERS: [&str; 6] = ["SL", "Name", "Port", "Status", "PID", "URL"];
const WIDTHS: [usize; 6] = [6, 15, 8, 10, 8, 30];
const SEPARATOR: &str = " | ";

pub async fn run(registry: RegistryStore) -> Result<()> {
    let service = StatusService::new(registry, ListenerScanner::new());

    let rows = match service.report().await {
        Ok(rows) => rows,
        Err(e) => {
            eprintln!("{}", e);
            return Ok(());
        }
    };

    let color = atty::is(atty::Stream::Stdout);
    println!("{}", render_table(&rows, color));
    Ok(())
}

fn render_table(rows: &[StatusRow], color: bool) -> String {
    let mut lines = Vec::with_capacity(rows.len() + 4);

    lines.push(
        HEADERS
            .iter()
            .zip(WIDTHS)
            .map(|(h, w)| format!("{:<w$}", h))
            .collect::<Vec<_>>()
            .join(SEPARATOR),
    );
    lines.push("-".repeat(rule_width()));

    for row in rows {
        let port = row
            .port
            .map(|p| p.to_string())
            .unwrap_or_else(|| "-".to_string());

        let status = format!("{:<w$}", row.status.as_str(), w = WIDTHS[3]);
        let status = if color && row.status == PortStatus::Inactive {
            status.red().to_string()
        } else {
            status
        };

        lines.push(format!(
            "{:<w0$}{sep}{:<w1$}{sep}{:<w2$}{sep}{}{sep}{:<w4$}{sep}{:<w5$}",
            row.sequence,
            row.name,
            port,
            status,
            row.pid,
            row.url,
            sep = SEPARATOR,
            w0 = WIDTHS[0],
            w1 = WIDTHS[1],
            w2 = WIDTHS[2],
            w4 = WIDTHS[4],
            w5 = WIDTHS[5],
        ));
    }

    // Two blank lines follow the table once println! adds its newline.
    lines.push(String::new());
    lines.push(String::new());
    lines.join("\n")
}

fn rule_width() -> usize {
    WIDTHS.iter().sum::<usize>() + SEPARATOR.len() * (WIDTHS.len() - 1)
}
