//! Terminal rendering of command results and pages.

use browser::{BrowsableEntry, Page};
use console::style;
use runtime::CommandOutcome;

/// Prints every feedback line and returns whether the command succeeded.
pub fn print_outcome(outcome: &CommandOutcome) -> bool {
    for feedback in &outcome.feedback {
        if feedback.is_error {
            eprintln!("{}", style(&feedback.text).red());
        } else if feedback.broadcast {
            println!("{}", style(&feedback.text).green());
        } else {
            println!("{}", feedback.text);
        }
    }

    if let Some(severity) = outcome.severity {
        tracing::debug!(code = outcome.code, severity = severity.as_str(), "Command failed");
    }
    outcome.is_success()
}

pub fn print_page_header(title: &str, page: &Page, criterion: &str, order: &str) {
    println!(
        "{} {}",
        style(title).bold().cyan(),
        style(format!(
            "page {}/{} | {} | {}",
            page.page,
            page.total_pages.max(1),
            criterion,
            order
        ))
        .dim()
    );
}

/// One numbered entry line.
pub fn entry_line(index: usize, entry: &BrowsableEntry) -> String {
    match entry {
        BrowsableEntry::Item(item) => format!("{:>3}. {}", index, style(&item.name).yellow()),
        BrowsableEntry::Stat(row) => {
            let mut line = format!(
                "{:>3}. {}: {}",
                index,
                style(&row.name).yellow(),
                row.formatted
            );
            if let Some(owner) = &row.owner {
                line.push_str(&format!(" {}", style(format!("[custom, {owner}]")).dim()));
            }
            line
        }
    }
}
