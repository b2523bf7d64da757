use anyhow::{Result, bail};
use browser::{BrowserState, CreativeTab, Page, SortCriterion, SortOrder, StatisticsTab, Tab};
use clap::{Parser, ValueEnum};
use console::style;
use runtime::{Caller, Runtime, views};

use crate::output::{entry_line, print_page_header};

/// Page through a browsing screen as the acting player
#[derive(Parser)]
pub struct Browse {
    /// Which screen to open
    #[arg(value_enum)]
    screen: Screen,

    /// Tab name, e.g. `food` or `general` (defaults to the screen's first tab)
    #[arg(short, long)]
    tab: Option<String>,

    /// Sort criterion, e.g. `alphabetical`, `crafted`, `owner`
    #[arg(short, long, default_value = "default")]
    sort: SortCriterion,

    /// `ascending` or `descending`
    #[arg(short, long, default_value = "descending")]
    order: SortOrder,

    /// 1-based page number
    #[arg(short, long, default_value_t = 1)]
    page: usize,

    /// Also print each item's statistics
    #[arg(long)]
    details: bool,
}

#[derive(Clone, Copy, ValueEnum)]
enum Screen {
    /// The creative item catalog
    Creative,
    /// General and item statistics
    Statistics,
}

impl Browse {
    pub fn execute(&self, runtime: &Runtime, caller: &Caller) -> Result<bool> {
        let Some(subject) = caller.subject() else {
            bail!("Browsing shows per-player values; pick a player with --as <PLAYER>");
        };

        match self.screen {
            Screen::Creative => {
                let Some(state) = self.state::<CreativeTab>()? else {
                    return Ok(false);
                };
                let page = runtime.creative_page(&state, subject);
                let page_size = runtime.browser_config().creative_page_size();
                print_page_header(
                    state.tab().display_name(),
                    &page,
                    state.criterion().display_name(),
                    state.order().display_name(),
                );
                self.print_entries(runtime, subject, &page, page_size);
            }
            Screen::Statistics => {
                let Some(state) = self.state::<StatisticsTab>()? else {
                    return Ok(false);
                };
                let page = runtime.statistics_page(&state, subject);
                let page_size = runtime.browser_config().statistics_page_size();
                print_page_header(
                    state.tab().display_name(),
                    &page,
                    state.criterion().display_name(),
                    state.order().display_name(),
                );
                self.print_entries(runtime, subject, &page, page_size);
            }
        }

        Ok(true)
    }

    /// Builds the screen state the way a player would reach it: open, switch
    /// tab, pick criterion and order, then jump to the page.
    fn state<T>(&self) -> Result<Option<BrowserState<T>>>
    where
        T: Tab + std::str::FromStr,
    {
        let mut state = BrowserState::<T>::new();

        if let Some(raw) = &self.tab {
            let Ok(tab) = raw.parse::<T>() else {
                bail!("Unknown tab '{raw}'");
            };
            state.select_tab(tab);
        }
        if !state.select_criterion(self.sort) {
            eprintln!(
                "{}",
                style(format!(
                    "{} is not available on the {} tab",
                    self.sort.display_name(),
                    state.tab().display_name()
                ))
                .red()
            );
            return Ok(None);
        }
        state.select_order(self.order);
        state.set_page(self.page);

        Ok(Some(state))
    }

    fn print_entries(&self, runtime: &Runtime, subject: &str, page: &Page, page_size: usize) {
        if page.is_empty() {
            println!("{}", style("Nothing on this page").dim());
            return;
        }

        let first = page.page.saturating_sub(1) * page_size + 1;
        for (offset, entry) in page.entries.iter().enumerate() {
            println!("{}", entry_line(first + offset, entry));
            if self.details
                && let Some(item) = entry.as_item()
            {
                for line in views::item_stat_lines(item, subject, runtime.oracle()) {
                    println!("      - {line}");
                }
            }
        }
    }
}
