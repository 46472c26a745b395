use colored::Colorize;
use indicatif::{ProgressBar, ProgressStyle};
use std::sync::atomic::{AtomicBool, Ordering};
use std::time::Duration;

const SPINNER_TICKS: &str = "✦✧✶✷✸✹✺✻✼✽";
const BORDER_WIDTH: usize = 50;

/// `--quiet` silences everything except errors and the generated notes
static QUIET: AtomicBool = AtomicBool::new(false);

pub fn set_quiet_mode(enabled: bool) {
    QUIET.store(enabled, Ordering::Relaxed);
}

fn chatty() -> bool {
    !QUIET.load(Ordering::Relaxed)
}

/// Spinner shown while waiting on the model; hidden under `--quiet`
pub fn create_spinner(message: &str) -> ProgressBar {
    if !chatty() {
        return ProgressBar::hidden();
    }

    let spinner = ProgressBar::new_spinner();
    spinner.set_style(
        ProgressStyle::default_spinner()
            .tick_chars(SPINNER_TICKS)
            .template("{spinner} {msg}")
            .unwrap_or_else(|_| ProgressStyle::default_spinner()),
    );
    spinner.set_message(message.to_string());
    spinner.enable_steady_tick(Duration::from_millis(100));
    spinner
}

pub fn print_info(message: &str) {
    if chatty() {
        println!("{}", message.cyan().bold());
    }
}

pub fn print_warning(message: &str) {
    if chatty() {
        println!("{}", message.yellow().bold());
    }
}

pub fn print_error(message: &str) {
    eprintln!("{}", message.red().bold());
}

/// Success line preceded by a blank line
pub fn print_success(message: &str) {
    if chatty() {
        println!("\n{}", message.green().bold());
    }
}

pub fn print_message(message: &str) {
    if chatty() {
        println!("{message}");
    }
}

/// The notes themselves are always echoed; the rule lines are decoration
pub fn print_bordered_content(content: &str) {
    let rule = "━".repeat(BORDER_WIDTH);
    if chatty() {
        println!("{}", rule.bright_purple());
    }
    println!("{content}");
    if chatty() {
        println!("{}", rule.bright_purple());
    }
}
