use crate::commands::{ReleaseRequest, handle_release_notes_command};
use crate::config::Config;
use crate::{log_debug, ui};
use clap::builder::{Styles, styling::AnsiColor};
use clap::{Parser, crate_version};
use std::path::PathBuf;

const LOG_FILE: &str = "release-weaver-debug.log";

/// Command-line arguments
#[derive(Parser, Debug)]
#[command(
    version = crate_version!(),
    about = "Generate narrative release notes from ServiceNow and GitHub",
    long_about = "Looks up a ServiceNow story, categorizes the GitHub commits between two tags, and asks Gemini to weave both into one Markdown release note.\n\nRequired environment variables: SN_USER, SN_PASSWORD, GITHUB_TOKEN, GEMINI_API_KEY.",
    styles = get_styles(),
)]
pub struct Cli {
    /// GitHub repository in the form owner/name
    #[arg(long, help = "GitHub repo in format org/repo")]
    pub repo: String,

    /// Starting tag (older version)
    #[arg(long = "from-tag", help = "The starting git tag (older version)")]
    pub from_tag: String,

    /// Ending tag (newer version)
    #[arg(long = "to-tag", help = "The ending git tag (newer version)")]
    pub to_tag: String,

    /// ServiceNow instance name, as in `<instance>.service-now.com`
    #[arg(long = "servicenow-instance", help = "Your ServiceNow instance name")]
    pub servicenow_instance: String,

    /// ServiceNow story number for this release
    #[arg(long = "story-id", help = "The ServiceNow Story ID for this release")]
    pub story_id: String,

    /// Directory the release notes file is written to
    #[arg(
        long = "output-dir",
        default_value = ".",
        help = "Directory to write release_notes_<to-tag>.md into"
    )]
    pub output_dir: PathBuf,

    /// Log debug messages to a file
    #[arg(short = 'l', long = "log", help = "Log debug messages to a file")]
    pub log: bool,

    /// Specify a custom log file path
    #[arg(long = "log-file", help = "Specify a custom log file path")]
    pub log_file: Option<String>,

    /// Suppress non-essential output
    #[arg(short = 'q', long = "quiet", help = "Suppress non-essential output")]
    pub quiet: bool,
}

impl Cli {
    pub fn release_request(&self) -> ReleaseRequest {
        ReleaseRequest {
            repo: self.repo.clone(),
            from_tag: self.from_tag.clone(),
            to_tag: self.to_tag.clone(),
            story_id: self.story_id.clone(),
        }
    }
}

/// Define custom styles for Clap
fn get_styles() -> Styles {
    Styles::styled()
        .header(AnsiColor::Magenta.on_default().bold())
        .usage(AnsiColor::Cyan.on_default().bold())
        .literal(AnsiColor::Green.on_default().bold())
        .placeholder(AnsiColor::Yellow.on_default())
        .valid(AnsiColor::Blue.on_default().bold())
        .invalid(AnsiColor::Red.on_default().bold())
        .error(AnsiColor::Red.on_default().bold())
}

/// Parse the command-line arguments
pub fn parse_args() -> Cli {
    Cli::parse()
}

/// Main function to parse arguments and run the release notes command
pub async fn main() -> anyhow::Result<()> {
    let cli = parse_args();

    if let Err(e) = crate::logger::init() {
        ui::print_warning(&format!("Logging unavailable: {e}"));
    }

    if cli.quiet {
        ui::set_quiet_mode(true);
    }

    // Secrets are checked before any client or log file exists
    let config = Config::from_env()?;

    if cli.log {
        crate::logger::enable_logging();
        let log_file = cli.log_file.as_deref().unwrap_or(LOG_FILE);
        crate::logger::set_log_file(log_file)?;
    } else {
        crate::logger::disable_logging();
    }

    log_debug!("Running for {} {}...{}", cli.repo, cli.from_tag, cli.to_tag);

    handle_release_notes_command(
        &cli.release_request(),
        &cli.servicenow_instance,
        &config,
        &cli.output_dir,
    )
    .await
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::CommandFactory;

    #[test]
    fn test_cli_definition_is_valid() {
        Cli::command().debug_assert();
    }

    #[test]
    fn test_all_release_arguments_are_required() {
        let result = Cli::try_parse_from([
            "release-weaver",
            "--repo",
            "acme/widgets",
            "--from-tag",
            "v1.0.0",
            "--to-tag",
            "v1.1.0",
            "--servicenow-instance",
            "acme",
        ]);
        assert!(result.is_err(), "missing --story-id should be rejected");
    }

    #[test]
    fn test_release_request_from_arguments() {
        let cli = Cli::try_parse_from([
            "release-weaver",
            "--repo",
            "acme/widgets",
            "--from-tag",
            "v1.0.0",
            "--to-tag",
            "v1.1.0",
            "--servicenow-instance",
            "acme",
            "--story-id",
            "STRY0001",
        ])
        .expect("arguments should parse");

        assert_eq!(cli.output_dir, PathBuf::from("."));
        assert!(!cli.quiet);
        assert_eq!(
            cli.release_request(),
            ReleaseRequest {
                repo: "acme/widgets".to_string(),
                from_tag: "v1.0.0".to_string(),
                to_tag: "v1.1.0".to_string(),
                story_id: "STRY0001".to_string(),
            }
        );
    }
}
