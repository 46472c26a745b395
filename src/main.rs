use release_weaver::{cli, ui};
use std::process::ExitCode;

#[tokio::main(flavor = "current_thread")]
async fn main() -> ExitCode {
    match cli::main().await {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            ui::print_error(&format!("Error: {e:#}"));
            ExitCode::FAILURE
        }
    }
}
