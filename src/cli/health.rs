use anyhow::Result;
use chatdesk_core::ui::display::format_client_error;
use chatdesk_core::{ChatdeskConfig, probe_health};
use console::style;

/// Handle the health command
pub async fn handle_health_command(config: &ChatdeskConfig) -> Result<()> {
    let url = config.endpoint(&config.server.health_path);
    match probe_health(config).await {
        Ok(status) if status.is_ok() => {
            println!("{} {}", style("✓").green().bold(), status);
            Ok(())
        }
        Ok(status) => {
            println!("{} {}", style("!").yellow().bold(), status);
            anyhow::bail!("backend at {url} reported status '{}'", status.status)
        }
        Err(err) => {
            eprintln!("{}", format_client_error(&err));
            anyhow::bail!("backend at {url} is unreachable")
        }
    }
}
