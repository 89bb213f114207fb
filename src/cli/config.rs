use anyhow::Result;
use chatdesk_core::ChatdeskConfig;
use console::style;

/// Handle the config command - print the effective configuration
pub fn handle_config_command(config: &ChatdeskConfig) -> Result<()> {
    let mut shown = config.clone();
    if shown.chat.api_key.is_some() {
        shown.chat.api_key = Some("********".to_string());
    }

    println!("{}", style("Effective configuration").blue().bold());
    println!();
    print!("{}", shown.to_toml()?);
    Ok(())
}
