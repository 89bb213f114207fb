//! Styled rendering of turns, attachments and client errors.
//!
//! This is the presentation boundary: [`ClientError`] values become text here
//! and nowhere earlier.

use crate::attachments::Attachment;
use crate::chat::{Domain, Message, Role};
use crate::error::ClientError;
use console::style;

/// Role badge with per-role coloring
pub fn style_role(role: Role) -> String {
    match role {
        Role::User => style(role.as_str()).cyan().bold().to_string(),
        Role::Assistant => style(role.as_str()).green().bold().to_string(),
    }
}

/// Render one turn of the log as-is
pub fn format_message(message: &Message) -> String {
    format!("{}: {}", style_role(message.role()), message.content())
}

/// Render the assistant turn recorded for a failed exchange, in red
pub fn format_failed_turn(err: &ClientError) -> String {
    format!(
        "{}: {}",
        style_role(Role::Assistant),
        format_client_error(err)
    )
}

/// Header line for a conversation in the given domain
pub fn conversation_header(domain: Domain) -> String {
    style(format!("{} Conversation", domain.label()))
        .blue()
        .bold()
        .to_string()
}

/// One line of the attachment panel
pub fn format_attachment(attachment: &Attachment) -> String {
    format!(
        "{}  {} KB\n    {}",
        style(&attachment.name).bold(),
        attachment.size_kb(),
        style(&attachment.url).dim()
    )
}

/// Client error rendered for the terminal
pub fn format_client_error(err: &ClientError) -> String {
    style(err.display_text()).red().to_string()
}

/// Session identifier, or a dash when none has been issued yet
pub fn format_session_id(session_id: Option<&str>) -> String {
    match session_id {
        Some(id) => style(id).yellow().to_string(),
        None => style("—").dim().to_string(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn message_contains_role_and_content() {
        let rendered = format_message(&Message::user("And sick leave?"));
        assert!(rendered.contains("user"));
        assert!(rendered.contains("And sick leave?"));
    }

    #[test]
    fn only_failed_exchanges_are_red() {
        console::set_colors_enabled(true);
        let red = style("x").red().to_string();
        let red_prefix = &red[..red.find('x').unwrap_or(0)];

        let reply = Message::assistant("Error: codes are listed in the L2 runbook");
        let rendered = format_message(&reply);
        assert!(rendered.ends_with(": Error: codes are listed in the L2 runbook"));
        assert!(!rendered.contains(red_prefix));

        let failed = format_failed_turn(&ClientError::network("connection refused"));
        assert!(failed.contains(red_prefix));
        assert!(failed.contains("Error: connection refused"));
    }

    #[test]
    fn header_uses_domain_label() {
        assert!(conversation_header(Domain::L2).contains("L2 Support Conversation"));
    }

    #[test]
    fn attachment_line_shows_size_in_kb() {
        let attachment = Attachment {
            name: "handbook.pdf".to_string(),
            size: 4096,
            url: "https://blob.example/handbook.pdf".to_string(),
            content_type: None,
            last_modified: None,
        };
        let rendered = format_attachment(&attachment);
        assert!(rendered.contains("handbook.pdf"));
        assert!(rendered.contains("4 KB"));
    }

    #[test]
    fn missing_session_renders_dash() {
        assert!(format_session_id(None).contains('—'));
        assert!(format_session_id(Some("abc123")).contains("abc123"));
    }
}
