use anyhow::Result;
use chatdesk_core::ui::display::{conversation_header, format_client_error};
use chatdesk_core::{ChatSession, ChatdeskConfig, Domain, SubmitOutcome, make_chat_backend};

/// Handle the ask command - one question, one reply
pub async fn handle_ask_command(
    config: &ChatdeskConfig,
    domain: Option<Domain>,
    prompt: &str,
) -> Result<()> {
    if prompt.trim().is_empty() {
        anyhow::bail!("No prompt provided. Use: chatdesk ask \"Your question here\"");
    }

    let domain = domain.unwrap_or(config.chat.default_domain);
    let session = ChatSession::with_domain(make_chat_backend(config)?, domain);
    if session.variant().is_domain_aware() {
        eprintln!("{}", conversation_header(domain));
    }

    match session.submit(prompt).await {
        SubmitOutcome::Replied(reply) => {
            println!("{}", reply.content());
            Ok(())
        }
        SubmitOutcome::Failed(err) => {
            eprintln!("{}", format_client_error(&err));
            anyhow::bail!("ask failed: {err}")
        }
        SubmitOutcome::Ignored | SubmitOutcome::Busy => Ok(()),
    }
}
