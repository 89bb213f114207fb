use super::files::{print_listing, upload_path};
use anyhow::{Context, Result};
use chatdesk_core::ui::display::{
    conversation_header, format_failed_turn, format_message, format_session_id,
};
use chatdesk_core::{
    AttachmentDirectory, ChatSession, ChatdeskConfig, Domain, SubmitOutcome,
    make_attachment_store, make_chat_backend,
};
use console::style;
use std::path::Path;
use tokio::io::{AsyncBufReadExt, AsyncWriteExt, BufReader};

/// A line typed at the prompt
#[derive(Debug, PartialEq, Eq)]
enum ReplInput<'a> {
    Empty,
    Exit,
    Help,
    Session,
    ListModes,
    Mode(&'a str),
    Files,
    Upload(&'a str),
    Unknown(&'a str),
    Say(&'a str),
}

fn parse_input(line: &str) -> ReplInput<'_> {
    let trimmed = line.trim();
    if trimmed.is_empty() {
        return ReplInput::Empty;
    }
    if matches!(trimmed, "exit" | "quit") {
        return ReplInput::Exit;
    }
    let Some(command) = trimmed.strip_prefix('/') else {
        return ReplInput::Say(line);
    };

    let (name, rest) = match command.split_once(char::is_whitespace) {
        Some((name, rest)) => (name, rest.trim()),
        None => (command, ""),
    };
    match (name, rest) {
        ("help", _) => ReplInput::Help,
        ("session", _) => ReplInput::Session,
        ("mode", "") => ReplInput::ListModes,
        ("mode", domain) => ReplInput::Mode(domain),
        ("files", _) => ReplInput::Files,
        ("upload", "") => ReplInput::Unknown(trimmed),
        ("upload", path) => ReplInput::Upload(path),
        _ => ReplInput::Unknown(trimmed),
    }
}

fn print_help() {
    println!("{}", style("Commands").bold());
    println!("  /mode [auto|hr|legal|l1|l2]  show or switch the domain");
    println!("  /session                     show the session id");
    println!("  /files                       list uploaded files");
    println!("  /upload <path>               upload a file");
    println!("  exit                         leave the chat");
}

fn print_modes(current: Domain) {
    for domain in Domain::ALL {
        let marker = if domain == current { "*" } else { " " };
        println!("  {marker} {:<6} {}", domain.as_str(), domain.label());
    }
}

/// Handle the chat command - interactive conversation
pub async fn handle_chat_command(config: &ChatdeskConfig, domain: Option<Domain>) -> Result<()> {
    let domain = domain.unwrap_or(config.chat.default_domain);
    let session = ChatSession::with_domain(make_chat_backend(config)?, domain);
    let directory = AttachmentDirectory::new(make_attachment_store(config)?);
    let domain_aware = session.variant().is_domain_aware();

    println!(
        "{} {}",
        style("Chat with chatdesk").cyan().bold(),
        style(format!("({})", config.server.base_url)).dim()
    );
    if domain_aware {
        println!("{}", conversation_header(domain));
    }
    println!("{}\n", style("Type /help for commands, 'exit' to quit").dim());
    println!("{}", style("Start the conversation by asking a question.").dim());

    let mut lines = BufReader::new(tokio::io::stdin()).lines();
    let mut stdout = tokio::io::stdout();

    loop {
        stdout.write_all(b"> ").await?;
        stdout.flush().await?;

        let Some(line) = lines.next_line().await.context("Failed to read input")? else {
            break;
        };

        match parse_input(&line) {
            ReplInput::Empty => continue,
            ReplInput::Exit => break,
            ReplInput::Help => print_help(),
            ReplInput::Session => println!(
                "Session: {}",
                format_session_id(session.session_id().as_deref())
            ),
            ReplInput::ListModes => print_modes(session.domain()),
            ReplInput::Mode(tag) => match tag.parse::<Domain>() {
                Ok(domain) => {
                    session.select_mode(domain);
                    println!("{}", conversation_header(domain));
                }
                Err(err) => println!("{}", style(err).yellow()),
            },
            ReplInput::Files => {
                directory.refresh().await;
                print_listing(&directory);
            }
            ReplInput::Upload(path) => {
                upload_path(&directory, Path::new(path)).await;
                print_listing(&directory);
            }
            ReplInput::Unknown(command) => {
                println!("{} {command}", style("Unknown command:").yellow());
            }
            ReplInput::Say(text) => {
                session.set_draft(text);
                println!("{}", style("...").dim());
                match session.send_draft().await {
                    SubmitOutcome::Replied(reply) => println!("{}", format_message(&reply)),
                    SubmitOutcome::Failed(err) => println!("{}", format_failed_turn(&err)),
                    SubmitOutcome::Busy => {
                        println!("{}", style("Still waiting for the last reply").yellow())
                    }
                    SubmitOutcome::Ignored => {}
                }
            }
        }
    }

    if let Some(routed) = session.last_routed_domain() {
        tracing::debug!(%routed, turns = session.len(), "chat finished");
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn plain_text_is_sent_as_is() {
        assert_eq!(parse_input("  hi there "), ReplInput::Say("  hi there "));
        assert_eq!(parse_input("   "), ReplInput::Empty);
    }

    #[test]
    fn exit_words() {
        assert_eq!(parse_input("exit"), ReplInput::Exit);
        assert_eq!(parse_input(" quit "), ReplInput::Exit);
    }

    #[test]
    fn slash_commands() {
        assert_eq!(parse_input("/mode"), ReplInput::ListModes);
        assert_eq!(parse_input("/mode legal"), ReplInput::Mode("legal"));
        assert_eq!(parse_input("/files"), ReplInput::Files);
        assert_eq!(
            parse_input("/upload ./docs/handbook.pdf"),
            ReplInput::Upload("./docs/handbook.pdf")
        );
        assert_eq!(parse_input("/upload"), ReplInput::Unknown("/upload"));
        assert_eq!(parse_input("/session"), ReplInput::Session);
        assert_eq!(parse_input("/nope"), ReplInput::Unknown("/nope"));
    }
}
