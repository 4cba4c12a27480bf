#[cfg(test)]
#[path = "commands_test.rs"]
mod tests;

use std::io::Write;

use eyre::{Result, bail};

use crate::backend::ArcBackend;
use crate::chat::{SendMessage, SendOutcome, SharedChatStore};
use crate::models::Role;

/// One conversation per line: `<id>\t<title>`.
pub async fn list(chat: &SharedChatStore, out: &mut impl Write) -> Result<()> {
    let chat = chat.lock().await;
    for conversation in chat.conversations() {
        writeln!(out, "{}\t{}", conversation.id(), conversation.title())?;
    }
    Ok(())
}

pub async fn show(chat: &SharedChatStore, id: &str, out: &mut impl Write) -> Result<()> {
    let mut chat = chat.lock().await;
    if !chat.set_active(Some(id)).await {
        bail!("conversation {} not found", id);
    }

    for message in chat.messages() {
        let speaker = match message.role() {
            Role::User => "You",
            Role::Ai => "AI",
        };
        writeln!(out, "{}: {}", speaker, message.content())?;
    }
    Ok(())
}

/// Send `text` to an existing conversation, or start a new one when
/// `conversation` is `None`. Prints the reply.
pub async fn send(
    chat: &SharedChatStore,
    sender: &SendMessage,
    conversation: Option<&str>,
    text: &str,
    out: &mut impl Write,
) -> Result<()> {
    let conversation_id = {
        let mut chat = chat.lock().await;
        match conversation {
            Some(id) if chat.set_active(Some(id)).await => id.to_string(),
            Some(id) => bail!("conversation {} not found", id),
            None => chat.conversation_id().to_string(),
        }
    };

    match sender.send(&conversation_id, text).await? {
        SendOutcome::Skipped => log::debug!("Nothing to send"),
        SendOutcome::Replied { reply, created, .. } => {
            writeln!(out, "{}", reply.content())?;
            if let Some(conversation) = created {
                writeln!(
                    out,
                    "\n[saved as \"{}\", id {}]",
                    conversation.title(),
                    conversation.id()
                )?;
            }
        }
    }
    Ok(())
}

pub async fn delete(chat: &SharedChatStore, id: &str, out: &mut impl Write) -> Result<()> {
    if !chat.lock().await.delete(id).await? {
        bail!("conversation {} not found", id);
    }
    writeln!(out, "Deleted {}", id)?;
    Ok(())
}

pub async fn health(backend: &ArcBackend, out: &mut impl Write) -> Result<()> {
    backend.health_check().await?;
    writeln!(out, "{} is healthy", backend.name())?;
    Ok(())
}
