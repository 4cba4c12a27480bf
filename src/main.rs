use std::io;
use std::sync::Arc;
use std::sync::atomic::AtomicUsize;

use eyre::{Context, Result};
use roomchat::app::services::{ActionService, EventService, ShutdownCoordinator};
use roomchat::app::{App, restore_terminal};
use roomchat::backend::{ArcBackend, new_backend};
use roomchat::chat::{ChatStore, SendMessage, SharedChatStore};
use roomchat::cli::{Command, Commands, commands};
use roomchat::config::constants::SHUTDOWN_TIMEOUT;
use roomchat::config::{Configuration, init_logger, verbose};
use roomchat::storage::{PersistentStore, new_storage};
use tokio::{sync::mpsc, task::JoinSet};
use tokio_util::sync::CancellationToken;

#[tokio::main]
async fn main() -> Result<()> {
    let cmd = Command::new();

    std::panic::set_hook(Box::new(|info| {
        restore_terminal();
        better_panic::Settings::auto().create_panic_handler()(info);
    }));

    let config = cmd.get_config()?;
    Configuration::init(config.clone())?;
    init_logger(&config.log)?;

    let storage = new_storage(&config.storage)
        .await
        .wrap_err("opening storage")?;
    let chat = ChatStore::open(PersistentStore::new(storage)).await.shared();
    verbose!(
        "[+] Loaded {} conversations",
        chat.lock().await.conversations().len()
    );

    let backend = new_backend(&config.backend);
    let sender = SendMessage::new(chat.clone(), backend.clone());

    let mut out = io::stdout();
    match cmd.subcommand() {
        Commands::Chat => run_chat(chat, backend, sender).await,
        Commands::List => commands::list(&chat, &mut out).await,
        Commands::Show { id } => commands::show(&chat, &id, &mut out).await,
        Commands::Send { conversation, text } => {
            commands::send(&chat, &sender, conversation.as_deref(), &text, &mut out).await
        }
        Commands::Delete { id } => commands::delete(&chat, &id, &mut out).await,
        Commands::Health => commands::health(&backend, &mut out).await,
    }
}

async fn run_chat(chat: SharedChatStore, backend: ArcBackend, sender: SendMessage) -> Result<()> {
    if let Err(err) = backend.health_check().await {
        log::warn!("Endpoint {} is not healthy: {:#}", backend.name(), err);
        verbose!("[!] Endpoint is not healthy: {:#}", err);
    }

    let token = CancellationToken::new();
    let pending_tasks = Arc::new(AtomicUsize::new(0));
    let (action_tx, action_rx) = mpsc::unbounded_channel();
    let mut events = EventService::default();

    let mut services = JoinSet::new();
    let mut action_service = ActionService::new(
        chat.clone(),
        sender,
        action_rx,
        events.event_tx(),
        token.clone(),
        pending_tasks.clone(),
    );
    services.spawn(async move { action_service.run().await });

    let snapshots = chat.lock().await.subscribe();
    let result = App::new(action_tx, &mut events, snapshots, token)
        .run()
        .await;

    // Replies already requested still get written.
    if let Err(err) = ShutdownCoordinator::new(pending_tasks, SHUTDOWN_TIMEOUT)
        .wait()
        .await
    {
        log::warn!("{:#}", err);
        eprintln!("{:#}", err);
    }

    services.abort_all();
    while let Some(joined) = services.join_next().await {
        match joined {
            Ok(Err(err)) => log::error!("Action service failed: {:#}", err),
            Err(err) if !err.is_cancelled() => log::error!("Action service panicked: {}", err),
            _ => {}
        }
    }
    result
}
