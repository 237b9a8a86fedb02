//! Background dispatcher for persistence requests.
//!
//! The UI loop hands commands over a channel; every command is spawned as
//! its own task on the shared runtime. Two rapid drops can therefore be
//! acknowledged out of order by the backend; the log records outcomes, it
//! does not sequence requests.

use std::sync::mpsc::Sender;

use tokio::sync::mpsc;
use uuid::Uuid;

use crate::api::NewsletterClient;
use crate::ui::events::AppEvent;

use super::command::SyncCommand;

/// One queued write: log entry id plus the command to run.
#[derive(Debug)]
pub struct SyncJob {
    pub entry_id: Uuid,
    pub command: SyncCommand,
}

/// Cheap handle the UI uses to queue writes.
#[derive(Clone)]
pub struct SyncHandle {
    tx: mpsc::UnboundedSender<SyncJob>,
}

impl SyncHandle {
    /// Queue a command. Returns false when the worker is gone (shutdown).
    pub fn dispatch(&self, entry_id: Uuid, command: SyncCommand) -> bool {
        self.tx.send(SyncJob { entry_id, command }).is_ok()
    }

    /// A handle wired to nothing but a receiver, so tests can inspect what
    /// the UI would have dispatched without standing up a runtime.
    pub fn detached() -> (Self, mpsc::UnboundedReceiver<SyncJob>) {
        let (tx, rx) = mpsc::unbounded_channel();
        (Self { tx }, rx)
    }
}

/// Spawn the dispatcher on the given runtime.
///
/// Results come back to the UI loop as [`AppEvent::SyncResolved`] carrying
/// the originating log entry id.
pub fn start(
    runtime: &tokio::runtime::Handle,
    client: NewsletterClient,
    newsletter_id: String,
    events: Sender<AppEvent>,
) -> SyncHandle {
    let (tx, mut rx) = mpsc::unbounded_channel::<SyncJob>();

    runtime.spawn(async move {
        while let Some(job) = rx.recv().await {
            let client = client.clone();
            let newsletter_id = newsletter_id.clone();
            let events = events.clone();

            // One task per command: requests run concurrently and complete
            // in whatever order the backend answers.
            tokio::spawn(async move {
                tracing::debug!(entry = %job.entry_id, op = job.command.label(), "dispatching");
                let result = run_command(&client, &newsletter_id, &job.command).await;
                if let Err(err) = &result {
                    tracing::warn!(
                        entry = %job.entry_id,
                        op = job.command.label(),
                        error = %err,
                        "persistence request failed"
                    );
                }
                let _ = events.send(AppEvent::SyncResolved {
                    entry_id: job.entry_id,
                    result,
                });
            });
        }
    });

    SyncHandle { tx }
}

async fn run_command(
    client: &NewsletterClient,
    newsletter_id: &str,
    command: &SyncCommand,
) -> Result<(), crate::api::ApiError> {
    match command {
        SyncCommand::Reorder {
            category_id,
            article_ids,
        } => {
            client
                .update_order(newsletter_id, category_id, article_ids)
                .await
        }
        SyncCommand::Recategorize {
            article_id,
            to_category_id,
            ..
        } => {
            client
                .update_category(newsletter_id, article_id, to_category_id)
                .await
        }
        SyncCommand::RemoveArticle { article_id } => client.delete_article(article_id).await,
    }
}
