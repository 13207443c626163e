//! Runs [`UiCommand`]s against the remote store and feeds the results back
//! into the UI loop as [`AppEvent`]s.
//!
//! Every command gets its own task: calls are neither ordered, nor
//! de-duplicated, nor cancelled.

use std::sync::mpsc::Sender;
use std::sync::Arc;
use tokio::runtime::Handle;
use tokio::sync::mpsc;
use tokio::task::JoinHandle;

use crate::remote::VendorStore;
use crate::ui::app::UiCommand;
use crate::ui::events::AppEvent;
use crate::ui::form::FormMode;

pub fn spawn_bridge<S: VendorStore>(
    handle: &Handle,
    store: Arc<S>,
    mut commands: mpsc::Receiver<UiCommand>,
    events: Sender<AppEvent>,
) -> JoinHandle<()> {
    handle.spawn(async move {
        while let Some(command) = commands.recv().await {
            let store = Arc::clone(&store);
            let events = events.clone();
            tokio::spawn(async move {
                let event = execute(store.as_ref(), command).await;
                if events.send(event).is_err() {
                    tracing::trace!("Remote result dropped (UI loop gone)");
                }
            });
        }
        tracing::debug!("Command channel closed, bridge stopping");
    })
}

/// Perform one command and wrap its outcome.
pub async fn execute<S: VendorStore>(store: &S, command: UiCommand) -> AppEvent {
    match command {
        UiCommand::LoadVendors => AppEvent::VendorsLoaded(store.list_all().await),
        UiCommand::SaveVendor {
            ticket,
            mode,
            fields,
        } => {
            let result = match &mode {
                FormMode::Create => store.create(&fields).await,
                FormMode::Edit { id } => store.update(id, &fields).await,
            };
            AppEvent::VendorSaved {
                ticket,
                mode,
                result,
            }
        }
        UiCommand::DeleteVendor { id } => {
            let result = store.delete(&id).await;
            AppEvent::VendorDeleted { id, result }
        }
    }
}
