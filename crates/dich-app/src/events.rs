use std::collections::VecDeque;

use dich_types::{Notice, UiEvent};
use kanal::AsyncReceiver;
use tokio_util::sync::CancellationToken;

use crate::translation::TranslationController;

/// App's main loop
pub async fn event_loop(
    mut controller: TranslationController,
    ui_to_app_rx: AsyncReceiver<UiEvent>,
    shutdown: CancellationToken,
) -> anyhow::Result<()> {
    controller.start().await;

    // Events that arrived while a request was in flight
    let mut pending: VecDeque<UiEvent> = VecDeque::new();

    tracing::info!("[EVENT_LOOP] Waiting for events");
    loop {
        let event = match pending.pop_front() {
            Some(event) => event,
            None => tokio::select! {
                _ = shutdown.cancelled() => break,
                event = ui_to_app_rx.recv() => match event {
                    Ok(event) => event,
                    Err(_) => {
                        tracing::info!("[EVENT_LOOP] UI channel closed");
                        break;
                    }
                },
            },
        };

        tracing::debug!("[EVENT_LOOP] Event: {:?}", event);
        match event {
            UiEvent::Translate => {
                run_translation(&mut controller, &ui_to_app_rx, &mut pending).await;
            }
            UiEvent::Quit => {
                tracing::info!("[EVENT_LOOP] Quit requested");
                shutdown.cancel();
                break;
            }
            event => handle_event(&mut controller, event).await,
        }
    }

    Ok(())
}

/// Drive one translation while still listening to the UI. Only `Cancel` acts
/// immediately and everything else waits its turn. A `Translate` with new
/// input queued ahead of it is kept; a bare one is dropped with a `Busy`
/// notice since the trigger is disabled.
async fn run_translation(
    controller: &mut TranslationController,
    ui_to_app_rx: &AsyncReceiver<UiEvent>,
    pending: &mut VecDeque<UiEvent>,
) {
    let cancel = controller.cancel_handle();
    let notifier = controller.notifier();
    let translation = controller.translate();
    tokio::pin!(translation);

    loop {
        tokio::select! {
            outcome = &mut translation => {
                tracing::debug!("[EVENT_LOOP] Translation finished: {:?}", outcome);
                return;
            }
            event = ui_to_app_rx.recv() => match event {
                Ok(UiEvent::Cancel) => {
                    tracing::info!("[EVENT_LOOP] Cancelling in-flight translation");
                    cancel.cancel();
                }
                Ok(UiEvent::Translate) => {
                    // Input queued since the last queued translate
                    let new_input = pending
                        .iter()
                        .rev()
                        .find(|event| matches!(event, UiEvent::InputChanged(_) | UiEvent::Translate))
                        .is_some_and(|event| matches!(event, UiEvent::InputChanged(_)));
                    if new_input {
                        tracing::debug!("[EVENT_LOOP] Translate queued behind new input");
                        pending.push_back(UiEvent::Translate);
                    } else {
                        tracing::debug!("[EVENT_LOOP] Translate ignored, request in flight");
                        notifier.notify(Notice::Busy).await;
                    }
                }
                Ok(event) => pending.push_back(event),
                Err(_) => {
                    let outcome = (&mut translation).await;
                    tracing::debug!("[EVENT_LOOP] Translation finished after UI closed: {:?}", outcome);
                    return;
                }
            },
        }
    }
}

async fn handle_event(controller: &mut TranslationController, event: UiEvent) {
    match event {
        UiEvent::InputChanged(text) => controller.set_input(&text).await,
        UiEvent::SelectSource(code) => controller.select_source(&code).await,
        UiEvent::SelectTarget(code) => controller.select_target(&code).await,
        UiEvent::Swap => controller.swap().await,
        UiEvent::Clear => controller.clear().await,
        UiEvent::Copy => controller.copy().await,
        UiEvent::ListLanguages => controller.publish_options().await,
        UiEvent::Cancel => {
            tracing::debug!("[EVENT_LOOP] Nothing in flight to cancel");
        }
        UiEvent::Translate | UiEvent::Quit => {
            // handled by the loop
        }
    }
}
