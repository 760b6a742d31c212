use std::future::Future;
use std::sync::Arc;

use glossa_core::TranslationContext;
use glossa_translator::Translator;
use glossa_types::AppEvent;
use kanal::{AsyncReceiver, AsyncSender};
use tokio::runtime::Handle;
use tokio::task::JoinHandle;
use tokio_util::sync::CancellationToken;

/// Centralized channel management
pub struct ChannelSet {
    pub app_to_ui: (AsyncSender<AppEvent>, AsyncReceiver<AppEvent>),
}

impl ChannelSet {
    pub fn new() -> Self {
        Self {
            app_to_ui: kanal::bounded_async(256),
        }
    }
}

impl Default for ChannelSet {
    fn default() -> Self {
        Self::new()
    }
}

/// Owns the display channel and the shutdown token for the runtime side
pub struct AppController {
    channels: ChannelSet,
    runtime: Handle,
    cancel_token: CancellationToken,
}

impl AppController {
    pub fn new(runtime: Handle) -> Self {
        Self {
            channels: ChannelSet::new(),
            runtime,
            cancel_token: CancellationToken::new(),
        }
    }

    pub fn translation_context(&self, translator: Arc<dyn Translator>) -> TranslationContext {
        TranslationContext::new(
            translator,
            self.runtime.clone(),
            self.channels.app_to_ui.0.clone(),
            self.cancel_token.child_token(),
        )
    }

    pub fn display_rx(&self) -> AsyncReceiver<AppEvent> {
        self.channels.app_to_ui.1.clone()
    }

    /// When `signal` resolves, cancel in-flight work and ask the UI to close
    pub fn spawn_shutdown_on<F>(&self, signal: F) -> JoinHandle<()>
    where
        F: Future<Output = ()> + Send + 'static,
    {
        let cancel = self.cancel_token.clone();
        let display_tx = self.channels.app_to_ui.0.clone();

        self.runtime.spawn(async move {
            tokio::select! {
                _ = cancel.cancelled() => {}
                _ = signal => {
                    tracing::info!("Shutdown requested");
                    cancel.cancel();
                    if let Err(e) = display_tx.send(AppEvent::Shutdown).await {
                        tracing::debug!("UI already gone: {}", e);
                    }
                }
            }
        })
    }

    pub fn is_shutting_down(&self) -> bool {
        self.cancel_token.is_cancelled()
    }

    pub fn shutdown(&self) {
        self.cancel_token.cancel();
    }
}
