//! Hands URLs (`https:` project links, `mailto:` contact submissions) to the
//! operating system. Runs off the event loop and reports back as an `Action`.

use async_trait::async_trait;
use log::{info, warn};
use std::fmt;
use std::sync::{Arc, mpsc};

use crate::core::action::{Action, LinkRequest};

#[derive(Debug)]
pub enum LaunchError {
    Io(std::io::Error),
    Join(tokio::task::JoinError),
}

impl fmt::Display for LaunchError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            LaunchError::Io(e) => write!(f, "launch failed: {e}"),
            LaunchError::Join(e) => write!(f, "launch task failed: {e}"),
        }
    }
}

impl std::error::Error for LaunchError {}

#[async_trait]
pub trait Launcher: Send + Sync {
    async fn open(&self, url: &str) -> Result<(), LaunchError>;
}

/// Opens URLs with the platform's default handler.
pub struct SystemLauncher;

#[async_trait]
impl Launcher for SystemLauncher {
    async fn open(&self, url: &str) -> Result<(), LaunchError> {
        let url = url.to_string();
        tokio::task::spawn_blocking(move || open::that(&url))
            .await
            .map_err(LaunchError::Join)?
            .map_err(LaunchError::Io)
    }
}

pub fn spawn_open(
    launcher: Arc<dyn Launcher>,
    request: LinkRequest,
    tx: mpsc::Sender<Action>,
) -> tokio::task::JoinHandle<()> {
    info!("Opening {:?} link: {}", request.kind, request.url);
    tokio::spawn(async move {
        let result = launcher.open(&request.url).await.map_err(|e| e.to_string());
        if tx.send(Action::LinkOpened { request, result }).is_err() {
            warn!("Failed to report link launch: receiver dropped");
        }
    })
}
