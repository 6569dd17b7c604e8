//! Badge template slot with latch-once semantics.
//!
//! A template is decoded at most once. Whichever outcome arrives first
//! (ready or failed) is kept for the rest of the session; later reports are
//! ignored. Querying the slot never blocks unless [`TemplateSlot::wait`] is
//! called explicitly.

use std::path::PathBuf;
use std::sync::mpsc::{self, Receiver, TryRecvError};
use std::thread;

use tracing::{info, warn};

use crate::error::Result;
use crate::io::load_template;
use crate::raster::SourceImage;

/// The decoded badge background.
#[derive(Clone, Debug)]
pub struct TemplateAsset {
    raster: SourceImage,
}

impl TemplateAsset {
    pub fn new(raster: SourceImage) -> Self {
        Self { raster }
    }

    pub fn width(&self) -> u32 {
        self.raster.width()
    }

    pub fn height(&self) -> u32 {
        self.raster.height()
    }

    pub fn raster(&self) -> &SourceImage {
        &self.raster
    }
}

#[derive(Clone, Debug)]
pub enum TemplateStatus {
    Pending,
    Ready(TemplateAsset),
    Failed(String),
}

impl TemplateStatus {
    pub fn is_settled(&self) -> bool {
        !matches!(self, Self::Pending)
    }
}

#[derive(Debug)]
pub struct TemplateSlot {
    status: TemplateStatus,
    incoming: Option<Receiver<Result<TemplateAsset>>>,
}

impl Default for TemplateSlot {
    fn default() -> Self {
        Self::new()
    }
}

impl TemplateSlot {
    /// A pending slot with no loader attached; settle it with
    /// [`notify_ready`](Self::notify_ready) or [`notify_failed`](Self::notify_failed).
    pub fn new() -> Self {
        Self {
            status: TemplateStatus::Pending,
            incoming: None,
        }
    }

    /// Attach a one-shot result channel fed by some external decoder.
    pub fn from_receiver(incoming: Receiver<Result<TemplateAsset>>) -> Self {
        Self {
            status: TemplateStatus::Pending,
            incoming: Some(incoming),
        }
    }

    /// Decode the template at `path` on a background thread.
    pub fn spawn_load(path: PathBuf) -> Self {
        let (tx, rx) = mpsc::channel();
        thread::spawn(move || {
            let result = load_template(&path);
            // The slot may have been dropped already; nothing to report then.
            let _ = tx.send(result);
        });
        Self::from_receiver(rx)
    }

    /// Latch a successful decode. Returns `false` if the slot was already settled.
    pub fn notify_ready(&mut self, asset: TemplateAsset) -> bool {
        if self.status.is_settled() {
            return false;
        }
        info!(width = asset.width(), height = asset.height(), "Template ready");
        self.status = TemplateStatus::Ready(asset);
        self.incoming = None;
        true
    }

    /// Latch a failed decode. Returns `false` if the slot was already settled.
    pub fn notify_failed(&mut self, reason: impl Into<String>) -> bool {
        if self.status.is_settled() {
            return false;
        }
        let reason = reason.into();
        warn!(%reason, "Template failed to load");
        self.status = TemplateStatus::Failed(reason);
        self.incoming = None;
        true
    }

    /// Pick up a finished background decode, if any, without blocking.
    pub fn poll(&mut self) -> &TemplateStatus {
        let received = match &self.incoming {
            Some(rx) => rx.try_recv(),
            None => return &self.status,
        };
        match received {
            Ok(result) => self.settle(result),
            Err(TryRecvError::Empty) => {}
            Err(TryRecvError::Disconnected) => {
                self.notify_failed("template loader exited without a result");
            }
        }
        &self.status
    }

    /// Block until the background decode (if any) reports.
    pub fn wait(&mut self) -> &TemplateStatus {
        if let Some(rx) = self.incoming.take() {
            match rx.recv() {
                Ok(result) => self.settle(result),
                Err(_) => {
                    self.notify_failed("template loader exited without a result");
                }
            }
        }
        &self.status
    }

    pub fn status(&self) -> &TemplateStatus {
        &self.status
    }

    pub fn ready(&self) -> Option<&TemplateAsset> {
        match &self.status {
            TemplateStatus::Ready(asset) => Some(asset),
            _ => None,
        }
    }

    fn settle(&mut self, result: Result<TemplateAsset>) {
        match result {
            Ok(asset) => {
                self.notify_ready(asset);
            }
            Err(e) => {
                self.notify_failed(e.to_string());
            }
        }
    }
}
