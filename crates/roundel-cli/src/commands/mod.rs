pub mod config;
pub mod export;
pub mod info;
pub mod preview;

use std::path::PathBuf;

use anyhow::{bail, Context, Result};
use clap::Args;
use roundel_core::config::RoundelConfig;
use roundel_core::controls::{ControlEvent, GestureAdapter};
use roundel_core::io::load_photo;
use roundel_core::session::Session;
use roundel_core::template::TemplateSlot;

/// Photo, template and framing options shared by every rendering command.
#[derive(Args)]
pub struct FramingArgs {
    /// Photo to place inside the badge cutout
    pub photo: PathBuf,

    /// Configuration file (TOML)
    #[arg(long)]
    pub config: Option<PathBuf>,

    /// Badge template image (overrides the config file)
    #[arg(long)]
    pub template: Option<PathBuf>,

    /// Zoom factor (clamped to 0.5-2.0)
    #[arg(long)]
    pub scale: Option<f32>,

    /// Rotation in degrees
    #[arg(long, allow_hyphen_values = true)]
    pub rotate: Option<f32>,

    /// Drag offset in preview pixels, as x,y
    #[arg(long, value_parser = parse_offset, allow_hyphen_values = true)]
    pub offset: Option<(f32, f32)>,

    /// Control events replayed in order after the flags above
    /// (zoom:150, rotate:30, zoom-in, zoom-out, rotate-left, rotate-right,
    /// reset, drag-start:x,y, drag-move:x,y, drag-end)
    #[arg(long = "event", allow_hyphen_values = true)]
    pub events: Vec<ControlEvent>,
}

fn parse_offset(s: &str) -> std::result::Result<(f32, f32), String> {
    let (x, y) = s
        .split_once(',')
        .ok_or_else(|| format!("expected x,y but got '{s}'"))?;
    let x = x.trim().parse().map_err(|_| format!("invalid x in '{s}'"))?;
    let y = y.trim().parse().map_err(|_| format!("invalid y in '{s}'"))?;
    Ok((x, y))
}

impl FramingArgs {
    pub fn load_config(&self) -> Result<RoundelConfig> {
        let mut config = match self.config {
            Some(ref path) => RoundelConfig::load(path)
                .with_context(|| format!("Failed to read config {}", path.display()))?,
            None => RoundelConfig::default(),
        };
        if let Some(ref template) = self.template {
            config.template = Some(template.clone());
        }
        Ok(config)
    }

    /// Build a session with the photo loaded, the template decoding in the
    /// background and every framing option applied.
    pub fn build_session(&self, config: &RoundelConfig) -> Result<Session> {
        let slot = match config.template {
            Some(ref path) => TemplateSlot::spawn_load(path.clone()),
            None => {
                let mut slot = TemplateSlot::new();
                slot.notify_failed("no template configured");
                slot
            }
        };
        let mut session = Session::from_config(config, slot);

        let photo = load_photo(&self.photo)
            .with_context(|| format!("Failed to load {}", self.photo.display()))?;
        session.load_source_image(photo)?;

        session.update(|s| {
            if let Some(scale) = self.scale {
                s.set_scale(scale);
            }
            if let Some(degrees) = self.rotate {
                s.set_rotation(degrees);
            }
            if let Some((dx, dy)) = self.offset {
                s.translate_by(dx, dy);
            }
        })?;

        let mut adapter = GestureAdapter::new();
        for event in &self.events {
            tracing::debug!(%event, "Replaying control event");
            adapter
                .handle(&mut session, *event)
                .with_context(|| format!("Failed to apply event {event}"))?;
        }
        if adapter.is_dragging() {
            bail!("Event list ends mid-drag; add drag-end");
        }

        Ok(session)
    }
}
