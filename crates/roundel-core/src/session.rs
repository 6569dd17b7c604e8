use tracing::{debug, info};

use crate::config::RoundelConfig;
use crate::error::Result;
use crate::export::{export_badge, BadgeStyle, ExportOutput};
use crate::geometry::ViewportGeometry;
use crate::preview::{render_preview, Preview};
use crate::raster::SourceImage;
use crate::state::TransformState;
use crate::template::{TemplateAsset, TemplateSlot, TemplateStatus};

/// The single owner of everything a badge-framing session needs.
///
/// Every mutation of the transform re-renders the preview synchronously.
/// The template may settle at any point; export never waits for it.
#[derive(Debug)]
pub struct Session {
    geometry: ViewportGeometry,
    style: BadgeStyle,
    state: TransformState,
    source: Option<SourceImage>,
    template: TemplateSlot,
    preview: Option<Preview>,
}

impl Session {
    pub fn new(geometry: ViewportGeometry, style: BadgeStyle, template: TemplateSlot) -> Self {
        let mut session = Self {
            geometry,
            style,
            state: TransformState::default(),
            source: None,
            template,
            preview: None,
        };
        session.sync_template_size();
        session
    }

    pub fn from_config(config: &RoundelConfig, template: TemplateSlot) -> Self {
        Self::new(config.geometry.clone(), config.style.clone(), template)
    }

    pub fn state(&self) -> &TransformState {
        &self.state
    }

    pub fn source(&self) -> Option<&SourceImage> {
        self.source.as_ref()
    }

    pub fn geometry(&self) -> &ViewportGeometry {
        &self.geometry
    }

    pub fn style(&self) -> &BadgeStyle {
        &self.style
    }

    /// The most recent preview, `None` until a photo is loaded.
    pub fn preview(&self) -> Option<&Preview> {
        self.preview.as_ref()
    }

    pub fn template_status(&self) -> &TemplateStatus {
        self.template.status()
    }

    /// Replace the photo, reset the framing and redraw the preview.
    pub fn load_source_image(&mut self, image: SourceImage) -> Result<()> {
        info!(width = image.width(), height = image.height(), "Photo loaded");
        self.source = Some(image);
        self.state.reset();
        self.refresh_preview()
    }

    pub fn notify_template_ready(&mut self, asset: TemplateAsset) -> bool {
        let latched = self.template.notify_ready(asset);
        self.sync_template_size();
        latched
    }

    pub fn notify_template_failed(&mut self, reason: impl Into<String>) -> bool {
        self.template.notify_failed(reason)
    }

    /// Pick up a finished background template decode without blocking.
    pub fn poll_template(&mut self) -> &TemplateStatus {
        self.template.poll();
        self.sync_template_size();
        self.template.status()
    }

    /// Block until the background template decode reports.
    pub fn wait_for_template(&mut self) -> &TemplateStatus {
        self.template.wait();
        self.sync_template_size();
        self.template.status()
    }

    /// Apply one transform mutation and redraw the preview.
    pub fn update(&mut self, mutate: impl FnOnce(&mut TransformState)) -> Result<()> {
        mutate(&mut self.state);
        debug!(state = ?self.state, "Transform updated");
        self.refresh_preview()
    }

    pub fn reset(&mut self) -> Result<()> {
        self.update(TransformState::reset)
    }

    /// Redraw the preview. A no-op while no photo is loaded.
    pub fn refresh_preview(&mut self) -> Result<()> {
        self.preview = render_preview(&self.state, self.source.as_ref(), &self.geometry)?;
        Ok(())
    }

    /// Composite the badge at export resolution.
    pub fn export(&mut self) -> Result<ExportOutput> {
        self.poll_template();
        export_badge(
            &self.state,
            self.source.as_ref(),
            self.template.status(),
            &self.geometry,
            &self.style,
        )
    }

    fn sync_template_size(&mut self) {
        if let Some(asset) = self.template.ready() {
            self.geometry.set_template_size(asset.width(), asset.height());
        }
    }
}
