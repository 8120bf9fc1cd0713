//! Editor module - owns both regions and the single active gesture.
//!
//! This module is organized into:
//! - `mod.rs` - The Editor struct, construction and region access
//! - `actions` - Shape and region operations driven by UI commands
//!
//! Pointer handling lives in `crate::input` as further `impl Editor` blocks.

mod actions;

use crate::config::EditorConfig;
use crate::geometry::Point;
use crate::input::{DragSession, InteractionState, ViewTransform};
use crate::region::{Region, RegionKind, RegionStore};
use crate::render::RegionScene;
use crate::storage::{FileStore, SharedStore, load_transform, save_transform};
use anyhow::Context as _;
use std::sync::Arc;
use tracing::{info, warn};

pub struct Editor {
    buffer: Region,
    work: Region,
    /// Input state machine - at most one gesture across both regions
    input_state: InteractionState,
    storage: Option<SharedStore>,
}

impl Editor {
    /// An editor whose state lives in memory only.
    pub fn new(config: &EditorConfig) -> Self {
        Self {
            buffer: Region::new(RegionStore::new(RegionKind::Buffer), config.buffer_view_box),
            work: Region::new(RegionStore::new(RegionKind::Work), config.work_view_box),
            input_state: InteractionState::default(),
            storage: None,
        }
    }

    /// An editor restored from, and persisting to, `storage`.
    pub fn with_storage(config: &EditorConfig, storage: SharedStore) -> Self {
        let buffer = Region::new(
            RegionStore::restore(RegionKind::Buffer, storage.clone()),
            config.buffer_view_box,
        );
        let mut work = Region::new(
            RegionStore::restore(RegionKind::Work, storage.clone()),
            config.work_view_box,
        );
        work.set_transform(load_transform(storage.as_ref()));

        info!(
            buffer = buffer.store().len(),
            work = work.store().len(),
            scale = work.transform().scale(),
            "Editor restored"
        );
        Self {
            buffer,
            work,
            input_state: InteractionState::default(),
            storage: Some(storage),
        }
    }

    /// An editor backed by the file store named in `config` (or the default path).
    pub fn open(config: &EditorConfig) -> anyhow::Result<Self> {
        let store = match &config.storage_path {
            Some(path) => FileStore::open(path)
                .with_context(|| format!("Failed to open store at {}", path.display()))?,
            None => FileStore::open_default()?,
        };
        Ok(Self::with_storage(config, Arc::new(store)))
    }

    pub fn region(&self, kind: RegionKind) -> &Region {
        match kind {
            RegionKind::Buffer => &self.buffer,
            RegionKind::Work => &self.work,
        }
    }

    pub fn region_mut(&mut self, kind: RegionKind) -> &mut Region {
        match kind {
            RegionKind::Buffer => &mut self.buffer,
            RegionKind::Work => &mut self.work,
        }
    }

    /// Both regions, `kind` first.
    pub(crate) fn regions_mut(&mut self, kind: RegionKind) -> (&mut Region, &mut Region) {
        match kind {
            RegionKind::Buffer => (&mut self.buffer, &mut self.work),
            RegionKind::Work => (&mut self.work, &mut self.buffer),
        }
    }

    pub fn input_state(&self) -> &InteractionState {
        &self.input_state
    }

    pub(crate) fn input_state_mut(&mut self) -> &mut InteractionState {
        &mut self.input_state
    }

    /// The active drag, if any
    pub fn active_drag(&self) -> Option<&DragSession> {
        self.input_state.drag()
    }

    pub fn work_transform(&self) -> &ViewTransform {
        self.work.transform()
    }

    /// Connected region under a screen position
    pub fn region_at(&self, screen_pos: Point) -> Option<RegionKind> {
        RegionKind::ALL
            .into_iter()
            .find(|kind| self.region(*kind).contains_screen(screen_pos))
    }

    /// Render model of a region, with the active drag's working copy overlaid.
    pub fn scene(&self, kind: RegionKind) -> RegionScene {
        RegionScene::build(self.region(kind), self.input_state.drag())
    }

    pub(crate) fn storage(&self) -> Option<&SharedStore> {
        self.storage.as_ref()
    }

    /// Persist the work-zone transform, if backed. Failures are logged.
    pub(crate) fn persist_transform(&self) {
        let Some(storage) = &self.storage else {
            return;
        };
        if let Err(e) = save_transform(storage.as_ref(), self.work.transform()) {
            warn!("Failed to save work zone view: {}", e);
        }
    }
}
