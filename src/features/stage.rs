//! Mounted blobs and their drivers
//!
//! A blob is mounted when the page showing it becomes visible and
//! unmounted when that page is left. Mounting always starts a fresh
//! driver, so a blob that comes back on screen restarts from time 0.

use std::collections::HashMap;

use super::config::BlobConfig;
use super::driver::{AnimationDriver, BlobFrame};
use super::presets::ShowcasePreset;

/// Identifies one on-screen blob
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum BlobSlot {
    /// Large preview on the showcase page
    Preview,
    /// Live thumbnail on a preset card
    Preset(ShowcasePreset),
    /// Blob on the examples page, by index
    Example(u8),
    /// Single large blob at the bottom of the examples page
    SimpleBlob,
}

/// A mounted blob: its driver, the configuration it renders and the last frame
#[derive(Debug, Clone)]
pub struct StageEntry {
    pub driver: AnimationDriver,
    pub config: BlobConfig,
    pub frame: BlobFrame,
}

impl StageEntry {
    fn new(config: BlobConfig) -> Self {
        let mut driver = AnimationDriver::new();
        driver.start();
        let frame = driver.frame(&config);
        Self {
            driver,
            config,
            frame,
        }
    }
}

/// All mounted blobs
#[derive(Debug, Default)]
pub struct Stage {
    entries: HashMap<BlobSlot, StageEntry>,
}

impl Stage {
    pub fn new() -> Self {
        Self::default()
    }

    /// Mount `slot` with a fresh driver, replacing any previous entry
    pub fn mount(&mut self, slot: BlobSlot, config: BlobConfig) {
        tracing::debug!("Mounting blob {:?}", slot);
        self.entries.insert(slot, StageEntry::new(config));
    }

    /// Stop and remove `slot`; unmounting an absent slot does nothing
    pub fn unmount(&mut self, slot: BlobSlot) {
        if let Some(mut entry) = self.entries.remove(&slot) {
            entry.driver.stop();
            tracing::debug!(
                "Unmounted blob {:?} after {} ticks (t={:.2})",
                slot,
                entry.driver.ticks(),
                entry.driver.time()
            );
        }
    }

    /// Unmount every slot matching `predicate`
    pub fn unmount_where(&mut self, predicate: impl Fn(&BlobSlot) -> bool) {
        let slots: Vec<BlobSlot> = self.entries.keys().copied().filter(|s| predicate(s)).collect();
        for slot in slots {
            self.unmount(slot);
        }
    }

    /// Whether `slot` currently has a driver, running or paused
    pub fn is_mounted(&self, slot: BlobSlot) -> bool {
        self.entries.contains_key(&slot)
    }

    /// Replace the configuration of a mounted blob; takes effect on the next tick,
    /// or right away when the blob is paused
    pub fn set_config(&mut self, slot: BlobSlot, config: BlobConfig) {
        if let Some(entry) = self.entries.get_mut(&slot) {
            entry.config = config;
            if !entry.driver.is_running() {
                entry.frame = entry.driver.frame(&entry.config);
            }
        }
    }

    pub fn config(&self, slot: BlobSlot) -> Option<&BlobConfig> {
        self.entries.get(&slot).map(|e| &e.config)
    }

    /// Pause a mounted blob; its last frame stays visible
    pub fn pause(&mut self, slot: BlobSlot) {
        if let Some(entry) = self.entries.get_mut(&slot) {
            entry.driver.stop();
        }
    }

    /// Resume a paused blob from time 0
    pub fn resume(&mut self, slot: BlobSlot) {
        if let Some(entry) = self.entries.get_mut(&slot) {
            entry.driver.start();
            entry.frame = entry.driver.frame(&entry.config);
        }
    }

    pub fn is_running(&self, slot: BlobSlot) -> bool {
        self.entries
            .get(&slot)
            .is_some_and(|e| e.driver.is_running())
    }

    /// Advance every running driver by one tick
    pub fn tick_all(&mut self) {
        for entry in self.entries.values_mut() {
            if let Some(frame) = entry.driver.tick(&entry.config) {
                entry.frame = frame;
            }
        }
    }

    /// Last rendered frame of `slot`
    pub fn frame(&self, slot: BlobSlot) -> Option<&BlobFrame> {
        self.entries.get(&slot).map(|e| &e.frame)
    }

    pub fn any_running(&self) -> bool {
        self.entries.values().any(|e| e.driver.is_running())
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn ticked(stage: &mut Stage, n: usize) {
        for _ in 0..n {
            stage.tick_all();
        }
    }

    #[test]
    fn mount_renders_first_frame_at_zero() {
        let mut stage = Stage::new();
        stage.mount(BlobSlot::Preview, BlobConfig::default());
        let frame = stage.frame(BlobSlot::Preview).expect("mounted");
        assert_eq!(frame.time, 0.0);
        assert!(stage.any_running());
    }

    #[test]
    fn remount_restarts_from_zero() {
        let mut stage = Stage::new();
        stage.mount(BlobSlot::SimpleBlob, BlobConfig::default());
        ticked(&mut stage, 30);
        assert!(stage.frame(BlobSlot::SimpleBlob).is_some_and(|f| f.time > 0.0));

        stage.unmount(BlobSlot::SimpleBlob);
        stage.mount(BlobSlot::SimpleBlob, BlobConfig::default());
        assert_eq!(stage.frame(BlobSlot::SimpleBlob).map(|f| f.time), Some(0.0));
    }

    #[test]
    fn unmount_is_idempotent() {
        let mut stage = Stage::new();
        stage.mount(BlobSlot::Example(0), BlobConfig::default());
        stage.unmount(BlobSlot::Example(0));
        stage.unmount(BlobSlot::Example(0));
        assert_eq!(stage.len(), 0);
        assert!(!stage.any_running(), "no drivers should remain");
    }

    #[test]
    fn unmount_where_filters_slots() {
        let mut stage = Stage::new();
        stage.mount(BlobSlot::Preview, BlobConfig::default());
        for preset in ShowcasePreset::all() {
            stage.mount(BlobSlot::Preset(*preset), preset.thumbnail());
        }
        stage.mount(BlobSlot::Example(1), BlobConfig::default());

        stage.unmount_where(|slot| matches!(slot, BlobSlot::Preset(_)));
        assert_eq!(stage.len(), 2);
        assert!(stage.is_mounted(BlobSlot::Preview));
        assert!(stage.is_mounted(BlobSlot::Example(1)));
    }

    #[test]
    fn pause_freezes_and_resume_restarts() {
        let mut stage = Stage::new();
        stage.mount(BlobSlot::Preview, BlobConfig::default());
        ticked(&mut stage, 10);
        stage.pause(BlobSlot::Preview);
        let paused = stage.frame(BlobSlot::Preview).map(|f| f.time);
        ticked(&mut stage, 10);
        assert_eq!(stage.frame(BlobSlot::Preview).map(|f| f.time), paused);
        assert!(!stage.any_running());

        stage.resume(BlobSlot::Preview);
        assert!(stage.is_running(BlobSlot::Preview));
        assert_eq!(stage.frame(BlobSlot::Preview).map(|f| f.time), Some(0.0));
    }

    #[test]
    fn config_updates_apply_on_next_tick() {
        let mut stage = Stage::new();
        stage.mount(BlobSlot::Preview, BlobConfig::default());
        stage.set_config(BlobSlot::Preview, BlobConfig::default().vertices(12));
        assert_eq!(
            stage.frame(BlobSlot::Preview).map(|f| f.curve.samples.len()),
            Some(25),
            "frame is untouched until the next tick"
        );
        stage.tick_all();
        assert_eq!(
            stage.frame(BlobSlot::Preview).map(|f| f.curve.samples.len()),
            Some(13)
        );
    }

    #[test]
    fn paused_blob_shows_config_changes_at_its_frozen_time() {
        let mut stage = Stage::new();
        stage.mount(BlobSlot::Preview, BlobConfig::default());
        ticked(&mut stage, 5);
        stage.pause(BlobSlot::Preview);
        let frozen = stage.frame(BlobSlot::Preview).map(|f| f.time);

        stage.set_config(BlobSlot::Preview, BlobConfig::default().size(300.0));
        let frame = stage.frame(BlobSlot::Preview).expect("mounted");
        assert_eq!(frame.size, 300.0);
        assert_eq!(Some(frame.time), frozen);
    }
}
