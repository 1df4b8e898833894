//! Carousel ownership and discovery
//!
//! A registry owns every carousel on a page-like host: carousels are
//! attached under a container key, addressed by a stable id, ticked
//! together, and detached cleanly (listeners and the position watch die
//! with the instance). A TOML manifest can declare containers and their
//! per-carousel settings up front, the way markup attributes would.

use std::time::{Duration, Instant};

use rustc_hash::FxHashMap;
use serde::Deserialize;
use slotmap::{new_key_type, SlotMap};
use whirl_core::{CarouselError, Result, TrackSurface};

use crate::carousel::Carousel;
use crate::config::{parse_timing, CarouselConfig};

new_key_type! {
    /// Stable handle for a carousel owned by a registry
    pub struct CarouselId;
}

/// Owner of all carousels behind one host
pub struct CarouselRegistry<S: TrackSurface> {
    carousels: SlotMap<CarouselId, Carousel<S>>,
    by_container: FxHashMap<String, CarouselId>,
}

impl<S: TrackSurface> Default for CarouselRegistry<S> {
    fn default() -> Self {
        Self::new()
    }
}

impl<S: TrackSurface> CarouselRegistry<S> {
    /// Create an empty registry
    pub fn new() -> Self {
        Self {
            carousels: SlotMap::with_key(),
            by_container: FxHashMap::default(),
        }
    }

    /// Number of attached carousels
    pub fn len(&self) -> usize {
        self.carousels.len()
    }

    /// Whether the registry is empty
    pub fn is_empty(&self) -> bool {
        self.carousels.is_empty()
    }

    /// Attach a carousel over `surface` under a container key
    ///
    /// Keys are unique; attaching to an occupied container is an error.
    pub fn attach(
        &mut self,
        container_key: &str,
        surface: S,
        config: CarouselConfig,
    ) -> Result<CarouselId> {
        if self.by_container.contains_key(container_key) {
            return Err(CarouselError::AlreadyAttached(container_key.to_string()));
        }
        let id = self.carousels.insert(Carousel::with_config(surface, config));
        self.by_container.insert(container_key.to_string(), id);
        tracing::debug!(container = container_key, "carousel attached");
        Ok(id)
    }

    /// The id attached under a container key
    pub fn lookup(&self, container_key: &str) -> Option<CarouselId> {
        self.by_container.get(container_key).copied()
    }

    /// Shared access to a carousel
    pub fn get(&self, id: CarouselId) -> Option<&Carousel<S>> {
        self.carousels.get(id)
    }

    /// Mutable access to a carousel
    pub fn get_mut(&mut self, id: CarouselId) -> Option<&mut Carousel<S>> {
        self.carousels.get_mut(id)
    }

    /// Iterate over the attached ids
    pub fn ids(&self) -> impl Iterator<Item = CarouselId> + '_ {
        self.carousels.keys()
    }

    /// Drop a carousel, its listeners, and its position watch
    pub fn detach(&mut self, id: CarouselId) -> Result<()> {
        let Some(carousel) = self.carousels.remove(id) else {
            return Err(CarouselError::UnknownCarousel);
        };
        if let Some(handle) = carousel.watch_handle() {
            handle.stop();
        }
        self.by_container.retain(|_, attached| *attached != id);
        tracing::debug!("carousel detached");
        Ok(())
    }

    /// Advance every carousel to the frame at `now`
    pub fn tick(&mut self, now: Instant) {
        for (_, carousel) in self.carousels.iter_mut() {
            carousel.tick(now);
        }
    }

    /// Attach every carousel a TOML manifest declares
    ///
    /// `surface_for` maps a declared container key to its track surface;
    /// returning `None` marks the container unknown. Unknown containers
    /// and duplicate keys are logged and skipped, valid entries are
    /// attached. A manifest that fails to parse attaches nothing.
    pub fn attach_from_manifest(
        &mut self,
        manifest: &str,
        mut surface_for: impl FnMut(&str) -> Option<S>,
    ) -> Result<Vec<CarouselId>> {
        let manifest: CarouselManifest =
            toml::from_str(manifest).map_err(|err| CarouselError::Manifest(err.to_string()))?;

        let mut attached = Vec::new();
        for entry in &manifest.carousel {
            let Some(surface) = surface_for(&entry.container) else {
                tracing::warn!(
                    container = %entry.container,
                    "manifest names an unknown container, skipping"
                );
                continue;
            };
            match self.attach(&entry.container, surface, entry.config()) {
                Ok(id) => attached.push(id),
                Err(err) => {
                    tracing::warn!(container = %entry.container, %err, "skipping manifest entry");
                }
            }
        }
        Ok(attached)
    }
}

#[derive(Debug, Deserialize)]
struct CarouselManifest {
    #[serde(default)]
    carousel: Vec<ManifestEntry>,
}

/// One `[[carousel]]` block in a manifest
#[derive(Debug, Deserialize)]
struct ManifestEntry {
    container: String,
    threshold_percent: Option<f32>,
    duration_ms: Option<u64>,
    timing: Option<String>,
}

impl ManifestEntry {
    fn config(&self) -> CarouselConfig {
        let mut config = CarouselConfig::default();
        if let Some(percent) = self.threshold_percent {
            config = config.with_threshold_percent(percent);
        }
        if let Some(ms) = self.duration_ms {
            config = config.with_duration(Duration::from_millis(ms));
        }
        if let Some(ref timing) = self.timing {
            match parse_timing(timing) {
                Some(easing) => config = config.with_easing(easing),
                None => {
                    tracing::warn!(
                        container = %self.container,
                        timing = %timing,
                        "invalid timing in manifest, using default"
                    );
                }
            }
        }
        config
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::track::HeadlessTrack;
    use whirl_core::EventKind;

    fn track() -> HeadlessTrack {
        HeadlessTrack::new(4, 300.0)
    }

    #[test]
    fn test_attach_and_lookup() {
        let mut registry = CarouselRegistry::new();
        let id = registry
            .attach("hero", track(), CarouselConfig::default())
            .unwrap();

        assert_eq!(registry.len(), 1);
        assert_eq!(registry.lookup("hero"), Some(id));
        assert_eq!(registry.lookup("gallery"), None);
        assert_eq!(registry.get(id).unwrap().slide_count(), 4);
    }

    #[test]
    fn test_duplicate_container_is_rejected() {
        let mut registry = CarouselRegistry::new();
        registry
            .attach("hero", track(), CarouselConfig::default())
            .unwrap();

        let result = registry.attach("hero", track(), CarouselConfig::default());
        assert!(matches!(result, Err(CarouselError::AlreadyAttached(_))));
        assert_eq!(registry.len(), 1);
    }

    #[test]
    fn test_detach_removes_and_stops_watch() {
        let mut registry = CarouselRegistry::new();
        let id = registry
            .attach("hero", track(), CarouselConfig::default())
            .unwrap();

        registry
            .get_mut(id)
            .unwrap()
            .on(EventKind::SlidePositionChange, |_| {});
        let handle = registry.get(id).unwrap().watch_handle().unwrap();
        assert!(handle.is_running());

        registry.detach(id).unwrap();
        assert!(registry.is_empty());
        assert_eq!(registry.lookup("hero"), None);
        assert!(!handle.is_running());

        // A stale id cannot detach twice
        assert!(matches!(
            registry.detach(id),
            Err(CarouselError::UnknownCarousel)
        ));
    }

    #[test]
    fn test_tick_advances_every_carousel() {
        let mut registry = CarouselRegistry::new();
        let a = registry
            .attach("a", track(), CarouselConfig::default())
            .unwrap();
        let b = registry
            .attach("b", track(), CarouselConfig::default())
            .unwrap();

        let t0 = Instant::now();
        registry.get_mut(a).unwrap().go_to(1, t0).unwrap();
        registry.get_mut(b).unwrap().go_to(2, t0).unwrap();

        registry.tick(t0 + Duration::from_millis(700));
        let surface_a = registry.get(a).unwrap().surface();
        let surface_b = registry.get(b).unwrap().surface();
        assert_eq!(surface_a.rendered_offset(), -300.0);
        assert_eq!(surface_b.rendered_offset(), -600.0);
        assert!(!surface_a.transition_installed());
    }

    #[test]
    fn test_manifest_attaches_with_overrides_and_defaults() {
        let mut registry = CarouselRegistry::new();
        let manifest = r#"
            [[carousel]]
            container = "hero"
            threshold_percent = 15.0
            duration_ms = 400
            timing = "ease-in-out"

            [[carousel]]
            container = "gallery"
        "#;

        let attached = registry
            .attach_from_manifest(manifest, |_| Some(track()))
            .unwrap();
        assert_eq!(attached.len(), 2);

        let hero = registry.get(registry.lookup("hero").unwrap()).unwrap();
        assert_eq!(hero.config().threshold_percent, 15.0);
        assert_eq!(
            hero.config().transition.duration,
            Duration::from_millis(400)
        );
        assert_eq!(
            hero.config().transition.easing,
            whirl_animation::Easing::ease_in_out()
        );

        let gallery = registry.get(registry.lookup("gallery").unwrap()).unwrap();
        assert_eq!(gallery.config(), &CarouselConfig::default());
    }

    #[test]
    fn test_manifest_skips_unknown_and_duplicate_containers() {
        let mut registry = CarouselRegistry::new();
        registry
            .attach("hero", track(), CarouselConfig::default())
            .unwrap();

        let manifest = r#"
            [[carousel]]
            container = "hero"

            [[carousel]]
            container = "missing"

            [[carousel]]
            container = "gallery"
        "#;

        let attached = registry
            .attach_from_manifest(manifest, |key| {
                if key == "missing" {
                    None
                } else {
                    Some(track())
                }
            })
            .unwrap();

        // Only the gallery entry was new and resolvable
        assert_eq!(attached.len(), 1);
        assert_eq!(registry.len(), 2);
        assert!(registry.lookup("gallery").is_some());
    }

    #[test]
    fn test_manifest_parse_failure() {
        let mut registry: CarouselRegistry<HeadlessTrack> = CarouselRegistry::new();
        let result = registry.attach_from_manifest("carousel = [not toml", |_| Some(track()));
        assert!(matches!(result, Err(CarouselError::Manifest(_))));
        assert!(registry.is_empty());
    }

    #[test]
    fn test_empty_manifest_attaches_nothing() {
        let mut registry: CarouselRegistry<HeadlessTrack> = CarouselRegistry::new();
        let attached = registry.attach_from_manifest("", |_| Some(track())).unwrap();
        assert!(attached.is_empty());
    }

    #[test]
    fn test_manifest_invalid_timing_falls_back() {
        let mut registry = CarouselRegistry::new();
        let manifest = r#"
            [[carousel]]
            container = "hero"
            timing = "bouncy"
        "#;

        registry
            .attach_from_manifest(manifest, |_| Some(track()))
            .unwrap();
        let hero = registry.get(registry.lookup("hero").unwrap()).unwrap();
        assert_eq!(
            hero.config().transition.easing,
            whirl_animation::Easing::ease_out()
        );
    }
}
