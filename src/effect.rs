use crate::config::Config;
use crate::gfx::anim::{interpolate, Easing, Timeline};
use crate::gfx::math::Rect;
use crate::host::EffectsHost;
use bitflags::bitflags;
use log::{debug, info};
use std::collections::HashMap;
use std::hash::Hash;

/// Position this effect asks for in the host's effect chain.
pub const REQUESTED_CHAIN_POSITION: i32 = 50;

bitflags! {
    #[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
    pub struct PaintMask: u32 {
        const TRANSFORMED_WINDOWS = 1 << 0;
    }
}

#[derive(Debug, Clone, Copy, Default)]
pub struct ScreenPrePaintData {
    pub mask: PaintMask,
}

#[derive(Debug, Clone, Copy, Default)]
pub struct WindowPrePaintData {
    pub transformed: bool,
}

impl WindowPrePaintData {
    pub fn set_transformed(&mut self) {
        self.transformed = true;
    }
}

/// Transform the host applies when drawing a window.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct WindowPaintData {
    pub x_scale: f64,
    pub y_scale: f64,
    pub x_translation: f64,
    pub y_translation: f64,
    pub opacity: f64,
}

impl Default for WindowPaintData {
    fn default() -> Self {
        Self {
            x_scale: 1.0,
            y_scale: 1.0,
            x_translation: 0.0,
            y_translation: 0.0,
            opacity: 1.0,
        }
    }
}

impl WindowPaintData {
    pub fn multiply_opacity(&mut self, factor: f64) {
        self.opacity *= factor;
    }
}

/// Animates windows growing out of their icon when they are unminimized.
pub struct UnminimizeEffect<W> {
    animations: HashMap<W, Timeline>,
    duration: f64,
    opacity: f64,
    scale: f64,
}

impl<W> UnminimizeEffect<W>
where
    W: Copy + Eq + Hash + std::fmt::Debug,
{
    pub fn new<H: EffectsHost<W>>(host: &H, config: &Config) -> Self {
        let mut effect = Self {
            animations: HashMap::new(),
            duration: 0.0,
            opacity: 0.0,
            scale: 0.0,
        };
        effect.reconfigure(host, config);
        effect
    }

    pub fn supported<H: EffectsHost<W>>(host: &H) -> bool {
        host.animations_supported()
    }

    pub fn requested_chain_position(&self) -> i32 {
        REQUESTED_CHAIN_POSITION
    }

    /// Takes a new snapshot of the settings. Running animations keep the
    /// duration they were started with.
    pub fn reconfigure<H: EffectsHost<W>>(&mut self, host: &H, config: &Config) {
        let config = config.clone().sanitized();
        self.duration = (config.effective_duration() as f64 * host.animation_time_factor()).max(1.0);
        self.opacity = config.opacity;
        self.scale = config.scale;
        info!(
            "Reconfigured: duration={}ms opacity={} scale={}",
            self.duration, self.opacity, self.scale
        );
    }

    pub fn duration(&self) -> f64 {
        self.duration
    }

    pub fn on_window_restored<H: EffectsHost<W>>(&mut self, host: &H, window: W) {
        if host.has_active_fullscreen_effect() {
            debug!("Not animating {:?}: a full screen effect is active", window);
            return;
        }

        let mut timeline = Timeline::default();
        timeline.set_duration(self.duration);
        timeline.set_easing_curve(Easing::InCurve);
        if self.animations.insert(window, timeline).is_some() {
            debug!("Restarted animation for {:?}", window);
        } else {
            debug!("Started animation for {:?}", window);
        }
    }

    /// Abandons the animation of a window that went away again.
    pub fn on_window_suppressed(&mut self, window: W) {
        if self.animations.remove(&window).is_some() {
            debug!("Cancelled animation for {:?}", window);
        }
    }

    pub fn on_window_minimized(&mut self, window: W) {
        self.on_window_suppressed(window);
    }

    pub fn on_window_deleted(&mut self, window: W) {
        self.on_window_suppressed(window);
    }

    /// Moves every animation forward by `delta` milliseconds and drops the
    /// finished ones. Returns whether anything is still animating.
    pub fn advance(&mut self, delta: f64) -> bool {
        self.animations.retain(|window, timeline| {
            timeline.update(delta);
            if timeline.done() {
                debug!("Finished animation for {:?}", window);
            }
            !timeline.done()
        });
        self.is_active()
    }

    pub fn is_animating(&self, window: W) -> bool {
        self.animations.contains_key(&window)
    }

    pub fn is_active(&self) -> bool {
        !self.animations.is_empty()
    }

    pub fn progress(&self, window: W) -> Option<f64> {
        self.animations.get(&window).map(Timeline::value)
    }

    /// Blends `target` with the window's icon according to how far its
    /// animation has come. Returns `target` untouched when the window is not
    /// animating or either rectangle is degenerate.
    pub fn compute_transform(
        &self,
        window: W,
        geometry: Rect,
        icon: Rect,
        target: WindowPaintData,
    ) -> WindowPaintData {
        let Some(timeline) = self.animations.get(&window) else {
            return target;
        };
        if !icon.is_valid() || !geometry.is_valid() {
            return target;
        }

        let t = timeline.value();
        let opacity_progress = t;
        let scale_progress = interpolate(self.scale, 1.0, t);

        let from_scale = (icon.width as f64 / geometry.width as f64)
            .max(icon.height as f64 / geometry.height as f64);
        let offset = icon.position() - geometry.position();

        let mut data = WindowPaintData {
            x_scale: interpolate(from_scale, target.x_scale, scale_progress),
            y_scale: interpolate(from_scale, target.y_scale, scale_progress),
            x_translation: interpolate(offset.x, target.x_translation, scale_progress),
            y_translation: interpolate(offset.y, target.y_translation, scale_progress),
            opacity: target.opacity,
        };
        data.multiply_opacity(interpolate(self.opacity, 1.0, opacity_progress));
        data
    }

    pub fn pre_paint_screen(&mut self, data: &mut ScreenPrePaintData, delta: f64) {
        if self.advance(delta) {
            data.mask |= PaintMask::TRANSFORMED_WINDOWS;
        }
    }

    pub fn pre_paint_window(&self, window: W, data: &mut WindowPrePaintData) {
        if self.is_animating(window) {
            data.set_transformed();
        }
    }

    pub fn paint_window<H: EffectsHost<W>>(&self, host: &H, window: W, data: &mut WindowPaintData) {
        if !self.is_animating(window) {
            return;
        }
        let geometry = host.window_geometry(window);
        let icon = host.icon_geometry(window);
        *data = self.compute_transform(window, geometry, icon, *data);
    }

    pub fn post_paint_screen<H: EffectsHost<W>>(&self, host: &mut H) {
        if self.is_active() {
            host.add_repaint_full();
        }
    }
}
