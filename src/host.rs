use crate::gfx::math::Rect;

/// What the effect needs from the compositor that drives it.
///
/// `W` is the compositor's window handle. The effect only stores it as a
/// lookup key, so it has to be cheap to copy and hashable.
pub trait EffectsHost<W> {
    /// Another effect currently owns the whole screen.
    fn has_active_fullscreen_effect(&self) -> bool;

    /// Whether the rendering backend can draw animated transforms at all.
    fn animations_supported(&self) -> bool;

    /// Global multiplier applied to every animation duration.
    fn animation_time_factor(&self) -> f64 {
        1.0
    }

    fn window_geometry(&self, window: W) -> Rect;

    /// Where the minimized window is represented, e.g. its taskbar entry.
    fn icon_geometry(&self, window: W) -> Rect;

    fn add_repaint_full(&mut self);
}
