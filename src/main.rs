use anyhow::Result;
use log::{info, warn};
use std::collections::HashMap;
use std::time::{Duration, Instant};
use unminimize::effect::{ScreenPrePaintData, WindowPrePaintData};
use unminimize::gfx::math::Rect;
use unminimize::{Config, EffectsHost, UnminimizeEffect, WindowPaintData};

struct SimWindow {
    geometry: Rect,
    icon: Rect,
}

/// Stands in for a compositor: a fixed set of windows and a repaint flag.
struct SimulatedHost {
    windows: HashMap<u32, SimWindow>,
    repaint_requested: bool,
}

impl SimulatedHost {
    fn new() -> Self {
        let mut windows = HashMap::new();
        windows.insert(
            1,
            SimWindow {
                geometry: Rect::new(100, 80, 800, 600),
                icon: Rect::new(40, 1040, 32, 32),
            },
        );
        windows.insert(
            2,
            SimWindow {
                geometry: Rect::new(960, 120, 640, 480),
                icon: Rect::new(80, 1040, 32, 32),
            },
        );
        // No taskbar entry, painted untransformed.
        windows.insert(
            3,
            SimWindow {
                geometry: Rect::new(300, 300, 400, 300),
                icon: Rect::default(),
            },
        );
        Self {
            windows,
            repaint_requested: false,
        }
    }
}

impl EffectsHost<u32> for SimulatedHost {
    fn has_active_fullscreen_effect(&self) -> bool {
        false
    }

    fn animations_supported(&self) -> bool {
        true
    }

    fn window_geometry(&self, window: u32) -> Rect {
        self.windows.get(&window).map(|w| w.geometry).unwrap_or_default()
    }

    fn icon_geometry(&self, window: u32) -> Rect {
        self.windows.get(&window).map(|w| w.icon).unwrap_or_default()
    }

    fn add_repaint_full(&mut self) {
        self.repaint_requested = true;
    }
}

fn main() -> Result<()> {
    env_logger::init();
    println!("Starting unminimize demo...");

    let config = Config::load().unwrap_or_else(|err| {
        warn!("Falling back to default config: {:#}", err);
        Config::default()
    });

    let mut host = SimulatedHost::new();
    if !UnminimizeEffect::<u32>::supported(&host) {
        println!("Animations are not supported by this host");
        return Ok(());
    }

    let mut effect = UnminimizeEffect::new(&host, &config);
    info!("Effect chain position: {}", effect.requested_chain_position());

    let mut ids: Vec<u32> = host.windows.keys().copied().collect();
    ids.sort_unstable();
    for &id in &ids {
        effect.on_window_restored(&host, id);
    }

    let mut last_frame = Instant::now();
    let mut frame = 0u32;

    // Frame loop
    loop {
        let now = Instant::now();
        let dt = now.duration_since(last_frame).as_secs_f64() * 1000.0;
        last_frame = now;

        let mut screen = ScreenPrePaintData::default();
        effect.pre_paint_screen(&mut screen, dt);

        for &id in &ids {
            let mut pre = WindowPrePaintData::default();
            effect.pre_paint_window(id, &mut pre);
            if !pre.transformed {
                continue;
            }

            let mut data = WindowPaintData::default();
            effect.paint_window(&host, id, &mut data);
            info!(
                "frame {} window {}: scale=({:.3}, {:.3}) translation=({:.1}, {:.1}) opacity={:.3}",
                frame,
                id,
                data.x_scale,
                data.y_scale,
                data.x_translation,
                data.y_translation,
                data.opacity
            );
        }

        host.repaint_requested = false;
        effect.post_paint_screen(&mut host);
        if !host.repaint_requested {
            break;
        }

        frame += 1;
        // Sleep briefly to cap framerate
        std::thread::sleep(Duration::from_millis(16));
    }

    println!("All windows restored after {} frames", frame + 1);
    Ok(())
}
