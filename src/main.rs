use anyhow::Context;
use clap::Parser;
use std::sync::Arc;
use winit::{
    application::ApplicationHandler,
    event::*,
    event_loop::{ActiveEventLoop, EventLoop},
    keyboard::{KeyCode, PhysicalKey},
    window::{Window, WindowId},
};

use flycam::cli::Cli;
use flycam::core::{Clock, TimeSource, WinitInput};
use flycam::scene::CubeGrid;
use flycam::{load_config, CameraConfig, CameraController, CaptureMode};

// === Constants ===

const STATS_INTERVAL: f64 = 1.0;

// === Application ===

struct App {
    window: Option<Arc<Window>>,
    input: WinitInput,
    camera: CameraController,
    clock: Clock,
    grid: CubeGrid,
    size: (u32, u32),
    frame_count: u32,
    stats_since: f64,
}

impl App {
    fn new(config: CameraConfig, size: (u32, u32)) -> Self {
        Self {
            window: None,
            input: WinitInput::new(),
            camera: CameraController::new(config),
            clock: Clock::new(),
            grid: CubeGrid::new(),
            size,
            frame_count: 0,
            stats_since: 0.0,
        }
    }

    /// Track the drawable size and keep the projection's aspect in step with it
    fn resize(&mut self, width: u32, height: u32) {
        if width > 0 && height > 0 {
            self.size = (width, height);
            self.camera.set_aspect(width as f32 / height as f32);
        }
    }

    fn frame(&mut self) {
        let now = self.clock.now();
        self.camera.update(&mut self.input, now);

        let (width, height) = self.size;
        let lines = self.grid.project(&self.camera, width as f32, height as f32);

        if let Some(window) = &self.window {
            let p = self.camera.position();
            let mode = match self.camera.capture_mode() {
                CaptureMode::Captured => "captured",
                CaptureMode::Free => "free (Tab to capture)",
            };
            window.set_title(&format!(
                "flycam [{:.2}, {:.2}, {:.2}] fovy {:.1}\u{b0} - {}",
                p.x,
                p.y,
                p.z,
                self.camera.fovy().to_degrees(),
                mode
            ));
        }

        self.frame_count += 1;
        let elapsed = now - self.stats_since;
        if elapsed >= STATS_INTERVAL {
            log::info!(
                "{:.1} fps, {} of {} edges visible",
                self.frame_count as f64 / elapsed,
                lines.len(),
                self.grid.len() * 12
            );
            self.frame_count = 0;
            self.stats_since = now;
        }
    }
}

impl ApplicationHandler for App {
    fn resumed(&mut self, event_loop: &ActiveEventLoop) {
        if self.window.is_some() {
            return;
        }

        let window = match event_loop.create_window(
            Window::default_attributes()
                .with_title("flycam")
                .with_inner_size(winit::dpi::LogicalSize::new(self.size.0, self.size.1)),
        ) {
            Ok(w) => Arc::new(w),
            Err(e) => {
                log::error!("Failed to create window: {}", e);
                event_loop.exit();
                return;
            }
        };

        let size = window.inner_size();
        self.resize(size.width, size.height);
        self.input.set_window(window.clone());
        self.camera.sync_cursor(&mut self.input);
        self.window = Some(window);
    }

    fn window_event(
        &mut self,
        event_loop: &ActiveEventLoop,
        _window_id: WindowId,
        event: WindowEvent,
    ) {
        match event {
            WindowEvent::CloseRequested
            | WindowEvent::KeyboardInput {
                event:
                    KeyEvent {
                        state: ElementState::Pressed,
                        physical_key: PhysicalKey::Code(KeyCode::Escape),
                        ..
                    },
                ..
            } => event_loop.exit(),
            WindowEvent::Resized(size) => self.resize(size.width, size.height),
            WindowEvent::RedrawRequested => self.frame(),
            other => self.input.process_event(&other),
        }
    }

    fn device_event(
        &mut self,
        _event_loop: &ActiveEventLoop,
        _device_id: DeviceId,
        event: DeviceEvent,
    ) {
        self.input.process_device_event(&event);
    }

    fn about_to_wait(&mut self, _event_loop: &ActiveEventLoop) {
        if let Some(window) = &self.window {
            window.request_redraw();
        }
    }
}

fn main() -> anyhow::Result<()> {
    env_logger::init();
    let cli = Cli::parse();

    let mut config = match &cli.config {
        Some(path) => load_config(path)?,
        None => CameraConfig::default(),
    };
    config.aspect = cli.width as f32 / cli.height.max(1) as f32;
    if cli.free {
        config.initial_mode = CaptureMode::Free;
    }

    if cli.dump_config {
        println!("{}", config.to_json()?);
        return Ok(());
    }

    let event_loop = EventLoop::new().context("failed to create event loop")?;
    let mut app = App::new(config, (cli.width, cli.height));

    log::info!("flycam - WASD move, Space/Shift up/down, Q/E roll, wheel zoom, Tab release cursor, Escape quit");
    event_loop.run_app(&mut app)?;

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_resize_updates_aspect() {
        let mut app = App::new(CameraConfig::with_perspective(1.0, 2.0), (1280, 768));
        app.resize(800, 800);
        assert_eq!(app.size, (800, 800));
        assert_eq!(app.camera.projection_params().aspect, 1.0);
        assert_eq!(app.camera.projection_revision(), 1);
    }

    #[test]
    fn test_zero_size_is_ignored() {
        let mut app = App::new(CameraConfig::with_perspective(1.0, 2.0), (1280, 768));
        app.resize(0, 600);
        assert_eq!(app.size, (1280, 768));
        assert_eq!(app.camera.projection_params().aspect, 2.0);
    }
}
