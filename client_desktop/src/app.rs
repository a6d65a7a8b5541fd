//! Windowed application: owns the engine and drives it from winit events

use crate::audio::SoundBank;
use crate::input::{map_key, KeyboardState};
use crate::renderer::Renderer;
use anyhow::Context;
use game_core::{FixedTimestep, GameEngine, Params};
use std::sync::Arc;
use std::time::{Duration, Instant};
use tracing::{debug, error, info};
use winit::application::ApplicationHandler;
use winit::dpi::LogicalSize;
use winit::event::{ElementState, KeyEvent, WindowEvent};
use winit::event_loop::{ActiveEventLoop, ControlFlow};
use winit::keyboard::PhysicalKey;
use winit::window::{Window, WindowId};

pub const WINDOW_TITLE: &str = "Ping Pong - Rust Version";

pub struct App {
    engine: GameEngine,
    sounds: SoundBank,
    keyboard: KeyboardState,
    timestep: FixedTimestep,

    window: Option<Arc<Window>>,
    renderer: Option<Renderer>,

    last_frame: Option<Instant>,
    next_frame: Instant,
    frame_duration: Duration,

    /// Fatal error raised inside the event loop, returned from `main`
    error: Option<anyhow::Error>,
}

impl App {
    pub fn new(engine: GameEngine, sounds: SoundBank) -> Self {
        Self {
            engine,
            sounds,
            keyboard: KeyboardState::new(),
            timestep: FixedTimestep::default(),
            window: None,
            renderer: None,
            last_frame: None,
            next_frame: Instant::now(),
            frame_duration: Duration::from_secs_f32(Params::FIXED_DT),
            error: None,
        }
    }

    pub fn take_error(&mut self) -> Option<anyhow::Error> {
        self.error.take()
    }

    pub fn engine(&self) -> &GameEngine {
        &self.engine
    }

    /// Run every tick due after `dt` seconds of wall time; returns the tick count
    pub fn advance(&mut self, dt: f32) -> u32 {
        let ticks = self.timestep.advance(dt);
        let held = self.keyboard.held();

        for _ in 0..ticks {
            self.engine.update(held);
            self.sounds.play_events(self.engine.events());
        }
        ticks
    }

    fn create_window(&mut self, event_loop: &ActiveEventLoop) -> anyhow::Result<()> {
        let arena = *self.engine.arena();
        let attrs = Window::default_attributes()
            .with_title(WINDOW_TITLE)
            .with_inner_size(LogicalSize::new(arena.width, arena.height))
            .with_resizable(false);

        let window = Arc::new(
            event_loop
                .create_window(attrs)
                .context("failed to create window")?,
        );
        let renderer = Renderer::new(window.clone(), arena.width, arena.height)?;

        info!(title = WINDOW_TITLE, "window created");
        self.window = Some(window);
        self.renderer = Some(renderer);
        Ok(())
    }

    fn handle_key(&mut self, event: KeyEvent) {
        let PhysicalKey::Code(code) = event.physical_key else {
            return;
        };
        let Some(key) = map_key(code) else {
            return;
        };

        match event.state {
            ElementState::Pressed => {
                self.keyboard.key_down(key);
                if !event.repeat {
                    self.engine.process_input(key);
                }
            }
            ElementState::Released => self.keyboard.key_up(key),
        }
    }

    fn redraw(&mut self, event_loop: &ActiveEventLoop) {
        let now = Instant::now();
        let dt = self
            .last_frame
            .map(|last| now.duration_since(last).as_secs_f32())
            .unwrap_or(0.0);
        self.last_frame = Some(now);

        self.advance(dt);

        let Some(renderer) = self.renderer.as_mut() else {
            return;
        };
        if let Err(err) = renderer.draw(&self.engine) {
            self.fail(event_loop, err);
        }
    }

    fn fail(&mut self, event_loop: &ActiveEventLoop, err: anyhow::Error) {
        error!(error = %err, "fatal error, shutting down");
        self.error = Some(err);
        event_loop.exit();
    }
}

impl ApplicationHandler for App {
    fn resumed(&mut self, event_loop: &ActiveEventLoop) {
        if self.window.is_some() {
            return;
        }

        if let Err(err) = self.create_window(event_loop) {
            self.fail(event_loop, err);
        }
    }

    fn window_event(&mut self, event_loop: &ActiveEventLoop, _id: WindowId, event: WindowEvent) {
        match event {
            WindowEvent::CloseRequested => {
                debug!("close requested");
                self.engine.request_quit();
                event_loop.exit();
            }
            WindowEvent::KeyboardInput { event, .. } => self.handle_key(event),
            WindowEvent::Resized(size) => {
                if let Some(renderer) = self.renderer.as_mut() {
                    renderer.resize(size.width, size.height);
                }
            }
            WindowEvent::RedrawRequested => self.redraw(event_loop),
            _ => {}
        }
    }

    fn about_to_wait(&mut self, event_loop: &ActiveEventLoop) {
        if self.engine.should_quit() {
            info!("quit requested");
            event_loop.exit();
            return;
        }

        let now = Instant::now();
        if now >= self.next_frame {
            if let Some(window) = &self.window {
                window.request_redraw();
            }
            self.next_frame = now + self.frame_duration;
        }
        event_loop.set_control_flow(ControlFlow::WaitUntil(self.next_frame));
    }
}
