/// Terminal front end: event loop, resize/close handling and presentation
use crossterm::{
    cursor,
    event::{self, Event, KeyCode, KeyEvent, KeyEventKind, KeyModifiers},
    execute, queue,
    style::{Color as TermColor, Print, ResetColor, SetBackgroundColor, SetForegroundColor},
    terminal,
};
use softrast_core::{FramebufferError, Mesh, MeshError, Renderer, Spin, TriangleColors};
use std::io::{self, stdout, Write};
use std::time::{Duration, Instant};
use thiserror::Error;

pub mod renderer;

pub use renderer::{BlockPresenter, Viewport};

/// Front-end errors
#[derive(Error, Debug)]
pub enum AppError {
    #[error("Terminal error: {0}")]
    Io(#[from] io::Error),

    #[error("Mesh error: {0}")]
    Mesh(#[from] MeshError),

    #[error("Framebuffer error: {0}")]
    Framebuffer(#[from] FramebufferError),
}

/// Startup settings
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct AppConfig {
    /// Seed for the per-triangle colors
    pub seed: u64,
    /// Starting angle (radians)
    pub angle: f32,
    /// Spin speed (radians per second)
    pub speed: f32,
    /// Frame rate cap
    pub fps: u32,
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            seed: 0,
            angle: Spin::DEFAULT_ANGLE,
            speed: Spin::DEFAULT_SPEED,
            fps: 30,
        }
    }
}

/// Seconds between successive ticks
#[derive(Debug)]
pub struct Clock {
    last: Instant,
}

impl Clock {
    pub fn new() -> Self {
        Self { last: Instant::now() }
    }

    pub fn tick(&mut self) -> f32 {
        let now = Instant::now();
        let elapsed = now - self.last;
        self.last = now;
        elapsed.as_secs_f32()
    }
}

impl Default for Clock {
    fn default() -> Self {
        Self::new()
    }
}

/// Pixel size of a terminal of `columns` x `rows` cells
pub fn pixel_size(columns: u16, rows: u16) -> (u32, u32) {
    (columns as u32, rows as u32 * 2)
}

/// Application state for one terminal session
pub struct TerminalApp {
    mesh: Mesh,
    colors: TriangleColors,
    spin: Spin,
    renderer: Renderer,
    presenter: BlockPresenter,
    columns: u16,
    rows: u16,
    running: bool,
    clock: Clock,
    frame_time: Duration,
    last_fps_sample: Instant,
    frame_count: u32,
    fps: f32,
}

impl TerminalApp {
    pub fn new(mesh: Mesh, config: AppConfig) -> Result<Self, AppError> {
        let (columns, rows) = terminal::size()?;
        Self::with_size(mesh, config, columns, rows)
    }

    /// Build the app for a known terminal size without touching the terminal
    pub fn with_size(mesh: Mesh, config: AppConfig, columns: u16, rows: u16) -> Result<Self, AppError> {
        let (width, height) = pixel_size(columns, rows);
        let colors = TriangleColors::seeded(&mesh, config.seed);

        Ok(Self {
            mesh,
            colors,
            spin: Spin::new(config.angle, config.speed),
            renderer: Renderer::new(width, height)?,
            presenter: BlockPresenter::new(),
            columns,
            rows,
            running: true,
            clock: Clock::new(),
            frame_time: Duration::from_secs(1) / config.fps.max(1),
            last_fps_sample: Instant::now(),
            frame_count: 0,
            fps: 0.0,
        })
    }

    pub fn run(&mut self) -> Result<(), AppError> {
        terminal::enable_raw_mode()?;
        execute!(stdout(), terminal::EnterAlternateScreen, cursor::Hide)?;

        let result = self.main_loop();

        // Cleanup
        terminal::disable_raw_mode()?;
        execute!(stdout(), terminal::LeaveAlternateScreen, cursor::Show)?;

        result
    }

    fn main_loop(&mut self) -> Result<(), AppError> {
        log::info!(
            "Rendering {} triangles at {}x{} pixels",
            self.mesh.triangle_count(),
            self.renderer.framebuffer().width(),
            self.renderer.framebuffer().height()
        );
        self.clock.tick();

        while self.running {
            let frame_start = Instant::now();
            let dt = self.clock.tick();

            self.drain_events()?;
            self.update(dt);
            self.render_frame();
            self.present()?;

            // Frame timing
            self.frame_count += 1;
            let elapsed = frame_start.elapsed();
            if elapsed < self.frame_time {
                std::thread::sleep(self.frame_time - elapsed);
            }

            let now = Instant::now();
            if (now - self.last_fps_sample).as_secs() >= 1 {
                self.fps = self.frame_count as f32 / (now - self.last_fps_sample).as_secs_f32();
                self.frame_count = 0;
                self.last_fps_sample = now;
            }
        }

        Ok(())
    }

    /// Handle every pending event without blocking
    fn drain_events(&mut self) -> Result<(), AppError> {
        while event::poll(Duration::ZERO)? {
            let event = event::read()?;
            self.handle_event(event)?;
        }
        Ok(())
    }

    pub fn handle_event(&mut self, event: Event) -> Result<(), AppError> {
        match event {
            Event::Key(KeyEvent {
                code,
                modifiers,
                kind: KeyEventKind::Press,
                ..
            }) => match code {
                KeyCode::Char('q') | KeyCode::Esc => self.request_close(),
                KeyCode::Char('c') if modifiers.contains(KeyModifiers::CONTROL) => self.request_close(),
                _ => {}
            },
            Event::Resize(columns, rows) => {
                let (width, height) = pixel_size(columns, rows);
                self.renderer.resize(width, height)?;
                self.columns = columns;
                self.rows = rows;
            }
            _ => {}
        }
        Ok(())
    }

    fn request_close(&mut self) {
        log::debug!("Close requested");
        self.running = false;
    }

    pub fn update(&mut self, dt: f32) {
        self.spin.advance(dt);
    }

    /// Clear and rasterize the mesh at the current spin
    pub fn render_frame(&mut self) {
        let transform = self.spin.transform();
        self.renderer.render_frame(&self.mesh, &self.colors, &transform);
    }

    fn present(&mut self) -> io::Result<()> {
        let mut stdout = stdout();
        self.presenter.present(
            &mut stdout,
            self.renderer.framebuffer(),
            Viewport::from_cells(self.columns, self.rows),
        )?;

        // Draw UI overlay
        queue!(
            stdout,
            cursor::MoveTo(0, 0),
            SetForegroundColor(TermColor::Yellow),
            SetBackgroundColor(TermColor::Black),
            Print(format!(
                "softrast | FPS: {:.1} | {} triangles | Q/Esc=Quit",
                self.fps,
                self.mesh.triangle_count()
            )),
            ResetColor
        )?;

        stdout.flush()
    }

    pub fn is_running(&self) -> bool {
        self.running
    }

    pub fn spin(&self) -> &Spin {
        &self.spin
    }

    pub fn renderer(&self) -> &Renderer {
        &self.renderer
    }
}
