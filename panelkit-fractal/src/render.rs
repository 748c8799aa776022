//! Mandelbrot rendering onto an ST7735 panel
//!
//! The backend is chosen once per render; the per-pixel loop is then
//! monomorphized for it. Two output paths exist:
//!
//! - [`RenderMode::Streamed`]: one streaming session over the viewport, one
//!   pixel pushed per computed sample
//! - [`RenderMode::RowBuffered`]: each row is computed into a buffer and
//!   blitted with a single image write

use panelkit_display::config::MAX_DIMENSION;
use panelkit_display::{Point, Rect, St7735};
use panelkit_hal::LcdTransport;

use crate::accel::{AcceleratedBackend, ComplexUnit, SoftComplexUnit};
use crate::complex::{ComplexBackend, FixedBackend, FloatBackend};
use crate::error::FractalError;
use crate::mandelbrot::{escape_iterations_from, Viewport, MAX_ITERATIONS};
use crate::palette::color_for;

/// Arithmetic used for the escape-time loop
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum Backend {
    Float,
    Fixed,
    /// Packed complex unit held by the [`Renderer`]
    Accelerated,
}

/// How computed pixels reach the panel
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum RenderMode {
    #[default]
    Streamed,
    RowBuffered,
}

/// Free-running counter used to time the escape loop (e.g. `mcycle`)
pub trait TickSource {
    fn ticks(&mut self) -> u32;
}

impl<T: TickSource + ?Sized> TickSource for &mut T {
    fn ticks(&mut self) -> u32 {
        (**self).ticks()
    }
}

/// Tick source for renders that are not timed
#[derive(Debug, Clone, Copy, Default)]
pub struct NoTicks;

impl TickSource for NoTicks {
    fn ticks(&mut self) -> u32 {
        0
    }
}

/// Per-render counters
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct RenderStats {
    pub pixels: u32,
    /// Pixels that reached the iteration cap
    pub in_set: u32,
    /// Ticks spent inside the escape loop only
    pub compute_ticks: u64,
}

impl RenderStats {
    fn record(&mut self, iterations: u8, ticks: u32) {
        self.pixels += 1;
        if iterations == MAX_ITERATIONS {
            self.in_set += 1;
        }
        self.compute_ticks += ticks as u64;
    }
}

/// Render settings plus the packed unit used by [`Backend::Accelerated`]
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Renderer<U: ComplexUnit = SoftComplexUnit> {
    pub viewport: Viewport,
    pub mode: RenderMode,
    unit: U,
}

impl Renderer {
    /// Renderer using the software model of the packed unit
    pub fn new(viewport: Viewport, mode: RenderMode) -> Self {
        Self::with_unit(viewport, mode, SoftComplexUnit)
    }
}

impl Default for Renderer {
    fn default() -> Self {
        Self::new(Viewport::BENCHMARK, RenderMode::Streamed)
    }
}

impl<U: ComplexUnit> Renderer<U> {
    pub fn with_unit(viewport: Viewport, mode: RenderMode, unit: U) -> Self {
        Self {
            viewport,
            mode,
            unit,
        }
    }

    pub fn into_unit(self) -> U {
        self.unit
    }

    /// Clear the panel and draw the viewport with `backend`
    pub fn render<T, K>(
        &mut self,
        lcd: &mut St7735<T>,
        backend: Backend,
        ticks: &mut K,
    ) -> Result<RenderStats, FractalError>
    where
        T: LcdTransport,
        K: TickSource,
    {
        let (vp, mode) = (self.viewport, self.mode);
        vp.validate()?;
        if mode == RenderMode::RowBuffered && vp.width > MAX_DIMENSION {
            return Err(FractalError::BufferSize);
        }

        let stats = match backend {
            Backend::Float => render_with(lcd, &vp, mode, &mut FloatBackend, ticks)?,
            Backend::Fixed => render_with(lcd, &vp, mode, &mut FixedBackend, ticks)?,
            Backend::Accelerated => {
                let mut accel = AcceleratedBackend::new(&mut self.unit);
                render_with(lcd, &vp, mode, &mut accel, ticks)?
            }
        };

        #[cfg(feature = "defmt")]
        defmt::info!(
            "fractal: {} backend, {} px, {} in set, {} compute ticks",
            backend,
            stats.pixels,
            stats.in_set,
            stats.compute_ticks
        );

        Ok(stats)
    }
}

fn render_with<T, B, K>(
    lcd: &mut St7735<T>,
    vp: &Viewport,
    mode: RenderMode,
    backend: &mut B,
    ticks: &mut K,
) -> Result<RenderStats, FractalError>
where
    T: LcdTransport,
    B: ComplexBackend,
    K: TickSource,
{
    lcd.clear()?;
    let mut stats = RenderStats::default();

    match mode {
        RenderMode::Streamed => {
            lcd.stream_begin(Rect::new(Point::new(0, 0), vp.width, vp.height))?;
            let pushed = stream_rows(lcd, vp, backend, ticks, &mut stats);
            // Close the session even when a push failed
            let closed = lcd.stream_end();
            pushed?;
            closed?;
        }
        RenderMode::RowBuffered => {
            let mut row_buf = [0u8; MAX_DIMENSION as usize * 2];
            let row_bytes = &mut row_buf[..vp.width as usize * 2];
            for row in 0..vp.height {
                for (col, px) in row_bytes.chunks_exact_mut(2).enumerate() {
                    let n = sample(backend, vp, col as u16, row, ticks, &mut stats);
                    px.copy_from_slice(&color_for(n).to_le_bytes());
                }
                lcd.draw_image_rgb565(Rect::new(Point::new(0, row), vp.width, 1), row_bytes)?;
            }
        }
    }
    Ok(stats)
}

fn stream_rows<T, B, K>(
    lcd: &mut St7735<T>,
    vp: &Viewport,
    backend: &mut B,
    ticks: &mut K,
    stats: &mut RenderStats,
) -> Result<(), FractalError>
where
    T: LcdTransport,
    B: ComplexBackend,
    K: TickSource,
{
    for row in 0..vp.height {
        for col in 0..vp.width {
            let n = sample(backend, vp, col, row, ticks, stats);
            lcd.stream_push(&color_for(n).to_le_bytes())?;
        }
    }
    Ok(())
}

fn sample<B: ComplexBackend, K: TickSource>(
    backend: &mut B,
    vp: &Viewport,
    col: u16,
    row: u16,
    ticks: &mut K,
    stats: &mut RenderStats,
) -> u8 {
    let (re, im) = vp.point(col, row);
    let c = backend.from_plane(re, im);
    let start = ticks.ticks();
    let n = escape_iterations_from(backend, c, vp.start);
    stats.record(n, ticks.ticks().wrapping_sub(start));
    n
}

/// Render the benchmark viewport with `backend`, streaming, untimed
pub fn run_fractal<T: LcdTransport>(
    lcd: &mut St7735<T>,
    backend: Backend,
) -> Result<RenderStats, FractalError> {
    Renderer::default().render(lcd, backend, &mut NoTicks)
}
