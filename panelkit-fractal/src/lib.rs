//! Fixed-point engine and Mandelbrot renderer for panelkit displays
//!
//! This crate provides:
//! - [`Fixed`], saturating Q12 arithmetic
//! - [`ComplexBackend`] with float, fixed-point and packed-unit backends
//! - [`escape_iterations`] and [`escape_grid`], the escape-time engine
//! - [`run_fractal`] / [`Renderer`], drawing onto an [`St7735`] panel with
//!   per-render statistics
//! - [`plot_bifurcation`], a logistic-map diagram
//!
//! # Example
//!
//! ```ignore
//! let stats = run_fractal(&mut lcd, Backend::Fixed)?;
//! writeln!(console.writer(&mut lcd), "{} px in set", stats.in_set)?;
//! ```
//!
//! [`St7735`]: panelkit_display::St7735

#![no_std]
#![deny(unsafe_code)]

pub mod accel;
pub mod complex;
pub mod config;
pub mod error;
pub mod fixed;
pub mod logistic;
pub mod mandelbrot;
pub mod palette;
pub mod render;

// Re-export key types
pub use accel::{AcceleratedBackend, ComplexUnit, PackedComplex, SoftComplexUnit};
pub use complex::{ComplexBackend, FixedBackend, FixedComplex, FloatBackend};
pub use config::ViewportConfig;
pub use error::FractalError;
pub use fixed::Fixed;
pub use logistic::{plot_bifurcation, Bifurcation};
pub use mandelbrot::{
    escape_grid, escape_iterations, escape_iterations_from, Start, Viewport, MAX_ITERATIONS,
};
pub use palette::PALETTE;
pub use render::{run_fractal, Backend, NoTicks, RenderMode, RenderStats, Renderer, TickSource};
