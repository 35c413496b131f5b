//! Crosstile renders a scrolling, tiled pattern of crosses onto a 2D drawing surface.
//!
//! A cross is five equal squares in a plus shape. The [`Engine`] sweeps a scan cursor across
//! the surface, drawing one cross per step and pausing between steps, then starts the next
//! sweep a little lower. Stopping is cooperative: a sweep that has begun always finishes.
//!
//! # Layers
//!
//! 1. **Geometry**: [`Point`], [`Square`], [`Cross`] are transient value objects.
//! 2. **Surface**: the [`Surface`] trait is the canvas-style drawing capability the shapes
//!    render onto. [`RasterSurface`] rasterizes on the CPU; [`RecordingSurface`] logs calls.
//! 3. **Engine**: [`Engine`] owns the live parameters and drives the scan/draw/pace loop on a
//!    background worker, pacing itself through a [`Pacer`].
//!
//! The key design constraints:
//!
//! - **No unsafe**: `unsafe` is forbidden in this crate.
//! - **Injected collaborators**: the engine never reaches for a global surface or clock.
//! - **No parameter validation in the core**: degenerate values give degenerate output.
#![forbid(unsafe_code)]
#![warn(missing_docs)]

mod config;
mod engine;
mod foundation;
mod shape;
mod surface;

pub use config::{EngineConfig, SurfaceSize};
pub use engine::pacer::{NoPacer, Pacer, ThreadPacer};
pub use engine::scan::{PassReport, ScanHost, next_scan_offset, run_pass};
pub use engine::state::{DEFAULT_SIDE_LENGTH, DEFAULT_STEP_DELAY_MS};
pub use engine::{Engine, EngineBuilder};
pub use foundation::core::{FrameRGBA, Point};
pub use foundation::error::{CrosstileError, CrosstileResult};
pub use shape::cross::Cross;
pub use shape::palette::{Color, PALETTE, Palette};
pub use shape::square::Square;
pub use surface::raster::RasterSurface;
pub use surface::recording::{DrawCall, FilledShape, RecordingSurface};
pub use surface::{Paint, Surface};
