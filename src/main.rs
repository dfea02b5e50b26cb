//! 3D Bedroom Viewer
//!
//! An orbitable furniture showroom:
//! - winit 0.30 window with an egui overlay presented through wgpu
//! - furniture meshes projected and shaded on the CPU into an egui mesh
//! - hover highlight, click selection and an info panel per item

mod animation;
mod app;
mod config;
mod interaction;
mod render;
mod scene;
mod ui;

fn main() {
    if let Err(err) = app::run() {
        log::error!("Event loop error: {err}");
        std::process::exit(1);
    }
}
