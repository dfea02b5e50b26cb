mod egui_host;
mod input;
mod timing;

pub use egui_host::EguiFrameOutput;

use crate::animation::FloatAnimator;
use crate::config::ViewerConfig;
use crate::interaction::SelectionController;
use crate::render::pick::pixel_to_ndc;
use crate::render::{OrbitCamera, RenderContext, ScenePainter};
use crate::scene::serialization::{load_catalog_from_file, save_catalog_to_file};
use crate::scene::{bedroom_catalog, build_bedroom, BedroomScene, ItemDescriptor, LightingRig};
use crate::ui::{UiActions, UiState};
use egui_host::EguiHost;
use glam::{Vec2, Vec3};
use input::{key_action, InputAction, PointerState};
use timing::FrameTiming;

use std::path::PathBuf;
use std::sync::Arc;
use std::time::{Duration, Instant};
use winit::application::ApplicationHandler;
use winit::dpi::PhysicalSize;
use winit::event::{ElementState, MouseButton, MouseScrollDelta, WindowEvent};
use winit::event_loop::{ActiveEventLoop, ControlFlow, EventLoop};
use winit::keyboard::{KeyCode, PhysicalKey};
use winit::window::{Window, WindowAttributes, WindowId};

/// Pixel scroll distance treated as one wheel notch.
const PIXELS_PER_WHEEL_STEP: f32 = 50.0;

pub struct App {
    config: ViewerConfig,
    window: Option<Arc<Window>>,
    render: Option<RenderContext>,
    egui: Option<EguiHost>,
    scene: BedroomScene,
    lighting: LightingRig,
    selection: SelectionController,
    animator: FloatAnimator,
    camera: OrbitCamera,
    painter: ScenePainter,
    ui: UiState,
    pointer: PointerState,
    timing: FrameTiming,
    target_frame_duration: Duration,
    next_frame_time: Instant,
    close_requested: bool,
}

impl App {
    fn new(config: ViewerConfig) -> Self {
        let catalog = load_catalog(&config);
        let mut scene = build_bedroom(&catalog, config.background);
        let lighting = LightingRig::bedroom();
        let selection = SelectionController::new();
        let animator = FloatAnimator::new(config.floating, &mut scene.group);
        let aspect = config.window.width.max(1) as f32 / config.window.height.max(1) as f32;
        let camera = OrbitCamera::new(
            Vec3::from(config.camera.position),
            Vec3::from(config.camera.target),
            aspect,
            config.camera.orbit_settings(),
        );
        let timing = FrameTiming::new(config.window.title.clone());

        Self {
            config,
            window: None,
            render: None,
            egui: None,
            scene,
            lighting,
            selection,
            animator,
            camera,
            painter: ScenePainter::new(),
            ui: UiState::new(),
            pointer: PointerState::default(),
            timing,
            target_frame_duration: Duration::from_millis(16),
            next_frame_time: Instant::now(),
            close_requested: false,
        }
    }

    fn handle_resize(&mut self, new_size: PhysicalSize<u32>) {
        if let Some(render) = &mut self.render {
            render.resize(new_size);
        }
        self.camera.set_aspect(new_size.width, new_size.height);
    }

    fn update_target_frame_duration(&mut self, window: &Window) {
        let mut target = Duration::from_millis(16);
        if let Some(monitor) = window.current_monitor() {
            if let Some(millihz) = monitor.refresh_rate_millihertz() {
                let hz = millihz as f32 / 1000.0;
                if hz > 1.0 {
                    target = Duration::from_secs_f32(1.0 / hz);
                }
            }
        }
        self.target_frame_duration = target;
        self.next_frame_time = Instant::now() + self.target_frame_duration;
    }

    fn pointer_ndc(&self, position: Vec2) -> Option<Vec2> {
        let size = self.window.as_ref()?.inner_size();
        if size.width == 0 || size.height == 0 {
            return None;
        }
        Some(pixel_to_ndc(
            position.x,
            position.y,
            size.width as f32,
            size.height as f32,
        ))
    }

    fn egui_wants_pointer(&self) -> bool {
        self.egui.as_ref().is_some_and(EguiHost::wants_pointer)
    }

    fn handle_action(&mut self, action: InputAction) {
        match action {
            InputAction::ToggleAutoRotate => self.toggle_auto_rotate(),
            InputAction::ToggleFloating => self.toggle_floating(),
            InputAction::None => {}
        }
    }

    fn toggle_auto_rotate(&mut self) {
        let enabled = !self.camera.auto_rotate();
        self.camera.set_auto_rotate(enabled);
        log::info!("Auto rotate {}", if enabled { "enabled" } else { "disabled" });
    }

    fn toggle_floating(&mut self) {
        let enabled = !self.animator.floating();
        self.animator.set_floating(enabled, &mut self.scene.group);
        log::info!("Floating {}", if enabled { "enabled" } else { "disabled" });
    }

    fn apply_ui_actions(&mut self, actions: UiActions) {
        if actions.close_info_panel {
            self.selection.close_info_panel(&mut self.scene.group);
        }
        if actions.toggle_auto_rotate {
            self.toggle_auto_rotate();
        }
        if actions.toggle_floating {
            self.toggle_floating();
        }
    }

    fn handle_cursor_moved(&mut self, position: Vec2) {
        let drag = self.pointer.moved(position);
        if self.pointer.is_pressed() {
            if let Some(delta) = drag {
                let height = self
                    .window
                    .as_ref()
                    .map(|window| window.inner_size().height as f32)
                    .unwrap_or(1.0);
                self.camera.rotate_by_pixels(delta, height);
            }
            return;
        }
        if self.egui_wants_pointer() {
            return;
        }
        if let Some(ndc) = self.pointer_ndc(position) {
            self.selection
                .pointer_moved(ndc, &self.camera, &mut self.scene.group);
        }
    }

    fn handle_left_button(&mut self, state: ElementState) {
        match state {
            ElementState::Pressed => {
                if self.egui_wants_pointer() {
                    return;
                }
                self.pointer.press();
                if self.camera.auto_rotate() {
                    self.camera.set_auto_rotate(false);
                    log::debug!("Auto rotate stopped by user interaction");
                }
            }
            ElementState::Released => {
                let Some(position) = self.pointer.release() else {
                    return;
                };
                if let Some(ndc) = self.pointer_ndc(position) {
                    let now = self.timing.session_time(Instant::now());
                    self.selection
                        .pointer_clicked(ndc, &self.camera, &mut self.scene.group, now);
                }
            }
        }
    }

    fn render(&mut self) {
        let now = Instant::now();
        self.timing.update(self.window.as_deref(), now);
        let elapsed = self.timing.elapsed();

        self.selection.tick(elapsed, &mut self.scene.group);
        self.camera.update(self.timing.frame_dt);
        self.animator
            .update(elapsed.as_secs_f32(), &mut self.scene.group, &self.selection);

        let Some(window) = self.window.clone() else {
            return;
        };
        let Some(egui) = self.egui.as_mut() else {
            return;
        };

        let painter = &mut self.painter;
        let ui = &mut self.ui;
        let scene = &self.scene;
        let camera = &self.camera;
        let lighting = &self.lighting;
        let selection = &self.selection;
        let floating = self.animator.floating();
        let mut actions = UiActions::default();

        let frame = egui.run_ui(&window, |ctx| {
            let mesh = painter.paint(scene, camera, lighting, ctx.screen_rect());
            ctx.layer_painter(egui::LayerId::background())
                .add(egui::Shape::mesh(mesh));

            actions = ui.draw(ctx, selection.panel(), camera.auto_rotate(), floating);

            if selection.pointer_cursor() {
                ctx.set_cursor_icon(egui::CursorIcon::PointingHand);
            }
        });
        self.apply_ui_actions(actions);

        if let Some(render) = &mut self.render {
            let render_start = Instant::now();
            if let Err(err) = render.render(&frame) {
                log::warn!("Frame dropped: {err}");
            }
            self.timing
                .set_render_ms(render_start.elapsed().as_secs_f32() * 1000.0);
        }
    }
}

/// The configured catalog file, or the built-in bedroom set.
fn load_catalog(config: &ViewerConfig) -> Vec<ItemDescriptor> {
    let Some(path) = config.catalog_path.as_deref() else {
        return bedroom_catalog();
    };
    match load_catalog_from_file(path) {
        Ok(catalog) => {
            log::info!("Loaded {} items from {}", catalog.len(), path.display());
            catalog
        }
        Err(err) => {
            log::warn!(
                "Failed to load catalog {}: {err}; using built-in bedroom",
                path.display()
            );
            bedroom_catalog()
        }
    }
}

impl ApplicationHandler for App {
    fn resumed(&mut self, event_loop: &ActiveEventLoop) {
        if self.window.is_some() {
            return;
        }

        let window_attrs = WindowAttributes::default()
            .with_title(self.config.window.title.clone())
            .with_inner_size(PhysicalSize::new(
                self.config.window.width,
                self.config.window.height,
            ))
            .with_resizable(true);

        let window = match event_loop.create_window(window_attrs) {
            Ok(window) => Arc::new(window),
            Err(err) => {
                log::error!("Failed to create window: {err}");
                event_loop.exit();
                return;
            }
        };

        match RenderContext::new(window.clone(), self.scene.background) {
            Ok(render) => self.render = Some(render),
            Err(err) => {
                log::error!("Failed to initialize renderer: {err}");
                event_loop.exit();
                return;
            }
        }

        let size = window.inner_size();
        self.camera.set_aspect(size.width, size.height);
        self.egui = Some(EguiHost::new(&window));
        self.update_target_frame_duration(&window);
        self.window = Some(window);
    }

    fn window_event(
        &mut self,
        event_loop: &ActiveEventLoop,
        _window_id: WindowId,
        event: WindowEvent,
    ) {
        let mut consumed_by_ui = false;
        if let (Some(egui), Some(window)) = (self.egui.as_mut(), self.window.as_ref()) {
            consumed_by_ui = egui.on_window_event(window, &event);
        }

        match event {
            WindowEvent::CloseRequested => {
                self.close_requested = true;
                event_loop.exit();
            }
            WindowEvent::KeyboardInput { event, .. } => {
                if event.physical_key == PhysicalKey::Code(KeyCode::Escape) {
                    self.close_requested = true;
                    event_loop.exit();
                    return;
                }
                if event.state == ElementState::Pressed && !event.repeat && !consumed_by_ui {
                    self.handle_action(key_action(event.physical_key));
                }
            }
            WindowEvent::Resized(new_size) => {
                self.handle_resize(new_size);
                if let Some(window) = self.window.clone() {
                    self.update_target_frame_duration(&window);
                }
            }
            WindowEvent::Moved(_) => {
                if let Some(window) = self.window.clone() {
                    self.update_target_frame_duration(&window);
                }
            }
            WindowEvent::CursorMoved { position, .. } => {
                self.handle_cursor_moved(Vec2::new(position.x as f32, position.y as f32));
            }
            WindowEvent::CursorLeft { .. } => {
                self.pointer.left();
            }
            WindowEvent::MouseInput {
                state,
                button: MouseButton::Left,
                ..
            } => {
                self.handle_left_button(state);
            }
            WindowEvent::MouseWheel { delta, .. } => {
                if consumed_by_ui || self.egui_wants_pointer() {
                    return;
                }
                let steps = match delta {
                    MouseScrollDelta::LineDelta(_, y) => y,
                    MouseScrollDelta::PixelDelta(pos) => pos.y as f32 / PIXELS_PER_WHEEL_STEP,
                };
                self.camera.dolly(steps);
            }
            WindowEvent::RedrawRequested => {
                self.render();
            }
            _ => {}
        }
    }

    fn about_to_wait(&mut self, event_loop: &ActiveEventLoop) {
        if self.close_requested {
            return;
        }
        let now = Instant::now();
        if now >= self.next_frame_time {
            if let Some(window) = &self.window {
                window.request_redraw();
            }
            self.next_frame_time = now + self.target_frame_duration;
        }
        event_loop.set_control_flow(ControlFlow::WaitUntil(self.next_frame_time));
    }
}

/// Target of `--export-catalog <path>`, if given.
fn export_catalog_path(args: &[String]) -> Option<PathBuf> {
    let i = args.iter().position(|arg| arg == "--export-catalog")?;
    args.get(i + 1).map(PathBuf::from)
}

pub fn run() -> Result<(), winit::error::EventLoopError> {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info"))
        .format_timestamp_millis()
        .init();

    let args: Vec<String> = std::env::args().collect();
    if let Some(path) = export_catalog_path(&args) {
        match save_catalog_to_file(&bedroom_catalog(), &path) {
            Ok(()) => log::info!("Wrote built-in catalog to {}", path.display()),
            Err(err) => log::error!("Failed to write catalog {}: {err}", path.display()),
        }
        return Ok(());
    }

    log::info!("3D Bedroom Viewer");
    log::info!("   Drag to orbit, scroll to zoom, click furniture for details");
    log::info!("   Press ESC or close window to exit");

    let config = ViewerConfig::load();
    let event_loop = EventLoop::new()?;
    event_loop.set_control_flow(ControlFlow::Wait);

    let mut app = App::new(config);
    event_loop.run_app(&mut app)?;

    log::info!("Goodbye!");
    Ok(())
}
