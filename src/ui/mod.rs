use crate::interaction::InfoPanel;

/// Requests raised by the overlay during one frame.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
pub struct UiActions {
    pub close_info_panel: bool,
    pub toggle_auto_rotate: bool,
    pub toggle_floating: bool,
}

pub struct UiState {
    show_hint: bool,
}

impl UiState {
    pub fn new() -> Self {
        Self { show_hint: true }
    }

    pub fn draw(
        &mut self,
        ctx: &egui::Context,
        panel: &InfoPanel,
        auto_rotate: bool,
        floating: bool,
    ) -> UiActions {
        let mut actions = UiActions::default();

        if panel.is_visible() {
            egui::Area::new(egui::Id::new("info_panel"))
                .anchor(egui::Align2::RIGHT_TOP, egui::vec2(-16.0, 16.0))
                .show(ctx, |ui| {
                    egui::Frame::popup(ui.style()).show(ui, |ui| {
                        ui.set_max_width(300.0);
                        ui.horizontal(|ui| {
                            ui.heading(panel.title());
                            ui.with_layout(
                                egui::Layout::right_to_left(egui::Align::Center),
                                |ui| {
                                    if ui.button("×").clicked() {
                                        actions.close_info_panel = true;
                                    }
                                },
                            );
                        });
                        ui.separator();
                        ui.label(panel.description());
                    });
                });
        }

        egui::Area::new(egui::Id::new("viewer_controls"))
            .anchor(egui::Align2::LEFT_BOTTOM, egui::vec2(16.0, -16.0))
            .show(ctx, |ui| {
                egui::Frame::popup(ui.style()).show(ui, |ui| {
                    ui.horizontal(|ui| {
                        if ui.button(auto_rotate_label(auto_rotate)).clicked() {
                            actions.toggle_auto_rotate = true;
                        }
                        if ui.button(floating_label(floating)).clicked() {
                            actions.toggle_floating = true;
                        }
                        let hint_label = if self.show_hint { "Hide help" } else { "Help" };
                        if ui.small_button(hint_label).clicked() {
                            self.show_hint = !self.show_hint;
                        }
                    });
                    if self.show_hint {
                        ui.label("Drag to orbit, scroll to zoom, click furniture for details.");
                        ui.label("R toggles auto rotate, F toggles floating, Esc quits.");
                    }
                });
            });

        actions
    }
}

pub fn auto_rotate_label(enabled: bool) -> &'static str {
    if enabled {
        "Auto Rotate: ON"
    } else {
        "Auto Rotate: OFF"
    }
}

pub fn floating_label(enabled: bool) -> &'static str {
    if enabled {
        "Floating: ON"
    } else {
        "Floating: OFF"
    }
}
