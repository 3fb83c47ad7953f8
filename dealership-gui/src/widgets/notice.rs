use crate::state::{Notice, NoticeKind};

/// Render a notice window. Returns true once the user dismisses it.
pub fn show(ctx: &egui::Context, notice: &Notice) -> bool {
    let mut dismissed = false;

    egui::Window::new(notice.title())
        .collapsible(false)
        .resizable(false)
        .anchor(egui::Align2::CENTER_CENTER, [0.0, 0.0])
        .show(ctx, |ui| {
            let header = egui::RichText::new(&notice.header).strong();
            match notice.kind {
                NoticeKind::Error => ui.label(header.color(ui.visuals().error_fg_color)),
                NoticeKind::Info => ui.label(header),
            };
            ui.add_space(4.0);
            ui.label(&notice.message);
            ui.add_space(8.0);

            ui.vertical_centered(|ui| {
                if ui.button("OK").clicked() || ui.input(|i| i.key_pressed(egui::Key::Enter)) {
                    dismissed = true;
                }
            });
        });

    dismissed
}
