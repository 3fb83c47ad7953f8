use crate::app::DealershipApp;

/// Render the bulk-delete filter fields and the button that applies them.
pub fn show(ui: &mut egui::Ui, app: &mut DealershipApp) {
    ui.horizontal(|ui| {
        ui.label("Remove where");

        ui.label("Year:");
        ui.add(
            egui::TextEdit::singleline(&mut app.filter.year)
                .hint_text("any")
                .desired_width(60.0),
        );
        ui.label("Make:");
        ui.add(
            egui::TextEdit::singleline(&mut app.filter.make)
                .hint_text("any")
                .desired_width(100.0),
        );
        ui.label("Model:");
        ui.add(
            egui::TextEdit::singleline(&mut app.filter.model)
                .hint_text("any")
                .desired_width(100.0),
        );
        ui.label("Color:");
        ui.add(
            egui::TextEdit::singleline(&mut app.filter.color)
                .hint_text("any")
                .desired_width(80.0),
        );

        ui.separator();

        let has_cars = app.inventory.as_ref().is_some_and(|inv| !inv.is_empty());
        if ui
            .add_enabled(has_cars, egui::Button::new("Remove Filtered"))
            .on_hover_text("Delete every car matching all filled-in fields")
            .clicked()
        {
            app.remove_filtered();
        }
        if ui.button("Clear").clicked() {
            app.filter.clear();
        }
    });
}
