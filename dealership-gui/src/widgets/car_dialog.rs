use dealership_lib::Field;

use crate::input;
use crate::state::{CarDialog, DialogAction, DialogMode};

/// Render the add/edit dialog and report what the user did with it.
pub fn show(ctx: &egui::Context, dialog: &mut CarDialog) -> DialogAction {
    let mut action = DialogAction::None;
    let mut open = true;

    egui::Window::new(dialog.title())
        .open(&mut open)
        .collapsible(false)
        .resizable(false)
        .anchor(egui::Align2::CENTER_CENTER, [0.0, 0.0])
        .show(ctx, |ui| {
            ui.strong(dialog.header());
            ui.add_space(6.0);

            egui::Grid::new("car_dialog_fields")
                .num_columns(2)
                .spacing([12.0, 6.0])
                .show(ui, |ui| {
                    for field in Field::ALL {
                        ui.label(format!("{}:", field.label()));
                        let text = dialog.form.field_mut(field);
                        match field {
                            Field::Year => input::year_field(ui, text),
                            Field::Price => input::price_field(ui, text),
                            _ => ui.text_edit_singleline(text),
                        };
                        ui.end_row();
                    }

                    if matches!(dialog.mode, DialogMode::Edit { .. }) {
                        ui.label("Sold:");
                        ui.checkbox(&mut dialog.sold, "");
                        ui.end_row();
                    }
                });

            ui.add_space(8.0);
            ui.horizontal(|ui| {
                if ui.button(dialog.confirm_label()).clicked() {
                    action = DialogAction::Confirm;
                }
                if ui.button("Cancel").clicked() {
                    action = DialogAction::Cancel;
                }
            });

            if ui.input(|i| i.key_pressed(egui::Key::Escape)) {
                action = DialogAction::Cancel;
            }
        });

    if !open {
        action = DialogAction::Cancel;
    }
    action
}
