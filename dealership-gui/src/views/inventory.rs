use crate::app::DealershipApp;
use crate::widgets;

/// Render the inventory window: toolbar, filter panel, and car table.
pub fn show(ctx: &egui::Context, app: &mut DealershipApp) {
    egui::TopBottomPanel::top("toolbar").show(ctx, |ui| {
        ui.add_space(4.0);
        show_toolbar(ui, app);
        ui.add_space(4.0);
    });

    if app.has_database() {
        egui::TopBottomPanel::bottom("filter_panel").show(ctx, |ui| {
            ui.add_space(4.0);
            widgets::filter_panel::show(ui, app);
            ui.add_space(4.0);
        });
    }

    egui::CentralPanel::default().show(ctx, |ui| {
        if app.has_database() {
            widgets::car_table::show(ui, app);
        } else {
            show_welcome(ui, app);
        }
    });
}

fn show_toolbar(ui: &mut egui::Ui, app: &mut DealershipApp) {
    ui.horizontal(|ui| {
        if ui.button("Open Database...").clicked() {
            open_database(app);
        }
        if ui.button("New Database...").clicked() {
            new_database(app);
        }

        ui.separator();

        let has_db = app.has_database();
        let has_selection = app.selected.is_some();
        if ui
            .add_enabled(has_db, egui::Button::new("Add Car"))
            .clicked()
        {
            app.start_add();
        }
        if ui
            .add_enabled(has_selection, egui::Button::new("Edit Car"))
            .clicked()
        {
            app.start_edit();
        }
        if ui
            .add_enabled(has_selection, egui::Button::new("Remove Car"))
            .clicked()
        {
            app.remove_selected();
        }
        if ui
            .add_enabled(has_db, egui::Button::new("Reload"))
            .clicked()
        {
            app.reload();
        }

        if let Some(path) = app.inventory.as_ref().and_then(|inv| inv.path()) {
            ui.with_layout(egui::Layout::right_to_left(egui::Align::Center), |ui| {
                ui.weak(path.display().to_string());
            });
        }
    });
}

fn show_welcome(ui: &mut egui::Ui, app: &mut DealershipApp) {
    ui.vertical_centered(|ui| {
        ui.add_space(ui.available_height() / 4.0);
        ui.heading("Car Dealership Inventory");
        ui.add_space(16.0);
        ui.label("Open a car database file to get started, or create a new one.");
        ui.add_space(16.0);
        ui.horizontal(|ui| {
            if ui.button("Open Database...").clicked() {
                open_database(app);
            }
            if ui.button("New Database...").clicked() {
                new_database(app);
            }
        });

        if !app.settings.database.recent.is_empty() {
            ui.add_space(24.0);
            ui.separator();
            ui.add_space(8.0);
            ui.label("Recent Databases:");
            ui.add_space(4.0);

            let mut open = None;
            let mut forget = None;
            for recent in &app.settings.database.recent {
                ui.horizontal(|ui| {
                    if ui.button(recent.path.display().to_string()).clicked() {
                        open = Some(recent.path.clone());
                    }
                    if ui.small_button("x").on_hover_text("Remove from list").clicked() {
                        forget = Some(recent.path.clone());
                    }
                });
            }

            if let Some(path) = forget {
                app.forget_recent(&path);
            }
            if let Some(path) = open {
                app.open_database(path);
            }
        }
    });
}

fn file_dialog(title: &str) -> rfd::FileDialog {
    rfd::FileDialog::new()
        .set_title(title)
        .add_filter("SQL & SQLite files", &["db", "sqlite", "sql"])
}

fn open_database(app: &mut DealershipApp) {
    if let Some(path) = file_dialog("Open Car Data File").pick_file() {
        app.open_database(path);
    }
}

fn new_database(app: &mut DealershipApp) {
    if let Some(path) = file_dialog("Create Car Data File")
        .set_file_name("CarDealership.db")
        .save_file()
    {
        app.open_or_create(path);
    }
}
