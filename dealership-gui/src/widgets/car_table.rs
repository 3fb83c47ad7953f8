use egui_extras::{Column, TableBuilder};

use dealership_lib::Car;

use crate::app::DealershipApp;

/// Render the car table. Clicking a row selects it; double-clicking opens
/// the edit dialog.
pub fn show(ui: &mut egui::Ui, app: &mut DealershipApp) {
    let Some(inventory) = app.inventory.as_ref() else {
        return;
    };

    // Pre-extract row data to avoid borrowing issues
    let row_data: Vec<RowData> = inventory.cars().iter().map(RowData::from).collect();
    let sold = row_data.iter().filter(|r| r.sold).count();

    ui.label(format!(
        "{} cars | {} available | {} sold",
        row_data.len(),
        row_data.len() - sold,
        sold
    ));
    ui.add_space(2.0);

    if row_data.is_empty() {
        ui.centered_and_justified(|ui| {
            ui.label("No cars yet. Use Add Car to enter one.");
        });
        return;
    }

    let available_height = ui.available_height();
    let text_height = egui::TextStyle::Body
        .resolve(ui.style())
        .size
        .max(ui.spacing().interact_size.y);

    let mut clicked = None;
    let mut double_clicked = None;

    egui::ScrollArea::horizontal().show(ui, |ui| {
        let table = TableBuilder::new(ui)
            .striped(true)
            .resizable(true)
            .cell_layout(egui::Layout::left_to_right(egui::Align::Center))
            .column(Column::initial(60.0).at_least(40.0)) // Year
            .column(Column::initial(120.0).at_least(60.0)) // Make
            .column(Column::initial(140.0).at_least(60.0)) // Model
            .column(Column::initial(90.0).at_least(50.0)) // Color
            .column(Column::initial(110.0).at_least(50.0)) // Engine
            .column(Column::initial(110.0).at_least(50.0)) // Transmission
            .column(Column::initial(100.0).at_least(60.0)) // Price
            .column(Column::remainder().at_least(40.0)) // Sold
            .min_scrolled_height(0.0)
            .max_scroll_height(available_height);

        table
            .header(20.0, |mut header| {
                for title in [
                    "Year",
                    "Make",
                    "Model",
                    "Color",
                    "Engine",
                    "Transmission",
                    "Price",
                    "Sold",
                ] {
                    header.col(|ui| {
                        ui.strong(title);
                    });
                }
            })
            .body(|body| {
                body.rows(text_height, row_data.len(), |mut row| {
                    let data = &row_data[row.index()];
                    row.set_selected(app.selected == Some(data.id));

                    for text in data.cells() {
                        row.col(|ui| {
                            let response =
                                ui.add(egui::Label::new(text).sense(egui::Sense::click()));
                            if response.double_clicked() {
                                double_clicked = Some(data.id);
                            } else if response.clicked() {
                                clicked = Some(data.id);
                            }
                        });
                    }
                });
            });
    });

    if let Some(id) = clicked {
        app.selected = Some(id);
    }
    if let Some(id) = double_clicked {
        app.selected = Some(id);
        app.start_edit();
    }
}

struct RowData {
    id: i64,
    year: String,
    make: String,
    model: String,
    color: String,
    engine: String,
    transmission: String,
    price: String,
    sold: bool,
}

impl RowData {
    fn cells(&self) -> [&str; 8] {
        [
            &self.year,
            &self.make,
            &self.model,
            &self.color,
            &self.engine,
            &self.transmission,
            &self.price,
            if self.sold { "Yes" } else { "No" },
        ]
    }
}

impl From<&Car> for RowData {
    fn from(car: &Car) -> Self {
        Self {
            id: car.id,
            year: car.year.to_string(),
            make: car.make.clone(),
            model: car.model.clone(),
            color: car.color.clone(),
            engine: car.engine.clone(),
            transmission: car.transmission.clone(),
            price: format!("{:.2}", car.price),
            sold: car.sold,
        }
    }
}
