//! car-dealership GUI
//!
//! Desktop front end for browsing and editing a car inventory database.

use dealership_gui::DealershipApp;

fn main() -> eframe::Result {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();

    let options = eframe::NativeOptions {
        viewport: egui::ViewportBuilder::default()
            .with_title("Car Dealership")
            .with_inner_size([1000.0, 640.0])
            .with_min_inner_size([640.0, 400.0]),
        ..Default::default()
    };

    eframe::run_native(
        "Car Dealership",
        options,
        Box::new(|cc| Ok(Box::new(DealershipApp::new(cc)))),
    )
}
