use std::path::PathBuf;

use dealership_lib::Inventory;
use dealership_lib::settings::{self, AppSettings};

use crate::state::{CarDialog, FilterFields, Notice};
use crate::views;
use crate::widgets;

/// Main application state.
pub struct DealershipApp {
    /// The open database and its loaded cars. `None` until a file is opened.
    pub inventory: Option<Inventory>,

    /// Persisted settings (current and recent databases).
    pub settings: AppSettings,

    /// Where `settings` is saved.
    pub settings_path: PathBuf,

    /// Id of the selected row in the car table.
    pub selected: Option<i64>,

    /// Bulk-delete filter text.
    pub filter: FilterFields,

    /// Open add/edit dialog, if any.
    pub dialog: Option<CarDialog>,

    /// Modal message waiting to be dismissed.
    pub notice: Option<Notice>,
}

impl DealershipApp {
    pub fn new(_cc: &eframe::CreationContext<'_>) -> Self {
        let path = settings::settings_path();
        let mut app = Self::with_settings(settings::load_settings_from(&path), path);
        if let Some(current) = app.settings.database.current.clone()
            && current.exists()
        {
            app.open_database(current);
        }
        app
    }

    /// Build an app with no database open.
    pub fn with_settings(settings: AppSettings, settings_path: PathBuf) -> Self {
        Self {
            inventory: None,
            settings,
            settings_path,
            selected: None,
            filter: FilterFields::default(),
            dialog: None,
            notice: None,
        }
    }

    pub fn has_database(&self) -> bool {
        self.inventory.is_some()
    }
}

impl eframe::App for DealershipApp {
    fn update(&mut self, ctx: &egui::Context, _frame: &mut eframe::Frame) {
        views::inventory::show(ctx, self);

        if let Some(mut dialog) = self.dialog.take() {
            match widgets::car_dialog::show(ctx, &mut dialog) {
                crate::state::DialogAction::Confirm => self.submit_dialog(dialog),
                crate::state::DialogAction::Cancel => {}
                crate::state::DialogAction::None => self.dialog = Some(dialog),
            }
        }

        if let Some(notice) = &self.notice
            && widgets::notice::show(ctx, notice)
        {
            self.notice = None;
        }
    }
}
