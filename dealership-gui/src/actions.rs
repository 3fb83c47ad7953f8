//! User actions. Each one runs to completion against the inventory and
//! reports any failure through a notice.

use std::path::PathBuf;

use dealership_lib::settings::save_settings_to;
use dealership_lib::{BulkDeleteOutcome, Inventory, InventoryError};

use crate::app::DealershipApp;
use crate::state::{CarDialog, DialogMode, Notice};

impl DealershipApp {
    /// Open an existing database file and load its cars.
    pub fn open_database(&mut self, path: PathBuf) {
        match Inventory::open(&path) {
            Ok(inventory) => {
                log::info!("Opened {} ({} cars)", path.display(), inventory.len());
                self.switch_to(inventory, path);
            }
            Err(e) => {
                log::warn!("Failed to open {}: {}", path.display(), e);
                self.report(&e);
            }
        }
    }

    /// Create a new, empty database file and open it.
    pub fn create_database(&mut self, path: PathBuf) {
        match Inventory::create(&path) {
            Ok(inventory) => self.switch_to(inventory, path),
            Err(e) => self.report(&e),
        }
    }

    /// Open `path` if it exists, otherwise create it. Save dialogs may
    /// return a file that is already there.
    pub fn open_or_create(&mut self, path: PathBuf) {
        if path.exists() {
            self.open_database(path);
        } else {
            self.create_database(path);
        }
    }

    /// Forget a recent database that the user removed from the list.
    pub fn forget_recent(&mut self, path: &std::path::Path) {
        self.settings.forget(path);
        self.save_settings();
    }

    /// Reload every car from the open database.
    pub fn reload(&mut self) {
        let Some(inventory) = self.inventory.as_mut() else {
            return;
        };
        if let Err(e) = inventory.load_all() {
            self.report(&e);
        }
        self.drop_stale_selection();
    }

    pub fn start_add(&mut self) {
        if self.has_database() {
            self.dialog = Some(CarDialog::add());
        }
    }

    /// Open the edit dialog for the selected car.
    pub fn start_edit(&mut self) {
        let car = self
            .selected
            .and_then(|id| self.inventory.as_ref()?.get(id));
        if let Some(car) = car {
            self.dialog = Some(CarDialog::edit(car));
        }
    }

    /// Write the dialog's contents. Invalid input keeps the dialog open so
    /// the user can correct it.
    pub fn submit_dialog(&mut self, dialog: CarDialog) {
        let Some(inventory) = self.inventory.as_mut() else {
            return;
        };
        let result = match dialog.mode {
            DialogMode::Add => inventory.add(&dialog.form).map(|car| car.id),
            DialogMode::Edit { id } => inventory.edit(id, &dialog.form, dialog.sold).map(|car| car.id),
        };

        match result {
            Ok(id) => self.selected = Some(id),
            Err(e) => {
                self.report(&e);
                if matches!(e, InventoryError::ValidationFailed(_)) {
                    self.dialog = Some(dialog);
                }
                self.drop_stale_selection();
            }
        }
    }

    /// Delete the selected car.
    pub fn remove_selected(&mut self) {
        let (Some(id), Some(inventory)) = (self.selected, self.inventory.as_mut()) else {
            return;
        };
        match inventory.delete(id) {
            Ok(()) => self.selected = None,
            Err(e) => self.report(&e),
        }
    }

    /// Delete every loaded car matching the filter fields.
    pub fn remove_filtered(&mut self) {
        let Some(inventory) = self.inventory.as_mut() else {
            return;
        };
        match inventory.delete_filtered(&self.filter.criteria()) {
            Ok(BulkDeleteOutcome::NoFilterSpecified) => {
                self.notice = Some(Notice::info(
                    "No Filters Applied",
                    "Please enter at least one filter criteria.",
                ));
            }
            Ok(BulkDeleteOutcome::Deleted(removed)) => {
                log::info!("Removed {} car(s) by filter", removed.len());
                if !removed.is_empty() {
                    self.filter.clear();
                }
            }
            Err(e) => self.report(&e),
        }
        self.drop_stale_selection();
    }

    fn switch_to(&mut self, inventory: Inventory, path: PathBuf) {
        self.inventory = Some(inventory);
        self.selected = None;
        self.dialog = None;
        self.filter.clear();
        self.settings.remember(&path);
        self.save_settings();
    }

    fn report(&mut self, err: &InventoryError) {
        self.notice = Some(Notice::from(err));
    }

    fn drop_stale_selection(&mut self) {
        if let Some(id) = self.selected
            && self.inventory.as_ref().and_then(|inv| inv.get(id)).is_none()
        {
            self.selected = None;
        }
    }

    fn save_settings(&self) {
        if let Err(e) = save_settings_to(&self.settings_path, &self.settings) {
            log::warn!("Failed to save settings: {}", e);
        }
    }
}

#[cfg(test)]
mod tests {
    use dealership_lib::settings::AppSettings;

    use super::*;
    use crate::state::NoticeKind;

    struct Fixture {
        _dir: tempfile::TempDir,
        app: DealershipApp,
        db: PathBuf,
    }

    fn fixture() -> Fixture {
        let dir = tempfile::tempdir().unwrap();
        let db = dir.path().join("CarDealership.db");
        let settings_path = dir.path().join("settings.toml");
        drop(Inventory::create(&db).unwrap());

        let mut app = DealershipApp::with_settings(AppSettings::default(), settings_path);
        app.open_database(db.clone());
        Fixture { _dir: dir, app, db }
    }

    fn fill(dialog: &mut CarDialog, year: &str, make: &str) {
        dialog.form.year = year.to_string();
        dialog.form.make = make.to_string();
        dialog.form.model = "Model".to_string();
        dialog.form.color = "Grey".to_string();
        dialog.form.engine = "V8".to_string();
        dialog.form.transmission = "Automatic".to_string();
        dialog.form.price = "30000".to_string();
    }

    fn add(app: &mut DealershipApp, year: &str, make: &str) {
        app.start_add();
        let mut dialog = app.dialog.take().unwrap();
        fill(&mut dialog, year, make);
        app.submit_dialog(dialog);
    }

    fn cars(app: &DealershipApp) -> usize {
        app.inventory.as_ref().unwrap().len()
    }

    #[test]
    fn open_remembers_database() {
        let f = fixture();
        assert!(f.app.has_database());
        assert_eq!(f.app.settings.database.current, Some(f.db.clone()));

        let saved = dealership_lib::settings::load_settings_from(&f.app.settings_path);
        assert_eq!(saved.database.current, Some(f.db));
    }

    #[test]
    fn open_missing_file_shows_error() {
        let dir = tempfile::tempdir().unwrap();
        let mut app =
            DealershipApp::with_settings(AppSettings::default(), dir.path().join("s.toml"));
        app.open_database(dir.path().join("missing.db"));

        assert!(!app.has_database());
        let notice = app.notice.unwrap();
        assert_eq!(notice.kind, NoticeKind::Error);
        assert_eq!(notice.header, "Failed to Load Cars from Database");
    }

    #[test]
    fn open_or_create_makes_new_file() {
        let dir = tempfile::tempdir().unwrap();
        let db = dir.path().join("lot.db");
        let mut app =
            DealershipApp::with_settings(AppSettings::default(), dir.path().join("s.toml"));
        app.open_or_create(db.clone());

        assert!(db.exists());
        assert!(app.has_database());
        assert_eq!(app.settings.database.recent[0].path, db);
    }

    #[test]
    fn add_requires_database() {
        let dir = tempfile::tempdir().unwrap();
        let mut app =
            DealershipApp::with_settings(AppSettings::default(), dir.path().join("s.toml"));
        app.start_add();
        assert!(app.dialog.is_none());
    }

    #[test]
    fn add_selects_new_car() {
        let mut f = fixture();
        add(&mut f.app, "2020", "Toyota");
        assert_eq!(cars(&f.app), 1);
        assert!(f.app.selected.is_some());
        assert!(f.app.notice.is_none());
    }

    #[test]
    fn invalid_edit_keeps_dialog_open() {
        let mut f = fixture();
        add(&mut f.app, "2020", "Toyota");

        f.app.start_edit();
        let mut dialog = f.app.dialog.take().unwrap();
        dialog.form.make.clear();
        f.app.submit_dialog(dialog);

        assert!(f.app.dialog.is_some());
        assert_eq!(f.app.notice.as_ref().unwrap().header, "Incomplete Fields");
        let id = f.app.selected.unwrap();
        assert_eq!(f.app.inventory.as_ref().unwrap().get(id).unwrap().make, "Toyota");
    }

    #[test]
    fn edit_sets_sold() {
        let mut f = fixture();
        add(&mut f.app, "2020", "Toyota");

        f.app.start_edit();
        let mut dialog = f.app.dialog.take().unwrap();
        dialog.sold = true;
        f.app.submit_dialog(dialog);

        let id = f.app.selected.unwrap();
        assert!(f.app.inventory.as_ref().unwrap().get(id).unwrap().sold);
    }

    #[test]
    fn remove_selected_clears_selection() {
        let mut f = fixture();
        add(&mut f.app, "2020", "Toyota");
        f.app.remove_selected();
        assert_eq!(cars(&f.app), 0);
        assert!(f.app.selected.is_none());
    }

    #[test]
    fn remove_filtered_without_criteria_informs() {
        let mut f = fixture();
        add(&mut f.app, "2020", "Toyota");
        f.app.remove_filtered();

        assert_eq!(cars(&f.app), 1);
        assert_eq!(f.app.notice.as_ref().unwrap().kind, NoticeKind::Info);
    }

    #[test]
    fn remove_filtered_clears_fields_after_match() {
        let mut f = fixture();
        add(&mut f.app, "2019", "Honda");
        add(&mut f.app, "2020", "Toyota");

        f.app.filter.year = "2020".to_string();
        f.app.filter.make = "toyota".to_string();
        f.app.remove_filtered();

        assert_eq!(cars(&f.app), 1);
        assert_eq!(f.app.inventory.as_ref().unwrap().cars()[0].make, "Honda");
        assert_eq!(f.app.filter, Default::default());
        // The selected Toyota was removed
        assert!(f.app.selected.is_none());
    }
}
