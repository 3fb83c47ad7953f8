use std::path::Path;

use dealership_core::{Car, CarForm, FilterCriteria};
use dealership_db::{RecordStore, SqliteStore};

use crate::bulk::{self, BulkDeleteOutcome};
use crate::error::InventoryError;

/// A record store plus the collection of cars currently loaded from it.
///
/// Each action runs to completion and leaves `cars()` consistent with what
/// the store holds.
#[derive(Debug)]
pub struct Inventory<S = SqliteStore> {
    store: S,
    cars: Vec<Car>,
}

impl Inventory<SqliteStore> {
    /// Open an existing database file and load its cars.
    pub fn open(path: &Path) -> Result<Self, InventoryError> {
        let store = SqliteStore::open(path).map_err(InventoryError::StoreUnavailable)?;
        Self::with_loaded(store)
    }

    /// Create a new, empty database file.
    pub fn create(path: &Path) -> Result<Self, InventoryError> {
        let store = SqliteStore::create(path).map_err(InventoryError::StoreUnavailable)?;
        Ok(Self::new(store))
    }

    /// The database file backing this inventory, if any.
    pub fn path(&self) -> Option<&Path> {
        self.store.path()
    }
}

impl<S: RecordStore> Inventory<S> {
    /// Wrap a store without loading anything yet.
    pub fn new(store: S) -> Self {
        Self {
            store,
            cars: Vec::new(),
        }
    }

    /// Wrap a store and load its cars.
    pub fn with_loaded(store: S) -> Result<Self, InventoryError> {
        let mut inventory = Self::new(store);
        inventory.load_all()?;
        Ok(inventory)
    }

    /// Replace the collection with a fresh load from the store.
    ///
    /// On failure the previous collection is kept.
    pub fn load_all(&mut self) -> Result<&[Car], InventoryError> {
        self.cars = self
            .store
            .load_all()
            .map_err(InventoryError::StoreUnavailable)?;
        log::info!("Loaded {} car(s)", self.cars.len());
        Ok(&self.cars)
    }

    pub fn cars(&self) -> &[Car] {
        &self.cars
    }

    pub fn get(&self, id: i64) -> Option<&Car> {
        self.cars.iter().find(|car| car.id == id)
    }

    pub fn len(&self) -> usize {
        self.cars.len()
    }

    pub fn is_empty(&self) -> bool {
        self.cars.is_empty()
    }

    pub fn store(&self) -> &S {
        &self.store
    }

    /// Validate `form` and insert a new, unsold car.
    pub fn add(&mut self, form: &CarForm) -> Result<&Car, InventoryError> {
        let details = form.validate()?;
        let car = self.store.insert(&details)?;
        log::info!("Added car {} ({})", car.id, car.display_name());
        self.cars.push(car);
        Ok(&self.cars[self.cars.len() - 1])
    }

    /// Validate `form` and overwrite car `id`, including its sold flag.
    ///
    /// If the store no longer has the car it is dropped from the collection
    /// and [`InventoryError::NotFound`] is returned.
    pub fn edit(&mut self, id: i64, form: &CarForm, sold: bool) -> Result<&Car, InventoryError> {
        let details = form.validate()?;
        if let Err(e) = self.store.update(id, &details, sold) {
            let err = InventoryError::from(e);
            if matches!(err, InventoryError::NotFound(_)) {
                self.cars.retain(|car| car.id != id);
            }
            return Err(err);
        }
        log::info!("Updated car {}", id);

        let index = match self.cars.iter().position(|car| car.id == id) {
            Some(index) => {
                self.cars[index].apply(details, sold);
                index
            }
            None => {
                let mut car = Car::from_details(id, details);
                car.sold = sold;
                self.cars.push(car);
                self.cars.len() - 1
            }
        };
        Ok(&self.cars[index])
    }

    /// Delete car `id`. Deleting a car that is already gone succeeds.
    pub fn delete(&mut self, id: i64) -> Result<(), InventoryError> {
        self.store.delete(id)?;
        self.cars.retain(|car| car.id != id);
        log::info!("Removed car {}", id);
        Ok(())
    }

    /// Delete every loaded car matching `filter`.
    ///
    /// See [`bulk::delete_matching`] for the ordering and failure rules.
    pub fn delete_filtered(
        &mut self,
        filter: &FilterCriteria,
    ) -> Result<BulkDeleteOutcome, InventoryError> {
        bulk::delete_matching(&mut self.store, &mut self.cars, filter)
    }
}
