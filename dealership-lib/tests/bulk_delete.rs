use dealership_lib::*;

fn details(year: u32, make: &str, model: &str, color: &str) -> CarDetails {
    CarDetails {
        year,
        make: make.to_string(),
        model: model.to_string(),
        color: color.to_string(),
        engine: "V6".to_string(),
        transmission: "Automatic".to_string(),
        price: 24000.0,
    }
}

/// Seed an in-memory inventory and return it with the assigned ids.
fn seeded(rows: &[(u32, &str, &str, &str)]) -> (Inventory, Vec<i64>) {
    let mut store = SqliteStore::in_memory().unwrap();
    let ids = rows
        .iter()
        .map(|&(year, make, model, color)| {
            store.insert(&details(year, make, model, color)).unwrap().id
        })
        .collect();
    (Inventory::with_loaded(store).unwrap(), ids)
}

fn ids(cars: &[Car]) -> Vec<i64> {
    cars.iter().map(|c| c.id).collect()
}

#[test]
fn year_filter_deletes_only_matching() {
    let (mut inv, id) = seeded(&[(2019, "Honda", "Civic", "Red"), (2020, "Toyota", "Camry", "Blue")]);

    let outcome = inv
        .delete_filtered(&FilterCriteria::default().year("2020"))
        .unwrap();

    assert_eq!(outcome.count(), 1);
    assert!(matches!(outcome, BulkDeleteOutcome::Deleted(ref cars) if ids(cars) == vec![id[1]]));
    assert_eq!(ids(inv.load_all().unwrap()), vec![id[0]]);
}

#[test]
fn year_and_make_filter() {
    let (mut inv, id) = seeded(&[
        (2020, "Toyota", "Camry", "Blue"),
        (2020, "Honda", "Accord", "Blue"),
        (2019, "Toyota", "Corolla", "Red"),
        (2020, "TOYOTA", "RAV4", "White"),
    ]);

    let filter = FilterCriteria::default().year("2020").make("Toyota");
    let outcome = inv.delete_filtered(&filter).unwrap();

    assert_eq!(outcome.count(), 2);
    assert_eq!(ids(inv.cars()), vec![id[1], id[2]]);
    assert_eq!(ids(&inv.store().load_all().unwrap()), vec![id[1], id[2]]);
}

#[test]
fn no_criteria_deletes_nothing() {
    let (mut inv, id) = seeded(&[(2019, "Honda", "Civic", "Red"), (2020, "Toyota", "Camry", "Blue")]);

    let outcome = inv
        .delete_filtered(&FilterCriteria::new(" ", "", "", ""))
        .unwrap();

    assert_eq!(outcome, BulkDeleteOutcome::NoFilterSpecified);
    assert_eq!(outcome.count(), 0);
    assert_eq!(ids(&inv.store().load_all().unwrap()), id);
}

#[test]
fn no_matches_is_empty_success() {
    let (mut inv, _) = seeded(&[(2019, "Honda", "Civic", "Red")]);
    let outcome = inv
        .delete_filtered(&FilterCriteria::default().color("Purple"))
        .unwrap();
    assert_eq!(outcome, BulkDeleteOutcome::Deleted(Vec::new()));
    assert_eq!(inv.len(), 1);
}

/// Delegates to SQLite but fails the `fail_on`-th delete (1-based).
struct FlakyStore {
    inner: SqliteStore,
    deletes: usize,
    fail_on: usize,
}

impl RecordStore for FlakyStore {
    fn load_all(&self) -> Result<Vec<Car>, StoreError> {
        self.inner.load_all()
    }

    fn insert(&mut self, details: &CarDetails) -> Result<Car, StoreError> {
        self.inner.insert(details)
    }

    fn update(&mut self, id: i64, details: &CarDetails, sold: bool) -> Result<(), StoreError> {
        self.inner.update(id, details, sold)
    }

    fn delete(&mut self, id: i64) -> Result<(), StoreError> {
        self.deletes += 1;
        if self.deletes == self.fail_on {
            return Err(StoreError::Write(rusqlite::Error::ExecuteReturnedResults));
        }
        self.inner.delete(id)
    }
}

#[test]
fn failure_midway_is_partial_and_not_rolled_back() {
    let mut inner = SqliteStore::in_memory().unwrap();
    let mut id = Vec::new();
    for model in ["Civic", "Accord", "Fit", "Pilot", "CR-V"] {
        id.push(inner.insert(&details(2020, "Honda", model, "Black")).unwrap().id);
    }
    let other = inner.insert(&details(2020, "Kia", "Rio", "Black")).unwrap().id;

    let store = FlakyStore {
        inner,
        deletes: 0,
        fail_on: 3,
    };
    let mut inv = Inventory::with_loaded(store).unwrap();

    let err = inv
        .delete_filtered(&FilterCriteria::default().make("honda"))
        .unwrap_err();

    assert!(matches!(err, InventoryError::PartialFailure { deleted: 2, .. }));
    assert_eq!(err.title(), "Failed to Remove Cars from Database");
    // Stopped after the failure: no fourth delete was attempted
    assert_eq!(inv.store().deletes, 3);

    let remaining = vec![id[2], id[3], id[4], other];
    assert_eq!(ids(inv.cars()), remaining);
    assert_eq!(ids(&inv.store().load_all().unwrap()), remaining);
}

#[test]
fn failure_on_first_delete_removes_nothing() {
    let mut inner = SqliteStore::in_memory().unwrap();
    inner.insert(&details(2020, "Honda", "Civic", "Black")).unwrap();
    let store = FlakyStore {
        inner,
        deletes: 0,
        fail_on: 1,
    };
    let mut inv = Inventory::with_loaded(store).unwrap();

    let err = inv
        .delete_filtered(&FilterCriteria::default().year("2020"))
        .unwrap_err();

    assert!(matches!(err, InventoryError::PartialFailure { deleted: 0, .. }));
    assert_eq!(inv.len(), 1);
}

#[test]
fn delete_matching_works_on_bare_store() {
    let mut store = SqliteStore::in_memory().unwrap();
    store.insert(&details(2019, "Honda", "Civic", "Red")).unwrap();
    store.insert(&details(2020, "Toyota", "Camry", "Red")).unwrap();
    let mut cars = store.load_all().unwrap();

    let outcome = delete_matching(&mut store, &mut cars, &FilterCriteria::default().color("RED"))
        .unwrap();

    assert_eq!(outcome.count(), 2);
    assert!(cars.is_empty());
    assert!(store.load_all().unwrap().is_empty());
}
