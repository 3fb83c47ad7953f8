//! Filter criteria for bulk deletion.
//!
//! A [`FilterCriteria`] holds up to four optional exact-match constraints.
//! The supplied ones are combined with logical AND. A filter with nothing
//! supplied matches no record at all.

use crate::types::Car;

/// One exact-match constraint on a single field.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Criterion {
    /// Compared against the year rendered as text, exactly.
    Year(String),
    /// Case-insensitive.
    Make(String),
    /// Case-insensitive.
    Model(String),
    /// Case-insensitive.
    Color(String),
}

impl Criterion {
    pub fn matches(&self, car: &Car) -> bool {
        match self {
            Criterion::Year(year) => car.year.to_string() == *year,
            Criterion::Make(make) => eq_ignore_case(&car.make, make),
            Criterion::Model(model) => eq_ignore_case(&car.model, model),
            Criterion::Color(color) => eq_ignore_case(&car.color, color),
        }
    }
}

/// User-supplied filter text for year, make, model, and color.
///
/// Values are trimmed on construction; an empty value means the criterion
/// was not supplied.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct FilterCriteria {
    pub year: String,
    pub make: String,
    pub model: String,
    pub color: String,
}

impl FilterCriteria {
    pub fn new(
        year: impl AsRef<str>,
        make: impl AsRef<str>,
        model: impl AsRef<str>,
        color: impl AsRef<str>,
    ) -> Self {
        Self {
            year: year.as_ref().trim().to_string(),
            make: make.as_ref().trim().to_string(),
            model: model.as_ref().trim().to_string(),
            color: color.as_ref().trim().to_string(),
        }
    }

    pub fn year(mut self, year: impl AsRef<str>) -> Self {
        self.year = year.as_ref().trim().to_string();
        self
    }

    pub fn make(mut self, make: impl AsRef<str>) -> Self {
        self.make = make.as_ref().trim().to_string();
        self
    }

    pub fn model(mut self, model: impl AsRef<str>) -> Self {
        self.model = model.as_ref().trim().to_string();
        self
    }

    pub fn color(mut self, color: impl AsRef<str>) -> Self {
        self.color = color.as_ref().trim().to_string();
        self
    }

    /// The supplied criteria, in year, make, model, color order.
    pub fn criteria(&self) -> Vec<Criterion> {
        let mut criteria = Vec::with_capacity(4);
        // Fields are public, so trim again here.
        let year = self.year.trim();
        let make = self.make.trim();
        let model = self.model.trim();
        let color = self.color.trim();
        if !year.is_empty() {
            criteria.push(Criterion::Year(year.to_string()));
        }
        if !make.is_empty() {
            criteria.push(Criterion::Make(make.to_string()));
        }
        if !model.is_empty() {
            criteria.push(Criterion::Model(model.to_string()));
        }
        if !color.is_empty() {
            criteria.push(Criterion::Color(color.to_string()));
        }
        criteria
    }

    /// True when no criterion was supplied.
    pub fn is_empty(&self) -> bool {
        self.criteria().is_empty()
    }

    /// Records in `cars` matching every supplied criterion, in order.
    /// Selects nothing when no criterion was supplied.
    pub fn select<'a>(&self, cars: &'a [Car]) -> Vec<&'a Car> {
        let criteria = self.criteria();
        if criteria.is_empty() {
            return Vec::new();
        }
        cars.iter()
            .filter(|car| criteria.iter().all(|c| c.matches(car)))
            .collect()
    }
}

/// Character-by-character comparison where two characters are equal if
/// their simple uppercase or simple lowercase forms are.
fn eq_ignore_case(a: &str, b: &str) -> bool {
    a.chars().count() == b.chars().count()
        && a.chars().zip(b.chars()).all(|(x, y)| {
            x == y || simple_upper(x) == simple_upper(y) || simple_lower(x) == simple_lower(y)
        })
}

fn simple_upper(c: char) -> char {
    single(c.to_uppercase()).unwrap_or(c)
}

fn simple_lower(c: char) -> char {
    // U+0130 is the only unconditional multi-char lowercase mapping.
    if c == '\u{130}' {
        return 'i';
    }
    single(c.to_lowercase()).unwrap_or(c)
}

fn single(mut chars: impl Iterator<Item = char>) -> Option<char> {
    let c = chars.next()?;
    chars.next().is_none().then_some(c)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn car(id: i64, year: u32, make: &str, model: &str, color: &str) -> Car {
        Car {
            id,
            year,
            make: make.to_string(),
            model: model.to_string(),
            color: color.to_string(),
            engine: "V6".to_string(),
            transmission: "Automatic".to_string(),
            price: 20000.0,
            sold: false,
        }
    }

    fn lot() -> Vec<Car> {
        vec![
            car(1, 2019, "Honda", "Civic", "Red"),
            car(2, 2020, "Toyota", "Corolla", "Blue"),
            car(3, 2020, "TOYOTA", "Camry", "Red"),
            car(4, 2020, "Honda", "Accord", "Blue"),
            car(5, 2021, "toyota", "Corolla", "White"),
        ]
    }

    fn ids(cars: &[&Car]) -> Vec<i64> {
        cars.iter().map(|c| c.id).collect()
    }

    #[test]
    fn empty_filter_matches_nothing() {
        let filter = FilterCriteria::default();
        assert!(filter.is_empty());
        assert!(filter.select(&lot()).is_empty());
    }

    #[test]
    fn whitespace_only_is_not_supplied() {
        let filter = FilterCriteria::new("  ", "\t", "", " ");
        assert!(filter.is_empty());
    }

    #[test]
    fn year_and_make_combine_with_and() {
        let filter = FilterCriteria::default().year("2020").make("Toyota");
        assert_eq!(ids(&filter.select(&lot())), vec![2, 3]);
    }

    #[test]
    fn make_is_case_insensitive() {
        let filter = FilterCriteria::default().make("toyota");
        assert_eq!(ids(&filter.select(&lot())), vec![2, 3, 5]);
    }

    #[test]
    fn make_is_exact_not_substring() {
        let filter = FilterCriteria::default().make("Toy");
        assert!(filter.select(&lot()).is_empty());
    }

    #[test]
    fn year_is_exact_text() {
        let filter = FilterCriteria::default().year("02020");
        assert!(filter.select(&lot()).is_empty());
        let filter = FilterCriteria::default().year(" 2019 ");
        assert_eq!(ids(&filter.select(&lot())), vec![1]);
    }

    #[test]
    fn all_four_criteria() {
        let filter = FilterCriteria::new("2020", "honda", "ACCORD", "blue");
        assert_eq!(ids(&filter.select(&lot())), vec![4]);
    }

    #[test]
    fn criteria_order_is_fixed() {
        let filter = FilterCriteria::new("", "Honda", "", "Red").year("2019");
        assert_eq!(
            filter.criteria(),
            vec![
                Criterion::Year("2019".to_string()),
                Criterion::Make("Honda".to_string()),
                Criterion::Color("Red".to_string()),
            ]
        );
    }

    #[test]
    fn non_ascii_case_folding() {
        let mut c = car(9, 2018, "Škoda", "Octavia", "Grün");
        assert!(Criterion::Make("ŠKODA".to_string()).matches(&c));
        c.color = "GRÜN".to_string();
        assert!(Criterion::Color("grün".to_string()).matches(&c));
    }

    #[test]
    fn dotted_capital_i_matches_plain_i() {
        let c = car(10, 2015, "İsuzu", "D-Max", "White");
        assert!(Criterion::Make("isuzu".to_string()).matches(&c));
        assert!(Criterion::Make("ISUZU".to_string()).matches(&c));
    }

    #[test]
    fn case_folding_is_per_character() {
        let c = car(11, 2015, "Straße", "S", "Weiß");
        assert!(Criterion::Make("STRAßE".to_string()).matches(&c));
        assert!(!Criterion::Make("STRASSE".to_string()).matches(&c));
        assert!(!Criterion::Color("weiss".to_string()).matches(&c));
    }
}
