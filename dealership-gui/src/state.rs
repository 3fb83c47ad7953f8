use dealership_lib::{Car, CarForm, FilterCriteria, InventoryError};

/// Whether a notice reports a problem or just informs.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum NoticeKind {
    Info,
    Error,
}

/// A modal message shown until the user dismisses it.
#[derive(Debug, Clone, PartialEq)]
pub struct Notice {
    pub kind: NoticeKind,
    pub header: String,
    pub message: String,
}

impl Notice {
    pub fn info(header: impl Into<String>, message: impl Into<String>) -> Self {
        Self {
            kind: NoticeKind::Info,
            header: header.into(),
            message: message.into(),
        }
    }

    pub fn error(header: impl Into<String>, message: impl Into<String>) -> Self {
        Self {
            kind: NoticeKind::Error,
            header: header.into(),
            message: message.into(),
        }
    }

    /// Window title.
    pub fn title(&self) -> &'static str {
        match self.kind {
            NoticeKind::Info => "Information",
            NoticeKind::Error => "Error",
        }
    }
}

impl From<&InventoryError> for Notice {
    fn from(err: &InventoryError) -> Self {
        Notice::error(err.title(), err.to_string())
    }
}

/// What the car dialog is doing.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DialogMode {
    Add,
    Edit { id: i64 },
}

/// State of the open add/edit dialog.
#[derive(Debug, Clone, PartialEq)]
pub struct CarDialog {
    pub mode: DialogMode,
    pub form: CarForm,
    pub sold: bool,
}

impl CarDialog {
    pub fn add() -> Self {
        Self {
            mode: DialogMode::Add,
            form: CarForm::new(),
            sold: false,
        }
    }

    pub fn edit(car: &Car) -> Self {
        Self {
            mode: DialogMode::Edit { id: car.id },
            form: CarForm::from_car(car),
            sold: car.sold,
        }
    }

    pub fn title(&self) -> &'static str {
        match self.mode {
            DialogMode::Add => "Add Car",
            DialogMode::Edit { .. } => "Edit Car",
        }
    }

    pub fn header(&self) -> &'static str {
        match self.mode {
            DialogMode::Add => "Enter Car Details",
            DialogMode::Edit { .. } => "Edit Fields",
        }
    }

    pub fn confirm_label(&self) -> &'static str {
        match self.mode {
            DialogMode::Add => "Add",
            DialogMode::Edit { .. } => "Save",
        }
    }
}

/// What the user did with the dialog this frame.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DialogAction {
    None,
    Confirm,
    Cancel,
}

/// Text in the bulk-delete filter fields.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct FilterFields {
    pub year: String,
    pub make: String,
    pub model: String,
    pub color: String,
}

impl FilterFields {
    pub fn criteria(&self) -> FilterCriteria {
        FilterCriteria::new(&self.year, &self.make, &self.model, &self.color)
    }

    pub fn clear(&mut self) {
        *self = Self::default();
    }
}
