pub mod actions;
pub mod app;
pub mod input;
pub mod state;
pub mod views;
pub mod widgets;

pub use app::DealershipApp;
