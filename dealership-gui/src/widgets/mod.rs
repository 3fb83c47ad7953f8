pub mod car_dialog;
pub mod car_table;
pub mod filter_panel;
pub mod notice;
