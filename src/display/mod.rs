pub mod details;
pub mod table;
pub mod ui;

pub use details::{certificate_details, format_date};
pub use table::endpoint_table;
pub use ui::Ui;
