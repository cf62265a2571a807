pub mod handlers;
pub mod header;
pub mod history_panel;
pub mod input_panel;
pub mod kind_tabs;
pub mod progress_bar;
pub mod results;
pub mod utils;
