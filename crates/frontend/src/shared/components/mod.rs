pub mod bar_chart;
pub mod filter_panel;
pub mod page_header;
pub mod progress_bar;
pub mod stat_card;
pub mod status_badge;
pub mod table;
