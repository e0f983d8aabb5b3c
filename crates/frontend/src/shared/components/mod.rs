pub mod page_header;
pub mod product_card;
pub mod ui;
