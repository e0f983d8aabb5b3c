pub mod header;
pub mod nav_link;

pub use header::Header;
pub use nav_link::NavLink;
