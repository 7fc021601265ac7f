pub mod pagination_controls;
pub mod search_input;

pub use pagination_controls::PaginationControls;
pub use search_input::SearchInput;
