pub mod data_table;
pub mod facet_select;
pub mod results;
pub mod search_stack;
pub mod section_box;

pub use data_table::DataTable;
pub use facet_select::FacetSelect;
pub use results::ResultsGrid;
pub use search_stack::SearchStack;
pub use section_box::SectionBox;
