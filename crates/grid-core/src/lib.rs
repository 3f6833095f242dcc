pub mod query;
pub mod sort;
pub mod state;
pub mod store;

pub use query::{QueryOutput, filter_rows, run_query, sort_rows, total_pages};
pub use sort::natural_cmp;
pub use state::{PageSize, Sort, SortDirection, ViewMode, ViewState};
pub use store::{SelectAll, TableState};
