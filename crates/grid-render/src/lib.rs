pub mod escape;
pub mod pagination;
pub mod render;
pub mod text;
pub mod view;

pub use escape::escape_text;
pub use pagination::{PageItem, PaginationView, page_info, pagination_view};
pub use render::{RenderConfig, render, render_load_error};
pub use text::{write_cards, write_grid, write_pagination, write_table};
pub use view::{
    ActionButton, BodyCell, CardBody, CardItem, CardView, GridView, HeaderCell, HeaderRow,
    RowView, SortMarker, TableBody, TableView,
};
