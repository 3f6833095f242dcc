pub mod component;
pub mod debounce;
pub mod error;
pub mod options;

pub use component::{SaveOutcome, TableComponent};
pub use debounce::Debouncer;
pub use error::{ComponentError, Result};
pub use options::TableOptions;
