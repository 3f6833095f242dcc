pub mod client;
pub mod edit;
pub mod endpoints;
pub mod error;
pub mod notify;
pub mod route;
pub mod transport;
pub mod validation;

pub use client::CrudClient;
pub use edit::EditSession;
pub use endpoints::Endpoints;
pub use error::{CrudError, Result};
pub use notify::{ModalHost, Notifier, SilentHost};
pub use route::substitute_id;
pub use transport::{CrudRequest, CrudResponse, HttpTransport, Method, Transport};
pub use validation::ValidationErrors;
