pub mod api_errors;
pub mod backend_client;

pub use api_errors::ApiError;
pub use backend_client::BackendClient;
