pub mod api_error;
pub mod api_status_response;
