pub mod api_status;
pub mod phase;
