pub mod error_response;
pub mod generate_image_response;
