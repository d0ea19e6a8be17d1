pub mod stability_balance_response;
pub mod stability_error_response;
pub mod stability_generate_images_response;
