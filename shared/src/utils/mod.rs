//! Common utility functions

pub mod image;
pub mod validation;

// Re-export commonly used utilities
pub use image::image_url;
pub use validation::mask_email;
