// Service exports
pub mod gallery_api;

pub use gallery_api::{GalleryApiClient, GalleryApiError};
