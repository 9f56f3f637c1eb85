pub mod dashboard;
pub mod landing;
pub mod navbar;
pub mod ui;
