pub mod config;
pub mod errors;
pub mod handlers;
pub mod models;
pub mod services;
pub mod state;

pub use services::carousel::{spawn_rotation, TestimonialCarousel};
pub use services::controller::{FormState, LeadSubmissionController};
