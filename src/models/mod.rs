pub mod booking;
pub mod catalog;
pub mod outcome;

pub use booking::{BookingRequest, Field};
pub use catalog::{format_price, AddOn, PackageOption, ServiceArea, ServiceTier, SiteContent, Testimonial};
pub use outcome::SubmissionOutcome;
