pub mod carousel;
pub mod contact;
pub mod controller;
pub mod leads;
pub mod messaging;
pub mod validation;
