//! Page components for the invitation.

mod landing;

pub use landing::Landing;
