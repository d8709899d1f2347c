//! Page components

mod content;
mod landing;
mod layout;
mod login;
mod not_found;
mod register;

pub use content::view_content;
pub use landing::LandingPage;
pub use layout::RoleLayout;
pub use login::LoginPage;
pub use not_found::NotFoundPage;
pub use register::RegisterPage;
