//! Page Components

mod home;
mod webinars;

pub use home::HomePage;
pub use webinars::WebinarsPage;
