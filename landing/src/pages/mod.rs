// Landing page routes

mod home;
mod placeholder;

pub use home::HomePage;
pub use placeholder::RoutePlaceholder;
