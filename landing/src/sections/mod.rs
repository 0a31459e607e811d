// Landing page sections
// Every section reads shared state from `SiteState`; none keeps its own copy.

mod contact;
mod footer;
mod hero;
mod nav;
mod products;
mod services;
mod testimonials;

pub use contact::Contact;
pub use footer::Footer;
pub use hero::Hero;
pub use nav::Nav;
pub use products::Products;
pub use services::Services;
pub use testimonials::Testimonials;
