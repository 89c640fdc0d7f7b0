//! One component per page section, in page order.
mod hero;
mod about;
mod practice_areas;
mod team;
mod testimonials;
mod contact;
mod footer;

pub use hero::Hero;
pub use about::About;
pub use practice_areas::PracticeAreas;
pub use team::Team;
pub use testimonials::Testimonials;
pub use contact::Contact;
pub use footer::Footer;
