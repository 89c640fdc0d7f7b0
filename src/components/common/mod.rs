pub mod fields;
pub mod heading;
pub mod reveal;

pub use fields::{SelectField, TextAreaField, TextField};
pub use heading::SectionHeading;
pub use reveal::{reveal_class, reveal_options, transition_delay_style, Reveal, RevealDirection};
