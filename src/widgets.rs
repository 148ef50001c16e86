pub mod popup;
pub mod spinner;

pub use spinner::Spinner;
