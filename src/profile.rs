//! Profile card domain: card shape, link entries, icon references, and
//! structural validation.

pub mod card;
pub mod defaults;
pub mod icon;
pub mod link;
pub mod validation;

pub use card::ProfileConfig;
pub use defaults::default_card;
pub use icon::IconRef;
pub use link::LinkEntry;
pub use validation::validate_card;
