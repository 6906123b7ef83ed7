pub mod case;
pub mod css;
pub mod properties;
pub mod pseudos;

pub use css::CssRule;
pub use properties::{PropertyTable, table};
pub use pseudos::Pseudo;
