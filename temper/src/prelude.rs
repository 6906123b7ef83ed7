pub use crate::builder::Style;
pub use crate::description::{StyleDescription, StyleInput};
pub use crate::engine::{Engine, global};
pub use crate::registry::Helper;
pub use crate::styling::Pseudo;
pub use crate::values::{IntoValues, Token};
