pub mod builder;
pub mod cli;
pub mod commands;
pub mod composer;
pub mod config;
pub mod description;
pub mod engine;
pub mod error;
pub mod parser;
pub mod prelude;
pub mod registry;
pub mod sheet;
pub mod styling;
pub mod values;

pub use builder::Style;
pub use config::{EngineConfig, load_config};
pub use description::{StyleDescription, StyleInput, StyleValue};
pub use engine::{Engine, global};
pub use error::{ConfigError, TargetError};
pub use registry::Helper;
pub use sheet::{MemoryTarget, StyleTarget};
pub use styling::{CssRule, Pseudo};
pub use values::{IntoValues, Token};
