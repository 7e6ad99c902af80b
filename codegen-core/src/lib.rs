pub mod config;
pub mod constants;
pub mod ddl;
pub mod error;
pub mod generator;
pub mod naming;
pub mod render;

pub use error::{CodegenError, Result};
pub use generator::{CodeGenerator, GeneratedArtifacts};
