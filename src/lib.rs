pub mod engine;
pub mod error;
pub mod parser;
pub mod phasing;
pub mod types;
pub mod writer;

pub use engine::*;
pub use error::*;
pub use parser::*;
pub use phasing::*;
pub use types::*;
pub use writer::*;
