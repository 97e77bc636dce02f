pub mod assembler;
pub mod grouper;
pub mod phased;
pub mod router;
pub mod unphased;

pub use assembler::*;
pub use grouper::*;
pub use phased::*;
pub use router::*;
pub use unphased::*;
