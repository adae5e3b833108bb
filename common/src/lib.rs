pub mod errors;
pub mod explorer;
pub mod filters;
pub mod pipeline;
pub mod planet;
pub mod sort;

pub use errors::FilterError;
pub use explorer::*;
pub use filters::*;
pub use pipeline::*;
pub use planet::*;
pub use sort::*;
