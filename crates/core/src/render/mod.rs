pub mod recorder;
pub mod traits;
