pub mod error;
pub mod health;
pub mod params;

pub use error::ParamsError;
