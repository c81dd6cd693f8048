pub mod bank;
pub mod features;
pub mod ridge;

pub use bank::ModelBank;
pub use ridge::RidgeModel;
