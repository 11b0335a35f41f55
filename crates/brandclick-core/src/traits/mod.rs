pub mod predictor;

pub use predictor::IPredictor;
