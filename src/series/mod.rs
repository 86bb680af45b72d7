pub mod risk_exposure;
