pub mod circularity;
pub mod confidence;
pub mod difference;
pub mod kernel_stability;
pub mod perfection;
pub mod self_integration;
