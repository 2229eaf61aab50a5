pub mod chart;

#[cfg(feature = "ui")]
pub mod viewer;
