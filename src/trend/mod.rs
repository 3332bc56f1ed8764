//! 趋势指标

pub mod moving_average;
pub mod sma;

// 重新导出
pub use moving_average::*;
pub use sma::*;
