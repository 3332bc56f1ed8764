//! # Quant Indicators
//!
//! 技术指标库：滑动窗口均线（Decimal 精确计算 / f64 快速两种实现）

pub mod app_config;
pub mod error;
pub mod trend;

// 重新导出常用类型
pub use error::{IndicatorError, Result};
pub use trend::*;

// 统一指标接口
pub trait Indicator {
    type Input;
    type Output;

    fn update(&mut self, input: Self::Input) -> Self::Output;
    fn reset(&mut self);
}
