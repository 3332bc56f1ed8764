//! 均线家族的公共基础：周期校验 + 结果缓存 + replace 语义

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use crate::error::IndicatorError;

/// 窗口均值需要的数值能力：零值、加法、按样本数相除
pub trait MeanNumber: Copy {
    const ZERO: Self;

    fn add(self, rhs: Self) -> Self;

    /// 除以样本数，样本数为 0 时退化为除以 1
    fn div_count(self, count: usize) -> Self;
}

impl MeanNumber for Decimal {
    const ZERO: Self = Decimal::ZERO;

    fn add(self, rhs: Self) -> Self {
        self + rhs
    }

    fn div_count(self, count: usize) -> Self {
        self / Decimal::from(count.max(1) as u64)
    }
}

impl MeanNumber for f64 {
    const ZERO: Self = 0.0;

    fn add(self, rhs: Self) -> Self {
        self + rhs
    }

    fn div_count(self, count: usize) -> Self {
        self / count.max(1) as f64
    }
}

/// 均线公共状态：配置的周期，以及最近两个已发布结果。
///
/// 由具体指标组合持有，指标算出均值后通过 [`set_result`](Self::set_result)
/// 发布；结果的缓存方式与滑动窗口算法本身解耦。
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct MovingAverage<T> {
    interval: usize,
    result: Option<T>,
    previous: Option<T>,
}

impl<T: Copy> MovingAverage<T> {
    /// 创建。interval 必须大于 0
    pub fn new(interval: usize) -> Result<Self, IndicatorError> {
        if interval == 0 {
            return Err(IndicatorError::InvalidInterval(interval));
        }
        Ok(Self {
            interval,
            result: None,
            previous: None,
        })
    }

    pub fn interval(&self) -> usize {
        self.interval
    }

    /// 发布一个新结果并原样返回。
    ///
    /// replace 模式覆盖最新结果，上一结果不挪入 previous（修正未收盘
    /// 周期时不产生新的历史记录）
    pub fn set_result(&mut self, value: T, replace: bool) -> T {
        if !replace {
            self.previous = self.result;
        }
        self.result = Some(value);
        value
    }

    /// 最近一次发布的结果
    pub fn last(&self) -> Option<T> {
        self.result
    }

    /// 最近一次之前的结果
    pub fn previous(&self) -> Option<T> {
        self.previous
    }

    /// 是否已经发布过结果
    pub fn is_stable(&self) -> bool {
        self.result.is_some()
    }

    pub fn reset(&mut self) {
        self.result = None;
        self.previous = None;
    }
}
