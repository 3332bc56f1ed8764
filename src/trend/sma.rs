//! Simple Moving Average (SMA)
//!
//! 固定窗口内全部价格的算术平均，所有周期权重相同，
//! 因此对最新价格的反应不如 EMA 灵敏。

use std::collections::VecDeque;

use ndarray::Array1;
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::error::IndicatorError;
use crate::trend::moving_average::{MeanNumber, MovingAverage};
use crate::Indicator;

/// Sliding-window mean, generic over the numeric representation.
///
/// `Sma`（默认 `Decimal`）全程精确计算，多次更新不会累积舍入误差；
/// [`FasterSma`] 用 `f64` 换取速度。两者共用同一份算法。
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Sma<T = Decimal> {
    core: MovingAverage<T>,
    prices: VecDeque<T>,
}

/// f64 变体：不校验输入，NaN/∞ 会参与它所在窗口的每一个均值，
/// 直到被挤出窗口为止
pub type FasterSma = Sma<f64>;

impl<T: MeanNumber> Sma<T> {
    /// 创建。interval 必须大于 0
    pub fn new(interval: usize) -> Result<Self, IndicatorError> {
        Ok(Self {
            core: MovingAverage::new(interval)?,
            prices: VecDeque::with_capacity(interval),
        })
    }

    /// 输入一个价格样本。
    ///
    /// replace 为 true 时覆盖最近一个样本（用于修正未收盘周期），
    /// 否则追加；窗口满后每次追加挤出最旧样本。窗口未满返回 None，
    /// 集满后每次调用都返回当前窗口的均值。
    pub fn update(&mut self, price: T, replace: bool) -> Option<T> {
        if replace {
            if let Some(last) = self.prices.back_mut() {
                *last = price;
            } else {
                // 空窗口上的 replace 等价于追加
                self.prices.push_back(price);
            }
        } else {
            self.prices.push_back(price);
        }

        if self.prices.len() > self.core.interval() {
            self.prices.pop_front();
        }

        if self.prices.len() == self.core.interval() {
            if !self.core.is_stable() {
                debug!(interval = self.core.interval(), "SMA 窗口已集满，开始输出");
            }
            let mean = mean_of(self.prices.iter().copied());
            Some(self.core.set_result(mean, replace))
        } else {
            None
        }
    }

    /// 配置的窗口大小
    pub fn interval(&self) -> usize {
        self.core.interval()
    }

    /// 最近一次输出的均值
    pub fn last(&self) -> Option<T> {
        self.core.last()
    }

    /// 最近一次之前的均值
    pub fn previous(&self) -> Option<T> {
        self.core.previous()
    }

    /// 窗口是否已集满
    pub fn is_ready(&self) -> bool {
        self.prices.len() >= self.core.interval()
    }

    /// 清空窗口和结果缓存，回到初始状态
    pub fn reset(&mut self) {
        self.prices.clear();
        self.core.reset();
    }
}

impl Sma<Decimal> {
    /// 对任意一批价格求算术平均；空批次返回 0（除数退化为 1）
    pub fn get_result_from_batch(prices: &[Decimal]) -> Decimal {
        mean_of(prices.iter().copied())
    }
}

impl<T: MeanNumber> Indicator for Sma<T> {
    type Input = T;
    type Output = Option<T>;

    fn update(&mut self, input: T) -> Option<T> {
        self.update(input, false)
    }

    fn reset(&mut self) {
        self.reset();
    }
}

/// 整段序列批量计算：窗口未满的位置输出 NaN
pub fn calculate(data: &Array1<f64>, length: usize) -> Result<Array1<f64>, IndicatorError> {
    let mut sma = FasterSma::new(length)?;
    let result = data
        .iter()
        .map(|&x| sma.update(x, false).unwrap_or(f64::NAN))
        .collect::<Vec<f64>>();
    Ok(Array1::from(result))
}

// 每次更新都对窗口重新求和，不维护增量 sum：Decimal 下两者等价，
// f64 下避免增量和的漂移，replace 模式也无需特判
fn mean_of<T: MeanNumber>(values: impl Iterator<Item = T>) -> T {
    let (sum, count) = values.fold((T::ZERO, 0usize), |(s, n), v| (s.add(v), n + 1));
    sum.div_count(count)
}
