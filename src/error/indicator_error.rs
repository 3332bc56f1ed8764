use thiserror::Error;

pub type Result<T> = std::result::Result<T, IndicatorError>;

/// 指标错误
#[derive(Error, Debug)]
pub enum IndicatorError {
    /// 周期配置错误
    #[error("Invalid interval: {0}, must be greater than 0")]
    InvalidInterval(usize),

    /// 价格解析/构造错误，由 rust_decimal 抛出，指标本身不做数值校验
    #[error("Invalid number: {0}")]
    InvalidNumber(#[from] rust_decimal::Error),
}
