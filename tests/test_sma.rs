use anyhow::Result;
use dotenv::dotenv;
use rust_decimal::Decimal;
use rust_decimal_macros::dec;

use quant_indicators::app_config::log::setup_logging;
use quant_indicators::{IndicatorError, Sma};

fn init() {
    dotenv().ok();
    let _ = setup_logging();
}

#[test]
fn test_sma() -> Result<()> {
    init();

    let mut sma = Sma::new(3)?;

    // 窗口未满不出结果
    assert_eq!(sma.update(dec!(10), false), None);
    assert_eq!(sma.update(dec!(20), false), None);
    assert!(!sma.is_ready());

    // 第三个样本集满窗口，(10+20+30)/3
    assert_eq!(sma.update(dec!(30), false), Some(dec!(20)));
    assert!(sma.is_ready());

    // 窗口滚动，挤出 10，(20+30+40)/3
    assert_eq!(sma.update(dec!(40), false), Some(dec!(30)));
    assert_eq!(sma.interval(), 3);
    Ok(())
}

#[test]
fn test_sma_rolling_window() -> Result<()> {
    init();

    // 集满之后每一步的结果都是最近 n 个样本的均值
    let mut sma = Sma::new(4)?;
    let prices: Vec<Decimal> = (1..=20).map(Decimal::from).collect();

    for (i, &price) in prices.iter().enumerate() {
        let result = sma.update(price, false);
        if i + 1 < 4 {
            assert_eq!(result, None);
        } else {
            let expected = Sma::get_result_from_batch(&prices[i + 1 - 4..=i]);
            assert_eq!(result, Some(expected));
        }
    }
    Ok(())
}

#[test]
fn test_sma_replace() -> Result<()> {
    init();

    let mut sma = Sma::new(3)?;
    for price in [dec!(10), dec!(20), dec!(30)] {
        sma.update(price, false);
    }
    assert_eq!(sma.last(), Some(dec!(20)));

    // 窗口滚动到 [20,30,40]
    assert_eq!(sma.update(dec!(40), false), Some(dec!(30)));
    assert_eq!(sma.previous(), Some(dec!(20)));

    // 修正最近一个样本：窗口变为 [20,30,100]，长度不变，不挤出
    assert_eq!(sma.update(dec!(100), true), Some(dec!(50)));

    // replace 不产生新的历史记录，previous 仍是上一个非 replace 结果
    assert_eq!(sma.last(), Some(dec!(50)));
    assert_eq!(sma.previous(), Some(dec!(20)));
    Ok(())
}

#[test]
fn test_sma_replace_equals_append_without_prior() -> Result<()> {
    init();

    // 先追加 y 再 replace 成 x，等价于从未追加过 y 直接追加 x
    let mut replaced = Sma::new(2)?;
    replaced.update(dec!(1), false);
    replaced.update(dec!(2), false);
    let a = replaced.update(dec!(9), true);

    let mut appended = Sma::new(2)?;
    appended.update(dec!(1), false);
    let b = appended.update(dec!(9), false);

    assert_eq!(a, b);
    assert_eq!(a, Some(dec!(5)));
    Ok(())
}

#[test]
fn test_sma_replace_before_saturation() -> Result<()> {
    init();

    // 集满之前 replace 同样不增长窗口，仍然不出结果
    let mut sma = Sma::new(3)?;
    sma.update(dec!(10), false);
    assert_eq!(sma.update(dec!(12), true), None);
    assert_eq!(sma.update(dec!(20), false), None);
    assert_eq!(sma.update(dec!(30), false), Some(Sma::get_result_from_batch(&[
        dec!(12),
        dec!(20),
        dec!(30),
    ])));
    Ok(())
}

#[test]
fn test_get_result_from_batch() -> Result<()> {
    init();

    let batch = [dec!(10), dec!(20), dec!(30)];
    assert_eq!(Sma::get_result_from_batch(&batch), dec!(20));

    // 空批次：分子为 0，除数退化为 1
    assert_eq!(Sma::get_result_from_batch(&[]), dec!(0));
    Ok(())
}

#[test]
fn test_sma_invalid_interval() {
    init();

    let err = Sma::<Decimal>::new(0).unwrap_err();
    assert!(matches!(err, IndicatorError::InvalidInterval(0)));
}

#[test]
fn test_sma_invalid_number_from_decimal() {
    init();

    // 非法的十进制价格在 rust_decimal 解析时就失败，指标不做二次校验
    let err: IndicatorError = "not-a-price".parse::<Decimal>().unwrap_err().into();
    assert!(matches!(err, IndicatorError::InvalidNumber(_)));
}

#[test]
fn test_sma_state_resume() -> Result<()> {
    init();

    // 序列化中途状态后恢复，两条路径后续输出一致（策略断点续跑场景）
    let mut sma = Sma::new(3)?;
    sma.update(dec!(100), false);
    sma.update(dec!(101), false);

    let snapshot = serde_json::to_string(&sma)?;
    let mut resumed: Sma = serde_json::from_str(&snapshot)?;

    for price in [dec!(102), dec!(103), dec!(104)] {
        assert_eq!(sma.update(price, false), resumed.update(price, false));
    }
    assert_eq!(sma.last(), resumed.last());
    Ok(())
}
