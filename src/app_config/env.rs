//! 运行环境配置

use std::env;

/// 运行环境：LOCAL 日志输出到控制台，其余环境滚动写入文件
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AppEnv {
    Local,
    Prod,
}

impl AppEnv {
    /// 从 APP_ENV 读取（大小写不敏感），缺省为 LOCAL
    pub fn from_env() -> Self {
        match env::var("APP_ENV") {
            Ok(v) if v.trim().eq_ignore_ascii_case("local") => AppEnv::Local,
            Ok(_) => AppEnv::Prod,
            Err(_) => AppEnv::Local,
        }
    }
}
