//! 对战配置
//!
//! JSON 格式，所有字段均可省略：
//!
//! ```json
//! { "games": 100, "first": "optimal", "second": "random", "seed": 7,
//!   "engine": { "noise_probability": 0.25, "use_transposition": true } }
//! ```

use std::path::Path;

use serde::{Deserialize, Serialize};
use thiserror::Error;
use tictactoe_ai::AiConfig;
use tictactoe_core::Difficulty;

/// 配置错误
#[derive(Error, Debug)]
pub enum ConfigError {
    /// IO 错误
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    /// JSON 解析错误
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    /// 对局数为 0
    #[error("games must be at least 1")]
    NoGames,
}

/// 对战配置
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ArenaConfig {
    pub games: usize,
    pub first: Difficulty,
    pub second: Difficulty,
    /// 覆盖 `engine.seed`
    pub seed: Option<u64>,
    pub engine: AiConfig,
}

impl Default for ArenaConfig {
    fn default() -> Self {
        Self {
            games: 100,
            first: Difficulty::Optimal,
            second: Difficulty::Random,
            seed: None,
            engine: AiConfig {
                use_transposition: true,
                ..AiConfig::default()
            },
        }
    }
}

impl ArenaConfig {
    /// 从 JSON 文件加载
    pub fn load(path: &Path) -> Result<Self, ConfigError> {
        let content = std::fs::read_to_string(path)?;
        Self::from_json(&content)
    }

    /// 从 JSON 字符串解析
    pub fn from_json(json: &str) -> Result<Self, ConfigError> {
        let config: ArenaConfig = serde_json::from_str(json)?;
        config.validate()?;
        Ok(config)
    }

    fn validate(&self) -> Result<(), ConfigError> {
        if self.games == 0 {
            return Err(ConfigError::NoGames);
        }
        Ok(())
    }

    /// 最终交给引擎的配置
    pub fn engine_config(&self) -> AiConfig {
        AiConfig {
            seed: self.seed.or(self.engine.seed),
            ..self.engine.clone()
        }
    }
}
