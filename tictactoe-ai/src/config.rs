//! AI 配置
//!
//! 中等难度的噪声概率与位置权重是刻意调出的“可被击败”手感，
//! 保持为常量，不做推导。

use serde::{Deserialize, Serialize};
use tracing::warn;

/// 中等难度：直接随机落子的概率
pub const HEURISTIC_NOISE_PROBABILITY: f64 = 0.25;

/// 中心格权重
pub const CENTER_WEIGHT: usize = 5;

/// 角格权重
pub const CORNER_WEIGHT: usize = 3;

/// 边格权重
pub const EDGE_WEIGHT: usize = 1;

/// 加权随机时各类格子的重复次数
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct PositionWeights {
    pub center: usize,
    pub corner: usize,
    pub edge: usize,
}

impl Default for PositionWeights {
    fn default() -> Self {
        Self {
            center: CENTER_WEIGHT,
            corner: CORNER_WEIGHT,
            edge: EDGE_WEIGHT,
        }
    }
}

/// AI 配置
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct AiConfig {
    /// 中等难度的噪声概率，取值 [0, 1]
    pub noise_probability: f64,
    pub weights: PositionWeights,
    /// 困难难度是否缓存局面分数
    pub use_transposition: bool,
    /// 随机数种子，None 时使用系统熵
    pub seed: Option<u64>,
}

impl AiConfig {
    /// 修正越界的配置值
    pub fn normalized(mut self) -> Self {
        if !(0.0..=1.0).contains(&self.noise_probability) {
            let clamped = if self.noise_probability.is_nan() {
                HEURISTIC_NOISE_PROBABILITY
            } else {
                self.noise_probability.clamp(0.0, 1.0)
            };
            warn!(
                "noise_probability {} out of range, using {}",
                self.noise_probability, clamped
            );
            self.noise_probability = clamped;
        }
        self
    }
}

impl Default for AiConfig {
    fn default() -> Self {
        Self {
            noise_probability: HEURISTIC_NOISE_PROBABILITY,
            weights: PositionWeights::default(),
            use_transposition: false,
            seed: None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_constants() {
        let config = AiConfig::default();
        assert_eq!(config.noise_probability, 0.25);
        assert_eq!(config.weights, PositionWeights { center: 5, corner: 3, edge: 1 });
        assert!(!config.use_transposition);
        assert_eq!(config.seed, None);
    }

    #[test]
    fn test_partial_json_uses_defaults() {
        let config: AiConfig = serde_json::from_str(r#"{ "seed": 7 }"#).unwrap();
        assert_eq!(config.seed, Some(7));
        assert_eq!(config.noise_probability, HEURISTIC_NOISE_PROBABILITY);
        assert_eq!(config.weights, PositionWeights::default());
    }

    #[test]
    fn test_normalized_clamps_noise() {
        let config = AiConfig {
            noise_probability: 1.5,
            ..AiConfig::default()
        };
        assert_eq!(config.normalized().noise_probability, 1.0);

        let config = AiConfig {
            noise_probability: -0.1,
            ..AiConfig::default()
        };
        assert_eq!(config.normalized().noise_probability, 0.0);
    }
}
