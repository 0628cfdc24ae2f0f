//! 搜索算法对比
//!
//! 对同一局面分别运行各算法，记录选点、分值、节点数和耗时

use std::time::{Duration, Instant};

use serde::{Deserialize, Serialize};
use tracing::info;
use ttt_ai::{AiConfig, AiEngine, Algorithm, SearchStats};
use ttt_rules::{BoardText, Mark, Move, Score};

use crate::config::{BenchConfig, ConfigError};

/// 单个算法的对比结果
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AlgorithmResult {
    pub algorithm: Algorithm,
    pub best_move: Option<Move>,
    pub score: Score,
    pub stats: SearchStats,
    /// 平均耗时（微秒）
    pub mean_elapsed_us: f64,
}

/// 对比报告
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ComparisonReport {
    /// 局面（文本格式）
    pub board: String,
    pub ai_mark: Mark,
    pub repeats: u32,
    pub results: Vec<AlgorithmResult>,
}

impl ComparisonReport {
    /// 所有算法是否选择了相同的走法和分值
    pub fn agree(&self) -> bool {
        self.results.windows(2).all(|pair| {
            pair[0].best_move == pair[1].best_move && pair[0].score == pair[1].score
        })
    }

    /// 获取指定算法的结果
    pub fn result(&self, algorithm: Algorithm) -> Option<&AlgorithmResult> {
        self.results.iter().find(|r| r.algorithm == algorithm)
    }

    /// 生成文本表格
    pub fn render_table(&self) -> String {
        let mut out = format!(
            "{:<12} {:>8} {:>6} {:>10} {:>10} {:>8} {:>12}\n",
            "algorithm", "move", "score", "nodes", "leaves", "cutoffs", "time(us)"
        );
        for r in &self.results {
            let mv = r
                .best_move
                .map(|m| m.to_string())
                .unwrap_or_else(|| "-".to_string());
            out.push_str(&format!(
                "{:<12} {:>8} {:>6} {:>10} {:>10} {:>8} {:>12.1}\n",
                r.algorithm.name(),
                mv,
                r.score,
                r.stats.nodes,
                r.stats.leaves,
                r.stats.cutoffs,
                r.mean_elapsed_us
            ));
        }
        out
    }

    /// 导出为 JSON 字符串
    pub fn to_json(&self) -> serde_json::Result<String> {
        serde_json::to_string_pretty(self)
    }
}

/// 按配置运行对比
pub fn compare(config: &BenchConfig) -> Result<ComparisonReport, ConfigError> {
    config.validate()?;
    let board = config.parse_board()?;
    let context = config.context();

    let mut results = Vec::with_capacity(config.algorithms.len());
    for &algorithm in &config.algorithms {
        let mut engine = AiEngine::new(AiConfig::new(algorithm, context));

        let mut total = Duration::ZERO;
        let mut outcome = None;
        for _ in 0..config.repeats {
            let start = Instant::now();
            let current = engine.best_move(&board);
            total += start.elapsed();
            outcome = Some(current);
        }
        let Some(outcome) = outcome else {
            return Err(ConfigError::ZeroRepeats);
        };

        let mean_elapsed_us = total.as_secs_f64() * 1_000_000.0 / config.repeats as f64;
        info!(
            "{}: move={:?} score={} nodes={} elapsed={:.1}us",
            algorithm.name(),
            outcome.best_move,
            outcome.score,
            engine.stats().nodes,
            mean_elapsed_us
        );

        results.push(AlgorithmResult {
            algorithm,
            best_move: outcome.best_move,
            score: outcome.score,
            stats: engine.stats(),
            mean_elapsed_us,
        });
    }

    Ok(ComparisonReport {
        board: BoardText::to_string(&board),
        ai_mark: config.ai_mark,
        repeats: config.repeats,
        results,
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_compare_default_scenario() {
        let report = compare(&BenchConfig::default()).unwrap();
        assert_eq!(report.results.len(), 2);
        assert!(report.agree());

        let plain = report.result(Algorithm::Minimax).unwrap();
        let pruned = report.result(Algorithm::AlphaBeta).unwrap();
        assert_eq!(plain.best_move, Move::new(0, 2));
        assert!(pruned.stats.nodes < plain.stats.nodes);
    }

    #[test]
    fn test_compare_full_board() {
        let config = BenchConfig {
            board: "XOX/XOO/OXX".to_string(),
            ..Default::default()
        };
        let report = compare(&config).unwrap();
        assert!(report.agree());
        assert!(report.results.iter().all(|r| r.best_move.is_none() && r.score == 0));
        assert!(report.render_table().contains(" - "));
    }

    #[test]
    fn test_report_json() {
        let config = BenchConfig {
            algorithms: vec![Algorithm::AlphaBeta],
            repeats: 2,
            ..Default::default()
        };
        let report = compare(&config).unwrap();
        let json = report.to_json().unwrap();
        let decoded: ComparisonReport = serde_json::from_str(&json).unwrap();
        assert_eq!(decoded.results[0].best_move, report.results[0].best_move);
        assert_eq!(decoded.repeats, 2);
        assert!(report.render_table().contains("alpha-beta"));
    }

    #[test]
    fn test_render_table_rows() {
        let report = compare(&BenchConfig::default()).unwrap();
        let table = report.render_table();
        let lines: Vec<&str> = table.lines().collect();

        // 表头 + 每个算法一行
        assert_eq!(lines.len(), 1 + report.results.len());
        assert!(lines[0].starts_with("algorithm"));
        assert!(lines[1].starts_with("minimax"));
        assert!(lines[1].contains("(0, 2)"));
        assert!(lines[2].starts_with("alpha-beta"));
    }

    #[test]
    fn test_compare_invalid_config() {
        let config = BenchConfig {
            board: "XX/../..".to_string(),
            ..Default::default()
        };
        assert!(compare(&config).is_err());
    }
}
