// src/cli/value_enum.rs
use clap::ValueEnum;
use stair_ways_core::Strategy;

use crate::options::OutputFormat;

#[derive(Clone, Copy, Debug, PartialEq, Eq, ValueEnum)]
#[value(rename_all = "lowercase")]
pub enum CliOutputFormat {
    Table,
    Csv,
    Json,
    Jsonl,
    Yaml,
}

impl From<CliOutputFormat> for OutputFormat {
    fn from(value: CliOutputFormat) -> Self {
        match value {
            CliOutputFormat::Table => OutputFormat::Table,
            CliOutputFormat::Csv => OutputFormat::Csv,
            CliOutputFormat::Json => OutputFormat::Json,
            CliOutputFormat::Jsonl => OutputFormat::Jsonl,
            CliOutputFormat::Yaml => OutputFormat::Yaml,
        }
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, ValueEnum)]
#[value(rename_all = "lowercase")]
pub enum CliStrategy {
    /// スライディングウィンドウによる反復計算
    #[value(alias = "fib")]
    Fibonacci,
    /// 素朴な再帰（指数時間）
    Recursive,
    /// メモ化再帰
    #[value(alias = "memo")]
    Memoized,
}

impl From<CliStrategy> for Strategy {
    fn from(value: CliStrategy) -> Self {
        match value {
            CliStrategy::Fibonacci => Strategy::Fibonacci,
            CliStrategy::Recursive => Strategy::Recursive,
            CliStrategy::Memoized => Strategy::Memoized,
        }
    }
}
