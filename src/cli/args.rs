// src/cli/args.rs
use std::path::PathBuf;

use clap::{ArgAction, Parser, Subcommand, ValueHint};
use stair_ways_core::GridSpec;

use super::value_enum::{CliOutputFormat, CliStrategy};

/// Top-level CLI arguments parsed via clap.
#[derive(Parser, Debug)]
#[command(
    name = "stair_ways",
    version = crate::VERSION,
    about = "1〜m 段ずつ登るときの階段の登り方を数えるツール",
    long_about = "1 回に 1〜MAX_STEP 段ずつ進むとき、ちょうど STAIRS 段目に到達する手順（順序を区別）の総数を求めます。\n\
                  結果は任意精度整数で計算されるため、オーバーフローしません。"
)]
pub struct Args {
    #[command(subcommand)]
    pub command: Command,

    /// 出力フォーマット（未指定時は設定ファイル、なければ table）
    #[arg(long, value_enum, global = true, help_heading = "出力")]
    pub format: Option<CliOutputFormat>,

    /// 結果をファイルへ書き出す（未指定時は標準出力）
    #[arg(long, short = 'o', global = true, value_hint = ValueHint::FilePath, help_heading = "出力")]
    pub output: Option<PathBuf>,

    /// 設定ファイル (.json / .yaml / .yml)
    #[arg(long, global = true, value_hint = ValueHint::FilePath, help_heading = "設定")]
    pub config: Option<PathBuf>,

    /// ログを詳細にする（-v: info, -vv: debug, -vvv: trace）
    #[arg(short, long, action = ArgAction::Count, global = true, help_heading = "ログ")]
    pub verbose: u8,

    /// エラー以外のログを抑制
    #[arg(short, long, global = true, conflicts_with = "verbose", help_heading = "ログ")]
    pub quiet: bool,
}

#[derive(Subcommand, Debug, Clone, PartialEq, Eq)]
pub enum Command {
    /// STAIRS 段を 1〜MAX_STEP 段ずつ登る方法の数
    #[command(allow_negative_numbers = true)]
    Count {
        /// 階段の段数
        stairs: i64,
        /// 1 回に登れる最大段数
        max_step: i64,
        /// 計算方式（未指定時は設定ファイル、なければ fibonacci）
        #[arg(long, short, value_enum)]
        strategy: Option<CliStrategy>,
    },

    /// 0〜UP_TO 段それぞれの登り方の数を一覧表示
    #[command(allow_negative_numbers = true)]
    Sequence {
        /// 一覧の最大段数（この値を含む）
        up_to: i64,
        /// 1 回に登れる最大段数
        max_step: i64,
    },

    /// 既知の例題をすべての計算方式で検算
    Examples,

    /// 段数 × 最大段数の格子上で計算方式同士を突き合わせる
    Verify {
        /// 検証する最大段数（この値を含む）
        #[arg(long, default_value_t = GridSpec::DEFAULT_MAX_STAIRS.value())]
        max_stairs: u64,
        /// 検証する最大の MAX_STEP（この値を含む）
        #[arg(long, default_value_t = GridSpec::DEFAULT_MAX_STEP.get(), value_parser = clap::value_parser!(u64).range(1..))]
        max_step: u64,
    },
}
