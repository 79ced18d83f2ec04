//! テスト用ユーティリティ関数
//!
//! 複数のテストモジュールで使用される共通のヘルパー関数を提供します。
#![cfg(test)]

use crate::types::{
    Messages,
    TranslationTable,
};

/// キーと値のペアから `Messages` を作成する
pub(crate) fn messages(entries: &[(&str, &str)]) -> Messages {
    entries.iter().map(|(key, text)| ((*key).to_string(), (*text).to_string())).collect()
}

/// テスト用の `TranslationTable` を作成する
///
/// # Arguments
/// * `languages` - 言語コード（例: "en", "ja"）とキー・値のペア
pub(crate) fn create_table(languages: &[(&str, &[(&str, &str)])]) -> TranslationTable {
    languages.iter().map(|(code, entries)| ((*code).to_string(), messages(entries))).collect()
}
