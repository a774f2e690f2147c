//! テスト用ユーティリティ関数
//!
//! 複数のテストモジュールで使用される共通のヘルパー関数を提供します。
#![cfg(test)]
#![allow(clippy::unwrap_used)]

use std::collections::HashMap;
use std::path::Path;

use serde_json::{
    Value,
    json,
};

use crate::config::{
    DEFAULT_LOCALE_FILE_PATTERN,
    LocaleFileMatcher,
};
use crate::locale::{
    LocaleStore,
    LocaleTree,
};

/// 翻訳ファイル `<code>.json` をディレクトリに書き出す
pub(crate) fn write_locale(dir: &Path, code: &str, document: &Value) {
    let content = serde_json::to_string_pretty(document).unwrap();
    std::fs::write(dir.join(format!("{code}.json")), content).unwrap();
}

/// デフォルトのパターンで `LocaleStore` を作成する（未ロード）
pub(crate) fn locale_store(dir: &Path) -> LocaleStore {
    LocaleStore::new(dir, LocaleFileMatcher::new(DEFAULT_LOCALE_FILE_PATTERN).unwrap())
}

/// ファイルを介さずにドキュメントからロード済みの `LocaleStore` を作成する
pub(crate) fn store_with(documents: &[(&str, Value)]) -> LocaleStore {
    let store = locale_store(Path::new("/nonexistent"));
    let trees: HashMap<String, LocaleTree> = documents
        .iter()
        .map(|(code, document)| ((*code).to_string(), LocaleTree::from_json(document).unwrap()))
        .collect();
    store.replace(trees);
    store
}

/// 英語の標準的なテスト用ドキュメント
pub(crate) fn english_document() -> Value {
    json!({
        "commands": {
            "admin": {
                "ban": {
                    "name": "ban",
                    "description": "Ban a player",
                    "options": {
                        "player": { "name": "player", "description": "Player to ban" },
                        "reason": { "name": "reason", "description": "Reason for the ban" }
                    }
                }
            },
            "settings": {
                "name": "settings",
                "description": "Bot settings",
                "subcommands": {
                    "language": { "name": "language", "description": "Change your language" }
                }
            }
        },
        "responses": {
            "errors": {
                "general": "An error occurred: {0}",
                "internal_error": "Internal error"
            },
            "server": {
                "players_online": "{0} of {1} players online",
                "uptime": "Uptime {0:D2}:{1:D2}"
            },
            "language": {
                "changed": "Language changed to {0}",
                "names": { "en": "English", "fr": "Français" }
            }
        },
        "embeds": {
            "colors": {
                "success": "0x00FF00",
                "error": "0xFF0000",
                "info": "0x0099FF",
                "warning": "FFAA00"
            },
            "footer": "Powered by the server bot"
        }
    })
}

/// フランス語のテスト用ドキュメント（一部のキーのみ）
pub(crate) fn french_document() -> Value {
    json!({
        "commands": {
            "admin": { "ban": { "name": "bannir", "description": "Bannir un joueur" } }
        },
        "responses": {
            "errors": { "general": "Une erreur est survenue : {0}" },
            "language": { "changed": "Langue changée en {0}" }
        },
        "embeds": { "colors": { "success": "0x00EE00" } }
    })
}
