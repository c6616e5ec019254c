//! エラー型定義

use thiserror::Error;

/// 共通エラー型（内部処理用）
#[derive(Error, Debug)]
pub enum Error {
    #[error("Parse error: {0}")]
    Parse(String),
}

/// Result型エイリアス
pub type Result<T> = std::result::Result<T, Error>;

/// アップロードワークフローのエラー
///
/// Displayがそのままユーザー向けメッセージになる
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum UploadError {
    /// 画像以外のファイルが選択された
    #[error("画像ファイルを選択してください（JPG・PNG・WEBP）")]
    NotAnImage,

    /// サイズ上限超過
    #[error("ファイルサイズは10MB以下にしてください")]
    TooLarge,

    /// 検証は通ったがプレビューのデコードに失敗した
    #[error("画像を読み込めませんでした。別のファイルをお試しください")]
    PreviewDecode,

    /// ネットワーク障害またはサーバーエラー
    #[error("{0}")]
    Server(String),

    /// レスポンスは受信したが内容が不正
    #[error("サーバーから不正な応答を受信しました")]
    MalformedResponse,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_display_parse() {
        let error = Error::Parse("muzzleId missing".to_string());
        let display = format!("{}", error);
        assert_eq!(display, "Parse error: muzzleId missing");
    }

    #[test]
    fn test_upload_error_display_not_an_image() {
        let display = format!("{}", UploadError::NotAnImage);
        assert!(display.contains("画像ファイル"));
    }

    #[test]
    fn test_upload_error_display_too_large() {
        let display = format!("{}", UploadError::TooLarge);
        assert!(display.contains("10MB"));
    }

    #[test]
    fn test_upload_error_display_server_passthrough() {
        // サーバー由来のメッセージはそのまま表示する
        let error = UploadError::Server("model unavailable".to_string());
        assert_eq!(format!("{}", error), "model unavailable");
    }

    #[test]
    fn test_upload_error_display_malformed() {
        let display = format!("{}", UploadError::MalformedResponse);
        assert!(display.contains("不正な応答"));
    }

    #[test]
    fn test_upload_error_eq() {
        assert_eq!(UploadError::NotAnImage, UploadError::NotAnImage);
        assert_ne!(UploadError::NotAnImage, UploadError::TooLarge);
        assert_eq!(
            UploadError::Server("a".to_string()),
            UploadError::Server("a".to_string())
        );
    }
}
