//! 認識サービスレスポンスの解釈
//!
//! トランスポート層(web-wasm)が受信したレスポンスを
//! 検証済みのRecognitionへ変換する

use crate::error::{Error, Result};
use crate::types::{DetectErrorBody, DetectResponse, Recognition};

/// 解析失敗時の汎用フォールバックメッセージ
pub const FALLBACK_ANALYZE_ERROR: &str = "鼻紋の解析に失敗しました。もう一度お試しください";

/// 成功レスポンスを検証しRecognitionへ変換する
///
/// successフラグが立っていない、muzzleIdが欠落または空の場合はエラー
///
/// # Arguments
/// * `resp` - デコード済みのレスポンスDTO
///
/// # Returns
/// * `Ok(Recognition)` - 検証済みの認識結果
/// * `Err` - レスポンスが契約を満たさない場合
pub fn recognition_from_response(resp: DetectResponse) -> Result<Recognition> {
    if !resp.success {
        return Err(Error::Parse("successフラグが立っていません".into()));
    }
    match resp.muzzle_id {
        Some(id) if !id.is_empty() => Ok(Recognition {
            muzzle_id: id,
            confidence: resp.confidence,
        }),
        _ => Err(Error::Parse("muzzleIdがありません".into())),
    }
}

/// エラーレスポンスボディからdetailメッセージを抽出する
///
/// JSONでない、detailが無い、空白のみの場合はNone
pub fn parse_error_detail(body: &str) -> Option<String> {
    serde_json::from_str::<DetectErrorBody>(body)
        .ok()
        .and_then(|b| b.detail)
        .filter(|d| !d.trim().is_empty())
}

#[cfg(test)]
mod tests {
    use super::*;

    fn response(success: bool, muzzle_id: Option<&str>) -> DetectResponse {
        DetectResponse {
            success,
            muzzle_id: muzzle_id.map(str::to_string),
            confidence: None,
        }
    }

    #[test]
    fn test_recognition_success() {
        let resp = DetectResponse {
            success: true,
            muzzle_id: Some("MUZ-AB12CD".to_string()),
            confidence: Some(0.97),
        };
        let rec = recognition_from_response(resp).expect("変換失敗");
        assert_eq!(rec.muzzle_id, "MUZ-AB12CD");
        assert_eq!(rec.confidence, Some(0.97));
    }

    #[test]
    fn test_recognition_confidence_optional() {
        let rec = recognition_from_response(response(true, Some("MUZ-X"))).expect("変換失敗");
        assert_eq!(rec.confidence, None);
    }

    #[test]
    fn test_recognition_opaque_id_preserved() {
        // IDは不透明トークン: 形式が慣例と違っても解釈せずそのまま返す
        let rec = recognition_from_response(response(true, Some("weird:id/42"))).expect("変換失敗");
        assert_eq!(rec.muzzle_id, "weird:id/42");
    }

    #[test]
    fn test_recognition_success_false_rejected() {
        assert!(recognition_from_response(response(false, Some("MUZ-X"))).is_err());
    }

    #[test]
    fn test_recognition_missing_id_rejected() {
        assert!(recognition_from_response(response(true, None)).is_err());
    }

    #[test]
    fn test_recognition_empty_id_rejected() {
        assert!(recognition_from_response(response(true, Some(""))).is_err());
    }

    #[test]
    fn test_parse_error_detail_present() {
        let body = r#"{"detail": "model unavailable"}"#;
        assert_eq!(
            parse_error_detail(body),
            Some("model unavailable".to_string())
        );
    }

    #[test]
    fn test_parse_error_detail_missing() {
        assert_eq!(parse_error_detail(r#"{"code": 500}"#), None);
    }

    #[test]
    fn test_parse_error_detail_blank() {
        assert_eq!(parse_error_detail(r#"{"detail": "  "}"#), None);
    }

    #[test]
    fn test_parse_error_detail_not_json() {
        assert_eq!(parse_error_detail("Internal Server Error"), None);
        assert_eq!(parse_error_detail(""), None);
    }
}
