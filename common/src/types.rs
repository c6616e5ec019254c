//! 共有型定義
//!
//! - DetectResponse / DetectErrorBody: 鼻紋認識サービスのレスポンスDTO
//! - Recognition: 検証済みの認識結果
//! - Passport / Vaccination: デジタルパスポート表示用データ

use serde::{Deserialize, Serialize};

/// 鼻紋認識サービスの成功レスポンス
///
/// 例: `{"success": true, "muzzleId": "MUZ-AB12CD", "confidence": 0.97}`
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct DetectResponse {
    pub success: bool,
    pub muzzle_id: Option<String>,
    pub confidence: Option<f64>,
}

/// 認識サービスのエラーレスポンスボディ
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct DetectErrorBody {
    pub detail: Option<String>,
}

/// 検証済みの認識結果
///
/// muzzle_idは不透明なトークンとして扱い、内部構造は解釈しない
#[derive(Debug, Clone, PartialEq)]
pub struct Recognition {
    pub muzzle_id: String,
    pub confidence: Option<f64>,
}

/// 家畜の種別
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum AnimalType {
    Cow,
    Buffalo,
}

impl AnimalType {
    pub fn as_str(&self) -> &'static str {
        match self {
            AnimalType::Cow => "cow",
            AnimalType::Buffalo => "buffalo",
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            AnimalType::Cow => "牛",
            AnimalType::Buffalo => "水牛",
        }
    }

    pub fn emoji(&self) -> &'static str {
        match self {
            AnimalType::Cow => "🐄",
            AnimalType::Buffalo => "🐃",
        }
    }
}

/// ワクチン接種記録
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Vaccination {
    pub name: String,
    pub date: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub next_due: Option<String>,
}

/// デジタルパスポート
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Passport {
    pub muzzle_id: String,
    pub animal_type: AnimalType,

    /// 表示用写真URL（Object URLまたは外部URL）
    pub photo_url: String,

    pub owner: String,
    pub location: String,
    pub birth_date: String,

    #[serde(default)]
    pub vaccinations: Vec<Vaccination>,

    #[serde(default)]
    pub health_records: Vec<String>,

    /// ブロックチェーン上のトランザクションハッシュ（未登録ならNone）
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub transaction_hash: Option<String>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_detect_response_deserialize() {
        let json = r#"{"success": true, "muzzleId": "MUZ-AB12CD", "confidence": 0.97}"#;
        let resp: DetectResponse = serde_json::from_str(json).expect("デシリアライズ失敗");
        assert!(resp.success);
        assert_eq!(resp.muzzle_id.as_deref(), Some("MUZ-AB12CD"));
        assert_eq!(resp.confidence, Some(0.97));
    }

    #[test]
    fn test_detect_response_missing_fields_default() {
        // フィールド欠落はデフォルト値で補完される
        let resp: DetectResponse = serde_json::from_str("{}").expect("デシリアライズ失敗");
        assert!(!resp.success);
        assert_eq!(resp.muzzle_id, None);
        assert_eq!(resp.confidence, None);
    }

    #[test]
    fn test_detect_error_body_deserialize() {
        let json = r#"{"detail": "model unavailable"}"#;
        let body: DetectErrorBody = serde_json::from_str(json).expect("デシリアライズ失敗");
        assert_eq!(body.detail.as_deref(), Some("model unavailable"));
    }

    #[test]
    fn test_animal_type_serde_lowercase() {
        let json = serde_json::to_string(&AnimalType::Cow).expect("シリアライズ失敗");
        assert_eq!(json, r#""cow""#);
        let back: AnimalType = serde_json::from_str(r#""buffalo""#).expect("デシリアライズ失敗");
        assert_eq!(back, AnimalType::Buffalo);
    }

    #[test]
    fn test_animal_type_labels() {
        assert_eq!(AnimalType::Cow.as_str(), "cow");
        assert_eq!(AnimalType::Cow.label(), "牛");
        assert_eq!(AnimalType::Buffalo.emoji(), "🐃");
    }

    #[test]
    fn test_vaccination_serde_camel_case() {
        let vac = Vaccination {
            name: "口蹄疫ワクチン".to_string(),
            date: "2024-01-10".to_string(),
            next_due: Some("2024-07-10".to_string()),
        };
        let json = serde_json::to_string(&vac).expect("シリアライズ失敗");
        assert!(json.contains("\"nextDue\""));

        let back: Vaccination = serde_json::from_str(&json).expect("デシリアライズ失敗");
        assert_eq!(back, vac);
    }

    #[test]
    fn test_vaccination_next_due_omitted() {
        let vac = Vaccination {
            name: "炭疽".to_string(),
            date: "2023-11-20".to_string(),
            next_due: None,
        };
        let json = serde_json::to_string(&vac).expect("シリアライズ失敗");
        assert!(!json.contains("nextDue"));
    }

    #[test]
    fn test_passport_serde_round_trip() {
        let passport = Passport {
            muzzle_id: "MUZ-ABC123XYZ".to_string(),
            animal_type: AnimalType::Cow,
            photo_url: "blob:http://localhost/xyz".to_string(),
            owner: "山田牧場".to_string(),
            location: "北海道 十勝".to_string(),
            birth_date: "2022年3月15日".to_string(),
            vaccinations: vec![],
            health_records: vec!["定期健診 2024年2月: 良好".to_string()],
            transaction_hash: Some("5KJp4w8XvPz9mNqR2sT".to_string()),
        };
        let json = serde_json::to_string(&passport).expect("シリアライズ失敗");
        assert!(json.contains("\"muzzleId\""));
        assert!(json.contains("\"transactionHash\""));

        let back: Passport = serde_json::from_str(&json).expect("デシリアライズ失敗");
        assert_eq!(back, passport);
    }
}
