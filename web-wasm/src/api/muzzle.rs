//! 鼻紋認識API連携
//!
//! 画像ファイルをmultipartで送信し、認識結果を受け取る。
//! 失敗はすべてUploadErrorへ収束させ、呼び出し側は
//! AnalysisFailedイベントとして状態機械へ渡すだけでよい。

use livestock_passport_common::{
    parse_error_detail, recognition_from_response, DetectResponse, Recognition, UploadError,
    FALLBACK_ANALYZE_ERROR,
};
use wasm_bindgen::prelude::*;
use wasm_bindgen_futures::JsFuture;
use web_sys::{File, FormData, Request, RequestInit, RequestMode, Response};

/// バックエンドURL（デプロイ時はここを変更する）
const API_BASE_URL: &str = "http://localhost:8080";

/// 認識エンドポイントのパス
const DETECT_PATH: &str = "/muzzle-detect";

/// multipartの画像フィールド名（バックエンドの契約に合わせる）
const IMAGE_FIELD: &str = "image";

fn detect_url() -> String {
    format!("{}{}", API_BASE_URL, DETECT_PATH)
}

/// 画像をPOSTしてResponseを得る（トランスポート層）
async fn post_image(url: &str, file: &File) -> Result<Response, JsValue> {
    let form = FormData::new()?;
    form.append_with_blob_and_filename(IMAGE_FIELD, file, &file.name())?;

    let mut opts = RequestInit::new();
    opts.method("POST");
    opts.mode(RequestMode::Cors);
    // multipartのContent-Type（boundary付き）はブラウザが設定する
    opts.body(Some(form.as_ref()));

    let request = Request::new_with_str_and_init(url, &opts)?;

    let window = web_sys::window().unwrap();
    let resp_value = JsFuture::from(window.fetch_with_request(&request)).await?;
    resp_value.dyn_into()
}

/// レスポンスのテキストボディを読む（読めなければNone）
async fn response_text(resp: &Response) -> Option<String> {
    let promise = resp.text().ok()?;
    let value = JsFuture::from(promise).await.ok()?;
    value.as_string()
}

/// 鼻紋認識を実行する
///
/// # Returns
/// * `Ok(Recognition)` - 認識されたID（と信頼度）
/// * `Err(UploadError::Server)` - ネットワーク障害または非2xx応答。
///   メッセージはサーバーのdetailがあればそれ、なければフォールバック
/// * `Err(UploadError::MalformedResponse)` - 2xxだがペイロードが契約違反
pub async fn detect_muzzle(file: &File) -> Result<Recognition, UploadError> {
    let resp = post_image(&detect_url(), file)
        .await
        .map_err(|_| UploadError::Server(FALLBACK_ANALYZE_ERROR.to_string()))?;

    if !resp.ok() {
        let message = match response_text(&resp).await.as_deref().and_then(parse_error_detail) {
            Some(detail) => detail,
            None => format!("サーバーエラー: {}", resp.status()),
        };
        return Err(UploadError::Server(message));
    }

    let json = JsFuture::from(resp.json().map_err(|_| UploadError::MalformedResponse)?)
        .await
        .map_err(|_| UploadError::MalformedResponse)?;
    let parsed: DetectResponse =
        serde_wasm_bindgen::from_value(json).map_err(|_| UploadError::MalformedResponse)?;

    recognition_from_response(parsed).map_err(|_| UploadError::MalformedResponse)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_detect_url() {
        assert_eq!(detect_url(), "http://localhost:8080/muzzle-detect");
    }
}
