//! アップロードファイルの検証

use crate::error::UploadError;

/// アップロード可能な最大バイト数（10MiB）
pub const MAX_UPLOAD_BYTES: u64 = 10 * 1024 * 1024;

/// 画像と判定するMIMEタイプのプレフィックス
const IMAGE_MIME_PREFIX: &str = "image/";

/// 選択されたファイルを検証する
///
/// チェックは順に評価し、最初の違反で打ち切る:
/// 1. MIMEタイプが画像であること
/// 2. サイズが上限以下であること
///
/// # Arguments
/// * `mime_type` - ファイルの宣言MIMEタイプ（例: "image/jpeg"）
/// * `size` - ファイルサイズ（バイト）
pub fn validate(mime_type: &str, size: u64) -> Result<(), UploadError> {
    if !mime_type.starts_with(IMAGE_MIME_PREFIX) {
        return Err(UploadError::NotAnImage);
    }
    if size > MAX_UPLOAD_BYTES {
        return Err(UploadError::TooLarge);
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_validate_jpeg_ok() {
        assert_eq!(validate("image/jpeg", 2 * 1024 * 1024), Ok(()));
    }

    #[test]
    fn test_validate_png_ok() {
        assert_eq!(validate("image/png", 1024), Ok(()));
    }

    #[test]
    fn test_validate_webp_ok() {
        assert_eq!(validate("image/webp", 0), Ok(()));
    }

    #[test]
    fn test_validate_text_rejected() {
        assert_eq!(validate("text/plain", 10), Err(UploadError::NotAnImage));
    }

    #[test]
    fn test_validate_pdf_rejected() {
        assert_eq!(
            validate("application/pdf", 10),
            Err(UploadError::NotAnImage)
        );
    }

    #[test]
    fn test_validate_empty_mime_rejected() {
        assert_eq!(validate("", 10), Err(UploadError::NotAnImage));
    }

    #[test]
    fn test_validate_size_boundary_ok() {
        // ちょうど10MiBは許容
        assert_eq!(validate("image/jpeg", MAX_UPLOAD_BYTES), Ok(()));
    }

    #[test]
    fn test_validate_size_over_rejected() {
        assert_eq!(
            validate("image/png", MAX_UPLOAD_BYTES + 1),
            Err(UploadError::TooLarge)
        );
    }

    #[test]
    fn test_validate_mime_checked_before_size() {
        // 両方違反している場合はMIMEタイプのエラーが優先
        assert_eq!(
            validate("text/plain", MAX_UPLOAD_BYTES + 1),
            Err(UploadError::NotAnImage)
        );
    }
}
