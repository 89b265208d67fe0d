/// 验证图片内容的魔术字节是否与扩展名匹配
///
/// # Arguments
/// * `data` - 文件内容的前几个字节
/// * `extension` - 文件扩展名（包含点号，如 ".png"）
///
/// 非图片扩展名一律拒绝。
pub fn validate_magic_bytes(data: &[u8], extension: &str) -> bool {
    if data.is_empty() {
        return false;
    }

    match extension.to_lowercase().as_str() {
        ".png" => data.starts_with(&[0x89, 0x50, 0x4E, 0x47, 0x0D, 0x0A, 0x1A, 0x0A]),
        ".jpg" | ".jpeg" => data.starts_with(&[0xFF, 0xD8, 0xFF]),
        ".gif" => data.starts_with(b"GIF87a") || data.starts_with(b"GIF89a"),
        ".webp" => data.len() >= 12 && &data[0..4] == b"RIFF" && &data[8..12] == b"WEBP",
        ".bmp" => data.starts_with(b"BM"),
        _ => false,
    }
}

/// 根据魔术字节识别图片格式，返回规范扩展名
pub fn detect_image_extension(data: &[u8]) -> Option<&'static str> {
    [".png", ".jpg", ".gif", ".webp", ".bmp"]
        .into_iter()
        .find(|ext| validate_magic_bytes(data, ext))
}

/// 图片扩展名对应的 MIME 类型
pub fn image_content_type(extension: &str) -> &'static str {
    match extension.to_lowercase().as_str() {
        ".png" => "image/png",
        ".jpg" | ".jpeg" => "image/jpeg",
        ".gif" => "image/gif",
        ".webp" => "image/webp",
        ".bmp" => "image/bmp",
        _ => "application/octet-stream",
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const PNG: [u8; 8] = [0x89, 0x50, 0x4E, 0x47, 0x0D, 0x0A, 0x1A, 0x0A];

    #[test]
    fn test_png_magic() {
        assert!(validate_magic_bytes(&PNG, ".png"));
        assert!(validate_magic_bytes(&PNG, ".PNG"));
        assert!(!validate_magic_bytes(&PNG, ".jpg"));
    }

    #[test]
    fn test_jpeg_magic() {
        let jpeg_header = [0xFF, 0xD8, 0xFF, 0xE0];
        assert!(validate_magic_bytes(&jpeg_header, ".jpg"));
        assert!(validate_magic_bytes(&jpeg_header, ".jpeg"));
        assert_eq!(detect_image_extension(&jpeg_header), Some(".jpg"));
    }

    #[test]
    fn test_webp_magic() {
        let webp = b"RIFF\x00\x00\x00\x00WEBPVP8 ";
        assert!(validate_magic_bytes(webp, ".webp"));
        assert!(!validate_magic_bytes(b"RIFF", ".webp"));
    }

    #[test]
    fn test_non_images_rejected() {
        assert!(!validate_magic_bytes(b"%PDF-1.4", ".pdf"));
        assert!(!validate_magic_bytes(b"Hello", ".txt"));
        assert_eq!(detect_image_extension(b"%PDF-1.4"), None);
    }

    #[test]
    fn test_empty_data() {
        assert!(!validate_magic_bytes(&[], ".png"));
        assert_eq!(detect_image_extension(&[]), None);
    }

    #[test]
    fn test_content_type() {
        assert_eq!(image_content_type(".JPEG"), "image/jpeg");
        assert_eq!(image_content_type(".exe"), "application/octet-stream");
    }
}
