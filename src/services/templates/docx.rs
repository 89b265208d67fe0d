//! 最小化的 .docx（Office Open XML）生成
//!
//! 每个非空行生成一个段落：含冒号且少于 100 个字符的行为二级标题，
//! 其余为 12pt 正文。

use std::io::{Cursor, Write};

use zip::CompressionMethod;
use zip::write::SimpleFileOptions;

use crate::errors::{GestaoError, Result};

/// 标题判定的长度上限（字符数）
const HEADING_MAX_CHARS: usize = 100;

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Paragraph {
    Heading(String),
    Body(String),
}

const CONTENT_TYPES: &str = r#"<?xml version="1.0" encoding="UTF-8" standalone="yes"?>
<Types xmlns="http://schemas.openxmlformats.org/package/2006/content-types"><Default Extension="rels" ContentType="application/vnd.openxmlformats-package.relationships+xml"/><Default Extension="xml" ContentType="application/xml"/><Override PartName="/word/document.xml" ContentType="application/vnd.openxmlformats-officedocument.wordprocessingml.document.main+xml"/><Override PartName="/word/styles.xml" ContentType="application/vnd.openxmlformats-officedocument.wordprocessingml.styles+xml"/></Types>"#;

const ROOT_RELS: &str = r#"<?xml version="1.0" encoding="UTF-8" standalone="yes"?>
<Relationships xmlns="http://schemas.openxmlformats.org/package/2006/relationships"><Relationship Id="rId1" Type="http://schemas.openxmlformats.org/officeDocument/2006/relationships/officeDocument" Target="word/document.xml"/></Relationships>"#;

const DOCUMENT_RELS: &str = r#"<?xml version="1.0" encoding="UTF-8" standalone="yes"?>
<Relationships xmlns="http://schemas.openxmlformats.org/package/2006/relationships"><Relationship Id="rId1" Type="http://schemas.openxmlformats.org/officeDocument/2006/relationships/styles" Target="styles.xml"/></Relationships>"#;

const STYLES: &str = r#"<?xml version="1.0" encoding="UTF-8" standalone="yes"?>
<w:styles xmlns:w="http://schemas.openxmlformats.org/wordprocessingml/2006/main"><w:style w:type="paragraph" w:default="1" w:styleId="Normal"><w:name w:val="Normal"/></w:style><w:style w:type="paragraph" w:styleId="Heading2"><w:name w:val="heading 2"/><w:basedOn w:val="Normal"/><w:next w:val="Normal"/><w:qFormat/><w:pPr><w:keepNext/><w:outlineLvl w:val="1"/></w:pPr><w:rPr><w:b/><w:sz w:val="26"/></w:rPr></w:style></w:styles>"#;

/// 将文本拆分为段落，丢弃空行
pub fn paragraphs(conteudo: &str) -> Vec<Paragraph> {
    conteudo
        .split('\n')
        .filter(|line| !line.trim().is_empty())
        .map(|line| {
            if line.contains(':') && line.chars().count() < HEADING_MAX_CHARS {
                Paragraph::Heading(line.to_string())
            } else {
                Paragraph::Body(line.to_string())
            }
        })
        .collect()
}

fn escape_xml(text: &str) -> String {
    let mut out = String::with_capacity(text.len());
    for c in text.chars() {
        match c {
            '&' => out.push_str("&amp;"),
            '<' => out.push_str("&lt;"),
            '>' => out.push_str("&gt;"),
            '"' => out.push_str("&quot;"),
            '\'' => out.push_str("&apos;"),
            '\r' => {}
            _ => out.push(c),
        }
    }
    out
}

fn document_xml(paragraphs: &[Paragraph]) -> String {
    let mut body = String::new();
    for paragraph in paragraphs {
        match paragraph {
            Paragraph::Heading(text) => body.push_str(&format!(
                r#"<w:p><w:pPr><w:pStyle w:val="Heading2"/><w:spacing w:before="200" w:after="100"/></w:pPr><w:r><w:t xml:space="preserve">{}</w:t></w:r></w:p>"#,
                escape_xml(text)
            )),
            Paragraph::Body(text) => body.push_str(&format!(
                r#"<w:p><w:pPr><w:spacing w:after="100"/></w:pPr><w:r><w:rPr><w:sz w:val="24"/></w:rPr><w:t xml:space="preserve">{}</w:t></w:r></w:p>"#,
                escape_xml(text)
            )),
        }
    }

    format!(
        r#"<?xml version="1.0" encoding="UTF-8" standalone="yes"?>
<w:document xmlns:w="http://schemas.openxmlformats.org/wordprocessingml/2006/main"><w:body>{body}<w:sectPr/></w:body></w:document>"#
    )
}

/// 生成 .docx 字节
pub fn render_docx(conteudo: &str) -> Result<Vec<u8>> {
    let document = document_xml(&paragraphs(conteudo));

    let mut writer = zip::ZipWriter::new(Cursor::new(Vec::new()));
    let options = SimpleFileOptions::default().compression_method(CompressionMethod::Deflated);

    let parts: [(&str, &str); 5] = [
        ("[Content_Types].xml", CONTENT_TYPES),
        ("_rels/.rels", ROOT_RELS),
        ("word/_rels/document.xml.rels", DOCUMENT_RELS),
        ("word/styles.xml", STYLES),
        ("word/document.xml", &document),
    ];

    for (name, content) in parts {
        writer
            .start_file(name, options)
            .map_err(|e| GestaoError::file_operation(format!("DOCX 写入失败: {e}")))?;
        writer.write_all(content.as_bytes())?;
    }

    let cursor = writer
        .finish()
        .map_err(|e| GestaoError::file_operation(format!("DOCX 写入失败: {e}")))?;
    Ok(cursor.into_inner())
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Read;

    #[test]
    fn test_paragraph_classification() {
        let long_line = format!("Cláusula: {}", "x".repeat(120));
        let text = format!("CONTRATO\n\nLocador: Ana\n   \n{long_line}\nTexto corrido");

        assert_eq!(
            paragraphs(&text),
            vec![
                Paragraph::Body("CONTRATO".to_string()),
                Paragraph::Heading("Locador: Ana".to_string()),
                Paragraph::Body(long_line),
                Paragraph::Body("Texto corrido".to_string()),
            ]
        );
    }

    #[test]
    fn test_escape_xml() {
        assert_eq!(escape_xml("a < b & \"c\""), "a &lt; b &amp; &quot;c&quot;");
    }

    #[test]
    fn test_render_docx_is_readable_zip() {
        let bytes = render_docx("Locatário: João & Filhos\nCorpo do contrato").unwrap();
        assert!(bytes.starts_with(&[0x50, 0x4B, 0x03, 0x04]));

        let mut archive = zip::ZipArchive::new(Cursor::new(bytes)).unwrap();
        assert!(archive.by_name("[Content_Types].xml").is_ok());

        let mut document = String::new();
        archive
            .by_name("word/document.xml")
            .unwrap()
            .read_to_string(&mut document)
            .unwrap();

        assert!(document.contains(r#"<w:pStyle w:val="Heading2"/>"#));
        assert!(document.contains("Locatário: João &amp; Filhos"));
        assert!(document.contains(r#"<w:sz w:val="24"/>"#));
        assert!(document.contains("Corpo do contrato"));
    }
}
