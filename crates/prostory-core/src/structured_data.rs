// ── JSON-LD ──

use serde::Serialize;

/// Render `data` as a `<script type="application/ld+json">` element.
///
/// `</` inside string values is written as `<\/` so the payload cannot
/// terminate the script element early.
pub fn json_ld_script<T: Serialize + ?Sized>(data: &T) -> Result<String, serde_json::Error> {
    let json = serde_json::to_string(data)?.replace("</", "<\\/");
    Ok(format!(r#"<script type="application/ld+json">{json}</script>"#))
}
