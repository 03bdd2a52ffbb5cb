use base64::{prelude::BASE64_STANDARD, Engine};
use qrcode::{render::svg, QrCode};

///
/// Renders a ticket lookup url into a scannable code,
/// returned as a data url ready for an img tag.
///
/// Pure function of the url.
///
pub fn render_qr_data_url(url: &str) -> Result<String, qrcode::types::QrError> {
    let code = QrCode::new(url.as_bytes())?;

    let svg = code
        .render::<svg::Color>()
        .min_dimensions(200, 200)
        .build();

    let base64 = BASE64_STANDARD.encode(svg);

    Ok(format!("data:image/svg+xml;base64,{base64}"))
}
