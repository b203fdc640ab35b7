//! `GET /api/placeholder/:width/:height` — gray SVG used as the default
//! project image.

use axum::extract::rejection::PathRejection;
use axum::extract::Path;
use axum::http::header;
use axum::response::IntoResponse;

use super::error::{ApiError, ApiResult};

const MAX_DIMENSION: u32 = 4000;

pub async fn placeholder(
    dimensions: Result<Path<(u32, u32)>, PathRejection>,
) -> ApiResult<impl IntoResponse> {
    let Path((width, height)) = dimensions.map_err(|_| invalid())?;
    if !(1..=MAX_DIMENSION).contains(&width) || !(1..=MAX_DIMENSION).contains(&height) {
        return Err(invalid());
    }

    Ok((
        [
            (header::CONTENT_TYPE, "image/svg+xml"),
            (header::CACHE_CONTROL, "public, max-age=86400"),
        ],
        render_svg(width, height),
    ))
}

fn invalid() -> ApiError {
    ApiError::BadRequest(format!(
        "Placeholder dimensions must be integers between 1 and {}",
        MAX_DIMENSION
    ))
}

pub(crate) fn render_svg(width: u32, height: u32) -> String {
    let font_size = (width.min(height) / 8).max(10);
    format!(
        concat!(
            r##"<svg xmlns="http://www.w3.org/2000/svg" width="{w}" height="{h}" viewBox="0 0 {w} {h}">"##,
            r##"<rect width="100%" height="100%" fill="#e2e8f0"/>"##,
            r##"<text x="50%" y="50%" dominant-baseline="middle" text-anchor="middle" "##,
            r##"font-family="sans-serif" font-size="{fs}" fill="#64748b">{w}×{h}</text>"##,
            "</svg>"
        ),
        w = width,
        h = height,
        fs = font_size,
    )
}
