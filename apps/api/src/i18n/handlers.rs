use std::collections::BTreeMap;

use axum::{extract::Path, Json};
use serde::Serialize;

use crate::errors::AppError;
use crate::i18n::{catalog, Lang};

#[derive(Serialize)]
pub struct LocaleInfo {
    pub code: &'static str,
    pub name: &'static str,
    pub native_name: &'static str,
    pub dir: &'static str,
}

#[derive(Serialize)]
pub struct LocalesResponse {
    pub locales: Vec<LocaleInfo>,
}

/// GET /api/v1/i18n/locales
pub async fn handle_list_locales() -> Json<LocalesResponse> {
    let locales = Lang::ALL
        .iter()
        .map(|lang| LocaleInfo {
            code: lang.code(),
            name: lang.name(),
            native_name: lang.native_name(),
            dir: lang.dir(),
        })
        .collect();
    Json(LocalesResponse { locales })
}

/// GET /api/v1/i18n/:lang
pub async fn handle_get_catalog(
    Path(lang): Path<String>,
) -> Result<Json<BTreeMap<&'static str, &'static str>>, AppError> {
    let lang = Lang::parse(&lang)
        .ok_or_else(|| AppError::NotFound(format!("Unsupported language: {lang}")))?;
    Ok(Json(catalog(lang)))
}
