use reqwest::Url;

use crate::error::{CoreError, LcdError};

pub(super) fn parse_base_url(connection: &str) -> Result<Url, CoreError> {
    let parsed = Url::parse(connection).map_err(|e| {
        CoreError::InvalidConfig(format!(
            "invalid LCD url `{connection}`: expected HTTP(S) URL ({e})"
        ))
    })?;
    match parsed.scheme() {
        "http" | "https" => Ok(parsed),
        other => Err(CoreError::InvalidConfig(format!(
            "unsupported LCD url scheme `{other}`; expected http or https"
        ))),
    }
}

/// Append the `/`-separated segments of `path` to `base`.
///
/// Each segment is percent-encoded on its own, so addresses and hashes are
/// never interpreted as query strings or fragments. Empty segments from
/// leading, trailing, or doubled slashes are dropped.
pub(super) fn endpoint_url(base: &Url, path: &str) -> Result<Url, CoreError> {
    let mut url = base.clone();
    url.path_segments_mut()
        .map_err(|()| LcdError::InvalidUrl {
            path: path.to_owned(),
            message: format!("base url `{base}` cannot carry a path"),
        })?
        .pop_if_empty()
        .extend(path.split('/').filter(|segment| !segment.is_empty()));
    Ok(url)
}
