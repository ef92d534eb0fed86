pub mod error;
pub mod forecast;
pub mod geocode;

use reqwest::Client;
use serde::de::DeserializeOwned;

use self::error::FetchError;

/// GETs `url` and decodes the body. The body is read as text first so that
/// transport failures and malformed JSON surface as different errors.
pub(crate) async fn get_json<T, Q>(
    client: &Client,
    url: &str,
    query: &Q,
    endpoint: &'static str,
) -> Result<T, FetchError>
where
    T: DeserializeOwned,
    Q: serde::Serialize + ?Sized,
{
    log::debug!("GET {endpoint} {url}");
    let response = client
        .get(url)
        .query(query)
        .send()
        .await
        .map_err(|source| FetchError::Network { endpoint, source })?;

    let status = response.status();
    if !status.is_success() {
        return Err(FetchError::Status {
            endpoint,
            status: status.as_u16(),
        });
    }

    let body = response
        .text()
        .await
        .map_err(|source| FetchError::Network { endpoint, source })?;
    serde_json::from_str(&body).map_err(|source| FetchError::Decode { endpoint, source })
}
