use hyper::client::HttpConnector;
use hyper::{Body, Client, Method, Request, StatusCode, Uri};
use hyper_tls::HttpsConnector;
use thiserror::Error;
use url::Url;

pub type HttpsClient = Client<HttpsConnector<HttpConnector>>;

/// One shared client for the whole run; workers clone the `Arc`, not this.
pub fn build_client() -> HttpsClient {
    let https = HttpsConnector::new();
    Client::builder().build::<_, Body>(https)
}

#[derive(Debug, Error)]
pub enum ClientError {
    #[error("invalid target url: {0}")]
    InvalidTarget(String),
    #[error("connection refused or host unreachable")]
    Connect,
    #[error("request deadline elapsed")]
    Timeout,
    #[error("connection closed unexpectedly")]
    Closed,
    #[error("transport failure: {0}")]
    Transport(String),
}

impl From<hyper::Error> for ClientError {
    fn from(err: hyper::Error) -> Self {
        if err.is_connect() {
            ClientError::Connect
        } else if err.is_timeout() {
            ClientError::Timeout
        } else if err.is_closed() {
            ClientError::Closed
        } else {
            ClientError::Transport(err.to_string())
        }
    }
}

/// Validate the target through `url` before handing it to hyper.
pub fn target_uri(target: &str) -> Result<Uri, ClientError> {
    let url = Url::parse(target).map_err(|e| ClientError::InvalidTarget(e.to_string()))?;
    url.as_str()
        .parse::<Uri>()
        .map_err(|e| ClientError::InvalidTarget(e.to_string()))
}

/// Issue a single GET: no custom headers, empty body, no retry.
pub async fn send_request(client: &HttpsClient, uri: &Uri) -> Result<StatusCode, ClientError> {
    let request = Request::builder()
        .method(Method::GET)
        .uri(uri.clone())
        .body(Body::empty())
        .map_err(|e| ClientError::InvalidTarget(e.to_string()))?;

    let response = client.request(request).await?;
    Ok(response.status())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn accepts_http_target() {
        let uri = target_uri("http://127.0.0.1:3001/health").unwrap();
        assert_eq!(uri.path(), "/health");
    }

    #[test]
    fn rejects_unparseable_target() {
        assert!(matches!(
            target_uri("not a url"),
            Err(ClientError::InvalidTarget(_))
        ));
    }
}
