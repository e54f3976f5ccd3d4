mod basic;
mod client;

pub use basic::BasicClient;
pub use client::HttpClient;

use anyhow::Result;
use reqwest::header::{CONTENT_TYPE, HeaderValue};
use reqwest::{Method, Request, Response, StatusCode, Url};
use tracing::debug;

/// Submits an encoded form to `endpoint`.
///
/// Sends a POST first. If the endpoint answers 405 Method Not Allowed the
/// same fields are sent once more as a GET query string. Whatever the final
/// response is gets returned; status handling is up to the caller.
#[tracing::instrument(skip(client, endpoint, encoded), fields(endpoint = %endpoint))]
pub async fn submit_form<C: HttpClient + ?Sized>(
    client: &C,
    endpoint: &Url,
    encoded: &str,
) -> Result<Response> {
    let mut req = Request::new(Method::POST, endpoint.clone());
    req.headers_mut().insert(
        CONTENT_TYPE,
        HeaderValue::from_static("application/x-www-form-urlencoded"),
    );
    *req.body_mut() = Some(encoded.to_owned().into());

    let resp = client.execute(req).await?;
    if resp.status() != StatusCode::METHOD_NOT_ALLOWED {
        return Ok(resp);
    }

    debug!("POST not allowed, retrying as GET");
    let mut url = endpoint.clone();
    url.set_query(Some(encoded));

    Ok(client.execute(Request::new(Method::GET, url)).await?)
}

#[cfg(test)]
pub(crate) mod testing {
    use super::HttpClient;
    use async_trait::async_trait;
    use reqwest::{Method, Request, Response};
    use std::collections::VecDeque;
    use std::sync::Mutex;

    /// What a [`ScriptedClient`] was asked to send.
    #[derive(Debug, Clone)]
    pub struct SeenRequest {
        pub method: Method,
        pub url: String,
        pub content_type: Option<String>,
        pub body: Option<String>,
    }

    /// Replays canned `(status, body)` replies in order and records requests.
    pub struct ScriptedClient {
        replies: Mutex<VecDeque<(u16, String)>>,
        seen: Mutex<Vec<SeenRequest>>,
    }

    impl ScriptedClient {
        pub fn new<'a>(replies: impl IntoIterator<Item = (u16, &'a str)>) -> Self {
            Self {
                replies: Mutex::new(
                    replies
                        .into_iter()
                        .map(|(status, body)| (status, body.to_string()))
                        .collect(),
                ),
                seen: Mutex::new(Vec::new()),
            }
        }

        pub fn seen(&self) -> Vec<SeenRequest> {
            self.seen.lock().unwrap().clone()
        }
    }

    #[async_trait]
    impl HttpClient for ScriptedClient {
        async fn execute(&self, req: Request) -> reqwest::Result<Response> {
            self.seen.lock().unwrap().push(SeenRequest {
                method: req.method().clone(),
                url: req.url().to_string(),
                content_type: req
                    .headers()
                    .get(reqwest::header::CONTENT_TYPE)
                    .and_then(|v| v.to_str().ok())
                    .map(str::to_string),
                body: req
                    .body()
                    .and_then(|b| b.as_bytes())
                    .map(|b| String::from_utf8_lossy(b).into_owned()),
            });

            let (status, body) = self
                .replies
                .lock()
                .unwrap()
                .pop_front()
                .expect("ScriptedClient ran out of replies");

            let resp = http::Response::builder()
                .status(status)
                .header("content-type", "application/json")
                .body(body)
                .unwrap();
            Ok(Response::from(resp))
        }
    }
}
