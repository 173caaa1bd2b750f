//! HTTP fetch seam used by the network-backed resolvers.
//!
//! Resolvers only need "GET this URL, give me the body". Keeping that behind
//! [`JsonFetcher`] lets tests drive the resolvers with canned payloads.

use std::time::Duration;

use log::debug;
use reqwest::blocking::Client;

use crate::errors::ExchangeError;

/// Fetches a response body for a URL.
pub trait JsonFetcher: Send + Sync {
    /// GET `url` and return the body of a successful response.
    fn fetch(&self, url: &str) -> Result<String, ExchangeError>;
}

/// [`JsonFetcher`] backed by a blocking `reqwest` client.
pub struct HttpFetcher {
    client: Client,
}

impl HttpFetcher {
    /// Create a fetcher whose requests give up after `timeout`.
    pub fn new(timeout: Duration) -> Self {
        let client = Client::builder()
            .timeout(timeout)
            .build()
            .unwrap_or_else(|_| Client::new());

        Self { client }
    }
}

impl JsonFetcher for HttpFetcher {
    fn fetch(&self, url: &str) -> Result<String, ExchangeError> {
        debug!("GET {}", url);

        let response = self.client.get(url).send()?;

        let status = response.status();
        if !status.is_success() {
            return Err(ExchangeError::Status {
                status: status.as_u16(),
                url: url.to_string(),
            });
        }

        Ok(response.text()?)
    }
}

#[cfg(test)]
pub(crate) mod testing {
    use std::sync::Mutex;

    use super::*;

    /// Canned responses keyed by URL prefix; records every requested URL.
    #[derive(Default)]
    pub struct StubFetcher {
        routes: Vec<(String, Option<String>)>,
        requests: Mutex<Vec<String>>,
    }

    impl StubFetcher {
        pub fn new() -> Self {
            Self::default()
        }

        /// Answer URLs starting with `prefix` with `body`.
        pub fn respond(mut self, prefix: &str, body: &str) -> Self {
            self.routes
                .push((prefix.to_string(), Some(body.to_string())));
            self
        }

        /// Fail URLs starting with `prefix` like an unreachable host.
        pub fn fail(mut self, prefix: &str) -> Self {
            self.routes.push((prefix.to_string(), None));
            self
        }

        pub fn requests(&self) -> Vec<String> {
            self.requests
                .lock()
                .map(|r| r.clone())
                .unwrap_or_default()
        }
    }

    impl JsonFetcher for StubFetcher {
        fn fetch(&self, url: &str) -> Result<String, ExchangeError> {
            if let Ok(mut requests) = self.requests.lock() {
                requests.push(url.to_string());
            }

            match self.routes.iter().find(|(prefix, _)| url.starts_with(prefix)) {
                Some((_, Some(body))) => Ok(body.clone()),
                _ => Err(ExchangeError::Status {
                    status: 503,
                    url: url.to_string(),
                }),
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use std::io::{Read, Write};
    use std::net::TcpListener;
    use std::sync::Arc;
    use std::thread;

    use ratechain_resolution::Resolver;

    use super::*;
    use crate::models::CurrencyPair;
    use crate::resolvers::NbpResolver;

    /// Local server answering exactly one request with `response`.
    fn serve_once(response: &'static str) -> String {
        let listener = TcpListener::bind("127.0.0.1:0").unwrap();
        let addr = listener.local_addr().unwrap();

        thread::spawn(move || {
            if let Ok((mut stream, _)) = listener.accept() {
                let mut buf = [0u8; 4096];
                let _ = stream.read(&mut buf);
                let _ = stream.write_all(response.as_bytes());
            }
        });

        format!("http://{}", addr)
    }

    #[test]
    fn test_fetch_returns_body() {
        let base = serve_once(
            "HTTP/1.1 200 OK\r\nContent-Length: 17\r\nConnection: close\r\n\r\n{\"success\": true}",
        );

        let body = HttpFetcher::new(Duration::from_secs(5))
            .fetch(&format!("{}/latest", base))
            .unwrap();

        assert_eq!(body, r#"{"success": true}"#);
    }

    #[test]
    fn test_error_status_is_reported() {
        let base =
            serve_once("HTTP/1.1 404 Not Found\r\nContent-Length: 0\r\nConnection: close\r\n\r\n");
        let url = format!("{}/missing", base);

        let result = HttpFetcher::new(Duration::from_secs(5)).fetch(&url);

        match result {
            Err(ExchangeError::Status { status, url: failed }) => {
                assert_eq!(status, 404);
                assert_eq!(failed, url);
            }
            other => panic!("expected a 404 status error, got {:?}", other),
        }
    }

    #[test]
    fn test_timeout_declines_as_unavailable() {
        // Connections queue in the backlog but are never answered.
        let listener = TcpListener::bind("127.0.0.1:0").unwrap();
        let base = format!("http://{}", listener.local_addr().unwrap());

        let resolver = NbpResolver::new(
            Arc::new(HttpFetcher::new(Duration::from_millis(200))),
            base,
        );
        let decline = resolver
            .try_handle(&CurrencyPair::new("EUR", "PLN"))
            .unwrap_err();

        assert!(decline.is_transient());
        drop(listener);
    }
}
