use async_trait::async_trait;
use gloo_net::http::{Request, RequestBuilder, Response};
use serde::{de::DeserializeOwned, Serialize};

pub use admin::*;
pub use profile::*;
pub use role::*;

use crate::error::{api_err, Error};
use crate::model::response::ApiResponse;
use crate::Result;

mod admin;
mod profile;
mod role;

pub const CONTENT_TYPE: &str = "Content-Type";
pub const APPLICATION_JSON: &str = "application/json";

#[async_trait(?Send)]
pub trait RespStatus: Sized {
    async fn success(self) -> Result<Self>;
}

#[async_trait(?Send)]
impl RespStatus for Response {
    async fn success(self) -> Result<Self> {
        if self.ok() {
            Ok(self)
        } else {
            // the failure body may be empty or not json at all
            let body = self.text().await.unwrap_or_default();
            Err(Error::api(api_err::Error::from_body(&body)))
        }
    }
}

/// Sends a bodiless request and decodes the response envelope.
pub async fn request<T: DeserializeOwned>(builder: RequestBuilder) -> Result<ApiResponse<T>> {
    let request = builder.header(CONTENT_TYPE, APPLICATION_JSON).build();
    logged(match request {
        Ok(request) => send(request).await,
        Err(err) => Err(err.into()),
    })
}

/// Same as [`request`], with `body` serialized as json.
pub async fn request_json<B, T>(builder: RequestBuilder, body: &B) -> Result<ApiResponse<T>>
where
    B: Serialize,
    T: DeserializeOwned,
{
    logged(match builder.json(body) {
        Ok(request) => send(request).await,
        Err(err) => Err(err.into()),
    })
}

async fn send<T: DeserializeOwned>(request: Request) -> Result<ApiResponse<T>> {
    let resp = request.send().await?.success().await?;
    Ok(resp.json::<ApiResponse<T>>().await?)
}

fn logged<T>(result: Result<T>) -> Result<T> {
    if let Err(err) = &result {
        log::error!("API Error: {}", err);
    }
    result
}

#[cfg(all(test, target_arch = "wasm32"))]
mod browser {
    use wasm_bindgen_test::*;

    use super::*;
    use crate::error::REQUEST_FAILED;

    wasm_bindgen_test_configure!(run_in_browser);

    fn response(status: u16, body: &str) -> Response {
        Response::builder()
            .status(status)
            .body(Some(body))
            .unwrap()
    }

    #[wasm_bindgen_test]
    async fn ok_response_passes_through() {
        let resp = response(200, r#"{"success":true,"data":[]}"#)
            .success()
            .await
            .unwrap();
        assert_eq!(resp.status(), 200);
    }

    #[wasm_bindgen_test]
    async fn failure_carries_server_message() {
        let err = response(404, r#"{"success":false,"message":"User not found with ID: 7"}"#)
            .success()
            .await
            .unwrap_err();
        assert_eq!(err, Error::Api("User not found with ID: 7".to_string()));
    }

    #[wasm_bindgen_test]
    async fn html_failure_body_falls_back() {
        let err = response(500, "<html><body>Internal Server Error</body></html>")
            .success()
            .await
            .unwrap_err();
        assert_eq!(err, Error::Api(REQUEST_FAILED.to_string()));
    }

    #[wasm_bindgen_test]
    async fn empty_failure_body_falls_back() {
        let err = response(403, "").success().await.unwrap_err();
        assert_eq!(err, Error::Api(REQUEST_FAILED.to_string()));
    }
}
