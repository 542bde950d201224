//! HTTP client over `gloo-net`.
//!
//! Every request goes through [`ApiClient::send`], which
//! - joins the path onto the configured base URL,
//! - attaches `Authorization: Bearer <token>` when the session holds one,
//! - aborts the request after the configured timeout,
//! - turns non-2xx responses into [`ApiError`] using the server's `detail`,
//! - logs failures to the console and surfaces them as a toast,
//! - on 401 clears the session and sends the user to login after a short delay.

use std::rc::Rc;

use gloo_console::{error, log};
use gloo_net::http::{Request, RequestBuilder, Response};
use gloo_timers::callback::Timeout;
use serde::de::DeserializeOwned;
use serde::Serialize;
use web_sys::{AbortController, FormData};

use common::config::ClientConfig;
use common::error::ApiError;
use common::requests::{encode_form, endpoints};
use common::routing::LOGIN_PATH;
use common::session::Session;

use crate::helpers::show_error;

#[derive(Clone, Copy, Debug)]
enum Verb {
    Get,
    Post,
    Put,
    Delete,
}

#[derive(Clone)]
pub struct ApiClient {
    config: Rc<ClientConfig>,
    session: Session,
}

impl PartialEq for ApiClient {
    fn eq(&self, other: &Self) -> bool {
        Rc::ptr_eq(&self.config, &other.config) && self.session == other.session
    }
}

impl ApiClient {
    pub fn new(config: ClientConfig, session: Session) -> Self {
        Self {
            config: Rc::new(config),
            session,
        }
    }

    pub fn config(&self) -> &ClientConfig {
        &self.config
    }

    pub fn session(&self) -> &Session {
        &self.session
    }

    fn start(&self, verb: Verb, path: &str, controller: &AbortController) -> RequestBuilder {
        let url = self.config.url(path);
        let builder = match verb {
            Verb::Get => Request::get(&url),
            Verb::Post => Request::post(&url),
            Verb::Put => Request::put(&url),
            Verb::Delete => Request::delete(&url),
        }
        .abort_signal(Some(&controller.signal()));

        match self.session.authorization_header() {
            Some(value) => builder.header("Authorization", &value),
            None => builder,
        }
    }

    async fn send<F>(&self, verb: Verb, path: &str, finish: F) -> Result<Response, ApiError>
    where
        F: FnOnce(RequestBuilder) -> Result<Request, gloo_net::Error>,
    {
        let controller =
            AbortController::new().map_err(|_| ApiError::Network("no se pudo preparar la petición".to_string()))?;
        let request = finish(self.start(verb, path, &controller)).map_err(|e| ApiError::Decode(e.to_string()))?;

        let abort = controller.clone();
        let _timeout = Timeout::new(self.config.request_timeout_ms, move || abort.abort());

        let response = match request.send().await {
            Ok(response) => response,
            Err(err) => {
                error!(format!("Error de red en {:?} {}: {}", verb, path, err));
                let err = ApiError::Network(err.to_string());
                show_error(&err.to_string());
                return Err(err);
            }
        };

        if response.ok() {
            return Ok(response);
        }

        let status = response.status();
        let body = response.text().await.unwrap_or_default();
        let err = ApiError::from_response(status, &body);
        error!(format!("Error de respuesta en {:?} {} ({}): {}", verb, path, status, err));
        self.on_failure(path, &err);
        Err(err)
    }

    fn on_failure(&self, path: &str, err: &ApiError) {
        // Bad credentials on the login form are a form error, not an expired session.
        if err.is_unauthorized() && path != endpoints::LOGIN {
            self.session.sign_out();
            show_error("Tu sesión ha expirado. Inicia sesión de nuevo.");
            let delay = self.config.redirect_delay_ms;
            wasm_bindgen_futures::spawn_local(async move {
                gloo_timers::future::TimeoutFuture::new(delay).await;
                if let Some(window) = web_sys::window() {
                    let _ = window.location().set_href(LOGIN_PATH);
                }
            });
        } else if !err.is_unauthorized() {
            show_error(&err.to_string());
        }
    }

    async fn decode<T: DeserializeOwned>(path: &str, response: Response) -> Result<T, ApiError> {
        response.json::<T>().await.map_err(|e| {
            error!(format!("Respuesta inesperada de {}: {}", path, e));
            ApiError::Decode(e.to_string())
        })
    }

    pub async fn get_json<T: DeserializeOwned>(&self, path: &str) -> Result<T, ApiError> {
        let response = self.send(Verb::Get, path, |b| b.build()).await?;
        Self::decode(path, response).await
    }

    pub async fn post_json<B: Serialize, T: DeserializeOwned>(&self, path: &str, body: &B) -> Result<T, ApiError> {
        let response = self.send(Verb::Post, path, |b| b.json(body)).await?;
        Self::decode(path, response).await
    }

    pub async fn put_json<B: Serialize, T: DeserializeOwned>(&self, path: &str, body: &B) -> Result<T, ApiError> {
        let response = self.send(Verb::Put, path, |b| b.json(body)).await?;
        Self::decode(path, response).await
    }

    /// `application/x-www-form-urlencoded` POST.
    pub async fn post_form<T: DeserializeOwned>(&self, path: &str, fields: &[(&str, &str)]) -> Result<T, ApiError> {
        let body = encode_form(fields);
        let response = self
            .send(Verb::Post, path, |b| {
                b.header("Content-Type", "application/x-www-form-urlencoded").body(body)
            })
            .await?;
        Self::decode(path, response).await
    }

    /// Multipart POST. The browser sets the boundary header itself.
    pub async fn post_multipart<T: DeserializeOwned>(&self, path: &str, form: FormData) -> Result<T, ApiError> {
        let response = self.send(Verb::Post, path, |b| b.body(form)).await?;
        Self::decode(path, response).await
    }

    pub async fn delete(&self, path: &str) -> Result<(), ApiError> {
        self.send(Verb::Delete, path, |b| b.build()).await?;
        log!(format!("DELETE {} completado", path));
        Ok(())
    }

    pub async fn get_bytes(&self, path: &str) -> Result<Vec<u8>, ApiError> {
        let response = self.send(Verb::Get, path, |b| b.build()).await?;
        response.binary().await.map_err(|e| ApiError::Decode(e.to_string()))
    }
}
