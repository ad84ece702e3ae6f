//! Cliente HTTP do backend de controle de saída.
//!
//! Toda chamada passa por um [`ApiClient`] construído a partir da sessão;
//! quando há token, ele vai no cabeçalho `Authorization: Bearer <token>`.
//! Não há retry, timeout nem cancelamento: uma falha é devolvida como `Err`
//! e tratada no ponto de chamada.

use gloo_net::http::{Request, RequestBuilder};
use serde::de::DeserializeOwned;
use serde::Serialize;

/// Base das URLs da API, montada a partir do `window.location` corrente.
/// O backend atende na porta 3000 do mesmo host.
pub fn api_base() -> String {
    let window = match web_sys::window() {
        Some(w) => w,
        None => return String::new(),
    };
    let location = window.location();
    let protocol = location.protocol().unwrap_or_else(|_| "http:".to_string());
    let hostname = location
        .hostname()
        .unwrap_or_else(|_| "127.0.0.1".to_string());
    format!("{}//{}:3000", protocol, hostname)
}

/// URL completa da API a partir de um path como `/pedidos`.
pub fn api_url(path: &str) -> String {
    format!("{}/api{}", api_base(), path)
}

#[derive(Clone, Debug, Default)]
pub struct ApiClient {
    token: Option<String>,
}

impl ApiClient {
    pub fn new(token: Option<String>) -> Self {
        Self { token }
    }

    fn authorize(&self, builder: RequestBuilder) -> RequestBuilder {
        match &self.token {
            Some(token) => builder.header("Authorization", &format!("Bearer {}", token)),
            None => builder,
        }
    }

    pub async fn get<T: DeserializeOwned>(&self, path: &str) -> Result<T, String> {
        let response = self
            .authorize(Request::get(&api_url(path)))
            .send()
            .await
            .map_err(|e| format!("Failed to send request: {}", e))?;

        if !response.ok() {
            return Err(format!("HTTP {}", response.status()));
        }

        response
            .json::<T>()
            .await
            .map_err(|e| format!("Failed to parse response: {}", e))
    }

    pub async fn post<B: Serialize, T: DeserializeOwned>(
        &self,
        path: &str,
        body: &B,
    ) -> Result<T, String> {
        let response = self
            .authorize(Request::post(&api_url(path)))
            .json(body)
            .map_err(|e| format!("Failed to serialize request: {}", e))?
            .send()
            .await
            .map_err(|e| format!("Failed to send request: {}", e))?;

        if !response.ok() {
            return Err(format!("HTTP {}", response.status()));
        }

        response
            .json::<T>()
            .await
            .map_err(|e| format!("Failed to parse response: {}", e))
    }

    /// POST cuja resposta é apenas um ack; o corpo devolvido é descartado.
    pub async fn post_unit<B: Serialize>(&self, path: &str, body: &B) -> Result<(), String> {
        let response = self
            .authorize(Request::post(&api_url(path)))
            .json(body)
            .map_err(|e| format!("Failed to serialize request: {}", e))?
            .send()
            .await
            .map_err(|e| format!("Failed to send request: {}", e))?;

        if !response.ok() {
            return Err(format!("HTTP {}", response.status()));
        }

        Ok(())
    }

    pub async fn put<B: Serialize, T: DeserializeOwned>(
        &self,
        path: &str,
        body: &B,
    ) -> Result<T, String> {
        let response = self
            .authorize(Request::put(&api_url(path)))
            .json(body)
            .map_err(|e| format!("Failed to serialize request: {}", e))?
            .send()
            .await
            .map_err(|e| format!("Failed to send request: {}", e))?;

        if !response.ok() {
            return Err(format!("HTTP {}", response.status()));
        }

        response
            .json::<T>()
            .await
            .map_err(|e| format!("Failed to parse response: {}", e))
    }

    pub async fn delete(&self, path: &str) -> Result<(), String> {
        let response = self
            .authorize(Request::delete(&api_url(path)))
            .send()
            .await
            .map_err(|e| format!("Failed to send request: {}", e))?;

        if !response.ok() {
            return Err(format!("HTTP {}", response.status()));
        }

        Ok(())
    }

    /// POST multipart (upload de arquivo). O navegador define o
    /// `Content-Type` com o boundary correto.
    pub async fn post_form(&self, path: &str, form: web_sys::FormData) -> Result<(), String> {
        let response = self
            .authorize(Request::post(&api_url(path)))
            .body(form)
            .map_err(|e| format!("Failed to build request: {}", e))?
            .send()
            .await
            .map_err(|e| format!("Failed to send request: {}", e))?;

        if !response.ok() {
            return Err(format!("HTTP {}", response.status()));
        }

        Ok(())
    }
}

/// PATCH sem credenciais. O endpoint de status dos pedidos é público por
/// contrato e nunca recebe o cabeçalho de autenticação.
pub async fn patch_json<B: Serialize, T: DeserializeOwned>(
    path: &str,
    body: &B,
) -> Result<T, String> {
    let response = Request::patch(&api_url(path))
        .json(body)
        .map_err(|e| format!("Failed to serialize request: {}", e))?
        .send()
        .await
        .map_err(|e| format!("Failed to send request: {}", e))?;

    if !response.ok() {
        return Err(format!("HTTP {}", response.status()));
    }

    response
        .json::<T>()
        .await
        .map_err(|e| format!("Failed to parse response: {}", e))
}
