use gloo_net::http::Request;
use serde::{Deserialize, Serialize};

use crate::shared::api_client::api_url;

#[derive(Serialize)]
struct LoginRequest {
    usuario: String,
    senha: String,
}

#[derive(Deserialize)]
struct LoginResponse {
    token: String,
}

/// Autentica no backend e devolve o token de sessão.
pub async fn login(usuario: String, senha: String) -> Result<String, String> {
    let request = LoginRequest { usuario, senha };

    let response = Request::post(&api_url("/auth/login"))
        .json(&request)
        .map_err(|e| format!("Failed to serialize request: {}", e))?
        .send()
        .await
        .map_err(|e| format!("Failed to send request: {}", e))?;

    if !response.ok() {
        return Err(format!("Login failed: {}", response.status()));
    }

    response
        .json::<LoginResponse>()
        .await
        .map(|r| r.token)
        .map_err(|e| format!("Failed to parse response: {}", e))
}
