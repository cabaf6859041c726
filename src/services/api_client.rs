// ============================================================================
// API CLIENT - SOLO COMUNICACIÓN HTTP (Stateless)
// ============================================================================
// NO tiene lógica de negocio, solo hace requests HTTP. El token se recibe
// explícitamente en cada llamada autenticada; nunca se guarda aquí.
// ============================================================================

use gloo_net::http::{Request, RequestBuilder, Response};
use serde::de::DeserializeOwned;

use crate::config::CONFIG;
use crate::error::{AuthError, SyncError, SyncResult};
use crate::models::auth::ApiErrorBody;
use crate::models::{
    Cart, CartDraft, CartsPage, Credential, ItemId, LoginRequest, LoginResponse, Product,
    ProductsPage, UserProfile,
};

/// Cliente API - SOLO comunicación HTTP (stateless)
#[derive(Clone, Debug, PartialEq)]
pub struct ApiClient {
    base_url: String,
}

impl ApiClient {
    pub fn new() -> Self {
        Self::with_base_url(CONFIG.api_base_url())
    }

    pub fn with_base_url(base_url: &str) -> Self {
        Self {
            base_url: base_url.trim_end_matches('/').to_string(),
        }
    }

    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    pub fn url(&self, path: &str) -> String {
        format!("{}/{}", self.base_url, path.trim_start_matches('/'))
    }

    pub fn products_url(&self) -> String {
        format!(
            "{}?sortBy={}&order={}",
            self.url("products"),
            CONFIG.products.sort_by,
            CONFIG.products.order
        )
    }

    pub fn cart_url(&self, id: ItemId) -> String {
        self.url(&format!("carts/{}", id))
    }

    // ==========================================
    // PRODUCTOS (sin autenticación)
    // ==========================================

    /// Listar productos ordenados
    pub async fn list_products(&self) -> SyncResult<Vec<Product>> {
        let response = Request::get(&self.products_url()).send().await?;
        let page = read_json::<ProductsPage>(response).await?;
        log::info!("📦 {} productos recibidos", page.products.len());
        Ok(page.products)
    }

    // ==========================================
    // CARRITOS (bearer en cada llamada)
    // ==========================================

    pub async fn list_carts(&self, credential: &Credential) -> SyncResult<Vec<Cart>> {
        let response = authorized(Request::get(&self.url("carts")), credential)
            .send()
            .await?;
        let page = read_json::<CartsPage>(response).await?;
        log::info!("🛒 {} carritos recibidos", page.carts.len());
        Ok(page.carts)
    }

    pub async fn create_cart(&self, credential: &Credential, draft: &CartDraft) -> SyncResult<Cart> {
        log::info!("🛒 Creando carrito para usuario {}", draft.user_id);
        let response = authorized(Request::post(&self.url("carts/add")), credential)
            .json(draft)?
            .send()
            .await?;
        read_json::<Cart>(response).await
    }

    pub async fn update_cart(
        &self,
        credential: &Credential,
        id: ItemId,
        draft: &CartDraft,
    ) -> SyncResult<Cart> {
        log::info!("📝 Actualizando carrito {}", id);
        let response = authorized(Request::put(&self.cart_url(id)), credential)
            .json(draft)?
            .send()
            .await?;
        read_json::<Cart>(response).await
    }

    /// El cuerpo de la respuesta se descarta; solo importa el status
    pub async fn delete_cart(&self, credential: &Credential, id: ItemId) -> SyncResult<()> {
        log::info!("🗑️ Eliminando carrito {}", id);
        let response = authorized(Request::delete(&self.cart_url(id)), credential)
            .send()
            .await?;
        ensure_ok(&response).await
    }

    // ==========================================
    // AUTH
    // ==========================================

    /// Login. Un rechazo del servidor se devuelve con su mensaje.
    pub async fn login(&self, request: &LoginRequest) -> Result<LoginResponse, AuthError> {
        log::info!("🔐 Login para usuario: {}", request.username);
        let response = Request::post(&self.url("auth/login"))
            .json(request)
            .map_err(SyncError::from)?
            .send()
            .await
            .map_err(SyncError::from)?;

        if !response.ok() {
            let message = error_message(&response).await;
            log::warn!("⚠️ Login rechazado ({}): {}", response.status(), message);
            return Err(AuthError::Rejected(message));
        }

        Ok(read_json::<LoginResponse>(response).await?)
    }

    /// Perfil del usuario del token
    pub async fn fetch_me(&self, credential: &Credential) -> SyncResult<UserProfile> {
        let response = authorized(Request::get(&self.url("auth/me")), credential)
            .send()
            .await?;
        read_json::<UserProfile>(response).await
    }
}

impl Default for ApiClient {
    fn default() -> Self {
        Self::new()
    }
}

fn authorized(builder: RequestBuilder, credential: &Credential) -> RequestBuilder {
    if credential.is_empty() {
        // Se intenta igualmente; el servidor responderá 401
        log::warn!("⚠️ Llamada autenticada sin token");
    }
    builder.header("Authorization", &credential.bearer())
}

async fn ensure_ok(response: &Response) -> SyncResult<()> {
    if response.ok() {
        Ok(())
    } else {
        Err(SyncError::http(response.status(), error_message(response).await))
    }
}

async fn read_json<T: DeserializeOwned>(response: Response) -> SyncResult<T> {
    ensure_ok(&response).await?;
    Ok(response.json::<T>().await?)
}

/// `message` del cuerpo JSON si existe, si no el status text
async fn error_message(response: &Response) -> String {
    let fallback = response.status_text();
    match response.text().await {
        Ok(body) => parse_error_body(&body).unwrap_or(fallback),
        Err(_) => fallback,
    }
}

fn parse_error_body(body: &str) -> Option<String> {
    serde_json::from_str::<ApiErrorBody>(body)
        .ok()
        .map(|parsed| parsed.message)
        .filter(|message| !message.is_empty())
}
