//! Café backend REST client

use crate::config::ClientConfig;
use crate::error::{ClientError, ClientResult};
use serde::de::DeserializeOwned;
use shared::models::{
    Category, ClaimOutcome, ClaimedReward, Ingredient, IngredientCreate, IngredientUpdate,
    OrderPayload, OrderRecord, OrderResponse, OrderStatus, OrderStatusUpdate, Product, Reward,
    RewardCreate, RewardUpdate, StarsBalance, UserProfile,
};
use shared::{ApiMessage, ListPayload};

/// HTTP client for the café ordering backend.
///
/// Carries an optional bearer token attached to every request once set.
/// List responses pass through the [`ListPayload`] boundary, so callers
/// only ever see canonical `Vec<T>` regardless of the wire shape.
#[derive(Debug, Clone)]
pub struct CafeClient {
    client: reqwest::Client,
    base_url: String,
    token: Option<String>,
}

impl CafeClient {
    pub fn new(config: &ClientConfig) -> Self {
        let client = reqwest::Client::builder()
            .timeout(config.timeout)
            .build()
            .expect("Failed to build HTTP client");

        Self {
            client,
            base_url: config.base_url.trim_end_matches('/').to_string(),
            token: None,
        }
    }

    /// Set the session token (attached as `Authorization: Bearer …`).
    pub fn set_token(&mut self, token: impl Into<String>) {
        self.token = Some(token.into());
    }

    pub fn clear_token(&mut self) {
        self.token = None;
    }

    pub fn token(&self) -> Option<&str> {
        self.token.as_deref()
    }

    fn auth_header(&self) -> Option<String> {
        self.token.as_ref().map(|t| format!("Bearer {}", t))
    }

    async fn get<T: DeserializeOwned>(&self, path: &str) -> ClientResult<T> {
        let url = format!("{}{}", self.base_url, path);
        let mut req = self.client.get(&url);

        if let Some(auth) = self.auth_header() {
            req = req.header(reqwest::header::AUTHORIZATION, auth);
        }

        let resp = req.send().await?;
        Self::handle_response(resp).await
    }

    async fn get_list<T: DeserializeOwned>(&self, path: &str) -> ClientResult<Vec<T>> {
        let payload: ListPayload<T> = self.get(path).await?;
        Ok(payload.into_items())
    }

    async fn post<T: DeserializeOwned, B: serde::Serialize>(
        &self,
        path: &str,
        body: &B,
    ) -> ClientResult<T> {
        let url = format!("{}{}", self.base_url, path);
        let mut req = self.client.post(&url).json(body);

        if let Some(auth) = self.auth_header() {
            req = req.header(reqwest::header::AUTHORIZATION, auth);
        }

        let resp = req.send().await?;
        Self::handle_response(resp).await
    }

    async fn put<T: DeserializeOwned, B: serde::Serialize>(
        &self,
        path: &str,
        body: &B,
    ) -> ClientResult<T> {
        let url = format!("{}{}", self.base_url, path);
        let mut req = self.client.put(&url).json(body);

        if let Some(auth) = self.auth_header() {
            req = req.header(reqwest::header::AUTHORIZATION, auth);
        }

        let resp = req.send().await?;
        Self::handle_response(resp).await
    }

    async fn patch<T: DeserializeOwned, B: serde::Serialize>(
        &self,
        path: &str,
        body: &B,
    ) -> ClientResult<T> {
        let url = format!("{}{}", self.base_url, path);
        let mut req = self.client.patch(&url).json(body);

        if let Some(auth) = self.auth_header() {
            req = req.header(reqwest::header::AUTHORIZATION, auth);
        }

        let resp = req.send().await?;
        Self::handle_response(resp).await
    }

    async fn delete<T: DeserializeOwned>(&self, path: &str) -> ClientResult<T> {
        let url = format!("{}{}", self.base_url, path);
        let mut req = self.client.delete(&url);

        if let Some(auth) = self.auth_header() {
            req = req.header(reqwest::header::AUTHORIZATION, auth);
        }

        let resp = req.send().await?;
        Self::handle_response(resp).await
    }

    async fn handle_response<T: DeserializeOwned>(resp: reqwest::Response) -> ClientResult<T> {
        let status = resp.status();

        if !status.is_success() {
            let body = resp.text().await.unwrap_or_default();
            let message = backend_message(&body);
            tracing::warn!(status = status.as_u16(), %message, "API request failed");
            return Err(ClientError::Api {
                status: status.as_u16(),
                message,
            });
        }

        resp.json().await.map_err(Into::into)
    }
}

/// Prefer the backend's own `message`/`error` field over the raw body.
fn backend_message(body: &str) -> String {
    #[derive(serde::Deserialize)]
    struct ErrorBody {
        message: Option<String>,
        error: Option<String>,
    }

    serde_json::from_str::<ErrorBody>(body)
        .ok()
        .and_then(|b| b.message.or(b.error))
        .unwrap_or_else(|| {
            if body.is_empty() {
                "request failed".to_string()
            } else {
                body.to_string()
            }
        })
}

// ============================================================================
// Endpoints
// ============================================================================

impl CafeClient {
    // ========== Catalog ==========

    pub async fn active_products(&self) -> ClientResult<Vec<Product>> {
        self.get_list("/products/active").await
    }

    pub async fn products_by_category(&self, category_id: i64) -> ClientResult<Vec<Product>> {
        self.get_list(&format!("/products/category/{}", category_id))
            .await
    }

    pub async fn product(&self, id: i64) -> ClientResult<Product> {
        self.get(&format!("/products/active/{}", id)).await
    }

    pub async fn categories(&self) -> ClientResult<Vec<Category>> {
        self.get_list("/categories").await
    }

    pub async fn additional_ingredients(&self) -> ClientResult<Vec<Ingredient>> {
        self.get_list("/additional-ingredients").await
    }

    // ========== Rewards & loyalty ==========

    pub async fn available_rewards(&self) -> ClientResult<Vec<Reward>> {
        self.get_list("/rewards").await
    }

    pub async fn user_rewards(&self, user_id: i64) -> ClientResult<Vec<ClaimedReward>> {
        self.get_list(&format!("/rewards/user/{}", user_id)).await
    }

    pub async fn claim_reward(&self, reward_id: i64) -> ClientResult<ClaimOutcome> {
        #[derive(serde::Serialize)]
        struct ClaimRequest {
            reward_id: i64,
        }

        self.post("/rewards/claim", &ClaimRequest { reward_id }).await
    }

    pub async fn user_stars(&self) -> ClientResult<StarsBalance> {
        self.get("/user/stars").await
    }

    pub async fn me(&self) -> ClientResult<UserProfile> {
        self.get("/user/me").await
    }

    // ========== Orders ==========

    /// Submit an order. On success the backend marks any applied reward
    /// USED; surface the message verbatim on failure — the user re-submits
    /// manually.
    pub async fn place_order(&self, payload: &OrderPayload) -> ClientResult<OrderResponse> {
        self.post("/orders", payload).await
    }

    pub async fn my_orders(&self) -> ClientResult<Vec<OrderRecord>> {
        self.get_list("/orders/my").await
    }

    pub async fn order_with_items(&self, id: i64) -> ClientResult<OrderRecord> {
        self.get(&format!("/orders/{}/full", id)).await
    }

    // ========== Back office ==========

    pub async fn all_orders(&self) -> ClientResult<Vec<OrderRecord>> {
        self.get_list("/orders").await
    }

    pub async fn update_order_status(
        &self,
        id: i64,
        status: OrderStatus,
    ) -> ClientResult<OrderResponse> {
        self.patch(
            &format!("/orders/{}/status", id),
            &OrderStatusUpdate { status },
        )
        .await
    }

    pub async fn all_ingredients(&self) -> ClientResult<Vec<Ingredient>> {
        self.get_list("/ingredients").await
    }

    pub async fn ingredients_by_product(&self, product_id: i64) -> ClientResult<Vec<Ingredient>> {
        self.get_list(&format!("/ingredients/product/{}", product_id))
            .await
    }

    pub async fn create_ingredient(&self, payload: &IngredientCreate) -> ClientResult<Ingredient> {
        self.post("/ingredients", payload).await
    }

    pub async fn update_ingredient(
        &self,
        id: i64,
        payload: &IngredientUpdate,
    ) -> ClientResult<Ingredient> {
        self.put(&format!("/ingredients/{}", id), payload).await
    }

    pub async fn delete_ingredient(&self, id: i64) -> ClientResult<ApiMessage> {
        self.delete(&format!("/ingredients/{}", id)).await
    }

    pub async fn admin_rewards(&self) -> ClientResult<Vec<Reward>> {
        self.get_list("/rewards/admin").await
    }

    pub async fn create_reward(&self, payload: &RewardCreate) -> ClientResult<Reward> {
        self.post("/rewards", payload).await
    }

    pub async fn update_reward(&self, id: i64, payload: &RewardUpdate) -> ClientResult<Reward> {
        self.put(&format!("/rewards/admin/{}", id), payload).await
    }

    pub async fn delete_reward(&self, id: i64) -> ClientResult<ApiMessage> {
        self.delete(&format!("/rewards/admin/{}", id)).await
    }
}
