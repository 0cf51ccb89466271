use api_console::models::{ApiDefinition, ApiFields, HttpMethod};
use api_console::state::AppState;
use api_console::store::ApiStore;

/// Factory for creating test data directly through the store
pub struct Factory<'a> {
    state: &'a AppState,
}

#[allow(dead_code)]
impl<'a> Factory<'a> {
    pub fn new(state: &'a AppState) -> Self {
        Self { state }
    }

    /// Create a draft API with the given name and business
    pub async fn create_api(&self, name: &str, business: &str) -> ApiDefinition {
        let fields = ApiFields {
            name: name.to_string(),
            description: format!("{} description", name),
            business: business.to_string(),
            method: HttpMethod::Get,
        };

        self.state.store.create(fields).await.unwrap()
    }

    /// Create a draft API and publish it
    pub async fn create_published_api(&self, name: &str, business: &str) -> ApiDefinition {
        let api = self.create_api(name, business).await;
        self.state
            .store
            .publish(api.id)
            .await
            .unwrap()
            .into_record()
    }
}
