//! # Gardens endpoints
//!
//! | Method | Call |
//! |--------|------|
//! | [`fetch_list`](GardensService::fetch_list) | `GET /gardens?page=..&pageSize=..&sortField=..&sortOrder=..` |
//! | [`fetch_shared_list`](GardensService::fetch_shared_list) | `GET /gardens/shared?...` - gardens other users shared with a visitor |
//! | [`fetch_one`](GardensService::fetch_one) | `GET /gardens/{id}` |
//! | [`add`](GardensService::add) | `POST /gardens` |
//! | [`update`](GardensService::update) | `PUT /gardens/{id}` |
//! | [`delete`](GardensService::delete) | `DELETE /gardens/{id}` |
//!
//! [`save`](GardensService::save) is what the detail form calls: it turns the
//! form into an add or an update depending on the [`SubmitMode`].

use store::{Garden, GardenAdd, GardenForm, GardenUpdate, GridParams, PaginatedList, SubmitMode};

use crate::client::ApiClient;
use crate::error::ApiError;
use crate::transport::Transport;

const ENDPOINT: &str = "/gardens";

pub struct GardensService<'a, T: Transport> {
    client: &'a ApiClient<T>,
}

impl<'a, T: Transport> GardensService<'a, T> {
    pub fn new(client: &'a ApiClient<T>) -> Self {
        Self { client }
    }

    pub async fn fetch_list(&self, grid: &GridParams) -> Result<PaginatedList<Garden>, ApiError> {
        self.client.get(ENDPOINT, grid.to_query()).await
    }

    pub async fn fetch_shared_list(
        &self,
        grid: &GridParams,
    ) -> Result<PaginatedList<Garden>, ApiError> {
        self.client
            .get(&format!("{ENDPOINT}/shared"), grid.to_query())
            .await
    }

    pub async fn fetch_one(&self, id: &str) -> Result<Garden, ApiError> {
        self.client
            .get(&format!("{ENDPOINT}/{id}"), Vec::new())
            .await
    }

    pub async fn add(&self, garden: &GardenAdd) -> Result<(), ApiError> {
        self.client.post(ENDPOINT, garden).await?;
        tracing::info!("garden `{}` created", garden.name);
        Ok(())
    }

    pub async fn update(&self, id: &str, garden: &GardenUpdate) -> Result<(), ApiError> {
        self.client.put(&format!("{ENDPOINT}/{id}"), garden).await?;
        tracing::info!("garden {id} updated");
        Ok(())
    }

    pub async fn delete(&self, id: &str) -> Result<(), ApiError> {
        self.client.delete(&format!("{ENDPOINT}/{id}")).await?;
        tracing::info!("garden {id} deleted");
        Ok(())
    }

    /// Submit the detail form: update when editing, add otherwise.
    pub async fn save(&self, mode: &SubmitMode, form: &GardenForm) -> Result<(), ApiError> {
        match mode {
            SubmitMode::Create => self.add(&form.to_add()).await,
            SubmitMode::Update(id) => {
                let garden_id = id
                    .parse::<u64>()
                    .map_err(|_| ApiError::InvalidId(id.clone()))?;
                self.update(id, &form.to_update(garden_id)).await
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::testing::FakeTransport;
    use crate::transport::Method;

    fn client() -> ApiClient<FakeTransport> {
        ApiClient::new(FakeTransport::new()).with_token(Some("jwt".to_string()))
    }

    fn filled_form() -> GardenForm {
        let mut form = GardenForm::new();
        form.name = "Huerta norte".to_string();
        form.description = "Frente a la escuela".to_string();
        form.location = "Rosario".to_string();
        form
    }

    #[tokio::test]
    async fn creating_posts_once_with_the_form_fields() {
        let client = client();

        client
            .gardens()
            .save(&SubmitMode::from_route(None), &filled_form())
            .await
            .unwrap();

        let sent = client.transport().requests();
        assert_eq!(sent.len(), 1);
        assert_eq!(sent[0].method, Method::Post);
        assert_eq!(sent[0].path, "/gardens");
        let body = sent[0].body.as_ref().unwrap();
        assert_eq!(body["name"], "Huerta norte");
        assert_eq!(body["description"], "Frente a la escuela");
        assert_eq!(body["location"], "Rosario");
        assert_eq!(body["sectors"], serde_json::json!([]));
    }

    #[tokio::test]
    async fn editing_updates_instead_of_adding() {
        let client = client();

        client
            .gardens()
            .save(&SubmitMode::from_route(Some("12")), &filled_form())
            .await
            .unwrap();

        let sent = client.transport().requests();
        assert_eq!(sent.len(), 1);
        assert_eq!(sent[0].method, Method::Put);
        assert_eq!(sent[0].path, "/gardens/12");
        assert_eq!(sent[0].body.as_ref().unwrap()["gardenId"], 12);
    }

    #[tokio::test]
    async fn non_numeric_id_is_rejected_before_sending() {
        let client = client();

        let err = client
            .gardens()
            .save(&SubmitMode::Update("abc".to_string()), &filled_form())
            .await
            .unwrap_err();

        assert_eq!(err, ApiError::InvalidId("abc".to_string()));
        assert!(client.transport().requests().is_empty());
    }

    #[tokio::test]
    async fn sectors_are_sent_with_their_keys() {
        let client = client();
        let mut form = filled_form();
        let index = form.add_sector().unwrap();
        form.sector_mut(index).unwrap().name = "Sector A".to_string();
        form.sector_mut(index).unwrap().crops = "tomate".to_string();
        let key = form.sectors()[index].centralizer_key().to_string();

        client.gardens().save(&SubmitMode::Create, &form).await.unwrap();

        let sent = client.transport().requests();
        let sector = &sent[0].body.as_ref().unwrap()["sectors"][0];
        assert_eq!(sector["name"], "Sector A");
        assert_eq!(sector["centralizerKey"], key.as_str());
    }

    #[tokio::test]
    async fn list_sends_grid_params() {
        let client = client();
        client.transport().respond(
            200,
            r#"{"list":[{"gardenId":1,"name":"N","description":"D","location":"L","ownerUserId":2,"sectors":[]}],"count":1}"#,
        );

        let page = client
            .gardens()
            .fetch_list(&GridParams::base("createdAt"))
            .await
            .unwrap();

        assert_eq!(page.count, 1);
        assert_eq!(page.list[0].name, "N");
        let sent = client.transport().requests();
        assert!(sent[0]
            .query
            .contains(&("sortField".to_string(), "createdAt".to_string())));
        assert!(sent[0]
            .query
            .contains(&("pageSize".to_string(), "10".to_string())));
    }

    #[tokio::test]
    async fn failed_list_leaves_state_empty() {
        let client = client();
        client.transport().fail(ApiError::Network("Failed to fetch".to_string()));
        let mut state = store::ListState::default();

        let err = state
            .load(client.gardens().fetch_list(&GridParams::base("createdAt")))
            .await;

        assert_eq!(
            err.and_then(|e| e.user_message()).as_deref(),
            Some("Failed to fetch")
        );
        assert!(!state.loading);
        assert!(state.items().is_empty());
    }

    #[tokio::test]
    async fn delete_targets_the_record() {
        let client = client();

        client.gardens().delete("7").await.unwrap();

        let sent = client.transport().requests();
        assert_eq!(sent[0].method, Method::Delete);
        assert_eq!(sent[0].path, "/gardens/7");
    }
}
