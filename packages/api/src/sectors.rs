//! Sectors endpoints.

use store::{GridParams, PaginatedList, Sector};

use crate::client::ApiClient;
use crate::error::ApiError;
use crate::transport::Transport;

const ENDPOINT: &str = "/sectors";

pub struct SectorsService<'a, T: Transport> {
    client: &'a ApiClient<T>,
}

impl<'a, T: Transport> SectorsService<'a, T> {
    pub fn new(client: &'a ApiClient<T>) -> Self {
        Self { client }
    }

    pub async fn fetch_list(&self, grid: &GridParams) -> Result<PaginatedList<Sector>, ApiError> {
        self.client.get(ENDPOINT, grid.to_query()).await
    }

    /// Sectors of one garden, in the garden's order.
    pub async fn fetch_by_garden(&self, garden_id: u64) -> Result<PaginatedList<Sector>, ApiError> {
        let grid = GridParams::base("sectorId").with_filter("gardenId", garden_id.to_string());
        self.fetch_list(&grid).await
    }

    pub async fn fetch_one(&self, id: &str) -> Result<Sector, ApiError> {
        self.client
            .get(&format!("{ENDPOINT}/{id}"), Vec::new())
            .await
    }

    /// A sector always belongs to a garden, so `garden_id` must be set.
    pub async fn add(&self, sector: &Sector) -> Result<(), ApiError> {
        if sector.garden_id == 0 {
            return Err(ApiError::InvalidId(sector.garden_id.to_string()));
        }
        self.client.post(ENDPOINT, sector).await?;
        tracing::info!("sector `{}` added to garden {}", sector.name, sector.garden_id);
        Ok(())
    }

    pub async fn update(&self, id: &str, sector: &Sector) -> Result<(), ApiError> {
        self.client.put(&format!("{ENDPOINT}/{id}"), sector).await?;
        tracing::info!("sector {id} updated");
        Ok(())
    }

    pub async fn delete(&self, id: &str) -> Result<(), ApiError> {
        self.client.delete(&format!("{ENDPOINT}/{id}")).await?;
        tracing::info!("sector {id} deleted");
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::testing::FakeTransport;
    use crate::transport::Method;

    #[tokio::test]
    async fn sectors_are_filtered_by_garden() {
        let client = ApiClient::new(FakeTransport::new());
        client.transport().respond(200, r#"{"list":[],"count":0}"#);

        let page = client.sectors().fetch_by_garden(4).await.unwrap();

        assert!(page.is_empty());
        let sent = client.transport().requests();
        assert_eq!(sent[0].path, "/sectors");
        assert!(sent[0]
            .query
            .contains(&("gardenId".to_string(), "4".to_string())));
    }

    #[tokio::test]
    async fn orphan_sector_is_not_sent() {
        let client = ApiClient::new(FakeTransport::new());
        let sector = Sector {
            name: "A".to_string(),
            crops: "maiz".to_string(),
            centralizer_key: "k".to_string(),
            ..Sector::default()
        };

        assert!(client.sectors().add(&sector).await.is_err());
        assert!(client.transport().requests().is_empty());

        let sector = Sector {
            garden_id: 3,
            ..sector
        };
        client.sectors().add(&sector).await.unwrap();
        let sent = client.transport().requests();
        assert_eq!(sent[0].method, Method::Post);
        assert_eq!(sent[0].body.as_ref().unwrap()["gardenId"], 3);
    }
}
