use tracing::info;

use crate::api::{CreateBreweryRequest, UpdateBreweryRequest};
use crate::database::{Brewery, Store};
use crate::error::{ApiError, ApiResult};
use crate::middleware::AuthContext;

pub const BREWERY_NOT_FOUND: &str = "Brewery doesn't exist";
pub const ACCESS_FORBIDDEN: &str = "Access is forbidden";

/// Brewery operations with ownership scoping applied
pub struct BreweryService<'a> {
    store: &'a dyn Store,
}

impl<'a> BreweryService<'a> {
    pub fn new(store: &'a dyn Store) -> Self {
        Self { store }
    }

    /// Users see only their own breweries; service callers see everything.
    pub async fn list_visible(&self, auth: &AuthContext) -> ApiResult<Vec<Brewery>> {
        Ok(self.store.list_breweries(auth.user_id).await?)
    }

    pub async fn require_existing(&self, id: i64) -> ApiResult<Brewery> {
        self.store
            .get_brewery(id)
            .await?
            .ok_or_else(|| ApiError::not_found(BREWERY_NOT_FOUND))
    }

    /// 404 when missing, 403 when owned by a different user.
    pub async fn find_accessible(&self, auth: &AuthContext, id: i64) -> ApiResult<Brewery> {
        let brewery = self.require_existing(id).await?;
        check_access(auth, &brewery)?;
        Ok(brewery)
    }

    pub async fn create(&self, auth: &AuthContext, request: CreateBreweryRequest) -> ApiResult<Brewery> {
        let new = request.into_new_brewery(auth)?;
        let brewery = self.store.insert_brewery(new).await?;
        info!("Brewery with id {} created.", brewery.id);
        Ok(brewery)
    }

    pub async fn update(&self, id: i64, request: UpdateBreweryRequest) -> ApiResult<()> {
        self.require_existing(id).await?;
        let patch = request.into_patch()?;
        // A concurrent delete between the lookup and the write is reported as 404.
        if !self.store.update_brewery(id, patch).await? {
            return Err(ApiError::not_found(BREWERY_NOT_FOUND));
        }
        Ok(())
    }

    pub async fn delete(&self, id: i64) -> ApiResult<()> {
        if !self.store.delete_brewery(id).await? {
            return Err(ApiError::not_found(BREWERY_NOT_FOUND));
        }
        info!("Brewery with id {} deleted.", id);
        Ok(())
    }
}

/// Ownerless breweries are open to every caller.
pub fn check_access(auth: &AuthContext, brewery: &Brewery) -> ApiResult<()> {
    match (auth.user_id, brewery.user_id) {
        (Some(caller), Some(owner)) if caller != owner => Err(ApiError::forbidden(ACCESS_FORBIDDEN)),
        _ => Ok(()),
    }
}
