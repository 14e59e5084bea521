//! HTTP layer: one route group per entity.

pub mod auth;
pub mod cari_hesaplar;
pub mod common;
pub mod dashboard;
pub mod gorevler;
pub mod projeler;
pub mod teklifler;

use std::sync::Arc;
use std::time::Duration;

use crate::auth::AuthConfig;
use crate::config::AppConfig;
use crate::services::{
    dashboard::DashboardService, projeler::ProjeService, teklifler::TeklifService,
    users::UserService,
};
use crate::storage::Storage;

/// Services shared by the HTTP handlers.
#[derive(Clone)]
pub struct AppServices {
    pub teklifler: TeklifService,
    pub projeler: ProjeService,
    pub dashboard: DashboardService,
    pub users: UserService,
}

impl AppServices {
    pub fn new(storage: Arc<dyn Storage>, config: &AppConfig) -> Self {
        let auth_config = AuthConfig::new(
            config.jwt_secret.clone(),
            Duration::from_secs(config.jwt_expiration),
        );
        Self {
            teklifler: TeklifService::new(storage.clone()),
            projeler: ProjeService::new(storage.clone()),
            dashboard: DashboardService::new(storage.clone()),
            users: UserService::new(storage, auth_config),
        }
    }
}
