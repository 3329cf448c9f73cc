//! Startup seeding.

use vitrine_auth::password;
use vitrine_core::TeamAccount;
use vitrine_storage::DynStorage;

use crate::config::BootstrapConfig;

/// Creates the initial admin account when configured and not yet present.
///
/// Re-running against an existing account is a no-op, so restarts are safe.
pub async fn seed_admin(cfg: &BootstrapConfig, storage: &DynStorage) -> anyhow::Result<()> {
    let (Some(email), Some(pw)) = (&cfg.admin_email, &cfg.admin_password) else {
        return Ok(());
    };
    if storage.find_team_account_by_email(email).await?.is_some() {
        return Ok(());
    }
    let name = cfg
        .admin_name
        .clone()
        .unwrap_or_else(|| "Administrador".to_string());
    let hash = password::hash(pw)?;
    storage
        .create_team_account(TeamAccount::new(name, email.clone(), hash, true))
        .await?;
    tracing::info!(email = %email, "bootstrap admin account created");
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use vitrine_db_memory::create_storage;

    fn config() -> BootstrapConfig {
        BootstrapConfig {
            admin_name: None,
            admin_email: Some("admin@vitrine.store".into()),
            admin_password: Some("senha-segura".into()),
        }
    }

    #[tokio::test]
    async fn test_seed_creates_account_once() {
        let storage = create_storage();
        seed_admin(&config(), &storage).await.unwrap();
        seed_admin(&config(), &storage).await.unwrap();

        let accounts = storage.list_team_accounts().await.unwrap();
        assert_eq!(accounts.len(), 1);
        assert_eq!(accounts[0].name, "Administrador");
        assert!(password::verify("senha-segura", &accounts[0].password_hash));
    }

    #[tokio::test]
    async fn test_seed_without_credentials_is_noop() {
        let storage = create_storage();
        seed_admin(&BootstrapConfig::default(), &storage)
            .await
            .unwrap();
        assert!(storage.list_team_accounts().await.unwrap().is_empty());
    }
}
