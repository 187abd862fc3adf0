// ═══════════════════════════════════════════════════════════════════
// Storage Tests — dataset loading, schema validation, snapshots
// ═══════════════════════════════════════════════════════════════════

use std::io::Write;

use chrono::NaiveDate;
use dossier_core::errors::CoreError;
use dossier_core::models::session::Session;
use dossier_core::storage::manager::StorageManager;
use dossier_core::Dashboard;

const GAME_DATA: &str = include_str!("fixtures/game_data.json");

const MINIMAL: &str = r#"{ "meta": { "wallet": 0, "currentDate": "2025-01-01" } }"#;

// ── Loading ─────────────────────────────────────────────────────────

mod loading {
    use super::*;

    #[test]
    fn fixture_loads() {
        let ds = StorageManager::load_from_str(GAME_DATA).unwrap();
        assert_eq!(ds.meta.wallet, 12_500);
        assert_eq!(ds.meta.current_date, NaiveDate::from_ymd_opt(2025, 4, 7).unwrap());
        assert_eq!(ds.meta.debt_rate.as_deref(), Some("3.5% / day"));
        assert_eq!(ds.meta.days, Some(21));
        assert_eq!(ds.characters.len(), 2);
        assert_eq!(ds.user.shop.len(), 3);
        assert_eq!(ds.user.inventory.len(), 2);
        assert!(ds.user.pending_delivery.is_empty());
        assert_eq!(ds.settings.currency, "CR");
    }

    #[test]
    fn minimal_dataset_uses_defaults() {
        let ds = StorageManager::load_from_str(MINIMAL).unwrap();
        assert!(ds.characters.is_empty());
        assert!(ds.user.shop.is_empty());
        assert_eq!(ds.settings.delivery_eta_max_days, 3);
    }

    #[test]
    fn missing_current_date_defaults_to_epoch() {
        let json = r#"{ "meta": { "wallet": 100 } }"#;
        let ds = StorageManager::load_from_str(json).unwrap();
        assert_eq!(ds.meta.current_date, NaiveDate::default());

        let dash = Dashboard::load_from_json(json).unwrap();
        assert_eq!(dash.balance(), 100);
    }

    #[test]
    fn bytes_and_str_agree() {
        let a = StorageManager::load_from_str(GAME_DATA).unwrap();
        let b = StorageManager::load_from_bytes(GAME_DATA.as_bytes()).unwrap();
        assert_eq!(a, b);
    }

    #[test]
    fn settings_block_is_honoured() {
        let json = r#"{
            "meta": { "wallet": 10, "currentDate": "2025-01-01" },
            "settings": { "currency": "GC", "delivery_eta_min_days": 2, "delivery_eta_max_days": 5 }
        }"#;
        let ds = StorageManager::load_from_str(json).unwrap();
        assert_eq!(ds.settings.currency, "GC");
        assert_eq!(ds.settings.delivery_eta_min_days, 2);
        assert_eq!(ds.settings.default_user_tab, "user-status");
    }

    #[test]
    fn existing_pending_deliveries_load() {
        let json = r#"{
            "meta": { "wallet": 10, "currentDate": "2025-01-01" },
            "user": { "pendingDelivery": [
                { "id": "pending_1", "name": "Kit", "count": 2, "desc": "x", "daysLeft": 1, "orderedAt": "2024-12-31" }
            ] }
        }"#;
        let ds = StorageManager::load_from_str(json).unwrap();
        assert_eq!(ds.user.pending_delivery[0].quantity, 2);
    }
}

// ── Rejections ──────────────────────────────────────────────────────

mod rejections {
    use super::*;

    #[test]
    fn malformed_json() {
        let err = StorageManager::load_from_str("{ nope").unwrap_err();
        assert!(matches!(err, CoreError::Deserialization(_)));
    }

    #[test]
    fn missing_meta() {
        let err = StorageManager::load_from_str(r#"{ "characters": [] }"#).unwrap_err();
        assert!(matches!(err, CoreError::Deserialization(_)));
    }

    #[test]
    fn bad_date() {
        let json = r#"{ "meta": { "wallet": 0, "currentDate": "April 7th" } }"#;
        assert!(matches!(
            StorageManager::load_from_str(json),
            Err(CoreError::Deserialization(_))
        ));
    }

    #[test]
    fn negative_price() {
        let json = r#"{
            "meta": { "wallet": 0, "currentDate": "2025-01-01" },
            "user": { "shop": [ { "id": "S", "name": "Bad", "price": -1 } ] }
        }"#;
        assert!(matches!(
            StorageManager::load_from_str(json),
            Err(CoreError::Deserialization(_))
        ));
    }

    #[test]
    fn duplicate_character_ids() {
        let json = r#"{
            "meta": { "wallet": 0, "currentDate": "2025-01-01" },
            "characters": [ { "id": "C", "name": "A" }, { "id": "C", "name": "B" } ]
        }"#;
        assert!(matches!(
            StorageManager::load_from_str(json),
            Err(CoreError::ValidationError(_))
        ));
    }

    #[test]
    fn missing_character_id() {
        let json = r#"{
            "meta": { "wallet": 0, "currentDate": "2025-01-01" },
            "characters": [ { "name": "Anonymous" } ]
        }"#;
        assert!(matches!(
            StorageManager::load_from_str(json),
            Err(CoreError::ValidationError(_))
        ));
    }

    #[test]
    fn invalid_settings() {
        let json = r#"{
            "meta": { "wallet": 0, "currentDate": "2025-01-01" },
            "settings": { "delivery_eta_min_days": 4, "delivery_eta_max_days": 2 }
        }"#;
        assert!(matches!(
            StorageManager::load_from_str(json),
            Err(CoreError::ValidationError(_))
        ));
    }
}

// ── Files ───────────────────────────────────────────────────────────

mod files {
    use super::*;

    #[test]
    fn load_from_file() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        file.write_all(GAME_DATA.as_bytes()).unwrap();

        let path = file.path().to_str().unwrap();
        let ds = StorageManager::load_from_file(path).unwrap();
        assert_eq!(ds.characters[0].id, "CHAR_001");

        let dash = Dashboard::load_from_file(path).unwrap();
        assert_eq!(dash.balance(), 12_500);
    }

    #[test]
    fn missing_file() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("absent.json");
        let err = StorageManager::load_from_file(path.to_str().unwrap()).unwrap_err();
        assert!(matches!(err, CoreError::FileIO(_)));
    }

    #[test]
    fn dashboard_from_json_and_bytes() {
        assert_eq!(Dashboard::load_from_json(GAME_DATA).unwrap().balance(), 12_500);
        assert_eq!(
            Dashboard::load_from_bytes(GAME_DATA.as_bytes()).unwrap().characters().len(),
            2
        );
    }
}

// ── Snapshots ───────────────────────────────────────────────────────

mod snapshots {
    use super::*;

    #[test]
    fn snapshot_round_trips_without_cart() {
        let ds = StorageManager::load_from_str(GAME_DATA).unwrap();
        let mut session = Session::from_dataset(ds);
        session.unlocked.insert("door1".into());
        session.cart.add("SHOP_001", "Energy Drink", 300);

        let json = StorageManager::snapshot_to_json(&session).unwrap();
        let back: Session = serde_json::from_str(&json).unwrap();

        assert_eq!(back.wallet, session.wallet);
        assert_eq!(back.unlocked, session.unlocked);
        assert_eq!(back.selection, session.selection);
        assert_eq!(back.characters, session.characters);
        assert!(back.cart.is_empty());
    }

    #[test]
    fn snapshot_carries_live_balance_in_meta() {
        let ds = StorageManager::load_from_str(GAME_DATA).unwrap();
        let mut session = Session::from_dataset(ds);
        session.wallet.adjust(-500);

        let json = StorageManager::snapshot_to_json(&session).unwrap();
        let restored = StorageManager::load_snapshot(&json).unwrap();

        assert_eq!(restored.meta.wallet, 12_000);
        assert_eq!(restored.wallet.balance(), 12_000);
        // the live session itself is not rewritten
        assert_eq!(session.meta.wallet, 12_500);
    }

    #[test]
    fn snapshot_with_dangling_selection_is_rejected() {
        let ds = StorageManager::load_from_str(GAME_DATA).unwrap();
        let mut session = Session::from_dataset(ds);
        session.selection.active_character_id = Some("CHAR_404".into());

        let json = StorageManager::snapshot_to_json(&session).unwrap();
        assert!(matches!(
            StorageManager::load_snapshot(&json),
            Err(CoreError::ValidationError(_))
        ));
    }

    #[test]
    fn dataset_is_not_a_snapshot() {
        assert!(matches!(
            StorageManager::load_snapshot(GAME_DATA),
            Err(CoreError::Deserialization(_))
        ));
    }
}
