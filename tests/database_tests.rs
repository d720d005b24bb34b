use hospital_admin::crypto::legacy_password_digest;
use hospital_admin::database::models::*;
use hospital_admin::database::schema::TABLES;
use hospital_admin::database::Database;
use hospital_admin::AdminError;

mod common;
use common::*;

#[tokio::test]
async fn test_database_creation_and_migration() -> Result<(), Box<dyn std::error::Error>> {
    let db = setup_test_db().await;
    assert!(!db.pool().is_closed());

    // Schema creation is idempotent
    db.run_migrations().await?;
    db.run_migrations().await?;

    let tables = db.table_names().await?;
    for table in TABLES {
        assert!(tables.contains(&table.to_string()), "missing table {}", table);
    }
    Ok(())
}

#[tokio::test]
async fn test_patient_insert_and_list() -> Result<(), Box<dyn std::error::Error>> {
    let db = setup_test_db().await;
    db.insert_patient(&test_patient("Existing", "first")).await?;
    let before = db.list_patients().await?.len();

    let patient = NewPatient::register("Asha Menon", 42, Gender::Female, Department::Icu, "hunter2");
    let saved = db.insert_patient(&patient).await?;

    let patients = db.list_patients().await?;
    assert_eq!(patients.len(), before + 1);

    let stored = patients.last().unwrap();
    assert_eq!(stored, &saved);
    assert_eq!(stored.name, "Asha Menon");
    assert_eq!(stored.age, 42);
    assert_eq!(stored.gender, Gender::Female);
    assert_eq!(stored.department, Department::Icu);
    assert_eq!(stored.hashed_password, legacy_password_digest("hunter2"));
    assert_eq!(stored.hashed_password.len(), 8);
    assert_eq!(stored.timestamp, patient.timestamp);
    Ok(())
}

#[tokio::test]
async fn test_same_password_same_digest() -> Result<(), Box<dyn std::error::Error>> {
    let db = setup_test_db().await;
    db.insert_patient(&test_patient("A", "shared")).await?;
    db.insert_patient(&test_patient("B", "shared")).await?;
    db.insert_patient(&test_patient("C", "different")).await?;

    let patients = db.list_patients().await?;
    assert_eq!(patients[0].hashed_password, patients[1].hashed_password);
    assert_ne!(patients[0].hashed_password, patients[2].hashed_password);
    Ok(())
}

#[tokio::test]
async fn test_equipment_is_append_only() -> Result<(), Box<dyn std::error::Error>> {
    let db = setup_test_db().await;
    let updates = [
        (Equipment::Ventilator, EquipmentStatus::Working),
        (Equipment::Ventilator, EquipmentStatus::Offline),
        (Equipment::InfusionPump, EquipmentStatus::NeedsMaintenance),
        (Equipment::Ventilator, EquipmentStatus::Working),
    ];

    let mut saved = Vec::new();
    for (equipment, status) in updates {
        saved.push(db.insert_equipment(&NewEquipmentStatus::now(equipment, status)).await?);
    }

    let rows = db.list_equipment().await?;
    assert_eq!(rows.len(), updates.len());
    assert_eq!(rows, saved);
    for (row, (equipment, status)) in rows.iter().zip(updates) {
        assert_eq!(row.equipment_name, equipment);
        assert_eq!(row.status, status);
    }
    assert!(rows.windows(2).all(|w| w[0].id < w[1].id));
    Ok(())
}

#[tokio::test]
async fn test_referrals_are_append_only() -> Result<(), Box<dyn std::error::Error>> {
    let db = setup_test_db().await;
    let first = db.insert_referral(&NewReferral::now(Hospital::CityCare, 12, 4)).await?;

    for beds in 0..5 {
        db.insert_referral(&NewReferral::now(Hospital::Medipoint, beds, 1)).await?;
    }

    let rows = db.list_referrals().await?;
    assert_eq!(rows.len(), 6);
    assert_eq!(rows[0], first);
    let beds: Vec<i64> = rows[1..].iter().map(|r| r.beds_available).collect();
    assert_eq!(beds, vec![0, 1, 2, 3, 4]);
    Ok(())
}

#[tokio::test]
async fn test_empty_tables_list_nothing() -> Result<(), Box<dyn std::error::Error>> {
    let db = setup_test_db().await;
    assert!(db.list_patients().await?.is_empty());
    assert!(db.list_equipment().await?.is_empty());
    assert!(db.list_referrals().await?.is_empty());
    Ok(())
}

#[tokio::test]
async fn test_unknown_stored_value_is_an_error() -> Result<(), Box<dyn std::error::Error>> {
    let db = setup_test_db().await;
    sqlx::query(
        "INSERT INTO equipment (equipment_name, status, timestamp) VALUES ('MRI', 'Working', '2024-01-01T00:00:00+00:00')",
    )
    .execute(db.pool())
    .await?;

    let result = db.list_equipment().await;
    assert!(matches!(result, Err(AdminError::DatabaseError(_))));
    Ok(())
}

#[tokio::test]
async fn test_file_store_persists_across_reopen() -> Result<(), Box<dyn std::error::Error>> {
    let (dir, db) = setup_file_db().await;
    db.insert_referral(&NewReferral::now(Hospital::LifeLine, 3, 2)).await?;
    db.pool().close().await;

    let reopened = Database::new(dir.path().join("hospital_data.db")).await?;
    reopened.run_migrations().await?;
    let rows = reopened.list_referrals().await?;
    assert_eq!(rows.len(), 1);
    assert_eq!(rows[0].hospital_name, Hospital::LifeLine);
    Ok(())
}

#[tokio::test]
async fn test_backup_matches_store_file() -> Result<(), Box<dyn std::error::Error>> {
    let (dir, db) = setup_file_db().await;
    db.insert_patient(&test_patient("Backup", "pw")).await?;
    db.insert_equipment(&NewEquipmentStatus::now(Equipment::Defibrillator, EquipmentStatus::Offline))
        .await?;

    let bytes = db.backup_bytes().await?;
    let on_disk = std::fs::read(dir.path().join("hospital_data.db"))?;
    assert_eq!(bytes, on_disk);

    let out = dir.path().join("hospital_data_backup.db");
    let written = db.backup_to(&out).await?;
    assert_eq!(written as usize, on_disk.len());
    assert_eq!(std::fs::read(&out)?, on_disk);
    Ok(())
}

#[tokio::test]
async fn test_backup_of_in_memory_store_is_unavailable() {
    let db = setup_test_db().await;
    let result = db.backup_bytes().await;
    assert!(matches!(result, Err(AdminError::BackupUnavailable(_))));
}
