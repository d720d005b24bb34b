use hospital_admin::alarms::{check_alarms, AlarmReport};
use hospital_admin::database::models::*;

mod common;
use common::*;

#[tokio::test]
async fn test_all_clear_on_empty_store() -> Result<(), Box<dyn std::error::Error>> {
    let db = setup_test_db().await;
    let report = check_alarms(&db).await?;
    assert_eq!(report, AlarmReport::AllClear);
    Ok(())
}

#[tokio::test]
async fn test_reports_only_non_working_equipment() -> Result<(), Box<dyn std::error::Error>> {
    let db = setup_test_db().await;
    db.insert_equipment(&NewEquipmentStatus::now(Equipment::Ventilator, EquipmentStatus::Working))
        .await?;
    let offline = db
        .insert_equipment(&NewEquipmentStatus::now(Equipment::Defibrillator, EquipmentStatus::Offline))
        .await?;

    let report = check_alarms(&db).await?;
    let alarms = report.alarms();
    assert_eq!(alarms.len(), 1);
    assert_eq!(alarms[0].equipment_name, Equipment::Defibrillator);
    assert_eq!(alarms[0].status, EquipmentStatus::Offline);
    assert_eq!(alarms[0].timestamp, offline.timestamp);
    Ok(())
}

#[tokio::test]
async fn test_latest_status_wins() -> Result<(), Box<dyn std::error::Error>> {
    let db = setup_test_db().await;

    // Repaired after going offline: no alarm
    db.insert_equipment(&NewEquipmentStatus::now(Equipment::Ventilator, EquipmentStatus::Offline))
        .await?;
    db.insert_equipment(&NewEquipmentStatus::now(Equipment::Ventilator, EquipmentStatus::Working))
        .await?;

    // Degraded after working: alarm
    db.insert_equipment(&NewEquipmentStatus::now(Equipment::InfusionPump, EquipmentStatus::Working))
        .await?;
    db.insert_equipment(&NewEquipmentStatus::now(
        Equipment::InfusionPump,
        EquipmentStatus::NeedsMaintenance,
    ))
    .await?;

    let report = check_alarms(&db).await?;
    assert!(!report.is_all_clear());
    assert_eq!(report.alarms().len(), 1);
    assert_eq!(report.alarms()[0].equipment_name, Equipment::InfusionPump);
    assert_eq!(report.alarms()[0].status, EquipmentStatus::NeedsMaintenance);

    // History is untouched by the check
    assert_eq!(db.list_equipment().await?.len(), 4);
    Ok(())
}

#[tokio::test]
async fn test_check_is_a_fresh_snapshot() -> Result<(), Box<dyn std::error::Error>> {
    let db = setup_test_db().await;
    db.insert_equipment(&NewEquipmentStatus::now(Equipment::Defibrillator, EquipmentStatus::Offline))
        .await?;
    assert!(!check_alarms(&db).await?.is_all_clear());

    db.insert_equipment(&NewEquipmentStatus::now(Equipment::Defibrillator, EquipmentStatus::Working))
        .await?;
    assert!(check_alarms(&db).await?.is_all_clear());
    Ok(())
}
