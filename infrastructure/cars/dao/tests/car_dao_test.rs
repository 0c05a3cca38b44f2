use car_dao::CarDao;
use car_errors::CarError;
use database_traits::dao::GenericDao;
use test_utils::*;

fn setup_dao() -> (CarDao, ManualClock) {
    let (store, clock) = store_with_clock(1_000);
    (CarDao::new(store), clock)
}

#[tokio::test]
async fn test_create_assigns_id_and_created_at() {
    let (dao, _clock) = setup_dao();

    let car = dao.create(sample_payload()).await.unwrap();

    assert_eq!(car.id, 1);
    assert_eq!(car.created_at, 1_000);
    assert_eq!(car.updated_at, None);
    assert_eq!(car.payload(), sample_payload());
}

#[tokio::test]
async fn test_find_by_id_returns_stored_car() {
    let (dao, _clock) = setup_dao();
    let created = dao.create(sample_payload()).await.unwrap();

    let found = dao.find_by_id(created.id).await.unwrap();

    assert_eq!(found, created);
}

#[tokio::test]
async fn test_unknown_id_is_not_found_everywhere() {
    let (dao, _clock) = setup_dao();

    let expected = CarError::not_found(77);
    assert_eq!(dao.find_by_id(77).await.unwrap_err(), expected);
    assert_eq!(
        dao.update(77, sample_payload()).await.unwrap_err(),
        expected
    );
    assert_eq!(dao.delete(77).await.unwrap_err(), expected);
    assert_eq!(dao.is_booked(77).await.unwrap_err(), expected);
}

#[tokio::test]
async fn test_update_overwrites_fields_and_stamps() {
    let (dao, clock) = setup_dao();
    let created = dao.create(sample_payload()).await.unwrap();

    clock.advance(500);
    let updated = dao.update(created.id, other_payload()).await.unwrap();

    assert_eq!(updated.id, created.id);
    assert_eq!(updated.created_at, 1_000);
    assert_eq!(updated.updated_at, Some(1_500));
    assert_eq!(updated.payload(), other_payload());
    assert_eq!(dao.find_by_id(created.id).await.unwrap(), updated);
}

#[tokio::test]
async fn test_update_never_precedes_creation() {
    let (dao, clock) = setup_dao();
    let created = dao.create(sample_payload()).await.unwrap();

    clock.set(10);
    let updated = dao.update(created.id, booked_payload()).await.unwrap();

    assert_eq!(updated.updated_at, Some(created.created_at));
}

#[tokio::test]
async fn test_delete_returns_car_and_prevents_resurrection() {
    let (dao, _clock) = setup_dao();
    let created = dao.create(sample_payload()).await.unwrap();

    let deleted = dao.delete(created.id).await.unwrap();
    assert_eq!(deleted, created);

    assert!(dao.find_by_id(created.id).await.unwrap_err().is_not_found());
    assert!(dao.delete(created.id).await.unwrap_err().is_not_found());
}

#[tokio::test]
async fn test_ids_not_reused_after_delete() {
    let (dao, _clock) = setup_dao();

    let first = dao.create(sample_payload()).await.unwrap();
    let second = dao.create(sample_payload()).await.unwrap();
    dao.delete(second.id).await.unwrap();
    let third = dao.create(sample_payload()).await.unwrap();

    assert_eq!((first.id, second.id, third.id), (1, 2, 3));
}

#[tokio::test]
async fn test_is_booked_tracks_updates() {
    let (dao, _clock) = setup_dao();
    let created = dao.create(sample_payload()).await.unwrap();

    assert!(!dao.is_booked(created.id).await.unwrap());

    dao.update(created.id, booked_payload()).await.unwrap();
    assert!(dao.is_booked(created.id).await.unwrap());
}

#[tokio::test]
async fn test_all_is_ordered_by_id() {
    let (dao, _clock) = setup_dao();
    dao.create(sample_payload()).await.unwrap();
    dao.create(other_payload()).await.unwrap();
    dao.create(sample_payload()).await.unwrap();
    dao.delete(2).await.unwrap();

    let ids: Vec<_> =
        dao.all().await.unwrap().into_iter().map(|car| car.id).collect();

    assert_eq!(ids, vec![1, 3]);
    assert_eq!(dao.store().len().await, 2);
}

#[tokio::test]
async fn test_concurrent_creates_get_distinct_ids() -> anyhow::Result<()> {
    let dao = CarDao::new(fresh_store());

    let tasks = (0..32).map(|_| {
        let dao = dao.clone();
        tokio::spawn(async move { dao.create(sample_payload()).await })
    });

    let mut ids = Vec::new();
    for result in futures::future::join_all(tasks).await {
        ids.push(result??.id);
    }
    ids.sort_unstable();

    assert_eq!(ids, (1..=32).collect::<Vec<_>>());
    Ok(())
}
