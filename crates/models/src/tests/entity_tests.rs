use configs::DatabaseConfig;
use migration::MigratorTrait;
use sea_orm::{ActiveModelTrait, DatabaseConnection, EntityTrait, IntoActiveModel, ModelTrait};

use crate::db::connect_with_config;
use crate::{offer, order, user, Resource};

/// Fresh in-memory database with the schema applied
async fn setup_test_db() -> anyhow::Result<DatabaseConnection> {
    let cfg = DatabaseConfig { url: "sqlite::memory:".into(), ..DatabaseConfig::default() };
    let db = connect_with_config(&cfg).await?;
    migration::Migrator::up(&db, None).await?;
    Ok(db)
}

fn sample_order() -> order::Model {
    order::Model {
        id: 7,
        name: "Paint fence".into(),
        description: "Two coats, white".into(),
        start_date: "02/14/2013".into(),
        end_date: "03/01/2013".into(),
        address: "4759 William Haven Apt. 194".into(),
        price: 4500,
        customer_id: 1,
        executor_id: 2,
    }
}

#[test]
fn serialized_records_carry_every_field() {
    let json = serde_json::to_value(sample_order()).unwrap();
    let mut keys: Vec<_> = json.as_object().unwrap().keys().cloned().collect();
    keys.sort();
    assert_eq!(
        keys,
        ["address", "customer_id", "description", "end_date", "executor_id", "id", "name", "price", "start_date"]
    );

    let offer = serde_json::to_value(offer::Model { id: 1, customer_id: 2, executor_id: 3 }).unwrap();
    assert_eq!(offer, serde_json::json!({"id": 1, "customer_id": 2, "executor_id": 3}));
}

#[test]
fn missing_field_is_rejected_on_input() {
    let err = serde_json::from_value::<user::Model>(serde_json::json!({
        "id": 1, "first_name": "A", "last_name": "B", "email": "a@x.com", "role": "customer", "phone": "1"
    }))
    .unwrap_err();
    assert!(err.to_string().contains("missing field `age`"));
}

#[test]
fn from_changes_keeps_path_id() {
    let changes = offer::Changes { customer_id: 4, executor_id: 5 };
    let model = offer::Entity::from_changes(9, changes);
    assert_eq!(model, offer::Model { id: 9, customer_id: 4, executor_id: 5 });
    assert_eq!(offer::Entity::user_refs(&model), vec![4, 5]);
    assert!(user::Entity::user_refs(&user::Model {
        id: 1,
        first_name: String::new(),
        last_name: String::new(),
        age: 0,
        email: String::new(),
        role: String::new(),
        phone: String::new(),
    })
    .is_empty());
}

#[tokio::test]
async fn order_row_round_trips_through_sqlite() -> anyhow::Result<()> {
    let db = setup_test_db().await?;

    let created = sample_order().into_active_model().reset_all().insert(&db).await?;
    assert_eq!(created, sample_order());

    let found = order::Entity::find_by_id(7).one(&db).await?;
    assert_eq!(found, Some(sample_order()));

    // No FK constraint: the referenced users do not exist.
    assert!(user::Entity::find_by_id(1).one(&db).await?.is_none());

    created.delete(&db).await?;
    assert!(order::Entity::find_by_id(7).one(&db).await?.is_none());
    Ok(())
}

#[tokio::test]
async fn customer_relation_resolves_user() -> anyhow::Result<()> {
    use sea_orm::{QuerySelect, RelationTrait, JoinType};

    let db = setup_test_db().await?;
    user::Model {
        id: 1,
        first_name: "Hugh".into(),
        last_name: "Jackman".into(),
        age: 50,
        email: "hugh@example.com".into(),
        role: "customer".into(),
        phone: "6197314432".into(),
    }
    .into_active_model()
    .reset_all()
    .insert(&db)
    .await?;
    sample_order().into_active_model().reset_all().insert(&db).await?;

    let joined = order::Entity::find()
        .join(JoinType::InnerJoin, order::Relation::Customer.def())
        .all(&db)
        .await?;
    assert_eq!(joined.len(), 1);

    let orphaned = order::Entity::find()
        .join(JoinType::InnerJoin, order::Relation::Executor.def())
        .all(&db)
        .await?;
    assert!(orphaned.is_empty());
    Ok(())
}
