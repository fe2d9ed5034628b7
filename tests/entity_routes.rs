//! CRUD coverage for the entity routes. Every mutating route validates its
//! user (and category) references before touching its own table.

mod common;

use chrono::{Datelike, Utc};

use common::{add_user, send, send_form, test_app};

#[tokio::test]
async fn income_crud_validates_its_references() {
    let app = test_app().await;

    let orphan = send_form(
        &app,
        "POST",
        "/income/add",
        "user_id=999&income_category_id=1&description=salary&amount=150.00",
    )
    .await;
    assert_eq!(orphan["status"], "User not found");

    let user_id = add_user(&app, "alice", "1234").await;

    let bad_category = send_form(
        &app,
        "POST",
        "/income/add",
        &format!("user_id={user_id}&income_category_id=999&description=salary&amount=150.00"),
    )
    .await;
    assert_eq!(bad_category["status"], "Income category not found");

    let created = send_form(
        &app,
        "POST",
        "/income/add",
        &format!("user_id={user_id}&income_category_id=1&description=salary&amount=150.00"),
    )
    .await;
    assert_eq!(created["status"], "Success");
    assert_eq!(created["content"]["amount"], "150.00");
    let income_id = created["content"]["id"].as_i64().unwrap();

    let fetched = send(&app, "GET", &format!("/income/id/{income_id}")).await;
    assert_eq!(fetched["status"], "Success");
    assert_eq!(fetched["content"]["description"], "salary");

    let listed = send(&app, "GET", &format!("/income/user_id/{user_id}/all")).await;
    assert_eq!(listed["status"], "Success");
    assert_eq!(listed["content"].as_array().unwrap().len(), 1);

    let updated = send_form(
        &app,
        "PUT",
        &format!("/income/update/id/{income_id}"),
        &format!("user_id={user_id}&income_category_id=2&description=bonus&amount=75.25"),
    )
    .await;
    assert_eq!(updated["status"], "Success");
    assert_eq!(updated["content"]["description"], "bonus");
    assert_eq!(updated["content"]["amount"], "75.25");

    let update_missing = send_form(
        &app,
        "PUT",
        "/income/update/id/999",
        &format!("user_id={user_id}&income_category_id=1&description=x&amount=1.00"),
    )
    .await;
    assert_eq!(update_missing["status"], "Income does not exist");

    let deleted = send(&app, "DELETE", &format!("/income/delete/id/{income_id}")).await;
    assert_eq!(deleted["status"], "Success");
    let again = send(&app, "DELETE", &format!("/income/delete/id/{income_id}")).await;
    assert_eq!(again["status"], "Income does not exist");
}

#[tokio::test]
async fn outcome_crud_round_trip() {
    let app = test_app().await;
    let user_id = add_user(&app, "alice", "1234").await;

    let created = send_form(
        &app,
        "POST",
        "/outcome/add",
        &format!("user_id={user_id}&outcome_category_id=1&description=groceries&amount=25.00"),
    )
    .await;
    assert_eq!(created["status"], "Success");
    let outcome_id = created["content"]["id"].as_i64().unwrap();

    let listed = send(&app, "GET", "/outcome/all").await;
    assert_eq!(listed["status"], "Success");

    let updated = send_form(
        &app,
        "PUT",
        &format!("/outcome/update/id/{outcome_id}"),
        &format!("user_id={user_id}&outcome_category_id=2&description=bus+fare&amount=3.50"),
    )
    .await;
    assert_eq!(updated["status"], "Success");
    assert_eq!(updated["content"]["description"], "bus fare");

    let deleted = send(&app, "DELETE", &format!("/outcome/delete/id/{outcome_id}")).await;
    assert_eq!(deleted["status"], "Success");

    let empty = send(&app, "GET", &format!("/outcome/user_id/{user_id}/all")).await;
    assert_eq!(empty["status"], "Data not found");
}

#[tokio::test]
async fn outcome_plan_carries_a_spend_date() {
    let app = test_app().await;
    let user_id = add_user(&app, "alice", "1234").await;

    let created = send_form(
        &app,
        "POST",
        "/outcome_plan/add",
        &format!(
            "user_id={user_id}&outcome_category_id=1&description=rent&amount=500.00&date_spend=2026-09-01"
        ),
    )
    .await;
    assert_eq!(created["status"], "Success");
    assert_eq!(created["content"]["date_spend"], "2026-09-01");
    let plan_id = created["content"]["id"].as_i64().unwrap();

    let fetched = send(&app, "GET", &format!("/outcome_plan/id/{plan_id}")).await;
    assert_eq!(fetched["status"], "Success");

    let deleted = send(&app, "DELETE", &format!("/outcome_plan/delete/id/{plan_id}")).await;
    assert_eq!(deleted["status"], "Success");
}

#[tokio::test]
async fn budget_and_saving_round_trips() {
    let app = test_app().await;
    let user_id = add_user(&app, "alice", "1234").await;

    let budget = send_form(
        &app,
        "POST",
        "/budget/add",
        &format!("user_id={user_id}&description=holiday&amount=300.00&due_date=2026-12-01"),
    )
    .await;
    assert_eq!(budget["status"], "Success");
    let budget_id = budget["content"]["id"].as_i64().unwrap();

    let updated = send_form(
        &app,
        "PUT",
        &format!("/budget/update/id/{budget_id}"),
        &format!("user_id={user_id}&description=holiday&amount=350.00&due_date=2026-12-01"),
    )
    .await;
    assert_eq!(updated["status"], "Success");
    assert_eq!(updated["content"]["amount"], "350.00");

    let saving = send_form(
        &app,
        "POST",
        "/saving/add",
        &format!("user_id={user_id}&description=emergency+fund&amount=100.00&due_date=2027-01-01"),
    )
    .await;
    assert_eq!(saving["status"], "Success");
    assert_eq!(saving["content"]["description"], "emergency fund");
    let saving_id = saving["content"]["id"].as_i64().unwrap();

    let listed = send(&app, "GET", &format!("/saving/user_id/{user_id}/all")).await;
    assert_eq!(listed["status"], "Success");
    assert_eq!(listed["content"].as_array().unwrap().len(), 1);

    let missing_user = send_form(
        &app,
        "POST",
        "/saving/add",
        "user_id=999&description=x&amount=1.00&due_date=2027-01-01",
    )
    .await;
    assert_eq!(missing_user["status"], "User not found");

    let deleted = send(&app, "DELETE", &format!("/saving/delete/id/{saving_id}")).await;
    assert_eq!(deleted["status"], "Success");
    let deleted = send(&app, "DELETE", &format!("/budget/delete/id/{budget_id}")).await;
    assert_eq!(deleted["status"], "Success");
}

#[tokio::test]
async fn deleting_a_user_removes_its_entries() {
    let app = test_app().await;
    let user_id = add_user(&app, "alice", "1234").await;

    send_form(
        &app,
        "POST",
        "/income/add",
        &format!("user_id={user_id}&income_category_id=1&description=salary&amount=150.00"),
    )
    .await;

    let deleted = send(&app, "DELETE", &format!("/user/delete/id/{user_id}")).await;
    assert_eq!(deleted["status"], "Success");

    let orphaned = send(&app, "GET", &format!("/income/user_id/{user_id}/all")).await;
    assert_eq!(orphaned["status"], "Data not found");
}

#[tokio::test]
async fn monthly_summary_sums_the_current_month() {
    let app = test_app().await;
    let user_id = add_user(&app, "alice", "1234").await;

    for body in [
        format!("user_id={user_id}&income_category_id=1&description=salary&amount=150.00"),
        format!("user_id={user_id}&income_category_id=2&description=gift&amount=50.00"),
    ] {
        let envelope = send_form(&app, "POST", "/income/add", &body).await;
        assert_eq!(envelope["status"], "Success");
    }
    let outcome = send_form(
        &app,
        "POST",
        "/outcome/add",
        &format!("user_id={user_id}&outcome_category_id=1&description=groceries&amount=25.00"),
    )
    .await;
    assert_eq!(outcome["status"], "Success");

    // Rows are stamped with the database's current UTC time.
    let today = Utc::now().date_naive();
    let summary = send(
        &app,
        "GET",
        &format!(
            "/general/monthly_summary/{user_id}?year={}&month={}",
            today.year(),
            today.month()
        ),
    )
    .await;
    assert_eq!(summary["status"], "Success");
    assert_eq!(summary["content"]["total_income"].as_f64(), Some(200.0));
    assert_eq!(summary["content"]["total_outcome"].as_f64(), Some(25.0));

    let invalid = send(
        &app,
        "GET",
        &format!("/general/monthly_summary/{user_id}?year=2026&month=13"),
    )
    .await;
    assert_eq!(invalid["status"], "Invalid month");

    let unknown = send(&app, "GET", "/general/monthly_summary/999?year=2026&month=8").await;
    assert_eq!(unknown["status"], "User not found");
}

#[tokio::test]
async fn category_listings_are_seeded() {
    let app = test_app().await;

    let income = send(&app, "GET", "/general/income_categories").await;
    assert_eq!(income["status"], "Success");
    assert!(!income["content"].as_array().unwrap().is_empty());

    let outcome = send(&app, "GET", "/general/outcome_categories").await;
    assert_eq!(outcome["status"], "Success");
    assert!(!outcome["content"].as_array().unwrap().is_empty());
}
