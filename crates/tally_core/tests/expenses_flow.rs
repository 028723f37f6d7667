use chrono::NaiveDate;
use rust_decimal::Decimal;
use std::str::FromStr;
use tally_core::{
    CoreConfig, DispatchOutcome, ExpensesFlow, SequentialIdGenerator, UiEvent, YearFilter,
};

fn add_expense(
    flow: &mut ExpensesFlow<SequentialIdGenerator>,
    title: &str,
    amount: &str,
    date: &str,
) {
    for (field, value) in [("title", title), ("amount", amount), ("date", date)] {
        let event = UiEvent::field_changed(field, value);
        flow.dispatch(event).unwrap();
    }
    flow.dispatch(UiEvent::SubmitRequested).unwrap();
}

fn seeded_flow() -> ExpensesFlow<SequentialIdGenerator> {
    let mut flow = ExpensesFlow::new(SequentialIdGenerator::new(), YearFilter::default());
    flow.dispatch(UiEvent::FormOpened).unwrap();
    add_expense(&mut flow, "Toilet Paper", "94.12", "2020-08-14");
    add_expense(&mut flow, "New TV", "799.49", "2021-02-12");
    add_expense(&mut flow, "Car Insurance", "294.67", "2020-02-28");
    flow
}

#[test]
fn filter_returns_matching_year_in_store_order() {
    let mut flow = seeded_flow();
    assert_eq!(flow.records().len(), 3);

    flow.dispatch(UiEvent::FilterChanged("2020".to_string()))
        .unwrap();
    let titles: Vec<_> = flow.filtered().iter().map(|e| e.title.as_str()).collect();
    assert_eq!(titles, vec!["Toilet Paper", "Car Insurance"]);

    assert_eq!(
        flow.dispatch(UiEvent::FilterChanged("2022".to_string()))
            .unwrap(),
        DispatchOutcome::FilterChanged(2022)
    );
    assert!(flow.filtered().is_empty());
    assert_eq!(flow.records().len(), 3);
}

#[test]
fn committed_expense_is_typed() {
    let flow = seeded_flow();
    let tv = &flow.records()[1];
    assert_eq!(tv.amount, Decimal::from_str("799.49").unwrap());
    assert_eq!(tv.date, NaiveDate::from_ymd_opt(2021, 2, 12).unwrap());
    assert!(flow.draft().is_blank());
}

#[test]
fn filter_follows_new_expenses() {
    let mut flow = seeded_flow();
    flow.dispatch(UiEvent::FilterChanged("2021".to_string()))
        .unwrap();
    assert_eq!(flow.filtered().len(), 1);

    add_expense(&mut flow, "Desk", "120", "2021-11-03");
    let titles: Vec<_> = flow.filtered().iter().map(|e| e.title.as_str()).collect();
    assert_eq!(titles, vec!["New TV", "Desk"]);
}

#[test]
fn invalid_expense_raises_notification() {
    let mut flow = seeded_flow();
    add_expense(&mut flow, "Gift", "0", "2020-12-24");

    assert_eq!(flow.records().len(), 3);
    assert_eq!(
        flow.notification().map(|n| n.message.as_str()),
        Some("Please enter a valid amount ( > 0 )")
    );
    assert_eq!(flow.draft().get("title"), "Gift");

    flow.dispatch(UiEvent::NotificationDismissed).unwrap();
    assert!(flow.notification().is_none());
}

#[test]
fn available_years_lists_each_year_once() {
    let flow = seeded_flow();
    assert_eq!(flow.available_years(), vec![2020, 2021]);
}

#[test]
fn config_sets_initial_filter_year() {
    let config = CoreConfig::from_json_str(r#"{"default_filter_year": 2019}"#).unwrap();
    let flow = ExpensesFlow::from_config(&config);
    assert_eq!(flow.filter().year(), 2019);
    assert!(!flow.is_form_open());
}

#[test]
fn expense_serializes_with_stable_field_names() {
    let flow = seeded_flow();
    let json = serde_json::to_value(&flow.records()[2]).unwrap();
    assert_eq!(json["id"], "00000000-0000-0000-0000-000000000003");
    assert_eq!(json["title"], "Car Insurance");
    assert_eq!(json["amount"], "294.67");
    assert_eq!(json["date"], "2020-02-28");

    let decoded: tally_core::Expense = serde_json::from_value(json).unwrap();
    assert_eq!(&decoded, &flow.records()[2]);
}
