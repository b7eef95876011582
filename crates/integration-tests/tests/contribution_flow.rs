//! Funding-math scenarios: contribution sums, progress, anonymity, and
//! reconciliation across the facade.

use rust_decimal::Decimal;
use wishflick_core::PaymentStatus;
use wishflick_integration_tests::{draft, signed_in_app, units};

#[test]
fn progress_scenario_from_the_product_brief() {
    // create a 2500 wish, contribute 1200, expect 48%; then 1300 more,
    // expect exactly 2500 and 100%
    let mut app = signed_in_app("dreamer@example.com");
    let wish = app
        .create_wish(draft("MacBook Pro for Creative Work", 2500))
        .unwrap()
        .completed()
        .unwrap();

    app.contribute(wish.id, units(1200), None, false)
        .unwrap()
        .completed()
        .unwrap();
    let current = app.wishes().wish(wish.id).unwrap().clone();
    assert_eq!(current.current_amount, Decimal::new(1200, 0));
    assert_eq!(current.progress_percent(), Decimal::new(48, 0));

    app.contribute(wish.id, units(1300), None, false)
        .unwrap()
        .completed()
        .unwrap();
    let funded = app.wishes().wish(wish.id).unwrap().clone();
    assert_eq!(funded.current_amount, Decimal::new(2500, 0));
    assert_eq!(funded.progress_percent(), Decimal::ONE_HUNDRED);
    assert!(funded.is_funded());
}

#[test]
fn every_contribution_lands_exactly_once() {
    let mut app = signed_in_app("dreamer@example.com");
    let wish = app
        .create_wish(draft("Photography Equipment", 3200))
        .unwrap()
        .completed()
        .unwrap();

    let amounts = [50_i64, 25, 100, 5];
    for a in amounts {
        app.contribute(wish.id, units(a), Some("Good luck!".to_owned()), false)
            .unwrap()
            .completed()
            .unwrap();
    }

    let records = app.wishes().contributions_for(wish.id);
    assert_eq!(records.len(), amounts.len());
    assert!(records.iter().all(|c| c.status == PaymentStatus::Completed));

    let expected: Decimal = amounts.iter().map(|a| Decimal::new(*a, 0)).sum();
    assert_eq!(app.wishes().wish(wish.id).unwrap().current_amount, expected);
}

#[test]
fn anonymous_contribution_never_carries_identity() {
    let mut app = signed_in_app("backer@example.com");
    let wish = app
        .create_wish(draft("Gaming Setup", 1800))
        .unwrap()
        .completed()
        .unwrap();

    let anonymous = app
        .contribute(wish.id, units(25), Some("Every step counts!".to_owned()), true)
        .unwrap()
        .completed()
        .unwrap();
    assert!(anonymous.is_anonymous);
    assert!(anonymous.contributor.is_none());

    // the amount still counts
    assert_eq!(
        app.wishes().wish(wish.id).unwrap().current_amount,
        Decimal::new(25, 0)
    );
}

#[test]
fn overfunding_is_permitted_and_progress_clamps() {
    let mut app = signed_in_app("backer@example.com");
    let wish = app
        .create_wish(draft("Small Goal", 100))
        .unwrap()
        .completed()
        .unwrap();

    app.contribute(wish.id, units(250), None, false)
        .unwrap()
        .completed()
        .unwrap();

    let over = app.wishes().wish(wish.id).unwrap().clone();
    assert_eq!(over.current_amount, Decimal::new(250, 0));
    assert_eq!(over.progress_percent(), Decimal::ONE_HUNDRED);
}

#[test]
fn reconciliation_is_clean_after_store_mediated_mutations() {
    let mut app = signed_in_app("dreamer@example.com");
    let a = app
        .create_wish(draft("Wish A", 500))
        .unwrap()
        .completed()
        .unwrap();
    let b = app
        .create_wish(draft("Wish B", 900))
        .unwrap()
        .completed()
        .unwrap();

    app.contribute(a.id, units(40), None, false).unwrap();
    app.contribute(b.id, units(60), None, true).unwrap();
    app.contribute(a.id, units(10), None, true).unwrap();
    app.delete_wish(b.id).unwrap();

    assert!(app.wishes().reconcile().is_empty());
}
