//! Edge case tests for tariff rules, statements and the rental ledger.

use rental_statement::pricing::{loyalty_points, price};
use rental_statement::{
    compute_statement, print_statement, render_statement, Amount, Movie, Rental, RentalError,
    RentalLedger, TariffCategory,
};
use std::io::Cursor;
use std::str::FromStr;
use std::sync::Arc;

fn amt(s: &str) -> Amount {
    Amount::from_str(s).unwrap()
}

fn rental(title: &str, category: TariffCategory, days: u32) -> Rental {
    Rental::new(Arc::new(Movie::new(title, category)), days).unwrap()
}

fn run_csv(csv: &str) -> (String, usize) {
    let mut ledger = RentalLedger::new();
    ledger.process_csv(Cursor::new(csv)).unwrap();

    let mut output = Vec::new();
    let aborted = ledger.write_statements(&mut output).unwrap();
    (String::from_utf8(output).unwrap(), aborted)
}

// ==================== PRICE RULES ====================

#[test]
fn test_regular_price_formula_over_range() {
    for days in 1..=30u32 {
        let expected = if days <= 2 {
            amt("2")
        } else {
            amt("2") + amt("1.5") * (days - 2)
        };
        assert_eq!(price(TariffCategory::Regular, days), expected, "days={}", days);
    }
}

#[test]
fn test_new_release_price_formula_over_range() {
    for days in 1..=30u32 {
        assert_eq!(price(TariffCategory::NewRelease, days), amt("3") * days);
    }
}

#[test]
fn test_childrens_price_formula_over_range() {
    for days in 1..=30u32 {
        let expected = if days <= 3 {
            amt("1.5")
        } else {
            amt("1.5") * (days - 3)
        };
        assert_eq!(price(TariffCategory::Childrens, days), expected, "days={}", days);
    }
}

#[test]
fn test_childrens_day_three_and_four_tie() {
    assert_eq!(
        price(TariffCategory::Childrens, 3),
        price(TariffCategory::Childrens, 4)
    );
    assert!(price(TariffCategory::Childrens, 5) > price(TariffCategory::Childrens, 4));
}

#[test]
fn test_long_rental_prices() {
    assert_eq!(price(TariffCategory::Regular, 365).to_string(), "546.5");
    assert_eq!(price(TariffCategory::NewRelease, 365).to_string(), "1095");
    assert_eq!(price(TariffCategory::Childrens, 365).to_string(), "543");
}

#[test]
fn test_loyalty_points_rule() {
    assert_eq!(loyalty_points(TariffCategory::NewRelease, 1), 1);
    assert_eq!(loyalty_points(TariffCategory::NewRelease, 2), 2);
    assert_eq!(loyalty_points(TariffCategory::Regular, 3), 1);
    assert_eq!(loyalty_points(TariffCategory::Childrens, 30), 1);
}

// ==================== STATEMENTS ====================

#[test]
fn test_john_smith_end_to_end() {
    let cinderella = Arc::new(Movie::new("Cinderella", TariffCategory::Childrens));
    let star_wars = Arc::new(Movie::new("Star Wars", TariffCategory::Regular));
    let gladiator = Arc::new(Movie::new("Gladiator", TariffCategory::NewRelease));

    let rentals = vec![
        Rental::new(cinderella, 5).unwrap(),
        Rental::new(star_wars, 5).unwrap(),
        Rental::new(gladiator, 5).unwrap(),
    ];

    let expected = "Rental record for John Smith\n\
                    \tCinderella\t3\n\
                    \tStar Wars\t6.5\n\
                    \tGladiator\t15\n\
                    Amount owed is 24.5\n\
                    You earned 4 frequent renter points.";

    assert_eq!(print_statement("John Smith", &rentals), expected);
}

#[test]
fn test_same_movie_rented_twice() {
    let gladiator = Arc::new(Movie::new("Gladiator", TariffCategory::NewRelease));
    let rentals = vec![
        Rental::new(Arc::clone(&gladiator), 1).unwrap(),
        Rental::new(Arc::clone(&gladiator), 2).unwrap(),
    ];

    let statement = compute_statement("Jane", &rentals);
    assert_eq!(statement.lines.len(), 2);
    assert_eq!(statement.total_amount, amt("9"));
    assert_eq!(statement.frequent_renter_points, 3);
}

#[test]
fn test_order_is_preserved_and_totals_agree() {
    let rentals = vec![
        rental("Zulu", TariffCategory::Regular, 4),
        rental("Alpha", TariffCategory::Childrens, 2),
        rental("Mike", TariffCategory::NewRelease, 1),
    ];

    let statement = compute_statement("Order", &rentals);
    let titles: Vec<_> = statement.lines.iter().map(|l| l.movie_title.as_str()).collect();
    assert_eq!(titles, vec!["Zulu", "Alpha", "Mike"]);

    let sum: Amount = statement.lines.iter().map(|l| l.rental_price).sum();
    assert_eq!(statement.total_amount, sum);
    assert_eq!(statement.total_amount, amt("9.5"));
    assert_eq!(statement.frequent_renter_points, 3);
}

#[test]
fn test_repeated_computation_is_identical() {
    let rentals = vec![
        rental("Cinderella", TariffCategory::Childrens, 5),
        rental("Gladiator", TariffCategory::NewRelease, 5),
    ];

    let first = compute_statement("Repeat", &rentals);
    let second = compute_statement("Repeat", &rentals);
    assert_eq!(first, second);
    assert_eq!(render_statement(&first), render_statement(&second));
}

#[test]
fn test_statement_has_no_trailing_newline() {
    let rendered = print_statement("Tail", &[rental("Jaws", TariffCategory::Regular, 1)]);
    assert!(rendered.ends_with("frequent renter points."));
}

#[test]
fn test_customer_name_rendered_verbatim() {
    let rendered = print_statement("Zoë O'Brien-Smith", &[]);
    assert!(rendered.starts_with("Rental record for Zoë O'Brien-Smith\n"));
}

// ==================== VALIDATION ====================

#[test]
fn test_zero_day_rental_rejected() {
    let movie = Arc::new(Movie::new("Jaws", TariffCategory::Regular));
    assert!(matches!(
        Rental::new(movie, 0),
        Err(RentalError::InvalidDuration { days: 0 })
    ));
}

#[test]
fn test_unknown_price_code_rejected() {
    let result = Movie::with_price_code("Jaws", "THRILLER");
    match result {
        Err(RentalError::InvalidCategory { tag }) => assert_eq!(tag, "THRILLER"),
        other => panic!("Expected InvalidCategory, got {:?}", other),
    }
}

#[test]
fn test_error_messages() {
    let err = RentalError::InvalidCategory {
        tag: "THRILLER".to_string(),
    };
    assert_eq!(err.to_string(), "Invalid tariff category 'THRILLER'");

    let err = RentalError::InvalidDuration { days: -2 };
    assert_eq!(err.to_string(), "Invalid rental duration: -2 days");

    let err = RentalError::ConflictingCategory {
        title: "Jaws".to_string(),
        existing: TariffCategory::Regular,
        requested: TariffCategory::NewRelease,
    };
    assert_eq!(
        err.to_string(),
        "Movie 'Jaws' is already registered as REGULAR, not NEW RELEASE"
    );
}

// ==================== LEDGER ====================

#[test]
fn test_ledger_negative_days_aborts_customer() {
    let csv = r#"customer,title,category,days
Ann,Jaws,REGULAR,-1
Ben,Jaws,REGULAR,1"#;

    let (output, aborted) = run_csv(csv);
    assert_eq!(aborted, 1);
    assert!(output.starts_with("Rental record for Ben\n"));
}

#[test]
fn test_ledger_error_discards_earlier_rentals() {
    let csv = r#"customer,title,category,days
Ann,Jaws,REGULAR,1
Ann,Cinderella,CHILDRENS,x
Ann,Gladiator,NEW RELEASE,2"#;

    let (output, aborted) = run_csv(csv);
    assert_eq!(aborted, 1);
    assert!(output.is_empty());
}

#[test]
fn test_ledger_missing_title_aborts_customer() {
    let csv = r#"customer,title,category,days
Ann,,REGULAR,1"#;

    let mut ledger = RentalLedger::new();
    ledger.process_csv(Cursor::new(csv)).unwrap();
    assert!(matches!(
        ledger.customers()[0].statement(),
        Err(RentalError::InvalidRecord { row: 2, .. })
    ));
}

#[test]
fn test_ledger_customer_names_are_trimmed() {
    let csv = "customer,title,category,days\n  Ann  ,Jaws,REGULAR,1\nAnn,Jaws,REGULAR,3\n";

    let mut ledger = RentalLedger::new();
    ledger.process_csv(Cursor::new(csv)).unwrap();
    assert_eq!(ledger.customers().len(), 1);
    assert_eq!(ledger.customers()[0].name(), "Ann");
    assert_eq!(ledger.customers()[0].rentals().unwrap().len(), 2);
}

#[test]
fn test_ledger_header_only() {
    let (output, aborted) = run_csv("customer,title,category,days\n");
    assert!(output.is_empty());
    assert_eq!(aborted, 0);
}

#[test]
fn test_ledger_john_smith_matches_library() {
    let csv = r#"customer,title,category,days
John Smith,Cinderella,CHILDRENS,5
John Smith,Star Wars,REGULAR,5
John Smith,Gladiator,NEW RELEASE,5"#;

    let (output, aborted) = run_csv(csv);
    let rentals = vec![
        rental("Cinderella", TariffCategory::Childrens, 5),
        rental("Star Wars", TariffCategory::Regular, 5),
        rental("Gladiator", TariffCategory::NewRelease, 5),
    ];

    assert_eq!(aborted, 0);
    assert_eq!(output, format!("{}\n", print_statement("John Smith", &rentals)));
}
