//! Tests for CSV feed mapping
//!
//! Covers currency parsing, skip-and-count behavior, and config-row
//! mapping.

use chrono::NaiveDate;

use super::{FeedError, parse_config, parse_donations};

#[test]
fn donations_feed_maps_rows_in_order() {
    let csv = "\
name,zeta,amount,date
Galen Ayder,Theta,$50.00,9/1/2023
Jerran Zeva,,$300,9/3/2023
Raina Temple,Upsilon,\"$1,250.50\",2023-09-02
";
    let feed = parse_donations(csv.as_bytes()).unwrap();
    assert_eq!(feed.skipped, 0);
    assert_eq!(feed.donations.len(), 3);

    let first = &feed.donations[0];
    assert_eq!(first.name, "Galen Ayder");
    assert_eq!(first.zeta.as_deref(), Some("Theta"));
    assert_eq!(first.amount, 50.0);
    assert_eq!(first.date, NaiveDate::from_ymd_opt(2023, 9, 1).unwrap());

    // Empty affiliation cell becomes None, not Some("").
    assert_eq!(feed.donations[1].zeta, None);
    // Thousands separator inside a quoted cell parses fully.
    assert_eq!(feed.donations[2].amount, 1250.50);
}

#[test]
fn malformed_rows_are_skipped_and_counted() {
    let csv = "\
name,zeta,amount,date
Good Donor,,$25,9/1/2023
No Amount,,not money,9/1/2023
,,$10,9/1/2023
Bad Date,,$10,someday
Refund?,,$-5,9/1/2023
Another Good Donor,,$75,9/2/2023
";
    let feed = parse_donations(csv.as_bytes()).unwrap();
    assert_eq!(feed.skipped, 4);
    let names: Vec<&str> = feed.donations.iter().map(|d| d.name.as_str()).collect();
    assert_eq!(names, vec!["Good Donor", "Another Good Donor"]);
}

#[test]
fn empty_donations_feed_is_fine() {
    let feed = parse_donations("name,zeta,amount,date\n".as_bytes()).unwrap();
    assert!(feed.donations.is_empty());
    assert_eq!(feed.skipped, 0);
}

#[test]
fn config_row_maps_all_columns() {
    let csv = "\
donationGoal,deadline,moreInfo,paypalEmail,venmoUser,zelleEmail,mailCheckAddress
18000,11/4/2023,Support the chapter,treasurer@example.org,chapter-treasurer,zelle@example.org,\"PO Box 12, Troy NY\"
";
    let config = parse_config(csv.as_bytes()).unwrap();
    assert_eq!(config.donation_goal, 18_000.0);
    assert_eq!(
        config.deadline,
        NaiveDate::from_ymd_opt(2023, 11, 4).unwrap().and_hms_opt(0, 0, 0).unwrap()
    );
    assert_eq!(config.more_info, "Support the chapter");
    assert_eq!(config.paypal_email, "treasurer@example.org");
    assert_eq!(config.venmo_user, "chapter-treasurer");
    assert_eq!(config.zelle_email, "zelle@example.org");
    assert_eq!(config.mail_check_address, "PO Box 12, Troy NY");
}

#[test]
fn config_deadline_accepts_a_time_of_day() {
    let csv = "\
donationGoal,deadline,moreInfo,paypalEmail,venmoUser,zelleEmail,mailCheckAddress
\"$5,000\",11/4/2023 17:30,,,,,
";
    let config = parse_config(csv.as_bytes()).unwrap();
    assert_eq!(config.donation_goal, 5_000.0);
    assert_eq!(
        config.deadline,
        NaiveDate::from_ymd_opt(2023, 11, 4).unwrap().and_hms_opt(17, 30, 0).unwrap()
    );
}

#[test]
fn empty_config_feed_is_an_error() {
    let csv = "donationGoal,deadline,moreInfo,paypalEmail,venmoUser,zelleEmail,mailCheckAddress\n";
    assert!(matches!(parse_config(csv.as_bytes()), Err(FeedError::EmptyConfig)));
}

#[test]
fn unparseable_goal_is_an_error() {
    let csv = "\
donationGoal,deadline,moreInfo,paypalEmail,venmoUser,zelleEmail,mailCheckAddress
lots,11/4/2023,,,,,
";
    assert!(matches!(
        parse_config(csv.as_bytes()),
        Err(FeedError::BadConfigField { field: "donationGoal", .. })
    ));
}
