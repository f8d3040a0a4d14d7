use super::*;
use chrono::Utc;
use crossterm::style::Stylize;
use ipo_common::{Envelope, IpoRecord};

fn ready() -> LoadState {
    let ipo: IpoResponse = serde_json::from_value(serde_json::json!({
        "success": true,
        "data": {
            "id": "ipo-1",
            "symbol": "BHARATCOAL",
            "issueSize": "₹1,071 Cr",
            "issueType": "Book Built",
            "faceValue": "₹10",
            "minInvestment": null,
            "lastUpdated": ""
        }
    }))
    .expect("ipo fixture");

    let subscriptions: SubscriptionResponse = serde_json::from_value(serde_json::json!({
        "success": true,
        "count": 5,
        "data": [
            {"serialNumber": "-", "category": "Total", "offered": "1000000", "applied": "2350000", "times": "2.35", "createdAt": "2026-01-09T08:05:00Z"},
            {"serialNumber": "2.1", "category": "bNII", "offered": "200000", "applied": "100000", "times": "0.5"},
            {"serialNumber": "1", "category": "QIB", "offered": "500", "applied": "1500", "times": "3"},
            {"serialNumber": "2.1(a)", "category": "Small", "offered": "", "applied": "abc", "times": "0"},
            {"serialNumber": "2", "category": "NII", "offered": "300000", "applied": "900000", "times": "3.00", "createdAt": "2026-01-09T06:00:00Z"}
        ]
    }))
    .expect("subscription fixture");

    LoadState::Ready { ipo, subscriptions }
}

#[test]
fn loading_view() {
    assert_eq!(
        render(&LoadState::Loading, "X", Style::plain()),
        "Loading IPO data...\n"
    );
}

#[test]
fn error_view_shows_only_the_message() {
    let page = render(
        &LoadState::Error("Failed to fetch IPO data: Internal Server Error".to_string()),
        "X",
        Style::plain(),
    );
    assert_eq!(
        page,
        "Error Loading Data\nFailed to fetch IPO data: Internal Server Error\n"
    );
}

#[test]
fn dashboard_view() {
    let page = render_in(&ready(), "BHARATCOAL", Style::plain(), &Utc);
    let expected = concat!(
        "IPO Dashboard\n",
        "BHARATCOAL - Real-time subscription tracking\n",
        "\n",
        "IPO Details [Active]\n",
        "Field       Value\n",
        "----------  ----------\n",
        "Symbol      BHARATCOAL\n",
        "Issue Size  ₹1,071 Cr\n",
        "Issue Type  Book Built\n",
        "Face Value  ₹10\n",
        "\n",
        "Subscription Details [5 Categories]\n",
        "NO.     Category     Offered    Applied  Times\n",
        "------  ---------  ---------  ---------  -----\n",
        "1       QIB              500      1,500     3x\n",
        "------  ---------  ---------  ---------  -----\n",
        "2       NII         3,00,000   9,00,000  3.00x\n",
        "2.1       bNII      2,00,000   1,00,000   0.5x\n",
        "2.1(a)      Small         --        abc     --\n",
        "------  ---------  ---------  ---------  -----\n",
        "-       Total      10,00,000  23,50,000  2.35x\n",
        "As of 9 Jan 2026, 08:05 am\n",
    );
    assert_eq!(page, expected);
}

#[test]
fn emphasis_follows_serial_class() {
    let page = render_in(&ready(), "BHARATCOAL", Style { color: true }, &Utc);
    assert!(page.contains(&"2.1".bold().to_string()));
    assert!(page.contains(&"  bNII".bold().to_string()));
    assert!(!page.contains(&"2.1(a)".bold().to_string()));
    assert!(!page.contains(&"    Small".bold().to_string()));
    assert!(page.contains(&"Total".bold().to_string()));
}

#[test]
fn sections_fall_back_independently() {
    let state = LoadState::Ready {
        ipo: Envelope {
            success: true,
            count: None,
            data: Some(IpoRecord {
                symbol: Some("ABC".to_string()),
                ..Default::default()
            }),
            message: None,
        },
        subscriptions: Envelope {
            success: true,
            count: Some(0),
            data: Some(Vec::new()),
            message: None,
        },
    };
    let page = render_in(&state, "ABC", Style::plain(), &Utc);
    assert!(page.contains("IPO Details [Active]\n"));
    assert!(page.contains("Symbol  ABC\n"));
    assert!(page.contains("Subscription Details\nNo subscription data available\n"));
    assert!(!page.contains("Categories"));
}

#[test]
fn unsuccessful_ipo_has_no_badge() {
    let state = LoadState::Ready {
        ipo: Envelope {
            success: false,
            count: None,
            data: Some(IpoRecord::default()),
            message: Some("closed".to_string()),
        },
        subscriptions: Envelope {
            success: false,
            count: None,
            data: None,
            message: None,
        },
    };
    let page = render_in(&state, "ABC", Style::plain(), &Utc);
    assert!(page.contains("IPO Details\nNo IPO details available\n"));
    assert!(!page.contains("[Active]"));
}

#[test]
fn serial_labels_print_as_received() {
    let subscriptions: SubscriptionResponse = serde_json::from_value(serde_json::json!({
        "success": true,
        "data": [
            {"serialNumber": " 1", "category": "QIB", "offered": "5", "applied": "5", "times": "1"}
        ]
    }))
    .expect("subscription fixture");
    let state = LoadState::Ready {
        ipo: Envelope {
            success: true,
            count: None,
            data: None,
            message: None,
        },
        subscriptions,
    };
    let page = render_in(&state, "ABC", Style::plain(), &Utc);
    assert!(page.contains("\n 1   QIB"), "{page}");
}
