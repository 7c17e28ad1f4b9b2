// tests/providers_cryptopanic.rs
//
// CryptoPanic posts normalization from a fixture body.

use xrp_news_service::sources::cryptopanic::CryptoPanicSource;

const FIXTURE: &str = r#"{
  "count": 4,
  "results": [
    {
      "title": "XRP whales accumulate ahead of ruling",
      "description": "On-chain data shows large XRP transfers.",
      "url": "https://u.today/xrp-whales",
      "source": { "title": "U.Today", "domain": "u.today" },
      "published_at": "2025-01-06T09:15:00Z"
    },
    {
      "title": "XRP price discussion thread",
      "description": "xrp to the moon",
      "url": "https://www.reddit.com/r/xrp/thread",
      "source": { "title": "Reddit", "domain": "reddit.com" },
      "published_at": "2025-01-06T09:00:00Z"
    },
    {
      "title": "Ripple settlement takes effect",
      "description": "",
      "url": "https://dailyhodl.com/ripple-settlement",
      "source": { "title": "The Daily Hodl", "domain": "dailyhodl.com" },
      "published_at": "2025-01-06T08:00:00Z"
    },
    {
      "title": "Ethereum gas fees drop",
      "description": "Network upgrade lands.",
      "url": "https://decrypt.co/eth-gas",
      "source": { "title": "Decrypt", "domain": "decrypt.co" },
      "published_at": "2025-01-06T07:00:00Z"
    }
  ]
}"#;

#[test]
fn fixture_drops_blocked_and_off_topic_posts() {
    let out = CryptoPanicSource::parse_response(FIXTURE).unwrap();
    let urls: Vec<_> = out.iter().map(|a| a.url.as_str()).collect();
    assert_eq!(
        urls,
        vec![
            "https://u.today/xrp-whales",
            "https://dailyhodl.com/ripple-settlement",
        ]
    );
}

#[test]
fn source_name_comes_from_the_post_source_title() {
    let out = CryptoPanicSource::parse_response(FIXTURE).unwrap();
    assert_eq!(out[0].source, "U.Today");
    assert_eq!(out[0].excerpt, "On-chain data shows large XRP transfers.");
}

#[test]
fn empty_description_falls_back_to_the_title() {
    let out = CryptoPanicSource::parse_response(FIXTURE).unwrap();
    let post = &out[1];
    assert_eq!(post.excerpt, post.title);
    assert_eq!(post.excerpt, "Ripple settlement takes effect");
}

#[test]
fn malformed_body_is_an_error_not_a_panic() {
    assert!(CryptoPanicSource::parse_response("oops").is_err());
}
