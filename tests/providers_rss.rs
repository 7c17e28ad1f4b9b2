// tests/providers_rss.rs
//
// RSS feed normalization from fixture XML: channel/item mapping, the
// cleaned-content excerpt, source name fallback, and pubDate handling.

use xrp_news_service::sources::rss::RssFeedSource;

const FEED_URL: &str = "https://cryptopotato.com/feed/";

const FIXTURE: &str = r#"<?xml version="1.0" encoding="UTF-8"?>
<rss version="2.0" xmlns:content="http://purl.org/rss/1.0/modules/content/">
  <channel>
    <title>CryptoPotato</title>
    <link>https://cryptopotato.com</link>
    <item>
      <title>XRP price eyes breakout</title>
      <link>https://cryptopotato.com/xrp-price-eyes-breakout/</link>
      <pubDate>Mon, 06 Jan 2025 14:30:00 +0000</pubDate>
      <description>Analysts watch XRP resistance levels.</description>
      <content:encoded>&lt;p&gt;Analysts watch &lt;b&gt;XRP&lt;/b&gt; resistance levels closely.&lt;/p&gt;</content:encoded>
    </item>
    <item>
      <title>Altcoin weekly recap</title>
      <link>https://cryptopotato.com/altcoin-recap/</link>
      <pubDate>Mon, 06 Jan 2025 12:00:00 +0000</pubDate>
      <description>Solana and Cardano moves, nothing else.</description>
    </item>
    <item>
      <title>Ripple opens new office</title>
      <link>https://cryptopotato.com/ripple-office/</link>
      <description>Ripple expands its presence.</description>
    </item>
    <item>
      <title>Syndicated XRP story</title>
      <link>https://medium.com/@someone/xrp-story</link>
      <pubDate>Mon, 06 Jan 2025 10:00:00 +0000</pubDate>
      <description>XRP syndicated content.</description>
    </item>
  </channel>
</rss>"#;

const UNTITLED_FEED: &str = r#"<?xml version="1.0" encoding="UTF-8"?>
<rss version="2.0">
  <channel>
    <item>
      <title>XRP volume spikes</title>
      <link>https://example-crypto.net/xrp-volume/</link>
      <pubDate>Mon, 06 Jan 2025 09:00:00 +0000</pubDate>
      <description>XRP trading volume doubled overnight.</description>
    </item>
  </channel>
</rss>"#;

#[test]
fn fixture_keeps_relevant_unblocked_items() {
    let out = RssFeedSource::parse_feed(FIXTURE, FEED_URL).unwrap();
    let urls: Vec<_> = out.iter().map(|a| a.url.as_str()).collect();
    assert_eq!(
        urls,
        vec![
            "https://cryptopotato.com/xrp-price-eyes-breakout/",
            "https://cryptopotato.com/ripple-office/",
        ]
    );
}

#[test]
fn excerpt_is_cleaned_content_over_description() {
    let out = RssFeedSource::parse_feed(FIXTURE, FEED_URL).unwrap();
    assert_eq!(
        out[0].excerpt,
        "Analysts watch XRP resistance levels closely."
    );
}

#[test]
fn source_name_is_the_channel_title() {
    let out = RssFeedSource::parse_feed(FIXTURE, FEED_URL).unwrap();
    assert!(out.iter().all(|a| a.source == "CryptoPotato"));
}

#[test]
fn missing_channel_title_falls_back_to_feed_hostname() {
    let out =
        RssFeedSource::parse_feed(UNTITLED_FEED, "https://example-crypto.net/feed/").unwrap();
    assert_eq!(out.len(), 1);
    assert_eq!(out[0].source, "example-crypto.net");
}

#[test]
fn pub_date_parses_and_missing_date_falls_back_to_now() {
    let before = chrono::Utc::now();
    let out = RssFeedSource::parse_feed(FIXTURE, FEED_URL).unwrap();
    let after = chrono::Utc::now();

    assert_eq!(out[0].timestamp.to_rfc3339(), "2025-01-06T14:30:00+00:00");

    // The Ripple office item has no pubDate at all.
    let undated = &out[1];
    assert!(undated.timestamp >= before && undated.timestamp <= after);
}

#[test]
fn iso_8601_pub_dates_parse_too() {
    // Some feeds put an ISO date in pubDate instead of RFC 2822.
    let feed = r#"<?xml version="1.0" encoding="UTF-8"?>
<rss version="2.0">
  <channel>
    <title>ISO Feed</title>
    <item>
      <title>XRP staking program launches</title>
      <link>https://example-crypto.net/xrp-staking/</link>
      <pubDate>2025-01-06T14:30:00Z</pubDate>
      <description>XRP staking goes live.</description>
    </item>
  </channel>
</rss>"#;

    let out = RssFeedSource::parse_feed(feed, "https://example-crypto.net/feed/").unwrap();
    assert_eq!(out.len(), 1);
    assert_eq!(out[0].timestamp.to_rfc3339(), "2025-01-06T14:30:00+00:00");
}

#[test]
fn invalid_xml_is_an_error_not_a_panic() {
    assert!(RssFeedSource::parse_feed("<rss><channel>", FEED_URL).is_err());
}
