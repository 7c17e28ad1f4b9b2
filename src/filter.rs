// src/filter.rs
//! Editorial gate: domain block/allow lists and topical keyword matching.
//!
//! All predicates are pure and deterministic. URL parsing failures never
//! raise: the block check fails open (an unparseable URL is not blocked),
//! the approval check fails closed.

use url::Url;

/// Editorially approved publishers. Currently informational only: the
/// aggregation pipeline gates on `is_blocked` + `is_relevant` and does not
/// require approval. Wiring this in would change output composition, so it
/// stays a deliberate no-op until editorial decides otherwise.
pub const APPROVED_DOMAINS: &[&str] = &[
    // Major crypto news sites
    "decrypt.co",
    "cryptopotato.com",
    "theblock.co",
    "coindesk.com",
    "cointelegraph.com",
    "u.today",
    "newsbtc.com",
    "cryptonews.com",
    "bitcoinist.com",
    "ambcrypto.com",
    "cryptoslate.com",
    "beincrypto.com",
    "coinjournal.net",
    "coinspeaker.com",
    "cryptobriefing.com",
    "dailyhodl.com",
    "cryptoglobe.com",
    // Mainstream financial news
    "finance.yahoo.com",
    "bloomberg.com",
    "reuters.com",
    "cnbc.com",
    "forbes.com",
    "businessinsider.com",
    "wsj.com",
    "ft.com",
    "marketwatch.com",
    // Tech news sites
    "techcrunch.com",
    "theverge.com",
    "wired.com",
    "venturebeat.com",
    // Blockchain/DeFi specific
    "thedefiant.io",
    "dlnews.com",
    "blockworks.co",
];

/// Aggregator mirrors, social platforms, and press-release wires.
pub const BLOCKED_DOMAINS: &[&str] = &[
    "biztoc.com",
    "pypi.org",
    "github.com",
    "medium.com",
    "reddit.com",
    "twitter.com",
    "x.com",
    "youtube.com",
    "investorshub.com",
    "stocktwits.com",
    "seekingalpha.com",
    "newsfile.com",
    "prnewswire.com",
    "globenewswire.com",
    "businesswire.com",
    "accesswire.com",
];

/// Topic keywords. Matching is lowercase substring over `title + description`:
/// ticker and ledger terms, company and executive names, ETF/regulatory
/// phrases, partnership names, and price-action phrases.
const KEYWORDS: &[&str] = &[
    "xrp",
    "ripple",
    "xrpl",
    "ripple labs",
    "brad garlinghouse",
    "garlinghouse",
    "rlusd",
    "ripplenet",
    "ripple usd",
    "ripple stablecoin",
    "xrp etf",
    "spot xrp",
    "xrp trust",
    "xrp treasury",
    "grayscale xrp",
    "franklin xrp",
    "bitwise xrp",
    "xrp ledger",
    "xrp defi",
    "xrp staking",
    "wrapped xrp",
    "stxrp",
    "xrp liquidity",
    "flare network",
    "firelight",
    "hex trust",
    "wormhole xrp",
    "chainlink xrp",
    "cross-border xrp",
    "xrp payments",
    "xrp settlement",
    "xrp remittance",
    "xrp bridge",
    "xrp corridor",
    "xrp price",
    "xrp rally",
    "xrp volume",
    "xrp market",
    "xrp trading",
    "xrp surge",
    "ripple sec",
    "xrp lawsuit",
    "xrp securities",
    "ripple settlement",
    "xrp clarity",
    "bank ripple",
    "institution xrp",
    "central bank xrp",
    "cbdc ripple",
    "ripple partnership",
    "ripple integration",
    "swell ripple",
    "xrp community",
    "attackathon",
    "evernorth",
    "sbi ripple",
    "ripple asia",
    "metaco ripple",
    "hidden road ripple",
    "fortress trust ripple",
    "standard custody ripple",
];

/// Hostname with a leading `www.` stripped, or `None` when the URL does not
/// parse.
fn hostname(raw_url: &str) -> Option<String> {
    let parsed = Url::parse(raw_url).ok()?;
    let host = parsed.host_str()?;
    Some(host.strip_prefix("www.").unwrap_or(host).to_string())
}

/// True when the hostname contains any blocklist entry as a substring.
/// Unparseable URLs are not blocked.
pub fn is_blocked(raw_url: &str) -> bool {
    match hostname(raw_url) {
        Some(host) => BLOCKED_DOMAINS.iter().any(|d| host.contains(d)),
        None => false,
    }
}

/// True when the hostname contains any allowlist entry as a substring.
/// Unparseable URLs are not approved.
pub fn is_approved(raw_url: &str) -> bool {
    match hostname(raw_url) {
        Some(host) => APPROVED_DOMAINS.iter().any(|d| host.contains(d)),
        None => false,
    }
}

/// True when `title + description`, lowercased, contains any topic keyword.
pub fn is_relevant(title: &str, description: &str) -> bool {
    let text = format!("{} {}", title, description).to_lowercase();
    KEYWORDS.iter().any(|k| text.contains(k))
}
