use chrono::{Duration, NaiveDate, NaiveDateTime};
use rand::{Rng, seq::IndexedRandom};

const PATHS: [(&str, u8); 9] = [
    ("/", 10),
    ("/index.html", 10),
    ("/login.php", 5),
    ("/images/logo.png", 20),
    ("/images/banner.JPG", 10),
    ("/images/photo.jpeg", 5),
    ("/icons/arrow.gif", 10),
    ("/icons/logo.svg", 5),
    ("/download.bmp?v=2", 1),
];
const USER_AGENTS: [(&str, u8); 7] = [
    (
        "Mozilla/5.0 (Windows NT 6.1; WOW64) AppleWebKit/537.36 (KHTML, like Gecko) Chrome/32.0.1700.77 Safari/537.36",
        40,
    ),
    (
        "Mozilla/5.0 (Windows NT 6.1; WOW64; rv:26.0) Gecko/20100101 Firefox/26.0",
        20,
    ),
    (
        "Mozilla/5.0 (Macintosh; Intel Mac OS X 10_9_1) AppleWebKit/537.73.11 (KHTML, like Gecko) Version/7.0.1 Safari/537.73.11",
        15,
    ),
    ("Mozilla/5.0 (compatible; MSIE 10.0; Windows NT 6.1; Trident/6.0)", 8),
    ("Mozilla/5.0 (Windows NT 6.3; Trident/7.0; rv:11.0) like Gecko", 4),
    ("Mozilla/5.0 (Windows Phone 10.0) Edge/12.10136", 2),
    ("Googlebot/2.1 (+http://www.google.com/bot.html)", 3),
];
const STATUS: [(u16, u8); 4] = [(200, 80), (304, 10), (404, 8), (500, 2)];

fn start_time() -> NaiveDateTime {
    NaiveDate::from_ymd_opt(2014, 1, 27)
        .and_then(|d| d.and_hms_opt(0, 0, 0))
        .unwrap_or_default()
}

/// One well-formed row. The timestamp is `index` seconds after the start of the log.
pub fn generate_row<R: Rng + ?Sized>(rng: &mut R, index: usize) -> Vec<String> {
    let timestamp = start_time() + Duration::seconds(index as i64);
    let path = PATHS.choose_weighted(rng, |(_, w)| *w).unwrap().0;
    let agent = USER_AGENTS.choose_weighted(rng, |(_, w)| *w).unwrap().0;
    let status = STATUS.choose_weighted(rng, |(_, w)| *w).unwrap().0;
    let size = rng.random_range(100..500_000u64);

    vec![
        path.to_string(),
        timestamp.format("%Y-%m-%d %H:%M:%S").to_string(),
        agent.to_string(),
        status.to_string(),
        size.to_string(),
    ]
}

/// A row the analyzer must skip: either one field short or with a non-numeric size.
pub fn generate_malformed_row<R: Rng + ?Sized>(rng: &mut R, index: usize) -> Vec<String> {
    let mut row = generate_row(rng, index);
    if rng.random_bool(0.5) {
        row.pop();
    } else {
        row[4] = "-".to_string();
    }
    row
}
