use crate::{
    classify::Browser,
    models::{ImageStats, LogRecord},
};

/// Hit counts per browser, kept in the order each browser was first seen.
#[derive(Debug, Default, Clone, PartialEq, Eq)]
pub struct BrowserTally {
    counts: Vec<(Browser, usize)>,
}

impl BrowserTally {
    pub fn record(&mut self, browser: Browser) {
        match self.counts.iter_mut().find(|(b, _)| *b == browser) {
            Some((_, count)) => *count += 1,
            None => self.counts.push((browser, 1)),
        }
    }

    pub fn iter(&self) -> impl Iterator<Item = (Browser, usize)> + '_ {
        self.counts.iter().copied()
    }

    /// Highest count; on a tie the browser seen first wins.
    pub fn most_popular(&self) -> Option<TopBrowser> {
        self.iter()
            .fold(None, |best: Option<TopBrowser>, (browser, hits)| match best {
                Some(top) if top.hits >= hits => Some(top),
                _ => Some(TopBrowser { browser, hits }),
            })
    }
}

impl FromIterator<Browser> for BrowserTally {
    fn from_iter<T: IntoIterator<Item = Browser>>(iter: T) -> Self {
        let mut tally = Self::default();
        for browser in iter {
            tally.record(browser);
        }
        tally
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TopBrowser {
    pub browser: Browser,
    pub hits: usize,
}

pub fn aggregate_images(records: &[LogRecord]) -> ImageStats {
    let (total_images, total_bytes) = records
        .iter()
        .filter(|r| r.path.is_image())
        .fold((0usize, 0u128), |(n, bytes), r| {
            (n + 1, bytes + u128::from(r.size))
        });
    let average_bytes = if total_images > 0 {
        total_bytes as f64 / total_images as f64
    } else {
        0.0
    };
    ImageStats {
        total_images,
        total_bytes,
        average_bytes,
    }
}

/// `None` stands for "no browser, zero hits" and only happens for an empty slice.
pub fn aggregate_browsers(records: &[LogRecord]) -> Option<TopBrowser> {
    records
        .iter()
        .map(|r| Browser::classify(&r.user_agent))
        .collect::<BrowserTally>()
        .most_popular()
}
