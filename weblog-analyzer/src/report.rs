use std::fmt;

use num_format::{Locale, ToFormattedString};

use crate::{analytics::TopBrowser, models::ImageStats};

const RULE: &str = "==================================================";

#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Report {
    NoData,
    Summary {
        images: ImageStats,
        browser: Option<TopBrowser>,
        total_records: usize,
    },
}

impl Report {
    pub fn new(images: ImageStats, browser: Option<TopBrowser>, total_records: usize) -> Self {
        if total_records == 0 {
            return Self::NoData;
        }
        Self::Summary {
            images,
            browser,
            total_records,
        }
    }
}

impl fmt::Display for Report {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let Self::Summary {
            images,
            browser,
            total_records,
        } = self
        else {
            return writeln!(f, "No data found in the file.");
        };

        writeln!(f, "Total hits processed: {total_records}")?;
        writeln!(f, "\n{RULE}\n")?;

        writeln!(f, "IMAGE STATISTICS:")?;
        writeln!(f, "Total image hits: {}", images.total_images)?;
        writeln!(
            f,
            "Total image bytes transferred: {} bytes",
            images.total_bytes.to_formatted_string(&Locale::en)
        )?;
        writeln!(f, "Average image size: {:.2} bytes", images.average_bytes)?;
        writeln!(f, "\n{RULE}\n")?;

        writeln!(f, "BROWSER STATISTICS:")?;
        match browser {
            Some(TopBrowser { browser, hits }) => {
                let percentage = *hits as f64 / *total_records as f64 * 100.0;
                writeln!(f, "Most popular browser: {browser}")?;
                writeln!(f, "Number of hits: {hits}")?;
                writeln!(f, "Percentage of total: {percentage:.1}%")
            }
            None => writeln!(f, "Could not determine browser statistics"),
        }
    }
}

pub fn build_report(
    images: &ImageStats,
    browser: Option<TopBrowser>,
    total_records: usize,
) -> String {
    Report::new(*images, browser, total_records).to_string()
}
