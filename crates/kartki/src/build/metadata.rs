use std::{process::Termination, time::Instant};

use crate::route::PageId;

/// Metadata returned by [`build()`](crate::build) for a single page after a successful build.
#[derive(Debug)]
pub struct PageOutput {
    /// Route pattern, e.g. `/pagetwo`. `None` for the not found page.
    pub route: Option<String>,
    pub page: Option<PageId>,
    pub file_path: String,
}

/// Metadata returned by [`build()`](crate::build) for a single static asset after a successful build.
///
/// A static asset is a file that is copied to the output directory without any processing.
#[derive(Debug)]
pub struct StaticAssetOutput {
    pub file_path: String,
    pub original_path: String,
}

/// Metadata returned by [`build()`](crate::build) after a successful build.
#[derive(Debug)]
pub struct BuildOutput {
    pub start_time: Instant,
    pub pages: Vec<PageOutput>,
    pub static_files: Vec<StaticAssetOutput>,
}

impl BuildOutput {
    pub fn new(start_time: Instant) -> Self {
        Self {
            start_time,
            pages: Vec::new(),
            static_files: Vec::new(),
        }
    }

    pub(crate) fn add_page(&mut self, route: Option<String>, page: Option<PageId>, file_path: String) {
        self.pages.push(PageOutput {
            route,
            page,
            file_path,
        });
    }

    pub(crate) fn add_static_file(&mut self, file_path: String, original_path: String) {
        self.static_files.push(StaticAssetOutput {
            file_path,
            original_path,
        });
    }
}

impl Default for BuildOutput {
    fn default() -> Self {
        Self::new(Instant::now())
    }
}

impl Termination for BuildOutput {
    fn report(self) -> std::process::ExitCode {
        0.into()
    }
}
