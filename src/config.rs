use crate::catalog::loader::LoadOptions;
use crate::search::types::{DEFAULT_PAGE_SIZE, SearchSettings};
use clap::Parser;
use std::net::SocketAddr;
use std::path::PathBuf;

/// Command line and environment configuration.
#[derive(Debug, Clone, Parser)]
#[command(
    name = "catalog-search",
    version,
    about = "Paginated name search over an in-memory catalog"
)]
pub struct Config {
    /// CSV file to load at startup.
    #[arg(long, env = "CATALOG_DATA", default_value = "db.csv")]
    pub data: PathBuf,

    /// Address the HTTP server listens on.
    #[arg(long, env = "CATALOG_BIND", default_value = "0.0.0.0:8080")]
    pub bind: SocketAddr,

    /// Records per result page.
    #[arg(
        long,
        env = "CATALOG_PAGE_SIZE",
        default_value_t = DEFAULT_PAGE_SIZE,
        value_parser = parse_page_size
    )]
    pub page_size: usize,

    /// Treat the first CSV row as a header.
    #[arg(long, env = "CATALOG_SKIP_HEADER")]
    pub skip_header: bool,
}

impl Config {
    pub fn load_options(&self) -> LoadOptions {
        LoadOptions {
            skip_header: self.skip_header,
        }
    }

    pub fn search_settings(&self) -> SearchSettings {
        SearchSettings {
            page_size: self.page_size,
        }
    }
}

fn parse_page_size(raw: &str) -> Result<usize, String> {
    match raw.parse::<usize>() {
        Ok(0) => Err("page size must be at least 1".to_string()),
        Ok(size) => Ok(size),
        Err(e) => Err(e.to_string()),
    }
}
