use anyhow::{bail, Result};
use clap::Parser;
use todo_core::{TodoClient, DEFAULT_BASE_URL, DEFAULT_PAGE_LIMIT};

#[derive(Debug, Parser)]
#[command(
    name = "todo",
    version,
    about = "Terminal todo list backed by a remote CRUD service"
)]
pub struct Cli {
    /// Base URL of the todo service.
    #[arg(long, env = "TODO_API_URL", default_value = DEFAULT_BASE_URL)]
    pub base_url: String,

    /// Number of todos fetched on start.
    #[arg(long, env = "TODO_PAGE_LIMIT", default_value_t = DEFAULT_PAGE_LIMIT)]
    pub limit: usize,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AppConfig {
    pub base_url: String,
    pub page_limit: usize,
}

impl AppConfig {
    pub fn client(&self) -> TodoClient {
        TodoClient::with_page_limit(&self.base_url, self.page_limit)
    }
}

impl TryFrom<Cli> for AppConfig {
    type Error = anyhow::Error;

    fn try_from(cli: Cli) -> Result<Self> {
        let base_url = cli.base_url.trim().to_string();
        if !(base_url.starts_with("http://") || base_url.starts_with("https://")) {
            bail!("base url must start with http:// or https://, got `{base_url}`");
        }
        if cli.limit == 0 {
            bail!("limit must be at least 1");
        }
        Ok(Self {
            base_url,
            page_limit: cli.limit,
        })
    }
}
