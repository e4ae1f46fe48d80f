use log::debug;

use crate::cli::commands::{open_wiki, write_output};
use crate::config::Config;
use crate::utils::error::BoxResult;
use crate::wiki::{AccessControl, DenyList, PageCatalog};

/// Handle the pages command
pub fn handle_pages_command(prefix: Option<&str>, reverse: bool, config: &Config) -> BoxResult<()> {
    let pages = list_pages(prefix.unwrap_or(""), reverse, config)?;
    debug!("{} pages listed", pages.len());
    write_output(None, &pages.join("\n"))
}

/// Visible page names with the given prefix
fn list_pages(prefix: &str, reverse: bool, config: &Config) -> BoxResult<Vec<String>> {
    let access = DenyList::new(config.deny.clone());
    let pages = open_wiki(config).sorted_pages(prefix, reverse)?;
    Ok(pages.into_iter().filter(|page| access.can_view(page)).collect())
}
