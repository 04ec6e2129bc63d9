//! Digest renderer
//!
//! Renders filtered trending results to a Telegram MarkdownV2 message.

use crate::domain::entities::{RepoMatch, TrendingDeveloper, WindowedResults};

use super::escape::escape_markdown;

/// Render the digest.
///
/// Returns an empty string when nothing matched in any window.
pub fn render_digest(
    repos: &WindowedResults<RepoMatch>,
    developers: &WindowedResults<TrendingDeveloper>,
    base_url: &str,
) -> String {
    let base_url = base_url.trim_end_matches('/');
    let mut sections = Vec::new();

    if !repos.is_empty() {
        sections.push(render_section("Trending Repos", repos, |m| {
            render_repo(m, base_url)
        }));
    }

    if !developers.is_empty() {
        sections.push(render_section("Trending Developers", developers, |d| {
            render_developer(d, base_url)
        }));
    }

    sections.join("\n\n")
}

/// Bold title followed by one block per non-empty window
fn render_section<T>(
    title: &str,
    results: &WindowedResults<T>,
    render_line: impl Fn(&T) -> String,
) -> String {
    let blocks: Vec<String> = results
        .iter()
        .filter(|(_, items)| !items.is_empty())
        .map(|(window, items)| {
            let mut block = format!("_{}_", escape_markdown(window.label()));
            for item in items {
                block.push('\n');
                block.push_str(&render_line(item));
            }
            block
        })
        .collect();

    format!("*{}*\n{}", escape_markdown(title), blocks.join("\n\n"))
}

fn render_repo(repo_match: &RepoMatch, base_url: &str) -> String {
    let url = &repo_match.repo.url;
    let accounts = repo_match
        .matched
        .iter()
        .map(|account| escape_markdown(account.as_str()))
        .collect::<Vec<_>>()
        .join(", ");

    format!(
        "\\- [{}]({}/{}) \\| {}",
        escape_markdown(url),
        base_url,
        url,
        accounts
    )
}

fn render_developer(developer: &TrendingDeveloper, base_url: &str) -> String {
    let mut line = format!(
        "\\- [{}]({}/{})",
        escape_markdown(&developer.name),
        base_url,
        developer.username
    );

    // An empty repo would render as a link to the bare base URL
    if !developer.repo.is_empty() {
        line.push_str(&format!(
            " \\| [{}]({}/{})",
            escape_markdown(&developer.repo),
            base_url,
            developer.repo
        ));
    }

    line
}
