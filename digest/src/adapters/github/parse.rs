//! Trending page extraction
//!
//! Turns trending page HTML into listings. Only the listing's primary
//! link (repos) or name (developers) is mandatory; every other field falls
//! back to an empty value or zero.

use scraper::{ElementRef, Html, Selector};
use tracing::debug;

use crate::domain::entities::{AccountId, TrendingDeveloper, TrendingRepo};
use crate::error::ScrapeError;

fn selector(css: &'static str) -> Result<Selector, ScrapeError> {
    Selector::parse(css).map_err(|e| ScrapeError::Selector {
        css,
        reason: e.to_string(),
    })
}

/// Selectors for `/trending`
pub struct RepoSelectors {
    article: Selector,
    title_link: Selector,
    description: Selector,
    language: Selector,
    star_icon: Selector,
    fork_icon: Selector,
    contributor: Selector,
}

impl RepoSelectors {
    pub fn new() -> Result<Self, ScrapeError> {
        Ok(Self {
            article: selector("article.Box-row")?,
            title_link: selector("h2 a[href], h1 a[href]")?,
            description: selector("p")?,
            language: selector(r#"span[itemprop="programmingLanguage"]"#)?,
            star_icon: selector(r#"svg[aria-label="star"]"#)?,
            fork_icon: selector(r#"svg[aria-label="fork"]"#)?,
            contributor: selector(r#"a[data-hovercard-type="user"][href]"#)?,
        })
    }
}

/// Selectors for `/trending/developers`
pub struct DeveloperSelectors {
    article: Selector,
    name_link: Selector,
    username_link: Selector,
    repo_link: Selector,
    repo_description: Selector,
}

impl DeveloperSelectors {
    pub fn new() -> Result<Self, ScrapeError> {
        Ok(Self {
            article: selector("article.Box-row")?,
            name_link: selector("h1.h3 a")?,
            username_link: selector("p a[href]")?,
            repo_link: selector("h1.h4 a[href]")?,
            repo_description: selector("h1.h4 ~ div")?,
        })
    }
}

/// Parse a thousands-separated counter such as `"12,345"`.
///
/// Only the first token counts, so `"1,024 stars today"` reads as 1024.
/// Anything unreadable is 0.
pub fn parse_count(text: &str) -> u64 {
    text.split_whitespace()
        .next()
        .map(|token| token.replace(',', ""))
        .and_then(|digits| digits.parse().ok())
        .unwrap_or(0)
}

fn trim_path(href: &str) -> &str {
    href.trim().trim_matches('/')
}

fn text_of(element: ElementRef<'_>) -> String {
    element.text().collect::<String>().trim().to_string()
}

fn first_text(scope: ElementRef<'_>, selector: &Selector) -> String {
    scope.select(selector).next().map(text_of).unwrap_or_default()
}

fn first_href<'a>(scope: ElementRef<'a>, selector: &Selector) -> Option<&'a str> {
    scope
        .select(selector)
        .next()
        .and_then(|link| link.value().attr("href"))
        .map(trim_path)
        .filter(|path| !path.is_empty())
}

/// Counter rendered next to an icon, e.g. the stargazers badge
fn badge_count(scope: ElementRef<'_>, icon: &Selector) -> u64 {
    scope
        .select(icon)
        .next()
        .and_then(|svg| svg.parent())
        .and_then(ElementRef::wrap)
        .map(|badge| parse_count(&text_of(badge)))
        .unwrap_or(0)
}

pub fn parse_repos(
    html: &str,
    selectors: &RepoSelectors,
) -> Result<Vec<TrendingRepo>, ScrapeError> {
    let document = Html::parse_document(html);

    document
        .select(&selectors.article)
        .enumerate()
        .map(|(index, article)| parse_repo(article, index, selectors))
        .collect()
}

fn parse_repo(
    article: ElementRef<'_>,
    index: usize,
    selectors: &RepoSelectors,
) -> Result<TrendingRepo, ScrapeError> {
    let url = first_href(article, &selectors.title_link).ok_or(ScrapeError::MissingField {
        field: "title link",
        index,
    })?;
    let author = url.split('/').next().unwrap_or_default();

    let contributors: Vec<AccountId> = article
        .select(&selectors.contributor)
        .filter_map(|link| link.value().attr("href"))
        .map(trim_path)
        .filter(|login| !login.is_empty() && !login.contains('/'))
        .map(AccountId::from)
        .collect();

    if contributors.is_empty() {
        debug!(repo = url, "No contributors found for listing");
    }

    Ok(TrendingRepo {
        url: url.to_string(),
        description: first_text(article, &selectors.description),
        language: first_text(article, &selectors.language),
        stars: badge_count(article, &selectors.star_icon),
        forks: badge_count(article, &selectors.fork_icon),
        author: AccountId::from(author),
        contributors,
    })
}

pub fn parse_developers(
    html: &str,
    selectors: &DeveloperSelectors,
) -> Result<Vec<TrendingDeveloper>, ScrapeError> {
    let document = Html::parse_document(html);

    document
        .select(&selectors.article)
        .enumerate()
        .map(|(index, article)| parse_developer(article, index, selectors))
        .collect()
}

fn parse_developer(
    article: ElementRef<'_>,
    index: usize,
    selectors: &DeveloperSelectors,
) -> Result<TrendingDeveloper, ScrapeError> {
    let name_link = article
        .select(&selectors.name_link)
        .next()
        .ok_or(ScrapeError::MissingField {
            field: "developer name",
            index,
        })?;
    let name = text_of(name_link);

    let username = first_href(article, &selectors.username_link)
        .or_else(|| name_link.value().attr("href").map(trim_path))
        .filter(|login| !login.is_empty())
        .map(str::to_string)
        .unwrap_or_else(|| name.clone());

    let repo = first_href(article, &selectors.repo_link)
        .unwrap_or_default()
        .to_string();

    let repo_description = article
        .select(&selectors.repo_description)
        .flat_map(|div| div.text())
        .flat_map(str::split_whitespace)
        .collect::<Vec<_>>()
        .join(" ");

    Ok(TrendingDeveloper {
        name,
        username: AccountId(username),
        repo,
        repo_description,
    })
}
