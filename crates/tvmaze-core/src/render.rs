//! Markup rendering for shows and episodes
//!
//! Produces the HTML fragments placed in the show list and episode area.
//! Every value taken from the catalog is escaped before it is interpolated;
//! show summaries are reduced to plain-text paragraphs first.

use scraper::{ElementRef, Html};

use crate::page::{PageView, RegionView};
use crate::types::{EpisodeRecord, ShowRecord};

/// Poster shown for shows the catalog has no image for
pub const FALLBACK_IMAGE_URL: &str =
    "https://www.staticwhich.co.uk/static/images/products/no-image/no-image-available.png";

/// Premiere label used when the catalog has no premiere date
pub const UNLISTED_PREMIERE: &str = "unlisted";

/// CSS class of the per-card episode button
pub const EPISODE_BUTTON_CLASS: &str = "episode-button";

/// Escape text for use in HTML content and double-quoted attributes.
///
/// # Example
/// ```
/// use tvmaze_core::render::escape_html;
/// assert_eq!(escape_html("<b>\"Tom\" & 'Jerry'</b>"),
///     "&lt;b&gt;&quot;Tom&quot; &amp; &#39;Jerry&#39;&lt;/b&gt;");
/// ```
pub fn escape_html(text: &str) -> String {
    let mut escaped = String::with_capacity(text.len());
    for ch in text.chars() {
        match ch {
            '&' => escaped.push_str("&amp;"),
            '<' => escaped.push_str("&lt;"),
            '>' => escaped.push_str("&gt;"),
            '"' => escaped.push_str("&quot;"),
            '\'' => escaped.push_str("&#39;"),
            _ => escaped.push(ch),
        }
    }
    escaped
}

/// Split an HTML-bearing summary into plain-text paragraphs.
///
/// Each top-level `<p>` becomes one paragraph; text and inline markup
/// between them are gathered into paragraphs of their own. Whitespace is
/// collapsed and empty paragraphs are dropped.
pub fn summary_paragraphs(summary: &str) -> Vec<String> {
    let fragment = Html::parse_fragment(summary);
    let mut paragraphs = Vec::new();
    let mut loose = String::new();

    for child in fragment.root_element().children() {
        match ElementRef::wrap(child) {
            Some(el) if el.value().name() == "p" => {
                push_paragraph(&mut paragraphs, &loose);
                loose.clear();
                push_paragraph(&mut paragraphs, &el.text().collect::<String>());
            }
            Some(el) => loose.extend(el.text()),
            None => {
                if let Some(text) = child.value().as_text() {
                    loose.push_str(text);
                }
            }
        }
    }
    push_paragraph(&mut paragraphs, &loose);

    paragraphs
}

fn push_paragraph(paragraphs: &mut Vec<String>, text: &str) {
    let collapsed = text.split_whitespace().collect::<Vec<_>>().join(" ");
    if !collapsed.is_empty() {
        paragraphs.push(collapsed);
    }
}

/// Image URL for a show card: `image.original`, or the fallback poster.
pub fn show_image_url(show: &ShowRecord) -> &str {
    show.image
        .as_ref()
        .map(|image| image.original.as_str())
        .unwrap_or(FALLBACK_IMAGE_URL)
}

/// Premiere label for a show card: the date, or `unlisted`.
pub fn premiere_label(show: &ShowRecord) -> &str {
    show.premiered.as_deref().unwrap_or(UNLISTED_PREMIERE)
}

/// Render one show card.
pub fn render_show_card(show: &ShowRecord) -> String {
    let name = escape_html(&show.name);
    let summary: String = show
        .summary
        .as_deref()
        .map(summary_paragraphs)
        .unwrap_or_default()
        .iter()
        .map(|paragraph| format!("\n      <p class=\"card-text\">{}</p>", escape_html(paragraph)))
        .collect();

    format!(
        r#"<div class="col-md-6 col-lg-3 Show" data-show-id="{id}">
  <div class="card" data-show-id="{id}">
    <div class="card-body">
      <img class="card-img-top" src="{image}" alt="{name}">
      <h5 class="card-title">{name}</h5>
      <h6 class="card-subtitle mb-2 text-muted">Premier date: {premiered}</h6>{summary}
      <button type="button" class="btn btn-info {button_class}">Show Episodes</button>
    </div>
  </div>
</div>
"#,
        id = show.id,
        image = escape_html(show_image_url(show)),
        name = name,
        premiered = escape_html(premiere_label(show)),
        summary = summary,
        button_class = EPISODE_BUTTON_CLASS,
    )
}

/// Render the full show list, one card per record in input order.
pub fn render_show_list(shows: &[ShowRecord]) -> String {
    shows.iter().map(render_show_card).collect()
}

/// Format one episode line as `"{name}" - S{season}:E{number}`.
///
/// # Example
/// ```
/// use tvmaze_core::render::format_episode_line;
/// use tvmaze_core::EpisodeRecord;
///
/// let pilot = EpisodeRecord { id: 1, name: "Pilot".into(), season: 1, number: 1 };
/// assert_eq!(format_episode_line(&pilot), "\"Pilot\" - S1:E1");
/// ```
pub fn format_episode_line(episode: &EpisodeRecord) -> String {
    format!(
        "\"{}\" - S{}:E{}",
        episode.name, episode.season, episode.number
    )
}

/// Render the episode list as a single `<ul>` with one `<li>` per record.
pub fn render_episode_list(episodes: &[EpisodeRecord]) -> String {
    let mut markup = String::from("<ul>\n");
    for episode in episodes {
        markup.push_str("  <li>");
        markup.push_str(&escape_html(&format_episode_line(episode)));
        markup.push_str("</li>\n");
    }
    markup.push_str("</ul>\n");
    markup
}

/// Render the visible error state of a region.
pub fn render_error(message: &str) -> String {
    format!(
        "<div class=\"alert alert-danger\" role=\"alert\">{}</div>\n",
        escape_html(message)
    )
}

fn region_style(region: &RegionView) -> &'static str {
    if region.visible {
        ""
    } else {
        r#" style="display:none""#
    }
}

/// Render the whole page: search form, show list and episode area.
pub fn render_document(view: &PageView) -> String {
    format!(
        r#"<!DOCTYPE html>
<html lang="en">
<head>
  <meta charset="utf-8">
  <title>TV Show Search</title>
  <link rel="stylesheet" href="https://stackpath.bootstrapcdn.com/bootstrap/4.5.0/css/bootstrap.min.css">
</head>
<body>
<div class="container">
  <h1>TV Show Search</h1>
  <form class="form-inline" id="search-form">
    <input class="form-control" id="search-query" name="q">
    <button class="btn btn-primary" type="submit">Go!</button>
  </form>
  <div class="row mt-3" id="shows-list"{shows_style}>
{shows}  </div>
  <section class="mt-3" id="episodes-area"{episodes_style}>
    <h2>Episodes</h2>
{episodes}  </section>
</div>
</body>
</html>
"#,
        shows_style = region_style(&view.shows_list),
        shows = view.shows_list.content,
        episodes_style = region_style(&view.episodes_area),
        episodes = view.episodes_area.content,
    )
}
