//! HTML pages
//!
//! Every piece of upstream or user-supplied text goes through [`escape`]
//! before it is interpolated.

use axum::http::StatusCode;

use crate::catalog::{ArtistDetail, ArtistSummary};

const SITE_TITLE: &str = "Groupie-Tracker";

/// Escape text for use in element content and quoted attribute values.
pub fn escape(text: &str) -> String {
    let mut escaped = String::with_capacity(text.len());
    for c in text.chars() {
        match c {
            '&' => escaped.push_str("&amp;"),
            '<' => escaped.push_str("&lt;"),
            '>' => escaped.push_str("&gt;"),
            '"' => escaped.push_str("&quot;"),
            '\'' => escaped.push_str("&#39;"),
            _ => escaped.push(c),
        }
    }
    escaped
}

fn layout(title: &str, body: &str) -> String {
    format!(
        r#"<!DOCTYPE html>
<html lang="en">
<head>
    <meta charset="UTF-8">
    <meta name="viewport" content="width=device-width, initial-scale=1.0">
    <title>{title}</title>
    <link rel="stylesheet" href="/static/style.css">
</head>
<body>
    <header><a href="/">{site}</a></header>
    <main>
{body}
    </main>
</body>
</html>
"#,
        title = escape(title),
        site = SITE_TITLE,
        body = body,
    )
}

fn list_items(items: &[String]) -> String {
    items
        .iter()
        .map(|item| format!("            <li>{}</li>\n", escape(item)))
        .collect()
}

/// Roster page with the search box pre-filled with `query`.
pub fn index_page(artists: &[&ArtistSummary], query: &str) -> String {
    let mut body = format!(
        r#"        <form class="search" method="get" action="/">
            <input type="text" name="search" value="{}" placeholder="Search artists">
            <button type="submit">Search</button>
        </form>
"#,
        escape(query)
    );

    if artists.is_empty() {
        body.push_str("        <p class=\"empty\">No artists found.</p>\n");
    } else {
        body.push_str("        <ul class=\"artists\">\n");
        for artist in artists {
            body.push_str(&format!(
                r#"            <li><a href="/artist/{id}"><img src="{image}" alt="{name}"><span>{name}</span></a></li>
"#,
                id = artist.id,
                image = escape(&artist.image),
                name = escape(&artist.name),
            ));
        }
        body.push_str("        </ul>\n");
    }

    layout(SITE_TITLE, &body)
}

pub fn artist_page(detail: &ArtistDetail) -> String {
    let artist = &detail.artist;

    let mut body = format!(
        r#"        <article class="artist">
            <img src="{image}" alt="{name}">
            <h1>{name}</h1>
            <p>Created: {created}</p>
            <p>First album: {first_album}</p>
            <h2>Members</h2>
            <ul>
"#,
        image = escape(&artist.image),
        name = escape(&artist.name),
        created = artist.creation_date,
        first_album = escape(&artist.first_album),
    );
    body.push_str(&list_items(&artist.members));
    body.push_str("            </ul>\n            <h2>Locations</h2>\n            <ul>\n");
    body.push_str(&list_items(&detail.locations_list));
    body.push_str("            </ul>\n            <h2>Concert dates</h2>\n            <ul>\n");
    body.push_str(&list_items(&detail.concert_dates_list));
    body.push_str("            </ul>\n            <h2>Concerts</h2>\n            <dl>\n");
    for (place, dates) in &detail.relations_map {
        body.push_str(&format!(
            "                <dt>{}</dt><dd>{}</dd>\n",
            escape(place),
            escape(&dates.join(", "))
        ));
    }
    body.push_str("            </dl>\n        </article>\n");

    layout(&artist.name, &body)
}

/// Error page, e.g. "404 Not Found".
pub fn status_page(status: StatusCode) -> String {
    let message = format!(
        "{} {}",
        status.as_u16(),
        status.canonical_reason().unwrap_or("Error")
    );
    let body = format!(
        r#"        <section class="status">
            <h1>{}</h1>
            <a href="/">Back to artists</a>
        </section>
"#,
        escape(&message)
    );

    layout(&message, &body)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::catalog::RelationsMap;

    fn artist(name: &str) -> ArtistSummary {
        ArtistSummary {
            id: 3,
            name: name.to_string(),
            image: "https://example.com/3.jpeg".to_string(),
            members: vec!["Member One".to_string()],
            creation_date: 1988,
            first_album: "05-05-1989".to_string(),
            locations: String::new(),
            concert_dates: String::new(),
            relations: String::new(),
        }
    }

    #[test]
    fn test_escape() {
        assert_eq!(
            escape(r#"<script>alert("x & 'y'")</script>"#),
            "&lt;script&gt;alert(&quot;x &amp; &#39;y&#39;&quot;)&lt;/script&gt;"
        );
        assert_eq!(escape("plain"), "plain");
    }

    #[test]
    fn test_index_page_lists_artists_and_echoes_query() {
        let a = artist("AC/DC");
        let html = index_page(&[&a], "a\"c");

        assert!(html.contains(r#"href="/artist/3""#));
        assert!(html.contains("<span>AC/DC</span>"));
        assert!(html.contains(r#"value="a&quot;c""#));
    }

    #[test]
    fn test_index_page_empty() {
        let html = index_page(&[], "zzz");
        assert!(html.contains("No artists found."));
    }

    #[test]
    fn test_artist_page_renders_collections() {
        let mut relations = RelationsMap::new();
        relations.insert(
            "paris-france".to_string(),
            vec!["01-01-2020".to_string(), "02-01-2020".to_string()],
        );
        let detail = ArtistDetail::new(
            artist("Queen <3"),
            vec!["paris-france".to_string()],
            vec!["*01-01-2020".to_string()],
            relations,
        );

        let html = artist_page(&detail);

        assert!(html.contains("<title>Queen &lt;3</title>"));
        assert!(html.contains("<li>Member One</li>"));
        assert!(html.contains("<li>paris-france</li>"));
        assert!(html.contains("<li>*01-01-2020</li>"));
        assert!(html.contains("<dt>paris-france</dt><dd>01-01-2020, 02-01-2020</dd>"));
        assert!(html.contains("First album: 05-05-1989"));
    }

    #[test]
    fn test_artist_page_with_empty_collections() {
        let mut empty = artist("");
        empty.members.clear();
        let detail = ArtistDetail::new(empty, vec![], vec![], RelationsMap::new());

        let html = artist_page(&detail);

        assert!(!html.contains("<li>"));
        assert!(!html.contains("<dt>"));
        assert!(html.contains("<h2>Locations</h2>\n            <ul>\n            </ul>"));
        assert!(html.ends_with("</html>\n"));
    }

    #[test]
    fn test_status_page() {
        let html = status_page(StatusCode::NOT_FOUND);
        assert!(html.contains("<h1>404 Not Found</h1>"));
    }
}
