use super::dom::Element;

/// The element the page owns and the renderer fills.
pub fn roster_container() -> Element {
    Element::new("ul").attr("id", "roster").class("roster-list")
}

/// Wrap a rendered roster container in the full document.
pub fn render_page(roster: &Element) -> String {
    format!(
        r#"<!doctype html>
<html lang="en">
<head>
  <meta charset="utf-8" />
  <meta name="viewport" content="width=device-width,initial-scale=1" />
  <title>Class Roster</title>
  <style>
    body {{ font-family: Arial, sans-serif; max-width: 900px; margin: 24px auto; padding: 0 12px; }}
    h1 {{ margin-bottom: 8px; }}
    .roster-list {{ list-style: none; padding: 0; }}
    .roster-entry {{ margin: 12px 0; }}
    .roster-card {{ display: flex; gap: 14px; align-items: center; border: 1px solid #ddd; border-radius: 8px; padding: 12px; color: inherit; text-decoration: none; }}
    .roster-card--link:hover {{ border-color: #888; }}
    .roster-photo {{ width: 72px; height: 72px; object-fit: cover; border-radius: 50%; }}
    .roster-link {{ text-decoration: underline; }}
  </style>
</head>
<body>
  <h1>Class Roster</h1>
  <p>Everyone who has added themselves to the roster.</p>
  {roster}
</body>
</html>
"#,
        roster = roster.to_html()
    )
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn page_embeds_the_container() {
        let mut list = roster_container();
        list.append_child(Element::new("li").text("x"));
        let html = render_page(&list);
        assert!(html.starts_with("<!doctype html>"));
        assert!(html.contains("<ul id=\"roster\" class=\"roster-list\"><li>x</li></ul>"));
    }
}
