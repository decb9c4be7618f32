use super::content::FestivalContent;
use crate::submission::flow::{MAX_FILE_SIZE, VIDEO_EXTENSIONS};

const GIB: u64 = 1024 * 1024 * 1024;

/// Render the single-page landing document: hero, about, schedule,
/// highlights, the submission call-to-action and the footer.
pub fn render_landing_page(content: &FestivalContent) -> String {
    let mut html = String::from("<!DOCTYPE html><html lang=\"en\"><head><meta charset=\"utf-8\">");
    html.push_str(
        "<meta name=\"viewport\" content=\"width=device-width, initial-scale=1\">",
    );
    html.push_str(&format!("<title>{}</title></head><body>", html_escape(content.name)));

    html.push_str(&format!(
        "<header><a href=\"/\">{}</a><nav>\
         <a href=\"#about\">About</a><a href=\"#schedule\">Schedule</a>\
         <a href=\"#highlights\">Highlights</a><a href=\"#submit\">Submit</a></nav></header>",
        html_escape(content.name)
    ));

    html.push_str("<main>");
    push_hero(&mut html, content);
    push_about(&mut html, content);
    push_schedule(&mut html, content);
    push_highlights(&mut html, content);
    push_submit(&mut html);
    html.push_str("</main>");

    push_footer(&mut html, content);
    html.push_str("</body></html>");
    html
}

fn push_hero(html: &mut String, content: &FestivalContent) {
    html.push_str("<section id=\"hero\">");
    html.push_str(&format!("<h1>{}</h1>", html_escape(content.name)));
    html.push_str(&format!("<p>{}</p>", html_escape(content.tagline)));
    html.push_str(&format!(
        "<p>{} &middot; {}</p>",
        html_escape(content.dates),
        html_escape(content.venue)
    ));
    html.push_str("<a href=\"#submit\">Submit your film</a></section>");
}

fn push_about(html: &mut String, content: &FestivalContent) {
    html.push_str("<section id=\"about\"><h2>About the Festival</h2>");
    for paragraph in content.about {
        html.push_str(&format!("<p>{}</p>", html_escape(paragraph)));
    }
    html.push_str("</section>");
}

fn push_schedule(html: &mut String, content: &FestivalContent) {
    html.push_str("<section id=\"schedule\"><h2>Festival Schedule</h2><ol>");
    for entry in content.schedule {
        html.push_str("<li>");
        html.push_str(&format!("<time>{}</time>", html_escape(entry.time)));
        html.push_str(&format!("<span>{}</span>", entry.kind.label()));
        html.push_str(&format!("<h3>{}</h3>", html_escape(entry.title)));
        html.push_str(&format!("<p>{}</p>", html_escape(entry.description)));
        html.push_str("</li>");
    }
    html.push_str("</ol></section>");
}

fn push_highlights(html: &mut String, content: &FestivalContent) {
    html.push_str("<section id=\"highlights\"><h2>Festival Highlights</h2>");
    for highlight in content.highlights {
        html.push_str(&format!(
            "<article><h3>{}</h3><p>{}</p></article>",
            html_escape(highlight.title),
            html_escape(highlight.description)
        ));
    }
    html.push_str("</section>");
}

fn push_submit(html: &mut String) {
    let formats = VIDEO_EXTENSIONS
        .iter()
        .map(|ext| ext.to_ascii_uppercase())
        .collect::<Vec<_>>()
        .join(", ");

    html.push_str("<section id=\"submit\"><h2>Share Your Vision</h2>");
    html.push_str(&format!(
        "<p>Accepted formats: {} &bull; Max file size: {}GB</p>",
        formats,
        MAX_FILE_SIZE / GIB
    ));
    html.push_str(
        "<ol><li>Upload your film</li><li>Review your submission</li>\
         <li>Complete your payment</li></ol></section>",
    );
}

fn push_footer(html: &mut String, content: &FestivalContent) {
    let footer = &content.footer;
    html.push_str("<footer>");
    html.push_str(&format!("<p>{}</p>", html_escape(footer.tagline)));
    html.push_str("<address>");
    let lines = footer
        .address
        .iter()
        .map(|line| html_escape(line))
        .collect::<Vec<_>>();
    html.push_str(&lines.join("<br>"));
    html.push_str(&format!(
        "<br><a href=\"mailto:{0}\">{0}</a></address>",
        html_escape(footer.email)
    ));
    html.push_str(&format!("<small>&copy; {}</small>", html_escape(footer.copyright)));
    html.push_str("</footer>");
}

fn html_escape(value: &str) -> String {
    value
        .replace('&', "&amp;")
        .replace('<', "&lt;")
        .replace('>', "&gt;")
        .replace('"', "&quot;")
        .replace('\'', "&#39;")
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::site::FESTIVAL;

    #[test]
    fn page_has_every_section() {
        let html = render_landing_page(&FESTIVAL);

        for id in ["hero", "about", "schedule", "highlights", "submit"] {
            assert!(html.contains(&format!("<section id=\"{}\">", id)), "missing #{}", id);
        }
        assert!(html.contains("<footer>"));
        assert!(html.contains("Opening Night"));
        assert!(html.contains("Accepted formats: MP4, MOV, AVI &bull; Max file size: 2GB"));
    }

    #[test]
    fn dynamic_text_is_escaped() {
        let content = FestivalContent {
            name: "<Fest & Co>",
            ..FESTIVAL
        };
        let html = render_landing_page(&content);

        assert!(html.contains("<h1>&lt;Fest &amp; Co&gt;</h1>"));
        assert!(!html.contains("<Fest"));
    }
}
