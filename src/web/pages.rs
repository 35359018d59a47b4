//! HTML rendering for the three views.
//!
//! Pages are assembled with `format!`; every value that comes from the
//! filesystem or a visitor goes through [`html_escape`].

use std::path::Path;

use crate::storage::{Asset, Category, Gallery};

use super::view::View;

/// Upload tabs, in display order.
const UPLOAD_TABS: [Category; 4] = [
    Category::Videos,
    Category::Audio,
    Category::Text,
    Category::Images,
];

/// Collection sections, in display order.
const COLLECTION_SECTIONS: [Category; 4] = [
    Category::Images,
    Category::Videos,
    Category::Audio,
    Category::Text,
];

/// Shown after a story note is saved.
pub const STORY_SAVED: &str = "✅ కథ విజయవంతంగా అప్‌లోడ్ అయింది!";

/// Shown when a blank story note is submitted.
pub const STORY_EMPTY: &str = "❌ దయచేసి కథను నమోదు చేయండి";

const UPLOAD_BUTTON: &str = "అప్‌లోడ్ చేయండి";

const STYLE: &str = r#"
body { margin: 0; font-family: "Noto Sans Telugu", sans-serif; display: flex; min-height: 100vh; }
nav { width: 220px; background: #f0f2f6; padding: 24px 16px; flex-shrink: 0; }
nav h2 { font-size: 14px; color: #555; margin-top: 0; }
nav a { display: block; padding: 8px 10px; border-radius: 6px; color: #222; text-decoration: none; }
nav a.active { background: #ff4b4b; color: #fff; }
main { flex: 1; padding: 24px 32px; min-width: 0; }
.notice { padding: 12px 16px; border-radius: 6px; margin-bottom: 16px; }
.notice.success { background: #e6f4ea; color: #1e4620; }
.notice.error { background: #fdecea; color: #611a15; }
.info { padding: 12px 16px; border-radius: 6px; background: #e8f0fe; color: #174ea6; }
.tabs a { margin-right: 16px; }
.tab { border-top: 1px solid #ddd; padding: 12px 0 24px; }
.grid { display: grid; grid-template-columns: repeat(3, 1fr); gap: 16px; }
.grid img { width: 100%; }
video, audio { display: block; width: 100%; margin-bottom: 12px; }
textarea { width: 100%; box-sizing: border-box; }
textarea.story { height: 150px; }
"#;

/// Result of an upload action, shown above the upload tabs.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Notice {
    Success(String),
    Error(String),
}

/// Escape text for use in HTML content and attribute values.
pub fn html_escape(s: &str) -> String {
    s.replace('&', "&amp;")
        .replace('<', "&lt;")
        .replace('>', "&gt;")
        .replace('"', "&quot;")
        .replace('\'', "&#39;")
}

/// URL under which a stored asset is served.
pub fn media_url(asset: &Asset) -> String {
    format!(
        "/media/{}/{}",
        asset.category.dir_name(),
        urlencoding::encode(&asset.name)
    )
}

/// Heading of a collection section.
pub fn section_title(category: Category) -> &'static str {
    match category {
        Category::Images => "🖼 చిత్రాలు",
        Category::Videos => "🎥 వీడియోలు",
        Category::Audio => "🎙 ఆడియోలు",
        Category::Text => "📝 వ్రాత కథలు",
    }
}

/// Placeholder for a collection section with no assets.
pub fn empty_message(category: Category) -> &'static str {
    match category {
        Category::Images => "చిత్రాలు లేవు",
        Category::Videos => "వీడియోలు లేవు",
        Category::Audio => "ఆడియోలు లేవు",
        Category::Text => "వ్రాత కథలు లేవు",
    }
}

fn tab_label(category: Category) -> &'static str {
    match category {
        Category::Videos => "🎥 వీడియో",
        Category::Audio => "🎙 ఆడియో",
        Category::Text => "📝 టెక్స్ట్",
        Category::Images => "🖼 చిత్రం",
    }
}

fn picker_label(category: Category) -> &'static str {
    match category {
        Category::Videos => "వీడియో ఫైల్ ఎంచుకోండి",
        Category::Audio => "ఆడియో ఫైల్ ఎంచుకోండి",
        Category::Text => "టెక్స్ట్ ఫైల్ ఎంచుకోండి",
        Category::Images => "చిత్రం ఎంచుకోండి",
    }
}

fn noun(category: Category) -> &'static str {
    match category {
        Category::Videos => "వీడియో",
        Category::Audio => "ఆడియో",
        Category::Text => "టెక్స్ట్",
        Category::Images => "చిత్రం",
    }
}

/// Confirmation shown after a file upload.
pub fn upload_saved(category: Category, path: &Path) -> String {
    format!(
        "✅ {} విజయవంతంగా అప్‌లోడ్ అయింది: {}",
        noun(category),
        path.display()
    )
}

/// Shown when an uploaded file could not be stored.
pub fn upload_failed(category: Category, reason: &str) -> String {
    format!("❌ {} అప్‌లోడ్ విఫలమైంది: {reason}", noun(category))
}

/// Wrap a view body in the site layout with the navigation sidebar.
pub fn layout(site_title: &str, active: View, body: &str) -> String {
    let nav = View::ALL
        .iter()
        .map(|view| {
            let class = if *view == active { r#" class="active""# } else { "" };
            format!(
                r#"<a href="{}"{class}>{}</a>"#,
                view.path(),
                view.label()
            )
        })
        .collect::<Vec<_>>()
        .join("\n");

    format!(
        r#"<!DOCTYPE html>
<html lang="te">
<head>
<meta charset="UTF-8">
<meta name="viewport" content="width=device-width, initial-scale=1.0">
<title>📚 {title}</title>
<style>{STYLE}</style>
</head>
<body>
<nav>
<h2>నావిగేషన్</h2>
{nav}
</nav>
<main>
{body}
</main>
</body>
</html>"#,
        title = html_escape(site_title),
    )
}

/// Body of the home view: the homepage document in a fixed-height frame.
pub fn home_body(document: &str, height: u32) -> String {
    format!(
        r#"<iframe srcdoc="{}" style="width: 100%; height: {height}px; border: none;" scrolling="yes"></iframe>"#,
        html_escape(document)
    )
}

fn notice_html(notice: &Notice) -> String {
    let (class, message) = match notice {
        Notice::Success(message) => ("success", message),
        Notice::Error(message) => ("error", message),
    };
    format!(
        r#"<div class="notice {class}">{}</div>"#,
        html_escape(message)
    )
}

fn upload_tab(category: Category) -> String {
    let file_form = format!(
        r#"<form method="post" action="/upload/{dir}" enctype="multipart/form-data">
<label>{label}<br><input type="file" name="file" accept="{accept}" required></label>
<button type="submit">{UPLOAD_BUTTON}</button>
</form>"#,
        dir = category.dir_name(),
        label = picker_label(category),
        accept = category.accept_attr(),
    );

    let story_form = match category {
        Category::Text => format!(
            r#"<form method="post" action="/stories">
<label>మీ కథను ఇక్కడ రాయండి (తెలుగులో)<br><textarea name="story" class="story"></textarea></label>
<button type="submit">{UPLOAD_BUTTON}</button>
</form>"#
        ),
        _ => String::new(),
    };

    format!(
        r#"<section class="tab" id="{dir}">
<h3>{tab}</h3>
{story_form}
{file_form}
</section>"#,
        dir = category.dir_name(),
        tab = tab_label(category),
    )
}

/// Body of the upload view.
pub fn upload_body(notice: Option<&Notice>) -> String {
    let tabs_nav = UPLOAD_TABS
        .iter()
        .map(|c| format!(r##"<a href="#{}">{}</a>"##, c.dir_name(), tab_label(*c)))
        .collect::<Vec<_>>()
        .join("\n");
    let tabs = UPLOAD_TABS
        .iter()
        .map(|c| upload_tab(*c))
        .collect::<Vec<_>>()
        .join("\n");

    format!(
        r#"<h1>📤 మీ కథను అప్‌లోడ్ చేయండి</h1>
{notice}
<div class="tabs">
{tabs_nav}
</div>
{tabs}"#,
        notice = notice.map(notice_html).unwrap_or_default(),
    )
}

fn asset_html(asset: &Asset) -> String {
    let name = html_escape(&asset.name);
    let url = media_url(asset);
    match asset.category {
        Category::Images => format!(
            r#"<figure><img src="{url}" alt="{name}"><figcaption>{name}</figcaption></figure>"#
        ),
        Category::Videos => format!(r#"<video controls src="{url}"></video>"#),
        Category::Audio => format!(r#"<audio controls src="{url}"></audio>"#),
        Category::Text => format!(
            r#"<label>{name}<br><textarea class="story">{}</textarea></label>"#,
            html_escape(asset.content.as_deref().unwrap_or_default())
        ),
    }
}

fn section_html(category: Category, assets: &[Asset]) -> String {
    let content = if assets.is_empty() {
        format!(r#"<div class="info">{}</div>"#, empty_message(category))
    } else {
        let items = assets.iter().map(asset_html).collect::<Vec<_>>().join("\n");
        match category {
            Category::Images => format!(r#"<div class="grid">{items}</div>"#),
            _ => items,
        }
    };

    format!(
        r#"<section id="{dir}">
<h3>{title}</h3>
{content}
</section>"#,
        dir = category.dir_name(),
        title = section_title(category),
    )
}

/// Body of the collection view.
pub fn collection_body(gallery: &Gallery) -> String {
    let sections = COLLECTION_SECTIONS
        .iter()
        .map(|c| section_html(*c, gallery.assets(*c)))
        .collect::<Vec<_>>()
        .join("\n");

    format!("<h1>📂 నా కథల సేకరణ</h1>\n{sections}")
}
