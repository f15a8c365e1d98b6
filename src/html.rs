//! Small string builders for HTML markup. `tag_content`, `wrap` and table cells take markup verbatim, so text must go through `escape` first.

pub fn escape(text: &str) -> String {
    let mut escaped = String::with_capacity(text.len());
    for c in text.chars() {
        match c {
            '&' => escaped.push_str("&amp;"),
            '<' => escaped.push_str("&lt;"),
            '>' => escaped.push_str("&gt;"),
            '"' => escaped.push_str("&quot;"),
            '\'' => escaped.push_str("&#39;"),
            c => escaped.push(c),
        }
    }
    escaped
}

pub fn tag(name: &str) -> String {
    format!("<{name}>")
}

pub fn close_tag(name: &str) -> String {
    format!("</{name}>")
}

pub fn tag_content(name: &str, content: &str) -> String {
    format!("<{name}>{content}</{name}>")
}

pub fn tag_with_class(name: &str, class: &str) -> String {
    format!("<{name} class=\"{class}\">")
}

/// Opening tag with a class, or a bare one when there is no class to apply.
pub fn open(name: &str, class: Option<&str>) -> String {
    match class {
        Some(class) => tag_with_class(name, class),
        None => tag(name),
    }
}

pub fn wrap_with_class(name: &str, class: &str, content: &str) -> String {
    format!("<{name} class=\"{class}\">{content}</{name}>")
}

pub fn wrap(name: &str, class: Option<&str>, content: &str) -> String {
    match class {
        Some(class) => wrap_with_class(name, class, content),
        None => tag_content(name, content),
    }
}

pub fn anchor(url: &str, text: &str) -> String {
    format!("<a href=\"{url}\">{text}</a>", url = escape(url), text = escape(text))
}

pub fn image(uri: &str, size: u32) -> String {
    format!(
        "<img src=\"{uri}\" alt=\"image\" height=\"{size}\" width=\"{size}\" />",
        uri = escape(uri)
    )
}

pub fn link_style(href: &str) -> String {
    format!("<link rel=\"stylesheet\" type=\"text/css\" href=\"{}\">", escape(href))
}

/// Doctype, `<html>` and the whole `<head>` of a page.
pub fn init_page(title: &str, stylesheet: Option<&str>) -> String {
    let mut page = format!("<!DOCTYPE html>{}{}", tag("html"), tag("head"));
    page += &tag_content("title", &escape(title));
    if let Some(stylesheet) = stylesheet {
        page += &link_style(stylesheet);
    }
    page + &close_tag("head")
}

pub fn close_page() -> String {
    close_tag("body") + &close_tag("html")
}

/// A `<table>` with one header row and one body row per entry of `rows`.
pub fn table(class: Option<&str>, headers: &[&str], rows: &[Vec<String>]) -> String {
    let mut table = open("table", class);
    table += &tag("thead");
    table += &tag("tr");
    for header in headers {
        table += &tag_content("th", &escape(header));
    }
    table += &close_tag("tr");
    table += &close_tag("thead");
    table += &tag("tbody");
    for row in rows {
        table += &tag("tr");
        for cell in row {
            table += &tag_content("td", cell);
        }
        table += &close_tag("tr");
    }
    table += &close_tag("tbody");
    table + &close_tag("table")
}
