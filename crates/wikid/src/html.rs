//! HTML renderer.
//!
//! Every literal value, text or attribute, goes through [`escape_html`].
//! Links and images whose targets fail validation degrade to escaped text or
//! an empty source rather than producing an unsafe attribute.

use std::fmt::Write;

use crate::ast::{
    Article, Image, ImageKind, Link, LinkKind, List, ListKind, Paragraph, Style, TextPart,
};
use crate::escape::{
    escape_html, is_absolute_url, is_image_source, is_valid_anchor, is_valid_email, join_base,
};
use crate::settings::RenderSettings;

/// Render an article to an HTML fragment.
#[must_use]
pub fn render(article: &Article, settings: &RenderSettings) -> String {
    let mut renderer = HtmlRenderer {
        settings,
        out: String::new(),
    };
    let last = article.paragraphs.len().saturating_sub(1);
    for (i, paragraph) in article.paragraphs.iter().enumerate() {
        renderer.paragraph(paragraph, i == last);
    }
    renderer.out
}

/// Opening and closing tag name for a formatting style.
#[must_use]
pub fn style_tag(style: Style) -> &'static str {
    match style {
        Style::Bold => "b",
        Style::Italic => "em",
        Style::Underline => "ins",
        Style::Strikethrough => "del",
        Style::Superscript => "sup",
        Style::Subscript => "sub",
    }
}

struct HtmlRenderer<'a> {
    settings: &'a RenderSettings,
    out: String,
}

impl HtmlRenderer<'_> {
    fn paragraph(&mut self, paragraph: &Paragraph, is_last: bool) {
        match paragraph {
            Paragraph::Blank => self.out.push_str("<br>"),
            Paragraph::Rule => self.out.push_str("<hr>"),
            Paragraph::Heading(heading) => {
                write!(
                    self.out,
                    "<h{level}>{}</h{level}>",
                    escape_html(&heading.text),
                    level = heading.level
                )
                .unwrap();
            }
            Paragraph::List(list) => self.list(list),
            Paragraph::Image(image) => {
                self.image(image);
                self.out.push_str("<br>");
            }
            Paragraph::Blockquote(quote) => {
                write!(self.out, "<blockquote>{}</blockquote>", escape_html(&quote.text)).unwrap();
            }
            Paragraph::Text(text) => {
                self.parts(&text.parts);
                if !is_last {
                    self.out.push_str("<br>");
                }
            }
            Paragraph::Table => {}
        }
    }

    fn list(&mut self, list: &List) {
        let tag = match list.kind {
            ListKind::Unordered => "ul",
            ListKind::Ordered => "ol",
        };
        write!(self.out, "<{tag}>").unwrap();
        for item in &list.items {
            self.out.push_str("<li>");
            self.parts(&item.parts);
            self.out.push_str("</li>");
        }
        write!(self.out, "</{tag}>").unwrap();
    }

    fn image(&mut self, image: &Image) {
        let src = match image.kind {
            ImageKind::External => image.path.clone(),
            ImageKind::Relative => join_base(self.settings.image_base(), &image.path),
        };
        let src = if is_image_source(&src) {
            src
        } else {
            tracing::debug!(path = %image.path, "Image source is not absolute, emitting empty src");
            String::new()
        };
        write!(
            self.out,
            r#"<img src="{}" alt="{}">"#,
            escape_html(&src),
            escape_html(&image.alt)
        )
        .unwrap();
    }

    fn parts(&mut self, parts: &[TextPart]) {
        for part in parts {
            match part {
                TextPart::Plain { text } => self.out.push_str(&escape_html(text)),
                TextPart::Formatted { style, parts } => {
                    let tag = style_tag(*style);
                    write!(self.out, "<{tag}>").unwrap();
                    self.parts(parts);
                    write!(self.out, "</{tag}>").unwrap();
                }
                TextPart::Link(link) => self.link(link),
            }
        }
    }

    fn link(&mut self, link: &Link) {
        match link.kind {
            LinkKind::External => self.external_link(&link.target, &link.text),
            LinkKind::Attachment => {
                let href = join_base(self.settings.attach_base(), &link.target);
                self.external_link(&href, &link.text);
            }
            LinkKind::AnchorDefinition => {
                if is_valid_anchor(&link.target) {
                    write!(self.out, r#"<a name="{}"></a>"#, escape_html(&link.target)).unwrap();
                } else {
                    self.out.push_str(&escape_html(&link.target));
                }
            }
            LinkKind::AnchorReference => {
                if is_valid_anchor(&link.target) {
                    write!(
                        self.out,
                        r##"<a href="#{}">{}</a>"##,
                        escape_html(&link.target),
                        escape_html(&link.text)
                    )
                    .unwrap();
                } else {
                    self.out.push_str(&escape_html(&link.text));
                }
            }
            LinkKind::Email => {
                if is_valid_email(&link.target) {
                    write!(
                        self.out,
                        r#"<a href="mailto:{}">{}</a>"#,
                        escape_html(&link.target),
                        escape_html(&link.text)
                    )
                    .unwrap();
                } else {
                    tracing::debug!(address = %link.target, "Dropping invalid email link");
                }
            }
        }
    }

    fn external_link(&mut self, href: &str, text: &str) {
        if is_absolute_url(href) {
            write!(
                self.out,
                r#"<a href="{}" target="_blank">{}</a>"#,
                escape_html(href),
                escape_html(text)
            )
            .unwrap();
        } else {
            tracing::trace!(href, "Link target is not absolute, rendering text only");
            self.out.push_str(&escape_html(text));
        }
    }
}
