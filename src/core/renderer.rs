use crate::config::RenderSettings;
use crate::domain::model::{Business, DisplayState};
use std::fmt::Write;

pub const NO_RESULTS_MESSAGE: &str = "No businesses found matching your criteria.";
pub const LOAD_FAILED_MESSAGE: &str = "Failed to load businesses. Please try again later.";
pub const LOADING_MESSAGE: &str = "Loading...";

const ELLIPSIS: &str = "...";

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "cli", derive(clap::ValueEnum))]
pub enum OutputFormat {
    Text,
    Html,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum NoticeKind {
    Info,
    Danger,
}

impl NoticeKind {
    fn css_class(self) -> &'static str {
        match self {
            NoticeKind::Info => "alert alert-info",
            NoticeKind::Danger => "alert alert-danger",
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Card {
    pub image_src: String,
    pub name: String,
    pub category: String,
    pub description: String,
    pub detail_href: String,
}

/// What the display region currently shows.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum RegionContent {
    Empty,
    Loading,
    Notice { kind: NoticeKind, message: String },
    Cards(Vec<Card>),
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DetailView {
    pub image_src: String,
    pub name: String,
    pub category: String,
    pub description: String,
    pub address: Option<String>,
    pub phone: Option<String>,
    pub email: Option<String>,
    pub website: Option<String>,
}

/// Deterministic projection from directory records to display elements.
#[derive(Debug, Clone, Default)]
pub struct ResultRenderer {
    settings: RenderSettings,
}

impl ResultRenderer {
    pub fn new(settings: RenderSettings) -> Self {
        Self { settings }
    }

    pub fn image_path(&self, business: &Business) -> String {
        let file = business
            .image()
            .unwrap_or(self.settings.placeholder_image.as_str());
        format!("{}/{}", self.settings.static_prefix.trim_end_matches('/'), file)
    }

    pub fn detail_href(&self, id: i64) -> String {
        format!("{}/{}", self.settings.detail_prefix.trim_end_matches('/'), id)
    }

    /// Cuts `text` to `description_limit` characters, appending `...` only if
    /// something was cut.
    pub fn truncate_description(&self, text: &str) -> String {
        let limit = self.settings.description_limit;
        match text.char_indices().nth(limit) {
            Some((byte_idx, _)) => format!("{}{}", &text[..byte_idx], ELLIPSIS),
            None => text.to_string(),
        }
    }

    pub fn render_card(&self, business: &Business) -> Card {
        Card {
            image_src: self.image_path(business),
            name: business.name.clone(),
            category: business.category_name.clone(),
            description: self.truncate_description(business.description()),
            detail_href: self.detail_href(business.id),
        }
    }

    pub fn render_businesses(&self, businesses: &[Business]) -> RegionContent {
        if businesses.is_empty() {
            return RegionContent::Notice {
                kind: NoticeKind::Info,
                message: NO_RESULTS_MESSAGE.to_string(),
            };
        }

        RegionContent::Cards(businesses.iter().map(|b| self.render_card(b)).collect())
    }

    pub fn render_state(&self, state: &DisplayState) -> RegionContent {
        match state {
            DisplayState::Idle => RegionContent::Empty,
            DisplayState::Loading => RegionContent::Loading,
            DisplayState::Displayed(businesses) => self.render_businesses(businesses),
            DisplayState::Error(message) => RegionContent::Notice {
                kind: NoticeKind::Danger,
                message: message.clone(),
            },
        }
    }

    pub fn render_detail(&self, business: &Business) -> DetailView {
        DetailView {
            image_src: self.image_path(business),
            name: business.name.clone(),
            category: business.category_name.clone(),
            description: business.description().to_string(),
            address: business.address.clone(),
            phone: business.phone.clone(),
            email: business.email.clone(),
            website: business.website.clone(),
        }
    }
}

impl RegionContent {
    pub fn cards(&self) -> &[Card] {
        match self {
            RegionContent::Cards(cards) => cards,
            _ => &[],
        }
    }

    pub fn notice(&self) -> Option<(NoticeKind, &str)> {
        match self {
            RegionContent::Notice { kind, message } => Some((*kind, message.as_str())),
            _ => None,
        }
    }

    pub fn render(&self, format: OutputFormat) -> String {
        match format {
            OutputFormat::Html => self.to_html(),
            OutputFormat::Text => self.to_text(),
        }
    }

    pub fn to_html(&self) -> String {
        match self {
            RegionContent::Empty => String::new(),
            RegionContent::Loading => format!(
                "<div class=\"col-12 text-center\">\
                 <div class=\"spinner-border text-primary\" role=\"status\">\
                 <span class=\"visually-hidden\">{}</span></div></div>",
                LOADING_MESSAGE
            ),
            RegionContent::Notice { kind, message } => format!(
                "<div class=\"col-12\"><div class=\"{}\">{}</div></div>",
                kind.css_class(),
                escape_html(message)
            ),
            RegionContent::Cards(cards) => {
                let mut html = String::new();
                for card in cards {
                    card.write_html(&mut html);
                }
                html
            }
        }
    }

    pub fn to_text(&self) -> String {
        match self {
            RegionContent::Empty => String::new(),
            RegionContent::Loading => LOADING_MESSAGE.to_string(),
            RegionContent::Notice { kind, message } => match kind {
                NoticeKind::Info => format!("info: {}", message),
                NoticeKind::Danger => format!("error: {}", message),
            },
            RegionContent::Cards(cards) => {
                let mut text = String::new();
                for card in cards {
                    let _ = writeln!(text, "{} [{}]", card.name, card.category);
                    if !card.description.is_empty() {
                        let _ = writeln!(text, "    {}", card.description);
                    }
                    let _ = writeln!(text, "    image:   {}", card.image_src);
                    let _ = writeln!(text, "    details: {}", card.detail_href);
                }
                text
            }
        }
    }
}

impl Card {
    fn write_html(&self, out: &mut String) {
        let name = escape_html(&self.name);
        let _ = write!(
            out,
            "<div class=\"col-md-4 mb-4\"><div class=\"card h-100\">\
             <img src=\"{src}\" class=\"card-img-top\" alt=\"{name}\" \
             style=\"height: 200px; object-fit: cover;\">\
             <div class=\"card-body\">\
             <h5 class=\"card-title\">{name}</h5>\
             <span class=\"badge bg-primary mb-2\">{category}</span>\
             <p class=\"card-text\">{description}</p>\
             </div>\
             <div class=\"card-footer\">\
             <a href=\"{href}\" class=\"btn btn-primary\">View Details</a></div>\
             </div></div>",
            src = escape_html(&self.image_src),
            name = name,
            category = escape_html(&self.category),
            description = escape_html(&self.description),
            href = escape_html(&self.detail_href),
        );
    }
}

impl DetailView {
    fn contact_rows(&self) -> [(&'static str, Option<&str>); 4] {
        [
            ("Address", self.address.as_deref()),
            ("Phone", self.phone.as_deref()),
            ("Email", self.email.as_deref()),
            ("Website", self.website.as_deref()),
        ]
    }

    pub fn render(&self, format: OutputFormat) -> String {
        match format {
            OutputFormat::Html => self.to_html(),
            OutputFormat::Text => self.to_text(),
        }
    }

    pub fn to_html(&self) -> String {
        let mut html = format!(
            "<div class=\"card\"><img src=\"{}\" class=\"card-img-top\" alt=\"{}\">\
             <div class=\"card-body\"><h2 class=\"card-title\">{}</h2>\
             <span class=\"badge bg-primary mb-2\">{}</span>\
             <p class=\"card-text\">{}</p><ul class=\"list-unstyled\">",
            escape_html(&self.image_src),
            escape_html(&self.name),
            escape_html(&self.name),
            escape_html(&self.category),
            escape_html(&self.description),
        );
        for (label, value) in self.contact_rows() {
            if let Some(value) = value.filter(|v| !v.is_empty()) {
                let _ = write!(
                    html,
                    "<li><strong>{}:</strong> {}</li>",
                    label,
                    escape_html(value)
                );
            }
        }
        html.push_str("</ul></div></div>");
        html
    }

    pub fn to_text(&self) -> String {
        let mut text = format!("{} [{}]\n", self.name, self.category);
        if !self.description.is_empty() {
            let _ = writeln!(text, "{}", self.description);
        }
        for (label, value) in self.contact_rows() {
            if let Some(value) = value.filter(|v| !v.is_empty()) {
                let _ = writeln!(text, "{:<8} {}", format!("{}:", label), value);
            }
        }
        let _ = writeln!(text, "{:<8} {}", "Image:", self.image_src);
        text
    }
}

pub fn escape_html(input: &str) -> String {
    let mut escaped = String::with_capacity(input.len());
    for c in input.chars() {
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
