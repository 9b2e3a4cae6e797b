//! Page layout of the printable shopping list.
//!
//! Coordinates are PDF points on an A4 portrait page, measured from the
//! bottom-left corner. The layout is computed here so that pagination does not
//! depend on the drawing backend.

use chrono::{DateTime, Utc};

use super::model::CartAggregateRow;

pub const PAGE_WIDTH: f32 = 595.2756;
pub const PAGE_HEIGHT: f32 = 841.8898;

const LEFT_MARGIN: f32 = 50.0;
const BOTTOM_MARGIN: f32 = 50.0;
const TITLE_TOP_OFFSET: f32 = 70.0;
const FIRST_PAGE_BODY_TOP_OFFSET: f32 = 120.0;
const NEXT_PAGE_BODY_TOP_OFFSET: f32 = 50.0;
const LINE_HEIGHT: f32 = 30.0;
const FOOTER_Y: f32 = 30.0;

const TITLE_FONT_SIZE: f32 = 24.0;
const BODY_FONT_SIZE: f32 = 14.0;
const FOOTER_FONT_SIZE: f32 = 12.0;

const TITLE: &str = "Shopping list";
const FOOTER_BRAND: &str = "Foodgram";

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FontWeight {
    Regular,
    Bold,
}

/// A single run of text placed on a page.
#[derive(Debug, Clone, PartialEq)]
pub struct TextLine {
    pub text: String,
    pub x: f32,
    pub y: f32,
    pub font_size: f32,
    pub weight: FontWeight,
}

#[derive(Debug, Clone, PartialEq)]
pub struct Page {
    pub title: Option<TextLine>,
    pub items: Vec<TextLine>,
    pub footer: TextLine,
}

impl Page {
    fn new(title: Option<TextLine>, footer: TextLine) -> Self {
        Self {
            title,
            items: Vec::new(),
            footer,
        }
    }

    /// All text on the page in drawing order.
    pub fn text_lines(&self) -> impl Iterator<Item = &TextLine> {
        self.title
            .iter()
            .chain(self.items.iter())
            .chain(std::iter::once(&self.footer))
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct ShoppingListDocument {
    pub title: String,
    pub generated_at: DateTime<Utc>,
    pub pages: Vec<Page>,
}

impl ShoppingListDocument {
    /// Lays out the rows as numbered lines, breaking to a new page whenever
    /// the cursor drops below the bottom margin. Numbering continues across
    /// pages; the title is only drawn on the first page and the footer on all.
    pub fn compose(rows: &[CartAggregateRow], generated_at: DateTime<Utc>) -> Self {
        let footer = footer_line(generated_at);
        let title = TextLine {
            text: TITLE.to_string(),
            x: LEFT_MARGIN,
            y: PAGE_HEIGHT - TITLE_TOP_OFFSET,
            font_size: TITLE_FONT_SIZE,
            weight: FontWeight::Bold,
        };

        let mut pages = vec![Page::new(Some(title), footer.clone())];
        let mut cursor = PAGE_HEIGHT - FIRST_PAGE_BODY_TOP_OFFSET;

        for (index, row) in rows.iter().enumerate() {
            if cursor < BOTTOM_MARGIN {
                pages.push(Page::new(None, footer.clone()));
                cursor = PAGE_HEIGHT - NEXT_PAGE_BODY_TOP_OFFSET;
            }

            let line = TextLine {
                text: format_item(index + 1, row),
                x: LEFT_MARGIN,
                y: cursor,
                font_size: BODY_FONT_SIZE,
                weight: FontWeight::Regular,
            };
            if let Some(page) = pages.last_mut() {
                page.items.push(line);
            }
            cursor -= LINE_HEIGHT;
        }

        Self {
            title: TITLE.to_string(),
            generated_at,
            pages,
        }
    }

    pub fn item_count(&self) -> usize {
        self.pages.iter().map(|page| page.items.len()).sum()
    }
}

fn format_item(number: usize, row: &CartAggregateRow) -> String {
    format!(
        "{}. {} — {} {}",
        number, row.ingredient_name, row.total_amount, row.unit
    )
}

fn footer_line(generated_at: DateTime<Utc>) -> TextLine {
    TextLine {
        text: format!(
            "{} | Generated: {}",
            FOOTER_BRAND,
            generated_at.format("%d.%m.%Y %H:%M")
        ),
        x: LEFT_MARGIN,
        y: FOOTER_Y,
        font_size: FOOTER_FONT_SIZE,
        weight: FontWeight::Bold,
    }
}
