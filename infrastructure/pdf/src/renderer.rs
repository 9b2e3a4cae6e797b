use printpdf::{BuiltinFont, IndirectFontRef, Mm, PdfDocument, PdfDocumentReference, Pt};

use business::domain::shopping_list::document::{
    FontWeight, PAGE_HEIGHT, PAGE_WIDTH, ShoppingListDocument, TextLine,
};
use business::domain::shopping_list::errors::ShoppingListError;
use business::domain::shopping_list::services::ShoppingListRenderer;

use crate::fonts::{FontSet, looks_like_font};

const LAYER_NAME: &str = "Shopping list";

/// Draws a laid-out shopping list into a PDF with printpdf.
pub struct ShoppingListRendererPdf {
    fonts: FontSet,
}

impl ShoppingListRendererPdf {
    pub fn new(fonts: FontSet) -> Self {
        Self { fonts }
    }
}

impl ShoppingListRenderer for ShoppingListRendererPdf {
    fn render(&self, document: &ShoppingListDocument) -> Result<Vec<u8>, ShoppingListError> {
        let width = Mm::from(Pt(PAGE_WIDTH));
        let height = Mm::from(Pt(PAGE_HEIGHT));
        let (pdf, first_page, first_layer) =
            PdfDocument::new(document.title.clone(), width, height, LAYER_NAME.to_string());

        let regular = load_font(&pdf, self.fonts.regular.as_deref(), BuiltinFont::Helvetica)?;
        let bold = load_font(&pdf, self.fonts.bold.as_deref(), BuiltinFont::HelveticaBold)?;

        let unencodable = lines_missing_glyphs(document, |line| match line.weight {
            FontWeight::Regular => regular.builtin,
            FontWeight::Bold => bold.builtin,
        });
        if unencodable > 0 {
            tracing::warn!(
                lines = unencodable,
                "shopping list has characters outside the built-in font encoding, configure TTF fonts to print them"
            );
        }

        let mut layers = vec![pdf.get_page(first_page).get_layer(first_layer)];
        for _ in 1..document.pages.len() {
            let (page_index, layer_index) = pdf.add_page(width, height, LAYER_NAME.to_string());
            layers.push(pdf.get_page(page_index).get_layer(layer_index));
        }

        for (page, layer) in document.pages.iter().zip(&layers) {
            for line in page.text_lines() {
                let font = match line.weight {
                    FontWeight::Regular => &regular.font,
                    FontWeight::Bold => &bold.font,
                };
                layer.use_text(
                    line.text.clone(),
                    line.font_size,
                    Mm::from(Pt(line.x)),
                    Mm::from(Pt(line.y)),
                    font,
                );
            }
        }

        drop(layers);
        pdf.save_to_bytes().map_err(|e| {
            tracing::error!(error = ?e, "failed to serialize shopping list pdf");
            ShoppingListError::RenderFailed
        })
    }
}

struct LoadedFont {
    font: IndirectFontRef,
    builtin: bool,
}

/// Embeds the preferred font, or registers `fallback` when it is missing or
/// cannot be parsed.
fn load_font(
    pdf: &PdfDocumentReference,
    preferred: Option<&[u8]>,
    fallback: BuiltinFont,
) -> Result<LoadedFont, ShoppingListError> {
    if let Some(bytes) = preferred {
        if looks_like_font(bytes) {
            match pdf.add_external_font(bytes) {
                Ok(font) => {
                    return Ok(LoadedFont {
                        font,
                        builtin: false,
                    });
                }
                Err(e) => tracing::warn!(error = ?e, "embedded font rejected, using built-in font"),
            }
        } else {
            tracing::warn!("font file is not a TrueType/OpenType font, using built-in font");
        }
    }

    let font = pdf.add_builtin_font(fallback).map_err(|e| {
        tracing::error!(error = ?e, "failed to register built-in font");
        ShoppingListError::RenderFailed
    })?;
    Ok(LoadedFont {
        font,
        builtin: true,
    })
}

/// Counts lines drawn with a built-in font that contain characters the
/// font's WinAnsi encoding has no code for. Those characters are left out of
/// the PDF.
fn lines_missing_glyphs(
    document: &ShoppingListDocument,
    uses_builtin: impl Fn(&TextLine) -> bool,
) -> usize {
    document
        .pages
        .iter()
        .flat_map(|page| page.text_lines())
        .filter(|line| uses_builtin(line) && !line.text.chars().all(is_win_ansi))
        .count()
}

fn is_win_ansi(c: char) -> bool {
    matches!(
        c,
        ' '..='~'
            | '\u{a0}'..='\u{ff}'
            | '€' | '‚' | 'ƒ' | '„' | '…' | '†' | '‡' | 'ˆ' | '‰' | 'Š' | '‹' | 'Œ' | 'Ž'
            | '‘' | '’' | '“' | '”' | '•' | '–' | '—' | '˜' | '™' | 'š' | '›' | 'œ' | 'ž'
            | 'Ÿ'
    )
}

#[cfg(test)]
mod tests {
    use super::*;
    use business::domain::shopping_list::model::CartAggregateRow;
    use chrono::{TimeZone, Utc};

    fn document(rows: usize) -> ShoppingListDocument {
        let rows: Vec<CartAggregateRow> = (0..rows)
            .map(|i| CartAggregateRow::new(format!("Ingredient {}", i), "g", 100))
            .collect();
        ShoppingListDocument::compose(&rows, Utc.with_ymd_and_hms(2024, 5, 1, 9, 30, 0).unwrap())
    }

    #[test]
    fn should_render_pdf_with_builtin_fonts() {
        let renderer = ShoppingListRendererPdf::new(FontSet::builtin());

        let bytes = renderer.render(&document(3)).unwrap();

        assert!(bytes.starts_with(b"%PDF"));
    }

    #[test]
    fn should_fall_back_when_font_bytes_are_invalid() {
        let renderer = ShoppingListRendererPdf::new(FontSet::from_bytes(
            b"not a font".to_vec(),
            Vec::new(),
        ));

        let result = renderer.render(&document(3));

        assert!(result.is_ok());
        assert!(result.unwrap().starts_with(b"%PDF"));
    }

    #[test]
    fn should_fall_back_when_font_directory_is_missing() {
        let renderer = ShoppingListRendererPdf::new(FontSet::from_dir("/nonexistent/fonts"));

        assert!(renderer.render(&document(1)).is_ok());
    }

    #[test]
    fn should_render_every_page_of_long_list() {
        let renderer = ShoppingListRendererPdf::new(FontSet::builtin());
        let short = renderer.render(&document(5)).unwrap();
        let long_document = document(80);
        assert!(long_document.pages.len() > 1);

        let long = renderer.render(&long_document).unwrap();

        assert!(long.len() > short.len());
    }

    fn document_with(rows: Vec<CartAggregateRow>) -> ShoppingListDocument {
        ShoppingListDocument::compose(&rows, Utc.with_ymd_and_hms(2024, 5, 1, 9, 30, 0).unwrap())
    }

    #[test]
    fn should_encode_latin_text_with_builtin_font() {
        assert!("1. Crème fraîche — 200 g".chars().all(is_win_ansi));
        assert!("Foodgram | Generated: 01.05.2024 09:30".chars().all(is_win_ansi));
    }

    #[test]
    fn should_not_encode_cyrillic_with_builtin_font() {
        assert!(!is_win_ansi('М'));
        assert!(!"1. Мука — 500 г".chars().all(is_win_ansi));
    }

    #[test]
    fn should_count_lines_the_builtin_font_cannot_print() {
        let document = document_with(vec![
            CartAggregateRow::new("Flour", "g", 500),
            CartAggregateRow::new("Мука", "г", 100),
            CartAggregateRow::new("Соль", "г", 5),
        ]);

        assert_eq!(lines_missing_glyphs(&document, |_| true), 2);
        assert_eq!(lines_missing_glyphs(&document, |_| false), 0);
    }

    #[test]
    fn should_ignore_lines_drawn_with_embedded_font() {
        let document = document_with(vec![CartAggregateRow::new("Мука", "г", 100)]);

        let count = lines_missing_glyphs(&document, |line| line.weight == FontWeight::Bold);

        assert_eq!(count, 0);
    }

    #[test]
    fn should_still_render_cyrillic_with_builtin_fonts() {
        let renderer = ShoppingListRendererPdf::new(FontSet::builtin());
        let document = document_with(vec![CartAggregateRow::new("Мука", "г", 100)]);

        let bytes = renderer.render(&document).unwrap();

        assert!(bytes.starts_with(b"%PDF"));
    }
}
