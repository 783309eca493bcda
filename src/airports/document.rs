/// Extraction of airport rows from the listing page.
///
/// The join only needs "the airport rows, in page order, with their three
/// texts", so that is the whole of [`AirportDocument`]. [`HtmlAirportPage`]
/// answers it from parsed HTML; tests answer it from plain vectors.
use scraper::{ElementRef, Html};

/// Class marking the cell that identifies a row as an airport entry.
pub const AIRPORT_NAME_CLASS: &str = "airport-name";

/// Exact `class` attribute of the fixed-position cell holding the IATA code.
pub const IATA_CELL_CLASS: &str = "tc td-width-60";

/// Raw texts of one airport row. Each is `None` if the sub-element is missing.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ScrapedRow {
    /// Text of the first `<span>` in the row.
    pub city: Option<String>,
    /// Text of the first `<a>` in the row.
    pub name: Option<String>,
    /// Text of the first cell whose `class` is exactly [`IATA_CELL_CLASS`].
    pub iata: Option<String>,
}

/// Read-only view of an airport listing.
pub trait AirportDocument {
    /// Every table row carrying an [`AIRPORT_NAME_CLASS`] element, in document order.
    /// Header and decorative rows are not returned.
    fn airport_rows(&self) -> Vec<ScrapedRow>;
}

impl AirportDocument for Vec<ScrapedRow> {
    fn airport_rows(&self) -> Vec<ScrapedRow> {
        self.clone()
    }
}

/// A parsed airport listing page.
pub struct HtmlAirportPage {
    html: Html,
}

impl HtmlAirportPage {
    #[must_use]
    pub fn parse(body: &str) -> Self {
        Self {
            html: Html::parse_document(body),
        }
    }
}

impl AirportDocument for HtmlAirportPage {
    fn airport_rows(&self) -> Vec<ScrapedRow> {
        descendant_elements(self.html.root_element())
            .filter(|el| el.value().name() == "tr" && inside_table(*el))
            .filter(|row| descendant_elements(*row).any(|el| has_class(el, AIRPORT_NAME_CLASS)))
            .map(|row| ScrapedRow {
                city: first_text(row, |el| el.value().name() == "span"),
                name: first_text(row, |el| el.value().name() == "a"),
                iata: first_text(row, |el| el.value().attr("class") == Some(IATA_CELL_CLASS)),
            })
            .collect()
    }
}

fn descendant_elements(root: ElementRef<'_>) -> impl Iterator<Item = ElementRef<'_>> {
    root.descendants().skip(1).filter_map(ElementRef::wrap)
}

fn inside_table(el: ElementRef<'_>) -> bool {
    el.ancestors()
        .filter_map(ElementRef::wrap)
        .any(|a| a.value().name() == "table")
}

fn has_class(el: ElementRef<'_>, class: &str) -> bool {
    el.value().classes().any(|c| c == class)
}

/// Trimmed text of the first descendant matching `pred`.
fn first_text(row: ElementRef<'_>, pred: impl Fn(ElementRef<'_>) -> bool) -> Option<String> {
    descendant_elements(row)
        .find(|el| pred(*el))
        .map(|el| el.text().collect::<String>().trim().to_owned())
}
