//! Presentation of finished plans: plain text blocks and a PDF document.

pub mod ascii;
mod metrics;
pub mod pdf;
pub mod text;

pub use ascii::to_ascii;
pub use pdf::{build_itinerary_pdf, layout_itinerary, PdfLayout};
pub use text::{
    day_header, format_day_block, format_focus_text, normalize_theme_label, pdf_file_name,
    render_plan_text,
};
