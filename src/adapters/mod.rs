// Adapters layer: concrete review source and report writer.

pub mod http_source;
pub mod xlsx_writer;

pub use http_source::HttpReviewSource;
pub use xlsx_writer::XlsxReportWriter;
