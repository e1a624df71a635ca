pub mod html;
pub mod report;

pub use html::{editor_page, export_page, index_page};
pub use report::{render_text_report, report_file_name};
