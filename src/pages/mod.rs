mod home;
mod report_issue;

pub use home::HomePage;
pub use report_issue::ReportIssuePage;
