mod html_directory;

pub use html_directory::HtmlDirectoryPresenter;
