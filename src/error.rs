#[derive(Debug, thiserror::Error)]
pub enum Error {
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
    #[error("SVG parse error: {0}")]
    SvgParse(String),
    #[error("SVG path parse error: {0}")]
    PathParse(String),
}
