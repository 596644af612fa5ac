use failure::Fail;

#[derive(Fail, Debug)]
pub enum RevMapError {
    #[fail(display = "{}", _0)]
    Serde(#[cause] serde_json::Error),
    #[fail(display = "Expected a JSON array")]
    ExpectedArray,
}

impl From<serde_json::Error> for RevMapError {
    fn from(err: serde_json::Error) -> Self {
        RevMapError::Serde(err)
    }
}

pub type Result<T> = std::result::Result<T, RevMapError>;
