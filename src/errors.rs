#[derive(thiserror::Error, Debug)]
pub enum AppErrors {
    #[error("io error: {0}")]
    Io(String),
    #[error("overflow")]
    Overflow,
    #[error("exponent {0} is outside the scale table")]
    ExponentOutOfRange(u32),
    #[error("significand does not describe a value below one")]
    NotAFraction,
    #[error("closed form and refinement disagree at exponent {0}")]
    ScaleMismatch(u32),
}

pub type AppResult<T> = Result<T, AppErrors>;
