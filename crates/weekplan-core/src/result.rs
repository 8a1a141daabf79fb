use crate::error::WeekplanError;

pub type WeekplanResult<T> = Result<T, WeekplanError>;
