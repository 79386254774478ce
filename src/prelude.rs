pub use crate::domain::contact::Field;
pub use crate::errors::AppError;
pub use crate::store::TxtStore;
