pub mod format;
pub mod locale;
pub mod random;
pub mod theme;
pub mod timing;
