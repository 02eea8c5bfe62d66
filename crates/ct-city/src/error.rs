//! City-subsystem error type.

use thiserror::Error;

use ct_core::CoreError;

/// Errors produced by `ct-city`.
#[derive(Debug, Error, PartialEq)]
pub enum CityError {
    #[error(transparent)]
    Core(#[from] CoreError),

    #[error("district {district_width}x{district_height} does not fit in a {width}x{height} city")]
    DistrictTooLarge {
        width:           u32,
        height:          u32,
        district_width:  u32,
        district_height: u32,
    },
}

pub type CityResult<T> = Result<T, CityError>;
