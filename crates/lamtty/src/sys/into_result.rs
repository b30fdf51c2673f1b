use std::io::Result;

/// Trait to convert a console API status code into a Rust result.
///
/// The console functions used by this crate all signal failure with a zero
/// return value and leave the details to `GetLastError`.
pub(crate) trait IntoResult {
    /// The target type.
    type Target;

    /// Convert this status code into a Rust result.
    fn into_result(self) -> Result<Self::Target>;
}

macro_rules! into_result {
    ($source:ty, $target:ty) => {
        impl IntoResult for $source {
            type Target = $target;

            fn into_result(self) -> Result<Self::Target> {
                if self == 0 {
                    Err(std::io::Error::last_os_error())
                } else {
                    Ok(self as Self::Target)
                }
            }
        }
    };
}

into_result!(i32, u32);
into_result!(u32, u32);
