use std::cell::RefCell;
use std::ffi::CString;
use std::os::raw::c_char;
use std::ptr;

/// Common interface for FFI error types.
///
/// This trait provides a unified way to handle errors across the FFI boundary,
/// allowing both simple error codes and custom error messages.
///
/// # Design
/// - `code()` - Returns the error code to be passed across FFI boundary
/// - `msg()` - Returns the error message for diagnostic purposes
pub(crate) trait LodMathError {
    /// Returns the error code to be returned across the FFI boundary.
    fn code(&self) -> LodMathErrorCode;

    /// Returns the human-readable error message.
    fn msg(&self) -> &str;
}

/// Default implementation of `LodMathError` for common FFI error scenarios.
///
/// This struct wraps a `LodMathErrorCode` and provides convenient constructors
/// for each error type (except Ok, which represents success).
#[derive(Debug)]
pub(crate) struct DefaultLodMathError {
    code: LodMathErrorCode,
    msg: String,
}

impl DefaultLodMathError {
    /// Create error for null pointer passed where non-null required.
    ///
    /// # Arguments
    /// * `param_name` - The name of the parameter that was null (e.g., `"src"`, `"points"`)
    pub fn null_pointer(param_name: &str) -> Self {
        Self {
            code: LodMathErrorCode::NullPointer,
            msg: format!("Parameter '{param_name}' cannot be null"),
        }
    }

    /// Create error for a buffer length that cannot be addressed.
    ///
    /// # Arguments
    /// * `param_name` - The name of the length parameter (e.g., `"count"`)
    /// * `value` - The rejected length
    /// * `max` - The largest element count the buffer type allows
    pub fn invalid_length(param_name: &str, value: usize, max: usize) -> Self {
        Self {
            code: LodMathErrorCode::InvalidLength,
            msg: format!("Parameter '{param_name}' exceeds addressable maximum {max}, got {value}"),
        }
    }
}

impl LodMathError for DefaultLodMathError {
    fn code(&self) -> LodMathErrorCode {
        self.code
    }

    fn msg(&self) -> &str {
        &self.msg
    }
}

/// FFI error codes returned by fallible vector functions.
/// Follows standard C convention: 0 = success, non-zero = error.
#[repr(C)]
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LodMathErrorCode {
    /// Operation completed successfully.
    Ok = 0,

    /// Invalid pointer: null pointer passed where non-null required.
    NullPointer = 1,

    /// Invalid length: element count too large for the buffer to be addressed.
    InvalidLength = 2,
}

thread_local! {
    /// Thread-local storage for the most recent FFI error (C string, error code).
    /// The CString is stored so the pointer handed out by `lod_math_get_last_error`
    /// stays valid until the next fallible call on this thread.
    static LAST_ERROR: RefCell<(Option<CString>, LodMathErrorCode)> = const { RefCell::new((None, LodMathErrorCode::Ok)) };
}

/// Internal helper to read `LAST_ERROR` thread-local storage (cstring, code).
pub(crate) fn with_last_error<F, R>(f: F) -> R
where
    F: FnOnce(&(Option<CString>, LodMathErrorCode)) -> R,
{
    LAST_ERROR.with_borrow(f)
}

/// Internal helper to mutate `LAST_ERROR` thread-local storage (cstring, code).
pub(crate) fn with_last_error_mut<F, R>(f: F) -> R
where
    F: FnOnce(&mut (Option<CString>, LodMathErrorCode)) -> R,
{
    LAST_ERROR.with_borrow_mut(f)
}

/// Retrieve the most recent FFI error message as a null-terminated C string.
///
/// Returns:
/// - A borrowed pointer to the error message if an error occurred.
/// - `null` if the last fallible call on this thread succeeded.
///
/// # Thread Safety
/// Error messages are stored per-thread (thread-local storage), so this is thread-safe.
/// Each thread has its own independent error state.
///
/// # Lifetime
/// The returned pointer is valid until:
/// - The next fallible FFI call on this thread
/// - The thread terminates
///
/// **DO NOT FREE THIS POINTER** - it is managed internally.
///
/// Example:
/// ```cpp
/// LodMathErrorCode err = lod_vec3d_to_float3_batch(positions, out, count);
/// if (err != LodMathErrorCode::Ok) {
///     const char* error = lod_math_get_last_error();
///     if (error) {
///         printf("Narrowing failed: %s\n", error);
///     }
/// }
/// ```
#[no_mangle]
pub extern "C" fn lod_math_get_last_error() -> *const c_char {
    with_last_error(|(cstring, _code)| cstring.as_ref().map_or(ptr::null(), |cs| cs.as_ptr()))
}

/// Retrieve the most recent FFI error code.
///
/// Returns:
/// - `LodMathErrorCode::Ok` (0) if the last fallible call succeeded
/// - The specific error code from the last failed operation
#[no_mangle]
pub extern "C" fn lod_math_get_last_error_code() -> LodMathErrorCode {
    with_last_error(|(_cstring, code)| *code)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_null_pointer_error_names_parameter() {
        let err = DefaultLodMathError::null_pointer("dst");
        assert_eq!(err.code(), LodMathErrorCode::NullPointer);
        assert_eq!(err.msg(), "Parameter 'dst' cannot be null");
    }

    #[test]
    fn test_invalid_length_error_reports_limit() {
        let err = DefaultLodMathError::invalid_length("count", 10, 4);
        assert_eq!(err.code(), LodMathErrorCode::InvalidLength);
        assert_eq!(err.msg(), "Parameter 'count' exceeds addressable maximum 4, got 10");
    }

    #[test]
    fn test_no_error_recorded_on_fresh_thread() {
        std::thread::spawn(|| {
            assert_eq!(lod_math_get_last_error_code(), LodMathErrorCode::Ok);
            assert!(lod_math_get_last_error().is_null());
        })
        .join()
        .unwrap();
    }
}
