//! C-ABI FFI bindings for cross-language integration.
//!
//! This module provides a C-compatible API for using unstyle from other
//! languages such as C#, Python, and Node.js.

use std::ffi::{c_char, CStr, CString};
use std::ptr;

use crate::render::{self, ConvertOptions};

/// Result structure returned by FFI functions.
#[repr(C)]
pub struct UnstyleResult {
    /// Whether the operation succeeded.
    pub success: bool,
    /// The result data (null if failed). Must be freed with `unstyle_free_result`.
    pub data: *mut c_char,
    /// Error message (null if succeeded). Must be freed with `unstyle_free_result`.
    pub error: *mut c_char,
}

impl UnstyleResult {
    fn success(data: String) -> Self {
        Self {
            success: true,
            data: CString::new(data).unwrap_or_default().into_raw(),
            error: ptr::null_mut(),
        }
    }

    fn error(message: String) -> Self {
        Self {
            success: false,
            data: ptr::null_mut(),
            error: CString::new(message).unwrap_or_default().into_raw(),
        }
    }
}

/// Options for conversion via FFI.
#[repr(C)]
pub struct UnstyleOptions {
    /// Replace leading bullet glyphs with `-`.
    pub normalize_bullets: bool,
    /// Emit fenced code blocks for runs of monospace-only lines.
    pub detect_code_blocks: bool,
    /// Minimum run length for a fenced code block (0 = default).
    pub min_code_block_lines: u32,
}

impl Default for UnstyleOptions {
    fn default() -> Self {
        Self {
            normalize_bullets: true,
            detect_code_blocks: true,
            min_code_block_lines: 0,
        }
    }
}

impl From<&UnstyleOptions> for ConvertOptions {
    fn from(options: &UnstyleOptions) -> Self {
        let mut converted = ConvertOptions::new()
            .with_bullets(options.normalize_bullets)
            .with_code_blocks(options.detect_code_blocks);
        if options.min_code_block_lines > 0 {
            converted = converted.with_min_code_block_lines(options.min_code_block_lines as usize);
        }
        converted
    }
}

unsafe fn read_text<'a>(text: *const c_char) -> Result<&'a str, UnstyleResult> {
    if text.is_null() {
        return Err(UnstyleResult::error("Text cannot be null".to_string()));
    }
    CStr::from_ptr(text)
        .to_str()
        .map_err(|_| UnstyleResult::error("Invalid UTF-8 text".to_string()))
}

/// Convert styled text to Markdown.
///
/// # Safety
///
/// The `text` must be a valid null-terminated UTF-8 string.
/// The returned result must be freed with `unstyle_free_result`.
#[no_mangle]
pub unsafe extern "C" fn unstyle_convert(text: *const c_char) -> UnstyleResult {
    match read_text(text) {
        Ok(text) => UnstyleResult::success(crate::convert(text)),
        Err(result) => result,
    }
}

/// Convert styled text to Markdown with options.
///
/// # Safety
///
/// The `text` must be a valid null-terminated UTF-8 string.
/// The returned result must be freed with `unstyle_free_result`.
#[no_mangle]
pub unsafe extern "C" fn unstyle_convert_with_options(
    text: *const c_char,
    options: UnstyleOptions,
) -> UnstyleResult {
    match read_text(text) {
        Ok(text) => {
            let options = ConvertOptions::from(&options);
            UnstyleResult::success(render::to_markdown(text, &options))
        }
        Err(result) => result,
    }
}

/// Convert styled text and return statistics as JSON.
///
/// # Safety
///
/// The `text` must be a valid null-terminated UTF-8 string.
/// The returned result must be freed with `unstyle_free_result`.
#[no_mangle]
pub unsafe extern "C" fn unstyle_convert_json(text: *const c_char) -> UnstyleResult {
    let text = match read_text(text) {
        Ok(text) => text,
        Err(result) => return result,
    };

    let result = render::to_markdown_with_stats(text, &ConvertOptions::default());
    match serde_json::to_string(&result) {
        Ok(json) => UnstyleResult::success(json),
        Err(e) => UnstyleResult::error(e.to_string()),
    }
}

/// Free a result returned by any unstyle function.
///
/// # Safety
///
/// The `result` must have been returned by an unstyle function.
/// This function should only be called once per result.
#[no_mangle]
pub unsafe extern "C" fn unstyle_free_result(result: UnstyleResult) {
    if !result.data.is_null() {
        drop(CString::from_raw(result.data));
    }
    if !result.error.is_null() {
        drop(CString::from_raw(result.error));
    }
}

/// Free a string allocated by unstyle.
///
/// # Safety
///
/// The `ptr` must have been allocated by unstyle.
/// This function should only be called once per pointer.
#[no_mangle]
pub unsafe extern "C" fn unstyle_free_string(ptr: *mut c_char) {
    if !ptr.is_null() {
        drop(CString::from_raw(ptr));
    }
}

/// Get the version of the unstyle library.
///
/// The returned string is statically allocated and should not be freed.
#[no_mangle]
pub extern "C" fn unstyle_version() -> *const c_char {
    static VERSION: &[u8] = concat!(env!("CARGO_PKG_VERSION"), "\0").as_bytes();
    VERSION.as_ptr() as *const c_char
}
