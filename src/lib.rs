//! scalar — mandolin scale visualizer.
//!
//! Computes scale membership over the chromatic notes and maps it onto a
//! circle-of-fifths key selector and a fretboard diagram, both rendered as
//! self-contained SVG.
//!
//! # Example
//! ```
//! use scalar::{render_fretboard_svg, Note, Orientation, ScaleType};
//!
//! let svg = render_fretboard_svg(Note::D, ScaleType::Major, Orientation::Horizontal, true);
//! assert!(svg.starts_with("<svg"));
//! ```

pub mod error;
pub mod fretboard;
pub mod renderer;
pub mod settings;
pub mod state;
pub mod theory;

#[cfg(target_os = "android")]
pub mod android;

pub use error::{Result, ScalarError};
pub use fretboard::{generate_fretboard_notes, FretNote, Instrument, FRET_COUNT, MANDOLIN_TUNING};
pub use renderer::{
    key_at_point, render_circle_of_fifths_svg, render_fretboard_svg, render_page_svg,
    render_state_to_svg,
};
pub use settings::{load_state, save_state, FileStore, MemoryStore, SettingsStore, STORAGE_KEY};
pub use state::{AppState, Orientation};
pub use theory::*;

/// Parse the string form of a state's fields and render the fretboard.
/// Used by the FFI layers, which only pass strings across.
pub fn render_fretboard_from_names(
    key: &str,
    scale: &str,
    orientation: &str,
    show_note_names: bool,
) -> Result<String> {
    let state = AppState {
        key: key.parse()?,
        scale: scale.parse()?,
        orientation: orientation.parse()?,
        show_note_names,
    };
    Ok(render_state_to_svg(&state))
}

/// Render the circle of fifths for a key given by name.
pub fn render_circle_from_name(key: &str) -> Result<String> {
    Ok(render_circle_of_fifths_svg(key.parse()?))
}

/// Render the full page from saved-settings JSON, merged over defaults.
pub fn render_page_from_json(state_json: &str) -> Result<String> {
    let state = AppState::from_json_merged(state_json)?;
    Ok(render_page_svg(&state))
}

/// Fretboard notes for a state, as JSON. Useful for hosts that draw
/// the diagram themselves.
pub fn fret_notes_to_json(root: Note, scale: ScaleType) -> Result<String> {
    Ok(serde_json::to_string_pretty(&generate_fretboard_notes(root, scale))?)
}

// ═══════════════════════════════════════════════════════════════════════
// C FFI — for iOS (static library) and Android (JNI)
// ═══════════════════════════════════════════════════════════════════════

use std::ffi::{CStr, CString};
use std::os::raw::c_char;

/// Borrow a C string as `&str`, or `None` if null or not UTF-8.
///
/// # Safety
/// `ptr` must be null or a valid null-terminated C string.
unsafe fn c_str<'a>(ptr: *const c_char) -> Option<&'a str> {
    if ptr.is_null() {
        return None;
    }
    unsafe { CStr::from_ptr(ptr) }.to_str().ok()
}

fn into_c_string(result: Result<String>) -> *mut c_char {
    match result {
        Ok(svg) => CString::new(svg).unwrap_or_default().into_raw(),
        Err(e) => {
            tracing::warn!("render failed: {e}");
            std::ptr::null_mut()
        }
    }
}

/// Render the fretboard and return SVG as a C string.
/// The caller must free the returned string with `scalar_free_string`.
///
/// Returns null if any name is null or unrecognised.
///
/// # Safety
/// `key`, `scale` and `orientation` must be valid null-terminated UTF-8 C strings.
#[no_mangle]
pub unsafe extern "C" fn scalar_render_fretboard(
    key: *const c_char,
    scale: *const c_char,
    orientation: *const c_char,
    show_note_names: bool,
) -> *mut c_char {
    let (Some(key), Some(scale), Some(orientation)) =
        (unsafe { c_str(key) }, unsafe { c_str(scale) }, unsafe { c_str(orientation) })
    else {
        return std::ptr::null_mut();
    };
    into_c_string(render_fretboard_from_names(key, scale, orientation, show_note_names))
}

/// Render the circle of fifths and return SVG as a C string.
/// The caller must free the returned string with `scalar_free_string`.
///
/// # Safety
/// `key` must be a valid null-terminated UTF-8 C string.
#[no_mangle]
pub unsafe extern "C" fn scalar_render_circle(key: *const c_char) -> *mut c_char {
    match unsafe { c_str(key) } {
        Some(key) => into_c_string(render_circle_from_name(key)),
        None => std::ptr::null_mut(),
    }
}

/// Render the full page from settings JSON and return SVG as a C string.
/// The caller must free the returned string with `scalar_free_string`.
///
/// # Safety
/// `state_json` must be a valid null-terminated UTF-8 C string.
#[no_mangle]
pub unsafe extern "C" fn scalar_render_page(state_json: *const c_char) -> *mut c_char {
    match unsafe { c_str(state_json) } {
        Some(json) => into_c_string(render_page_from_json(json)),
        None => std::ptr::null_mut(),
    }
}

/// Free a string previously returned by scalar functions.
///
/// # Safety
/// `ptr` must be a string previously returned by a scalar function, or null.
#[no_mangle]
pub unsafe extern "C" fn scalar_free_string(ptr: *mut c_char) {
    if !ptr.is_null() {
        unsafe {
            let _ = CString::from_raw(ptr);
        }
    }
}
