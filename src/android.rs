//! JNI bindings for Android.
//!
//! These functions are called from Kotlin via the JNI bridge.

use jni::objects::{JClass, JString};
use jni::sys::{jboolean, jstring, JNI_TRUE};
use jni::JNIEnv;

use crate::{render_circle_from_name, render_fretboard_from_names, render_page_from_json, Result};

fn read_string(env: &mut JNIEnv, value: &JString) -> Option<String> {
    if value.is_null() {
        return None;
    }
    env.get_string(value).ok().map(|s| s.into())
}

fn to_jstring(env: &mut JNIEnv, result: Result<String>) -> jstring {
    match result {
        Ok(svg) => match env.new_string(&svg) {
            Ok(js) => js.into_raw(),
            Err(_) => std::ptr::null_mut(),
        },
        Err(e) => {
            tracing::warn!("render failed: {e}");
            std::ptr::null_mut()
        }
    }
}

/// Render the fretboard for the given selections.
///
/// Called from Kotlin as:
///   external fun renderFretboard(key: String, scale: String, orientation: String, showNoteNames: Boolean): String?
#[no_mangle]
pub extern "system" fn Java_com_scalar_app_Scalar_renderFretboard(
    mut env: JNIEnv,
    _class: JClass,
    key: JString,
    scale: JString,
    orientation: JString,
    show_note_names: jboolean,
) -> jstring {
    let (Some(key), Some(scale), Some(orientation)) = (
        read_string(&mut env, &key),
        read_string(&mut env, &scale),
        read_string(&mut env, &orientation),
    ) else {
        return std::ptr::null_mut();
    };

    let result = render_fretboard_from_names(&key, &scale, &orientation, show_note_names == JNI_TRUE);
    to_jstring(&mut env, result)
}

/// Render the circle-of-fifths key selector.
///
/// Called from Kotlin as:
///   external fun renderCircle(key: String): String?
#[no_mangle]
pub extern "system" fn Java_com_scalar_app_Scalar_renderCircle(
    mut env: JNIEnv,
    _class: JClass,
    key: JString,
) -> jstring {
    let Some(key) = read_string(&mut env, &key) else {
        return std::ptr::null_mut();
    };
    let result = render_circle_from_name(&key);
    to_jstring(&mut env, result)
}

/// Render the full page from saved-settings JSON.
///
/// Called from Kotlin as:
///   external fun renderPage(stateJson: String): String?
#[no_mangle]
pub extern "system" fn Java_com_scalar_app_Scalar_renderPage(
    mut env: JNIEnv,
    _class: JClass,
    state_json: JString,
) -> jstring {
    let Some(json) = read_string(&mut env, &state_json) else {
        return std::ptr::null_mut();
    };
    let result = render_page_from_json(&json);
    to_jstring(&mut env, result)
}
