// C ABI for hosts that embed the translator.
// Null or non-UTF-8 strings are treated as empty input, and panics are
// caught before they reach the caller.
use crate::NameTranslator;
use libc::c_char;
use std::ffi::{CStr, CString};
use std::panic::{catch_unwind, AssertUnwindSafe};
use std::ptr;
use std::sync::{Mutex, MutexGuard};

static NAME_TRANSLATOR: Mutex<Option<NameTranslator>> = Mutex::new(None);

fn translator<'a>() -> MutexGuard<'a, Option<NameTranslator>> {
    // A panic while holding the lock leaves the data intact; keep using it.
    NAME_TRANSLATOR.lock().unwrap_or_else(|poisoned| poisoned.into_inner())
}

/// Borrows a C string, mapping null and invalid UTF-8 to "".
///
/// # Safety
/// `s` must be null or point to a NUL-terminated string that outlives `'a`.
unsafe fn str_arg<'a>(s: *const c_char) -> &'a str {
    if s.is_null() {
        return "";
    }
    CStr::from_ptr(s).to_str().unwrap_or("")
}

fn into_c_string(s: String) -> *mut c_char {
    // Interior NULs cannot cross the boundary; the output never has them
    // unless the input did.
    let bytes: Vec<u8> = s.into_bytes().into_iter().filter(|&b| b != 0).collect();
    match CString::new(bytes) {
        Ok(c) => c.into_raw(),
        Err(_) => ptr::null_mut(),
    }
}

/// Initializes the shared translator, loading learned names from `path`
/// when it is non-null.
///
/// # Safety
/// `path` must be null or a valid NUL-terminated string.
#[no_mangle]
pub unsafe extern "C" fn arabic_names_init(path: *const c_char) {
    let path = str_arg(path).to_string();
    let result = catch_unwind(|| {
        let mut slot = translator();
        if slot.is_some() {
            return;
        }
        let engine = if path.is_empty() {
            NameTranslator::new()
        } else {
            NameTranslator::from_file_or_new(&path)
        };
        *slot = Some(engine);
        tracing::info!("name translator initialized");
    });
    if result.is_err() {
        tracing::error!("panic during name translator initialization");
    }
}

/// Saves learned names and drops the shared translator.
#[no_mangle]
pub extern "C" fn arabic_names_destroy() {
    let _ = catch_unwind(|| {
        if let Some(engine) = translator().take() {
            if let Err(e) = engine.save_dictionary() {
                tracing::error!(error = %e, "failed to save learned names");
            }
        }
    });
}

fn with_translator<T>(f: impl FnOnce(&NameTranslator) -> T) -> T {
    match translator().as_ref() {
        Some(engine) => f(engine),
        None => f(&NameTranslator::new()),
    }
}

/// Returns a newly allocated string; release it with `arabic_names_free_string`.
///
/// # Safety
/// `name` must be null or a valid NUL-terminated string.
#[no_mangle]
pub unsafe extern "C" fn arabic_names_translate(name: *const c_char) -> *mut c_char {
    let name = str_arg(name);
    let result = catch_unwind(AssertUnwindSafe(|| with_translator(|t| t.translate(name))));
    into_c_string(result.unwrap_or_else(|_| {
        tracing::error!("panic in translate");
        String::new()
    }))
}

/// # Safety
/// `text` must be null or a valid NUL-terminated string.
#[no_mangle]
pub unsafe extern "C" fn arabic_names_clean(text: *const c_char) -> *mut c_char {
    let text = str_arg(text);
    into_c_string(catch_unwind(|| crate::clean(text)).unwrap_or_default())
}

/// # Safety
/// `text` must be null or a valid NUL-terminated string.
#[no_mangle]
pub unsafe extern "C" fn arabic_names_is_arabic(text: *const c_char) -> bool {
    let text = str_arg(text);
    catch_unwind(|| crate::is_arabic(text)).unwrap_or(false)
}

/// Records a confirmed translation. Returns false if nothing was stored.
///
/// # Safety
/// Both arguments must be null or valid NUL-terminated strings.
#[no_mangle]
pub unsafe extern "C" fn arabic_names_confirm(arabic: *const c_char, english: *const c_char) -> bool {
    let arabic = str_arg(arabic);
    let english = str_arg(english);
    catch_unwind(AssertUnwindSafe(|| {
        translator()
            .as_mut()
            .map(|engine| engine.user_confirms(arabic, english))
            .unwrap_or(false)
    }))
    .unwrap_or(false)
}

/// # Safety
/// `s` must be null or a pointer returned by this library.
#[no_mangle]
pub unsafe extern "C" fn arabic_names_free_string(s: *mut c_char) {
    if !s.is_null() {
        drop(CString::from_raw(s));
    }
}
