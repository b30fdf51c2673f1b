use std::io::Result;
use std::mem::MaybeUninit;
use std::ptr::from_mut;
use std::sync::OnceLock;

use windows_sys::Win32::Foundation::{INVALID_HANDLE_VALUE, MAX_PATH};
use windows_sys::Win32::Globalization::CP_UTF8;
use windows_sys::Win32::System::Console::{self, CONSOLE_SCREEN_BUFFER_INFO, COORD};

use super::into_result::IntoResult;
use crate::style::{Attribute, Style};
use crate::term::Stream;

type RawHandle = windows_sys::Win32::Foundation::HANDLE;

/// The attribute word in effect before the first change on this process.
///
/// Captured lazily right before the first attribute mutation and consulted by
/// every reset thereafter. A reset before any mutation has nothing to restore
/// and is a no-op.
static DEFAULT_ATTRIBUTES: OnceLock<u16> = OnceLock::new();

/// Resolve the console buffer handle for a standard stream.
fn handle(stream: Stream) -> Result<RawHandle> {
    let id = match stream {
        Stream::Stdout => Console::STD_OUTPUT_HANDLE,
        Stream::Stderr => Console::STD_ERROR_HANDLE,
    };

    let handle = unsafe { Console::GetStdHandle(id) };
    if handle == INVALID_HANDLE_VALUE || handle.is_null() {
        Err(std::io::Error::last_os_error())
    } else {
        Ok(handle)
    }
}

fn buffer_info(handle: RawHandle) -> Result<CONSOLE_SCREEN_BUFFER_INFO> {
    let mut info = MaybeUninit::<CONSOLE_SCREEN_BUFFER_INFO>::uninit();
    unsafe { Console::GetConsoleScreenBufferInfo(handle, info.as_mut_ptr()) }.into_result()?;
    // The call filled in the struct, which is plain data.
    Ok(unsafe { info.assume_init() })
}

/// Determine whether the stream is connected to a console.
///
/// A redirected standard stream still has a `GetStdHandle` handle, but the
/// mode query only succeeds for an actual console buffer.
pub(crate) fn is_tty(stream: Stream) -> bool {
    let Ok(handle) = handle(stream) else {
        return false;
    };

    let mut mode = 0;
    unsafe { Console::GetConsoleMode(handle, from_mut(&mut mode)) != 0 }
}

/// Apply the formatting codes to the console's attribute word, in order.
///
/// Each code that fails, e.g., because the buffer info query errors, is
/// skipped on its own and leaves the attributes from the codes before it
/// intact.
pub(crate) fn apply_styles(stream: Stream, styles: &[Style]) {
    let Ok(handle) = handle(stream) else {
        return;
    };

    for style in styles {
        let _ = apply_attribute(handle, style.attribute());
    }
}

fn apply_attribute(handle: RawHandle, change: Attribute) -> Result<()> {
    let (mask, bits) = match change {
        Attribute::Reset => {
            if let Some(default) = DEFAULT_ATTRIBUTES.get() {
                unsafe { Console::SetConsoleTextAttribute(handle, *default) }.into_result()?;
            }
            return Ok(());
        }
        Attribute::Foreground(bits) => (0x000f_u16, bits),
        Attribute::Background(bits) => (0x00f0_u16, bits),
    };

    let current = buffer_info(handle)?.wAttributes;
    DEFAULT_ATTRIBUTES.get_or_init(|| current);
    unsafe { Console::SetConsoleTextAttribute(handle, (current & !mask) | bits) }
        .into_result()?;
    Ok(())
}

/// Blank the visible buffer and home the cursor.
pub(crate) fn clear(stream: Stream) {
    let _ = try_clear(stream);
}

fn try_clear(stream: Stream) -> Result<()> {
    let handle = handle(stream)?;
    let home = COORD { X: 0, Y: 0 };

    let info = buffer_info(handle)?;
    let size = (info.dwSize.X as u32).wrapping_mul(info.dwSize.Y as u32);

    let mut written = 0;
    unsafe {
        Console::FillConsoleOutputCharacterW(handle, b' ' as u16, size, home, from_mut(&mut written))
    }
    .into_result()?;

    // Re-read the attributes right before blanking them in as well.
    let info = buffer_info(handle)?;
    unsafe {
        Console::FillConsoleOutputAttribute(
            handle,
            info.wAttributes,
            size,
            home,
            from_mut(&mut written),
        )
    }
    .into_result()?;

    unsafe { Console::SetConsoleCursorPosition(handle, home) }.into_result()?;
    Ok(())
}

/// Move the cursor to column `x` of row `y`.
pub(crate) fn move_to(stream: Stream, x: u16, y: u16) {
    let Ok(handle) = handle(stream) else {
        return;
    };

    let position = COORD {
        X: x as i16,
        Y: y as i16,
    };
    let _ = unsafe { Console::SetConsoleCursorPosition(handle, position) }.into_result();
}

/// Set the console title, reporting whether the OS accepted it.
pub(crate) fn set_title(title: &str) -> bool {
    let wide: Vec<u16> = title.encode_utf16().chain(core::iter::once(0)).collect();
    unsafe { Console::SetConsoleTitleW(wide.as_ptr()) != 0 }
}

/// Get the console title, or the empty string when the query fails.
pub(crate) fn title() -> String {
    let mut buffer = [0_u16; MAX_PATH as usize];
    let length = unsafe { Console::GetConsoleTitleW(buffer.as_mut_ptr(), MAX_PATH) };
    String::from_utf16_lossy(&buffer[..length as usize])
}

/// Switch the console input and output code pages to UTF-8. Best effort.
pub(crate) fn use_utf8() {
    let _ = unsafe { Console::SetConsoleCP(CP_UTF8) }.into_result();
    let _ = unsafe { Console::SetConsoleOutputCP(CP_UTF8) }.into_result();
}
