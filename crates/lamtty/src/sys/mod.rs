#[cfg(target_family = "unix")]
mod unix;
#[cfg(target_family = "windows")]
mod into_result;
#[cfg(target_family = "windows")]
mod windows;

#[cfg(target_family = "unix")]
pub(crate) use self::unix::{is_tty, title, use_utf8};
#[cfg(target_family = "windows")]
pub(crate) use self::windows::{
    apply_styles, clear, is_tty, move_to, set_title, title, use_utf8,
};
